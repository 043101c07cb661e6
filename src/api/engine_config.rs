use serde::{Deserialize, Serialize};

use crate::core::candle_layout::{DEFAULT_REFERENCE_CANDLE_SPAN, DEFAULT_WINDOW_WIDTH_RATIO};
use crate::core::date_axis::{
    DEFAULT_LABEL_CADENCE, DEFAULT_LABEL_FREE_OLDEST_RATIO, DateAxisThinning,
};
use crate::core::price_axis::{DEFAULT_GRID_SPACING_CANDIDATES, DEFAULT_PRICE_SWING_RATIO};
use crate::core::range_selector::DEFAULT_OUTLIER_SIGMA;
use crate::error::{ChartError, ChartResult};

/// Layout engine configuration.
///
/// Every field has a serde default, so hosts can persist only the knobs they
/// change. The defaults reproduce the reference 1280×720 chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_reference_width")]
    pub reference_width: u32,
    #[serde(default = "default_reference_height")]
    pub reference_height: u32,
    /// Candle pitch in pixels at `reference_width`.
    #[serde(default = "default_reference_candle_span")]
    pub reference_candle_span: f64,
    /// Share of the viewport width covered by candles.
    #[serde(default = "default_window_width_ratio")]
    pub window_width_ratio: f64,
    #[serde(default = "default_outlier_sigma")]
    pub outlier_sigma: f64,
    /// Share of the viewport height covered by the price band.
    #[serde(default = "default_price_swing_ratio")]
    pub price_swing_ratio: f64,
    #[serde(default = "default_grid_spacing_candidates")]
    pub grid_spacing_candidates: Vec<f64>,
    #[serde(default = "default_label_cadence")]
    pub label_cadence: usize,
    #[serde(default = "default_label_free_oldest_ratio")]
    pub label_free_oldest_ratio: f64,
    /// Space above the band top, as a share of the height.
    #[serde(default = "default_top_margin_ratio")]
    pub top_margin_ratio: f64,
    #[serde(default = "default_date_axis_ratio")]
    pub date_axis_ratio: f64,
    #[serde(default = "default_date_label_ratio")]
    pub date_label_ratio: f64,
    #[serde(default = "default_price_label_gap_ratio")]
    pub price_label_gap_ratio: f64,
    #[serde(default = "default_reference_font_size_pt")]
    pub reference_font_size_pt: f64,
    #[serde(default = "default_min_font_size_pt")]
    pub min_font_size_pt: i64,
    #[serde(default = "default_animation_duration")]
    pub animation_duration: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reference_width: default_reference_width(),
            reference_height: default_reference_height(),
            reference_candle_span: default_reference_candle_span(),
            window_width_ratio: default_window_width_ratio(),
            outlier_sigma: default_outlier_sigma(),
            price_swing_ratio: default_price_swing_ratio(),
            grid_spacing_candidates: default_grid_spacing_candidates(),
            label_cadence: default_label_cadence(),
            label_free_oldest_ratio: default_label_free_oldest_ratio(),
            top_margin_ratio: default_top_margin_ratio(),
            date_axis_ratio: default_date_axis_ratio(),
            date_label_ratio: default_date_label_ratio(),
            price_label_gap_ratio: default_price_label_gap_ratio(),
            reference_font_size_pt: default_reference_font_size_pt(),
            min_font_size_pt: default_min_font_size_pt(),
            animation_duration: default_animation_duration(),
        }
    }
}

impl LayoutConfig {
    /// Parses a JSON config; missing fields fall back to defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse layout config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout config: {e}"))
        })
    }

    /// Sets the reference viewport the candle pitch is scaled from.
    #[must_use]
    pub fn with_reference_viewport(mut self, width: u32, height: u32) -> Self {
        self.reference_width = width;
        self.reference_height = height;
        self
    }

    #[must_use]
    pub fn with_reference_candle_span(mut self, span: f64) -> Self {
        self.reference_candle_span = span;
        self
    }

    #[must_use]
    pub fn with_outlier_sigma(mut self, sigma: f64) -> Self {
        self.outlier_sigma = sigma;
        self
    }

    #[must_use]
    pub fn with_grid_spacing_candidates(mut self, candidates: Vec<f64>) -> Self {
        self.grid_spacing_candidates = candidates;
        self
    }

    #[must_use]
    pub fn with_label_thinning(mut self, cadence: usize, label_free_oldest_ratio: f64) -> Self {
        self.label_cadence = cadence;
        self.label_free_oldest_ratio = label_free_oldest_ratio;
        self
    }

    #[must_use]
    pub fn date_axis_thinning(&self) -> DateAxisThinning {
        DateAxisThinning {
            label_cadence: self.label_cadence,
            label_free_oldest_ratio: self.label_free_oldest_ratio,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.reference_width == 0 || self.reference_height == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.reference_width,
                height: self.reference_height,
            });
        }

        for (name, value) in [
            ("reference_candle_span", self.reference_candle_span),
            ("window_width_ratio", self.window_width_ratio),
            ("outlier_sigma", self.outlier_sigma),
            ("price_swing_ratio", self.price_swing_ratio),
            ("reference_font_size_pt", self.reference_font_size_pt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("label_free_oldest_ratio", self.label_free_oldest_ratio),
            ("top_margin_ratio", self.top_margin_ratio),
            ("date_axis_ratio", self.date_axis_ratio),
            ("date_label_ratio", self.date_label_ratio),
            ("price_label_gap_ratio", self.price_label_gap_ratio),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and in [0, 1]"
                )));
            }
        }

        if self.grid_spacing_candidates.is_empty()
            || self
                .grid_spacing_candidates
                .iter()
                .any(|spacing| !spacing.is_finite() || *spacing <= 0.0)
        {
            return Err(ChartError::InvalidData(
                "grid spacing candidates must be non-empty, finite and > 0".to_owned(),
            ));
        }

        if self.label_cadence == 0 {
            return Err(ChartError::InvalidData(
                "label cadence must be >= 1".to_owned(),
            ));
        }

        Ok(self)
    }
}

fn default_reference_width() -> u32 {
    1280
}

fn default_reference_height() -> u32 {
    720
}

fn default_reference_candle_span() -> f64 {
    DEFAULT_REFERENCE_CANDLE_SPAN
}

fn default_window_width_ratio() -> f64 {
    DEFAULT_WINDOW_WIDTH_RATIO
}

fn default_outlier_sigma() -> f64 {
    DEFAULT_OUTLIER_SIGMA
}

fn default_price_swing_ratio() -> f64 {
    DEFAULT_PRICE_SWING_RATIO
}

fn default_grid_spacing_candidates() -> Vec<f64> {
    DEFAULT_GRID_SPACING_CANDIDATES.to_vec()
}

fn default_label_cadence() -> usize {
    DEFAULT_LABEL_CADENCE
}

fn default_label_free_oldest_ratio() -> f64 {
    DEFAULT_LABEL_FREE_OLDEST_RATIO
}

fn default_top_margin_ratio() -> f64 {
    0.15
}

fn default_date_axis_ratio() -> f64 {
    0.89
}

fn default_date_label_ratio() -> f64 {
    0.9
}

fn default_price_label_gap_ratio() -> f64 {
    0.02
}

fn default_reference_font_size_pt() -> f64 {
    18.0
}

fn default_min_font_size_pt() -> i64 {
    6
}

fn default_animation_duration() -> u32 {
    1000
}
