//! Pure layout math: data model, outlier filtering, axis planning and candle geometry.

pub mod candle;
pub mod candle_layout;
pub mod date_axis;
pub mod price_axis;
pub mod primitives;
pub mod range_selector;
pub mod types;

pub use candle::{Candle, CandleSeries, RawQuote};
pub use candle_layout::{
    BodyGeometry, CandleDirection, CandleGeometry, WickGeometry, candle_count, candle_span,
    compile_candles, display_window,
};
pub use date_axis::{DateAxisThinning, DateTick, plan_date_axis};
pub use price_axis::{PriceAxisPlan, PriceTick, plan_price_axis, price_ratio, select_grid_spacing};
pub use range_selector::{PriceBand, select_price_band};
pub use types::Viewport;
