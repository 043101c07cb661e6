use serde::{Deserialize, Serialize};

use crate::core::primitives::round_px;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derives a viewport that keeps the reference aspect ratio.
    ///
    /// Hosts compute the height as `round(reference_height * width / reference_width)`
    /// whenever the container is resized; the engine itself only consumes the pair.
    #[must_use]
    pub fn from_reference_width(width: u32, reference_width: u32, reference_height: u32) -> Self {
        if reference_width == 0 {
            return Self::new(width, 0);
        }
        let height = round_px(
            f64::from(reference_height) * f64::from(width) / f64::from(reference_width),
        );
        Self::new(width, u32::try_from(height.max(0)).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
