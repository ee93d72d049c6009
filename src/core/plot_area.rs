use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::layout_config::LayoutConfig;
use crate::core::types::Bounds;

/// Pixel rectangle the data marks are drawn into.
///
/// The left inset is reserved for Y labels and the bottom inset for X labels,
/// both taken out of the `plot_ratio` share of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Returns `None` when the bounds are invalid or too small to leave a
    /// positive plot area after insets.
    #[must_use]
    pub fn from_bounds(bounds: Bounds, config: &LayoutConfig) -> Option<Self> {
        if !bounds.is_valid() {
            debug!(?bounds, "skipping layout for invalid bounds");
            return None;
        }

        let width = bounds.width() * config.plot_ratio - config.left_inset_px;
        let height = bounds.height() * config.plot_ratio - config.bottom_inset_px;
        if !(width > 0.0 && height > 0.0) {
            debug!(width, height, "skipping layout for degenerate plot area");
            return None;
        }

        Some(Self {
            left: bounds.left + config.left_inset_px,
            top: bounds.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    /// Y pixel of the zero line.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.top + self.height
    }
}
