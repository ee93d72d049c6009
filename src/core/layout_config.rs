use serde::{Deserialize, Serialize};

use crate::core::ticks::DEFAULT_TICK_COUNT;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_LEFT_INSET_PX: f64 = 60.0;
pub const DEFAULT_BOTTOM_INSET_PX: f64 = 40.0;
pub const DEFAULT_PLOT_RATIO: f64 = 0.9;
pub const DEFAULT_X_LABEL_OFFSET_PX: f64 = 30.0;

/// Plot-area reservation shared by the bar, line and scatter charts.
///
/// This type is serializable so host applications can keep chart sizing in
/// their own settings files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal room kept for Y-axis labels.
    #[serde(default = "default_left_inset_px")]
    pub left_inset_px: f64,
    /// Vertical room kept under the plot for X-axis labels.
    #[serde(default = "default_bottom_inset_px")]
    pub bottom_inset_px: f64,
    /// Share of the container width/height usable by the plot, in `(0, 1]`.
    #[serde(default = "default_plot_ratio")]
    pub plot_ratio: f64,
    /// Number of Y-axis intervals; `tick_count + 1` grid lines are drawn.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Distance from the baseline to the X-axis label anchor.
    #[serde(default = "default_x_label_offset_px")]
    pub x_label_offset_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_inset_px: DEFAULT_LEFT_INSET_PX,
            bottom_inset_px: DEFAULT_BOTTOM_INSET_PX,
            plot_ratio: DEFAULT_PLOT_RATIO,
            tick_count: DEFAULT_TICK_COUNT,
            x_label_offset_px: DEFAULT_X_LABEL_OFFSET_PX,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_insets(mut self, left_inset_px: f64, bottom_inset_px: f64) -> Self {
        self.left_inset_px = left_inset_px;
        self.bottom_inset_px = bottom_inset_px;
        self
    }

    #[must_use]
    pub fn with_plot_ratio(mut self, plot_ratio: f64) -> Self {
        self.plot_ratio = plot_ratio;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_x_label_offset(mut self, x_label_offset_px: f64) -> Self {
        self.x_label_offset_px = x_label_offset_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (field, value) in [
            ("left_inset_px", self.left_inset_px),
            ("bottom_inset_px", self.bottom_inset_px),
            ("x_label_offset_px", self.x_label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }

        if !self.plot_ratio.is_finite() || self.plot_ratio <= 0.0 || self.plot_ratio > 1.0 {
            return Err(ChartError::InvalidConfig(
                "`plot_ratio` must be in (0, 1]".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize layout config: {e}"))
        })
    }

    /// Parses and validates a config. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse layout config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_left_inset_px() -> f64 {
    DEFAULT_LEFT_INSET_PX
}

fn default_bottom_inset_px() -> f64 {
    DEFAULT_BOTTOM_INSET_PX
}

fn default_plot_ratio() -> f64 {
    DEFAULT_PLOT_RATIO
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_x_label_offset_px() -> f64 {
    DEFAULT_X_LABEL_OFFSET_PX
}
