use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const AXIS_FONT_PX: f64 = 28.0;
pub const VALUE_FONT_PX: f64 = 24.0;
pub const PIE_LABEL_FONT_PX: f64 = 32.0;
pub const GRID_STROKE_PX: f64 = 1.0;
pub const AXIS_STROKE_PX: f64 = 2.0;
pub const LINE_STROKE_PX: f64 = 4.0;
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 8.0;

pub const DEFAULT_SERIES_COLOR: Color = Color::from_argb(0xFF3F_51B5);

#[must_use]
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::from_argb(0xFF3F_51B5),
        Color::from_argb(0xFF4C_AF50),
        Color::from_argb(0xFFFF_9800),
        Color::from_argb(0xFFF4_4336),
        Color::from_argb(0xFF9C_27B0),
        Color::from_argb(0xFF00_BCD4),
    ]
}

/// Presentation settings of a static chart.
///
/// The title and axis names are not painted on the canvas; hosts lay them
/// out around it through [`ChartStyle::captions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_series_color")]
    pub color: Color,
    /// Outer marker radius for line and scatter points.
    #[serde(default = "default_marker_radius")]
    pub marker_radius_px: f64,
    /// Slice colors for the pie chart, cycled when there are more slices.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            color: DEFAULT_SERIES_COLOR,
            marker_radius_px: DEFAULT_MARKER_RADIUS_PX,
            palette: default_palette(),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius_px: f64) -> Self {
        self.marker_radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Checks the marker radius and every color.
    ///
    /// Chart builders run this first and produce an empty frame for an
    /// invalid style, so a bad style never leaves a half-drawn chart.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "`marker_radius_px` must be finite and > 0".to_owned(),
            ));
        }
        self.color
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("series color: {err}")))?;
        for (index, color) in self.palette.iter().enumerate() {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("palette[{index}]: {err}")))?;
        }
        Ok(())
    }

    /// Slice color for `index`; falls back to the series color when the
    /// palette is empty.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.color;
        }
        self.palette[index % self.palette.len()]
    }

    /// Title line followed by the axis captions.
    #[must_use]
    pub fn captions(&self) -> [String; 3] {
        [
            self.title.clone(),
            format!("X-axis: {}", self.x_label),
            format!("Y-axis: {}", self.y_label),
        ]
    }
}

fn default_x_label() -> String {
    "Time".to_owned()
}

fn default_y_label() -> String {
    "Value".to_owned()
}

fn default_series_color() -> Color {
    DEFAULT_SERIES_COLOR
}

fn default_marker_radius() -> f64 {
    DEFAULT_MARKER_RADIUS_PX
}
