use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Immutable configuration of a [`LineChartEngine`](super::LineChartEngine).
///
/// Build it with [`LineChartConfig::builder`] or [`LineChartConfig::new`];
/// nothing mutates a config once it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    data: Vec<DataPoint>,
    #[serde(default)]
    x_label: Option<String>,
    #[serde(default)]
    y_label: Option<String>,
    #[serde(default)]
    enable_zoom: bool,
    #[serde(default)]
    show_points: bool,
}

impl LineChartConfig {
    /// Config with no axis captions, zoom off and point markers off.
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            x_label: None,
            y_label: None,
            enable_zoom: false,
            show_points: false,
        }
    }

    #[must_use]
    pub fn builder(data: Vec<DataPoint>) -> LineChartConfigBuilder {
        LineChartConfigBuilder::new(data)
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    #[must_use]
    pub fn enable_zoom(&self) -> bool {
        self.enable_zoom
    }

    #[must_use]
    pub fn show_points(&self) -> bool {
        self.show_points
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize line chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse line chart config json: {e}"))
        })
    }
}

/// Fluent accumulator for [`LineChartConfig`].
///
/// `build` consumes the builder, so a finished config can never be changed
/// through it.
#[derive(Debug, Clone)]
pub struct LineChartConfigBuilder {
    data: Vec<DataPoint>,
    x_label: Option<String>,
    y_label: Option<String>,
    enable_zoom: bool,
    show_points: bool,
}

impl LineChartConfigBuilder {
    #[must_use]
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            x_label: None,
            y_label: None,
            enable_zoom: false,
            show_points: false,
        }
    }

    #[must_use]
    pub fn x_axis(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn y_axis(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn zoomable(mut self, enabled: bool) -> Self {
        self.enable_zoom = enabled;
        self
    }

    #[must_use]
    pub fn show_points(mut self, enabled: bool) -> Self {
        self.show_points = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> LineChartConfig {
        LineChartConfig {
            data: self.data,
            x_label: self.x_label,
            y_label: self.y_label,
            enable_zoom: self.enable_zoom,
            show_points: self.show_points,
        }
    }
}
