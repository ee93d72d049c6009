use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds anchored at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.width() > 0.0
            && self.height() > 0.0
    }
}

/// Pixel-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Timestamped sample consumed by the pluggable line engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: i64,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self::new(time.timestamp_millis(), value)
    }

    /// Sample from a decimal reading, e.g. a scale or lab value stored
    /// without binary rounding.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData(format!("sample value {value} does not fit in f64"))
        })?;
        Ok(Self::new(time.timestamp_millis(), value))
    }
}

/// Category values with one label per value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl Series {
    #[must_use]
    pub fn new<L>(values: Vec<f64>, labels: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<String>,
    {
        Self {
            values,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` when the series can be laid out: non-empty, one label
    /// per value, and every value finite.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.values.is_empty()
            && self.values.len() == self.labels.len()
            && self.values.iter().all(|value| value.is_finite())
    }

    /// Upper bound of the zero-based value domain, see [`zero_based_max`].
    #[must_use]
    pub fn domain_max(&self) -> f64 {
        zero_based_max(&self.values)
    }
}

/// Insertion-ordered category magnitudes used by the pie chart.
pub type CategoryDistribution = IndexMap<String, f64>;

#[must_use]
pub fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().map(OrderedFloat).max().map(|v| v.0)
}

#[must_use]
pub fn min_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().map(OrderedFloat).min().map(|v| v.0)
}

/// Upper bound of a `[0, max]` domain: the largest value, never below zero,
/// and `1.0` for no values at all.
///
/// All-negative input collapses the domain to `[0, 0]`, which every scale
/// maps onto the baseline.
#[must_use]
pub fn zero_based_max(values: &[f64]) -> f64 {
    max_value(values).map_or(1.0, |max| max.max(0.0))
}
