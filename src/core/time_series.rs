use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::scale::LinearScale;
use crate::core::types::{Bounds, DataPoint, Point, max_value, min_value};

/// Screen-space polyline for a time series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<Point>,
}

impl LineGeometry {
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Maps samples onto the full bounds.
///
/// X spans `[first.timestamp, last.timestamp]` and Y spans the observed
/// `[min, max]` value range, growing upward from `bounds.bottom`. Samples are
/// expected in timestamp order and are never re-sorted. A zero-width range
/// collapses to the left edge (X) or the bottom edge (Y).
#[must_use]
pub fn compute_line_geometry(bounds: Bounds, data: &[DataPoint]) -> LineGeometry {
    let (Some(first), Some(last)) = (data.first(), data.last()) else {
        return LineGeometry::default();
    };
    if !bounds.is_valid() {
        debug!(?bounds, "line geometry skipped for invalid bounds");
        return LineGeometry::default();
    }
    if data.iter().any(|point| !point.value.is_finite()) {
        warn!(count = data.len(), "line geometry skipped for non-finite values");
        return LineGeometry::default();
    }
    if data.windows(2).any(|pair| pair[1].timestamp < pair[0].timestamp) {
        warn!(
            count = data.len(),
            "time series is not sorted by timestamp; drawing in input order"
        );
    }

    let values: Vec<f64> = data.iter().map(|point| point.value).collect();
    let (min_y, max_y) = match (min_value(&values), max_value(&values)) {
        (Some(min), Some(max)) => (min, max),
        _ => return LineGeometry::default(),
    };

    let x_scale = LinearScale::new(
        (first.timestamp as f64, last.timestamp as f64),
        (bounds.left, bounds.right),
    );
    let y_scale = LinearScale::new((min_y, max_y), (bounds.bottom, bounds.top));

    let points = data
        .iter()
        .map(|point| Point::new(x_scale.map(point.timestamp as f64), y_scale.map(point.value)))
        .collect();

    LineGeometry { points }
}
