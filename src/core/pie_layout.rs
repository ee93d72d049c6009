use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{Bounds, CategoryDistribution, Point};

pub const PIE_RADIUS_RATIO: f64 = 0.35;
pub const PIE_CENTER_X_RATIO: f64 = 0.4;
pub const PIE_LABEL_RADIUS_RATIO: f64 = 0.7;
pub const PIE_MIN_LABELLED_PERCENTAGE: u32 = 5;

/// One wedge. Angles are in degrees, clockwise on screen from the +X axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub category: String,
    pub value: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    /// Whole-number share of the total, truncated.
    pub percentage: u32,
    /// Where the on-slice percentage goes; `None` for slices too thin to label.
    pub label_anchor: Option<Point>,
}

impl PieSlice {
    #[must_use]
    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

/// Splits the full circle between categories in insertion order.
///
/// The pie sits left of center (`0.4 * width`) so a legend fits on the
/// right. Returns `None` for an empty distribution, any negative or
/// non-finite magnitude, a non-positive total, or invalid bounds.
#[must_use]
pub fn layout_pie(bounds: Bounds, distribution: &CategoryDistribution) -> Option<PieLayout> {
    if distribution.is_empty() || !bounds.is_valid() {
        debug!(
            categories = distribution.len(),
            ?bounds,
            "pie layout skipped for empty distribution or invalid bounds"
        );
        return None;
    }
    if let Some((category, value)) = distribution
        .iter()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        warn!(%category, value, "pie layout skipped for invalid magnitude");
        return None;
    }

    let total: f64 = distribution.values().sum();
    if total <= 0.0 {
        debug!(total, "pie layout skipped for non-positive total");
        return None;
    }

    let radius = bounds.width().min(bounds.height()) * PIE_RADIUS_RATIO;
    let center = Point::new(
        bounds.left + bounds.width() * PIE_CENTER_X_RATIO,
        bounds.top + bounds.height() * 0.5,
    );
    let label_radius = radius * PIE_LABEL_RADIUS_RATIO;

    let mut start_angle_deg = 0.0;
    let mut slices = Vec::with_capacity(distribution.len());
    for (category, &value) in distribution {
        let sweep_angle_deg = value / total * 360.0;
        let percentage = (value * 100.0 / total) as u32;
        let label_anchor = (percentage >= PIE_MIN_LABELLED_PERCENTAGE).then(|| {
            let angle = (start_angle_deg + sweep_angle_deg / 2.0_f64).to_radians();
            Point::new(
                center.x + label_radius * angle.cos(),
                center.y + label_radius * angle.sin(),
            )
        });

        slices.push(PieSlice {
            category: category.clone(),
            value,
            start_angle_deg,
            sweep_angle_deg,
            percentage,
            label_anchor,
        });
        start_angle_deg += sweep_angle_deg;
    }

    Some(PieLayout {
        center,
        radius,
        total,
        slices,
    })
}
