use serde::{Deserialize, Serialize};

use crate::core::plot_area::PlotArea;
use crate::core::scale::LinearScale;
use crate::core::ticks::{AxisTicks, generate_ticks};
use crate::core::types::zero_based_max;

/// Zero-based vertical axis shared by the bar, line and scatter layouts.
///
/// Values below zero are drawn on the baseline; the axis never extends under
/// the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    /// Maps a value to its Y pixel; the range runs from baseline to top.
    pub scale: LinearScale,
    pub ticks: AxisTicks,
}

impl ValueAxis {
    #[must_use]
    pub fn zero_based(values: &[f64], plot: PlotArea, tick_count: usize) -> Self {
        let domain_max = zero_based_max(values);
        let range = (plot.baseline(), plot.top);
        Self {
            scale: LinearScale::new((0.0, domain_max), range),
            ticks: generate_ticks(0.0, domain_max, tick_count, range.0, range.1),
        }
    }

    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.scale.domain().1
    }

    #[must_use]
    pub fn y_for(&self, value: f64) -> f64 {
        self.scale.map(value.max(0.0))
    }

    /// Distance from the baseline to `value`, never negative.
    #[must_use]
    pub fn height_for(&self, value: f64) -> f64 {
        let (baseline, top) = self.scale.range();
        crate::core::scale::scale(value.max(0.0), 0.0, self.domain_max(), 0.0, baseline - top)
    }
}
