use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::layout_config::LayoutConfig;
use crate::core::plot_area::PlotArea;
use crate::core::types::{Bounds, Series};
use crate::core::value_axis::ValueAxis;

/// One bar in pixel space. `height` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center of the category slot, used for the X label.
    pub slot_center_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub plot: PlotArea,
    pub axis: ValueAxis,
    pub bar_width: f64,
    pub bars: Vec<BarRect>,
}

/// Lays out one bar per value.
///
/// Each category owns a slot twice the bar width; the bar sits centered in
/// its slot and grows up from the baseline; negative values get a flat bar.
/// Returns `None` for series that cannot be rendered or bounds too small for
/// a plot area.
#[must_use]
pub fn layout_bars(bounds: Bounds, series: &Series, config: &LayoutConfig) -> Option<BarLayout> {
    if !series.is_renderable() {
        debug!(
            values = series.values.len(),
            labels = series.labels.len(),
            "bar layout skipped for unrenderable series"
        );
        return None;
    }
    let plot = PlotArea::from_bounds(bounds, config)?;
    let axis = ValueAxis::zero_based(&series.values, plot, config.tick_count);

    let bar_width = plot.width / series.len() as f64 / 2.0;
    let baseline = plot.baseline();
    let bars = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let slot_left = plot.left + i as f64 * 2.0 * bar_width;
            let height = axis.height_for(value);
            BarRect {
                x: slot_left + bar_width / 2.0,
                y: baseline - height,
                width: bar_width,
                height,
                slot_center_x: slot_left + bar_width,
            }
        })
        .collect();

    Some(BarLayout {
        plot,
        axis,
        bar_width,
        bars,
    })
}
