use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::layout_config::LayoutConfig;
use crate::core::plot_area::PlotArea;
use crate::core::types::{Bounds, Point, Series};
use crate::core::value_axis::ValueAxis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterLayout {
    pub plot: PlotArea,
    pub axis: ValueAxis,
    pub spacing: f64,
    pub points: Vec<Point>,
}

/// Places one marker per value in the middle of equal-width columns, which
/// leaves half a column of margin at both ends of the plot.
#[must_use]
pub fn layout_scatter(
    bounds: Bounds,
    series: &Series,
    config: &LayoutConfig,
) -> Option<ScatterLayout> {
    if !series.is_renderable() {
        debug!(
            values = series.values.len(),
            labels = series.labels.len(),
            "scatter layout skipped for unrenderable series"
        );
        return None;
    }
    let plot = PlotArea::from_bounds(bounds, config)?;
    let axis = ValueAxis::zero_based(&series.values, plot, config.tick_count);

    let spacing = plot.width / series.len() as f64;
    let points = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            Point::new(
                plot.left + i as f64 * spacing + spacing / 2.0,
                axis.y_for(value),
            )
        })
        .collect();

    Some(ScatterLayout {
        plot,
        axis,
        spacing,
        points,
    })
}
