use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::layout_config::LayoutConfig;
use crate::core::plot_area::PlotArea;
use crate::core::types::{Bounds, Point, Series};
use crate::core::value_axis::ValueAxis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub plot: PlotArea,
    pub axis: ValueAxis,
    pub spacing: f64,
    pub vertices: Vec<Point>,
}

impl LineLayout {
    /// A polyline needs at least two vertices to be drawn.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.vertices.len() >= 2
    }
}

/// Spreads the values edge to edge across the plot width.
///
/// The first vertex sits on the Y axis and the last on the plot's right edge
/// (`spacing = width / (n - 1)`). A single value gets zero spacing so its
/// vertex stays finite; callers check [`LineLayout::is_drawable`].
#[must_use]
pub fn layout_line(bounds: Bounds, series: &Series, config: &LayoutConfig) -> Option<LineLayout> {
    if !series.is_renderable() {
        debug!(
            values = series.values.len(),
            labels = series.labels.len(),
            "line layout skipped for unrenderable series"
        );
        return None;
    }
    let plot = PlotArea::from_bounds(bounds, config)?;
    let axis = ValueAxis::zero_based(&series.values, plot, config.tick_count);

    let spacing = if series.len() > 1 {
        plot.width / (series.len() - 1) as f64
    } else {
        0.0
    };
    let vertices = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| Point::new(plot.left + i as f64 * spacing, axis.y_for(value)))
        .collect();

    Some(LineLayout {
        plot,
        axis,
        spacing,
        vertices,
    })
}
