use tracing::{trace, warn};

use crate::charts::axes::{push_axis_lines, push_category_labels, push_value_grid};
use crate::charts::style::{ChartStyle, VALUE_FONT_PX};
use crate::core::{Bounds, LayoutConfig, Series, format_value_label, layout_scatter};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, DrawSurface, RenderFrame, TextHAlign, TextPrimitive};

const INNER_MARKER_RATIO: f64 = 0.4;
const VALUE_LABEL_GAP_PX: f64 = 8.0;

/// Builds the scatter plot scene: grid, labels, axes, then a two-tone dot
/// with its value label for every sample.
#[must_use]
pub fn build_scatter_chart_frame(
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(bounds);
    if let Err(err) = style.validate() {
        warn!(%err, "scatter chart skipped for invalid style");
        return frame;
    }
    let Some(layout) = layout_scatter(bounds, series, config) else {
        return frame;
    };

    push_value_grid(&mut frame, bounds, layout.plot, &layout.axis);
    push_category_labels(
        &mut frame,
        series
            .labels
            .iter()
            .map(String::as_str)
            .zip(layout.points.iter().map(|point| point.x)),
        layout.plot.baseline() + config.x_label_offset_px,
    );
    push_axis_lines(&mut frame, layout.plot);

    let radius = style.marker_radius_px;
    for (point, &value) in layout.points.iter().zip(&series.values) {
        frame.push_circle(CirclePrimitive::new(*point, radius, style.color));
        frame.push_circle(CirclePrimitive::new(
            *point,
            radius * INNER_MARKER_RATIO,
            Color::WHITE,
        ));
        frame.push_text(TextPrimitive::new(
            format_value_label(value),
            point.x,
            point.y - radius - VALUE_LABEL_GAP_PX,
            VALUE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    trace!(points = layout.points.len(), commands = frame.len(), "built scatter chart frame");
    frame
}

pub fn draw_scatter_chart(
    surface: &mut dyn DrawSurface,
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> ChartResult<()> {
    build_scatter_chart_frame(bounds, series, style, config).replay(surface)
}
