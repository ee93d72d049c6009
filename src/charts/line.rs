use tracing::{debug, trace, warn};

use crate::charts::axes::{push_axis_lines, push_category_labels, push_value_grid};
use crate::charts::style::{ChartStyle, LINE_STROKE_PX, VALUE_FONT_PX};
use crate::core::{Bounds, LayoutConfig, Series, format_value_label, layout_line};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, DrawSurface, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const VALUE_LABEL_GAP_PX: f64 = 12.0;
const INNER_MARKER_RATIO: f64 = 0.5;

/// Builds the static line chart scene: grid, labels, the polyline, then a
/// two-tone marker and value label on every vertex, with the axes on top.
///
/// Fewer than two values, or otherwise unrenderable input, yields an empty
/// frame.
#[must_use]
pub fn build_line_chart_frame(
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(bounds);
    if let Err(err) = style.validate() {
        warn!(%err, "line chart skipped for invalid style");
        return frame;
    }
    let Some(layout) = layout_line(bounds, series, config) else {
        return frame;
    };
    if !layout.is_drawable() {
        debug!(
            vertices = layout.vertices.len(),
            "line chart needs at least two values"
        );
        return frame;
    }

    push_value_grid(&mut frame, bounds, layout.plot, &layout.axis);
    push_category_labels(
        &mut frame,
        series
            .labels
            .iter()
            .map(String::as_str)
            .zip(layout.vertices.iter().map(|vertex| vertex.x)),
        layout.plot.baseline() + config.x_label_offset_px,
    );

    frame.push_path(PathPrimitive::new(
        layout.vertices.clone(),
        LINE_STROKE_PX,
        style.color,
    ));

    let outer_radius = style.marker_radius_px;
    for (vertex, &value) in layout.vertices.iter().zip(&series.values) {
        frame.push_circle(CirclePrimitive::new(*vertex, outer_radius, style.color));
        frame.push_circle(CirclePrimitive::new(
            *vertex,
            outer_radius * INNER_MARKER_RATIO,
            Color::WHITE,
        ));
        frame.push_text(TextPrimitive::new(
            format_value_label(value),
            vertex.x,
            vertex.y - VALUE_LABEL_GAP_PX,
            VALUE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    push_axis_lines(&mut frame, layout.plot);

    trace!(
        vertices = layout.vertices.len(),
        commands = frame.len(),
        "built line chart frame"
    );
    frame
}

pub fn draw_line_chart(
    surface: &mut dyn DrawSurface,
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> ChartResult<()> {
    build_line_chart_frame(bounds, series, style, config).replay(surface)
}
