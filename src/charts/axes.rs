use crate::charts::style::{AXIS_FONT_PX, AXIS_STROKE_PX, GRID_STROKE_PX};
use crate::core::{Bounds, PlotArea, ValueAxis};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

const Y_LABEL_LEFT_PX: f64 = 10.0;
const Y_LABEL_BASELINE_SHIFT_PX: f64 = 10.0;

/// Horizontal grid line and integer label for every tick.
pub(super) fn push_value_grid(
    frame: &mut RenderFrame,
    bounds: Bounds,
    plot: PlotArea,
    axis: &ValueAxis,
) {
    for tick in &axis.ticks {
        frame.push_line(LinePrimitive::new(
            plot.left,
            tick.pixel,
            plot.right(),
            tick.pixel,
            GRID_STROKE_PX,
            Color::LIGHT_GRAY,
        ));
        frame.push_text(TextPrimitive::new(
            tick.label(),
            bounds.left + Y_LABEL_LEFT_PX,
            tick.pixel + Y_LABEL_BASELINE_SHIFT_PX,
            AXIS_FONT_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
}

/// Category names centered under their marks. Empty labels are skipped.
pub(super) fn push_category_labels<'a>(
    frame: &mut RenderFrame,
    labels: impl IntoIterator<Item = (&'a str, f64)>,
    y: f64,
) {
    for (label, x) in labels {
        if label.is_empty() {
            continue;
        }
        frame.push_text(TextPrimitive::new(
            label,
            x,
            y,
            AXIS_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }
}

/// Y axis up the left edge and X axis along the baseline.
pub(super) fn push_axis_lines(frame: &mut RenderFrame, plot: PlotArea) {
    let baseline = plot.baseline();
    frame.push_line(LinePrimitive::new(
        plot.left,
        baseline,
        plot.left,
        plot.top,
        AXIS_STROKE_PX,
        Color::BLACK,
    ));
    frame.push_line(LinePrimitive::new(
        plot.left,
        baseline,
        plot.right(),
        baseline,
        AXIS_STROKE_PX,
        Color::BLACK,
    ));
}
