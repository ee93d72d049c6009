use tracing::{trace, warn};

use crate::charts::axes::{push_axis_lines, push_category_labels, push_value_grid};
use crate::charts::style::ChartStyle;
use crate::core::{Bounds, LayoutConfig, Series, layout_bars};
use crate::error::ChartResult;
use crate::render::{DrawSurface, RectPrimitive, RenderFrame};

/// Builds the full bar chart scene: grid, Y labels, category labels, axes,
/// then one filled rectangle per value.
///
/// Unrenderable input yields an empty frame.
#[must_use]
pub fn build_bar_chart_frame(
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(bounds);
    if let Err(err) = style.validate() {
        warn!(%err, "bar chart skipped for invalid style");
        return frame;
    }
    let Some(layout) = layout_bars(bounds, series, config) else {
        return frame;
    };

    push_value_grid(&mut frame, bounds, layout.plot, &layout.axis);
    push_category_labels(
        &mut frame,
        series
            .labels
            .iter()
            .map(String::as_str)
            .zip(layout.bars.iter().map(|bar| bar.slot_center_x)),
        layout.plot.baseline() + config.x_label_offset_px,
    );
    push_axis_lines(&mut frame, layout.plot);

    for bar in &layout.bars {
        frame.push_rect(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            style.color,
        ));
    }

    trace!(bars = layout.bars.len(), commands = frame.len(), "built bar chart frame");
    frame
}

pub fn draw_bar_chart(
    surface: &mut dyn DrawSurface,
    bounds: Bounds,
    series: &Series,
    style: &ChartStyle,
    config: &LayoutConfig,
) -> ChartResult<()> {
    build_bar_chart_frame(bounds, series, style, config).replay(surface)
}
