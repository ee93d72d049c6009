use tracing::{trace, warn};

use crate::charts::style::{AXIS_FONT_PX, ChartStyle, PIE_LABEL_FONT_PX};
use crate::core::{Bounds, CategoryDistribution, Point, layout_pie};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, CirclePrimitive, Color, DrawSurface, RenderFrame, TextHAlign, TextPrimitive,
};

const LEGEND_X_RATIO: f64 = 0.8;
const LEGEND_ROW_PX: f64 = 36.0;
const LEGEND_SWATCH_RADIUS_PX: f64 = 8.0;
const LEGEND_TEXT_GAP_PX: f64 = 16.0;
const LEGEND_TEXT_BASELINE_SHIFT_PX: f64 = 10.0;

/// Builds the pie scene: one filled wedge per category, a bold percentage on
/// every slice of at least 5%, and a legend entry for every slice.
#[must_use]
pub fn build_pie_chart_frame(
    bounds: Bounds,
    distribution: &CategoryDistribution,
    style: &ChartStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(bounds);
    if let Err(err) = style.validate() {
        warn!(%err, "pie chart skipped for invalid style");
        return frame;
    }
    let Some(layout) = layout_pie(bounds, distribution) else {
        return frame;
    };

    for (index, slice) in layout.slices.iter().enumerate() {
        frame.push_arc(ArcPrimitive::new(
            layout.center,
            layout.radius,
            slice.start_angle_deg,
            slice.sweep_angle_deg,
            true,
            style.palette_color(index),
        ));
        if let Some(anchor) = slice.label_anchor {
            frame.push_text(
                TextPrimitive::new(
                    format!("{}%", slice.percentage),
                    anchor.x,
                    anchor.y,
                    PIE_LABEL_FONT_PX,
                    Color::WHITE,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
    }

    let legend_x = bounds.left + bounds.width() * LEGEND_X_RATIO;
    let first_row_y = layout.center.y - (layout.slices.len() as f64 - 1.0) * LEGEND_ROW_PX / 2.0;
    for (index, slice) in layout.slices.iter().enumerate() {
        let row_y = first_row_y + index as f64 * LEGEND_ROW_PX;
        frame.push_circle(CirclePrimitive::new(
            Point::new(legend_x, row_y),
            LEGEND_SWATCH_RADIUS_PX,
            style.palette_color(index),
        ));
        frame.push_text(TextPrimitive::new(
            format!("{}: {}%", slice.category, slice.percentage),
            legend_x + LEGEND_TEXT_GAP_PX,
            row_y + LEGEND_TEXT_BASELINE_SHIFT_PX,
            AXIS_FONT_PX,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }

    trace!(slices = layout.slices.len(), commands = frame.len(), "built pie chart frame");
    frame
}

pub fn draw_pie_chart(
    surface: &mut dyn DrawSurface,
    bounds: Bounds,
    distribution: &CategoryDistribution,
    style: &ChartStyle,
) -> ChartResult<()> {
    build_pie_chart_frame(bounds, distribution, style).replay(surface)
}
