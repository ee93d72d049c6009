mod frame;
mod primitives;
mod recording_surface;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use recording_surface::RecordingSurface;

use crate::error::ChartResult;

/// Contract implemented by any 2D drawing backend.
///
/// Chart code only ever talks to this trait, so layout stays isolated from
/// the platform canvas. Every method draws immediately; there is no
/// retained state between calls.
pub trait DrawSurface {
    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;
    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;
    fn draw_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()>;
    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()>;
    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()>;
    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoDrawStats, CairoSurface};
