use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Weight};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, Color, DrawSurface, LinePrimitive, PathPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoDrawStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws either into an owned offscreen image (see [`CairoSurface::new`]) or
/// onto a host-provided context such as a GTK `DrawingArea` callback (see
/// [`CairoSurface::from_context`]).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    stats: CairoDrawStats,
}

impl CairoSurface {
    /// Creates an offscreen ARGB image cleared to `clear_color`.
    pub fn new(width: i32, height: i32, clear_color: Color) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidBounds {
                width: f64::from(width),
                height: f64::from(height),
            });
        }
        clear_color.validate()?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        Ok(Self {
            context,
            image: Some(image),
            stats: CairoDrawStats::default(),
        })
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
            stats: CairoDrawStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn stats(&self) -> CairoDrawStats {
        self.stats
    }

    /// Writes the offscreen image as PNG. Fails for context-backed surfaces.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            ChartError::Backend("surface draws onto an external context".to_owned())
        })?;
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn stroke(&self, what: &str) -> ChartResult<()> {
        self.context
            .stroke()
            .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err))
    }

    fn fill(&self, what: &str) -> ChartResult<()> {
        self.context
            .fill()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))
    }
}

impl DrawSurface for CairoSurface {
    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.stroke("line")?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        apply_color(&self.context, rect.fill_color);
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill("rectangle")?;
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_arc(&mut self, arc: &ArcPrimitive) -> ChartResult<()> {
        let start = arc.start_angle_deg.to_radians();
        let end = (arc.start_angle_deg + arc.sweep_angle_deg).to_radians();

        apply_color(&self.context, arc.color);
        self.context.new_path();
        if arc.filled {
            self.context.move_to(arc.center.x, arc.center.y);
        }
        // Cairo's positive angle direction is clockwise in device space,
        // matching the primitive's convention.
        self.context.arc(arc.center.x, arc.center.y, arc.radius, start, end);
        if arc.filled {
            self.context.close_path();
            self.fill("arc")?;
        } else {
            self.stroke("arc")?;
        }
        self.stats.arcs_drawn += 1;
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        apply_color(&self.context, circle.color);
        self.context.new_path();
        self.context.arc(
            circle.center.x,
            circle.center.y,
            circle.radius,
            0.0,
            std::f64::consts::TAU,
        );
        self.fill("circle")?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()> {
        let Some((first, rest)) = path.points.split_first() else {
            return Ok(());
        };
        apply_color(&self.context, path.color);
        self.context.set_line_width(path.stroke_width);
        self.context.new_path();
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.stroke("path")?;
        self.stats.paths_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut font_description =
            FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
        if text.bold {
            font_description.set_weight(Weight::Bold);
        }
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y - ascent);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
