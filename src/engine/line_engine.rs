use std::fmt;

use tracing::{debug, trace};

use crate::core::{Bounds, DataPoint, LineGeometry, compute_line_geometry};
use crate::error::ChartResult;
use crate::interaction::{GestureEvent, GestureResponse};
use crate::render::{
    CirclePrimitive, Color, DrawSurface, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, EngineState, GestureHook, LineChartConfig};

pub const ENGINE_LINE_STROKE_PX: f64 = 4.0;
pub const ENGINE_POINT_RADIUS_PX: f64 = 6.0;
const CAPTION_FONT_PX: f64 = 24.0;
const CAPTION_INSET_PX: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
enum LayoutCache {
    Unlaid,
    Laid {
        geometry: LineGeometry,
        frame: RenderFrame,
    },
}

/// Time-series line engine.
///
/// `layout` maps samples onto the bounds and caches both the geometry and
/// the draw commands derived from it; `draw` only replays that cache.
pub struct LineChartEngine {
    config: LineChartConfig,
    line_color: Color,
    point_color: Color,
    gesture_hook: Option<GestureHook>,
    cache: LayoutCache,
}

impl fmt::Debug for LineChartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChartEngine")
            .field("config", &self.config)
            .field("line_color", &self.line_color)
            .field("point_color", &self.point_color)
            .field("gesture_hook", &self.gesture_hook.is_some())
            .field("cache", &self.cache)
            .finish()
    }
}

impl LineChartEngine {
    #[must_use]
    pub fn new(config: LineChartConfig) -> Self {
        Self {
            config,
            line_color: Color::BLACK,
            point_color: Color::BLACK,
            gesture_hook: None,
            cache: LayoutCache::Unlaid,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, line_color: Color, point_color: Color) -> Self {
        self.line_color = line_color;
        self.point_color = point_color;
        self
    }

    /// Installs the handler that decides what gestures do.
    #[must_use]
    pub fn with_gesture_hook(mut self, hook: GestureHook) -> Self {
        self.gesture_hook = Some(hook);
        self
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        match self.cache {
            LayoutCache::Unlaid => EngineState::Unlaid,
            LayoutCache::Laid { .. } => EngineState::Laid,
        }
    }

    /// Geometry from the last `layout` call, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<&LineGeometry> {
        match &self.cache {
            LayoutCache::Unlaid => None,
            LayoutCache::Laid { geometry, .. } => Some(geometry),
        }
    }

    fn build_frame(&self, bounds: Bounds, geometry: &LineGeometry) -> RenderFrame {
        let mut frame = RenderFrame::new(bounds);
        if !geometry.is_drawable() {
            return frame;
        }

        frame.push_path(PathPrimitive::new(
            geometry.points.clone(),
            ENGINE_LINE_STROKE_PX,
            self.line_color,
        ));

        if self.config.show_points() {
            for point in &geometry.points {
                frame.push_circle(CirclePrimitive::new(
                    *point,
                    ENGINE_POINT_RADIUS_PX,
                    self.point_color,
                ));
            }
        }

        if let Some(label) = self.config.x_label().filter(|label| !label.is_empty()) {
            frame.push_text(TextPrimitive::new(
                label,
                bounds.left + bounds.width() / 2.0,
                bounds.bottom - CAPTION_INSET_PX,
                CAPTION_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }
        if let Some(label) = self.config.y_label().filter(|label| !label.is_empty()) {
            frame.push_text(TextPrimitive::new(
                label,
                bounds.left + CAPTION_INSET_PX,
                bounds.top + CAPTION_FONT_PX,
                CAPTION_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }

        frame
    }
}

impl ChartEngine for LineChartEngine {
    fn layout(&mut self, bounds: Bounds, data: &[DataPoint]) {
        let geometry = compute_line_geometry(bounds, data);
        debug!(
            samples = data.len(),
            points = geometry.points.len(),
            "line engine layout"
        );
        let frame = self.build_frame(bounds, &geometry);
        self.cache = LayoutCache::Laid { geometry, frame };
    }

    fn draw(&self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let LayoutCache::Laid { geometry, frame } = &self.cache else {
            trace!("line engine draw before layout");
            return Ok(());
        };
        if !geometry.is_drawable() {
            trace!(points = geometry.points.len(), "line engine has nothing to draw");
            return Ok(());
        }
        frame.replay(surface)
    }

    fn on_gesture(&mut self, event: &GestureEvent) -> GestureResponse {
        match self.gesture_hook.as_mut() {
            Some(hook) => hook(event, &self.config),
            None => {
                if self.config.enable_zoom() {
                    debug!(
                        kind = ?event.kind,
                        "zoom is enabled but no gesture hook is installed; gesture ignored"
                    );
                }
                GestureResponse::Ignored
            }
        }
    }
}
