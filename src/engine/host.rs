use tracing::{debug, trace};

use crate::core::{Bounds, DataPoint};
use crate::error::ChartResult;
use crate::interaction::{GestureEvent, GestureResponse};
use crate::render::DrawSurface;

use super::ChartEngine;

/// Drives an engine the way a platform view would.
///
/// The host remembers data and bounds, lays the engine out only after
/// something changed, and draws on every `render` call.
#[derive(Default)]
pub struct ChartHost {
    engine: Option<Box<dyn ChartEngine>>,
    data: Vec<DataPoint>,
    bounds: Option<Bounds>,
    needs_layout: bool,
    layout_passes: u64,
}

impl ChartHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_engine(&mut self, engine: Box<dyn ChartEngine>) -> &mut Self {
        self.engine = Some(engine);
        self.needs_layout = true;
        self
    }

    pub fn update_data(&mut self, data: Vec<DataPoint>) -> &mut Self {
        self.data = data;
        self.needs_layout = true;
        self
    }

    pub fn resize(&mut self, bounds: Bounds) -> &mut Self {
        if self.bounds != Some(bounds) {
            self.bounds = Some(bounds);
            self.needs_layout = true;
        }
        self
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Number of `layout` calls issued to engines so far.
    #[must_use]
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Lays out if anything changed since the last pass, then draws.
    ///
    /// Without an engine or bounds there is nothing to draw.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) -> ChartResult<()> {
        let (Some(engine), Some(bounds)) = (self.engine.as_mut(), self.bounds) else {
            trace!("chart host render skipped: engine or bounds missing");
            return Ok(());
        };

        if self.needs_layout {
            engine.layout(bounds, &self.data);
            self.needs_layout = false;
            self.layout_passes += 1;
        }
        engine.draw(surface)
    }

    pub fn handle_gesture(&mut self, event: &GestureEvent) -> GestureResponse {
        let Some(engine) = self.engine.as_mut() else {
            return GestureResponse::Ignored;
        };
        let response = engine.on_gesture(event);
        if response.needs_layout() {
            debug!(kind = ?event.kind, "gesture requested relayout");
            self.needs_layout = true;
        }
        response
    }
}
