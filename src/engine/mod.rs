//! Pluggable chart engines.
//!
//! An engine is anything that can lay out data for a set of bounds, draw the
//! cached result, and react to gestures. New chart kinds implement
//! [`ChartEngine`] directly; there is no shared base state.

mod config;
mod host;
mod line_engine;

pub use config::{LineChartConfig, LineChartConfigBuilder};
pub use host::ChartHost;
pub use line_engine::{ENGINE_LINE_STROKE_PX, ENGINE_POINT_RADIUS_PX, LineChartEngine};

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, DataPoint};
use crate::error::ChartResult;
use crate::interaction::{GestureEvent, GestureResponse};
use crate::render::DrawSurface;

/// Handler an engine defers gesture decisions to.
pub type GestureHook = Box<dyn FnMut(&GestureEvent, &LineChartConfig) -> GestureResponse>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No geometry computed yet.
    Unlaid,
    /// Geometry cached from the last `layout` call.
    Laid,
}

/// Layout/draw/gesture lifecycle of one chart.
///
/// Callers run `layout` whenever data or bounds change and may `draw` any
/// number of times in between. Calls on one engine must not overlap.
pub trait ChartEngine {
    /// Recomputes and caches geometry. Replaces any earlier cache.
    fn layout(&mut self, bounds: Bounds, data: &[DataPoint]);

    /// Replays cached geometry. Never recomputes layout; draws nothing
    /// before the first `layout` or when there is too little data.
    fn draw(&self, surface: &mut dyn DrawSurface) -> ChartResult<()>;

    /// Offers a gesture to the engine.
    fn on_gesture(&mut self, event: &GestureEvent) -> GestureResponse;
}
