//! healthchart: chart layout and a pluggable chart engine.
//!
//! The crate turns values, category distributions and time series into
//! pixel-space draw commands for any [`render::DrawSurface`]. Static bar,
//! line, pie and scatter charts live in [`charts`]; the layout/draw/gesture
//! engine contract lives in [`engine`].

pub mod charts;
pub mod core;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use engine::{ChartEngine, ChartHost, LineChartConfig, LineChartEngine};
pub use error::{ChartError, ChartResult};
