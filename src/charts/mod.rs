//! Static charts: one call turns data plus bounds into a finished scene.
//!
//! Each chart comes as a pure `build_*_frame` function and a `draw_*`
//! convenience that replays the frame onto a surface. Invalid input never
//! errors; it produces an empty frame and no draw calls.

mod axes;
mod bar;
mod line;
mod pie;
mod scatter;
pub mod style;

pub use bar::{build_bar_chart_frame, draw_bar_chart};
pub use line::{build_line_chart_frame, draw_line_chart};
pub use pie::{build_pie_chart_frame, draw_pie_chart};
pub use scatter::{build_scatter_chart_frame, draw_scatter_chart};
pub use style::ChartStyle;
