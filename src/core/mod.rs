pub mod bar_layout;
pub mod layout_config;
pub mod line_layout;
pub mod pie_layout;
pub mod plot_area;
pub mod scale;
pub mod scatter_layout;
pub mod ticks;
pub mod time_series;
pub mod types;
pub mod value_axis;

pub use bar_layout::{BarLayout, BarRect, layout_bars};
pub use layout_config::LayoutConfig;
pub use line_layout::{LineLayout, layout_line};
pub use pie_layout::{PieLayout, PieSlice, layout_pie};
pub use plot_area::PlotArea;
pub use scale::{LinearScale, scale};
pub use scatter_layout::{ScatterLayout, layout_scatter};
pub use ticks::{AxisTick, AxisTicks, format_tick_label, format_value_label, generate_ticks};
pub use time_series::{LineGeometry, compute_line_geometry};
pub use types::{Bounds, CategoryDistribution, DataPoint, Point, Series, zero_based_max};
pub use value_axis::ValueAxis;
