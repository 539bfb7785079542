//! Charts module - Scene projection, rasterization and gallery samples

mod backend;
mod plotter;
mod projector;
mod renderer;
mod theme;

pub use plotter::{ChartPlotter, SampleKind};
pub use projector::{
    AxisLabel, ChartProjector, ChartScene, RenderDirectives, RenderSeries, SeriesBar, Y_SPAN_LIMIT,
};
pub use renderer::{
    ChartSurface, Rasterizer, RenderError, StaticChartRenderer, MIN_SURFACE_HEIGHT,
    MIN_SURFACE_WIDTH,
};
pub use theme::ChartTheme;
