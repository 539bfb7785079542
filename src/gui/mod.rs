//! GUI module - Pages, editor widgets and the application shell

mod app;
mod carousel;
mod chart_viewer;
mod control_panel;
mod pages;

pub use app::GraphiqApp;
pub use carousel::{CarouselState, FeatureCard, CAROUSEL_STEP, FEATURE_CARDS};
pub use chart_viewer::{surface_size, ChartViewer};
pub use control_panel::{ControlPanel, EditorAction};
