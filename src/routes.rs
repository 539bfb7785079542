//! Page routes and slugs.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Features,
    BarPlot,
    BoxPlot,
    LinePlot,
    /// Any unknown path, kept for display.
    NotFound(String),
}

impl Route {
    /// Resolve a path. A single trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" | "" => Route::Home,
            "/features" => Route::Features,
            "/plot/bar-plot" => Route::BarPlot,
            "/plot/box-plot" => Route::BoxPlot,
            "/plot/line-plot" => Route::LinePlot,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Route for a gallery card titled `title`.
    pub fn for_plot(title: &str) -> Self {
        Self::parse(&format!("/plot/{}", slug(title)))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Features => "/features".into(),
            Route::BarPlot => "/plot/bar-plot".into(),
            Route::BoxPlot => "/plot/box-plot".into(),
            Route::LinePlot => "/plot/line-plot".into(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether this route hosts the bar chart editor.
    pub fn is_editor(&self) -> bool {
        matches!(self, Route::BarPlot)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Lowercase, with each run of whitespace replaced by a single `-`.
pub fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
