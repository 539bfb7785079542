//! Static Chart Renderer
//! Rasterizes a bar chart scene with plotters.
//!
//! Layout:
//! 1. Plot area with y ticks and no x ticks; domain fixed to the configured bounds
//! 2. One rounded bar per series entry, value label above it
//! 3. X axis title centered below the plot, Y axis title rotated on the left
//! 4. Legend box in the top-right corner

use crate::charts::backend::FontSafeBackend;
use crate::charts::projector::ChartScene;
use crate::charts::theme::{bar_color, ChartTheme};
use image::{DynamicImage, RgbImage, RgbaImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, FontTransform};
use thiserror::Error;
use tracing::debug;

/// Smallest surface, in unscaled pixels, the layout fits into.
pub const MIN_SURFACE_WIDTH: u32 = 160;
pub const MIN_SURFACE_HEIGHT: u32 = 120;

const FONT: &str = "sans-serif";
const BAR_FILL_RATIO: f64 = 0.7;
const TICK_FONT_SIZE: f64 = 24.0;
const VALUE_FONT_SIZE: f64 = 28.0;
const BAR_CORNER_RADIUS: f64 = 12.0;
/// Segments per quarter circle of a rounded corner.
const CORNER_SEGMENTS: usize = 6;
const LEGEND_FONT_SIZE: f64 = 14.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("surface {width}x{height} is too small to render")]
    SurfaceTooSmall { width: u32, height: u32 },
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("raster buffer size mismatch")]
    Buffer,
}

/// A mounted chart surface: the scene on display and its on-screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    pub scene: ChartScene,
    pub width: u32,
    pub height: u32,
}

impl ChartSurface {
    pub fn new(scene: ChartScene, width: u32, height: u32) -> Self {
        Self {
            scene,
            width,
            height,
        }
    }
}

/// Snapshots a chart surface into an RGBA raster.
pub trait Rasterizer {
    /// Render `surface` with every dimension multiplied by `scale`.
    fn capture(&self, surface: &ChartSurface, scale: u32) -> Result<RgbaImage, RenderError>;
}

/// Plotters bitmap implementation of [`Rasterizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticChartRenderer;

impl Rasterizer for StaticChartRenderer {
    fn capture(&self, surface: &ChartSurface, scale: u32) -> Result<RgbaImage, RenderError> {
        if surface.width < MIN_SURFACE_WIDTH || surface.height < MIN_SURFACE_HEIGHT {
            return Err(RenderError::SurfaceTooSmall {
                width: surface.width,
                height: surface.height,
            });
        }

        let scale = scale.max(1);
        let (width, height) = (surface.width * scale, surface.height * scale);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        {
            let backend = FontSafeBackend::new(BitMapBackend::with_buffer(&mut buffer, (width, height)));
            let root = backend.into_drawing_area();
            Self::draw_scene(&root, &surface.scene, scale as f64)
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
            root.present()
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }

        debug!(
            width,
            height,
            bars = surface.scene.series.len(),
            "chart rasterized"
        );
        let rgb = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer)?;
        Ok(DynamicImage::ImageRgb8(rgb).to_rgba8())
    }
}

impl StaticChartRenderer {
    fn draw_scene<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &ChartScene,
        s: f64,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let theme = ChartTheme::for_style(scene.directives.style);
        let px = |v: f64| (v * s).round() as i32;
        let upx = |v: f64| (v * s).round() as u32;
        let (width, height) = root.dim_in_pixel();

        root.fill(&theme.background)?;

        let (y_lo, y_hi) = scene.directives.y_span();
        let bar_count = scene.series.len().max(1) as f64;

        let mut chart = ChartBuilder::on(root)
            .margin_top(upx(20.0))
            .margin_right(upx(30.0))
            .margin_left(upx(20.0))
            .margin_bottom(upx(10.0))
            .x_label_area_size(upx(40.0))
            .y_label_area_size(upx(80.0))
            .build_cartesian_2d(0.0..bar_count, y_lo..y_hi)?;

        let tick_font = (FONT, TICK_FONT_SIZE * s)
            .into_font()
            .color(&theme.foreground);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(0)
            .y_labels(10)
            .max_light_lines(0)
            .axis_style(theme.foreground.stroke_width(upx(theme.axis_width as f64).max(1)))
            .label_style(tick_font);
        match theme.grid {
            Some(grid) => {
                mesh.bold_line_style(grid.stroke_width(1));
            }
            None => {
                mesh.disable_y_mesh();
            }
        }
        mesh.draw()?;

        // Bars are clipped to the visible domain.
        let base = 0.0f64.clamp(y_lo, y_hi);
        let half_width = BAR_FILL_RATIO / 2.0;
        let bar_top = |value: f64| value.clamp(y_lo, y_hi);

        let radius = px(BAR_CORNER_RADIUS);
        let outline = theme.bar_outline.stroke_width(upx(1.0).max(1));
        for (i, bar) in scene.series.iter().enumerate() {
            let center = i as f64 + 0.5;
            let corner_a = chart.backend_coord(&(center - half_width, base));
            let corner_b = chart.backend_coord(&(center + half_width, bar_top(bar.numeric_value)));
            if corner_a.1 == corner_b.1 {
                continue;
            }
            let outline_points = rounded_rect(corner_a, corner_b, radius);
            let mut closed = outline_points.clone();
            closed.extend(outline_points.first().copied());

            root.draw(&Polygon::new(outline_points, bar_color(bar.color).filled()))?;
            root.draw(&PathElement::new(closed, outline))?;
        }

        let value_font = (FONT, VALUE_FONT_SIZE * s)
            .into_font()
            .color(&theme.foreground)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(scene.series.iter().enumerate().map(|(i, bar)| {
            EmptyElement::at((i as f64 + 0.5, bar_top(bar.numeric_value)))
                + Text::new(bar.value_label(), (0, -px(10.0)), value_font.clone())
        }))?;

        let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();
        let plot_center_x = (plot_x.start + plot_x.end) / 2;
        let plot_center_y = (plot_y.start + plot_y.end) / 2;

        let x_label = &scene.directives.x_label;
        if !x_label.text.is_empty() {
            let font = (FONT, x_label.size as f64 * s)
                .into_font()
                .style(FontStyle::Bold)
                .color(&theme.foreground)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            root.draw(&Text::new(
                x_label.text.clone(),
                (
                    plot_center_x + px(x_label.offset.dx),
                    height as i32 - px(8.0) + px(x_label.offset.dy),
                ),
                font,
            ))?;
        }

        let y_label = &scene.directives.y_label;
        if !y_label.text.is_empty() {
            let font = (FONT, y_label.size as f64 * s)
                .into_font()
                .style(FontStyle::Bold)
                .transform(FontTransform::Rotate270)
                .color(&theme.foreground)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(
                y_label.text.clone(),
                (
                    px(20.0) + px(y_label.offset.dx),
                    plot_center_y + px(y_label.offset.dy),
                ),
                font,
            ))?;
        }

        Self::draw_legend(root, scene, &theme, s, width as i32)
    }

    fn draw_legend<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &ChartScene,
        theme: &ChartTheme,
        s: f64,
        width: i32,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        if scene.series.is_empty() {
            return Ok(());
        }
        let px = |v: f64| (v * s).round() as i32;

        let longest = scene
            .series
            .iter()
            .map(|bar| bar.category_label.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let row_h = px(22.0);
        let swatch = px(14.0);
        let padding = px(10.0);
        let box_w = padding * 3 + swatch + px(longest * LEGEND_FONT_SIZE * 0.6);
        let box_h = padding * 2 + row_h * scene.series.len() as i32;
        let left = width - px(16.0) - box_w;
        let top = px(16.0);

        root.draw(&Rectangle::new(
            [(left, top), (left + box_w, top + box_h)],
            theme.legend_fill.filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(left, top), (left + box_w, top + box_h)],
            theme.legend_border.stroke_width(1),
        ))?;

        let font = (FONT, LEGEND_FONT_SIZE * s)
            .into_font()
            .color(&theme.foreground)
            .pos(Pos::new(HPos::Left, VPos::Center));
        for (i, bar) in scene.series.iter().enumerate() {
            let row_top = top + padding + row_h * i as i32;
            let center_y = row_top + row_h / 2;
            let swatch_left = left + padding;
            root.draw(&Rectangle::new(
                [
                    (swatch_left, center_y - swatch / 2),
                    (swatch_left + swatch, center_y + swatch / 2),
                ],
                bar_color(bar.color).filled(),
            ))?;
            root.draw(&Text::new(
                bar.category_label.clone(),
                (swatch_left + swatch + padding, center_y),
                font.clone(),
            ))?;
        }
        Ok(())
    }
}

/// Outline of the pixel rectangle spanned by `a` and `b` with every corner
/// rounded. The radius shrinks to fit thin or short bars.
fn rounded_rect(a: (i32, i32), b: (i32, i32), radius: i32) -> Vec<(i32, i32)> {
    let (left, right) = (a.0.min(b.0), a.0.max(b.0));
    let (top, bottom) = (a.1.min(b.1), a.1.max(b.1));
    let r = radius.min((right - left) / 2).min((bottom - top) / 2).max(0);
    if r == 0 {
        return vec![(left, top), (right, top), (right, bottom), (left, bottom)];
    }

    // Corner centers clockwise from top-left, each with its starting angle.
    let corners = [
        ((left + r, top + r), std::f64::consts::PI),
        ((right - r, top + r), 1.5 * std::f64::consts::PI),
        ((right - r, bottom - r), 0.0),
        ((left + r, bottom - r), 0.5 * std::f64::consts::PI),
    ];
    let step = std::f64::consts::FRAC_PI_2 / CORNER_SEGMENTS as f64;
    corners
        .iter()
        .flat_map(|&((cx, cy), start)| {
            (0..=CORNER_SEGMENTS).map(move |k| {
                let angle = start + step * k as f64;
                (
                    cx + (r as f64 * angle.cos()).round() as i32,
                    cy + (r as f64 * angle.sin()).round() as i32,
                )
            })
        })
        .collect()
}
