//! Chart Plotter Module
//! Small sample plots drawn on the feature gallery cards using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points, Polygon};

/// Color palette for sample series
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(59, 130, 246); // Blue

pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(59, 130, 246),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
];

/// Which sample a gallery card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Line,
    Box,
    Bar,
    Pie,
    Scatter,
    Heatmap,
}

/// Deterministic pseudo-random wobble so samples look organic but never change.
fn wobble(i: usize) -> f64 {
    let x = (i as f64 * 12.9898).sin() * 43758.5453;
    x - x.floor()
}

/// Draws read-only sample charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a non-interactive sample for a gallery card.
    pub fn draw_sample(ui: &mut egui::Ui, kind: SampleKind, id: &str, height: f32) {
        let mut plot = Plot::new(format!("sample_{id}"))
            .height(height)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false);
        if kind == SampleKind::Pie {
            plot = plot.data_aspect(1.0);
        }

        plot.show(ui, |plot_ui| match kind {
            SampleKind::Line => {
                let points: PlotPoints = (0..40)
                    .map(|i| {
                        let x = i as f64 * 0.25;
                        [x, x.sin() * 2.0 + x * 0.4]
                    })
                    .collect();
                plot_ui.line(Line::new(points).color(ACCENT_COLOR).width(2.0));
            }
            SampleKind::Box => {
                let boxes = (0..3)
                    .map(|i| {
                        let base = 3.0 + i as f64 * 1.5;
                        BoxElem::new(
                            i as f64,
                            BoxSpread::new(base - 2.0, base - 0.8, base, base + 0.9, base + 2.2),
                        )
                        .box_width(0.5)
                        .fill(PALETTE[i].gamma_multiply(0.3))
                        .stroke(egui::Stroke::new(1.5, PALETTE[i]))
                    })
                    .collect();
                plot_ui.box_plot(BoxPlot::new(boxes));
            }
            SampleKind::Bar => {
                let bars = [4.0, 7.0, 3.0, 8.0, 5.0]
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Bar::new(i as f64, v).width(0.7).fill(PALETTE[i % PALETTE.len()]))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));
            }
            SampleKind::Pie => {
                let shares = [0.35, 0.25, 0.2, 0.2];
                let mut start = 0.0f64;
                for (i, share) in shares.iter().enumerate() {
                    let end = start + share * std::f64::consts::TAU;
                    let mut wedge = vec![[0.0, 0.0]];
                    let steps = 24;
                    for s in 0..=steps {
                        let a = start + (end - start) * s as f64 / steps as f64;
                        wedge.push([a.cos(), a.sin()]);
                    }
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(wedge))
                            .fill_color(PALETTE[i])
                            .stroke(egui::Stroke::new(1.0, Color32::WHITE)),
                    );
                    start = end;
                }
            }
            SampleKind::Scatter => {
                let points: PlotPoints = (0..60)
                    .map(|i| {
                        let x = wobble(i) * 10.0;
                        [x, x * 0.8 + wobble(i + 100) * 3.0]
                    })
                    .collect();
                plot_ui.points(Points::new(points).radius(3.0).color(ACCENT_COLOR));
            }
            SampleKind::Heatmap => {
                for row in 0..6 {
                    for col in 0..8 {
                        let t = wobble(row * 8 + col) as f32;
                        let color = Color32::from_rgb(
                            (40.0 + 215.0 * t) as u8,
                            (60.0 + 80.0 * (1.0 - t)) as u8,
                            (200.0 * (1.0 - t)) as u8,
                        );
                        let (x, y) = (col as f64, row as f64);
                        let cell = vec![[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0]];
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(cell))
                                .fill_color(color)
                                .stroke(egui::Stroke::NONE),
                        );
                    }
                }
            }
        });
    }
}
