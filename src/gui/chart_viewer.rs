//! Chart Viewer Widget
//! Displays the rendered bar chart and owns the mounted surface handle.
//! The surface is sized from the viewport and re-rendered whenever the
//! scene or the viewport changes.

use crate::charts::{
    ChartScene, ChartSurface, Rasterizer, StaticChartRenderer, MIN_SURFACE_HEIGHT,
    MIN_SURFACE_WIDTH,
};
use crate::viewport::{ListenerId, ViewportNotifier, ViewportSize};
use egui::{Color32, ColorImage, RichText, TextureHandle, TextureOptions};
use std::sync::mpsc::Receiver;
use tracing::{debug, warn};

/// Pixels per centimetre at 96 dpi.
const PX_PER_CM: f32 = 37.8;
const WIDTH_SHARE: f32 = 0.75;
const WIDTH_INSET_CM: f32 = 3.75;
const EXTRA_HEIGHT_CM: f32 = 4.0;

/// Chart size for a viewport: 75% of the width minus an inset, 16:9 plus room for titles.
pub fn surface_size(viewport: ViewportSize) -> (u32, u32) {
    let width = (viewport.width * WIDTH_SHARE - WIDTH_INSET_CM * PX_PER_CM).max(0.0);
    let height = width * 9.0 / 16.0 + EXTRA_HEIGHT_CM * PX_PER_CM;
    (width.round() as u32, height.round() as u32)
}

struct Subscription {
    id: ListenerId,
    rx: Receiver<ViewportSize>,
}

#[derive(Default)]
pub struct ChartViewer {
    renderer: StaticChartRenderer,
    subscription: Option<Subscription>,
    viewport: Option<ViewportSize>,
    /// Surface currently on screen; `None` while unmounted.
    mounted: Option<ChartSurface>,
    texture: Option<TextureHandle>,
    render_error: Option<String>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Start following viewport changes.
    pub fn mount(&mut self, notifier: &mut ViewportNotifier) {
        if self.subscription.is_some() {
            return;
        }
        let (id, rx) = notifier.subscribe();
        debug!(?id, "chart viewer mounted");
        self.subscription = Some(Subscription { id, rx });
    }

    /// Stop following the viewport and drop the surface.
    pub fn unmount(&mut self, notifier: &mut ViewportNotifier) {
        if let Some(sub) = self.subscription.take() {
            notifier.unsubscribe(sub.id);
            debug!(id = ?sub.id, "chart viewer unmounted");
        }
        self.mounted = None;
        self.texture = None;
        self.render_error = None;
    }

    /// Handle for export: the surface currently displayed.
    pub fn surface(&self) -> Option<&ChartSurface> {
        self.mounted.as_ref()
    }

    fn poll_viewport(&mut self) {
        if let Some(sub) = &self.subscription {
            if let Some(size) = sub.rx.try_iter().last() {
                self.viewport = Some(size);
            }
        }
    }

    /// Draw `scene`, re-rendering if it or the viewport changed since the last frame.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: ChartScene) {
        if !self.is_mounted() {
            return;
        }
        self.poll_viewport();

        let viewport = self.viewport.unwrap_or_else(|| {
            let rect = ui.ctx().screen_rect();
            ViewportSize::new(rect.width(), rect.height())
        });
        let (width, height) = surface_size(viewport);
        let surface = ChartSurface::new(scene, width, height);

        if self.mounted.as_ref() != Some(&surface) {
            self.refresh_texture(ui.ctx(), &surface);
            self.mounted = Some(surface);
        }

        let size = egui::vec2(width as f32, height as f32);
        egui::Frame::none()
            .fill(Color32::WHITE)
            .rounding(4.0)
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 4.0),
                blur: 8.0,
                spread: 0.0,
                color: Color32::from_black_alpha(38),
            })
            .show(ui, |ui| match (&self.texture, &self.render_error) {
                (Some(texture), None) => {
                    ui.add(egui::Image::from_texture((texture.id(), size)));
                }
                (_, Some(error)) => {
                    ui.allocate_ui(size, |ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new(error).color(Color32::from_rgb(220, 53, 69)));
                        });
                    });
                }
                (None, None) => {
                    ui.allocate_space(size);
                }
            });
    }

    fn refresh_texture(&mut self, ctx: &egui::Context, surface: &ChartSurface) {
        match self.renderer.capture(surface, 1) {
            Ok(raster) => {
                let size = [raster.width() as usize, raster.height() as usize];
                let image = ColorImage::from_rgba_unmultiplied(size, raster.as_raw());
                match &mut self.texture {
                    Some(texture) => texture.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("bar_chart", image, TextureOptions::LINEAR));
                    }
                }
                self.render_error = None;
            }
            Err(e) => {
                warn!(
                    width = surface.width,
                    height = surface.height,
                    error = %e,
                    "chart render failed"
                );
                self.render_error = Some(if surface.width < MIN_SURFACE_WIDTH
                    || surface.height < MIN_SURFACE_HEIGHT
                {
                    "Window too narrow to draw the chart".to_string()
                } else {
                    format!("Chart could not be drawn: {e}")
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_tracks_three_quarters_of_viewport_width() {
        let (w, h) = surface_size(ViewportSize::new(1600.0, 900.0));
        // 1200 - 141.75 wide, 1058.25 * 9 / 16 + 151.2 tall
        assert_eq!(w, 1058);
        assert_eq!(h, 746);
    }

    #[test]
    fn tiny_viewport_yields_zero_width() {
        let (w, _) = surface_size(ViewportSize::new(100.0, 100.0));
        assert_eq!(w, 0);
    }

    #[test]
    fn mount_subscribes_and_unmount_releases() {
        let mut notifier = ViewportNotifier::new();
        let mut viewer = ChartViewer::new();

        viewer.mount(&mut notifier);
        viewer.mount(&mut notifier);
        assert!(viewer.is_mounted());
        assert_eq!(notifier.listener_count(), 1);

        viewer.unmount(&mut notifier);
        assert!(!viewer.is_mounted());
        assert!(viewer.surface().is_none());
        assert_eq!(notifier.listener_count(), 0);
    }
}
