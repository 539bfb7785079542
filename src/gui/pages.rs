//! Static pages: landing, feature gallery, placeholders and not-found.

use crate::gui::carousel::CarouselState;
use crate::routes::Route;
use egui::{Align, Color32, RichText, ScrollArea};

pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0x86, 0xb2, 0xab);
const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 26);

/// "graph" in white, "IQ" in black.
fn wordmark(ui: &mut egui::Ui, size: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new("graph").size(size).strong().color(Color32::WHITE));
        ui.label(RichText::new("IQ").size(size).strong().color(Color32::BLACK));
    });
}

fn centered_wordmark(ui: &mut egui::Ui, size: f32) {
    // Horizontal layouts do not center themselves; measure and pad.
    let width = size * 2.9;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
        wordmark(ui, size);
    });
}

fn info_card(ui: &mut egui::Ui, title: &str, body: &str, width: f32) {
    egui::Frame::none()
        .fill(PANEL_FILL)
        .rounding(8.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(width);
            ui.label(RichText::new(title).size(20.0).strong().color(Color32::WHITE));
            ui.add_space(12.0);
            ui.label(RichText::new(body).size(14.0).color(Color32::WHITE));
        });
}

/// Hero plus About section. `scroll_to_about` is consumed once the section is laid out.
pub fn landing(ui: &mut egui::Ui, scroll_to_about: &mut bool) -> Option<Route> {
    let mut target = None;

    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        let hero_height = ui.ctx().screen_rect().height();
        ui.allocate_ui(egui::vec2(ui.available_width(), hero_height), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(hero_height * 0.3);
                centered_wordmark(ui, 96.0);
                ui.add_space(32.0);
                ui.label(
                    RichText::new("Intelligent graph visualization and analysis platform")
                        .size(22.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(40.0);
                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - 300.0) / 2.0).max(0.0));
                    let get_started = egui::Button::new(
                        RichText::new("Get Started").size(16.0).strong().color(Color32::BLACK),
                    )
                    .fill(Color32::WHITE)
                    .min_size(egui::vec2(140.0, 44.0));
                    if ui.add(get_started).clicked() {
                        target = Some(Route::Features);
                    }
                    ui.add_space(16.0);
                    let learn_more = egui::Button::new(
                        RichText::new("Learn More").size(16.0).strong().color(Color32::WHITE),
                    )
                    .fill(Color32::TRANSPARENT)
                    .stroke(egui::Stroke::new(2.0, Color32::WHITE))
                    .min_size(egui::vec2(140.0, 44.0));
                    if ui.add(learn_more).clicked() {
                        *scroll_to_about = true;
                    }
                });
                ui.add_space(hero_height * 0.2);
            });
        });

        ui.vertical_centered(|ui| {
            ui.add_space(64.0);
            let heading = ui.label(
                RichText::new("About graphIQ")
                    .size(34.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            if std::mem::take(scroll_to_about) {
                heading.scroll_to_me(Some(Align::TOP));
            }
            ui.add_space(20.0);
            ui.label(
                RichText::new("Discover the power of intelligent graph visualization and analysis")
                    .size(18.0)
                    .color(Color32::WHITE),
            );
            ui.add_space(32.0);
            let card_width = 320.0;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - card_width * 2.0 - 80.0) / 2.0).max(0.0));
                info_card(
                    ui,
                    "Our Mission",
                    "To make graph analysis accessible to everyone through powerful yet intuitive visualization tools.",
                    card_width,
                );
                ui.add_space(32.0);
                info_card(
                    ui,
                    "Our Vision",
                    "Transform complex data relationships into clear, actionable insights for better decision making.",
                    card_width,
                );
            });
            ui.add_space(96.0);
        });
    });

    target
}

/// Home/Features links. Returns the clicked route.
pub fn nav_bar(ui: &mut egui::Ui, current: &Route) -> Option<Route> {
    let mut target = None;
    ui.horizontal(|ui| {
        for (label, route) in [("Home", Route::Home), ("Features", Route::Features)] {
            let text = RichText::new(label).size(16.0).color(Color32::WHITE);
            let text = if *current == route { text.strong().underline() } else { text };
            if ui.add(egui::Button::new(text).frame(false)).clicked() {
                target = Some(route);
            }
            ui.add_space(12.0);
        }
    });
    target
}

pub fn features(ui: &mut egui::Ui, carousel: &mut CarouselState) -> Option<Route> {
    let mut target = None;
    ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(24.0);
        wordmark(ui, 40.0);
        ui.add_space(12.0);
        target = nav_bar(ui, &Route::Features);
        ui.add_space(32.0);
        if let Some(route) = carousel.show(ui) {
            target = Some(route);
        }
    });
    target
}

/// Title, subtitle and a link back to the gallery.
pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) -> Option<Route> {
    let mut target = None;
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(title).size(40.0).strong().color(Color32::WHITE));
        ui.add_space(8.0);
        ui.label(RichText::new(subtitle).size(18.0).color(Color32::WHITE));
        ui.add_space(16.0);
        let back = egui::Button::new(
            RichText::new("Back to Features").size(14.0).color(Color32::BLACK),
        )
        .fill(Color32::WHITE);
        if ui.add(back).clicked() {
            target = Some(Route::Features);
        }
        ui.add_space(16.0);
    });
    target
}

pub fn placeholder(ui: &mut egui::Ui, route: &Route) -> Option<Route> {
    let (title, subtitle) = match route {
        Route::BoxPlot => (
            "Box Plot",
            "Understand data distribution with statistical analysis",
        ),
        Route::LinePlot => (
            "Line Plot",
            "Track trends over time with interactive line charts",
        ),
        _ => return not_found(ui, &route.path()),
    };
    page_header(ui, title, subtitle)
}

pub fn not_found(ui: &mut egui::Ui, path: &str) -> Option<Route> {
    let mut target = None;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("404").size(72.0).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(format!("No page lives at {path}"))
                .size(18.0)
                .color(Color32::WHITE),
        );
        ui.add_space(24.0);
        if ui.button(RichText::new("Go Home").size(16.0)).clicked() {
            target = Some(Route::Home);
        }
    });
    target
}
