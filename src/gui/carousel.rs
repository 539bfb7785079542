//! Feature gallery carousel.

use crate::charts::{ChartPlotter, SampleKind};
use crate::routes::{slug, Route};
use egui::{Color32, RichText, ScrollArea};

pub const CARD_WIDTH: f32 = 350.0;
pub const CARD_GAP: f32 = 30.0;
/// One card plus the gap after it.
pub const CAROUSEL_STEP: f32 = CARD_WIDTH + CARD_GAP;

const CARD_HEIGHT: f32 = 420.0;
const SAMPLE_HEIGHT: f32 = 180.0;

#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub sample: SampleKind,
}

impl FeatureCard {
    pub fn route(&self) -> Route {
        Route::for_plot(self.title)
    }
}

pub const FEATURE_CARDS: [FeatureCard; 6] = [
    FeatureCard {
        category: "Data Visualization",
        title: "Line Plot",
        description: "Visualize data trends and patterns over time with smooth, interactive line charts. Perfect for time series analysis and trend identification.",
        sample: SampleKind::Line,
    },
    FeatureCard {
        category: "Statistical Analysis",
        title: "Box Plot",
        description: "Analyze statistical distributions, identify outliers, and compare data sets with comprehensive box and whisker plots.",
        sample: SampleKind::Box,
    },
    FeatureCard {
        category: "Data Comparison",
        title: "Bar Plot",
        description: "Compare values across different categories with clear, readable bar charts. Ideal for categorical data analysis and comparisons.",
        sample: SampleKind::Bar,
    },
    FeatureCard {
        category: "Proportional Data",
        title: "Pie Plot",
        description: "Display proportional relationships and percentages with beautiful, interactive pie charts. Great for showing parts of a whole.",
        sample: SampleKind::Pie,
    },
    FeatureCard {
        category: "Correlation Analysis",
        title: "Scatter Plot",
        description: "Discover relationships and correlations between two variables with interactive scatter plots. Perfect for correlation analysis.",
        sample: SampleKind::Scatter,
    },
    FeatureCard {
        category: "Pattern Recognition",
        title: "Heatmap",
        description: "Display data density and patterns using color-coded heatmaps. Excellent for matrix data and pattern recognition.",
        sample: SampleKind::Heatmap,
    },
];

/// Width of a strip of `cards` cards.
pub fn strip_width(cards: usize) -> f32 {
    if cards == 0 {
        return 0.0;
    }
    cards as f32 * CARD_WIDTH + (cards - 1) as f32 * CARD_GAP
}

/// Horizontal scroll position of the gallery.
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    offset: f32,
    content_width: f32,
    viewport_width: f32,
    /// Offset requested by an arrow, applied on the next draw.
    pending: Option<f32>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Record what the scroll area measured this frame.
    pub fn sync(&mut self, offset: f32, content_width: f32, viewport_width: f32) {
        self.content_width = content_width;
        self.viewport_width = viewport_width;
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn at_start(&self) -> bool {
        self.offset <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset() - 1.0
    }

    pub fn scroll_left(&mut self) {
        self.scroll_by(-CAROUSEL_STEP);
    }

    pub fn scroll_right(&mut self) {
        self.scroll_by(CAROUSEL_STEP);
    }

    fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        self.pending = Some(self.offset);
    }

    /// Draw the arrows and the card strip. Returns the route of a clicked card.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let mut target = None;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.at_start(), egui::Button::new(RichText::new("◀").size(18.0)))
                .clicked()
            {
                self.scroll_left();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.at_end(), egui::Button::new(RichText::new("▶").size(18.0)))
                    .clicked()
                {
                    self.scroll_right();
                }
            });
        });
        ui.add_space(12.0);

        let mut area = ScrollArea::horizontal()
            .id_salt("feature_carousel")
            .auto_shrink([false, true]);
        if let Some(offset) = self.pending.take() {
            area = area.horizontal_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = CARD_GAP;
                for card in &FEATURE_CARDS {
                    if Self::draw_card(ui, card) {
                        target = Some(card.route());
                    }
                }
            });
        });
        self.sync(
            output.state.offset.x,
            output.content_size.x,
            output.inner_rect.width(),
        );

        target
    }

    fn draw_card(ui: &mut egui::Ui, card: &FeatureCard) -> bool {
        let inner_margin = 16.0;
        let response = egui::Frame::none()
            .fill(Color32::WHITE)
            .rounding(16.0)
            .inner_margin(inner_margin)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH - inner_margin * 2.0);
                ui.set_height(CARD_HEIGHT - inner_margin * 2.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(card.category)
                            .size(12.0)
                            .color(Color32::from_rgb(115, 115, 115)),
                    );
                    ui.label(
                        RichText::new(card.title)
                            .size(22.0)
                            .strong()
                            .color(Color32::BLACK),
                    );
                    ui.add_space(8.0);
                    ChartPlotter::draw_sample(ui, card.sample, &slug(card.title), SAMPLE_HEIGHT);
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(card.description)
                            .size(13.0)
                            .color(Color32::from_rgb(64, 64, 64)),
                    );
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        response.clicked()
    }
}
