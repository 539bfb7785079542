//! Control Panel Widget
//! Editor columns next to the chart: data point cards, axis styling and export.
//! Widgets never mutate the stores; they return [`EditorAction`]s for the app to apply.

use crate::data::{
    Axis, AxisConfig, AxisEdit, DataPointStore, HexColor, Nudge, PointEdit, PointId,
    SeriesSummary, StyleVariant,
};
use crate::charts::RenderSeries;
use crate::export::ExportFormat;
use egui::{Color32, ComboBox, RichText, TextEdit};

const COLUMN_WIDTH: f32 = 200.0;
const CARD_FILL: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb);
const LABEL_COLOR: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Actions triggered by the editor controls
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    AddPoint,
    RemovePoint(PointId),
    Point(PointEdit),
    Axis(AxisEdit),
    YMinText(String),
    YMaxText(String),
    Export(ExportFormat),
    ImportCsv,
    ClearPoints,
}

/// Text buffers for fields whose raw input differs from the stored value.
pub struct ControlPanel {
    pub file_name: String,
    y_min_text: String,
    y_max_text: String,
    pub status: Option<String>,
}

impl ControlPanel {
    pub fn new(file_name: impl Into<String>, axis: &AxisConfig) -> Self {
        Self {
            file_name: file_name.into(),
            y_min_text: axis.y_min.to_string(),
            y_max_text: axis.y_max.to_string(),
            status: None,
        }
    }

    /// Re-read the y bounds after the store changed underneath the buffers.
    pub fn sync_axis(&mut self, axis: &AxisConfig) {
        self.y_min_text = axis.y_min.to_string();
        self.y_max_text = axis.y_max.to_string();
    }

    fn field_label(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(12.0).strong().color(LABEL_COLOR));
    }

    fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        egui::Frame::none()
            .fill(CARD_FILL)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(COLUMN_WIDTH - 20.0);
                add_contents(ui)
            })
            .inner
    }

    /// First column: one card per data point.
    pub fn show_points(
        &mut self,
        ui: &mut egui::Ui,
        points: &DataPointStore,
        series: &RenderSeries,
    ) -> Vec<EditorAction> {
        let mut actions = Vec::new();
        ui.set_width(COLUMN_WIDTH);

        let add = egui::Button::new(RichText::new("Add Value").strong().color(Color32::WHITE))
            .fill(Color32::from_rgb(0x25, 0x63, 0xeb))
            .min_size(egui::vec2(COLUMN_WIDTH, 32.0));
        if ui.add(add).clicked() {
            actions.push(EditorAction::AddPoint);
        }
        ui.horizontal(|ui| {
            if ui.small_button("Import CSV…").clicked() {
                actions.push(EditorAction::ImportCsv);
            }
            if ui
                .add_enabled(!points.is_empty(), egui::Button::new("Clear").small())
                .clicked()
            {
                actions.push(EditorAction::ClearPoints);
            }
        });
        ui.add_space(8.0);

        for point in points.points() {
            Self::card(ui, |ui| {
                let id = point.id;

                Self::field_label(ui, "Label");
                let mut label = point.label.clone();
                if ui
                    .add(TextEdit::singleline(&mut label).hint_text("Enter label..."))
                    .changed()
                {
                    actions.push(EditorAction::Point(PointEdit::SetLabel(id, label)));
                }

                Self::field_label(ui, "Value");
                let mut value = point.value.clone();
                if ui
                    .add(TextEdit::singleline(&mut value).hint_text("Enter value..."))
                    .changed()
                {
                    actions.push(EditorAction::Point(PointEdit::SetValue(id, value)));
                }

                Self::field_label(ui, "Color");
                ui.horizontal(|ui| {
                    let mut rgb = point.color.0;
                    if ui.color_edit_button_srgb(&mut rgb).changed() {
                        actions.push(EditorAction::Point(PointEdit::SetColor(id, HexColor(rgb))));
                    }
                    ui.monospace(point.color.to_string());
                });

                ui.add_space(4.0);
                let remove = egui::Button::new(RichText::new("Remove").color(Color32::WHITE))
                    .fill(Color32::from_rgb(0xef, 0x44, 0x44));
                if ui.add(remove).clicked() {
                    actions.push(EditorAction::RemovePoint(id));
                }
            });
            ui.add_space(6.0);
        }

        if let Some(summary) = SeriesSummary::from_series(series) {
            ui.add_space(6.0);
            Self::card(ui, |ui| Self::draw_summary(ui, &summary));
        }

        actions
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &SeriesSummary) {
        Self::field_label(ui, "Summary");
        egui::Grid::new("series_summary")
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                let rows = [
                    ("Bars", summary.count.to_string()),
                    ("Mean", format!("{:.2}", summary.mean)),
                    ("Median", format!("{:.2}", summary.median)),
                    ("Std", format!("{:.2}", summary.std)),
                    ("Min", format!("{:.2}", summary.min)),
                    ("Max", format!("{:.2}", summary.max)),
                ];
                for (name, value) in rows {
                    ui.label(RichText::new(name).size(11.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(11.0).monospace());
                    ui.end_row();
                }
            });
    }

    fn axis_label_row(
        ui: &mut egui::Ui,
        actions: &mut Vec<EditorAction>,
        axis: Axis,
        text: &str,
        size: u32,
    ) {
        let (title, hint) = match axis {
            Axis::X => ("X Label", "X axis..."),
            Axis::Y => ("Y Label", "Y axis..."),
        };
        Self::field_label(ui, title);
        ui.horizontal(|ui| {
            let mut label = text.to_string();
            if ui
                .add(TextEdit::singleline(&mut label).hint_text(hint).desired_width(100.0))
                .changed()
            {
                actions.push(EditorAction::Axis(AxisEdit::SetLabel(axis, label)));
            }
            if ui.small_button("+").clicked() {
                actions.push(EditorAction::Axis(AxisEdit::GrowLabel(axis)));
            }
            if ui.small_button("-").clicked() {
                actions.push(EditorAction::Axis(AxisEdit::ShrinkLabel(axis)));
            }
            ui.label(RichText::new(size.to_string()).size(11.0).color(Color32::GRAY));
        });
    }

    fn joystick(ui: &mut egui::Ui, actions: &mut Vec<EditorAction>, axis: Axis) {
        let title = match axis {
            Axis::X => "X Label Position",
            Axis::Y => "Y Label Position",
        };
        Self::field_label(ui, title);
        ui.horizontal(|ui| {
            for (glyph, nudge) in [
                ("←", Nudge::Left),
                ("→", Nudge::Right),
                ("↑", Nudge::Up),
                ("↓", Nudge::Down),
            ] {
                if ui.button(glyph).clicked() {
                    actions.push(EditorAction::Axis(AxisEdit::Nudge(axis, nudge)));
                }
            }
        });
    }

    /// Second column: axis styling, reset and export.
    pub fn show_axis(&mut self, ui: &mut egui::Ui, config: &AxisConfig) -> Vec<EditorAction> {
        let mut actions = Vec::new();
        ui.set_width(COLUMN_WIDTH);

        Self::card(ui, |ui| {
            Self::axis_label_row(ui, &mut actions, Axis::X, &config.x_label, config.x_label_size);
            ui.add_space(4.0);
            Self::axis_label_row(ui, &mut actions, Axis::Y, &config.y_label, config.y_label_size);
            ui.add_space(4.0);

            Self::field_label(ui, "Y Min");
            if ui
                .add(TextEdit::singleline(&mut self.y_min_text).hint_text("0"))
                .changed()
            {
                actions.push(EditorAction::YMinText(self.y_min_text.clone()));
            }
            Self::field_label(ui, "Y Max");
            if ui
                .add(TextEdit::singleline(&mut self.y_max_text).hint_text("100"))
                .changed()
            {
                actions.push(EditorAction::YMaxText(self.y_max_text.clone()));
            }

            Self::field_label(ui, "Style");
            ComboBox::from_id_salt("chart_style")
                .width(COLUMN_WIDTH - 30.0)
                .selected_text(config.style.name())
                .show_ui(ui, |ui| {
                    for style in StyleVariant::ALL {
                        if ui.selectable_label(config.style == style, style.name()).clicked() {
                            actions.push(EditorAction::Axis(AxisEdit::SetStyle(style)));
                        }
                    }
                });
        });
        ui.add_space(8.0);

        Self::card(ui, |ui| {
            Self::joystick(ui, &mut actions, Axis::X);
            Self::joystick(ui, &mut actions, Axis::Y);
            ui.add_space(4.0);
            if ui.button("Default").clicked() {
                actions.push(EditorAction::Axis(AxisEdit::Reset));
            }
        });
        ui.add_space(8.0);

        Self::card(ui, |ui| {
            for format in ExportFormat::ALL {
                let button = egui::Button::new(
                    RichText::new(format!("Save {}", format.label())).color(Color32::WHITE),
                )
                .fill(Color32::from_rgb(0x16, 0xa3, 0x4a))
                .min_size(egui::vec2(COLUMN_WIDTH - 20.0, 28.0));
                if ui.add(button).clicked() {
                    actions.push(EditorAction::Export(format));
                }
            }
            ui.add_space(4.0);
            Self::field_label(ui, "File Name");
            ui.add(TextEdit::singleline(&mut self.file_name).hint_text("bar-chart"));
        });

        if let Some(status) = &self.status {
            ui.add_space(6.0);
            ui.label(RichText::new(status).size(11.0).color(Color32::WHITE));
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AxisConfigStore;

    #[test]
    fn buffers_follow_axis_after_sync() {
        let mut axis = AxisConfigStore::new();
        let mut panel = ControlPanel::new("bar-chart", axis.config());
        assert_eq!(panel.y_min_text, "0");
        assert_eq!(panel.y_max_text, "100");

        axis.set_y_max(50.0);
        panel.sync_axis(axis.config());
        assert_eq!(panel.y_max_text, "50");
    }
}
