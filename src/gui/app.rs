//! graphIQ Main Application
//! Routes between pages and hosts the bar chart editor.

use crate::charts::{ChartProjector, StaticChartRenderer};
use crate::config::AppConfig;
use crate::data::{AxisConfigStore, AxisEdit, DataLoader, DataPointStore};
use crate::export::{
    DialogSink, DirectorySink, ExportError, ExportFormat, ExportPipeline, ExportReceipt,
    ExportRequest, PdfDocumentWriter,
};
use crate::gui::carousel::CarouselState;
use crate::gui::pages::{self, PAGE_BACKGROUND};
use crate::gui::{ChartViewer, ControlPanel, EditorAction};
use crate::routes::Route;
use crate::viewport::{ViewportNotifier, ViewportSize};
use anyhow::Context;
use egui::ScrollArea;
use std::path::Path;
use tracing::{error, info, warn};

/// Main application window.
pub struct GraphiqApp {
    config: AppConfig,
    route: Route,

    points: DataPointStore,
    axis: AxisConfigStore,
    loader: DataLoader,

    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    notifier: ViewportNotifier,
    carousel: CarouselState,
    scroll_to_about: bool,
}

impl GraphiqApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let axis = AxisConfigStore::new();
        let control_panel = ControlPanel::new(config.default_file_name.clone(), axis.config());
        Self {
            config,
            route: Route::Home,
            points: DataPointStore::new(),
            axis,
            loader: DataLoader::new(),
            control_panel,
            chart_viewer: ChartViewer::new(),
            notifier: ViewportNotifier::new(),
            carousel: CarouselState::new(),
            scroll_to_about: false,
        }
    }

    /// Switch pages, mounting or tearing down the editor surface.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = %self.route, to = %route, "navigate");
        if self.route.is_editor() {
            self.chart_viewer.unmount(&mut self.notifier);
        }
        if route.is_editor() {
            self.chart_viewer.mount(&mut self.notifier);
        }
        self.route = route;
    }

    fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::AddPoint => {
                self.points.add();
            }
            EditorAction::RemovePoint(id) => {
                self.points.remove(id);
            }
            EditorAction::Point(edit) => {
                self.points.apply(edit);
            }
            EditorAction::Axis(edit) => {
                let reset = edit == AxisEdit::Reset;
                self.axis.apply(edit);
                if reset {
                    self.control_panel.sync_axis(self.axis.config());
                }
            }
            EditorAction::YMinText(text) => self.axis.set_y_min_text(&text),
            EditorAction::YMaxText(text) => self.axis.set_y_max_text(&text),
            EditorAction::Export(format) => self.handle_export(format),
            EditorAction::ImportCsv => self.handle_import(),
            EditorAction::ClearPoints => self.points.clear(),
        }
    }

    fn run_export(&self, request: &ExportRequest) -> Result<ExportReceipt, ExportError> {
        let surface = self.chart_viewer.surface();
        if self.config.ask_save_location {
            ExportPipeline::new(
                StaticChartRenderer,
                PdfDocumentWriter::default(),
                DialogSink::new(&self.config.export_dir),
            )
            .export(surface, request)
        } else {
            ExportPipeline::new(
                StaticChartRenderer,
                PdfDocumentWriter::default(),
                DirectorySink::new(&self.config.export_dir),
            )
            .export(surface, request)
        }
    }

    fn handle_export(&mut self, format: ExportFormat) {
        let request = ExportRequest::new(format, self.control_panel.file_name.clone());
        match self.run_export(&request) {
            Ok(receipt) => {
                self.control_panel.status = Some(match &receipt.path {
                    Some(path) => format!("Saved {}", path.display()),
                    None => format!("{} export cancelled", format.label()),
                });
                if let (true, Some(path)) = (self.config.open_after_export, &receipt.path) {
                    if let Err(e) = open_artifact(path) {
                        warn!(error = %format!("{e:#}"), "could not open export");
                    }
                }
            }
            Err(_) => {
                // The pipeline has already logged the cause.
                self.control_panel.status = None;
                alert(&format.failure_message());
            }
        }
    }

    fn import_csv(&mut self) -> anyhow::Result<Option<usize>> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return Ok(None);
        };
        let imported = self
            .loader
            .load_csv(&path)
            .with_context(|| format!("importing {}", path.display()))?;
        Ok(Some(self.points.import(imported.rows)))
    }

    fn handle_import(&mut self) {
        match self.import_csv() {
            Ok(Some(count)) => {
                let source = self
                    .loader
                    .get_file_path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.control_panel.status = Some(format!("Imported {count} rows from {source}"));
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %format!("{e:#}"), "csv import failed");
                alert(&format!("Could not import CSV: {e:#}"));
            }
        }
    }

    fn show_editor(&mut self, ui: &mut egui::Ui) {
        if let Some(route) = pages::page_header(
            ui,
            "Bar Plot",
            "Compare categories easily with clear bar charts",
        ) {
            self.navigate(route);
            return;
        }

        let scene = ChartProjector::project(&self.points, &self.axis);
        let mut actions = Vec::new();

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.add_space(16.0);
                let series = scene.series.clone();
                self.chart_viewer.show(ui, scene);
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    actions.extend(self.control_panel.show_points(ui, &self.points, &series));
                });
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    actions.extend(self.control_panel.show_axis(ui, self.axis.config()));
                });
            });
        });

        for action in actions {
            self.apply(action);
        }
    }
}

fn alert(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("graphIQ")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn open_artifact(path: &Path) -> anyhow::Result<()> {
    open::that(path).with_context(|| format!("opening {}", path.display()))
}

impl eframe::App for GraphiqApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        self.notifier
            .observe(ViewportSize::new(screen.width(), screen.height()));

        let frame = egui::Frame::central_panel(&ctx.style()).fill(PAGE_BACKGROUND);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let target = match self.route.clone() {
                Route::Home => pages::landing(ui, &mut self.scroll_to_about),
                Route::Features => pages::features(ui, &mut self.carousel),
                Route::BarPlot => {
                    self.show_editor(ui);
                    None
                }
                route @ (Route::BoxPlot | Route::LinePlot) => pages::placeholder(ui, &route),
                Route::NotFound(path) => pages::not_found(ui, &path),
            };
            if let Some(route) = target {
                self.navigate(route);
            }
        });
    }
}
