use graphiq::charts::{ChartProjector, ChartSurface, Rasterizer, RenderError, StaticChartRenderer};
use graphiq::data::{AxisConfigStore, DataPointStore, PointEdit};
use graphiq::export::{
    CaptureError, DirectorySink, DocumentWriter, DownloadSink, EncodeError, ExportError,
    ExportFormat, ExportPipeline, ExportRequest, PdfDocumentWriter, CAPTURE_SCALE,
};
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// Solid raster of the requested size; never touches fonts.
#[derive(Default)]
struct SolidRasterizer {
    scales: RefCell<Vec<u32>>,
}

impl Rasterizer for SolidRasterizer {
    fn capture(&self, surface: &ChartSurface, scale: u32) -> Result<RgbaImage, RenderError> {
        self.scales.borrow_mut().push(scale);
        Ok(RgbaImage::from_pixel(
            surface.width * scale,
            surface.height * scale,
            Rgba([59, 130, 246, 255]),
        ))
    }
}

struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn capture(&self, _surface: &ChartSurface, _scale: u32) -> Result<RgbaImage, RenderError> {
        Err(RenderError::Drawing("backend gone".into()))
    }
}

struct BrokenWriter;

impl DocumentWriter for BrokenWriter {
    fn embed(&self, _raster: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
        Err(EncodeError::Pdf("no pages".into()))
    }
}

#[derive(Default)]
struct RecordingSink {
    delivered: RefCell<Vec<(String, Vec<u8>)>>,
}

impl DownloadSink for RecordingSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        self.delivered
            .borrow_mut()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(Some(PathBuf::from(file_name)))
    }
}

struct CancellingSink;

impl DownloadSink for CancellingSink {
    fn deliver(&self, _file_name: &str, _bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }
}

struct FailingSink;

impl DownloadSink for FailingSink {
    fn deliver(&self, _file_name: &str, _bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

fn surface() -> ChartSurface {
    let mut points = DataPointStore::new();
    let id = points.add();
    points.apply(PointEdit::SetLabel(id, "A".into()));
    points.apply(PointEdit::SetValue(id, "10".into()));
    let scene = ChartProjector::project(&points, &AxisConfigStore::new());
    ChartSurface::new(scene, 320, 180)
}

fn pipeline() -> ExportPipeline<SolidRasterizer, PdfDocumentWriter, RecordingSink> {
    ExportPipeline::new(
        SolidRasterizer::default(),
        PdfDocumentWriter::default(),
        RecordingSink::default(),
    )
}

#[test]
fn export_without_mounted_chart_is_a_capture_error_and_delivers_nothing() {
    let pipeline = pipeline();
    for format in ExportFormat::ALL {
        let err = pipeline
            .export(None, &ExportRequest::new(format, "bar-chart"))
            .expect_err("nothing mounted");
        assert!(matches!(err, ExportError::Capture(CaptureError::NotMounted)));
    }
    assert!(pipeline.sink().delivered.borrow().is_empty());
}

#[test]
fn file_name_is_suffixed_per_format() {
    let pipeline = pipeline();
    let surface = surface();
    let names: Vec<String> = ExportFormat::ALL
        .iter()
        .map(|&format| {
            pipeline
                .export(Some(&surface), &ExportRequest::new(format, "report"))
                .expect("export succeeds")
                .file_name
        })
        .collect();
    assert_eq!(names, vec!["report.png", "report.eps", "report.pdf"]);

    let delivered: Vec<String> = pipeline
        .sink()
        .delivered
        .borrow()
        .iter()
        .map(|(name, _)| name.clone())
        .collect();
    assert_eq!(delivered, names);
}

#[test]
fn capture_runs_at_double_scale() {
    let pipeline = pipeline();
    pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Png, "x"))
        .expect("export succeeds");

    assert_eq!(CAPTURE_SCALE, 2);
    let delivered = pipeline.sink().delivered.borrow();
    let decoded = image::load_from_memory(&delivered[0].1).expect("valid png");
    assert_eq!((decoded.width(), decoded.height()), (640, 360));
}

#[test]
fn eps_carries_the_same_png_bytes() {
    let pipeline = pipeline();
    let surface = surface();
    pipeline
        .export(Some(&surface), &ExportRequest::new(ExportFormat::Png, "a"))
        .expect("png");
    pipeline
        .export(Some(&surface), &ExportRequest::new(ExportFormat::Eps, "a"))
        .expect("eps");

    let delivered = pipeline.sink().delivered.borrow();
    assert_eq!(delivered[1].0, "a.eps");
    assert_eq!(delivered[0].1, delivered[1].1);
    assert!(delivered[1].1.starts_with(b"\x89PNG"));
}

#[test]
fn pdf_export_produces_a_pdf_document() {
    let pipeline = pipeline();
    let receipt = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Pdf, "doc"))
        .expect("pdf");

    let delivered = pipeline.sink().delivered.borrow();
    assert!(delivered[0].1.starts_with(b"%PDF"));
    assert_eq!(receipt.bytes, delivered[0].1.len());
}

#[test]
fn rasterizer_failure_surfaces_as_capture_error() {
    let pipeline = ExportPipeline::new(
        BrokenRasterizer,
        PdfDocumentWriter::default(),
        RecordingSink::default(),
    );
    let err = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Png, "x"))
        .expect_err("render fails");
    assert!(matches!(err, ExportError::Capture(CaptureError::Render(_))));
    assert!(pipeline.sink().delivered.borrow().is_empty());
}

#[test]
fn encode_failure_skips_delivery() {
    let pipeline = ExportPipeline::new(
        SolidRasterizer::default(),
        BrokenWriter,
        RecordingSink::default(),
    );
    let err = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Pdf, "x"))
        .expect_err("encode fails");
    assert!(matches!(err, ExportError::Encode(EncodeError::Pdf(_))));
    assert!(pipeline.sink().delivered.borrow().is_empty());
}

#[test]
fn delivery_failure_names_the_file() {
    let pipeline = ExportPipeline::new(
        SolidRasterizer::default(),
        PdfDocumentWriter::default(),
        FailingSink,
    );
    let err = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Png, "locked"))
        .expect_err("write fails");
    match err {
        ExportError::Deliver { file_name, source } => {
            assert_eq!(file_name, "locked.png");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cancelled_dialog_is_not_an_error() {
    let pipeline = ExportPipeline::new(
        SolidRasterizer::default(),
        PdfDocumentWriter::default(),
        CancellingSink,
    );
    let receipt = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Png, "x"))
        .expect("cancel is fine");
    assert!(receipt.path.is_none());
}

#[test]
fn directory_sink_writes_into_export_dir() {
    let dir = std::env::temp_dir().join(format!("graphiq-export-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let pipeline = ExportPipeline::new(
        SolidRasterizer::default(),
        PdfDocumentWriter::default(),
        DirectorySink::new(&dir),
    );

    let receipt = pipeline
        .export(Some(&surface()), &ExportRequest::new(ExportFormat::Png, "report"))
        .expect("export succeeds");
    let path = receipt.path.expect("written");
    assert_eq!(path, dir.join("report.png"));
    assert!(std::fs::read(&path).expect("readable").starts_with(b"\x89PNG"));

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn real_renderer_exports_double_size_png_and_pdf() {
    let pipeline = ExportPipeline::new(
        StaticChartRenderer,
        PdfDocumentWriter::default(),
        RecordingSink::default(),
    );
    let surface = surface();
    pipeline
        .export(Some(&surface), &ExportRequest::new(ExportFormat::Png, "chart"))
        .expect("png export");
    pipeline
        .export(Some(&surface), &ExportRequest::new(ExportFormat::Pdf, "chart"))
        .expect("pdf export");

    let delivered = pipeline.sink().delivered.borrow();
    let decoded = image::load_from_memory(&delivered[0].1).expect("valid png");
    assert_eq!(
        (decoded.width(), decoded.height()),
        (surface.width * CAPTURE_SCALE, surface.height * CAPTURE_SCALE)
    );
    // The default bar color shows up in the exported raster.
    let bar = Rgba([59, 130, 246, 255]);
    assert!(decoded.to_rgba8().pixels().any(|p| *p == bar));
    assert!(delivered[1].1.starts_with(b"%PDF"));
}

#[test]
fn directory_sink_keeps_earlier_exports() {
    let dir = std::env::temp_dir().join(format!("graphiq-export-keep-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let pipeline = ExportPipeline::new(
        SolidRasterizer::default(),
        PdfDocumentWriter::default(),
        DirectorySink::new(&dir),
    );
    let request = ExportRequest::new(ExportFormat::Png, "report");

    let first = pipeline.export(Some(&surface()), &request).expect("first");
    let second = pipeline.export(Some(&surface()), &request).expect("second");
    assert_eq!(first.path, Some(dir.join("report.png")));
    assert_eq!(second.path, Some(dir.join("report (1).png")));
    assert_eq!(second.file_name, "report.png");

    std::fs::remove_dir_all(&dir).expect("cleanup");
}
