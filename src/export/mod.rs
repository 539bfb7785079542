//! Export module - Capture the mounted chart, encode it and hand it to a sink
//!
//! Every export runs the same three stages:
//! 1. Capture: rasterize the mounted surface at `CAPTURE_SCALE`
//! 2. Encode: PNG bytes, the same bytes for EPS, or an A4 PDF page
//! 3. Deliver: pass `{file_name}.{ext}` and the bytes to a [`DownloadSink`]
//!
//! Nothing is delivered unless the first two stages succeed.

mod pdf;
mod sink;

pub use pdf::{DocumentWriter, Orientation, PageLayout, PdfDocumentWriter, A4_LONG_MM, A4_SHORT_MM};
pub use sink::{DialogSink, DirectorySink, DownloadSink};

use crate::charts::{ChartSurface, Rasterizer, RenderError};
use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::io::{self, Cursor};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info, warn};

/// Capture resolution multiplier.
pub const CAPTURE_SCALE: u32 = 2;

pub const DEFAULT_FILE_NAME: &str = "bar-chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Eps,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Eps, ExportFormat::Pdf];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Eps => "eps",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Eps => "EPS",
            ExportFormat::Pdf => "PDF",
        }
    }

    /// Text of the blocking alert shown when an export fails.
    pub fn failure_message(self) -> String {
        format!("Error saving {}. Please try again.", self.label())
    }

    pub fn file_name(self, base: &str) -> String {
        format!("{}.{}", base, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Free text, used unsanitized.
    pub file_name: String,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, file_name: impl Into<String>) -> Self {
        Self {
            format,
            file_name: file_name.into(),
        }
    }

    pub fn target_name(&self) -> String {
        self.format.file_name(&self.file_name)
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub file_name: String,
    /// `None` when the save dialog was cancelled.
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("no chart surface is mounted")]
    NotMounted,
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
    #[error("PDF encoding failed: {0}")]
    Pdf(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("could not write {file_name}: {source}")]
    Deliver {
        file_name: String,
        #[source]
        source: io::Error,
    },
}

/// Capture, encode, deliver.
pub struct ExportPipeline<R, D, S> {
    rasterizer: R,
    writer: D,
    sink: S,
}

impl<R: Rasterizer, D: DocumentWriter, S: DownloadSink> ExportPipeline<R, D, S> {
    pub fn new(rasterizer: R, writer: D, sink: S) -> Self {
        Self {
            rasterizer,
            writer,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export the mounted surface. `surface` is `None` when no chart is on screen.
    pub fn export(
        &self,
        surface: Option<&ChartSurface>,
        request: &ExportRequest,
    ) -> Result<ExportReceipt, ExportError> {
        let result = self.run(surface, request);
        if let Err(e) = &result {
            error!(format = %request.format, file_name = %request.file_name, error = %e, "export failed");
        }
        result
    }

    fn run(
        &self,
        surface: Option<&ChartSurface>,
        request: &ExportRequest,
    ) -> Result<ExportReceipt, ExportError> {
        let raster = self.capture(surface)?;
        let bytes = self.encode(&raster, request.format)?;

        let file_name = request.target_name();
        let path = self
            .sink
            .deliver(&file_name, &bytes)
            .map_err(|source| ExportError::Deliver {
                file_name: file_name.clone(),
                source,
            })?;

        info!(
            format = %request.format,
            file_name = %file_name,
            bytes = bytes.len(),
            delivered = path.is_some(),
            "export finished"
        );
        Ok(ExportReceipt {
            format: request.format,
            file_name,
            path,
            bytes: bytes.len(),
        })
    }

    fn capture(&self, surface: Option<&ChartSurface>) -> Result<RgbaImage, CaptureError> {
        let surface = surface.ok_or(CaptureError::NotMounted)?;
        Ok(self.rasterizer.capture(surface, CAPTURE_SCALE)?)
    }

    fn encode(&self, raster: &RgbaImage, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
        match format {
            ExportFormat::Png => encode_png(raster),
            ExportFormat::Eps => {
                warn!("EPS export writes PNG-encoded bytes under an .eps name");
                encode_png(raster)
            }
            ExportFormat::Pdf => self.writer.embed(raster),
        }
    }
}

pub fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    raster.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
