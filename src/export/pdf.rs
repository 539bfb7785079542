//! Single-page A4 PDF documents wrapping a captured raster.

use crate::export::EncodeError;
use image::{DynamicImage, RgbaImage};
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};
use tracing::debug;

/// A4 short and long edges in millimetres.
pub const A4_SHORT_MM: f32 = 210.0;
pub const A4_LONG_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;

/// Embeds a raster into a paged document.
pub trait DocumentWriter {
    fn embed(&self, raster: &RgbaImage) -> Result<Vec<u8>, EncodeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Where the image lands on the page, in millimetres from the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub orientation: Orientation,
    pub page_width: f32,
    pub page_height: f32,
    pub image_width: f32,
    pub image_height: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl PageLayout {
    /// Landscape when the raster is wider than tall. The image fills the page
    /// along its limiting edge, keeps its aspect ratio and sits in the top-left corner.
    pub fn fit(width_px: u32, height_px: u32) -> Self {
        let (w, h) = (width_px.max(1) as f32, height_px.max(1) as f32);
        let orientation = if w > h {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        let (page_width, page_height) = match orientation {
            Orientation::Landscape => (A4_LONG_MM, A4_SHORT_MM),
            Orientation::Portrait => (A4_SHORT_MM, A4_LONG_MM),
        };

        let image_aspect = w / h;
        let page_aspect = page_width / page_height;
        let (image_width, image_height) = if image_aspect > page_aspect {
            (page_width, page_width / image_aspect)
        } else {
            (page_height * image_aspect, page_height)
        };

        Self {
            orientation,
            page_width,
            page_height,
            image_width,
            image_height,
            translate_x: 0.0,
            translate_y: page_height - image_height,
        }
    }

    /// Resolution at which `width_px` pixels span `image_width` millimetres.
    pub fn dpi_for(&self, width_px: u32) -> f32 {
        width_px.max(1) as f32 * MM_PER_INCH / self.image_width
    }
}

/// printpdf implementation of [`DocumentWriter`].
#[derive(Debug, Clone)]
pub struct PdfDocumentWriter {
    title: String,
}

impl Default for PdfDocumentWriter {
    fn default() -> Self {
        Self::new("graphIQ Bar Chart")
    }
}

impl PdfDocumentWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn embed(&self, raster: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
        let (width, height) = raster.dimensions();
        let layout = PageLayout::fit(width, height);

        let (doc, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(layout.page_width),
            Mm(layout.page_height),
            "Chart",
        );
        let layer = doc.get_page(page).get_layer(layer);

        // PDF images carry no alpha here; flatten to RGB.
        let rgb = DynamicImage::ImageRgba8(raster.clone()).to_rgb8();
        let xobject = ImageXObject {
            width: Px(width as usize),
            height: Px(height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: rgb.into_raw(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        };

        Image::from(xobject).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(layout.translate_x)),
                translate_y: Some(Mm(layout.translate_y)),
                scale_x: Some(1.0),
                scale_y: Some(1.0),
                dpi: Some(layout.dpi_for(width)),
                ..Default::default()
            },
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| EncodeError::Pdf(e.to_string()))?;
        debug!(
            width,
            height,
            orientation = ?layout.orientation,
            bytes = bytes.len(),
            "pdf document written"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wide_raster_goes_landscape_and_fills_width() {
        let layout = PageLayout::fit(2000, 1000);
        assert_eq!(layout.orientation, Orientation::Landscape);
        assert_relative_eq!(layout.page_width, 297.0);
        assert_relative_eq!(layout.image_width, 297.0);
        assert_relative_eq!(layout.image_height, 148.5);
        assert_relative_eq!(layout.translate_y, 210.0 - 148.5);
    }

    #[test]
    fn tall_raster_goes_portrait_and_fills_height() {
        let layout = PageLayout::fit(500, 1500);
        assert_eq!(layout.orientation, Orientation::Portrait);
        assert_relative_eq!(layout.image_height, 297.0);
        assert_relative_eq!(layout.image_width, 99.0);
        assert_relative_eq!(layout.translate_x, 0.0);
        assert_relative_eq!(layout.translate_y, 0.0);
    }

    #[test]
    fn square_raster_is_portrait() {
        let layout = PageLayout::fit(800, 800);
        assert_eq!(layout.orientation, Orientation::Portrait);
        assert_relative_eq!(layout.image_width, 210.0);
        assert_relative_eq!(layout.image_height, 210.0);
    }

    #[test]
    fn dpi_maps_pixels_onto_image_width() {
        let layout = PageLayout::fit(2970, 1000);
        assert_relative_eq!(layout.dpi_for(2970), 254.0, epsilon = 1e-3);
    }

    #[test]
    fn writes_a_pdf_document() {
        let raster = RgbaImage::from_pixel(40, 20, image::Rgba([255, 0, 0, 255]));
        let bytes = PdfDocumentWriter::default().embed(&raster).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
