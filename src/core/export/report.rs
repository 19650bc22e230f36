//! PDF report synthesis
//!
//! The report is laid out top to bottom on A4 pages: a centered title, an
//! optional reference image, then one `label: value` line per reconciled
//! field at a fixed spacing. Layout is computed first ([`ReportPlan`]) and
//! then drawn with printpdf, whose origin is the bottom-left corner.

use crate::domain::{DisplayField, KhioneError, Result};
use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::{BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

/// Title printed at the top of every report
pub const REPORT_TITLE: &str = "Khione Compressor Analysis Results";

/// Name of the generated report file
pub const REPORT_FILENAME: &str = "Khione_Compressor_Analysis_Results.pdf";

const PT_TO_MM: f32 = 25.4 / 72.0;
const IMAGE_DPI: f32 = 300.0;
// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.55;

/// Page geometry and spacing, in millimetres and points
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_size: f32,
    pub body_size: f32,
    /// Gap below the title baseline
    pub title_gap: f32,
    pub image_width: f32,
    /// Gap below the image, or in its place when there is none
    pub image_gap: f32,
    pub line_spacing: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            title_size: 18.0,
            body_size: 12.0,
            title_gap: 10.0,
            image_width: 60.0,
            image_gap: 10.0,
            line_spacing: 7.0,
        }
    }
}

/// A text line positioned from the top-left corner of its page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Image box positioned from the top-left corner of the first page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Computed positions of everything on the report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub title: PlacedText,
    pub image: Option<PlacedImage>,
    /// Field lines per page; never empty
    pub pages: Vec<Vec<PlacedText>>,
}

/// Lays out and renders reports
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    layout: ReportLayout,
}

impl ReportBuilder {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Position the title, the image box and every field line
    ///
    /// `image_size` is the pixel size of the reference image, if any.
    pub fn plan(&self, fields: &[DisplayField], image_size: Option<(u32, u32)>) -> ReportPlan {
        let l = &self.layout;
        let mut y = l.margin;

        let title_width = approx_text_width(REPORT_TITLE, l.title_size);
        let title = PlacedText {
            text: REPORT_TITLE.to_string(),
            x: ((l.page_width - title_width) / 2.0).max(l.margin),
            y,
        };
        y += l.title_gap;

        let image = image_size
            .filter(|(w, h)| *w > 0 && *h > 0)
            .map(|(w, h)| {
                let height = h as f32 / w as f32 * l.image_width;
                let placed = PlacedImage {
                    x: (l.page_width - l.image_width) / 2.0,
                    y,
                    width: l.image_width,
                    height,
                };
                y += height;
                placed
            });
        y += l.image_gap;

        let mut pages = vec![Vec::new()];
        for field in fields {
            if y > l.page_height - l.margin {
                pages.push(Vec::new());
                y = l.margin;
            }
            if let Some(page) = pages.last_mut() {
                page.push(PlacedText {
                    text: field.to_string(),
                    x: l.margin,
                    y,
                });
            }
            y += l.line_spacing;
        }

        ReportPlan { title, image, pages }
    }

    /// Render the report to PDF bytes
    ///
    /// # Errors
    ///
    /// Returns an export error if the fonts cannot be embedded or the
    /// document cannot be serialized.
    pub fn render(&self, fields: &[DisplayField], image: Option<&DynamicImage>) -> Result<Vec<u8>> {
        let l = &self.layout;
        let plan = self.plan(fields, image.map(|img| img.dimensions()));

        let (doc, page, layer) =
            PdfDocument::new(REPORT_TITLE, Mm(l.page_width), Mm(l.page_height), "Layer 1");
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| KhioneError::Export(format!("Failed to add font: {e}")))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| KhioneError::Export(format!("Failed to add font: {e}")))?;

        let first = doc.get_page(page).get_layer(layer);
        self.draw_text(&first, &plan.title, l.title_size, &bold);

        if let (Some(placed), Some(img)) = (&plan.image, image) {
            draw_image(&first, placed, img, l.page_height);
        }

        for (index, lines) in plan.pages.iter().enumerate() {
            let current = if index == 0 {
                first.clone()
            } else {
                let (page, layer) = doc.add_page(Mm(l.page_width), Mm(l.page_height), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };
            for line in lines {
                self.draw_text(&current, line, l.body_size, &regular);
            }
        }

        tracing::debug!(
            fields = fields.len(),
            pages = plan.pages.len(),
            with_image = plan.image.is_some(),
            "Report rendered"
        );

        doc.save_to_bytes()
            .map_err(|e| KhioneError::Export(format!("PDF save failed: {e}")))
    }

    fn draw_text(&self, layer: &PdfLayerReference, text: &PlacedText, size: f32, font: &IndirectFontRef) {
        layer.use_text(
            text.text.clone(),
            size,
            Mm(text.x),
            Mm(self.layout.page_height - text.y),
            font,
        );
    }
}

fn draw_image(layer: &PdfLayerReference, placed: &PlacedImage, img: &DynamicImage, page_height: f32) {
    // Flatten alpha; the PDF image is placed on a white page
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let natural_width = rgb.width() as f32 / IMAGE_DPI * 25.4;
    let scale = placed.width / natural_width;

    Image::from_dynamic_image(&rgb).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(placed.x)),
            translate_y: Some(Mm(page_height - placed.y - placed.height)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}

fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::image_crate::RgbImage;

    fn fields(count: usize) -> Vec<DisplayField> {
        (0..count)
            .map(|i| DisplayField::new(format!("Field {i}"), format!("{i}.00")))
            .collect()
    }

    #[test]
    fn test_plan_without_image() {
        let plan = ReportBuilder::default().plan(&fields(2), None);

        assert!(plan.image.is_none());
        assert_eq!(plan.title.y, 15.0);
        assert_eq!(plan.pages.len(), 1);
        // margin + title gap + image gap
        assert_eq!(plan.pages[0][0].y, 35.0);
        assert_eq!(plan.pages[0][1].y, 42.0);
        assert_eq!(plan.pages[0][0].text, "Field 0: 0.00");
        assert_eq!(plan.pages[0][0].x, 15.0);
    }

    #[test]
    fn test_plan_with_image_keeps_aspect_ratio() {
        let plan = ReportBuilder::default().plan(&fields(1), Some((400, 200)));

        let image = plan.image.expect("image box");
        assert_eq!(image.width, 60.0);
        assert_eq!(image.height, 30.0);
        assert_eq!(image.x, 75.0);
        assert_eq!(image.y, 25.0);
        assert_eq!(plan.pages[0][0].y, 65.0);
    }

    #[test]
    fn test_plan_title_is_centered() {
        let plan = ReportBuilder::default().plan(&[], None);
        let width = approx_text_width(REPORT_TITLE, 18.0);
        assert!((plan.title.x * 2.0 + width - 210.0).abs() < 0.001);
        assert_eq!(plan.pages, vec![Vec::new()]);
    }

    #[test]
    fn test_plan_breaks_pages() {
        let plan = ReportBuilder::default().plan(&fields(60), None);

        assert!(plan.pages.len() > 1);
        assert_eq!(plan.pages.iter().map(Vec::len).sum::<usize>(), 60);
        assert_eq!(plan.pages[1][0].y, 15.0);
        for page in &plan.pages {
            for line in page {
                assert!(line.y <= 297.0 - 15.0 + 7.0);
            }
        }
    }

    #[test]
    fn test_render_produces_pdf() {
        let pdf = ReportBuilder::default().render(&fields(3), None).unwrap();
        assert!(pdf.len() > 5);
        assert_eq!(&pdf[0..5], b"%PDF-");
    }

    #[test]
    fn test_render_with_image() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(8, 4));
        let pdf = ReportBuilder::default()
            .render(&fields(3), Some(&image))
            .unwrap();
        assert_eq!(&pdf[0..5], b"%PDF-");
    }
}
