//! Page canvas: collects content-stream operations per page and assembles
//! the final document with `lopdf`.

use image::GenericImageView;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use super::fonts::{self, CoreFont};
use super::PdfError;

pub const A4_WIDTH: f32 = 595.276;
pub const A4_HEIGHT: f32 = 841.89;

pub fn mm(v: f32) -> f32 {
    v * 72.0 / 25.4
}

pub fn cm(v: f32) -> f32 {
    v * 72.0 / 2.54
}

/// A decoded-enough JPEG: raw bytes kept for DCTDecode passthrough, pixel
/// dimensions read up front so callers can preserve aspect ratio.
pub struct JpegImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    grayscale: bool,
}

impl JpegImage {
    pub fn load(data: Vec<u8>) -> Result<Self, PdfError> {
        let format = image::guess_format(&data)
            .map_err(|e| PdfError::Image(format!("unrecognized image data: {e}")))?;
        if format != image::ImageFormat::Jpeg {
            return Err(PdfError::Image(format!(
                "expected JPEG, got {format:?}"
            )));
        }
        let decoded = image::load_from_memory(&data)
            .map_err(|e| PdfError::Image(format!("jpeg decode failed: {e}")))?;
        let grayscale = matches!(
            decoded.color(),
            image::ColorType::L8 | image::ColorType::L16 | image::ColorType::La8
        );
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            grayscale,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

struct ImageSlot {
    name: String,
    width: u32,
    height: u32,
    grayscale: bool,
    data: Vec<u8>,
}

/// An A4 canvas. Coordinates are in PostScript points with the origin at
/// the bottom-left corner of the page.
pub struct Canvas {
    pages: Vec<Vec<Operation>>,
    images: Vec<ImageSlot>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            images: Vec::new(),
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        self.pages.last_mut().expect("canvas always has a page")
    }

    pub fn set_fill_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.ops().push(Operation::new(
            "rg",
            vec![Object::Real(r), Object::Real(g), Object::Real(b)],
        ));
    }

    pub fn rect_filled(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops().push(Operation::new(
            "re",
            vec![
                Object::Real(x),
                Object::Real(y),
                Object::Real(w),
                Object::Real(h),
            ],
        ));
        self.ops().push(Operation::new("f", vec![]));
    }

    pub fn rect_stroked(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops().push(Operation::new(
            "re",
            vec![
                Object::Real(x),
                Object::Real(y),
                Object::Real(w),
                Object::Real(h),
            ],
        ));
        self.ops().push(Operation::new("S", vec![]));
    }

    /// Show a run of text at the given baseline origin. `word_spacing` is
    /// extra width added to every WinAnsi space, which is how justified
    /// lines are spread. An explicit `color` is applied inside a saved
    /// graphics state so it does not leak into later draws.
    pub fn text_run(
        &mut self,
        font: CoreFont,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
        word_spacing: f32,
        color: Option<[f32; 3]>,
    ) {
        let encoded = fonts::encode_win_ansi(text);
        let ops = self.ops();
        if let Some([r, g, b]) = color {
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new(
                "rg",
                vec![Object::Real(r), Object::Real(g), Object::Real(b)],
            ));
        }
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(font.resource_name().into()),
                Object::Real(size),
            ],
        ));
        // Tw persists across text objects in the stream, so it is set on
        // every run rather than only when spreading a justified line.
        ops.push(Operation::new("Tw", vec![Object::Real(word_spacing)]));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(x), Object::Real(y)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encoded, lopdf::StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        if color.is_some() {
            ops.push(Operation::new("Q", vec![]));
        }
    }

    pub fn text(&mut self, font: CoreFont, size: f32, x: f32, y: f32, text: &str) {
        self.text_run(font, size, x, y, text, 0.0, None);
    }

    /// Show text centered on `center_x`.
    pub fn text_centered(&mut self, font: CoreFont, size: f32, center_x: f32, y: f32, text: &str) {
        let w = fonts::text_width(font, size, text);
        self.text(font, size, center_x - w / 2.0, y, text);
    }

    /// Place a previously loaded JPEG scaled to `w` x `h`.
    pub fn draw_image(&mut self, image: &JpegImage, x: f32, y: f32, w: f32, h: f32) {
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push(ImageSlot {
            name: name.clone(),
            width: image.width,
            height: image.height,
            grayscale: image.grayscale,
            data: image.data.clone(),
        });
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                Object::Real(w),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(h),
                Object::Real(x),
                Object::Real(y),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        ops.push(Operation::new("Q", vec![]));
    }

    /// Assemble the collected pages into final PDF bytes.
    pub fn finish(self) -> Result<Vec<u8>, PdfError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in CoreFont::ALL {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), id);
        }

        let mut xobject_dict = Dictionary::new();
        for slot in self.images {
            let color_space = if slot.grayscale {
                "DeviceGray"
            } else {
                "DeviceRGB"
            };
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => slot.width as i64,
                    "Height" => slot.height as i64,
                    "ColorSpace" => color_space,
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                slot.data,
            );
            let id = doc.add_object(Object::Stream(stream));
            xobject_dict.set(slot.name, id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
            "XObject" => xobject_dict,
        });

        let mut kids: Vec<Object> = Vec::new();
        let page_count = self.pages.len() as i64;
        for ops in self.pages {
            let content = Content { operations: ops };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(A4_WIDTH),
                    Object::Real(A4_HEIGHT),
                ],
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        Ok(out)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas_produces_loadable_pdf() {
        let canvas = Canvas::new();
        let bytes = canvas.finish().expect("assembly");
        let doc = Document::load_mem(&bytes).expect("reload");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn new_page_adds_a_page() {
        let mut canvas = Canvas::new();
        canvas.text(CoreFont::Helvetica, 12.0, 72.0, 700.0, "primeira");
        canvas.new_page();
        canvas.text(CoreFont::Helvetica, 12.0, 72.0, 700.0, "segunda");
        let bytes = canvas.finish().expect("assembly");
        let doc = Document::load_mem(&bytes).expect("reload");
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn rejects_non_jpeg_image_data() {
        let png_magic = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert!(JpegImage::load(png_magic).is_err());
    }
}
