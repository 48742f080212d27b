//! Minimal PDF canvas layer over `lopdf`.
//!
//! Provides what the document generators need and nothing more: A4 pages,
//! filled rectangles, absolutely positioned text in the base-14 fonts, JPEG
//! XObjects, and a rich-text paragraph engine with measured wrapping.

pub mod canvas;
pub mod fonts;
pub mod rich;

pub use canvas::{cm, mm, Canvas, JpegImage, A4_HEIGHT, A4_WIDTH};
pub use fonts::CoreFont;
pub use rich::{Align, DocFlow, Paragraph, ParagraphStyle};

use thiserror::Error;

/// Errors raised while laying out or assembling a document.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("unsupported markup tag <{0}>")]
    Markup(String),
    #[error("image rejected: {0}")]
    Image(String),
    #[error("pdf assembly failed: {0}")]
    Assembly(#[from] lopdf::Error),
    #[error("pdf io failed: {0}")]
    Io(#[from] std::io::Error),
}
