//! Traits for the renderer system.

use crate::pdf::PdfError;

use super::models::FieldSet;

/// A document renderer: one complete page-described document from a field
/// mapping. Renderers are side-effect free apart from logging.
pub trait Gerador {
    /// Render the document as PDF bytes.
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError>;
}
