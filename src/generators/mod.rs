//! Generators module - the document pipeline behind the submission form.
//!
//! One renderer per document type, plus the pieces they share:
//! - `sanitize` - the rich-text sanitizer run before anything else
//! - `citation` - bibliographic citation and level classification
//! - `validation` - per-type required fields and cross-field rules
//! - `assembler` - dispatch, collection and ZIP packaging

pub mod assembler;
pub mod capa;
pub mod citation;
pub mod common;
pub mod contracapa;
pub mod ficha;
pub mod models;
pub mod pagina_rosto;
pub mod resumo;
pub mod sanitize;
pub mod traits;
pub mod validation;

pub use assembler::{Assembler, Saida, NOME_PACOTE};
pub use models::{DocumentKind, FieldSet, Idioma};
pub use traits::Gerador;

use thiserror::Error;

use crate::pdf::PdfError;

/// Errors that can end a generation request. Asset problems never appear
/// here: the affected page renders without the asset.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{0}")]
    Validacao(String),
    #[error("falha ao renderizar {documento}: {fonte}")]
    Renderizacao {
        documento: &'static str,
        #[source]
        fonte: PdfError,
    },
    #[error("falha ao montar o pacote: {0}")]
    Pacote(#[from] zip::result::ZipError),
    #[error("falha de escrita no pacote: {0}")]
    PacoteIo(#[from] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct DocumentoGerado {
    pub nome: String,
    pub pdf: Vec<u8>,
}
