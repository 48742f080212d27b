//! Parsing of the urlencoded submission into the core request model.

use crate::generators::{DocumentKind, FieldSet};

/// A parsed form submission: the field mapping plus the multi-valued
/// `documentos` selection, de-duplicated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct PedidoGeracao {
    pub dados: FieldSet,
    pub tipos: Vec<DocumentKind>,
}

impl PedidoGeracao {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut dados = FieldSet::new();
        let mut tipos = Vec::new();
        for (chave, valor) in pairs {
            if chave == "documentos" {
                if let Some(kind) = DocumentKind::from_tag(valor.trim()) {
                    if !tipos.contains(&kind) {
                        tipos.push(kind);
                    }
                }
            } else {
                dados.set(chave, valor);
            }
        }
        Self { dados, tipos }
    }
}
