//! Core request data: the flat field mapping submitted by the form and the
//! fixed set of document types it can ask for.

use std::collections::HashMap;

/// Flat mapping of form field name to value. Every lookup defaults to the
/// empty string; required/optional is enforced per document type by the
/// validation module, not here.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    valores: HashMap<String, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, chave: impl Into<String>, valor: impl Into<String>) {
        self.valores.insert(chave.into(), valor.into());
    }

    /// Field value, or `""` when absent.
    pub fn get(&self, chave: &str) -> &str {
        self.valores.get(chave).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, chave: &str) -> bool {
        self.get(chave).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.valores.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Declared primary language of the work. Anything the form cannot produce
/// parses as Portuguese.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idioma {
    Portugues,
    Ingles,
}

impl Idioma {
    pub fn from_fields(dados: &FieldSet) -> Self {
        if dados.get("idioma").trim() == "Inglês" {
            Idioma::Ingles
        } else {
            Idioma::Portugues
        }
    }
}

/// The fixed enumeration of generatable documents. `ALL` is also the
/// generation (and archive entry) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Capa,
    PaginaRosto,
    Ficha,
    Contracapa,
    Resumo,
    Abstract,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Capa,
        DocumentKind::PaginaRosto,
        DocumentKind::Ficha,
        DocumentKind::Contracapa,
        DocumentKind::Resumo,
        DocumentKind::Abstract,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Capa => "capa",
            DocumentKind::PaginaRosto => "pagina_rosto",
            DocumentKind::Ficha => "ficha",
            DocumentKind::Contracapa => "contracapa",
            DocumentKind::Resumo => "resumo",
            DocumentKind::Abstract => "abstract",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }

    pub fn nome_arquivo(&self) -> String {
        format!("{}.pdf", self.tag())
    }

    /// Label shown to the user in the form and in the JSON listing.
    pub fn rotulo(&self) -> &'static str {
        match self {
            DocumentKind::Capa => "Capa",
            DocumentKind::PaginaRosto => "Página de rosto",
            DocumentKind::Ficha => "Ficha catalográfica",
            DocumentKind::Contracapa => "Contracapa",
            DocumentKind::Resumo => "Resumo",
            DocumentKind::Abstract => "Abstract",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fieldset_defaults_to_empty() {
        let dados = FieldSet::new();
        assert_eq!(dados.get("titulo"), "");
        assert!(dados.is_blank("titulo"));
    }

    #[test]
    fn idioma_defaults_to_portugues() {
        let mut dados = FieldSet::new();
        assert_eq!(Idioma::from_fields(&dados), Idioma::Portugues);
        dados.set("idioma", "Inglês");
        assert_eq!(Idioma::from_fields(&dados), Idioma::Ingles);
        dados.set("idioma", "Espanhol");
        assert_eq!(Idioma::from_fields(&dados), Idioma::Portugues);
    }

    #[test]
    fn tags_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(DocumentKind::from_tag("recibo"), None);
    }
}
