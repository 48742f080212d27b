//! Resumo and abstract pages: a flowed document (heading, citation, body,
//! keyword line) that paginates when the body overflows.
//!
//! The pair is symmetric; each renderer picks its heading, keyword base and
//! title override from the declared primary language. The crossed heading
//! choice reproduces the dual-heading convention of the submission system:
//! the language dispatch happens in the assembler, the per-language labels
//! here.

use crate::pdf::{
    cm, Align, Canvas, CoreFont, DocFlow, Paragraph, ParagraphStyle, PdfError,
};

use super::citation::texto_citacao;
use super::common::filtrar_chaves;
use super::models::{FieldSet, Idioma};
use super::traits::Gerador;

fn render_fluxo(
    dados: &FieldSet,
    cabecalho: &str,
    citacao: String,
    corpo: &str,
    base_chaves: &str,
    rotulo_chaves: &str,
    entrelinha_citacao: f32,
) -> Result<Vec<u8>, PdfError> {
    let mut c = Canvas::new();
    {
        let mut flow = DocFlow::new(&mut c, cm(2.5), cm(2.5), cm(2.5), cm(2.5));

        let s_cabecalho =
            ParagraphStyle::new(CoreFont::HelveticaBold, 12.0, 14.0, Align::Center);
        flow.add(&Paragraph::parse(cabecalho, s_cabecalho)?, cm(1.0));

        let s_citacao = ParagraphStyle::new(
            CoreFont::Helvetica,
            12.0,
            entrelinha_citacao,
            Align::Justify,
        );
        flow.add(&Paragraph::parse(&citacao, s_citacao)?, cm(1.0));

        let s_corpo = ParagraphStyle::new(CoreFont::Helvetica, 12.0, 18.0, Align::Justify);
        flow.add(&Paragraph::parse(corpo, s_corpo)?, cm(1.0));

        let chaves = filtrar_chaves(dados, base_chaves);
        if !chaves.is_empty() {
            let s_chaves = ParagraphStyle::new(CoreFont::Helvetica, 12.0, 15.0, Align::Left);
            let linha = format!("{rotulo_chaves}{}", chaves.join(", "));
            flow.add(&Paragraph::parse(&linha, s_chaves)?, 0.0);
        }
    }
    c.finish()
}

/// Renders the `resumo.pdf` body. The heading flips to `ABSTRACT` when the
/// declared primary language is English.
pub struct ResumoGenerator {
    pub idioma_principal: Idioma,
}

impl Gerador for ResumoGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let cabecalho = match self.idioma_principal {
            Idioma::Ingles => "ABSTRACT",
            Idioma::Portugues => "RESUMO",
        };
        let (base_chaves, rotulo_chaves) = match self.idioma_principal {
            Idioma::Ingles => ("keyword", "<b>Keywords:</b> "),
            Idioma::Portugues => ("chave", "<b>Palavras-chave:</b> "),
        };
        let citacao = texto_citacao(
            dados,
            false,
            Some(dados.get("titulo")),
            Some(dados.get("subtitulo")),
        );
        render_fluxo(
            dados,
            cabecalho,
            citacao,
            dados.get("resumo"),
            base_chaves,
            rotulo_chaves,
            14.0,
        )
    }
}

/// Renders the `abstract.pdf` body, with the translated title feeding the
/// citation and the label/keyword choice mirrored.
pub struct AbstractGenerator {
    pub idioma_principal: Idioma,
}

impl Gerador for AbstractGenerator {
    fn gerar(&self, dados: &FieldSet) -> Result<Vec<u8>, PdfError> {
        let cabecalho = match self.idioma_principal {
            Idioma::Ingles => "RESUMO",
            Idioma::Portugues => "ABSTRACT",
        };
        let (base_chaves, rotulo_chaves) = match self.idioma_principal {
            Idioma::Ingles => ("chave", "<b>Palavras-chave:</b> "),
            Idioma::Portugues => ("keyword", "<b>Keywords:</b> "),
        };
        let citacao = texto_citacao(
            dados,
            false,
            Some(dados.get("titulo_traduzido")),
            Some(dados.get("subtitulo_traduzido")),
        );
        render_fluxo(
            dados,
            cabecalho,
            citacao,
            dados.get("abstract"),
            base_chaves,
            rotulo_chaves,
            13.0,
        )
    }
}
