//! Request assembly: validate, dispatch each requested type to its
//! renderer, collect the outputs and package them.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::capa::CapaGenerator;
use super::contracapa::ContracapaGenerator;
use super::ficha::FichaGenerator;
use super::models::{DocumentKind, FieldSet, Idioma};
use super::pagina_rosto::PaginaRostoGenerator;
use super::resumo::{AbstractGenerator, ResumoGenerator};
use super::traits::Gerador;
use super::validation::validar_pedido;
use super::{DocumentoGerado, GeneratorError};

/// Fixed archive name when more than one document is produced.
pub const NOME_PACOTE: &str = "documentos_ipen.zip";

/// The response payload: a lone document or a ZIP with one entry each.
pub enum Saida {
    Documento(DocumentoGerado),
    Pacote { nome: &'static str, dados: Vec<u8> },
}

pub struct Assembler {
    static_dir: PathBuf,
}

impl Assembler {
    pub fn new(static_dir: &Path) -> Self {
        Self {
            static_dir: static_dir.to_path_buf(),
        }
    }

    /// Validate and render every requested document, in the fixed output
    /// order. Any render failure discards everything already produced.
    pub fn gerar(
        &self,
        dados: &FieldSet,
        tipos: &[DocumentKind],
    ) -> Result<Vec<DocumentoGerado>, GeneratorError> {
        validar_pedido(dados, tipos).map_err(GeneratorError::Validacao)?;

        let idioma = Idioma::from_fields(dados);
        let mut documentos = Vec::new();
        for kind in DocumentKind::ALL {
            if !tipos.contains(&kind) {
                continue;
            }
            let pdf = self
                .renderizar(kind, idioma, dados)
                .map_err(|fonte| GeneratorError::Renderizacao {
                    documento: kind.tag(),
                    fonte,
                })?;
            documentos.push(DocumentoGerado {
                nome: kind.nome_arquivo(),
                pdf,
            });
        }
        Ok(documentos)
    }

    /// Render and package: one requested type returns the document itself,
    /// two or more return the ZIP archive.
    pub fn gerar_saida(
        &self,
        dados: &FieldSet,
        tipos: &[DocumentKind],
    ) -> Result<Saida, GeneratorError> {
        let mut documentos = self.gerar(dados, tipos)?;
        if documentos.len() == 1 {
            Ok(Saida::Documento(documentos.remove(0)))
        } else {
            Ok(Saida::Pacote {
                nome: NOME_PACOTE,
                dados: empacotar(&documentos)?,
            })
        }
    }

    /// The abstract pair dispatches on the declared primary language; the
    /// renderer always receives that language for its internal labels.
    fn renderizar(
        &self,
        kind: DocumentKind,
        idioma: Idioma,
        dados: &FieldSet,
    ) -> Result<Vec<u8>, crate::pdf::PdfError> {
        match kind {
            DocumentKind::Capa => CapaGenerator::new(&self.static_dir).gerar(dados),
            DocumentKind::PaginaRosto => PaginaRostoGenerator.gerar(dados),
            DocumentKind::Ficha => FichaGenerator.gerar(dados),
            DocumentKind::Contracapa => ContracapaGenerator.gerar(dados),
            DocumentKind::Resumo => match idioma {
                Idioma::Portugues => ResumoGenerator {
                    idioma_principal: idioma,
                }
                .gerar(dados),
                Idioma::Ingles => AbstractGenerator {
                    idioma_principal: idioma,
                }
                .gerar(dados),
            },
            DocumentKind::Abstract => match idioma {
                Idioma::Portugues => AbstractGenerator {
                    idioma_principal: idioma,
                }
                .gerar(dados),
                Idioma::Ingles => ResumoGenerator {
                    idioma_principal: idioma,
                }
                .gerar(dados),
            },
        }
    }
}

/// Bundle documents into a deflated ZIP, one entry per document.
pub fn empacotar(documentos: &[DocumentoGerado]) -> Result<Vec<u8>, GeneratorError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for doc in documentos {
        writer.start_file(doc.nome.as_str(), options)?;
        writer.write_all(&doc.pdf)?;
    }
    Ok(writer.finish()?.into_inner())
}
