//! Shared helpers for the integration tests.

use ipen_docs_server::generators::FieldSet;
use ipen_docs_server::pdf::fonts::encode_win_ansi;
use lopdf::content::Content;
use lopdf::{Document, Object};

/// A submission that passes validation for every document type.
pub fn dados_validos() -> FieldSet {
    let mut dados = FieldSet::new();
    dados.set("nome_completo", "Ana");
    dados.set("sobrenome", "Silva");
    dados.set("nome_citacao", "Silva, Ana");
    dados.set("titulo", "Estudo de blindagem de nêutrons");
    dados.set("subtitulo", "um recorte experimental");
    dados.set("titulo_traduzido", "Neutron shielding study");
    dados.set("nivel", "Mestrado");
    dados.set("area", "Tecnologia Nuclear - Reatores");
    dados.set("ano", "2024");
    dados.set("paginas", "120");
    dados.set("versao", "Versão Original");
    dados.set("idioma", "Português");
    dados.set("licenca", "CC BY-NC 4.0");
    dados.set("orientador_tipo", "Prof. Dr.");
    dados.set("orientador", "Carlos Souza");
    dados.set("resumo", "Este trabalho investiga a atenuação de nêutrons em blindagens compostas.");
    dados.set("abstract", "This work investigates neutron attenuation in layered shielding.");
    for (i, chave) in ["nêutrons", "blindagem", "reatores"].iter().enumerate() {
        dados.set(format!("chave{}", i + 1), chave.to_string());
    }
    for (i, keyword) in ["neutrons", "shielding", "reactors"].iter().enumerate() {
        dados.set(format!("keyword{}", i + 1), keyword.to_string());
    }
    dados
}

/// Every byte shown by a `Tj` operator across all pages, with run breaks
/// marked by spaces.
pub fn texto_mostrado(pdf: &[u8]) -> Vec<u8> {
    let doc = Document::load_mem(pdf).expect("PDF inválido");
    let mut bytes = Vec::new();
    for (_numero, page_id) in doc.get_pages() {
        let bruto = doc.get_page_content(page_id).expect("conteúdo da página");
        let content = Content::decode(&bruto).expect("operações da página");
        for op in content.operations {
            if op.operator == "Tj" {
                for operand in op.operands {
                    if let Object::String(s, _) = operand {
                        bytes.extend_from_slice(&s);
                        bytes.push(b' ');
                    }
                }
            }
        }
    }
    bytes
}

/// Whether the rendered document shows the given text in a single run.
pub fn mostra_texto(pdf: &[u8], trecho: &str) -> bool {
    let alvo = encode_win_ansi(trecho);
    texto_mostrado(pdf)
        .windows(alvo.len())
        .any(|janela| janela == alvo)
}

pub fn contagem_paginas(pdf: &[u8]) -> usize {
    Document::load_mem(pdf).expect("PDF inválido").get_pages().len()
}
