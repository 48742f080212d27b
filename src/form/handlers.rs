//! HTTP handlers: the submission form and the generation endpoint.

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::generators::sanitize::sanitizar_campos;
use crate::generators::{DocumentKind, FieldSet, GeneratorError, Saida};
use crate::AppState;

use super::models::PedidoGeracao;
use super::template::render_form;

/// Generic message for unexpected render failures; details stay in the log.
const MENSAGEM_ERRO_GERACAO: &str =
    "Ocorreu um erro ao gerar o PDF. Verifique os campos preenchidos e tente novamente.";

#[utoipa::path(
    get,
    path = "/",
    tag = "Documentos",
    responses(
        (status = 200, description = "Formulário de submissão (HTML)")
    )
)]
pub async fn formulario(state: web::Data<AppState>) -> impl Responder {
    pagina_formulario(&state, &FieldSet::new(), &[], None)
}

#[utoipa::path(
    post,
    path = "/gerar",
    tag = "Documentos",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Campos do formulário como pares chave-valor"
    ),
    responses(
        (status = 200, description = "Um PDF (um documento) ou um ZIP (vários), como anexo; \
         em caso de erro de validação ou renderização, o formulário reexibido com a mensagem")
    )
)]
pub async fn gerar(
    form: web::Form<Vec<(String, String)>>,
    state: web::Data<AppState>,
) -> impl Responder {
    let pedido = PedidoGeracao::from_pairs(form.into_inner());
    let dados_limpos = sanitizar_campos(&pedido.dados);

    match state.assembler.gerar_saida(&dados_limpos, &pedido.tipos) {
        Ok(Saida::Documento(doc)) => resposta_anexo(&doc.nome, "application/pdf", doc.pdf),
        Ok(Saida::Pacote { nome, dados }) => resposta_anexo(nome, "application/zip", dados),
        Err(GeneratorError::Validacao(mensagem)) => {
            // Pre-sanitization values go back to the form for correction.
            pagina_formulario(&state, &pedido.dados, &pedido.tipos, Some(&mensagem))
        }
        Err(err) => {
            log::error!("geração de documentos falhou: {err}");
            pagina_formulario(
                &state,
                &pedido.dados,
                &pedido.tipos,
                Some(MENSAGEM_ERRO_GERACAO),
            )
        }
    }
}

/// One generatable document type, for clients that build the selection UI.
#[derive(Serialize, ToSchema)]
pub struct DocumentoInfo {
    pub tag: &'static str,
    pub rotulo: &'static str,
    pub arquivo: String,
}

#[utoipa::path(
    get,
    path = "/api/documentos",
    tag = "Documentos",
    responses(
        (status = 200, description = "Tipos de documento disponíveis", body = [DocumentoInfo])
    )
)]
pub async fn listar_documentos() -> impl Responder {
    let documentos: Vec<DocumentoInfo> = DocumentKind::ALL
        .iter()
        .map(|kind| DocumentoInfo {
            tag: kind.tag(),
            rotulo: kind.rotulo(),
            arquivo: kind.nome_arquivo(),
        })
        .collect();
    HttpResponse::Ok().json(documentos)
}

fn pagina_formulario(
    state: &AppState,
    dados: &FieldSet,
    tipos: &[DocumentKind],
    erro: Option<&str>,
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_form(&state.form_template, dados, tipos, erro))
}

fn resposta_anexo(nome: &str, content_type: &str, corpo: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{nome}\""),
        ))
        .body(corpo)
}
