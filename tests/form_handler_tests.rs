mod common;

use std::path::PathBuf;

use actix_web::http::header;
use actix_web::{test, web, App};
use common::dados_validos;
use ipen_docs_server::{form, AppConfig, AppState};

fn estado() -> web::Data<AppState> {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
    };
    web::Data::new(AppState::new(config).expect("estado da aplicação"))
}

fn pares_validos() -> Vec<(String, String)> {
    dados_validos()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[actix_web::test]
async fn formulario_e_servido_em_html() {
    let app = test::init_service(
        App::new()
            .app_data(estado())
            .service(web::resource("/").route(web::get().to(form::handlers::formulario))),
    )
    .await;

    let resposta = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resposta.status().is_success());
    let corpo = test::read_body(resposta).await;
    let html = String::from_utf8_lossy(&corpo);
    assert!(html.contains("<form method=\"post\" action=\"/gerar\">"));
    assert!(html.contains("name=\"documentos\""));
}

#[actix_web::test]
async fn gerar_um_documento_devolve_pdf_anexo() {
    let app = test::init_service(
        App::new()
            .app_data(estado())
            .service(web::resource("/gerar").route(web::post().to(form::handlers::gerar))),
    )
    .await;

    let mut pares = pares_validos();
    pares.push(("documentos".to_string(), "contracapa".to_string()));
    let requisicao = test::TestRequest::post()
        .uri("/gerar")
        .set_form(&pares)
        .to_request();
    let resposta = test::call_service(&app, requisicao).await;
    assert!(resposta.status().is_success());
    let disposicao = resposta
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("content-disposition")
        .to_str()
        .expect("ascii");
    assert!(disposicao.contains("contracapa.pdf"));
    let corpo = test::read_body(resposta).await;
    assert!(corpo.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn gerar_varios_documentos_devolve_zip() {
    let app = test::init_service(
        App::new()
            .app_data(estado())
            .service(web::resource("/gerar").route(web::post().to(form::handlers::gerar))),
    )
    .await;

    let mut pares = pares_validos();
    pares.push(("documentos".to_string(), "capa".to_string()));
    pares.push(("documentos".to_string(), "contracapa".to_string()));
    let requisicao = test::TestRequest::post()
        .uri("/gerar")
        .set_form(&pares)
        .to_request();
    let resposta = test::call_service(&app, requisicao).await;
    let disposicao = resposta
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("content-disposition")
        .to_str()
        .expect("ascii")
        .to_string();
    assert!(disposicao.contains("documentos_ipen.zip"));
    let corpo = test::read_body(resposta).await;
    // ZIP local file header magic.
    assert!(corpo.starts_with(b"PK\x03\x04"));
}

#[actix_web::test]
async fn listagem_de_documentos_em_json() {
    let app = test::init_service(App::new().service(
        web::resource("/api/documentos")
            .route(web::get().to(form::handlers::listar_documentos)),
    ))
    .await;

    let resposta = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/documentos").to_request(),
    )
    .await;
    assert!(resposta.status().is_success());
    let corpo = test::read_body(resposta).await;
    let lista: serde_json::Value = serde_json::from_slice(&corpo).expect("json");
    assert_eq!(lista.as_array().expect("lista").len(), 6);
    assert_eq!(lista[0]["tag"], "capa");
    assert_eq!(lista[0]["arquivo"], "capa.pdf");
}

#[actix_web::test]
async fn validacao_reexibe_formulario_com_valores() {
    let app = test::init_service(
        App::new()
            .app_data(estado())
            .service(web::resource("/gerar").route(web::post().to(form::handlers::gerar))),
    )
    .await;

    // No document type selected: validation failure, values preserved.
    let pares = vec![("titulo".to_string(), "Estudo preservado".to_string())];
    let requisicao = test::TestRequest::post()
        .uri("/gerar")
        .set_form(&pares)
        .to_request();
    let resposta = test::call_service(&app, requisicao).await;
    assert!(resposta.status().is_success());
    let corpo = test::read_body(resposta).await;
    let html = String::from_utf8_lossy(&corpo);
    assert!(html.contains("pelo menos um documento"));
    assert!(html.contains("Estudo preservado"));
}
