use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod form;
pub mod generators;
pub mod pdf;

pub use crate::config::AppConfig;
use crate::generators::Assembler;

/// Template served at `GET /` and re-rendered on validation failures.
const ARQUIVO_FORMULARIO: &str = "formulario.html";

/// Request-independent state: the configuration, the loaded form template
/// and the document assembler. Nothing here is mutable after startup.
pub struct AppState {
    pub config: AppConfig,
    pub form_template: String,
    pub assembler: Assembler,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let caminho = config.static_dir.join(ARQUIVO_FORMULARIO);
        let form_template = std::fs::read_to_string(&caminho)
            .with_context(|| format!("falha ao ler o template {}", caminho.display()))?;
        let assembler = Assembler::new(&config.static_dir);
        Ok(Self {
            config,
            form_template,
            assembler,
        })
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::form::handlers::formulario,
            crate::form::handlers::gerar,
            crate::form::handlers::listar_documentos,
        ),
        components(
            schemas(form::handlers::DocumentoInfo)
        ),
        tags(
            (name = "Documentos", description = "Geração dos documentos de submissão ao repositório.")
        )
    )]
    struct ApiDoc;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuração inválida: {e}");
            std::process::exit(1);
        }
    };
    let app_state = match AppState::new(config.clone()) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "falha ao iniciar. Verifique o diretório de estáticos ({}). Erro: {e}",
                config.static_dir.display()
            );
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("ipen_docs_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let static_dir = config.static_dir.clone();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .app_data(app_state.clone())
            .app_data(web::FormConfig::default().limit(256 * 1024))
            .service(web::resource("/").route(web::get().to(form::handlers::formulario)))
            .service(web::resource("/gerar").route(web::post().to(form::handlers::gerar)))
            .service(
                web::resource("/api/documentos")
                    .route(web::get().to(form::handlers::listar_documentos)),
            )
            .service(actix_files::Files::new("/static", static_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind)?
    .run()
    .await
}
