//! Process configuration, read once at startup and passed around
//! explicitly.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment (`.env` supported via
    /// dotenvy). Everything has a default suitable for local use.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BIND_PORT") {
            Ok(valor) => valor
                .parse::<u16>()
                .with_context(|| format!("BIND_PORT inválida: {valor}"))?,
            Err(_) => 8080,
        };
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
            });
        Ok(Self {
            host,
            port,
            static_dir,
        })
    }
}
