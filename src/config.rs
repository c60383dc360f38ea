use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Where the text generation model is served from.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub endpoint: String,
    pub name: String,
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub session: SessionConfig,
    pub model: ModelConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = format!(
            "{}:{}",
            std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
        );
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quillmind.db?mode=rwc".into());
        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?,
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "quillmind".into()),
            audience: std::env::var("SESSION_AUDIENCE").unwrap_or_else(|_| "quillmind-web".into()),
            ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 7),
        };
        let model = ModelConfig {
            endpoint: std::env::var("MODEL_ENDPOINT")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".into()),
            name: std::env::var("MODEL_NAME").unwrap_or_else(|_| "google/flan-t5-large".into()),
            api_token: std::env::var("MODEL_API_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        };
        Ok(Self {
            listen_addr,
            database_url,
            session,
            model,
        })
    }
}
