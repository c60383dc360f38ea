use crate::config::AppConfig;
use crate::db;
use crate::model::{HttpTextGenerator, TextGenerator};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = db::connect(&config.database_url).await?;
        db::migrate(&db).await?;

        // Built once and shared read-only by every request.
        let generator = Arc::new(HttpTextGenerator::new(&config.model)?) as Arc<dyn TextGenerator>;

        Ok(Self::from_parts(db, config, generator))
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            db,
            config,
            generator,
        }
    }

    #[cfg(test)]
    pub async fn fake(generator: Arc<dyn TextGenerator>) -> Self {
        let config = Arc::new(AppConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_url: "sqlite::memory:".into(),
            session: crate::config::SessionConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
            model: crate::config::ModelConfig {
                endpoint: "http://fake.local".into(),
                name: "fake".into(),
                api_token: None,
            },
        });

        Self::from_parts(db::memory().await, config, generator)
    }
}
