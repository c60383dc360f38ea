mod app;
mod auth;
mod config;
mod cookies;
mod db;
mod error;
mod generations;
mod model;
mod pages;
mod state;
mod writer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quillmind=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    tracing::info!(
        database = %state.config.database_url,
        model = %state.config.model.name,
        "application state ready"
    );

    let listen_addr = state.config.listen_addr.clone();
    app::serve(app::build_app(state), &listen_addr).await
}
