use crate::api::AppState;
use crate::config::Config;

mod api;
mod config;
mod error;
mod models;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        config: config.clone(),
    };
    let app = api::router(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(
        port = %config.port,
        calorie_target = config.default_calorie_target,
        "server.listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
