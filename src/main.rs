mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::{Config, RosterConfig},
    error::AppError,
    router,
    startup,
    state::{AccessPolicy, AppState},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let roster = RosterConfig::from_env();

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let access = AccessPolicy {
        app_url: config.app_url.clone(),
        master_admin_id: config.master_admin_id.clone(),
        allowed_member_ids: config.allowed_member_ids.clone(),
    };

    let state = AppState::new(db, http_client, oauth_client, roster, access);

    let app = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
