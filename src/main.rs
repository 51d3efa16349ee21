use actix_web::HttpServer;
use edge_ai_api::{
    AppMetrics, AppSettings, AppState, MongoStore, StoreError, create_app,
    config::BootstrapUser, telemetry::init_tracing,
};
use std::io;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = AppSettings::from_env().map_err(io::Error::other)?;
    init_tracing(&settings.logging).map_err(io::Error::other)?;

    let store = MongoStore::connect(&settings.database)
        .await
        .map_err(io::Error::other)?;
    store.ensure_indexes().await.map_err(io::Error::other)?;

    let state = AppState::with_mongo(&store, &settings.jwt);
    if let Some(bootstrap) = &settings.server.bootstrap_user {
        bootstrap_user(&state, bootstrap).await?;
    }

    let metrics = AppMetrics::new().map_err(io::Error::other)?;
    let bind_address = settings.server.bind_address.clone();
    info!(address = %bind_address, "Starting Edge AI Platform API");

    HttpServer::new(move || create_app(state.clone(), metrics.clone(), settings.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

/// Create the configured first account unless it already exists
async fn bootstrap_user(state: &AppState, user: &BootstrapUser) -> io::Result<()> {
    match state.auth.create_user(&user.username, &user.password).await {
        Ok(()) => {
            info!(username = %user.username, "Bootstrap user created");
            Ok(())
        }
        Err(edge_ai_api::ApiError::Store(StoreError::Duplicate(_))) => {
            warn!(username = %user.username, "Bootstrap user already exists, leaving it unchanged");
            Ok(())
        }
        Err(e) => Err(io::Error::other(e)),
    }
}
