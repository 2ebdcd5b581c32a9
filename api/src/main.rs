use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use lf_api::create_app;
use lf_api::routes::auth::AuthState;
use lf_api::routes::items::ItemState;
use lf_api::telemetry::init_tracing;
use lf_core::services::{AuthService, AuthServiceConfig, ItemService, TokenService};
use lf_infra::{
    create_notifier, DatabasePool, LocalBlobStore, MySqlItemRepository, MySqlUserRepository,
};
use lf_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = ?config.environment, "Starting Lost & Found API server");

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let blob_store = LocalBlobStore::new(config.upload.clone());
    blob_store
        .ensure_dir()
        .await
        .with_context(|| format!("creating upload directory {}", config.upload.dir))?;

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("connecting to the database")?;
    pool.migrate().await.context("applying database schema")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let item_repository = Arc::new(MySqlItemRepository::new(pool.get_pool().clone()));
    let notifier = Arc::new(create_notifier(&config.mail).context("configuring mail delivery")?);
    let token_service = Arc::new(TokenService::new(config.auth.jwt.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        notifier,
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));
    let item_service = Arc::new(ItemService::new(item_repository, Arc::new(blob_store)));

    let auth_state = web::Data::new(AuthState::new(auth_service, &config.auth));
    let item_state = web::Data::new(ItemState::new(item_service, config.upload.clone()));
    let cors_config = config.cors.clone();

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(auth_state.clone(), item_state.clone(), &cors_config)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
