// app/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use storefront::PgDatabase;
use storefront_app::{web, AppConfig, AppState};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  tracing::debug!(config = ?app_config, "Loaded config details");

  let database = PgDatabase::connect(&app_config.database_url, app_config.database_max_connections)
    .await
    .context("Failed to connect to the database")?;
  database
    .ensure_schema()
    .await
    .context("Failed to create the database schema")?;

  let server_address = app_config.bind_address();
  let app_state = AppState::new(Arc::new(database), app_config);

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")?;

  Ok(())
}
