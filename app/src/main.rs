// app/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use sharehub_app::config::AppConfig;
use sharehub_app::state::AppState;
use sharehub_app::web::configure_app_routes;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting ShareHub server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  let server_address = app_config.bind_address();

  let app_state = AppState::from_config(app_config).map_err(|e| {
    tracing::error!(error = %e, "Failed to initialise the hub.");
    std::io::Error::other(e.to_string())
  })?;

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
