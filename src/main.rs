use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::anyhow;
use dotenvy::dotenv;
use std::sync::Arc;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod state;
mod utils;

use crate::auth::password::AdminCredentials;
use crate::db::LedgerStore;
use crate::docs::ApiDoc;
use crate::model::employee::Directory;
use crate::state::AppState;
use crate::utils::clock::SystemClock;
use crate::utils::login_signal::{EnvLoginSignal, FixedLoginSignal, LoginSignal};
use crate::utils::notifier::LogNotifier;
use config::Config;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let directory = match &config.roster_file {
        Some(path) => Directory::from_json_file(path)?,
        None => Directory::builtin(),
    };

    let admin = AdminCredentials::new(&config.admin_username, &config.admin_password)
        .map_err(|e| anyhow!("hashing admin password: {e}"))?;

    let login_signal: Arc<dyn LoginSignal> = match &config.login_name {
        Some(name) => Arc::new(FixedLoginSignal(name.clone())),
        None => Arc::new(EnvLoginSignal),
    };

    let ledger = LedgerStore::new(&config.db_dir);

    info!(
        employees = directory.employees().len(),
        db_dir = %ledger.root().display(),
        admin = admin.username(),
        "Configuration loaded"
    );

    Ok(AppState::new(
        directory,
        ledger,
        admin,
        Arc::new(LogNotifier),
        login_signal,
        Arc::new(SystemClock),
    ))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let state = build_state(&config).map_err(|e| std::io::Error::other(format!("{e:#}")))?;
    let state = Data::new(state);

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .app_data(Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
