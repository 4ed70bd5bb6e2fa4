use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use colored::Colorize;
use domain_dispatch::service::AssignmentService;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::infrastructure::{AppConfig, ServiceProvider};

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match AppConfig::load() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    if tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .is_err()
    {
        return eprintln!("{}", "Cannot build logger".red());
    }

    let provider = Arc::new(ServiceProvider::build());
    spawn_sweeper(provider.clone(), config.sweep_interval_secs);

    info!(host = %config.host, port = config.port, "Starting repair dispatch system");
    let data = web::Data::from(provider);
    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(api::configure))
        .bind((config.host.as_str(), config.port));
    match server {
        Ok(server) => {
            if let Err(e) = server.run().await {
                error!("Web host exited abnormally: {e}");
            }
        }
        Err(e) => error!("Cannot bind web host: {e}"),
    }
}

/// Unassigned pending tickets are retried on a fixed cadence; the engine
/// itself never re-sweeps on its own.
fn spawn_sweeper(provider: Arc<ServiceProvider>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            interval.tick().await;
            match provider.assignment.sweep().await {
                Ok(0) => {}
                Ok(assigned) => info!(assigned, "Background sweep assigned tickets"),
                Err(e) => warn!("Background sweep failed: {e}"),
            }
        }
    });
}
