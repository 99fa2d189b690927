use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tripcast_core::{DestinationService, OpenWeatherAdapter, ReqwestHttpClient, RetryPolicy};
use tripcast_store::{SqliteDestinationStore, StoreConfig};
use tripcast_web::{build_router, AppState};

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| String::from(default))
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
struct WebConfig {
    bind_addr: String,
    database_url: String,
    weather_api_key: String,
    weather_base_url: Option<String>,
    weather_timeout_ms: u64,
    weather_max_retries: u32,
}

impl WebConfig {
    fn from_env() -> Self {
        Self {
            bind_addr: env_str("TRIPCAST_BIND_ADDR", "127.0.0.1:8080"),
            database_url: env_str("TRIPCAST_DATABASE_URL", "sqlite:tripcast.db?mode=rwc"),
            weather_api_key: env_str("TRIPCAST_OPENWEATHER_API_KEY", "demo"),
            weather_base_url: env::var("TRIPCAST_OPENWEATHER_BASE_URL").ok(),
            weather_timeout_ms: env_u64("TRIPCAST_WEATHER_TIMEOUT_MS", 5_000),
            weather_max_retries: env_u32("TRIPCAST_WEATHER_MAX_RETRIES", 0),
        }
    }
}

/// Startup failures; request-level errors never reach here.
#[derive(Debug, Error)]
enum WebError {
    #[error("store initialization failed: {0}")]
    Store(#[from] tripcast_core::StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tripcast=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), WebError> {
    let config = WebConfig::from_env();

    let store = SqliteDestinationStore::new(StoreConfig::new(config.database_url.clone())).await?;
    info!(url = %config.database_url, "destination store ready");

    let mut weather = OpenWeatherAdapter::with_http_client(
        Arc::new(ReqwestHttpClient::new()),
        config.weather_api_key.clone(),
    )
    .with_timeout_ms(config.weather_timeout_ms)
    .with_retry(RetryPolicy::bounded(config.weather_max_retries));
    if let Some(base_url) = &config.weather_base_url {
        weather = weather.with_base_url(base_url.clone());
    }

    let service = DestinationService::new(Arc::new(store), Arc::new(weather));
    let router = build_router(AppState::new(Arc::new(service)));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "tripcast listening");

    axum::serve(listener, router).await?;
    Ok(())
}
