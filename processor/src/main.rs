//! Processor binary entry point

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use processor::web;
use processor::{
    LicenseProcessor, ProcessorError, ProcessorResult, RetryPolicy, ShopifyStore, StoreConfig,
};
use shared::logging;

#[derive(Parser)]
#[command(name = "processor")]
#[command(about = "License metafield processor for order fulfillment")]
struct Args {
    /// Port for the HTTP trigger endpoint
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ProcessorResult<()> {
    // Pick up a local .env before reading store settings
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let store_config = StoreConfig::from_env()?;
    let policy = RetryPolicy::from_env()?;
    tracing::info!(
        "store: {} (API {}), poll budget: {} attempts x {:?}",
        store_config.base_url,
        store_config.api_version,
        policy.max_attempts,
        policy.delay
    );

    let store = ShopifyStore::new(store_config);
    let processor = Arc::new(LicenseProcessor::new(store, policy));
    let router = web::build_router(processor);

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| ProcessorError::Config {
            message: format!("Invalid port: {e}"),
        })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    logging::log_startup("processor", &format!("listening on {addr}"));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logging::log_shutdown("processor", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("signal handling failed: {}", e);
    }
}
