//! Shared logging utilities for consistent tracing across the workspace

use tracing_subscriber::EnvFilter;

/// Initialize the stdout tracing subscriber.
///
/// The base level applies to the workspace crates; HTTP stack internals are
/// pinned to warn so request noise stays out of the poll logs.
pub fn init_tracing(log_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directives(log_level)))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("processor={base_level},shared={base_level},tower_http=warn,hyper=warn,reqwest=warn")
}

/// Log a standard startup banner for a component.
pub fn log_startup(component: &str, detail: &str) {
    tracing::info!("🚀 {} started: {}", component, detail);
}

/// Log a standard shutdown line for a component.
pub fn log_shutdown(component: &str, reason: &str) {
    tracing::info!("🛑 {} shutting down: {}", component, reason);
}
