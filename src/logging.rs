//! # Logging
//! src/logging.rs
//!
//! Subscriber `tracing_subscriber::fmt` con filtro por directivas
//! (`info`, `fun_http_server=debug`, ...).

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Instala el subscriber global
///
/// Falla si el filtro no es válido o si ya había un subscriber.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter: {}", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
