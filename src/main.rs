//! # Fun HTTP Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, instala el logging y corre el loop de
//! aceptación hasta que falle.

use anyhow::{anyhow, Context};
use fun_http_server::config::Config;
use fun_http_server::logging;
use fun_http_server::server::Server;

fn main() -> anyhow::Result<()> {
    let config = Config::new();
    config.validate().map_err(|e| anyhow!(e))?;

    logging::init(&config.log_level)?;
    tracing::info!(
        port = config.port,
        www_dir = %config.www_dir,
        github_api = %config.github_api,
        fetch_timeout_secs = config.fetch_timeout_secs,
        "starting"
    );

    let server = Server::new(config).context("failed to build HTTP client")?;
    server.run().context("accept loop terminated")
}
