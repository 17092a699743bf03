use clap::Parser;

mod config;
mod constants;
mod error;
mod handlers;
mod http;
mod logging;
mod model;
mod server;
mod streaming;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::parse();

    config::validate_config(&cfg)?;

    logging::setup_logging(&cfg.log_level)?;
    logging::LogConfig::init(cfg.debug_enabled());

    let server = server::ChatServer::new(cfg);
    server.run().await
}
