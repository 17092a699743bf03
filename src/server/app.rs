use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;

use crate::VERSION;
use crate::config::Config;
use crate::constants::CHAT_COMPLETIONS_PATH;
use crate::logging::LogConfig;
use crate::server::routes::create_routes;

pub struct ChatServer {
    pub config: Config,
    shutdown: CancellationToken,
}

impl ChatServer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: CancellationToken::new(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr = self.config.listen.parse()?;
        let routes = create_routes(self.shutdown.clone());

        if LogConfig::get().debug_enabled {
            log::info!("chat-reply-server v{} on {} (debug mode)", VERSION, addr);
        } else {
            log::info!("chat-reply-server v{} on {}", VERSION, addr);
        }
        log::info!("serving POST {}", CHAT_COMPLETIONS_PATH);

        tokio::select! {
            _ = warp::serve(routes).run(addr) => {}
            _ = wait_for_shutdown_signal() => {
                log::info!("shutting down, cancelling in-flight streams");
                self.shutdown.cancel();
            }
        }

        Ok(())
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
