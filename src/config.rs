use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "chat-reply-server")]
#[command(about = "chat completions endpoint streaming a synthetic reply over SSE")]
pub struct Config {
    #[arg(long, default_value = "127.0.0.1:8000", help = "server listen address")]
    pub listen: String,

    #[arg(
        long,
        default_value = "info",
        help = "log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

impl Config {
    pub fn debug_enabled(&self) -> bool {
        self.log_level.eq_ignore_ascii_case("debug") || self.log_level.eq_ignore_ascii_case("trace")
    }
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.listen.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid listen address: {}", config.listen));
    }
    if config.log_level.parse::<log::LevelFilter>().is_err() {
        return Err(format!("invalid log level: {}", config.log_level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Config, validate_config};

    #[test]
    fn defaults_parse_and_validate() {
        let cfg = Config::parse_from(["chat-reply-server"]);
        assert_eq!(cfg.listen, "127.0.0.1:8000");
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.debug_enabled());
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn rejects_unparseable_listen_address() {
        let cfg = Config::parse_from(["chat-reply-server", "--listen", "localhost"]);
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.contains("invalid listen address"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let cfg = Config::parse_from(["chat-reply-server", "--log-level", "loud"]);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn trace_level_enables_debug_output() {
        let cfg = Config::parse_from(["chat-reply-server", "--log-level", "TRACE"]);
        assert!(cfg.debug_enabled());
        assert!(validate_config(&cfg).is_ok());
    }
}
