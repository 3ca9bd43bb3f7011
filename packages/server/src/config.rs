//! Server configuration.

use clap::Parser;

/// Chatter relay server
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "chatter-server", version, about = "Chatter relay server")]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "CHATTER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CHATTER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "CHATTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
        }
    }
}
