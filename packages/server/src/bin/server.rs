//! Chatter relay server.
//!
//! Serves the chat hub on `/hub/chat` and the admin API under `/api`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatter-server -- --port 5000
//! ```

use chatter_server::ServerConfig;
use chatter_shared::logger::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = chatter_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
