// Server module entry point
// Binding, the accept loop, per-connection serving and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module gets a different name
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::start_server_loop;

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::fixtures;
use crate::logger;

/// Bind the configured address and serve until SIGINT/SIGTERM.
pub async fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.resolve_socket_addr().await?;
    let listener = create_listener(addr)
        .inspect_err(|e| logger::log_error(&format!("Failed to bind {addr}: {e}")))?;
    let bound = listener.local_addr()?;

    logger::log_server_start(&config.server.host, &bound, &fixtures::ROUTES);

    let state = Arc::new(AppState::new(config));
    start_server_loop(listener, state, signal::shutdown_signal()).await;
    Ok(())
}
