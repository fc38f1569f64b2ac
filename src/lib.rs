//! Fixture HTTP server returning fixed, minimal binary payloads (PNG, JPEG,
//! PDF, ZIP) for exercising tunnels and proxies against real MIME types.

pub mod config;
pub mod fixtures;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
