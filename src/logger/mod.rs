//! Logger module
//!
//! Server lifecycle messages, access logging and error reporting. Info and
//! access lines go to stdout (or the access log file), warnings and errors to
//! stderr (or the error log file).

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::LoggingConfig;
use crate::fixtures::Fixture;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Startup banner: base URL plus one line per route
///
/// `host` is the configured name (e.g. `localhost`), `addr` the bound socket.
pub fn log_server_start(host: &str, addr: &SocketAddr, routes: &[Fixture]) {
    let base = format!("http://{host}:{}", addr.port());
    write_info(&format!("Binary test server running on {base} (bound to {addr})"));
    write_info("Available endpoints:");
    for fixture in routes {
        write_info(&format!("  {base}{} - {}", fixture.path, fixture.label));
    }
    write_info("\nPress Ctrl+C to stop");
}

pub fn log_info(message: &str) {
    write_info(&format!("[INFO] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

/// Write one access log line for a handled request
///
/// `target` overrides the global writer when set.
pub fn log_access(entry: &AccessLogEntry, format: &str, target: Option<&writer::LogWriter>) {
    let line = entry.format(format);
    match target {
        Some(w) => w.write_access(&line),
        None => write_info(&line),
    }
}

pub fn log_shutdown_started() {
    write_info("\nShutting down...");
}

pub fn log_shutdown_complete() {
    write_info("[INFO] All connections closed, exiting");
}
