// Application state module
// Read-only state shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::logger::writer::LogWriter;

/// Application state
///
/// Nothing here is mutated after startup, so connections share it through an
/// `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub access_log: bool,
    /// Access log target for this server; `None` uses the global writer
    pub log_writer: Option<Arc<LogWriter>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            access_log: config.logging.access_log,
            log_writer: None,
        }
    }

    /// Send this server's access lines to `writer` instead of the global one
    #[must_use]
    pub fn with_log_writer(mut self, writer: LogWriter) -> Self {
        self.log_writer = Some(Arc::new(writer));
        self
    }

    pub fn access_log_format(&self) -> &str {
        &self.config.logging.access_log_format
    }
}
