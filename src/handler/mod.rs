//! Request handler module
//!
//! Maps each request onto a fixture response and writes the access log line.

pub mod router;

// Re-export main entry point
pub use router::{dispatch, handle_request};
