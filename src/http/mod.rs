//! HTTP protocol layer module
//!
//! Response construction, decoupled from routing and connection handling.

pub mod response;

// Re-export commonly used types
pub use response::{build_404_response, build_501_response, build_fixture_response};
