//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, fixture lookup and
//! access logging.

use crate::config::AppState;
use crate::fixtures;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since no handler ever reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    // The query is part of the match: `/image.png?x=1` is not a fixture
    let target = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
    let response = dispatch(req.method(), target);

    if state.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, state.access_log_format(), state.log_writer.as_deref());
    }

    Ok(response)
}

/// Pick the response for `method` and `path`
///
/// `path` is the full request target including any query string.
///
/// GET serves the fixture or 404. HEAD answers with the same status and
/// headers but no body. Every other method gets 501.
pub fn dispatch(method: &Method, path: &str) -> Response<Full<Bytes>> {
    let is_head = match *method {
        Method::GET => false,
        Method::HEAD => true,
        _ => {
            logger::log_warning(&format!("Unsupported method: {method} {path}"));
            return http::build_501_response();
        }
    };

    match fixtures::lookup(path) {
        Some(fixture) => http::build_fixture_response(fixture, is_head),
        None => http::build_404_response(is_head),
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
