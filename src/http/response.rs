//! HTTP response building module
//!
//! Builders for every response the fixture server can send.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::fixtures::Fixture;

pub const NOT_FOUND_BODY: &str = "404 Not Found";
pub const NOT_IMPLEMENTED_BODY: &str = "501 Not Implemented";

/// Build 200 OK response carrying a fixture payload
///
/// `Content-Length` always reflects the payload, so HEAD responses advertise
/// the same length as GET while sending no body.
pub fn build_fixture_response(fixture: &Fixture, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(fixture.body)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", fixture.content_type)
        .header("Content-Length", fixture.body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_plain_text_response(404, NOT_FOUND_BODY, is_head, None)
}

/// Build 501 Not Implemented response for methods other than GET/HEAD
pub fn build_501_response() -> Response<Full<Bytes>> {
    build_plain_text_response(501, NOT_IMPLEMENTED_BODY, false, Some("GET, HEAD"))
}

fn build_plain_text_response(
    status: u16,
    message: &'static str,
    is_head: bool,
    allow: Option<&str>,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(message.as_bytes())
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Content-Length", message.len());
    if let Some(methods) = allow {
        builder = builder.header("Allow", methods);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(&status.to_string(), &e);
        Response::new(Full::new(Bytes::from_static(message.as_bytes())))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
