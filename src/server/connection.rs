// Connection handling module
// Serves one accepted TCP connection with hyper's HTTP/1.1 driver

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve `stream` in a spawned task.
///
/// The connection is registered with `graceful` so shutdown can ask it to
/// finish the in-flight request and close. An I/O error (e.g. the client
/// hanging up mid-write) ends this connection only.
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    graceful: &GracefulShutdown,
) {
    let io = TokioIo::new(stream);
    let state = Arc::clone(state);

    let mut builder = http1::Builder::new();
    builder.keep_alive(true);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
    );
    let conn = graceful.watch(conn);

    tokio::spawn(async move {
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
