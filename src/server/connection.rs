// Connection handling module
// Serves a single accepted TCP connection

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned local task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Serves exactly one HTTP/1.1 request with the request router
/// 3. Bounds the wait for request headers by the configured timeout
///
/// Once the headers are in, the request runs to completion; the dispatcher
/// enforces its own bound on the external utility.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The client's socket address, passed to the router for logging
/// * `state` - Shared application state
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);
        let timeout_duration = state.connection_timeout();

        let conn = http1::Builder::new()
            .timer(TokioTimer::new())
            .keep_alive(false)
            .header_read_timeout(timeout_duration)
            .serve_connection(
                io,
                service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
            );

        if let Err(err) = conn.await {
            if err.is_timeout() {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} sent no request within {} seconds",
                    timeout_duration.as_secs()
                ));
            } else {
                logger::log_connection_error(&err);
            }
        }
    });
}
