//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, path matching and dispatching to the endpoint handlers.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Uri};

use super::{info, wake};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Paths served by the router, in the order reported on 404
pub const AVAILABLE_ENDPOINTS: [&str; 3] = ["/wol", "/status", "/config"];

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted. A panic
/// in a handler becomes a 500 response instead of tearing down the
/// connection task.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    logger::log_request(peer_addr.ip(), request_target(req.uri()));

    let response = match AssertUnwindSafe(route_request(&method, &path, &state))
        .catch_unwind()
        .await
    {
        Ok(response) => response,
        Err(_) => {
            logger::log_error(&format!("Handler panicked while serving {method} {path}"));
            http::build_500_response()
        }
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        method.to_string(),
        req.uri().to_string(),
    );
    entry.protocol = format!("{:?}", req.version());
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    logger::log_access(&entry);

    Ok(response)
}

/// Path plus query string, as sent on the request line
fn request_target(uri: &Uri) -> &str {
    uri.path_and_query().map_or_else(|| uri.path(), |target| target.as_str())
}

/// Dispatch by method, then by exact path match
async fn route_request(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match *method {
        Method::GET => {}
        Method::OPTIONS => return http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return http::build_405_response();
        }
    }

    match path {
        "/wol" => wake::handle_wol(state).await,
        "/status" => info::handle_status(state),
        "/config" => info::handle_config(state),
        _ => http::build_404_response(&AVAILABLE_ENDPOINTS),
    }
}
