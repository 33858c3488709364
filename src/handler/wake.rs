// `/wol` endpoint

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::http;

/// Send the magic packet and report the outcome
pub async fn handle_wol(state: &AppState) -> Response<Full<Bytes>> {
    let (status, outcome) = state.dispatcher.wake().await;
    http::json_response(status, &outcome)
}
