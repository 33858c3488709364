//! HTTP response building module
//!
//! Every response is JSON and carries `Access-Control-Allow-Origin: *` so
//! the endpoints can be hit from a browser page on another origin.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::json;

use crate::logger;

const JSON_CONTENT_TYPE: &str = "application/json";
const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Build pretty-printed JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response listing the known endpoints
pub fn build_404_response(available_endpoints: &[&str]) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &json!({
            "status": "error",
            "message": "Endpoint not found",
            "available_endpoints": available_endpoints,
        }),
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &json!({
            "status": "error",
            "message": "Method not allowed",
        }),
    );
    response
        .headers_mut()
        .insert("Allow", hyper::header::HeaderValue::from_static(ALLOWED_METHODS));
    response
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOWED_METHODS)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(StatusCode::NO_CONTENT, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
///
/// Does not go through serde so it cannot fail itself.
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(
            "{\n  \"status\": \"error\",\n  \"message\": \"Internal server error\"\n}",
        )))
        .unwrap_or_else(|e| {
            log_build_error(StatusCode::INTERNAL_SERVER_ERROR, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_json_response_headers_and_pretty_body() {
        let response = json_response(StatusCode::OK, &json!({"status": "online"}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"{\n  \"status\": \"online\"\n}");
    }

    #[tokio::test]
    async fn test_404_lists_endpoints() {
        let response = build_404_response(&["/a", "/b"]);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["available_endpoints"], json!(["/a", "/b"]));
    }

    #[tokio::test]
    async fn test_500_body_is_valid_json() {
        let body = body_json(build_500_response()).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn test_options_response() {
        let response = build_options_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["Access-Control-Allow-Methods"], "GET, OPTIONS");
    }
}
