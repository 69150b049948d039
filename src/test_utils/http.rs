use axum::{body::Body, http::StatusCode, response::Response};
use serde::de::DeserializeOwned;

use crate::response::ApiResponse;

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

pub(crate) async fn parse_json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).unwrap_or_else(|error| {
        panic!(
            "Could not parse response body {:?} as JSON: {error}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// Check that `response` has the status `want_status` and a failure envelope with `want_message`.
pub(crate) async fn assert_failure_message(
    response: Response<Body>,
    want_status: StatusCode,
    want_message: &str,
) {
    assert_eq!(response.status(), want_status);
    assert_eq!(get_header(&response, "content-type"), "application/json");

    let body: ApiResponse<serde_json::Value> = parse_json_body(response).await;

    assert!(!body.success, "want success = false, got {body:?}");
    assert_eq!(body.data, None);
    assert_eq!(body.message.as_deref(), Some(want_message));
}
