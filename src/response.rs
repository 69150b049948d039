//! The JSON envelope that every endpoint responds with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of every API response: `{"success": bool, "data"?: T, "message"?: string}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The payload of a successful request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// A human readable note, e.g. why the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// A successful response carrying only a message.
    pub fn success_message(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.to_owned()),
        }
    }

    /// A failed response.
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_owned()),
        }
    }
}

/// Respond with 200 OK and `data` in the envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// Respond with 201 Created and `data` in the envelope.
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response()
}

/// Respond with 200 OK and a success message.
pub fn ok_message(message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::success_message(message))).into_response()
}

/// Respond with `status` and a failure message.
pub fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::failure(message))).into_response()
}

#[cfg(test)]
mod api_response_tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::ApiResponse;

    // Has no `Default` impl, like the domain types sent in `data`.
    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        id: u32,
    }

    #[test]
    fn success_omits_message() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();

        assert_eq!(json, json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn failure_omits_data() {
        let json = serde_json::to_value(ApiResponse::failure("nope")).unwrap();

        assert_eq!(json, json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn success_message_omits_data() {
        let json = serde_json::to_value(ApiResponse::success_message("done")).unwrap();

        assert_eq!(json, json!({ "success": true, "message": "done" }));
    }

    #[test]
    fn failure_without_data_parses_for_any_payload() {
        let body: ApiResponse<Payload> =
            serde_json::from_value(json!({ "success": false, "message": "nope" })).unwrap();

        assert_eq!(body.data, None);
        assert_eq!(body.message.as_deref(), Some("nope"));
    }

    #[test]
    fn success_parses_payload() {
        let body: ApiResponse<Payload> =
            serde_json::from_value(json!({ "success": true, "data": { "id": 7 } })).unwrap();

        assert_eq!(body, ApiResponse::success(Payload { id: 7 }));
    }
}
