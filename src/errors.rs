use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// A lightweight wrapper for request failures that keeps the message local.
///
/// Not-found responses carry only `message`; server errors additionally echo
/// the raw underlying fault under `error`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    /// Shortcut for 404 Not Found with a bare `{message}` body.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
            detail: None,
        }
    }

    /// Shortcut for a 500 Internal Server Error carrying the raw fault.
    pub fn internal(msg: impl Into<String>, source: impl fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
            detail: Some(source.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self.detail {
            Some(detail) => Json(json!({
                "message": self.message,
                "error": detail
            })),
            None => Json(json!({ "message": self.message })),
        };

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_body_has_only_message() {
        let (status, json) = body_json(ApiError::not_found("Doação não encontrada")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Doação não encontrada");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn internal_body_carries_the_raw_fault() {
        let (status, json) = body_json(ApiError::internal("Erro ao criar doação", "disk full")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "Erro ao criar doação");
        assert_eq!(json["error"], "disk full");
    }
}
