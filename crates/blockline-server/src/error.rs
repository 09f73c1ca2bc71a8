use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blockline_ledger::LedgerError;
use thiserror::Error;

use crate::handler::PrettyJson;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("ledger is not ready")]
    NotReady,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::Ledger(LedgerError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Ledger(LedgerError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Ledger(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, PrettyJson(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockline_ledger::ValidationFailure;

    #[test]
    fn ledger_errors_map_to_statuses() {
        assert_eq!(
            ServerError::from(LedgerError::NotFound { sequence: 3 }).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(LedgerError::Validation(ValidationFailure::BrokenLink {
                sequence: 1
            }))
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(LedgerError::EmptyLedger).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn error_body_is_pretty_json() {
        let response = ServerError::from(LedgerError::NotFound { sequence: 9 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("{\n  \"error\": {\n"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"]["code"], 404);
    }

    #[test]
    fn boundary_errors_map_to_statuses() {
        assert_eq!(ServerError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::NotReady.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
