use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use precis::ScoringError;

use super::PRECIS_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    /// HTTP status and `x-precis-status` value for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ScoringFailed(ScoringError::Summary(_)) => {
                (StatusCode::BAD_GATEWAY, "summary_error")
            }
            GatewayError::ScoringFailed(ScoringError::Grammar(_)) => {
                (StatusCode::BAD_GATEWAY, "grammar_error")
            }
            GatewayError::ScoringFailed(ScoringError::Embedding(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error")
            }
            GatewayError::ScoringFailed(ScoringError::TaskFailed { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, precis_status) = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(PRECIS_STATUS_HEADER, HeaderValue::from_static(precis_status));

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
