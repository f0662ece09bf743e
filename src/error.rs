use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Gateway failure as reported by the payment provider, carried through so the
/// route boundary can surface the upstream status and body.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub status: StatusCode,
    pub body: Option<Value>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("payment gateway request failed")]
    Upstream(GatewayError),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Upstream(e) => {
                warn!(status = %e.status, body = ?e.body, "payment gateway request failed");
                let body = e
                    .body
                    .clone()
                    .unwrap_or_else(|| serde_json::json!({ "error": "bad_gateway" }));
                return (e.status, Json(body)).into_response();
            }
            AppError::Database(e) => {
                warn!("database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = serde_json::json!({
            "error": code,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
