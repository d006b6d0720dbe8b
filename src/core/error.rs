// Centralized error handling for seatwatch

use crate::models::seat::Side;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Why a seat code or one of its parts was rejected.
///
/// Returned as a value so callers can render inline feedback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatCodeError {
    #[error("Seat code needs side, section and row: found {found} part(s)")]
    MissingParts { found: usize },

    #[error("Seat code has too many parts: expected 3, got {found}")]
    TooManyParts { found: usize },

    #[error("Unknown stadium side: {0}")]
    UnknownSide(String),

    #[error("Section {section} does not exist on side {side}")]
    UnknownSection { side: Side, section: String },

    #[error("Row must not be empty")]
    EmptyRow,

    #[error("Invalid row '{0}': expected an optional letter followed by up to three digits")]
    InvalidRow(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid seat code: {0}")]
    InvalidSeatCode(#[from] SeatCodeError),

    #[error("Unknown stadium side: {0}")]
    UnknownSide(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Roster source unavailable: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSeatCode(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownSide(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details stay in the logs
        let error_message = match &self {
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal error while handling request");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_code_error_messages() {
        let err = SeatCodeError::UnknownSection {
            side: Side::Norte,
            section: "999".to_string(),
        };
        assert_eq!(err.to_string(), "Section 999 does not exist on side NORTE");

        let err = SeatCodeError::MissingParts { found: 2 };
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::from(SeatCodeError::EmptyRow).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UnknownSide("X".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Upstream("down".into()).status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        use axum::body::Body;
        use http_body_util::BodyExt;

        let response = ApiError::Internal(anyhow::anyhow!("secret detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
    }
}
