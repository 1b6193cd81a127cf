use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Shown to the user when the provider answered with something we cannot read.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "An unexpected error occurred while reading the analysis. Please try again.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid provider response: {0}")]
    ResponseValidation(String),
}

impl AppError {
    /// Text safe to show to the end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::Provider(msg) => msg.clone(),
            AppError::Busy | AppError::HttpClient(_) => self.to_string(),
            AppError::ResponseValidation(_) => UNEXPECTED_RESPONSE_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::Provider(_) | AppError::HttpClient(_) | AppError::ResponseValidation(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Request rejected");
        }

        let body = Json(json!({
            "error": self.user_message()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_validation_hides_detail() {
        let err = AppError::ResponseValidation("missing required field `ratings.critic`".into());
        assert_eq!(err.user_message(), UNEXPECTED_RESPONSE_MESSAGE);
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_provider_message_passes_through() {
        let err = AppError::Provider("API key not valid. Please pass a valid API key.".into());
        assert_eq!(
            err.user_message(),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Configuration("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(AppError::InvalidInput("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Busy.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }
}
