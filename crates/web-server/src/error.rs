use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // An unknown city is the caller's to fix; tell them which one.
            AppError::Analytics(AnalyticsError::NotFound(city)) => (
                StatusCode::NOT_FOUND,
                format!("No restaurants found in city '{}'", city),
            ),
            AppError::Analytics(analytics_err) => {
                tracing::error!(error = ?analytics_err, "Analytics error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred during analysis".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
