use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;

/// Everything that can go wrong while handling an attendance request.
///
/// Every variant except `Internal` is a user-correctable condition and is
/// answered with `400 Bad Request` and a plain-text reason.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AppError {
    #[display(fmt = "Employee not found in our system")]
    NotFound,

    #[display(fmt = "Invalid action")]
    InvalidAction,

    #[display(fmt = "No verification code requested. Request one first.")]
    NotRequested,

    #[display(fmt = "Invalid verification code")]
    CodeMismatch,

    #[display(fmt = "Action mismatch. Request a new code.")]
    ActionMismatch,

    #[display(fmt = "Verification code expired. Request a new one.")]
    Expired,

    #[display(fmt = "Already signed in")]
    AlreadySignedIn,

    #[display(fmt = "Already signed out")]
    AlreadySignedOut,

    #[display(fmt = "Invalid action (sign in first)")]
    NotSignedIn,

    #[display(fmt = "Internal error: {}", _0)]
    Internal(String),
}

impl std::error::Error for AppError {}

impl AppError {
    /// Text safe to show the user; internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.public_message())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("storage: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Internal(format!("io: {e}"))
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(format!("blocking task: {e}"))
    }
}
