pub const CHECK_FAILED_MESSAGE: &str = "An error occurred during the check";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("URL not found")]
    NotFound,

    #[error("Check failed: {0}")]
    CheckFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show on a page. Only validation errors expose their detail.
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidUrl(msg) => msg,
            Self::NotFound => "Page not found",
            Self::CheckFailed(_) => CHECK_FAILED_MESSAGE,
            Self::Database(_) | Self::Internal(_) => "Something went wrong on our side. Try again later.",
        }
    }

    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::CheckFailed(_))
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::AppError;
    use axum::http::StatusCode;

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AppError::NotFound => StatusCode::NOT_FOUND,
                AppError::CheckFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::Database(_) | AppError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }
}
