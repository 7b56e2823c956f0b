use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, warn};

pub type AuthResult<T> = Result<T, AuthError>;

/// Failures of the credential service. Every failure is terminal for the
/// call; no operation leaves partial state behind.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    NotFound,

    #[error("Wrong password")]
    InvalidCredentials,

    #[error("Missing email or password")]
    MissingCredentials,

    #[error("Invalid username")]
    InvalidUsername,

    #[error("User already exists")]
    AlreadyExists,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::MissingCredentials | AuthError::InvalidUsername => StatusCode::BAD_REQUEST,
            AuthError::AlreadyExists => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                error!(error = %e, "auth database error");
            }
            AuthError::Internal(msg) => {
                error!(message = %msg, "auth internal error");
            }
            AuthError::InvalidCredentials => {
                warn!("login with wrong password");
            }
            _ => {
                debug!(error = %self, "auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(AuthError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::MissingCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidUsername.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::AlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_caller_facing() {
        assert_eq!(AuthError::NotFound.to_string(), "User not found");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Wrong password");
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Missing email or password"
        );
        assert_eq!(AuthError::InvalidUsername.to_string(), "Invalid username");
        assert_eq!(AuthError::AlreadyExists.to_string(), "User already exists");
    }
}
