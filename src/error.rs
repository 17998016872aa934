use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Error taxonomy surfaced by the service layer. Handlers map these to HTTP
/// statuses; anything that is not a Conflict/Unauthorized/NotFound becomes a
/// generic 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

/// True when the write was rejected by a unique index (Mongo error 11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Unauthorized("bad".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_uses_inner_message() {
        let err = ServiceError::NotFound("Master resume not found".into());
        assert_eq!(err.to_string(), "Master resume not found");
    }
}
