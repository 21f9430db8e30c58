use crate::session::SessionError;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let status = match &err {
            SessionError::UnknownField { .. } | SessionError::IdentityRequired => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            SessionError::OutOfPhase { .. } => StatusCode::CONFLICT,
            SessionError::Store(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
