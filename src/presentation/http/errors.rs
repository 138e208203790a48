use poem::{Response, error::ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::{application::usecases::proxy_auth::AuthProxyError, domain::errors::DomainError};

/// Error rendered as `{ "statusCode": .., "message": .. }`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl ResponseError for HttpError {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn as_response(&self) -> Response {
        let body = json!({
            "statusCode": self.status.as_u16(),
            "message": self.message,
        });
        Response::builder()
            .status(self.status)
            .content_type("application/json")
            .body(body.to_string())
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(what) => Self::not_found(format!("{what} not found")),
            DomainError::AlreadyExists(what) => {
                Self::new(StatusCode::CONFLICT, format!("{what} already exists"))
            }
            DomainError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            DomainError::Forbidden(message) => Self::new(StatusCode::FORBIDDEN, message),
            DomainError::Other(err) => {
                tracing::error!(error = ?err, "unhandled error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<DomainError> for poem::Error {
    fn from(err: DomainError) -> Self {
        HttpError::from(err).into()
    }
}

impl From<AuthProxyError> for HttpError {
    fn from(err: AuthProxyError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

/// Renders any error escaping the routes (including framework parse and
/// routing errors) with the JSON error shape.
pub async fn render_error(err: poem::Error) -> Response {
    HttpError::new(err.status(), err.to_string()).as_response()
}
