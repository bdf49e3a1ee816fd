// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Top-level error formatter: every resolver failure becomes a
/// `{message, code, data?}` body with the matching HTTP status.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    data: Option<Vec<String>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(errors) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "invalid input".into(),
                data: Some(errors),
            },
            ApplicationError::Unauthenticated(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "internal error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an error occurred".into(),
                )
            }
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "invalid input".into(),
                data: Some(vec![msg]),
            },
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "persistence error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an error occurred".into(),
                )
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            message: self.message,
            code: self.status.as_u16(),
            data: self.data,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<String>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
