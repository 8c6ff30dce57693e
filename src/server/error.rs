use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::common;
use crate::generation::{FieldError, GenerationError, ValidationErrors};

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound(String),
    AllStreamsFailed(Vec<String>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [FieldError]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [String]>,
}

impl<'a> ErrorBody<'a> {
    fn message(error: &'a str) -> Self {
        Self {
            error,
            fields: None,
            details: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "Validation error: {e}"),
            ApiError::BadRequest(e) => write!(f, "Bad request: {e}"),
            ApiError::NotFound(e) => write!(f, "Not found: {e}"),
            ApiError::AllStreamsFailed(details) => {
                write!(f, "All agents failed: {}", details.join("; "))
            },
            ApiError::Internal(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AllStreamsFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(e) => ErrorBody {
                error: e.summary(),
                fields: Some(e.fields()),
                details: None,
            },
            ApiError::BadRequest(message) | ApiError::NotFound(message) => {
                ErrorBody::message(message)
            },
            ApiError::AllStreamsFailed(details) => ErrorBody {
                error: "All agents failed to generate content",
                fields: None,
                details: Some(details),
            },
            ApiError::Internal(_) => {
                log::error!("{self}");
                ErrorBody::message("Internal server error")
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Validation(errors) => ApiError::Validation(errors),
            GenerationError::AllStreamsFailed(details) => ApiError::AllStreamsFailed(details),
        }
    }
}

impl From<common::Error> for ApiError {
    fn from(e: common::Error) -> Self {
        match e {
            common::Error::NoContent(_) => {
                ApiError::NotFound("No content available for download".to_string())
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}
