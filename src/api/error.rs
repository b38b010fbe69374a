use super::dto::ErrorBody;
use crate::application_port::*;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let code = if let Some(code) = err.find::<ApiErrorCode>() {
        code.clone()
    } else if err.is_not_found() {
        ApiErrorCode::NotFound
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some()
        || err.find::<reject::UnsupportedMediaType>().is_some()
        || err.find::<reject::LengthRequired>().is_some()
    {
        ApiErrorCode::InvalidBody
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        ApiErrorCode::PayloadTooLarge
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        ApiErrorCode::MethodNotAllowed
    } else {
        ApiErrorCode::internal(format!("unhandled rejection: {:?}", err))
    };

    let json = warp::reply::json(&ErrorBody {
        message: Some(code.to_string()),
    });
    Ok(warp::reply::with_status(json, code.status()))
}

#[derive(Debug, Clone, Error)]
pub enum ApiErrorCode {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username is too long")]
    UsernameTooLong,
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal error")]
    InternalError,
}

impl ApiErrorCode {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::InvalidBody
            | ApiErrorCode::UsernameRequired
            | ApiErrorCode::UsernameTooLong => StatusCode::BAD_REQUEST,
            ApiErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<LookupError> for ApiErrorCode {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::UsernameRequired => ApiErrorCode::UsernameRequired,
            LookupError::UsernameTooLong { .. } => ApiErrorCode::UsernameTooLong,
            e @ LookupError::DestinationRejected { .. } => ApiErrorCode::internal(e),
            LookupError::Store(e) => ApiErrorCode::internal(e),
        }
    }
}
