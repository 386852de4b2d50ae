use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::db::StorageError;
use crate::error::{ErrorMessage, HttpError};
use crate::service::auth::AuthError;
use crate::service::media_provider::MediaError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Property {0} not found")]
    PropertyNotFound(Uuid),

    #[error("Gallery item {0} not found")]
    GalleryItemNotFound(Uuid),

    #[error("Admin account {0} not found")]
    AdminNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match &error {
            ServiceError::PropertyNotFound(_)
            | ServiceError::GalleryItemNotFound(_)
            | ServiceError::AdminNotFound(_) => HttpError::not_found(error.to_string()),

            ServiceError::Validation(_) => HttpError::bad_request(error.to_string()),

            ServiceError::Media(MediaError::TooLarge { .. }) => {
                HttpError::payload_too_large(ErrorMessage::PayloadTooLarge.to_string())
            }

            ServiceError::Storage(_) | ServiceError::Media(_) => {
                HttpError::bad_gateway(ErrorMessage::UpstreamUnavailable.to_string())
            }

            ServiceError::Auth(AuthError::PermissionDenied) => {
                HttpError::new(ErrorMessage::PermissionDenied.to_string(), StatusCode::FORBIDDEN)
            }
            ServiceError::Auth(AuthError::Unreachable(_)) => {
                HttpError::bad_gateway(ErrorMessage::UpstreamUnavailable.to_string())
            }
            ServiceError::Auth(_) => HttpError::unauthorized(error.to_string()),
        }
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::PropertyNotFound(_)
            | ServiceError::GalleryItemNotFound(_)
            | ServiceError::AdminNotFound(_) => StatusCode::NOT_FOUND,

            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,

            ServiceError::Media(MediaError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,

            ServiceError::Storage(_) | ServiceError::Media(_) => StatusCode::BAD_GATEWAY,

            ServiceError::Auth(AuthError::PermissionDenied) => StatusCode::FORBIDDEN,
            ServiceError::Auth(AuthError::Unreachable(_)) => StatusCode::BAD_GATEWAY,
            ServiceError::Auth(_) => StatusCode::UNAUTHORIZED,
        }
    }
}
