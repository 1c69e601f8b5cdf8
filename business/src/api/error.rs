use thiserror::Error;

use crate::api::envelope::{ErrorEnvelope, FieldErrors};
use crate::http::{HttpError, Response};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got an HTTP response.
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    #[error("Failed to parse {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize request: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { what, source }
    }

    /// Builds a `Rejected` error from a failed response, reading the
    /// `{ message, errors }` envelope when the body has one.
    pub fn from_response(response: &Response) -> Self {
        let envelope = response.json::<ErrorEnvelope>().unwrap_or_default();

        let message = if envelope.message.trim().is_empty() {
            format!("API returned status: {}", response.status)
        } else {
            envelope.message
        };

        Self::Rejected {
            status: response.status,
            message,
            errors: envelope.errors,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation messages, empty for anything but a rejection.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Rejected { errors, .. } => errors.clone(),
            _ => FieldErrors::default(),
        }
    }
}
