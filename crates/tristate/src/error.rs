//! Error types for reading, decoding and encoding tri-state fields.

use thiserror::Error;

/// Why a value could not be read out of a wrapper.
///
/// Returned by `value()`; callers branch on the variant to tell "field missing"
/// from "field cleared".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("undefined")]
    Undefined,
    #[error("null")]
    Null,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The inner value failed to decode. The codec error is kept as is.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A required field was absent from the record.
    #[error("missing field `{0}`")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode undefined value")]
    Undefined,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    /// The state-level cause of this failure, if it was not an inner codec error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            EncodeError::Undefined => Some(ErrorKind::Undefined),
            EncodeError::Json(_) => None,
        }
    }
}
