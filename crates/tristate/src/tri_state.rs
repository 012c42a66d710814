//! The tri-state field wrapper and its byte-level decode/encode contract.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::constants::NULL_TOKEN;
use crate::error::{DecodeError, EncodeError, ErrorKind};

/// Which of the three states a [`TriState`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Undefined,
    Null,
    Defined,
}

impl State {
    pub fn as_str(self) -> &'static str {
        match self {
            State::Undefined => "undefined",
            State::Null => "null",
            State::Defined => "defined",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document field that is either absent, an explicit `null`, or a value.
///
/// `Option<T>` folds the first two together; this type keeps them apart so
/// that partial updates can tell "leave unchanged" (`Undefined`) from "clear"
/// (`Null`).
///
/// Absence is never inferred by decoding. A host codec that finds no token for
/// the field simply does not call [`TriState::decode`], and the field keeps its
/// [`Default`] of `Undefined`:
///
/// ```
/// use json_tristate::{ErrorKind, TriState};
///
/// let present: TriState<u32> = TriState::decode(b"42").unwrap();
/// assert_eq!(present.value(), Ok(&42));
///
/// let cleared: TriState<u32> = TriState::decode(b"null").unwrap();
/// assert_eq!(cleared.value(), Err(ErrorKind::Null));
///
/// let missing: TriState<u32> = TriState::default();
/// assert_eq!(missing.value(), Err(ErrorKind::Undefined));
/// assert!(missing.encode().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriState<T> {
    /// The field was not present in the source document.
    Undefined,
    /// The field was present as the `null` token.
    Null,
    /// The field was present and decoded as `T`.
    Defined(T),
}

impl<T> Default for TriState<T> {
    fn default() -> Self {
        TriState::Undefined
    }
}

impl<T> TriState<T> {
    pub const fn new(value: T) -> Self {
        TriState::Defined(value)
    }

    pub const fn null() -> Self {
        TriState::Null
    }

    pub const fn undefined() -> Self {
        TriState::Undefined
    }

    pub const fn state(&self) -> State {
        match self {
            TriState::Undefined => State::Undefined,
            TriState::Null => State::Null,
            TriState::Defined(_) => State::Defined,
        }
    }

    pub const fn is_undefined(&self) -> bool {
        matches!(self, TriState::Undefined)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, TriState::Null)
    }

    pub const fn is_defined(&self) -> bool {
        matches!(self, TriState::Defined(_))
    }

    /// Borrows the held value, or reports which state prevented it.
    pub fn value(&self) -> Result<&T, ErrorKind> {
        match self {
            TriState::Undefined => Err(ErrorKind::Undefined),
            TriState::Null => Err(ErrorKind::Null),
            TriState::Defined(value) => Ok(value),
        }
    }

    pub fn into_value(self) -> Result<T, ErrorKind> {
        match self {
            TriState::Undefined => Err(ErrorKind::Undefined),
            TriState::Null => Err(ErrorKind::Null),
            TriState::Defined(value) => Ok(value),
        }
    }

    /// The held value, discarding the distinction between undefined and null.
    pub fn ok(&self) -> Option<&T> {
        self.value().ok()
    }

    pub const fn as_ref(&self) -> TriState<&T> {
        match self {
            TriState::Undefined => TriState::Undefined,
            TriState::Null => TriState::Null,
            TriState::Defined(value) => TriState::Defined(value),
        }
    }

    pub fn map<U, F>(self, f: F) -> TriState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            TriState::Undefined => TriState::Undefined,
            TriState::Null => TriState::Null,
            TriState::Defined(value) => TriState::Defined(f(value)),
        }
    }

    /// Inverse of [`TriState::into_option`].
    pub fn from_option(value: Option<Option<T>>) -> Self {
        match value {
            None => TriState::Undefined,
            Some(None) => TriState::Null,
            Some(Some(value)) => TriState::Defined(value),
        }
    }

    /// `Undefined -> None`, `Null -> Some(None)`, `Defined(v) -> Some(Some(v))`.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            TriState::Undefined => None,
            TriState::Null => Some(None),
            TriState::Defined(value) => Some(Some(value)),
        }
    }
}

impl<T: DeserializeOwned> TriState<T> {
    /// Decodes one field token that is present in the document.
    ///
    /// The exact bytes `null` give `Null`; anything else is handed to `T`'s
    /// own decoder and its error, if any, is returned unchanged. The result is
    /// a fresh instance, so a failed decode leaves any existing wrapper as it
    /// was.
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        if raw == NULL_TOKEN {
            trace!(state = %State::Null, "decoded field token");
            return Ok(TriState::Null);
        }
        let value = serde_json::from_slice::<T>(raw)?;
        trace!(state = %State::Defined, len = raw.len(), "decoded field token");
        Ok(TriState::Defined(value))
    }
}

impl<T: Serialize> TriState<T> {
    /// Encodes the field token.
    ///
    /// There is no way to omit a field at this level: `Undefined` fails with
    /// [`EncodeError::Undefined`] and the containing record decides what to do.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            TriState::Undefined => Err(EncodeError::Undefined),
            TriState::Null => Ok(NULL_TOKEN.to_vec()),
            TriState::Defined(value) => Ok(serde_json::to_vec(value)?),
        }
    }
}

impl<T> From<Option<T>> for TriState<T> {
    /// `None` is an explicit null; use [`TriState::undefined`] for absence.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => TriState::Defined(value),
            None => TriState::Null,
        }
    }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Undefined => f.write_str("undefined"),
            TriState::Null => f.write_str("null"),
            TriState::Defined(value) => value.fmt(f),
        }
    }
}
