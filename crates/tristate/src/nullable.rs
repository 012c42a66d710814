//! Two-state restriction of [`TriState`] for fields that are always present.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DecodeError, EncodeError, ErrorKind};
use crate::tri_state::{State, TriState};

/// A required field that may still be `null`.
///
/// Wraps a [`TriState`] whose `Undefined` state is unreachable: there is no
/// undefined constructor, decoding never produces it, and the record codec
/// treats a missing required field as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullable<T>(TriState<T>);

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable(TriState::Null)
    }
}

impl<T> Nullable<T> {
    pub const fn new(value: T) -> Self {
        Nullable(TriState::Defined(value))
    }

    pub const fn null() -> Self {
        Nullable(TriState::Null)
    }

    pub const fn state(&self) -> State {
        self.0.state()
    }

    pub const fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Fails only with [`ErrorKind::Null`].
    pub fn value(&self) -> Result<&T, ErrorKind> {
        self.0.value()
    }

    pub fn into_value(self) -> Result<T, ErrorKind> {
        self.0.into_value()
    }

    pub fn as_tri_state(&self) -> &TriState<T> {
        &self.0
    }

    pub fn into_option(self) -> Option<T> {
        self.0.into_option().flatten()
    }
}

impl<T: DeserializeOwned> Nullable<T> {
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        TriState::decode(raw).map(Nullable)
    }
}

impl<T: Serialize> Nullable<T> {
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.0.encode()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable(value.into())
    }
}

impl<T> From<Nullable<T>> for TriState<T> {
    fn from(value: Nullable<T>) -> Self {
        value.0
    }
}

impl<T> TryFrom<TriState<T>> for Nullable<T> {
    type Error = ErrorKind;

    fn try_from(value: TriState<T>) -> Result<Self, Self::Error> {
        match value {
            TriState::Undefined => Err(ErrorKind::Undefined),
            other => Ok(Nullable(other)),
        }
    }
}

impl<T> TriState<T> {
    /// Splits into a presence layer over a nullability layer.
    ///
    /// `Undefined -> None`, `Null -> Some(Nullable::null())`,
    /// `Defined(v) -> Some(Nullable::new(v))`. Unlike deserializing straight
    /// into `Option<Nullable<T>>`, which folds `null` into `None`, this keeps
    /// the three cases apart.
    pub fn into_nested(self) -> Option<Nullable<T>> {
        match self {
            TriState::Undefined => None,
            other => Some(Nullable(other)),
        }
    }

    pub fn from_nested(value: Option<Nullable<T>>) -> Self {
        value.map_or(TriState::Undefined, |nullable| nullable.0)
    }
}

impl<T> From<TriState<T>> for Option<Nullable<T>> {
    fn from(value: TriState<T>) -> Self {
        value.into_nested()
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
