//! `serde` integration, so wrappers can sit directly in derived records.
//!
//! Absence is the containing record's business: a `TriState` field needs
//! `#[serde(default)]` to come out `Undefined` when the key is missing, and
//! `#[serde(skip_serializing_if = "TriState::is_undefined")]` to be left out on
//! the way back. Without the attribute a missing key is a "missing field"
//! error and serializing an undefined field fails.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::EncodeError;
use crate::nullable::Nullable;
use crate::tri_state::TriState;

impl<'de, T: DeserializeOwned> Deserialize<'de> for TriState<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Buffering through `Value` goes via `deserialize_any`, which the
        // missing-field path rejects instead of answering with `visit_none`.
        // `arbitrary_precision` keeps numbers as text inside `Value`, so
        // 128-bit integers and exact floats survive the detour.
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(TriState::Null),
            value => serde_json::from_value(value)
                .map(TriState::Defined)
                .map_err(D::Error::custom),
        }
    }
}

impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TriState::Undefined => {
                debug!("refusing to serialize undefined field");
                Err(S::Error::custom(EncodeError::Undefined))
            }
            TriState::Null => serializer.serialize_unit(),
            TriState::Defined(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = TriState::<T>::deserialize(deserializer)?;
        Nullable::try_from(inner).map_err(D::Error::custom)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_tri_state().serialize(serializer)
    }
}
