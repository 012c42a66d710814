//! Bridge between wrappers and already-parsed `serde_json::Value` trees.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::tri_state::TriState;

impl<T: DeserializeOwned> TriState<T> {
    /// Decodes a field looked up in a parsed object, e.g. `map.get("key")`.
    ///
    /// `None` means the key was absent and yields `Undefined` without touching
    /// the inner decoder.
    pub fn from_field(field: Option<&Value>) -> Result<Self, DecodeError> {
        match field {
            None => Ok(TriState::Undefined),
            Some(value) => Self::from_value(value),
        }
    }

    /// Decodes a value known to be present.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(TriState::Null),
            other => Ok(TriState::Defined(T::deserialize(other)?)),
        }
    }
}

impl<T: Serialize> TriState<T> {
    pub fn to_value(&self) -> Result<Value, EncodeError> {
        match self {
            TriState::Undefined => Err(EncodeError::Undefined),
            TriState::Null => Ok(Value::Null),
            TriState::Defined(value) => Ok(serde_json::to_value(value)?),
        }
    }
}
