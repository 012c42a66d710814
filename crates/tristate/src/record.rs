//! A small host codec for flat JSON objects.
//!
//! [`RecordDecoder`] splits an object into raw per-field tokens and hands each
//! present token to [`TriState::decode`]; a missing key never reaches the
//! wrapper. [`RecordEncoder`] writes fields back in call order and decides,
//! through [`UndefinedPolicy`], what an undefined field means for the record.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::{DecodeError, EncodeError};
use crate::nullable::Nullable;
use crate::tri_state::TriState;

/// Parsed object whose member values are kept as unparsed tokens.
#[derive(Debug)]
pub struct RecordDecoder {
    fields: IndexMap<String, Box<RawValue>>,
}

impl RecordDecoder {
    /// Parses `bytes` as a JSON object. Duplicate keys keep the last value.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        let fields: IndexMap<String, Box<RawValue>> = serde_json::from_slice(bytes)?;
        debug!(fields = fields.len(), "parsed record");
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The raw token text of a present field.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|raw| raw.get())
    }

    /// Decodes an optional field: absent keys come back `Undefined`.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Result<TriState<T>, DecodeError> {
        match self.raw(key) {
            Some(token) => TriState::decode(token.as_bytes()),
            None => Ok(TriState::Undefined),
        }
    }

    /// Decodes a required field that may be `null`.
    pub fn nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Nullable<T>, DecodeError> {
        match self.raw(key) {
            Some(token) => Nullable::decode(token.as_bytes()),
            None => Err(DecodeError::MissingField(key.to_string())),
        }
    }

    /// Decodes a required, non-null field.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeError> {
        match self.raw(key) {
            Some(token) => Ok(serde_json::from_str(token)?),
            None => Err(DecodeError::MissingField(key.to_string())),
        }
    }
}

/// What [`RecordEncoder`] does with an undefined field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedPolicy {
    /// Fail with [`EncodeError::Undefined`].
    #[default]
    Error,
    /// Leave the field out of the output.
    Omit,
}

/// Collects fields as encoded tokens and writes them as a compact JSON object.
///
/// Fields come out in the order they were first written; writing a key again
/// replaces its token.
#[derive(Debug)]
pub struct RecordEncoder {
    policy: UndefinedPolicy,
    fields: IndexMap<String, Box<RawValue>>,
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new(UndefinedPolicy::default())
    }
}

impl RecordEncoder {
    pub fn new(policy: UndefinedPolicy) -> Self {
        Self {
            policy,
            fields: IndexMap::new(),
        }
    }

    pub fn policy(&self) -> UndefinedPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Writes a tri-state field, applying the undefined policy.
    ///
    /// On error nothing is written and the encoder can still be used.
    pub fn field<T: Serialize>(
        &mut self,
        key: &str,
        value: &TriState<T>,
    ) -> Result<&mut Self, EncodeError> {
        if value.is_undefined() {
            match self.policy {
                UndefinedPolicy::Omit => {
                    debug!(key, "omitting undefined field");
                    return Ok(self);
                }
                UndefinedPolicy::Error => {
                    debug!(key, "undefined field rejected");
                    return Err(EncodeError::Undefined);
                }
            }
        }
        let token = value.encode()?;
        self.insert(key, &token)?;
        Ok(self)
    }

    pub fn nullable<T: Serialize>(
        &mut self,
        key: &str,
        value: &Nullable<T>,
    ) -> Result<&mut Self, EncodeError> {
        self.field(key, value.as_tri_state())
    }

    /// Writes a plain, always-present field.
    pub fn value<T: Serialize>(&mut self, key: &str, value: &T) -> Result<&mut Self, EncodeError> {
        let token = serde_json::to_vec(value)?;
        self.insert(key, &token)?;
        Ok(self)
    }

    pub fn finish(self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }

    fn insert(&mut self, key: &str, token: &[u8]) -> Result<(), EncodeError> {
        let raw: Box<RawValue> = serde_json::from_slice(token)?;
        self.fields.insert(key.to_string(), raw);
        Ok(())
    }
}
