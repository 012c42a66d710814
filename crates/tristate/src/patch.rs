//! Applying tri-state fields as partial updates.
//!
//! An undefined field leaves its target alone, a null field clears it and a
//! defined field overwrites it.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::error::EncodeError;
use crate::tri_state::TriState;

impl<T> TriState<T> {
    /// Applies this field to an optional slot. Returns whether it changed.
    pub fn apply_to(self, target: &mut Option<T>) -> bool {
        match self {
            TriState::Undefined => false,
            TriState::Null => {
                *target = None;
                true
            }
            TriState::Defined(value) => {
                *target = Some(value);
                true
            }
        }
    }
}

impl<T: Serialize> TriState<T> {
    /// Merges this field into a JSON object under `key`, merge-patch style:
    /// null removes the member instead of storing a `null`.
    pub fn merge_into(
        &self,
        object: &mut Map<String, Value>,
        key: &str,
    ) -> Result<(), EncodeError> {
        match self {
            TriState::Undefined => {}
            TriState::Null => {
                object.remove(key);
            }
            TriState::Defined(_) => {
                let value = self.to_value()?;
                object.insert(key.to_string(), value);
            }
        }
        trace!(key, state = %self.state(), "merged field");
        Ok(())
    }
}
