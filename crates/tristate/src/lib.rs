//! json-tristate - JSON fields that tell "absent" from "null" from "present".
//!
//! Partial-update payloads need three answers for every field: leave it alone
//! (the key is missing), clear it (`"key": null`), or set it (`"key": 42`).
//! `Option<T>` can only give two. [`TriState`] keeps all three, with a byte
//! level [`decode`](TriState::decode) / [`encode`](TriState::encode) contract
//! for host codecs, `serde` impls for derived records, and helpers for
//! applying a field as an update.
//!
//! [`Nullable`] is the same wrapper restricted to fields that must be present.
//!
//! ```
//! use json_tristate::{RecordDecoder, RecordEncoder, TriState, UndefinedPolicy};
//!
//! let rec = RecordDecoder::parse(br#"{"name": null}"#).unwrap();
//! let name: TriState<String> = rec.field("name").unwrap();
//! let age: TriState<u32> = rec.field("age").unwrap();
//! assert!(name.is_null());
//! assert!(age.is_undefined());
//!
//! let mut out = RecordEncoder::new(UndefinedPolicy::Omit);
//! out.field("name", &name).unwrap().field("age", &age).unwrap();
//! assert_eq!(out.finish().unwrap(), br#"{"name":null}"#);
//! ```

mod constants;
mod error;
mod nullable;
mod patch;
mod serde_impl;
mod tri_state;
mod value;

pub mod record;

pub use constants::NULL_TOKEN;
pub use error::{DecodeError, EncodeError, ErrorKind};
pub use nullable::Nullable;
pub use record::{RecordDecoder, RecordEncoder, UndefinedPolicy};
pub use tri_state::{State, TriState};
