//! Wire-level constants shared by the decode and encode paths.

/// The sentinel token for an explicit JSON `null`.
///
/// `TriState::decode` compares the raw field token against this exact byte
/// sequence; no whitespace trimming takes place.
pub const NULL_TOKEN: &[u8] = b"null";
