//! Transport-level participant identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque network-wide identity of a participant.
///
/// The transport layer authenticates this identity cryptographically before
/// any message tagged with it is delivered; the core treats it as an opaque
/// key and maps it to a per-group [`crate::MemberIndex`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NetworkIdentity(pub [u8; 32]);

impl NetworkIdentity {
    /// Create an identity from raw key material.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix is enough for log correlation.
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
