//! Protocol-level member identification.

use crate::errors::{PharosError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a member within a single group.
///
/// Indices are dense `1..=N`, assigned at group formation and stable for the
/// lifetime of the group. They are independent of a participant's
/// network-wide identity; the same peer holds a different index in every
/// group it belongs to. Zero is never a valid index. Ordering is used only
/// for deterministic iteration, never as a trust signal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberIndex(u32);

impl MemberIndex {
    /// Create a member index, rejecting zero.
    pub fn new(index: u32) -> Result<Self> {
        if index == 0 {
            return Err(PharosError::invalid("Member index must be non-zero"));
        }
        Ok(Self(index))
    }

    /// Raw index value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for MemberIndex {
    type Error = PharosError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for MemberIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build the dense index sequence `1..=size` assigned at group formation.
pub fn member_indices(size: u32) -> Vec<MemberIndex> {
    (1..=size).map(MemberIndex).collect()
}
