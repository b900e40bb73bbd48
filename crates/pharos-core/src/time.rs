//! Logical block time.
//!
//! All timeout evaluation in Pharos uses block height supplied by the chain
//! oracle, never wall-clock time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically non-decreasing logical time, measured in block height.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Create a block height.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Raw height value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Height after the given number of blocks, saturating at the maximum.
    pub const fn saturating_add(&self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
