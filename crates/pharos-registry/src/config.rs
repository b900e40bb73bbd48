//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the group registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Minimum number of active groups kept regardless of age.
    ///
    /// At or below this count the expiration check is skipped entirely,
    /// trading staleness for availability.
    pub active_groups_threshold: usize,

    /// Lifetime of a newly registered group, in blocks.
    pub group_lifetime_blocks: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            active_groups_threshold: 5,
            // Roughly two days at 15-second blocks.
            group_lifetime_blocks: 11_520,
        }
    }
}
