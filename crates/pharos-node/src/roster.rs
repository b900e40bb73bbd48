//! Transport identity to member index mapping.

use pharos_core::{MemberIndex, NetworkIdentity, PharosError, Result};
use std::collections::HashMap;

/// Mapping from authenticated transport identities to one group's member
/// indices.
///
/// Built once at group formation. The broadcast channel delivers messages
/// tagged with a [`NetworkIdentity`]; protocol logic resolves that identity
/// here before any filtering or phase processing happens. Identities not in
/// the roster simply resolve to nothing.
#[derive(Debug, Clone)]
pub struct GroupRoster {
    by_identity: HashMap<NetworkIdentity, MemberIndex>,
}

impl GroupRoster {
    /// Build a roster from (identity, index) pairs fixed at formation.
    ///
    /// Both sides must be unique: one peer holds exactly one index in a
    /// group and vice versa.
    pub fn from_pairs(pairs: Vec<(NetworkIdentity, MemberIndex)>) -> Result<Self> {
        let mut by_identity = HashMap::with_capacity(pairs.len());
        let mut seen_indices = std::collections::BTreeSet::new();

        for (identity, member) in pairs {
            if by_identity.insert(identity, member).is_some() {
                return Err(PharosError::invalid(format!(
                    "Duplicate identity {identity} in group roster"
                )));
            }
            if !seen_indices.insert(member) {
                return Err(PharosError::invalid(format!(
                    "Duplicate member index {member} in group roster"
                )));
            }
        }

        Ok(Self { by_identity })
    }

    /// Resolve a transport identity to its member index, if enrolled.
    pub fn resolve(&self, identity: &NetworkIdentity) -> Option<MemberIndex> {
        self.by_identity.get(identity).copied()
    }

    /// Number of enrolled members.
    pub fn len(&self) -> usize {
        self.by_identity.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.by_identity.is_empty()
    }
}
