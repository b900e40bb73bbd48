#![forbid(unsafe_code)]
//! # Pharos Registry
//!
//! Network-level bookkeeping of formed groups. Every completed formation is
//! recorded as a [`FormationAgreement`]; work requests are served by the
//! [`GroupRegistry`], which picks an active group uniformly at random and
//! lazily retires expired ones. A configured floor of active groups is never
//! expired away, so the network cannot run out of usable groups no matter
//! how stale they are.

/// Formation agreements and their lifecycle state
pub mod agreement;

/// Registry configuration
pub mod config;

/// Group registry with the selection/expiration algorithm
pub mod registry;

pub use agreement::{FormationAgreement, GroupState};
pub use config::RegistryConfig;
pub use registry::{GroupRegistry, RegistrySnapshot, SelectedGroup};
