//! Boundary effect interfaces.
//!
//! The core consumes its collaborators through these traits: the chain's
//! block-time oracle, the authenticated broadcast transport, and the source
//! of selection randomness. Production implementations live in the node and
//! its surrounding infrastructure; tests substitute deterministic handlers.

use crate::errors::Result;
use crate::identity::NetworkIdentity;
use crate::time::BlockHeight;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::sync::Arc;

/// Monotonic block-time oracle.
///
/// Heights returned by successive calls never decrease. The registry itself
/// never calls this trait; the orchestrator reads the oracle once per
/// operation and passes the observed height down.
#[async_trait]
pub trait BlockTimeEffects: Send + Sync {
    /// Current chain height.
    async fn current_block(&self) -> Result<BlockHeight>;
}

/// Handler invoked for every delivered broadcast payload.
pub trait MessageHandler: Send + Sync {
    /// Process one authenticated payload.
    ///
    /// The sender identity was cryptographically authenticated by the
    /// transport before delivery; forged identities are excluded upstream.
    fn on_message(&self, sender: NetworkIdentity, payload: &[u8]);
}

/// Authenticated broadcast channel for one group.
#[async_trait]
pub trait BroadcastChannel: Send + Sync {
    /// Broadcast a payload to every channel participant.
    async fn broadcast(&self, payload: Vec<u8>) -> Result<()>;

    /// Register a handler for incoming payloads.
    fn register_handler(&self, handler: Arc<dyn MessageHandler>);
}

/// Injected source of selection randomness.
///
/// Group selection fairness is security-relevant, so the source must be
/// CSPRNG-quality or verifiably unbiased (the protocol derives it from
/// beacon output upstream). Implementations are shared handles.
pub trait EntropySource: Send + Sync {
    /// Uniformly random index in `0..upper_bound`. `upper_bound` must be
    /// non-zero.
    fn pick(&self, upper_bound: usize) -> usize;
}

/// ChaCha20-backed entropy handler.
///
/// The default production source when no beacon-derived randomness is
/// wired in; also the deterministic handler for tests via [`Self::from_seed`].
pub struct ChaChaEntropy {
    rng: Mutex<ChaCha20Rng>,
}

impl ChaChaEntropy {
    /// Create a handler seeded from OS entropy.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_entropy()),
        }
    }

    /// Create a deterministic handler from an explicit seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_seed(seed)),
        }
    }
}

impl EntropySource for ChaChaEntropy {
    fn pick(&self, upper_bound: usize) -> usize {
        debug_assert!(upper_bound > 0, "pick called with empty range");
        // gen_range is rejection-sampled, so the draw carries no modulo bias.
        self.rng.lock().gen_range(0..upper_bound)
    }
}
