//! Identity types for match participants and card instances.
//!
//! ## ParticipantId
//!
//! Opaque handle supplied by the caller (usually a session id). The engine
//! compares these for equality and never looks inside.
//!
//! ## InstanceId
//!
//! Identity of one physical card copy. Allocated once when a deck is built and
//! never reused, even after the card is destroyed. The engine draws ids from a
//! stream keyed by the match seed and a per-match nonce, so matches sharing a
//! seed still get disjoint ids unless the nonce is pinned as well.
//!
//! ```
//! use duel_engine::core::{GameRng, InstanceId};
//!
//! let mut rng = GameRng::new(7);
//! let a = InstanceId::generate(&mut rng);
//! let b = InstanceId::generate(&mut rng);
//! assert_ne!(a, b);
//!
//! let parsed: InstanceId = a.to_string().parse().unwrap();
//! assert_eq!(parsed, a);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rng::GameRng;

/// Opaque participant identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Wrap a caller-supplied identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Globally unique identifier of a card copy.
///
/// Serializes as the hyphenated UUID string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Draw a fresh id from `rng`.
    ///
    /// The same stream state always yields the same id.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self(rng.gen_uuid())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for InstanceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
