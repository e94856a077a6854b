//! Player actions.
//!
//! There are three verbs: end the turn, play a card from hand, and attack
//! with a follower. An attack names its target either as an opposing
//! follower or as the opposing leader.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::error::MatchError;

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Follower,
    Leader,
}

impl FromStr for TargetKind {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follower" => Ok(TargetKind::Follower),
            "leader" => Ok(TargetKind::Leader),
            other => Err(MatchError::InvalidTarget(other.to_string())),
        }
    }
}

/// A resolved attack target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum AttackTarget {
    /// An opposing follower by instance id.
    Follower(InstanceId),
    /// The opposing leader. Any accompanying id is ignored.
    Leader,
}

impl AttackTarget {
    /// Build a target from the raw (kind, id) pair a client sends.
    ///
    /// An unknown kind is `InvalidTarget`. A follower id that does not parse
    /// cannot name any card, so it is `TargetNotFound`.
    ///
    /// ```
    /// use duel_engine::core::{AttackTarget, MatchError};
    ///
    /// assert_eq!(AttackTarget::parse("leader", "whatever"), Ok(AttackTarget::Leader));
    /// assert_eq!(
    ///     AttackTarget::parse("follower", "nope"),
    ///     Err(MatchError::TargetNotFound)
    /// );
    /// assert!(matches!(
    ///     AttackTarget::parse("deck", ""),
    ///     Err(MatchError::InvalidTarget(_))
    /// ));
    /// ```
    pub fn parse(kind: &str, target_id: &str) -> Result<Self, MatchError> {
        match kind.parse::<TargetKind>()? {
            TargetKind::Leader => Ok(AttackTarget::Leader),
            TargetKind::Follower => target_id
                .parse()
                .map(AttackTarget::Follower)
                .map_err(|_| MatchError::TargetNotFound),
        }
    }

    /// The kind tag of this target.
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        match self {
            AttackTarget::Follower(_) => TargetKind::Follower,
            AttackTarget::Leader => TargetKind::Leader,
        }
    }
}

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    EndTurn,
    PlayCard { instance: InstanceId },
    Attack { attacker: InstanceId, target: AttackTarget },
}
