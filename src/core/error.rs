//! Caller-facing validation failures.
//!
//! Every variant is recoverable: a rejected call leaves the match untouched.

use thiserror::Error;

use super::entity::ParticipantId;

/// Reasons a match operation is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("both participants share the id {0}")]
    SameParticipant(ParticipantId),
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
    #[error("participant {0} is not in this match")]
    NotFound(ParticipantId),
    #[error("match is not in progress")]
    GameNotActive,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("card is not in your hand")]
    CardNotFound,
    #[error("not enough mana: card costs {cost}, {available} available")]
    InsufficientResource { cost: u32, available: u32 },
    #[error("selected card cannot attack")]
    InvalidAttacker,
    #[error("this follower has already acted")]
    AlreadyActed,
    #[error("target follower not found")]
    TargetNotFound,
    #[error("invalid attack target kind: {0}")]
    InvalidTarget(String),
}

impl MatchError {
    /// Stable machine-readable code, for transports that forward errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::SameParticipant(_) => "same_participant",
            MatchError::InvalidConfig(_) => "invalid_config",
            MatchError::NotFound(_) => "not_found",
            MatchError::GameNotActive => "game_not_active",
            MatchError::NotYourTurn => "not_your_turn",
            MatchError::CardNotFound => "card_not_found",
            MatchError::InsufficientResource { .. } => "insufficient_resource",
            MatchError::InvalidAttacker => "invalid_attacker",
            MatchError::AlreadyActed => "already_acted",
            MatchError::TargetNotFound => "target_not_found",
            MatchError::InvalidTarget(_) => "invalid_target",
        }
    }
}
