//! Core engine types: identities, seats, RNG, configuration, errors,
//! actions, state and viewer snapshots.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, AttackTarget, TargetKind};
pub use config::{MatchConfig, StatRange, MANA_CEILING, MAX_DECK_SIZE};
pub use entity::{InstanceId, ParticipantId};
pub use error::MatchError;
pub use player::{Seat, SeatMap};
pub use rng::GameRng;
pub use state::{MatchState, PlayerState};
pub use view::{MatchSnapshot, OpponentView, OwnView};
