//! # duel-engine
//!
//! Rules engine for a two-player, turn-based collectible card game.
//!
//! Each participant gets a shuffled deck, an opening hand, a growing mana pool
//! and a leader with a life total. On their turn a player plays cards from hand
//! (followers go to the field, spells are discarded), attacks with ready
//! followers, and passes the turn. Reducing the opposing leader's life to zero
//! or below wins the match.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: One `MatchEngine` owns one match. It does no I/O and no
//!    locking; the host serializes calls.
//!
//! 2. **All or nothing**: Every action is validated before anything is
//!    written. A rejected action leaves the state exactly as it was.
//!
//! 3. **Hidden information by construction**: Callers see a match through
//!    `MatchSnapshot`, which never contains the opponent's hand or deck.
//!
//! 4. **Reproducible**: All randomness flows from one seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Identifiers, seats, RNG, configuration, errors, actions, state, snapshots
//! - `zones`: Deck, hand and field tracking
//! - `cards`: Card templates, instances and deck sources
//! - `rules`: The match engine and combat resolution

pub mod cards;
pub mod core;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, AttackTarget, GameRng, InstanceId, MatchConfig, MatchError, MatchSnapshot,
    MatchState, OpponentView, OwnView, ParticipantId, PlayerState, Seat, SeatMap, StatRange,
    TargetKind, MANA_CEILING, MAX_DECK_SIZE,
};

pub use crate::zones::{Location, Zone, ZoneManager};

pub use crate::cards::{
    CardInstance, CardKind, CardTemplate, DeckSource, FieldState, FixedDeck, StarterDeck,
};

pub use crate::rules::{CombatReport, MatchBuilder, MatchEngine, Played};
