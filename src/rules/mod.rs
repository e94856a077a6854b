//! Match rules: turn flow, card play and combat.
//!
//! `MatchEngine` is the only way to mutate a match. It validates every action
//! against the current state and applies it atomically or not at all.

pub mod combat;
pub mod engine;

pub use combat::CombatReport;
pub use engine::{MatchBuilder, MatchEngine, Played};
