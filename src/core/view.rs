//! Viewer-scoped snapshots.
//!
//! A snapshot shows the viewer everything about their own side and only the
//! public part of the opponent's: hand size instead of hand contents, and no
//! deck at all.

use serde::{Deserialize, Serialize};

use super::entity::ParticipantId;
use super::player::Seat;
use super::state::MatchState;
use crate::cards::CardInstance;
use crate::zones::Zone;

/// The viewer's own side, in full.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnView {
    pub id: ParticipantId,
    pub name: String,
    pub hand: Vec<CardInstance>,
    pub hand_count: usize,
    pub deck: Vec<CardInstance>,
    pub field: Vec<CardInstance>,
    pub current_mana: u32,
    pub max_mana: u32,
    pub life: i64,
}

/// The opponent's public side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub id: ParticipantId,
    pub name: String,
    pub hand_count: usize,
    pub field: Vec<CardInstance>,
    pub current_mana: u32,
    pub max_mana: u32,
    pub life: i64,
}

/// Everything one participant is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub me: OwnView,
    pub opponent: OpponentView,
    pub is_my_turn: bool,
    pub turn_number: u32,
    pub started: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<ParticipantId>,
}

impl MatchSnapshot {
    /// Project the state for the participant in `viewer`.
    #[must_use]
    pub fn project(state: &MatchState, viewer: Seat) -> Self {
        let cards = |seat: Seat, zone: Zone| -> Vec<CardInstance> {
            state.cards_in(seat, zone).cloned().collect()
        };

        let own = state.player(viewer);
        let hand = cards(viewer, Zone::Hand);
        let me = OwnView {
            id: own.id.clone(),
            name: own.name.clone(),
            hand_count: hand.len(),
            hand,
            deck: cards(viewer, Zone::Deck),
            field: cards(viewer, Zone::Field),
            current_mana: own.current_mana,
            max_mana: own.max_mana,
            life: own.life,
        };

        let opponent_seat = viewer.other();
        let theirs = state.player(opponent_seat);
        let opponent = OpponentView {
            id: theirs.id.clone(),
            name: theirs.name.clone(),
            hand_count: state.zones().zone_size(opponent_seat, Zone::Hand),
            field: cards(opponent_seat, Zone::Field),
            current_mana: theirs.current_mana,
            max_mana: theirs.max_mana,
            life: theirs.life,
        };

        Self {
            me,
            opponent,
            is_my_turn: state.active_seat() == Some(viewer),
            turn_number: state.turn_number(),
            started: state.is_started(),
            winner: state.winner().cloned(),
        }
    }
}
