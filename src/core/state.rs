//! Match state: the aggregate root.
//!
//! ## PlayerState
//!
//! Per-participant resources: mana pool and leader life. A player's deck,
//! hand and field are id lists held by the `ZoneManager`.
//!
//! ## MatchState
//!
//! - Both players, indexed by `Seat`
//! - Card arena (`InstanceId -> CardInstance`)
//! - Zone manager (card locations)
//! - Turn bookkeeping and the winner once decided
//!
//! Every card in the arena is tracked by the zone manager and vice versa.
//! Destroying a card removes it from both.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::entity::{InstanceId, ParticipantId};
use super::player::{Seat, SeatMap};
use crate::cards::CardInstance;
use crate::zones::{Location, Zone, ZoneManager};

/// Resources of one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Caller-supplied participant handle.
    pub id: ParticipantId,

    /// Display name.
    pub name: String,

    /// Spendable mana this turn.
    pub current_mana: u32,

    /// Mana pool size.
    pub max_mana: u32,

    /// Leader life. May drop below zero before the match ends.
    pub life: i64,
}

impl PlayerState {
    #[must_use]
    pub fn new(id: ParticipantId, name: impl Into<String>, life: i64) -> Self {
        Self {
            id,
            name: name.into(),
            current_mana: 0,
            max_mana: 0,
            life,
        }
    }

    /// Grow the pool by one (up to `cap`) and refill it.
    pub fn refresh_mana(&mut self, cap: u32) {
        self.max_mana = (self.max_mana + 1).min(cap);
        self.current_mana = self.max_mana;
    }
}

/// Complete authoritative state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    players: SeatMap<PlayerState>,

    /// Card instances by id.
    cards: FxHashMap<InstanceId, CardInstance>,

    /// Card locations.
    zones: ZoneManager,

    /// Whose turn it is. `None` before the start and after the end.
    active: Option<Seat>,

    turn_number: u32,

    started: bool,

    winner: Option<Seat>,
}

impl MatchState {
    /// Create an empty, not-yet-started match.
    #[must_use]
    pub fn new(players: SeatMap<PlayerState>) -> Self {
        Self {
            players,
            cards: FxHashMap::default(),
            zones: ZoneManager::new(),
            active: None,
            turn_number: 0,
            started: false,
            winner: None,
        }
    }

    // === Participants ===

    /// Resolve a participant id to its seat.
    #[must_use]
    pub fn seat_of(&self, id: &ParticipantId) -> Option<Seat> {
        self.players.iter().find(|(_, p)| &p.id == id).map(|(seat, _)| seat)
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &ParticipantId {
        &self.players[seat].id
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        &mut self.players[seat]
    }

    /// Look up a player by participant id.
    #[must_use]
    pub fn player_by_id(&self, id: &ParticipantId) -> Option<&PlayerState> {
        self.seat_of(id).map(|seat| self.player(seat))
    }

    // === Turn bookkeeping ===

    #[must_use]
    pub fn active_seat(&self) -> Option<Seat> {
        self.active
    }

    #[must_use]
    pub fn active_participant(&self) -> Option<&ParticipantId> {
        self.active.map(|seat| self.participant(seat))
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Started and no winner yet: the only state that accepts actions.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.started && self.winner.is_none()
    }

    #[must_use]
    pub fn winner_seat(&self) -> Option<Seat> {
        self.winner
    }

    #[must_use]
    pub fn winner(&self) -> Option<&ParticipantId> {
        self.winner.map(|seat| self.participant(seat))
    }

    /// Begin the first turn.
    pub(crate) fn start(&mut self, first: Seat) {
        self.active = Some(first);
        self.turn_number = 1;
        self.started = true;
    }

    /// Hand the turn to `next`.
    pub(crate) fn pass_turn_to(&mut self, next: Seat) {
        self.active = Some(next);
        self.turn_number += 1;
    }

    /// Terminal transition.
    pub(crate) fn finish(&mut self, winner: Seat) {
        self.started = false;
        self.active = None;
        self.winner = Some(winner);
    }

    // === Cards ===

    #[must_use]
    pub fn card(&self, instance: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&instance)
    }

    pub(crate) fn card_mut(&mut self, instance: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&instance)
    }

    /// Read-only view of card locations.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn zone_of(&self, instance: InstanceId) -> Option<Location> {
        self.zones.location(instance)
    }

    /// Cards in a zone, in zone order.
    pub fn cards_in(&self, seat: Seat, zone: Zone) -> impl Iterator<Item = &CardInstance> + '_ {
        self.zones
            .cards(seat, zone)
            .iter()
            .filter_map(move |id| self.cards.get(id))
    }

    /// Number of live (not destroyed or discarded) cards.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Register a new card in a zone.
    ///
    /// Returns false if the id is already in use.
    pub(crate) fn add_card(&mut self, card: CardInstance, location: Location) -> bool {
        if self.cards.contains_key(&card.instance_id) {
            return false;
        }
        if !self.zones.add_to_zone(card.instance_id, location) {
            return false;
        }
        self.cards.insert(card.instance_id, card);
        true
    }

    /// Draw the front card of `seat`'s deck into its hand.
    pub(crate) fn draw(&mut self, seat: Seat) -> Option<InstanceId> {
        self.zones.draw(seat)
    }

    /// Move a card to another zone of its owner.
    pub(crate) fn move_card(&mut self, instance: InstanceId, zone: Zone) -> Option<Location> {
        self.zones.move_to_zone(instance, zone)
    }

    /// Remove a card from play permanently.
    pub(crate) fn destroy(&mut self, instance: InstanceId) -> Option<CardInstance> {
        self.zones.remove(instance)?;
        self.cards.remove(&instance)
    }

    /// Arena and zone manager agree on exactly the same set of cards.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.zones.is_consistent()
            && self.zones.total_cards() == self.cards.len()
            && self.cards.keys().all(|id| self.zones.contains(*id))
    }
}
