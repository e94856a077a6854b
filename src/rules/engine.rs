//! The match engine.
//!
//! `MatchEngine` owns one match's authoritative state and exposes its only
//! mutations: `end_turn`, `play_card`, `attack` and `end_match`. Each one
//! either succeeds completely or returns a `MatchError` without touching the
//! state.
//!
//! The engine does no locking and no I/O. Whoever hosts it must serialize
//! calls for a match (one owning task, or a mutex around each call).
//!
//! ## Example
//!
//! ```
//! use duel_engine::rules::MatchEngine;
//!
//! let mut engine = MatchEngine::builder().seed(7).build("p1", "p2").unwrap();
//! let first = engine.state().active_participant().cloned().unwrap();
//!
//! engine.end_turn(&first).unwrap();
//!
//! let second = engine.get_opponent_id(&first).unwrap().clone();
//! let view = engine.get_game_state(&second).unwrap();
//! assert!(view.is_my_turn);
//! assert_eq!(view.me.max_mana, 1);
//! assert_eq!(view.me.hand_count, 5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::combat::{resolve_attack, CombatReport};
use crate::cards::{CardInstance, DeckSource, StarterDeck};
use crate::core::{
    Action, AttackTarget, GameRng, InstanceId, MatchConfig, MatchError, MatchSnapshot, MatchState,
    ParticipantId, PlayerState, Seat, SeatMap,
};
use crate::zones::{Location, Zone};

/// What happened to a played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Played {
    /// A follower entered the field.
    Follower,
    /// A spell resolved and was discarded.
    Spell,
}

/// Builder for creating a `MatchEngine`.
pub struct MatchBuilder {
    config: MatchConfig,
    seed: Option<u64>,
    id_nonce: Option<u64>,
    deck_source: Box<dyn DeckSource>,
    names: SeatMap<String>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            seed: None,
            id_nonce: None,
            deck_source: Box::new(StarterDeck),
            names: SeatMap::new(|seat| match seat {
                Seat::First => "Player A".to_string(),
                Seat::Second => "Player B".to_string(),
            }),
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_life(mut self, life: i64) -> Self {
        self.config.starting_life = life;
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    pub fn deck_size(mut self, size: usize) -> Self {
        self.config.deck_size = size;
        self
    }

    /// Fix the random seed. Without one, a fresh seed is drawn.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the nonce mixed into instance ids.
    ///
    /// Without one, every build draws a fresh nonce, so two matches with the
    /// same seed share deck contents and opener but no instance ids. Pin both
    /// seed and nonce to replay a match exactly.
    pub fn id_nonce(mut self, nonce: u64) -> Self {
        self.id_nonce = Some(nonce);
        self
    }

    pub fn deck_source(mut self, source: impl DeckSource + 'static) -> Self {
        self.deck_source = Box::new(source);
        self
    }

    /// Display names for the first and second participant.
    pub fn names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names[Seat::First] = first.into();
        self.names[Seat::Second] = second.into();
        self
    }

    /// Build decks, pick the first player, deal opening hands.
    ///
    /// Fails if the ids are equal or the configuration is invalid.
    pub fn build(
        self,
        first: impl Into<ParticipantId>,
        second: impl Into<ParticipantId>,
    ) -> Result<MatchEngine, MatchError> {
        let first = first.into();
        let second = second.into();
        if first == second {
            return Err(MatchError::SameParticipant(first));
        }
        self.config.validate()?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let id_nonce = self.id_nonce.unwrap_or_else(rand::random);
        let mut id_rng = rng.for_context(&format!("ids:{id_nonce}"));
        let config = self.config;

        let players = SeatMap::new(|seat| {
            let id = match seat {
                Seat::First => first.clone(),
                Seat::Second => second.clone(),
            };
            PlayerState::new(id, self.names[seat].clone(), config.starting_life)
        });
        let mut state = MatchState::new(players);

        for seat in Seat::ALL {
            // Per-seat stream: a deck's contents never depend on the other seat's.
            let mut deck_rng = rng.for_context(&format!("deck:{}", seat.index()));
            let mut deck: Vec<CardInstance> = self
                .deck_source
                .build_deck(seat, &config, &mut deck_rng)
                .into_iter()
                .map(|template| CardInstance::new(InstanceId::generate(&mut id_rng), template))
                .collect();
            deck_rng.shuffle(&mut deck);

            for card in deck {
                if !state.add_card(card, Location::new(seat, Zone::Deck)) {
                    return Err(MatchError::InvalidConfig(
                        "deck source produced a duplicate card instance".to_string(),
                    ));
                }
            }
        }

        let opener = rng.choose(&Seat::ALL).copied().unwrap_or(Seat::First);
        state.start(opener);

        for seat in Seat::ALL {
            for _ in 0..config.starting_hand_size {
                if state.draw(seat).is_none() {
                    break;
                }
            }
        }

        info!(
            seed = rng.seed(),
            id_nonce,
            first = %state.participant(Seat::First),
            second = %state.participant(Seat::Second),
            opener = %state.participant(opener),
            "match started"
        );

        Ok(MatchEngine {
            state,
            config,
            seed: rng.seed(),
            id_nonce,
        })
    }
}

/// Authoritative two-player match.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    state: MatchState,
    config: MatchConfig,
    seed: u64,
    id_nonce: u64,
}

impl MatchEngine {
    /// Start a standard match between two participants.
    pub fn new(
        first: impl Into<ParticipantId>,
        second: impl Into<ParticipantId>,
    ) -> Result<Self, MatchError> {
        MatchBuilder::new().build(first, second)
    }

    #[must_use]
    pub fn builder() -> MatchBuilder {
        MatchBuilder::new()
    }

    /// Read-only access to the full state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed that reproduces this match's decks and opener.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Nonce the instance ids were drawn with.
    #[must_use]
    pub fn id_nonce(&self) -> u64 {
        self.id_nonce
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.state.is_in_progress()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&ParticipantId> {
        self.state.winner()
    }

    // === Queries ===

    /// Snapshot of the match as `viewer` may see it.
    pub fn get_game_state(&self, viewer: &ParticipantId) -> Result<MatchSnapshot, MatchError> {
        let seat = self.seat(viewer)?;
        Ok(MatchSnapshot::project(&self.state, seat))
    }

    /// The other participant.
    pub fn get_opponent_id(&self, player: &ParticipantId) -> Result<&ParticipantId, MatchError> {
        let seat = self.seat(player)?;
        Ok(self.state.participant(seat.other()))
    }

    /// Every action `actor` could take right now that would succeed.
    ///
    /// Empty when it is not `actor`'s turn or the match is over.
    #[must_use]
    pub fn legal_actions(&self, actor: &ParticipantId) -> Vec<Action> {
        let Ok(seat) = self.acting_seat(actor) else {
            return Vec::new();
        };

        let mut actions = vec![Action::EndTurn];

        let mana = self.state.player(seat).current_mana;
        actions.extend(
            self.state
                .cards_in(seat, Zone::Hand)
                .filter(|card| card.cost() <= mana)
                .map(|card| Action::PlayCard { instance: card.instance_id }),
        );

        let targets: Vec<AttackTarget> = std::iter::once(AttackTarget::Leader)
            .chain(
                self.state
                    .cards_in(seat.other(), Zone::Field)
                    .map(|card| AttackTarget::Follower(card.instance_id)),
            )
            .collect();
        for attacker in self.state.cards_in(seat, Zone::Field) {
            if attacker.attack().is_none() || attacker.has_acted() {
                continue;
            }
            actions.extend(targets.iter().map(|&target| Action::Attack {
                attacker: attacker.instance_id,
                target,
            }));
        }

        actions
    }

    // === Actions ===

    /// Dispatch an action to the matching operation.
    pub fn apply(&mut self, actor: &ParticipantId, action: Action) -> Result<(), MatchError> {
        match action {
            Action::EndTurn => self.end_turn(actor),
            Action::PlayCard { instance } => self.play_card(actor, instance).map(|_| ()),
            Action::Attack { attacker, target } => self.attack(actor, attacker, target).map(|_| ()),
        }
    }

    /// Pass the turn to the opponent.
    ///
    /// Readies the actor's followers, then the new active player gains one
    /// mana (capped), refills, and draws one card if their deck has any.
    pub fn end_turn(&mut self, actor: &ParticipantId) -> Result<(), MatchError> {
        let seat = self.acting_seat(actor).inspect_err(|err| reject(actor, "end_turn", err))?;

        let field: Vec<InstanceId> =
            self.state.zones().cards(seat, Zone::Field).iter().copied().collect();
        for id in field {
            if let Some(card) = self.state.card_mut(id) {
                card.set_acted(false);
            }
        }

        let next = seat.other();
        self.state.pass_turn_to(next);

        let cap = self.config.max_mana;
        let player = self.state.player_mut(next);
        player.refresh_mana(cap);
        let (mana, max_mana) = (player.current_mana, player.max_mana);

        let player = self.state.participant(next).clone();
        match self.state.draw(next) {
            Some(drawn) => debug!(%player, instance = %drawn, "drew a card"),
            None => debug!(%player, "deck empty, draw skipped"),
        }

        info!(
            turn = self.state.turn_number(),
            from = %actor,
            to = %player,
            mana,
            max_mana,
            "turn passed"
        );
        Ok(())
    }

    /// Play a card from the actor's hand.
    ///
    /// Followers enter the field summoning sick; spells are discarded.
    pub fn play_card(
        &mut self,
        actor: &ParticipantId,
        instance: InstanceId,
    ) -> Result<Played, MatchError> {
        let seat = self.acting_seat(actor).inspect_err(|err| reject(actor, "play_card", err))?;

        let cost = match self.state.card(instance) {
            Some(card) if self.state.zones().is_in(instance, seat, Zone::Hand) => card.cost(),
            _ => {
                let err = MatchError::CardNotFound;
                reject(actor, "play_card", &err);
                return Err(err);
            }
        };
        let available = self.state.player(seat).current_mana;
        if cost > available {
            let err = MatchError::InsufficientResource { cost, available };
            reject(actor, "play_card", &err);
            return Err(err);
        }

        self.state.player_mut(seat).current_mana -= cost;

        let entered = self.state.card_mut(instance).is_some_and(|card| card.enter_field());
        let played = if entered {
            self.state.move_card(instance, Zone::Field);
            Played::Follower
        } else {
            self.state.destroy(instance);
            Played::Spell
        };

        debug!(
            player = %actor,
            instance = %instance,
            ?played,
            remaining_mana = self.state.player(seat).current_mana,
            "card played"
        );
        Ok(played)
    }

    /// Attack with a follower on the actor's field.
    ///
    /// Ends the match if the opposing leader drops to zero or below.
    pub fn attack(
        &mut self,
        actor: &ParticipantId,
        attacker: InstanceId,
        target: AttackTarget,
    ) -> Result<CombatReport, MatchError> {
        let seat = self.acting_seat(actor).inspect_err(|err| reject(actor, "attack", err))?;

        let report = resolve_attack(&mut self.state, seat, attacker, target)
            .inspect_err(|err| reject(actor, "attack", err))?;

        debug!(
            player = %actor,
            attacker = %attacker,
            target = ?report.target,
            dealt = report.damage_dealt,
            taken = report.damage_taken,
            destroyed = report.destroyed.len(),
            opponent_life = report.opponent_life,
            "attack resolved"
        );

        if report.opponent_life <= 0 {
            self.finish(seat);
        }
        Ok(report)
    }

    /// End the match with `winner` as the victor.
    ///
    /// Terminal: every later action fails with `GameNotActive`.
    pub fn end_match(&mut self, winner: &ParticipantId) -> Result<(), MatchError> {
        let seat = self.seat(winner)?;
        if !self.state.is_in_progress() {
            return Err(MatchError::GameNotActive);
        }
        self.finish(seat);
        Ok(())
    }

    // === Helpers ===

    fn finish(&mut self, winner: Seat) {
        self.state.finish(winner);
        info!(
            winner = %self.state.participant(winner),
            turn = self.state.turn_number(),
            "match ended"
        );
    }

    fn seat(&self, id: &ParticipantId) -> Result<Seat, MatchError> {
        self.state
            .seat_of(id)
            .ok_or_else(|| MatchError::NotFound(id.clone()))
    }

    /// Seat of `actor` if the match is running and it is their turn.
    fn acting_seat(&self, actor: &ParticipantId) -> Result<Seat, MatchError> {
        if !self.state.is_in_progress() {
            return Err(MatchError::GameNotActive);
        }
        match (self.state.seat_of(actor), self.state.active_seat()) {
            (Some(seat), Some(active)) if seat == active => Ok(seat),
            _ => Err(MatchError::NotYourTurn),
        }
    }
}

fn reject(actor: &ParticipantId, action: &'static str, err: &MatchError) {
    debug!(player = %actor, action, kind = err.kind(), "action rejected: {err}");
}
