//! Shared helpers for integration tests.

#![allow(dead_code)]

use duel_engine::{CardTemplate, FixedDeck, InstanceId, MatchEngine, ParticipantId, Seat, Zone};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn pid(id: &str) -> ParticipantId {
    ParticipantId::new(id)
}

/// Build a seeded match between `p1` and `p2` with explicit decks, then pass
/// turns until `p1` is the active player.
pub fn fixed_match(
    first: Vec<CardTemplate>,
    second: Vec<CardTemplate>,
    hand: usize,
) -> MatchEngine {
    init_logging();
    let mut engine = MatchEngine::builder()
        .seed(2024)
        .starting_hand_size(hand)
        .deck_source(FixedDeck::new(first, second))
        .build("p1", "p2")
        .expect("valid match");
    if engine.state().active_participant() != Some(&pid("p1")) {
        engine.end_turn(&pid("p2")).expect("opener passes");
    }
    engine
}

/// Pass a full round so `actor` is active again.
pub fn pass_round(engine: &mut MatchEngine, actor: &str) {
    let opponent = engine.get_opponent_id(&pid(actor)).expect("known").clone();
    engine.end_turn(&pid(actor)).expect("actor passes");
    engine.end_turn(&opponent).expect("opponent passes");
}

pub fn seat(engine: &MatchEngine, id: &str) -> Seat {
    engine.state().seat_of(&pid(id)).expect("known participant")
}

pub fn zone_ids(engine: &MatchEngine, id: &str, zone: Zone) -> Vec<InstanceId> {
    engine
        .state()
        .zones()
        .cards(seat(engine, id), zone)
        .iter()
        .copied()
        .collect()
}

pub fn hand(engine: &MatchEngine, id: &str) -> Vec<InstanceId> {
    zone_ids(engine, id, Zone::Hand)
}

pub fn field(engine: &MatchEngine, id: &str) -> Vec<InstanceId> {
    zone_ids(engine, id, Zone::Field)
}

/// Zero-cost follower.
pub fn follower(attack: u32, defense: u32) -> CardTemplate {
    CardTemplate::follower("T-F", "Test Follower", 0, attack, defense)
}
