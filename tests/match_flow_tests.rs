//! Match lifecycle tests: construction, turn handoff, card play and the
//! full path to a decided match.

mod support;

use duel_engine::{
    Action, AttackTarget, CardTemplate, FixedDeck, MatchConfig, MatchEngine, MatchError, Played,
    Seat, StatRange, Zone,
};
use support::{field, fixed_match, follower, hand, init_logging, pass_round, pid};

#[test]
fn test_end_to_end_scenario() {
    init_logging();
    let scout = CardTemplate::follower("E2E-001", "Scout", 2, 5, 3);
    let mut engine = MatchEngine::builder()
        .seed(11)
        .deck_source(FixedDeck::mirrored(vec![scout; 20]))
        .build("p1", "p2")
        .unwrap();

    for id in ["p1", "p2"] {
        let view = engine.get_game_state(&pid(id)).unwrap();
        assert_eq!(view.me.hand_count, 4);
        assert_eq!(view.me.life, 20);
        assert_eq!(view.me.max_mana, 0);
    }

    let a = engine.state().active_participant().cloned().unwrap();
    let b = engine.get_opponent_id(&a).unwrap().clone();

    // First handoff: the other player gains a mana and draws
    engine.end_turn(&a).unwrap();
    let view = engine.get_game_state(&b).unwrap();
    assert!(view.is_my_turn);
    assert_eq!(view.me.max_mana, 1);
    assert_eq!(view.me.current_mana, 1);
    assert_eq!(view.me.hand_count, 5);

    // Bring `a` to three mana
    engine.end_turn(&b).unwrap();
    pass_round(&mut engine, a.as_str());
    pass_round(&mut engine, a.as_str());
    assert_eq!(engine.get_game_state(&a).unwrap().me.current_mana, 3);

    let card = hand(&engine, a.as_str())[0];
    assert_eq!(engine.play_card(&a, card), Ok(Played::Follower));
    let view = engine.get_game_state(&a).unwrap();
    assert_eq!(view.me.current_mana, 1);
    assert_eq!(view.me.field.len(), 1);
    assert!(view.me.field[0].has_acted());

    pass_round(&mut engine, a.as_str());
    let report = engine.attack(&a, card, AttackTarget::Leader).unwrap();
    assert_eq!(report.opponent_life, 15);
    assert_eq!(engine.get_game_state(&b).unwrap().me.life, 15);

    for expected in [10, 5, 0] {
        pass_round(&mut engine, a.as_str());
        let report = engine.attack(&a, card, AttackTarget::Leader).unwrap();
        assert_eq!(report.opponent_life, expected);
    }

    assert!(!engine.is_in_progress());
    assert_eq!(engine.winner(), Some(&a));

    assert_eq!(engine.end_turn(&a), Err(MatchError::GameNotActive));
    assert_eq!(engine.end_turn(&b), Err(MatchError::GameNotActive));
    assert_eq!(engine.play_card(&a, card), Err(MatchError::GameNotActive));
    assert_eq!(
        engine.attack(&a, card, AttackTarget::Leader),
        Err(MatchError::GameNotActive)
    );
    assert_eq!(engine.end_match(&b), Err(MatchError::GameNotActive));

    // Snapshots stay readable after the end
    let view = engine.get_game_state(&b).unwrap();
    assert_eq!(view.winner, Some(a.clone()));
    assert!(!view.started);
    assert!(!view.is_my_turn);
}

#[test]
fn test_default_match() {
    init_logging();
    let engine = MatchEngine::new("alice", "bob").unwrap();
    let state = engine.state();

    assert!(engine.is_in_progress());
    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.total_cards(), 40);
    for seat in Seat::ALL {
        assert_eq!(state.zones().zone_size(seat, Zone::Hand), 4);
        assert_eq!(state.zones().zone_size(seat, Zone::Deck), 16);
        assert_eq!(state.zones().zone_size(seat, Zone::Field), 0);
    }

    // Starter content alternates follower/spell with stats in 1..=5
    for seat in Seat::ALL {
        let mut followers = 0;
        for zone in [Zone::Deck, Zone::Hand] {
            for card in state.cards_in(seat, zone) {
                assert!((1..=5).contains(&card.cost()));
                assert!(card.template.template_id.starts_with("SD01-"));
                if let Some(attack) = card.attack() {
                    followers += 1;
                    assert!((1..=5).contains(&attack));
                    assert!((1..=5).contains(&card.base_defense().unwrap()));
                }
            }
        }
        assert_eq!(followers, 10);
    }
}

#[test]
fn test_opener_is_either_seat() {
    init_logging();
    let openers: Vec<Seat> = (0..32)
        .map(|seed| {
            let engine = MatchEngine::builder().seed(seed).build("p1", "p2").unwrap();
            engine.state().active_seat().unwrap()
        })
        .collect();

    assert!(openers.contains(&Seat::First));
    assert!(openers.contains(&Seat::Second));
}

#[test]
fn test_builder_overrides() {
    init_logging();
    let engine = MatchEngine::builder()
        .seed(5)
        .starting_life(30)
        .starting_hand_size(3)
        .deck_size(10)
        .names("Ada", "Brook")
        .build("p1", "p2")
        .unwrap();

    let view = engine.get_game_state(&pid("p1")).unwrap();
    assert_eq!(view.me.name, "Ada");
    assert_eq!(view.opponent.name, "Brook");
    assert_eq!(view.me.life, 30);
    assert_eq!(view.me.hand_count, 3);
    assert_eq!(view.me.deck.len(), 7);
    assert_eq!(engine.config().deck_size, 10);
    assert_eq!(engine.seed(), 5);
}

#[test]
fn test_config_from_json() {
    let config: MatchConfig =
        serde_json::from_str(r#"{ "max_mana": 3, "stat_range": { "min": 2, "max": 2 } }"#).unwrap();
    assert_eq!(config.deck_size, 20);
    assert_eq!(config.stat_range, StatRange { min: 2, max: 2 });

    let engine = MatchEngine::builder().seed(1).config(config).build("p1", "p2").unwrap();
    for card in engine.state().cards_in(Seat::First, Zone::Deck) {
        assert_eq!(card.cost(), 2);
    }
}

#[test]
fn test_mana_stops_at_cap() {
    let config = MatchConfig {
        max_mana: 3,
        ..MatchConfig::default()
    };
    let mut engine = MatchEngine::builder().seed(3).config(config).build("p1", "p2").unwrap();
    let opener = engine.state().active_participant().cloned().unwrap();
    for _ in 0..6 {
        pass_round(&mut engine, opener.as_str());
    }

    for seat in Seat::ALL {
        let player = engine.state().player(seat);
        assert_eq!(player.max_mana, 3);
        assert!(player.current_mana <= 3);
    }
}

#[test]
fn test_empty_deck_draw_is_skipped() {
    let mut engine = fixed_match(vec![follower(1, 1); 2], vec![follower(1, 1); 2], 2);

    pass_round(&mut engine, "p1");
    pass_round(&mut engine, "p1");

    let view = engine.get_game_state(&pid("p1")).unwrap();
    assert_eq!(view.me.hand_count, 2);
    assert!(view.me.deck.is_empty());
    assert!(engine.is_in_progress());
}

#[test]
fn test_end_turn_readies_followers() {
    let mut engine = fixed_match(vec![follower(1, 5); 6], vec![follower(1, 5); 6], 2);
    let card = hand(&engine, "p1")[0];

    engine.play_card(&pid("p1"), card).unwrap();
    assert_eq!(
        engine.attack(&pid("p1"), card, AttackTarget::Leader),
        Err(MatchError::AlreadyActed)
    );

    pass_round(&mut engine, "p1");
    engine.attack(&pid("p1"), card, AttackTarget::Leader).unwrap();
    assert_eq!(
        engine.attack(&pid("p1"), card, AttackTarget::Leader),
        Err(MatchError::AlreadyActed)
    );

    pass_round(&mut engine, "p1");
    assert!(!engine.state().card(card).unwrap().has_acted());
    assert_eq!(field(&engine, "p1"), vec![card]);
}

#[test]
fn test_spell_is_discarded() {
    let spell = CardTemplate::spell("T-S", "Test Spell", 0);
    let mut engine = fixed_match(vec![spell.clone(); 4], vec![spell; 4], 4);
    let card = hand(&engine, "p1")[0];
    let before = engine.state().total_cards();

    assert_eq!(engine.play_card(&pid("p1"), card), Ok(Played::Spell));

    assert!(engine.state().card(card).is_none());
    assert_eq!(engine.state().zone_of(card), None);
    assert_eq!(engine.state().total_cards(), before - 1);
    assert!(field(&engine, "p1").is_empty());
    assert!(engine.state().is_consistent());
}

#[test]
fn test_apply_dispatches() {
    let mut engine = fixed_match(vec![follower(2, 2); 6], vec![follower(2, 2); 6], 2);
    let card = hand(&engine, "p1")[0];

    engine.apply(&pid("p1"), Action::PlayCard { instance: card }).unwrap();
    assert_eq!(field(&engine, "p1"), vec![card]);

    engine.apply(&pid("p1"), Action::EndTurn).unwrap();
    assert_eq!(engine.state().active_participant(), Some(&pid("p2")));

    engine.apply(&pid("p2"), Action::EndTurn).unwrap();
    engine
        .apply(&pid("p1"), Action::Attack { attacker: card, target: AttackTarget::Leader })
        .unwrap();
    assert_eq!(engine.state().player_by_id(&pid("p2")).unwrap().life, 18);
}

#[test]
fn test_legal_actions_all_succeed() {
    let mut engine = fixed_match(
        vec![
            follower(1, 3),
            CardTemplate::spell("T-S", "Spell", 9),
            follower(2, 2),
            follower(1, 1),
        ],
        vec![follower(1, 3), follower(1, 3), follower(1, 3), follower(1, 3)],
        4,
    );
    for card in hand(&engine, "p1") {
        let _ = engine.play_card(&pid("p1"), card);
    }
    engine.end_turn(&pid("p1")).unwrap();
    for card in hand(&engine, "p2") {
        let _ = engine.play_card(&pid("p2"), card);
    }
    engine.end_turn(&pid("p2")).unwrap();

    let actions = engine.legal_actions(&pid("p1"));
    // 3 ready attackers x (leader + 4 opposing followers) + end turn
    assert_eq!(actions.len(), 16);
    assert!(!actions
        .iter()
        .any(|action| matches!(action, Action::PlayCard { .. })));

    for action in actions {
        let mut probe = engine.clone();
        assert!(probe.apply(&pid("p1"), action).is_ok(), "{action:?} rejected");
        assert!(probe.state().is_consistent());
    }
}
