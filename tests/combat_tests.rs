//! Combat through the public engine API.

mod support;

use duel_engine::{AttackTarget, InstanceId, MatchEngine, MatchError};
use support::{field, fixed_match, follower, hand, pid};

/// p1 has `attacker` ready on the field, p2 has `defender` on the field.
fn duel(attacker: (u32, u32), defender: (u32, u32)) -> (MatchEngine, InstanceId, InstanceId) {
    let mut engine = fixed_match(
        vec![follower(attacker.0, attacker.1); 3],
        vec![follower(defender.0, defender.1); 3],
        1,
    );
    let a = hand(&engine, "p1")[0];
    engine.play_card(&pid("p1"), a).unwrap();
    engine.end_turn(&pid("p1")).unwrap();

    let b = hand(&engine, "p2")[0];
    engine.play_card(&pid("p2"), b).unwrap();
    engine.end_turn(&pid("p2")).unwrap();
    (engine, a, b)
}

#[test]
fn test_trade_reduces_both() {
    let (mut engine, a, b) = duel((2, 6), (3, 5));

    let report = engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();

    assert_eq!(report.damage_dealt, 2);
    assert_eq!(report.damage_taken, 3);
    assert!(report.destroyed.is_empty());
    assert_eq!(engine.state().card(a).unwrap().current_defense(), Some(3));
    assert_eq!(engine.state().card(b).unwrap().current_defense(), Some(3));
    assert!(engine.state().card(a).unwrap().has_acted());
}

#[test]
fn test_mutual_destruction() {
    let (mut engine, a, b) = duel((4, 2), (2, 4));

    let report = engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();

    assert_eq!(report.destroyed.as_slice(), &[a, b]);
    assert!(field(&engine, "p1").is_empty());
    assert!(field(&engine, "p2").is_empty());
    assert!(engine.state().card(a).is_none());
    assert!(engine.state().is_consistent());

    // The dead attacker is gone for good
    assert_eq!(
        engine.attack(&pid("p1"), a, AttackTarget::Leader),
        Err(MatchError::InvalidAttacker)
    );
}

#[test]
fn test_attacker_dies_alone() {
    let (mut engine, a, b) = duel((1, 2), (5, 9));

    let report = engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();

    assert_eq!(report.destroyed.as_slice(), &[a]);
    assert_eq!(engine.state().card(b).unwrap().current_defense(), Some(8));
    assert_eq!(field(&engine, "p2"), vec![b]);
}

#[test]
fn test_damage_persists_across_turns() {
    let (mut engine, a, b) = duel((1, 9), (1, 9));

    engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();
    engine.end_turn(&pid("p1")).unwrap();
    engine.end_turn(&pid("p2")).unwrap();
    engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();

    assert_eq!(engine.state().card(a).unwrap().current_defense(), Some(7));
    assert_eq!(engine.state().card(b).unwrap().current_defense(), Some(7));
}

#[test]
fn test_zero_attack_follower_can_swing() {
    let (mut engine, a, _) = duel((0, 3), (1, 1));

    let report = engine.attack(&pid("p1"), a, AttackTarget::Leader).unwrap();

    assert_eq!(report.opponent_life, 20);
    assert!(engine.state().card(a).unwrap().has_acted());
}

#[test]
fn test_summoning_sick_target_is_valid() {
    let (mut engine, a, b) = duel((3, 3), (1, 3));
    assert!(engine.state().card(b).unwrap().has_acted());

    let report = engine.attack(&pid("p1"), a, AttackTarget::Follower(b)).unwrap();
    assert_eq!(report.destroyed.as_slice(), &[b]);
}

#[test]
fn test_overkill_ends_match_below_zero() {
    let (mut engine, a, _) = duel((30, 1), (1, 1));

    let report = engine.attack(&pid("p1"), a, AttackTarget::Leader).unwrap();

    assert_eq!(report.opponent_life, -10);
    assert_eq!(engine.state().player_by_id(&pid("p2")).unwrap().life, -10);
    assert!(!engine.is_in_progress());
    assert_eq!(engine.winner(), Some(&pid("p1")));
    assert_eq!(engine.end_turn(&pid("p1")), Err(MatchError::GameNotActive));
}
