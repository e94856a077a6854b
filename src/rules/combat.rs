//! Combat resolution.
//!
//! Follower-vs-follower combat is a simultaneous trade: each side takes the
//! other's attack as damage, then every field is swept for cards at or below
//! zero defense. Leader attacks subtract the attacker's attack from the
//! opposing life total.
//!
//! `resolve_attack` validates everything before it writes anything, so a
//! rejected attack leaves the state untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::action::AttackTarget;
use crate::core::entity::InstanceId;
use crate::core::error::MatchError;
use crate::core::player::Seat;
use crate::core::state::MatchState;
use crate::zones::Zone;

/// Outcome of a resolved attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub attacker: InstanceId,
    pub target: AttackTarget,

    /// Damage the attacker dealt to the target (follower or leader).
    pub damage_dealt: u32,

    /// Damage the attacker took back. Zero for leader attacks.
    pub damage_taken: u32,

    /// Cards removed by the post-combat sweep, attacker's side first.
    pub destroyed: SmallVec<[InstanceId; 2]>,

    /// Opposing leader life after resolution.
    pub opponent_life: i64,
}

/// Validate and apply an attack by the follower `attacker` of `seat`.
///
/// Checks, first failure wins: the attacker is a follower on `seat`'s field
/// (`InvalidAttacker`), it has not acted (`AlreadyActed`), and a follower
/// target is on the opposing field (`TargetNotFound`).
pub(crate) fn resolve_attack(
    state: &mut MatchState,
    seat: Seat,
    attacker: InstanceId,
    target: AttackTarget,
) -> Result<CombatReport, MatchError> {
    let defender = seat.other();

    let attack = state
        .card(attacker)
        .filter(|_| state.zones().is_in(attacker, seat, Zone::Field))
        .and_then(|card| card.attack())
        .ok_or(MatchError::InvalidAttacker)?;
    if state.card(attacker).is_some_and(|card| card.has_acted()) {
        return Err(MatchError::AlreadyActed);
    }

    let report = match target {
        AttackTarget::Follower(target_id) => {
            let retaliation = state
                .card(target_id)
                .filter(|card| card.current_defense().is_some())
                .filter(|_| state.zones().is_in(target_id, defender, Zone::Field))
                .and_then(|card| card.attack())
                .ok_or(MatchError::TargetNotFound)?;

            if let Some(card) = state.card_mut(target_id) {
                card.take_damage(attack);
            }
            if let Some(card) = state.card_mut(attacker) {
                card.take_damage(retaliation);
                // Flag before the sweep; a destroyed attacker is unreachable afterwards.
                card.set_acted(true);
            }

            let mut destroyed = sweep_field(state, seat);
            destroyed.extend(sweep_field(state, defender));

            CombatReport {
                attacker,
                target,
                damage_dealt: attack,
                damage_taken: retaliation,
                destroyed,
                opponent_life: state.player(defender).life,
            }
        }
        AttackTarget::Leader => {
            state.player_mut(defender).life -= i64::from(attack);
            if let Some(card) = state.card_mut(attacker) {
                card.set_acted(true);
            }

            CombatReport {
                attacker,
                target,
                damage_dealt: attack,
                damage_taken: 0,
                destroyed: SmallVec::new(),
                opponent_life: state.player(defender).life,
            }
        }
    };

    Ok(report)
}

/// Remove every card on `seat`'s field whose defense is at or below zero.
fn sweep_field(state: &mut MatchState, seat: Seat) -> SmallVec<[InstanceId; 2]> {
    let doomed: SmallVec<[InstanceId; 2]> = state
        .cards_in(seat, Zone::Field)
        .filter(|card| card.is_destroyed())
        .map(|card| card.instance_id)
        .collect();

    for &id in &doomed {
        if let Some(card) = state.destroy(id) {
            debug!(seat = %seat, card = %card.template.name, instance = %id, "follower destroyed");
        }
    }

    doomed
}
