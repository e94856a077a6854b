//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical copy of a template. It carries its own
//! `InstanceId` for its whole life and picks up `FieldState` when it enters a
//! field.

use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::core::entity::InstanceId;

/// Battle attributes of a follower on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldState {
    /// Remaining defense. May go to zero or below before cleanup.
    pub current_defense: i64,

    /// Cannot attack again until its owner's next turn begins.
    pub has_acted: bool,
}

/// A card copy in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id of this copy.
    pub instance_id: InstanceId,

    /// Static card data.
    #[serde(flatten)]
    pub template: CardTemplate,

    /// Present only while the card is on a field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldState>,
}

impl CardInstance {
    /// Create a fresh instance (not yet on a field).
    #[must_use]
    pub fn new(instance_id: InstanceId, template: CardTemplate) -> Self {
        Self {
            instance_id,
            template,
            field: None,
        }
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.template.cost
    }

    #[must_use]
    pub fn attack(&self) -> Option<u32> {
        self.template.attack()
    }

    #[must_use]
    pub fn base_defense(&self) -> Option<u32> {
        self.template.base_defense()
    }

    #[must_use]
    pub fn is_follower(&self) -> bool {
        self.template.is_follower()
    }

    #[must_use]
    pub fn current_defense(&self) -> Option<i64> {
        self.field.map(|f| f.current_defense)
    }

    /// Whether the card has acted. Cards off the field never have.
    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.field.is_some_and(|f| f.has_acted)
    }

    /// Put a follower into battle: full defense, summoning sick.
    ///
    /// Returns false (and does nothing) for spells.
    pub fn enter_field(&mut self) -> bool {
        match self.base_defense() {
            Some(defense) => {
                self.field = Some(FieldState {
                    current_defense: i64::from(defense),
                    has_acted: true,
                });
                true
            }
            None => false,
        }
    }

    /// Set the acted flag. No-op off the field.
    pub fn set_acted(&mut self, acted: bool) {
        if let Some(field) = self.field.as_mut() {
            field.has_acted = acted;
        }
    }

    /// Subtract damage from current defense. No-op off the field.
    pub fn take_damage(&mut self, amount: u32) {
        if let Some(field) = self.field.as_mut() {
            field.current_defense -= i64::from(amount);
        }
    }

    /// On a field with defense at or below zero.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.field.is_some_and(|f| f.current_defense <= 0)
    }
}
