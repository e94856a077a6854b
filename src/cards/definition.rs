//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties shared by every copy of a
//! card: identity, display data, cost, and whether it is a follower (with
//! attack and defense) or a spell.
//!
//! Battle state (current defense, acted flag) lives on `CardInstance`.

use serde::{Deserialize, Serialize};

/// Card kind. Followers carry their printed stats; spells carry nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    Follower { attack: u32, defense: u32 },
    Spell,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{CardKind, CardTemplate};
///
/// let knight = CardTemplate::follower("SD01-001", "Knight", 2, 2, 3);
/// assert_eq!(knight.kind, CardKind::Follower { attack: 2, defense: 3 });
/// assert_eq!(knight.attack(), Some(2));
///
/// let bolt = CardTemplate::spell("SD01-002", "Bolt", 1);
/// assert!(bolt.attack().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Card definition identity.
    pub template_id: String,

    /// Display name.
    pub name: String,

    /// Image reference for clients.
    pub image_ref: String,

    /// Mana cost to play.
    pub cost: u32,

    /// Follower stats or spell marker.
    #[serde(flatten)]
    pub kind: CardKind,
}

impl CardTemplate {
    /// Create a follower template. The image ref is derived from the id.
    #[must_use]
    pub fn follower(
        template_id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self::with_kind(template_id, name, cost, CardKind::Follower { attack, defense })
    }

    /// Create a spell template. The image ref is derived from the id.
    #[must_use]
    pub fn spell(template_id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self::with_kind(template_id, name, cost, CardKind::Spell)
    }

    fn with_kind(
        template_id: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        kind: CardKind,
    ) -> Self {
        let template_id = template_id.into();
        Self {
            image_ref: format!("/cards/{template_id}.png"),
            template_id,
            name: name.into(),
            cost,
            kind,
        }
    }

    /// Override the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Printed attack, for followers.
    #[must_use]
    pub fn attack(&self) -> Option<u32> {
        match self.kind {
            CardKind::Follower { attack, .. } => Some(attack),
            CardKind::Spell => None,
        }
    }

    /// Printed defense, for followers.
    #[must_use]
    pub fn base_defense(&self) -> Option<u32> {
        match self.kind {
            CardKind::Follower { defense, .. } => Some(defense),
            CardKind::Spell => None,
        }
    }

    #[must_use]
    pub fn is_follower(&self) -> bool {
        matches!(self.kind, CardKind::Follower { .. })
    }
}
