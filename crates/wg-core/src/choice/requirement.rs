//! Requirement evaluation for branches.

use crate::player::Player;

/// A boolean condition over the player's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The player holds this perk.
    HasPerk(String),
    /// The player carries this item.
    HasItem(String),
    /// The player has this status.
    HasStatus(String),
    /// Every inner requirement holds. True when empty.
    And(Vec<Requirement>),
    /// At least one inner requirement holds. False when empty.
    Or(Vec<Requirement>),
    /// The inner requirement does not hold.
    Not(Box<Requirement>),
}

impl Requirement {
    /// Requirement that a perk is held.
    pub fn perk(tag: impl Into<String>) -> Self {
        Self::HasPerk(tag.into())
    }

    /// Requirement that an item is carried.
    pub fn item(tag: impl Into<String>) -> Self {
        Self::HasItem(tag.into())
    }

    /// Requirement that a status is in effect.
    pub fn status(tag: impl Into<String>) -> Self {
        Self::HasStatus(tag.into())
    }

    /// Negate a requirement.
    pub fn negate(inner: Requirement) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Evaluate the requirement against the player's current tags.
    pub fn evaluate(&self, player: &Player) -> bool {
        match self {
            Self::HasPerk(tag) => player.has_perk(tag),
            Self::HasItem(tag) => player.has_item(tag),
            Self::HasStatus(tag) => player.has_status(tag),
            Self::And(requirements) => requirements.iter().all(|r| r.evaluate(player)),
            Self::Or(requirements) => requirements.iter().any(|r| r.evaluate(player)),
            Self::Not(inner) => !inner.evaluate(player),
        }
    }
}
