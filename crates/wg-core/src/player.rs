//! Player state management.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of tag a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Abilities and traits.
    Perk,
    /// Inventory.
    Item,
    /// Conditions such as "blessed" or "wounded".
    Status,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perk => write!(f, "perk"),
            Self::Item => write!(f, "item"),
            Self::Status => write!(f, "status"),
        }
    }
}

/// The player's name and held tags.
///
/// Each tag set is a set: gaining a tag twice holds it once, and losing an
/// absent tag changes nothing. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, substituted into scene text.
    pub name: String,
    /// Perks held.
    #[serde(default)]
    pub perks: BTreeSet<String>,
    /// Items carried.
    #[serde(default)]
    pub items: BTreeSet<String>,
    /// Statuses in effect.
    #[serde(default)]
    pub statuses: BTreeSet<String>,
}

impl Player {
    /// Create a player with no tags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Start with a perk already held.
    pub fn with_perk(mut self, perk: impl Into<String>) -> Self {
        self.gain(TagKind::Perk, perk);
        self
    }

    /// Start with an item already carried.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.gain(TagKind::Item, item);
        self
    }

    /// Start with a status already in effect.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.gain(TagKind::Status, status);
        self
    }

    /// The tag set of the given kind.
    pub fn tags(&self, kind: TagKind) -> &BTreeSet<String> {
        match kind {
            TagKind::Perk => &self.perks,
            TagKind::Item => &self.items,
            TagKind::Status => &self.statuses,
        }
    }

    fn tags_mut(&mut self, kind: TagKind) -> &mut BTreeSet<String> {
        match kind {
            TagKind::Perk => &mut self.perks,
            TagKind::Item => &mut self.items,
            TagKind::Status => &mut self.statuses,
        }
    }

    /// Check whether a tag of the given kind is held.
    pub fn has(&self, kind: TagKind, tag: &str) -> bool {
        self.tags(kind).contains(tag)
    }

    /// Gain a tag. Returns `false` if it was already held.
    pub fn gain(&mut self, kind: TagKind, tag: impl Into<String>) -> bool {
        self.tags_mut(kind).insert(tag.into())
    }

    /// Lose a tag. Returns `false` if it was not held.
    pub fn lose(&mut self, kind: TagKind, tag: &str) -> bool {
        self.tags_mut(kind).remove(tag)
    }

    /// Check if the player has a perk.
    pub fn has_perk(&self, perk: &str) -> bool {
        self.has(TagKind::Perk, perk)
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.has(TagKind::Item, item)
    }

    /// Check if a status is in effect.
    pub fn has_status(&self, status: &str) -> bool {
        self.has(TagKind::Status, status)
    }

    /// Gain a perk.
    pub fn gain_perk(&mut self, perk: impl Into<String>) -> bool {
        self.gain(TagKind::Perk, perk)
    }

    /// Add an item to the inventory.
    pub fn gain_item(&mut self, item: impl Into<String>) -> bool {
        self.gain(TagKind::Item, item)
    }

    /// Gain a status.
    pub fn gain_status(&mut self, status: impl Into<String>) -> bool {
        self.gain(TagKind::Status, status)
    }

    /// Lose a perk.
    pub fn lose_perk(&mut self, perk: &str) -> bool {
        self.lose(TagKind::Perk, perk)
    }

    /// Remove an item from the inventory.
    pub fn lose_item(&mut self, item: &str) -> bool {
        self.lose(TagKind::Item, item)
    }

    /// Lose a status.
    pub fn lose_status(&mut self, status: &str) -> bool {
        self.lose(TagKind::Status, status)
    }
}
