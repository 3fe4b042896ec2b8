//! Events that grant tags to the player.

use std::fmt;

use crate::player::{Player, TagKind};

/// An event applied when a scene is entered or a branch is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Grant a perk.
    GrantPerk(String),
    /// Grant a status.
    GrantStatus(String),
    /// Put an item in the inventory.
    GrantItem(String),
}

impl Event {
    /// The tag kind and tag this event grants.
    pub fn grant(&self) -> (TagKind, &str) {
        match self {
            Self::GrantPerk(tag) => (TagKind::Perk, tag),
            Self::GrantStatus(tag) => (TagKind::Status, tag),
            Self::GrantItem(tag) => (TagKind::Item, tag),
        }
    }

    /// Apply the event. Re-applying a grant that is already held changes
    /// nothing.
    pub fn apply(&self, player: &mut Player) {
        let (kind, tag) = self.grant();
        if player.gain(kind, tag) {
            tracing::debug!(%kind, tag, "granted");
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrantPerk(perk) => write!(f, "Gained perk: {perk}"),
            Self::GrantStatus(status) => write!(f, "Status: {status}"),
            Self::GrantItem(item) => write!(f, "Received: {item}"),
        }
    }
}
