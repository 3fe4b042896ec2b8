//! Branches: the edges out of a node scene.

use crate::choice::{Event, Requirement};
use crate::player::Player;

/// A single choice offered by a node scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Scene id this branch leads to. Empty ends the chapter.
    pub target: String,
    /// The text shown to the player.
    pub prompt: String,
    /// Event to apply when this branch is taken.
    pub event: Option<Event>,
    /// Requirement to show and select this branch.
    pub requirement: Option<Requirement>,
}

impl Branch {
    /// Create an ungated branch with no event.
    pub fn new(target: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prompt: prompt.into(),
            event: None,
            requirement: None,
        }
    }

    /// Set the event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Whether the player may currently see and take this branch.
    pub fn is_eligible(&self, player: &Player) -> bool {
        self.requirement
            .as_ref()
            .is_none_or(|requirement| requirement.evaluate(player))
    }

    /// Whether a requirement gates this branch.
    pub fn is_gated(&self) -> bool {
        self.requirement.is_some()
    }
}
