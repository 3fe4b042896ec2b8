//! Scenes and the graph that connects them.
//!
//! A scene is resolved against a player and a console: it shows its text,
//! applies its event, reads input and reports where play goes next. Scenes
//! never change the graph themselves; the session prunes a taken branch once
//! the whole step has succeeded.

mod branch;
mod graph;
mod leaf;
mod node;

pub use branch::Branch;
pub use graph::SceneGraph;
pub use leaf::{LeafScene, TerminusScene};
pub use node::NodeScene;

use crate::choice::Event;
use crate::console::Console;
use crate::error::StoryResult;
use crate::player::Player;

/// Placeholder in scene and prompt text replaced by the player's name.
pub const NAME_PLACEHOLDER: &str = "%s";

/// Substitute the player's name for the first placeholder in `template`.
pub fn render_text(template: &str, name: &str) -> String {
    template.replacen(NAME_PLACEHOLDER, name, 1)
}

/// Whether `target` is the end-of-chapter sentinel: empty or whitespace only.
pub fn is_chapter_end(target: &str) -> bool {
    target.trim().is_empty()
}

/// Where play goes after a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Continue to the scene with this id.
    Goto(String),
    /// The chapter is over.
    End,
    /// The player asked to stop.
    Quit,
}

impl Transition {
    /// Transition to a target id, where a blank id ends the chapter.
    pub fn to(target: &str) -> Self {
        if is_chapter_end(target) {
            Self::End
        } else {
            Self::Goto(target.to_string())
        }
    }
}

/// The result of resolving a scene once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Where play goes next.
    pub transition: Transition,
    /// Index into the node's branch list of the branch taken, if any.
    pub taken: Option<usize>,
}

impl Resolution {
    pub(crate) fn quit() -> Self {
        Self {
            transition: Transition::Quit,
            taken: None,
        }
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    /// Player chooses among branches.
    Node(NodeScene),
    /// Fixed successor after an acknowledgement.
    Leaf(LeafScene),
    /// Ends the chapter.
    Terminus(TerminusScene),
}

impl Scene {
    /// The scene's id.
    pub fn id(&self) -> &str {
        match self {
            Self::Node(node) => &node.id,
            Self::Leaf(leaf) => &leaf.id,
            Self::Terminus(terminus) => &terminus.id,
        }
    }

    /// The scene's text template.
    pub fn text(&self) -> &str {
        match self {
            Self::Node(node) => &node.text,
            Self::Leaf(leaf) => &leaf.text,
            Self::Terminus(terminus) => &terminus.text,
        }
    }

    /// The event applied on every visit, if any.
    pub fn event(&self) -> Option<&Event> {
        match self {
            Self::Node(node) => node.event.as_ref(),
            Self::Leaf(leaf) => leaf.event.as_ref(),
            Self::Terminus(_) => None,
        }
    }

    /// Scene ids this scene can lead to, excluding the end-of-chapter target.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Self::Node(node) => node
                .branches
                .iter()
                .map(|b| b.target.as_str())
                .filter(|t| !is_chapter_end(t))
                .collect(),
            Self::Leaf(leaf) if !is_chapter_end(&leaf.next) => vec![leaf.next.as_str()],
            Self::Leaf(_) | Self::Terminus(_) => Vec::new(),
        }
    }

    /// Show the scene, apply its events to `player` and read input until
    /// the player has chosen where to go.
    pub fn resolve(&self, player: &mut Player, console: &mut dyn Console) -> StoryResult<Resolution> {
        match self {
            Self::Node(node) => node.resolve(player, console),
            Self::Leaf(leaf) => leaf.resolve(player, console),
            Self::Terminus(terminus) => terminus.resolve(player, console),
        }
    }
}

impl From<NodeScene> for Scene {
    fn from(node: NodeScene) -> Self {
        Self::Node(node)
    }
}

impl From<LeafScene> for Scene {
    fn from(leaf: LeafScene) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<TerminusScene> for Scene {
    fn from(terminus: TerminusScene) -> Self {
        Self::Terminus(terminus)
    }
}
