//! Choice-driven narrative engine for Wordgame.
//!
//! A chapter is a directed graph of scenes. Node scenes branch on player
//! choice, with each branch optionally gated by a requirement over the
//! player's perks, items and statuses. Leaf scenes lead to a single fixed
//! successor, and terminus scenes end the chapter. Scenes and branches may
//! carry events that grant tags to the player.
//!
//! A branch that has been taken is pruned from its node for the rest of the
//! session. The pruned graph is what gets saved, so a reloaded session only
//! offers the branches that are left.

/// Requirements and events: the closed vocabulary of choice logic.
pub mod choice;
/// Engine configuration.
pub mod config;
/// The input/output seam between the engine and a front end.
pub mod console;
/// JSON document model for chapters and saves.
pub mod document;
/// Error types for the engine.
pub mod error;
/// Player state management.
pub mod player;
/// Fuzzy suggestions for unknown names.
pub mod resolve;
/// Scenes, branches and the scene graph.
pub mod scene;
/// Live sessions and the traversal driver.
pub mod session;
/// Reading and writing documents on disk.
pub mod store;

pub use choice::{Event, Requirement};
pub use config::EngineConfig;
pub use console::{BranchPrompt, Command, Console, InvalidInput, ScriptedConsole, View, parse_command};
pub use document::{Document, parse_chapter, parse_session, serialize_session};
pub use error::{ParseError, StoryError, StoryResult};
pub use player::{Player, TagKind};
pub use scene::{Branch, LeafScene, NodeScene, Scene, SceneGraph, TerminusScene, Transition};
pub use session::{Chapter, ChapterOutcome, Session, drive_session};
pub use store::{chapter_file_name, load_chapter, load_player, load_save, read_chapter, save_session};
