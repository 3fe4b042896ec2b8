//! Choice logic for branching scenes.
//!
//! Requirements gate which branches a player may take; events change the
//! player when a scene is entered or a branch is taken.

mod event;
mod requirement;

pub use event::Event;
pub use requirement::Requirement;
