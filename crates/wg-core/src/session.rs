//! Live sessions and the traversal driver.

use crate::console::Console;
use crate::error::{StoryError, StoryResult};
use crate::player::Player;
use crate::scene::{SceneGraph, Transition};

/// The player-independent part of a chapter document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// The chapter's scenes.
    pub graph: SceneGraph,
    /// Scene id to start from.
    pub start: String,
    /// Chapter to load when this one ends, if any.
    pub next_chapter: Option<String>,
    /// Name of the game this chapter belongs to. May be empty.
    pub game_name: String,
}

/// How a chapter's traversal ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterOutcome {
    /// A terminus was reached. Carries the next chapter id, if any.
    Finished(Option<String>),
    /// The player quit. The session still holds the scene they were on.
    Quit,
}

/// A player travelling through a chapter's scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    player: Player,
    graph: SceneGraph,
    current: String,
    next_chapter: Option<String>,
    game_name: String,
}

impl Session {
    /// Start `player` at the beginning of `chapter`.
    pub fn new(player: Player, chapter: Chapter) -> Self {
        Self {
            player,
            graph: chapter.graph,
            current: chapter.start,
            next_chapter: chapter.next_chapter,
            game_name: chapter.game_name,
        }
    }

    /// Get the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get a mutable reference to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Get the scene graph, including any pruning so far.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Id of the scene the player is on.
    pub fn current_scene(&self) -> &str {
        &self.current
    }

    /// Chapter to load after this one.
    pub fn next_chapter(&self) -> Option<&str> {
        self.next_chapter.as_deref()
    }

    /// Name of the game being played.
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Set the name of the game being played.
    pub fn set_game_name(&mut self, name: impl Into<String>) {
        self.game_name = name.into();
    }

    /// Move the same player on to a new chapter. The graph, current scene
    /// and next chapter are replaced; the game name is kept unless unset.
    pub fn enter_chapter(&mut self, chapter: Chapter) {
        tracing::info!(start = %chapter.start, scenes = chapter.graph.len(), "entering chapter");
        self.graph = chapter.graph;
        self.current = chapter.start;
        self.next_chapter = chapter.next_chapter;
        if self.game_name.is_empty() {
            self.game_name = chapter.game_name;
        }
    }

    /// Resolve the current scene once.
    ///
    /// Events are applied to a copy of the player. The copy, the pruning
    /// of a taken branch and the move to the next scene are committed only
    /// if the target exists, so a failed step leaves the session unchanged.
    /// Quitting commits nothing.
    pub fn step(&mut self, console: &mut dyn Console) -> StoryResult<Transition> {
        let scene = self
            .graph
            .get(&self.current)
            .ok_or_else(|| StoryError::SceneNotFound(self.current.clone()))?;

        let mut staged = self.player.clone();
        let resolution = scene.resolve(&mut staged, console)?;

        match &resolution.transition {
            Transition::Quit => {
                tracing::debug!(scene = %self.current, "quit");
                return Ok(Transition::Quit);
            }
            Transition::Goto(target) if !self.graph.contains(target) => {
                return Err(StoryError::DanglingScene {
                    from: self.current.clone(),
                    target: target.clone(),
                    suggestion: self.graph.suggest(target),
                });
            }
            Transition::Goto(_) | Transition::End => {}
        }

        self.player = staged;
        if let Some(index) = resolution.taken {
            self.graph.prune(&self.current, index);
        }
        if let Transition::Goto(target) = &resolution.transition {
            tracing::debug!(from = %self.current, to = %target, "scene transition");
            self.current.clone_from(target);
        }
        Ok(resolution.transition)
    }

    /// Play until the chapter ends or the player quits.
    pub fn drive(&mut self, console: &mut dyn Console) -> StoryResult<ChapterOutcome> {
        loop {
            match self.step(console)? {
                Transition::Goto(_) => {}
                Transition::End => {
                    tracing::info!(next = ?self.next_chapter, "chapter finished");
                    return Ok(ChapterOutcome::Finished(self.next_chapter.clone()));
                }
                Transition::Quit => return Ok(ChapterOutcome::Quit),
            }
        }
    }
}

/// Play `session` through `console` until the chapter ends or the player
/// quits.
pub fn drive_session(session: &mut Session, console: &mut dyn Console) -> StoryResult<ChapterOutcome> {
    session.drive(console)
}
