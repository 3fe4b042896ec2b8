//! Scenes without a choice: leaves and the terminus.

use super::{Resolution, Transition, render_text};
use crate::choice::Event;
use crate::console::{Command, Console, View, parse_command};
use crate::error::StoryResult;
use crate::player::Player;

/// A scene with a single fixed successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafScene {
    /// Scene id, unique within the chapter.
    pub id: String,
    /// Text template.
    pub text: String,
    /// Event applied on every visit.
    pub event: Option<Event>,
    /// The scene that always follows. Empty ends the chapter.
    pub next: String,
}

impl LeafScene {
    /// Create a leaf leading to `next`.
    pub fn new(id: impl Into<String>, text: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            event: None,
            next: next.into(),
        }
    }

    /// Set the event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    pub(super) fn resolve(&self, player: &mut Player, console: &mut dyn Console) -> StoryResult<Resolution> {
        if let Some(event) = &self.event {
            event.apply(player);
        }

        let text = render_text(&self.text, &player.name);
        console.show(View::Scene(&text));
        if let Some(event) = &self.event {
            console.show(View::Event(event));
        }

        if !acknowledged(console)? {
            return Ok(Resolution::quit());
        }
        Ok(Resolution {
            transition: Transition::to(&self.next),
            taken: None,
        })
    }
}

/// The scene that closes a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminusScene {
    /// Scene id, unique within the chapter.
    pub id: String,
    /// Closing text template.
    pub text: String,
}

impl TerminusScene {
    /// Create a terminus.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub(super) fn resolve(&self, player: &mut Player, console: &mut dyn Console) -> StoryResult<Resolution> {
        let text = render_text(&self.text, &player.name);
        console.show(View::Scene(&text));

        if !acknowledged(console)? {
            return Ok(Resolution::quit());
        }
        Ok(Resolution {
            transition: Transition::End,
            taken: None,
        })
    }
}

/// Wait for any line. Returns `false` if the player quit instead.
fn acknowledged(console: &mut dyn Console) -> StoryResult<bool> {
    console.show(View::Continue);
    match console.read_line()? {
        Some(line) => Ok(parse_command(&line) != Command::Quit),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn farewell() -> LeafScene {
        LeafScene::new("farewell", "Safe travels, %s.", "village")
            .with_event(Event::GrantStatus("blessed".to_string()))
    }

    #[test]
    fn leaf_applies_event_and_continues() {
        let leaf = farewell();
        let mut player = Player::new("Ada");
        let mut console = ScriptedConsole::new([""]);

        let resolution = leaf.resolve(&mut player, &mut console).unwrap();

        assert_eq!(resolution.transition, Transition::Goto("village".to_string()));
        assert!(player.has_status("blessed"));
        assert!(console.saw("Safe travels, Ada."));
        assert!(console.saw("Status: blessed"));
    }

    #[test]
    fn leaf_ignores_input_content() {
        for input in ["", "   ", "2", "help", "anything at all"] {
            let mut console = ScriptedConsole::new([input]);
            let resolution = farewell()
                .resolve(&mut Player::new("Ada"), &mut console)
                .unwrap();
            assert_eq!(resolution.transition, Transition::Goto("village".to_string()));
        }
    }

    #[test]
    fn leaf_quit() {
        let mut console = ScriptedConsole::new(["quit"]);
        let resolution = farewell()
            .resolve(&mut Player::new("Ada"), &mut console)
            .unwrap();
        assert_eq!(resolution.transition, Transition::Quit);
    }

    #[test]
    fn leaf_with_empty_next_ends_chapter() {
        let leaf = LeafScene::new("last", "The road ends.", "");
        let mut console = ScriptedConsole::new([""]);
        let resolution = leaf.resolve(&mut Player::new("Ada"), &mut console).unwrap();
        assert_eq!(resolution.transition, Transition::End);
    }

    #[test]
    fn terminus_ends_without_mutation() {
        let terminus = TerminusScene::new("end", "Fin, %s.");
        let mut player = Player::new("Ada").with_perk("swift");
        let before = player.clone();
        let mut console = ScriptedConsole::new([""]);

        let resolution = terminus.resolve(&mut player, &mut console).unwrap();

        assert_eq!(resolution.transition, Transition::End);
        assert_eq!(player, before);
        assert!(console.saw("Fin, Ada."));
    }
}
