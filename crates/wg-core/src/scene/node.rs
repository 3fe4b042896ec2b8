//! Node scenes: the player picks one of several branches.

use super::{Branch, Resolution, Transition, render_text};
use crate::choice::Event;
use crate::console::{BranchPrompt, Command, Console, InvalidInput, View, parse_command};
use crate::error::StoryResult;
use crate::player::Player;

/// A scene that offers the player a choice of branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeScene {
    /// Scene id, unique within the chapter.
    pub id: String,
    /// Text template shown on every visit.
    pub text: String,
    /// Event applied on every visit.
    pub event: Option<Event>,
    /// Remaining branches, in display order.
    pub branches: Vec<Branch>,
}

impl NodeScene {
    /// Create a node with no branches.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            event: None,
            branches: Vec::new(),
        }
    }

    /// Set the event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Add a branch.
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branches.push(branch);
        self
    }

    /// Indices of the branches the player is currently eligible for.
    pub fn eligible(&self, player: &Player) -> Vec<usize> {
        self.branches
            .iter()
            .enumerate()
            .filter(|(_, branch)| branch.is_eligible(player))
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove a taken branch. It is never offered again.
    pub fn prune(&mut self, index: usize) -> Option<Branch> {
        (index < self.branches.len()).then(|| self.branches.remove(index))
    }

    pub(super) fn resolve(&self, player: &mut Player, console: &mut dyn Console) -> StoryResult<Resolution> {
        if let Some(event) = &self.event {
            event.apply(player);
        }

        // May be empty; the prompt still accepts commands.
        let eligible = self.eligible(player);
        let prompts: Vec<BranchPrompt> = eligible
            .iter()
            .map(|&i| BranchPrompt {
                text: render_text(&self.branches[i].prompt, &player.name),
                gated: self.branches[i].is_gated(),
            })
            .collect();
        let text = render_text(&self.text, &player.name);

        console.show(View::Scene(&text));
        if let Some(event) = &self.event {
            console.show(View::Event(event));
        }
        console.show(View::Branches(&prompts));

        loop {
            let Some(line) = console.read_line()? else {
                return Ok(Resolution::quit());
            };

            let invalid = match parse_command(&line) {
                Command::Quit => return Ok(Resolution::quit()),
                Command::Player => {
                    console.show(View::Player(player));
                    continue;
                }
                Command::Help => {
                    console.show(View::Help);
                    continue;
                }
                Command::Select(choice) => {
                    match choice.checked_sub(1).and_then(|n| eligible.get(n)) {
                        Some(&index) => {
                            let branch = &self.branches[index];
                            if let Some(event) = &branch.event {
                                event.apply(player);
                                console.show(View::Event(event));
                            }
                            tracing::debug!(scene = %self.id, target = %branch.target, "branch taken");
                            return Ok(Resolution {
                                transition: Transition::to(&branch.target),
                                taken: Some(index),
                            });
                        }
                        None => InvalidInput::OutOfRange {
                            choice,
                            available: eligible.len(),
                        },
                    }
                }
                Command::Blank => InvalidInput::Unrecognised(String::new()),
                Command::Unknown(input) => InvalidInput::Unrecognised(input),
            };
            console.show(View::Invalid(&invalid));
        }
    }
}
