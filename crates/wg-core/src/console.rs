//! The seam between the engine and whatever shows text and reads input.
//!
//! Scenes describe what they want shown as [`View`]s and pull player input
//! one line at a time. A terminal front end colours and prints the views; the
//! [`ScriptedConsole`] replays canned input and keeps a plain transcript.

use std::collections::VecDeque;
use std::fmt;

use crate::choice::Event;
use crate::error::StoryResult;
use crate::player::Player;

/// Commands accepted at scene prompts, with their descriptions.
pub const SCENE_HELP: &[(&str, &str)] = &[
    ("<branch_number>", "select branch"),
    ("<[p]layer>", "print player info"),
    ("<[q]uit>", "quit the game"),
    ("<[h]elp>", "print this message"),
];

const PLAYER_VERBS: &[&str] = &["p", "player"];
const HELP_VERBS: &[&str] = &["h", "help"];
const QUIT_VERBS: &[&str] = &["q", "quit"];

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A 1-based branch number.
    Select(usize),
    /// Show the player's tags.
    Player,
    /// Show the command list.
    Help,
    /// Stop playing.
    Quit,
    /// A blank line.
    Blank,
    /// Anything else.
    Unknown(String),
}

/// Parse a line of player input. Case and surrounding whitespace are ignored.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Blank;
    }

    let lower = input.to_lowercase();
    if let Ok(n) = lower.parse::<usize>() {
        return Command::Select(n);
    }

    let verb = lower.as_str();
    if QUIT_VERBS.contains(&verb) {
        Command::Quit
    } else if PLAYER_VERBS.contains(&verb) {
        Command::Player
    } else if HELP_VERBS.contains(&verb) {
        Command::Help
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Why a line of input was rejected at a branch prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// A branch number outside the offered range.
    OutOfRange {
        /// The number entered.
        choice: usize,
        /// How many branches were offered.
        available: usize,
    },
    /// Neither a number nor a command.
    Unrecognised(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { choice, available: 0 } => {
                write!(f, "Invalid branch {choice}, no branches available")
            }
            Self::OutOfRange { choice, available } => {
                write!(f, "Invalid branch {choice}, choose 1-{available}")
            }
            Self::Unrecognised(_) => write!(f, "Invalid option. Use [h]elp for a list of commands"),
        }
    }
}

/// A branch as offered to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPrompt {
    /// The prompt text with the player's name substituted.
    pub text: String,
    /// Whether the branch is gated by a requirement.
    pub gated: bool,
}

/// Something the engine wants displayed.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Scene text with the player's name substituted.
    Scene(&'a str),
    /// An event that was just applied.
    Event(&'a Event),
    /// The eligible branches, in display order.
    Branches(&'a [BranchPrompt]),
    /// An acknowledgement is expected before moving on.
    Continue,
    /// The player sheet.
    Player(&'a Player),
    /// The scene prompt commands.
    Help,
    /// The last input was rejected.
    Invalid(&'a InvalidInput),
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scene(text) => write!(f, "{text}"),
            Self::Event(event) => write!(f, "{event}"),
            Self::Branches([]) => write!(f, "No branches available"),
            Self::Branches(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}. {}", i + 1, branch.text)?;
                }
                Ok(())
            }
            Self::Continue => write!(f, "Press ENTER to continue..."),
            Self::Player(player) => {
                writeln!(f, "{}", player.name)?;
                writeln!(f, "Perks:      {}", join(&player.perks))?;
                writeln!(f, "Inventory:  {}", join(&player.items))?;
                write!(f, "Statuses:   {}", join(&player.statuses))
            }
            Self::Help => {
                for (i, (command, description)) in SCENE_HELP.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{command:<18}- {description}")?;
                }
                Ok(())
            }
            Self::Invalid(reason) => write!(f, "{reason}"),
        }
    }
}

fn join<'a>(tags: impl IntoIterator<Item = &'a String>) -> String {
    let tags: Vec<&str> = tags.into_iter().map(String::as_str).collect();
    format!("[{}]", tags.join(", "))
}

/// The input collaborator a session is driven through.
pub trait Console {
    /// Display a view.
    fn show(&mut self, view: View<'_>);

    /// Block for the next line of input. `None` means input has ended,
    /// which scenes treat as quitting.
    fn read_line(&mut self) -> StoryResult<Option<String>>;
}

/// A console fed from a fixed list of lines, recording what it was shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything shown so far, one entry per view.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any shown view contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|entry| entry.contains(needle))
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, view: View<'_>) {
        self.transcript.push(view.to_string());
    }

    fn read_line(&mut self) -> StoryResult<Option<String>> {
        Ok(self.input.pop_front())
    }
}
