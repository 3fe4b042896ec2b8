//! The terminal console: coloured views on stdout, lines from stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use wg_core::{Console, StoryError, StoryResult, View};

pub struct TerminalConsole<R> {
    input: R,
}

impl<R: BufRead> TerminalConsole<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Ask a question outside of a scene and read the answer.
    pub fn ask(&mut self, question: &str) -> StoryResult<Option<String>> {
        println!("{}", question.bold());
        self.read_line()
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn show(&mut self, view: View<'_>) {
        match view {
            View::Scene(text) => println!("\n{text}"),
            View::Event(event) => println!("{}", event.to_string().yellow()),
            View::Branches([]) => println!("\n{}", view.to_string().dimmed()),
            View::Branches(branches) => {
                println!();
                for (i, branch) in branches.iter().enumerate() {
                    let line = format!("{}. {}", i + 1, branch.text);
                    // gated branches in blue
                    if branch.gated {
                        println!("{}", line.blue());
                    } else {
                        println!("{line}");
                    }
                }
            }
            View::Continue => println!("{}", view.to_string().dimmed()),
            View::Player(_) => println!("{}", view.to_string().blue()),
            View::Help => println!("{}", view.to_string().yellow()),
            View::Invalid(_) => println!("{}", view.to_string().red()),
        }
    }

    fn read_line(&mut self) -> StoryResult<Option<String>> {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| StoryError::Console(e.to_string()))?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) => Err(StoryError::Console(e.to_string())),
        }
    }
}
