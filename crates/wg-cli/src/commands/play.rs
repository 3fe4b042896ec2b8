use std::io::{self, BufRead};
use std::path::PathBuf;

use colored::Colorize;
use miette::{IntoDiagnostic, WrapErr};
use wg_core::{ChapterOutcome, Session, drive_session, read_chapter, save_session};

use super::{Context, game_title};
use crate::terminal::TerminalConsole;

/// Play `session` on the terminal, following chapters until the story ends
/// or the player quits.
pub fn run(ctx: &Context, mut session: Session) -> miette::Result<()> {
    let stdin = io::stdin();
    let mut console = TerminalConsole::new(stdin.lock());

    println!("  {} {}", "Playing".bold(), game_title(session.game_name()));
    println!("  Type 'h' for commands, 'q' to quit.");

    loop {
        let outcome = match drive_session(&mut session, &mut console).into_diagnostic() {
            Ok(outcome) => outcome,
            Err(report) => return save_then_fail(ctx, &session, &mut console, report),
        };

        match outcome {
            ChapterOutcome::Finished(Some(next)) => {
                let path = ctx.chapter_path(session.game_name(), &next);
                let chapter = read_chapter(&path, &ctx.config)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("cannot continue to chapter {next}"));
                match chapter {
                    Ok(chapter) => session.enter_chapter(chapter),
                    Err(report) => return save_then_fail(ctx, &session, &mut console, report),
                }
            }
            ChapterOutcome::Finished(None) => {
                println!("\n  {}", "The End".bold());
                return Ok(());
            }
            ChapterOutcome::Quit => return offer_save(ctx, &session, &mut console),
        }
    }
}

/// Offer to save `session`, then return `error`. Failed steps leave the
/// session unchanged.
fn save_then_fail<R: BufRead>(
    ctx: &Context,
    session: &Session,
    console: &mut TerminalConsole<R>,
    error: miette::Report,
) -> miette::Result<()> {
    println!("\n  {} the story cannot continue", "error:".red());
    if let Err(save_error) = offer_save(ctx, session, console) {
        tracing::warn!(error = %save_error, "could not save after failure");
    }
    Err(error)
}

fn offer_save<R: BufRead>(
    ctx: &Context,
    session: &Session,
    console: &mut TerminalConsole<R>,
) -> miette::Result<()> {
    let answer = console.ask("Save before quitting? [y/N]").into_diagnostic()?;
    let wants_save = answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes"));
    if !wants_save {
        return Ok(());
    }

    let default = default_save_name(&session.player().name);
    loop {
        // End of input takes the default name
        let answer = console
            .ask(&format!("Save name [{default}]:"))
            .into_diagnostic()?
            .unwrap_or_default();

        match save_target(ctx, answer.trim(), &default) {
            Some(path) => {
                save_session(session, &path).into_diagnostic()?;
                println!("  {} {}", "Saved".green(), path.display());
                return Ok(());
            }
            None => println!("{}", "Save names cannot contain path separators".red()),
        }
    }
}

fn save_target(ctx: &Context, name: &str, default: &str) -> Option<PathBuf> {
    let name = name.strip_suffix(".json").unwrap_or(name);
    let name = if name.is_empty() { default } else { name };
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return None;
    }
    Some(ctx.save_path(name))
}

/// Lower-case player name with anything but letters and digits replaced.
fn default_save_name(player: &str) -> String {
    let name: String = player
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if name.is_empty() { "save".to_string() } else { name }
}
