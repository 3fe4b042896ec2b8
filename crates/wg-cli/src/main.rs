//! CLI frontend for the Wordgame narrative engine.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use wg_core::EngineConfig;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Wordgame: choice-driven text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory with one subdirectory per game
    #[arg(long, global = true, default_value = "data")]
    data: PathBuf,

    /// Directory where saves are kept
    #[arg(long, global = true, default_value = "saves")]
    saves: PathBuf,

    /// Ignore unknown requirement and event types instead of rejecting them
    #[arg(long, global = true)]
    lenient: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the games that can be started
    Games,

    /// List saves, newest first
    Saves,

    /// Start a game from its first chapter
    New {
        /// Game directory name (e.g. The_Village)
        game: String,

        /// Play under a different name than the game's default player
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Resume a save
    Load {
        /// Save name, or a path to a save file
        save: String,
    },

    /// Parse and validate a chapter or save without playing it
    Check {
        /// The document to check
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = if cli.lenient {
        EngineConfig::lenient()
    } else {
        EngineConfig::default()
    };
    let ctx = Context {
        data: cli.data,
        saves: cli.saves,
        config,
    };

    let result = match cli.command {
        Commands::Games => commands::games::run(&ctx),
        Commands::Saves => commands::saves::run(&ctx),
        Commands::New { game, name } => commands::new::run(&ctx, &game, name.as_deref()),
        Commands::Load { save } => commands::load::run(&ctx, &save),
        Commands::Check { file } => commands::check::run(&ctx, &file),
    };

    if let Err(e) = result {
        eprintln!("{e:?}");
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the story on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wg_core=debug,wordgame=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
