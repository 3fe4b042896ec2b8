pub mod check;
pub mod games;
pub mod load;
pub mod new;
pub mod play;
pub mod saves;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use miette::{IntoDiagnostic, WrapErr};
use wg_core::{EngineConfig, chapter_file_name};

/// Chapter every game starts with.
pub const FIRST_CHAPTER: &str = "1";

/// The player every new game starts with, inside the game directory.
pub const DEFAULT_PLAYER_FILE: &str = "playerDefault.json";

/// Where games and saves live, and how strictly they are loaded.
pub struct Context {
    pub data: PathBuf,
    pub saves: PathBuf,
    pub config: EngineConfig,
}

impl Context {
    pub fn game_dir(&self, game: &str) -> PathBuf {
        self.data.join(game)
    }

    pub fn chapter_path(&self, game: &str, chapter: &str) -> PathBuf {
        self.game_dir(game).join(chapter_file_name(chapter))
    }

    pub fn save_path(&self, name: &str) -> PathBuf {
        self.saves.join(format!("{name}.json"))
    }
}

/// A save file found on disk.
pub struct SaveFile {
    pub name: String,
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

/// Game directories are named with underscores for spaces.
pub fn game_title(game: &str) -> String {
    game.replace('_', " ")
}

/// Game directories under `data` that have a first chapter, sorted by name.
pub fn list_games(data: &Path) -> miette::Result<Vec<String>> {
    if !data.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(data)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot list games in {}", data.display()))?;

    let mut games = Vec::new();
    for entry in entries {
        let path = entry.into_diagnostic()?.path();
        if !path.join(chapter_file_name(FIRST_CHAPTER)).is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            games.push(name.to_string());
        }
    }
    games.sort();
    Ok(games)
}

/// `.json` files under `saves`, most recently modified first.
pub fn list_saves(saves: &Path) -> miette::Result<Vec<SaveFile>> {
    if !saves.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(saves)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot list saves in {}", saves.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.into_diagnostic()?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|n| n.to_str()) else {
            continue;
        };
        let modified = entry.metadata().and_then(|m| m.modified()).into_diagnostic()?;
        found.push(SaveFile {
            name: name.to_string(),
            path: path.clone(),
            modified: DateTime::from(modified),
        });
    }
    found.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    Ok(found)
}
