//! Reading and writing documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::EngineConfig;
use crate::document::{Document, parse_session, serialize_session};
use crate::error::{ParseError, StoryError, StoryResult};
use crate::player::Player;
use crate::session::{Chapter, Session};

/// File name of a chapter within a game directory.
pub fn chapter_file_name(id: &str) -> String {
    format!("chapter{id}.json")
}

/// Load a chapter document that carries its own player.
pub fn load_chapter(path: impl AsRef<Path>, config: &EngineConfig) -> StoryResult<Session> {
    let path = path.as_ref();
    let session = Document::from_json(&read(path)?)
        .and_then(|document| document.into_session(config))
        .map_err(|source| load_error(path, source))?;
    tracing::info!(path = %path.display(), start = session.current_scene(), "loaded chapter");
    Ok(session)
}

/// Load a chapter without a player, to enter with an existing one.
pub fn read_chapter(path: impl AsRef<Path>, config: &EngineConfig) -> StoryResult<Chapter> {
    let path = path.as_ref();
    let chapter = Document::from_json(&read(path)?)
        .and_then(|document| document.into_chapter(config))
        .map_err(|source| load_error(path, source))?;
    tracing::info!(path = %path.display(), start = %chapter.start, "read chapter");
    Ok(chapter)
}

/// Load the `player` object of a document, such as a game's default player.
pub fn load_player(path: impl AsRef<Path>) -> StoryResult<Player> {
    #[derive(Deserialize)]
    struct PlayerOnly {
        player: Option<Player>,
    }

    let path = path.as_ref();
    let document: PlayerOnly = serde_json::from_str(&read(path)?)
        .map_err(|e| load_error(path, ParseError::Json(e)))?;
    document
        .player
        .ok_or_else(|| load_error(path, ParseError::MissingField("player")))
}

/// Load a save.
pub fn load_save(path: impl AsRef<Path>, config: &EngineConfig) -> StoryResult<Session> {
    let path = path.as_ref();
    let session = parse_session(&read(path)?, config).map_err(|source| load_error(path, source))?;
    tracing::info!(
        path = %path.display(),
        game = session.game_name(),
        scene = session.current_scene(),
        "loaded save"
    );
    Ok(session)
}

/// Write a session to `path`, creating parent directories as needed.
///
/// The document is written to a sibling temporary file first and then
/// renamed over `path`, so an interrupted save never leaves a truncated file.
pub fn save_session(session: &Session, path: impl AsRef<Path>) -> StoryResult<()> {
    let path = path.as_ref();
    let json = serialize_session(session)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|source| io_error(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;

    tracing::info!(path = %path.display(), scene = session.current_scene(), "saved session");
    Ok(())
}

fn read(path: &Path) -> StoryResult<String> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> StoryError {
    StoryError::Io {
        path: PathBuf::from(path),
        source,
    }
}

fn load_error(path: &Path, source: ParseError) -> StoryError {
    StoryError::Load {
        path: PathBuf::from(path),
        source,
    }
}
