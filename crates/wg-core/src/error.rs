//! Error types for the engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Problems found while reading a chapter or save document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not JSON, or does not have the expected shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// A field that this kind of document needs is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A requirement `type` outside the known vocabulary.
    #[error("unknown requirement type \"{kind}\" in {context}")]
    UnknownRequirementType {
        /// Where the requirement was declared.
        context: String,
        /// The unrecognised type.
        kind: String,
    },

    /// An event `type` outside the known vocabulary.
    #[error("unknown event type \"{kind}\" in {context}")]
    UnknownEventType {
        /// Where the event was declared.
        context: String,
        /// The unrecognised type.
        kind: String,
    },

    /// A requirement whose `req` does not fit its type.
    #[error("invalid requirement in {context}: {reason}")]
    InvalidRequirement {
        /// Where the requirement was declared.
        context: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A branch or leaf points at a scene id the chapter does not contain.
    #[error("scene \"{scene}\" points to unknown scene \"{target}\"{}", hint(.suggestion))]
    DanglingReference {
        /// The scene holding the reference.
        scene: String,
        /// The unresolved target id.
        target: String,
        /// The closest existing scene id, if any is close.
        suggestion: Option<String>,
    },

    /// `currScene` names a scene the chapter does not contain.
    #[error("start scene \"{0}\" is not in the chapter")]
    MissingStartScene(String),
}

/// Errors that can occur while loading, playing or saving a session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Reading or writing a file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A document read from disk could not be parsed.
    #[error("{}: {source}", path.display())]
    Load {
        /// The document that failed.
        path: PathBuf,
        /// What was wrong with it.
        #[source]
        source: ParseError,
    },

    /// An in-memory document could not be parsed or written.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The session's current scene is not in the graph.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// A traversal step selected a target that is not in the graph.
    #[error("scene \"{from}\" leads to unknown scene \"{target}\"{}", hint(.suggestion))]
    DanglingScene {
        /// The scene being left.
        from: String,
        /// The unresolved target id.
        target: String,
        /// The closest existing scene id, if any is close.
        suggestion: Option<String>,
    },

    /// The input collaborator failed.
    #[error("console error: {0}")]
    Console(String),
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(id) => format!(" (did you mean \"{id}\"?)"),
        None => String::new(),
    }
}
