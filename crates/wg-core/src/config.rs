//! Configuration for loading chapters and saves.

/// How strictly documents are checked when they are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reject unknown requirement and event types. When off, they are
    /// treated as absent and a warning is logged.
    pub strict_types: bool,
    /// Check that the start scene and every branch and leaf target exist.
    pub validate_references: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_types: true,
            validate_references: true,
        }
    }
}

impl EngineConfig {
    /// Accept unknown requirement and event types, as older content
    /// expects.
    pub fn lenient() -> Self {
        Self::default().with_strict_types(false)
    }

    /// Set whether unknown types are rejected.
    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    /// Set whether scene references are checked at load time.
    pub fn with_reference_validation(mut self, validate: bool) -> Self {
        self.validate_references = validate;
        self
    }
}
