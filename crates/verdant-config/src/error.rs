//! Configuration error types.

/// Errors that can occur when loading, saving, or building growth configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// A profile names a parent that is not defined before it.
    #[error("profile \"{profile}\" inherits from unknown profile \"{parent}\"")]
    UnknownParent {
        /// The inheriting profile.
        profile: String,
        /// The missing parent.
        parent: String,
    },

    /// A root profile (no parent) does not say what kind of growable it is.
    #[error("profile \"{0}\" has neither a parent nor a category")]
    MissingCategory(String),
}
