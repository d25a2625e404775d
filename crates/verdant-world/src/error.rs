//! Error types for name and material-spec parsing.

/// A configuration identifier did not name any known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownNameError {
    /// No biome has this name.
    #[error("unknown biome name: {0}")]
    Biome(String),

    /// No material has this name.
    #[error("unknown material name: {0}")]
    Material(String),

    /// No tree type has this name.
    #[error("unknown tree type: {0}")]
    TreeType(String),
}

/// Errors from parsing a `"NAME[:data]"` material spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaterialParseError {
    /// The name part is not a known material.
    #[error("\"{0}\" is not a valid material name")]
    UnknownMaterial(String),

    /// The data part is not a byte value.
    #[error("\"{0}\" is not a valid material data value")]
    InvalidData(String),
}
