//! Error type shared by the diagram builders and the live-editor export.

use thiserror::Error;

/// Everything that can go wrong while building or exporting a diagram.
///
/// All failures are reported synchronously as values; none of them leave a
/// diagram partially mutated.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity with this identifier already exists in its namespace.
    #[error("identifier {0:?} is already in use")]
    DuplicateId(String),
    /// The identifier is empty or contains characters that would corrupt
    /// the generated line grammar.
    #[error("invalid identifier {0:?}")]
    InvalidId(String),
    /// A configuration struct combined fields that contradict each other.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A scoped add referenced a section that was never created.
    #[error("unknown section {0:?}")]
    UnknownSection(String),
    #[error("failed to encode live editor payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    /// The host OS has no known URL-opener command.
    #[error("unsupported platform {0:?}")]
    UnsupportedPlatform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
