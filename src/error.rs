//! Error types for manifest filename derivation and renaming.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, NamerError>;

/// Errors surfaced while deriving or applying a canonical manifest filename.
///
/// Every variant is terminal for the current invocation: the tool makes a
/// single attempt and exits non-zero on failure.
#[derive(Debug, Error)]
pub enum NamerError {
    /// No manifest path was supplied on the command line.
    #[error("missing required argument: --path")]
    MissingPath,

    /// The supplied path could not be resolved to an absolute path.
    #[error("failed to resolve {}: {source}", .path.display())]
    NormalizePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest content is not valid YAML.
    #[error("failed to parse manifest: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    /// The manifest parsed, but not into a shape a descriptor can be
    /// extracted from.
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// Renaming would overwrite an unrelated file.
    #[error("refusing to rename {} to {}: target already exists", .from.display(), .to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    /// The filesystem rename failed.
    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
