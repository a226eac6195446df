//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`FsError`] - Path resolution failures in the virtual filesystem
//! - [`ManifestError`] - Problems building the filesystem from a manifest
//! - [`ConfigError`] - Loading the runtime configuration
//!
//! Command-level failures (`cd: x: No such directory`, unknown commands) are
//! not errors in this sense; they are ordinary output lines.

use std::path::PathBuf;

use thiserror::Error;

/// Path resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A segment of the path does not exist
    #[error("{0}: No such file or directory")]
    NotFound(String),
    /// A non-terminal segment (or a listed path) names a file
    #[error("{0}: Not a directory")]
    NotADirectory(String),
}

/// Errors raised while building a [`VirtualFs`](crate::core::VirtualFs).
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest is not valid JSON or does not match the schema
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// Manifest was written for another format version
    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// Path is empty or contains a reserved segment
    #[error("invalid path '{0}'")]
    InvalidPath(String),
    /// A file sits where a directory is required
    #[error("'{path}' is blocked by file '{blocker}'")]
    BlockedByFile { path: String, blocker: String },
    /// The same path is declared twice
    #[error("duplicate entry '{0}'")]
    Duplicate(String),
}

/// Errors raised while loading [`ShellConfig`](crate::config::ShellConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_display() {
        assert_eq!(
            FsError::NotFound("~/nope".into()).to_string(),
            "~/nope: No such file or directory"
        );
        assert_eq!(
            FsError::NotADirectory("~/skills.txt".into()).to_string(),
            "~/skills.txt: Not a directory"
        );
    }

    #[test]
    fn test_manifest_error_display() {
        let err = ManifestError::UnsupportedVersion {
            found: 2,
            expected: 1,
        };
        assert_eq!(
            err.to_string(),
            "unsupported manifest version 2 (expected 1)"
        );
        let err = ManifestError::BlockedByFile {
            path: "notes.txt/a".into(),
            blocker: "notes.txt".into(),
        };
        assert_eq!(err.to_string(), "'notes.txt/a' is blocked by file 'notes.txt'");
    }
}
