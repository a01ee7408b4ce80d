//! Error types for the ORGE installer CLI.
//!
//! This module defines the semantic error variants of the staging pipeline.
//! Every variant is fatal for the run that raises it: the installer aborts at
//! the first error and never retries, leaving the destination in a possibly
//! partially-populated state that callers must treat as untrustworthy.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while staging native library artifacts.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// A required file was absent: a source artifact, a versioned name
    /// pattern with no candidates, or a binary scheduled for relinking.
    #[error("{path} not found")]
    MissingArtifact {
        /// Path (or unmatched pattern) that was expected to exist.
        path: Utf8PathBuf,
    },

    /// A versioned name pattern matched more than one file.
    #[error("ambiguous artifact {pattern} in {directory}: {count} matches")]
    AmbiguousArtifact {
        /// Directory that was scanned.
        directory: Utf8PathBuf,
        /// Pattern that was matched, e.g. `libvulkan.so.*`.
        pattern: String,
        /// Number of files that matched.
        count: usize,
    },

    /// A platform metadata tool could not be run or exited with failure.
    #[error("{tool} failed: {message}")]
    SubprocessFailure {
        /// Name of the tool that failed.
        tool: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// The destination could not be created or written.
    #[error("destination {path} is not writable: {reason}")]
    DestinationUnwritable {
        /// Destination path that could not be written.
        path: Utf8PathBuf,
        /// Description of the underlying I/O error.
        reason: String,
    },

    /// Failed to enumerate build sources under a source tree.
    #[error("failed to scan source tree")]
    ScanFailed {
        /// The underlying error that caused the scan to fail.
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
