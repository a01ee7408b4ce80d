//! Versioned artifact location.
//!
//! This module resolves an abstract artifact request to a concrete source
//! path, either by an exactly known file name or by a single-match scan over
//! version-bearing file names in the source directory.

use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// How a requested artifact's file name is matched in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    /// A fully known file name; resolution joins without an existence check.
    Exact(String),
    /// A version-bearing name with known prefix and suffix and an unknown,
    /// non-empty version segment between them.
    Versioned {
        /// Leading part of the file name, e.g. `libvulkan.so.`.
        prefix: String,
        /// Trailing part of the file name, e.g. `.dylib` (may be empty).
        suffix: String,
    },
}

impl NamePattern {
    /// Human-readable rendering with `*` for the unknown version segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use orge_installer::artifact::NamePattern;
    ///
    /// let pattern = NamePattern::Versioned {
    ///     prefix: "libvulkan.".to_owned(),
    ///     suffix: ".dylib".to_owned(),
    /// };
    /// assert_eq!(pattern.display_name(), "libvulkan.*.dylib");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Exact(name) => name.clone(),
            Self::Versioned { prefix, suffix } => format!("{prefix}*{suffix}"),
        }
    }
}

/// A request to locate one artifact in a source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Directory the artifact is expected in.
    pub source_dir: Utf8PathBuf,
    /// File name pattern to match.
    pub pattern: NamePattern,
}

impl ArtifactRequest {
    /// Create a request for an exactly named artifact.
    #[must_use]
    pub fn exact(source_dir: &Utf8Path, file_name: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.to_owned(),
            pattern: NamePattern::Exact(file_name.into()),
        }
    }

    /// Create a request for a version-bearing artifact name.
    #[must_use]
    pub fn versioned(
        source_dir: &Utf8Path,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.to_owned(),
            pattern: NamePattern::Versioned {
                prefix: prefix.into(),
                suffix: suffix.into(),
            },
        }
    }

    /// Resolve the request to a concrete source path.
    ///
    /// Exact requests resolve by joining; their existence is validated later
    /// by the copier. Versioned requests scan the source directory and must
    /// match exactly one file.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::MissingArtifact`] when a versioned pattern
    /// matches nothing (an unreadable or absent source directory counts as
    /// no matches) and [`InstallerError::AmbiguousArtifact`] when it matches
    /// more than one file.
    pub fn resolve(&self) -> Result<Utf8PathBuf> {
        match &self.pattern {
            NamePattern::Exact(name) => Ok(self.source_dir.join(name)),
            NamePattern::Versioned { prefix, suffix } => self.resolve_versioned(prefix, suffix),
        }
    }

    fn resolve_versioned(&self, prefix: &str, suffix: &str) -> Result<Utf8PathBuf> {
        let mut matches = scan_versioned(&self.source_dir, prefix, suffix);
        match matches.len() {
            0 => Err(InstallerError::MissingArtifact {
                path: self.source_dir.join(self.pattern.display_name()),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(InstallerError::AmbiguousArtifact {
                directory: self.source_dir.clone(),
                pattern: self.pattern.display_name(),
                count,
            }),
        }
    }
}

/// Collect files in `dir` whose names carry a version between `prefix` and
/// `suffix`.
fn scan_versioned(dir: &Utf8Path, prefix: &str, suffix: &str) -> Vec<Utf8PathBuf> {
    let Ok(entries) = dir.read_dir_utf8() else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(rest) = file_name.strip_prefix(prefix) else {
            continue;
        };
        let Some(version) = rest.strip_suffix(suffix) else {
            continue;
        };
        if version.is_empty() || entry.path().is_dir() {
            continue;
        }
        found.push(entry.path().to_owned());
    }
    found
}
