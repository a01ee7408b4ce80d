//! Semantic wrapper for library base names.
//!
//! This module provides the [`LibraryName`] newtype for type-safe handling of
//! library base names throughout the installer.

use std::fmt;

/// A library base name without platform prefix, version, or extension.
///
/// The same base name renders differently per platform: `vulkan` becomes
/// `libvulkan.so.1.3.268` in a Linux build tree and `libvulkan.dylib` in a
/// staged macOS layout. The rendering lives in [`crate::naming`]; this type
/// only carries the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryName(String);

impl LibraryName {
    /// Create a new library name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the library name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for LibraryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LibraryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LibraryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
