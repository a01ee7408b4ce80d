//! Build source enumeration.
//!
//! The build system asks for the engine's source files as a flat list, one
//! path per line. This module walks a source tree and collects files by
//! extension, sorted so repeated runs produce identical output.

use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Recursively collect files under `root` carrying `extension`.
///
/// A missing root yields an empty list, matching glob semantics: the build
/// system treats "no sources" as an ordinary answer, not a failure.
///
/// # Errors
///
/// Returns [`InstallerError::ScanFailed`] when a directory inside an
/// existing tree cannot be read.
pub fn list_sources(root: &Utf8Path, extension: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut found = Vec::new();
    if root.is_dir() {
        collect(root, extension, &mut found)
            .map_err(|source| InstallerError::ScanFailed { source })?;
    }
    found.sort();
    Ok(found)
}

fn collect(dir: &Utf8Path, extension: &str, found: &mut Vec<Utf8PathBuf>) -> std::io::Result<()> {
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect(path, extension, found)?;
        } else if path.extension() == Some(extension) {
            found.push(path.to_owned());
        }
    }
    Ok(())
}
