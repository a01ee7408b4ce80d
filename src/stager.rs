//! Destination staging for native library artifacts.
//!
//! All destination mutation funnels through [`InstallTarget`]: it creates
//! missing destination directories, copies artifacts under their canonical
//! names, and reports each copy on the progress stream. Nothing else in the
//! installer writes to the destination.

use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::Write;

/// A destination directory receiving staged artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    root: Utf8PathBuf,
}

impl InstallTarget {
    /// Create a target rooted at `root`.
    #[must_use]
    pub const fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    /// Return the target directory root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path a staged file of the given name occupies.
    #[must_use]
    pub fn staged_path(&self, file_name: &str) -> Utf8PathBuf {
        self.root.join(file_name)
    }

    /// Copy `source` into the target as `dest_name`.
    ///
    /// Missing destination directories are created idempotently; an existing
    /// destination file is overwritten without warning. Contents and
    /// permission bits are copied. One progress line of the form
    /// `Installing <source> to <dest>` is written to `out` per successful
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::MissingArtifact`] if `source` is not an
    /// existing regular file, and [`InstallerError::DestinationUnwritable`]
    /// if the destination directory cannot be created or the copy fails.
    pub fn install(
        &self,
        source: &Utf8Path,
        dest_name: &str,
        out: &mut dyn Write,
    ) -> Result<Utf8PathBuf> {
        if !source.is_file() {
            return Err(InstallerError::MissingArtifact {
                path: source.to_owned(),
            });
        }

        fs::create_dir_all(&self.root).map_err(|e| InstallerError::DestinationUnwritable {
            path: self.root.clone(),
            reason: e.to_string(),
        })?;

        let dest = self.staged_path(dest_name);
        fs::copy(source, &dest).map_err(|e| InstallerError::DestinationUnwritable {
            path: dest.clone(),
            reason: e.to_string(),
        })?;
        log::debug!("copied {source} to {dest}");

        writeln!(out, "Installing {source} to {dest}")?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("temp dir path not UTF-8")
    }

    #[test]
    fn install_copies_and_reports_progress() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let source = dir.join("libvulkan.so.1.3.268");
        std::fs::write(&source, b"loader").expect("write source");

        let target = InstallTarget::new(dir.join("out"));
        let mut out = Vec::new();
        let dest = target
            .install(&source, "libvulkan.so", &mut out)
            .expect("copy should succeed");

        assert_eq!(dest, dir.join("out").join("libvulkan.so"));
        assert_eq!(std::fs::read(&dest).expect("read dest"), b"loader");

        let progress = String::from_utf8(out).expect("progress was not UTF-8");
        assert_eq!(progress, format!("Installing {source} to {dest}\n"));
    }

    #[test]
    fn install_creates_nested_destination_directories() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let source = dir.join("libSDL3.a");
        std::fs::write(&source, b"archive").expect("write source");

        let target = InstallTarget::new(dir.join("out").join("lib"));
        let mut out = Vec::new();
        target
            .install(&source, "libSDL3.a", &mut out)
            .expect("copy should create the directory chain");

        assert!(dir.join("out").join("lib").join("libSDL3.a").is_file());
    }

    #[test]
    fn install_is_idempotent() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let source = dir.join("libSDL3.a");
        std::fs::write(&source, b"archive").expect("write source");

        let target = InstallTarget::new(dir.join("out"));
        let mut out = Vec::new();
        let first = target
            .install(&source, "libSDL3.a", &mut out)
            .expect("first copy");
        let second = target
            .install(&source, "libSDL3.a", &mut out)
            .expect("second copy");

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).expect("read dest"), b"archive");
    }

    #[test]
    fn install_overwrites_an_existing_destination_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let source = dir.join("libvulkan.so.1.3.268");
        std::fs::write(&source, b"new").expect("write source");

        let target = InstallTarget::new(dir.join("out"));
        std::fs::create_dir_all(target.root()).expect("create dest dir");
        std::fs::write(target.staged_path("libvulkan.so"), b"stale").expect("write stale");

        let mut out = Vec::new();
        let dest = target
            .install(&source, "libvulkan.so", &mut out)
            .expect("overwrite should succeed");
        assert_eq!(std::fs::read(&dest).expect("read dest"), b"new");
    }

    #[test]
    fn install_fails_on_missing_source() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);

        let target = InstallTarget::new(dir.join("out"));
        let mut out = Vec::new();
        let err = target
            .install(&dir.join("libvulkan.so.1.3.268"), "libvulkan.so", &mut out)
            .expect_err("missing source must fail");

        assert!(matches!(err, InstallerError::MissingArtifact { .. }));
        assert!(out.is_empty(), "no progress line on failure");
        assert!(!dir.join("out").join("libvulkan.so").exists());
    }

    #[cfg(unix)]
    #[test]
    fn install_preserves_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let source = dir.join("libvulkan.so.1.3.268");
        std::fs::write(&source, b"loader").expect("write source");
        let mut perms = std::fs::metadata(&source).expect("metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&source, perms).expect("set permissions");

        let target = InstallTarget::new(dir.join("out"));
        let mut out = Vec::new();
        let dest = target
            .install(&source, "libvulkan.so", &mut out)
            .expect("copy should succeed");

        let mode = std::fs::metadata(&dest).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
