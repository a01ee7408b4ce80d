//! Embedded library identity rewriting.
//!
//! ELF shared objects and Mach-O dynamic libraries record a self-referential
//! identity (SONAME, install-name) and the file names of their dependencies.
//! After staging under a canonical name those fields still hold the versioned
//! build-time names, so this module rewrites them through the platform's
//! native editor tool. The [`MetadataEditor`] trait is the capability
//! boundary: orchestration code depends on it, never on a concrete tool.

use crate::error::{InstallerError, Result};
use camino::Utf8Path;
use std::process::{Command, Output};

/// Capability interface over a platform's metadata editor tool.
pub trait MetadataEditor {
    /// Overwrite the library's own recorded identity with `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::SubprocessFailure`] when the underlying
    /// tool cannot be run or exits with failure.
    fn set_identity(&self, library: &Utf8Path, identity: &str) -> Result<()>;

    /// Replace the dependency reference `old` recorded in `binary` with
    /// `new`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::SubprocessFailure`] when the underlying
    /// tool cannot be run or exits with failure.
    fn replace_reference(&self, binary: &Utf8Path, old: &str, new: &str) -> Result<()>;
}

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
trait CommandRunner {
    /// Runs a command with arguments and returns the captured output.
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output> {
        Command::new(program).args(args).output()
    }
}

const PATCHELF: &str = "patchelf";
const INSTALL_NAME_TOOL: &str = "install_name_tool";

/// Rewrites ELF dynamic-section metadata via `patchelf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElfEditor;

impl ElfEditor {
    fn set_identity_with(
        runner: &dyn CommandRunner,
        library: &Utf8Path,
        identity: &str,
    ) -> Result<()> {
        run_editor(
            runner,
            PATCHELF,
            &[
                "--set-soname".to_owned(),
                identity.to_owned(),
                library.to_string(),
            ],
        )
    }

    fn replace_reference_with(
        runner: &dyn CommandRunner,
        binary: &Utf8Path,
        old: &str,
        new: &str,
    ) -> Result<()> {
        run_editor(
            runner,
            PATCHELF,
            &[
                "--replace-needed".to_owned(),
                old.to_owned(),
                new.to_owned(),
                binary.to_string(),
            ],
        )
    }
}

impl MetadataEditor for ElfEditor {
    fn set_identity(&self, library: &Utf8Path, identity: &str) -> Result<()> {
        Self::set_identity_with(&SystemCommandRunner, library, identity)
    }

    fn replace_reference(&self, binary: &Utf8Path, old: &str, new: &str) -> Result<()> {
        Self::replace_reference_with(&SystemCommandRunner, binary, old, new)
    }
}

/// Rewrites Mach-O load commands via `install_name_tool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MachOEditor;

impl MachOEditor {
    fn set_identity_with(
        runner: &dyn CommandRunner,
        library: &Utf8Path,
        identity: &str,
    ) -> Result<()> {
        run_editor(
            runner,
            INSTALL_NAME_TOOL,
            &["-id".to_owned(), identity.to_owned(), library.to_string()],
        )
    }

    fn replace_reference_with(
        runner: &dyn CommandRunner,
        binary: &Utf8Path,
        old: &str,
        new: &str,
    ) -> Result<()> {
        run_editor(
            runner,
            INSTALL_NAME_TOOL,
            &[
                "-change".to_owned(),
                old.to_owned(),
                new.to_owned(),
                binary.to_string(),
            ],
        )
    }
}

impl MetadataEditor for MachOEditor {
    fn set_identity(&self, library: &Utf8Path, identity: &str) -> Result<()> {
        Self::set_identity_with(&SystemCommandRunner, library, identity)
    }

    fn replace_reference(&self, binary: &Utf8Path, old: &str, new: &str) -> Result<()> {
        Self::replace_reference_with(&SystemCommandRunner, binary, old, new)
    }
}

/// Editor for staged artifacts that carry no embedded identity.
///
/// Windows import libraries and DLLs record no self-referential name in this
/// design, so every operation succeeds without touching the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEditor;

impl MetadataEditor for NoopEditor {
    fn set_identity(&self, _library: &Utf8Path, _identity: &str) -> Result<()> {
        Ok(())
    }

    fn replace_reference(&self, _binary: &Utf8Path, _old: &str, _new: &str) -> Result<()> {
        Ok(())
    }
}

/// Run an editor tool, mapping spawn failures and non-zero exits.
fn run_editor(runner: &dyn CommandRunner, tool: &'static str, args: &[String]) -> Result<()> {
    log::debug!("running {tool} {args:?}");
    let output = runner
        .run(tool, args)
        .map_err(|e| InstallerError::SubprocessFailure {
            tool,
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InstallerError::SubprocessFailure {
            tool,
            message: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(())
}

#[cfg(any(test, feature = "test-support"))]
mod recording {
    use super::{MetadataEditor, Result};
    use camino::{Utf8Path, Utf8PathBuf};
    use std::cell::RefCell;

    /// One recorded invocation of a [`MetadataEditor`] capability.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum EditorCall {
        /// `set_identity` was invoked.
        SetIdentity {
            /// Library whose identity was rewritten.
            library: Utf8PathBuf,
            /// Identity that was assigned.
            identity: String,
        },
        /// `replace_reference` was invoked.
        ReplaceReference {
            /// Binary whose dependency table was rewritten.
            binary: Utf8PathBuf,
            /// Reference that was replaced.
            old: String,
            /// Reference that was written instead.
            new: String,
        },
    }

    /// Test double that records capability calls without touching binaries.
    #[derive(Debug, Default)]
    pub struct RecordingEditor {
        calls: RefCell<Vec<EditorCall>>,
    }

    impl RecordingEditor {
        /// Create an editor with no recorded calls.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Calls recorded so far, in invocation order.
        #[must_use]
        pub fn calls(&self) -> Vec<EditorCall> {
            self.calls.borrow().clone()
        }
    }

    impl MetadataEditor for RecordingEditor {
        fn set_identity(&self, library: &Utf8Path, identity: &str) -> Result<()> {
            self.calls.borrow_mut().push(EditorCall::SetIdentity {
                library: library.to_owned(),
                identity: identity.to_owned(),
            });
            Ok(())
        }

        fn replace_reference(&self, binary: &Utf8Path, old: &str, new: &str) -> Result<()> {
            self.calls.borrow_mut().push(EditorCall::ReplaceReference {
                binary: binary.to_owned(),
                old: old.to_owned(),
                new: new.to_owned(),
            });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::{EditorCall, RecordingEditor};
