//! Install plan construction and execution.
//!
//! A plan is derived once from the typed platform configuration: an ordered
//! list of artifact copies and an ordered list of relink actions. Execution
//! is strictly sequential and stops at the first failure, so a failed copy
//! guarantees that no relink action runs.

use crate::artifact::ArtifactRequest;
use crate::error::{InstallerError, Result};
use crate::relink::MetadataEditor;
use crate::stager::InstallTarget;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

/// One artifact copy: a located source staged under a canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    /// Source resolution request.
    pub request: ArtifactRequest,
    /// Destination directory.
    pub target: InstallTarget,
    /// Canonical destination file name.
    pub dest_name: String,
}

/// One metadata rewrite, applied only after every copy has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelinkAction {
    /// Overwrite a staged library's own recorded identity.
    SetIdentity {
        /// Library to rewrite.
        library: Utf8PathBuf,
        /// Canonical identity to assign.
        identity: String,
    },
    /// Repoint a dependent binary's recorded reference.
    ReplaceReference {
        /// Dependent binary to rewrite.
        binary: Utf8PathBuf,
        /// Versioned reference currently recorded.
        old: String,
        /// Canonical reference to record instead.
        new: String,
    },
}

impl RelinkAction {
    /// File the action rewrites; it must exist before the tool is invoked.
    #[must_use]
    pub fn target_path(&self) -> &Utf8Path {
        match self {
            Self::SetIdentity { library, .. } => library,
            Self::ReplaceReference { binary, .. } => binary,
        }
    }
}

/// Ordered work for one install run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Artifact copies, in execution order.
    pub copies: Vec<PlannedCopy>,
    /// Relink actions, applied after the copies.
    pub relinks: Vec<RelinkAction>,
}

/// Execute `plan`: locate every artifact, copy each in order, then apply the
/// relink actions.
///
/// # Errors
///
/// Propagates the first failure from location, copying, or relinking.
/// Nothing downstream of a failure executes; in particular, a missing
/// artifact aborts the run before any relink action fires.
pub fn execute(plan: &InstallPlan, editor: &dyn MetadataEditor, out: &mut dyn Write) -> Result<()> {
    let mut located = Vec::with_capacity(plan.copies.len());
    for copy in &plan.copies {
        located.push(copy.request.resolve()?);
    }

    for (copy, source) in plan.copies.iter().zip(&located) {
        copy.target.install(source, &copy.dest_name, out)?;
    }

    for action in &plan.relinks {
        apply_relink(action, editor)?;
    }

    Ok(())
}

fn apply_relink(action: &RelinkAction, editor: &dyn MetadataEditor) -> Result<()> {
    let target = action.target_path();
    if !target.is_file() {
        return Err(InstallerError::MissingArtifact {
            path: target.to_owned(),
        });
    }

    match action {
        RelinkAction::SetIdentity { library, identity } => editor.set_identity(library, identity),
        RelinkAction::ReplaceReference { binary, old, new } => {
            editor.replace_reference(binary, old, new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relink::{EditorCall, RecordingEditor};
    use tempfile::TempDir;

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("temp dir path not UTF-8")
    }

    fn copy_of(source_dir: &Utf8Path, file_name: &str, dest: &Utf8Path) -> PlannedCopy {
        PlannedCopy {
            request: ArtifactRequest::exact(source_dir, file_name),
            target: InstallTarget::new(dest.to_owned()),
            dest_name: file_name.to_owned(),
        }
    }

    #[test]
    fn copies_run_in_order_then_relinks_apply() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        std::fs::write(dir.join("libSDL3.a"), b"sdl").expect("write");
        std::fs::write(dir.join("libyaml-cpp.a"), b"yaml").expect("write");
        let dest = dir.join("out");

        let plan = InstallPlan {
            copies: vec![
                copy_of(&dir, "libSDL3.a", &dest),
                copy_of(&dir, "libyaml-cpp.a", &dest),
            ],
            relinks: vec![RelinkAction::SetIdentity {
                library: dest.join("libSDL3.a"),
                identity: "libSDL3.a".to_owned(),
            }],
        };

        let editor = RecordingEditor::new();
        let mut out = Vec::new();
        execute(&plan, &editor, &mut out).expect("plan should execute");

        let progress = String::from_utf8(out).expect("progress was not UTF-8");
        let sdl_line = progress.find("libSDL3.a").expect("first copy reported");
        let yaml_line = progress.find("libyaml-cpp.a").expect("second copy reported");
        assert!(sdl_line < yaml_line);
        assert_eq!(editor.calls().len(), 1);
    }

    #[test]
    fn missing_artifact_aborts_before_any_relink() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let dest = dir.join("out");

        let plan = InstallPlan {
            copies: vec![copy_of(&dir, "libvulkan.so.1.3.268", &dest)],
            relinks: vec![RelinkAction::SetIdentity {
                library: dest.join("libvulkan.so"),
                identity: "libvulkan.so".to_owned(),
            }],
        };

        let editor = RecordingEditor::new();
        let mut out = Vec::new();
        let err = execute(&plan, &editor, &mut out).expect_err("missing artifact must abort");

        assert!(matches!(err, InstallerError::MissingArtifact { .. }));
        assert!(editor.calls().is_empty(), "no relink after a failed copy");
        assert!(!dest.exists(), "destination untouched for the failed run");
    }

    #[test]
    fn relink_requires_the_target_binary_to_exist() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        let dest = dir.join("out");

        let plan = InstallPlan {
            copies: Vec::new(),
            relinks: vec![RelinkAction::ReplaceReference {
                binary: dest.join("liborge.so"),
                old: "libvulkan.so.1.3.268".to_owned(),
                new: "libvulkan.so".to_owned(),
            }],
        };

        let editor = RecordingEditor::new();
        let mut out = Vec::new();
        let err = execute(&plan, &editor, &mut out).expect_err("absent binary must abort");

        assert!(matches!(err, InstallerError::MissingArtifact { path } if path.ends_with("liborge.so")));
        assert!(editor.calls().is_empty());
    }

    #[test]
    fn relink_actions_reach_the_editor_with_their_values() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = utf8_dir(&temp);
        std::fs::write(dir.join("liborge.so"), b"engine").expect("write");

        let plan = InstallPlan {
            copies: Vec::new(),
            relinks: vec![RelinkAction::ReplaceReference {
                binary: dir.join("liborge.so"),
                old: "libvulkan.so.1.3.268".to_owned(),
                new: "libvulkan.so".to_owned(),
            }],
        };

        let editor = RecordingEditor::new();
        let mut out = Vec::new();
        execute(&plan, &editor, &mut out).expect("plan should execute");

        assert_eq!(
            editor.calls(),
            vec![EditorCall::ReplaceReference {
                binary: dir.join("liborge.so"),
                old: "libvulkan.so.1.3.268".to_owned(),
                new: "libvulkan.so".to_owned(),
            }]
        );
    }
}
