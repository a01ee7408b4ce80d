//! Linux install plan.
//!
//! Stages the Vulkan loader under its canonical SONAME and, depending on the
//! link mode, the static third-party archives or the rewrite that repoints
//! `liborge.so` at the canonical loader name.

use crate::artifact::ArtifactRequest;
use crate::cli::{DesktopArgs, LinkMode};
use crate::error::Result;
use crate::library_name::LibraryName;
use crate::naming;
use crate::pipeline::{InstallPlan, PlannedCopy, RelinkAction};
use crate::stager::InstallTarget;

const VULKAN: &str = "vulkan";
const ENGINE: &str = "orge";
const STATIC_LIBRARIES: [&str; 2] = ["SDL3", "yaml-cpp"];

/// Build the install plan for a Linux staging run.
///
/// The loader copy and its SONAME rewrite are unconditional; the static
/// archives install only under `static`, and the `liborge.so` dependency
/// rewrite only under `shared`.
///
/// # Errors
///
/// Fails when no Vulkan version was given and the loader cannot be located
/// in the source directory, or more than one candidate matches.
pub fn plan(args: &DesktopArgs) -> Result<InstallPlan> {
    let vulkan = LibraryName::from(VULKAN);
    let canonical = naming::canonical_shared_object(&vulkan);
    let target = InstallTarget::new(args.dest_dir.clone());

    let request = match args.vulkan_version.as_deref() {
        Some(version) => ArtifactRequest::exact(
            &args.source_dir,
            naming::versioned_shared_object(&vulkan, version),
        ),
        None => {
            let (prefix, suffix) = naming::shared_object_pattern(&vulkan);
            ArtifactRequest::versioned(&args.source_dir, prefix, suffix)
        }
    };
    let source = request.resolve()?;
    let versioned_name = source
        .file_name()
        .map_or_else(|| canonical.clone(), str::to_owned);

    let mut copies = vec![PlannedCopy {
        request: ArtifactRequest::exact(&args.source_dir, versioned_name.clone()),
        target: target.clone(),
        dest_name: canonical.clone(),
    }];

    if args.link_mode == LinkMode::Static {
        for name in STATIC_LIBRARIES {
            let archive = naming::static_archive(&LibraryName::from(name));
            copies.push(PlannedCopy {
                request: ArtifactRequest::exact(&args.source_dir, archive.clone()),
                target: target.clone(),
                dest_name: archive,
            });
        }
    }

    let mut relinks = vec![RelinkAction::SetIdentity {
        library: target.staged_path(&canonical),
        identity: canonical.clone(),
    }];

    if args.link_mode == LinkMode::Shared {
        let engine = naming::canonical_shared_object(&LibraryName::from(ENGINE));
        relinks.push(RelinkAction::ReplaceReference {
            binary: target.staged_path(&engine),
            old: versioned_name,
            new: canonical,
        });
    }

    Ok(InstallPlan { copies, relinks })
}
