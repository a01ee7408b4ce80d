//! macOS install plan.
//!
//! Stages the Vulkan loader under its canonical name with an rpath-relative
//! install-name and, depending on the link mode, the static third-party
//! archives or the identity rewrite of the staged `liborge.dylib`.

use crate::artifact::ArtifactRequest;
use crate::cli::{DesktopArgs, LinkMode};
use crate::error::Result;
use crate::library_name::LibraryName;
use crate::naming;
use crate::pipeline::{InstallPlan, PlannedCopy, RelinkAction};
use crate::stager::InstallTarget;

const VULKAN: &str = "vulkan";
const ENGINE: &str = "orge";
const STATIC_LIBRARIES: [&str; 3] = ["SDL3", "yaml-cpp", "ssl"];

/// Build the install plan for a macOS staging run.
///
/// The loader copy and its install-name rewrite are unconditional; the
/// static archives install only under `static`, and the engine library's
/// identity rewrite only under `shared` (the engine library is produced by
/// the prior build step and must already be staged).
///
/// # Errors
///
/// Fails when no Vulkan version was given and the loader cannot be located
/// in the source directory, or more than one candidate matches.
pub fn plan(args: &DesktopArgs) -> Result<InstallPlan> {
    let vulkan = LibraryName::from(VULKAN);
    let canonical = naming::canonical_dylib(&vulkan);
    let target = InstallTarget::new(args.dest_dir.clone());

    let request = match args.vulkan_version.as_deref() {
        Some(version) => {
            ArtifactRequest::exact(&args.source_dir, naming::versioned_dylib(&vulkan, version))
        }
        None => {
            let (prefix, suffix) = naming::dylib_pattern(&vulkan);
            ArtifactRequest::versioned(&args.source_dir, prefix, suffix)
        }
    };
    let source = request.resolve()?;
    let versioned_name = source
        .file_name()
        .map_or_else(|| canonical.clone(), str::to_owned);

    let mut copies = vec![PlannedCopy {
        request: ArtifactRequest::exact(&args.source_dir, versioned_name),
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
        identity: naming::rpath_install_name(&vulkan),
    }];

    if args.link_mode == LinkMode::Shared {
        let engine = LibraryName::from(ENGINE);
        relinks.push(RelinkAction::SetIdentity {
            library: target.staged_path(&naming::canonical_dylib(&engine)),
            identity: naming::rpath_install_name(&engine),
        });
    }

    Ok(InstallPlan { copies, relinks })
}
