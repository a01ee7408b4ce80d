//! Windows install plan.
//!
//! Stages the Vulkan import library and DLL into their split lib/bin
//! destinations and, under `static`, the third-party import libraries.
//! Windows artifacts carry no embedded identity in this design, so the plan
//! never contains relink actions.

use crate::artifact::ArtifactRequest;
use crate::cli::{LinkMode, WindowsArgs};
use crate::library_name::LibraryName;
use crate::naming;
use crate::pipeline::{InstallPlan, PlannedCopy};
use crate::stager::InstallTarget;

const VULKAN: &str = "vulkan-1";
const STATIC_LIBRARIES: [&str; 2] = ["SDL3", "yaml-cpp"];

/// Build the install plan for a Windows staging run.
#[must_use]
pub fn plan(args: &WindowsArgs) -> InstallPlan {
    let vulkan = LibraryName::from(VULKAN);
    let lib_target = InstallTarget::new(args.dest_lib_dir.clone());
    let bin_target = InstallTarget::new(args.dest_bin_dir.clone());

    let import = naming::import_library(&vulkan);
    let dll = naming::dynamic_link_library(&vulkan);
    let mut copies = vec![
        PlannedCopy {
            request: ArtifactRequest::exact(&args.source_lib_dir, import.clone()),
            target: lib_target.clone(),
            dest_name: import,
        },
        PlannedCopy {
            request: ArtifactRequest::exact(&args.source_bin_dir, dll.clone()),
            target: bin_target,
            dest_name: dll,
        },
    ];

    if args.link_mode == LinkMode::Static {
        for name in STATIC_LIBRARIES {
            let staged = naming::import_library(&LibraryName::from(name));
            copies.push(PlannedCopy {
                request: ArtifactRequest::exact(&args.source_lib_dir, staged.clone()),
                target: lib_target.clone(),
                dest_name: staged,
            });
        }
    }

    InstallPlan {
        copies,
        relinks: Vec::new(),
    }
}
