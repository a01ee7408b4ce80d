//! CLI argument definitions for the ORGE installer.
//!
//! This module defines the command-line interface using clap. Each platform
//! staging command carries the typed configuration for one install run,
//! constructed once at process start; it is separated from the main
//! entrypoint to keep the binary focused on orchestration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Stage ORGE native library artifacts for packaging.
#[derive(Parser, Debug)]
#[command(name = "orge-installer")]
#[command(version, about)]
#[command(long_about = concat!(
    "Stage ORGE native library artifacts for packaging.\n\n",
    "The build produces platform-specific libraries under versioned file ",
    "names. This tool copies the required artifacts into the packaging ",
    "layout under stable, version-free names and rewrites the embedded ",
    "library identity metadata (ELF SONAME, Mach-O install-name) so ",
    "dependent binaries link against the canonical name rather than a ",
    "version baked in at build time.\n\n",
    "Each platform command is invoked by the build system with the staging ",
    "directories and the link mode the application was configured with.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Stage a static Linux build:\n",
    "    $ orge-installer linux build/lib out static 1.3.268\n\n",
    "  Stage a shared macOS build, accepting any installed loader version:\n",
    "    $ orge-installer macos build/lib out shared\n\n",
    "  Stage a Windows build:\n",
    "    $ orge-installer windows build/lib build/bin out/lib out/bin static\n\n",
    "  List C++ sources for the build system:\n",
    "    $ orge-installer sources src\n",
))]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stage Linux artifacts and rewrite ELF metadata.
    Linux(DesktopArgs),
    /// Stage macOS artifacts and rewrite Mach-O metadata.
    Macos(DesktopArgs),
    /// Stage Windows import libraries and DLLs.
    Windows(WindowsArgs),
    /// List build source files under a source tree.
    Sources(SourcesArgs),
}

/// Arguments shared by the Linux and macOS staging commands.
#[derive(Parser, Debug, Clone)]
pub struct DesktopArgs {
    /// Directory holding the built library artifacts.
    pub source_dir: Utf8PathBuf,

    /// Directory receiving the staged artifacts.
    pub dest_dir: Utf8PathBuf,

    /// Link mode the application was configured with.
    pub link_mode: LinkMode,

    /// Exact Vulkan loader version; any single installed version is accepted
    /// when omitted.
    pub vulkan_version: Option<String>,
}

/// Arguments for the Windows staging command.
#[derive(Parser, Debug, Clone)]
pub struct WindowsArgs {
    /// Directory holding the built import libraries.
    pub source_lib_dir: Utf8PathBuf,

    /// Directory holding the built DLLs.
    pub source_bin_dir: Utf8PathBuf,

    /// Directory receiving the staged import libraries.
    pub dest_lib_dir: Utf8PathBuf,

    /// Directory receiving the staged DLLs.
    pub dest_bin_dir: Utf8PathBuf,

    /// Link mode the application was configured with.
    pub link_mode: LinkMode,
}

/// Arguments for the sources listing command.
#[derive(Parser, Debug, Clone)]
pub struct SourcesArgs {
    /// Source tree to enumerate.
    #[arg(default_value = "src")]
    pub root: Utf8PathBuf,

    /// File extension to match, without the leading dot.
    #[arg(long, value_name = "EXT", default_value = "cpp")]
    pub extension: String,
}

/// Link mode of the consuming application.
///
/// The build system passes the mode through verbatim, so parsing never
/// fails: anything other than `static` or `shared` maps to
/// [`LinkMode::Neither`], which disables every mode-conditional install and
/// relink action while the unconditional ones still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Third-party code is embedded directly into the application.
    Static,
    /// Third-party code is resolved by the dynamic loader at run time.
    Shared,
    /// Neither mode: only unconditional staging applies.
    Neither,
}

impl FromStr for LinkMode {
    type Err = Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Infallible> {
        Ok(match value {
            "static" => Self::Static,
            "shared" => Self::Shared,
            _ => Self::Neither,
        })
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Static => "static",
            Self::Shared => "shared",
            Self::Neither => "neither",
        };
        write!(f, "{text}")
    }
}
