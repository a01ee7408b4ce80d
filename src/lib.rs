//! ORGE installer library.
//!
//! This crate provides the staging step of the ORGE native-library packaging
//! pipeline: locating versioned build artifacts, copying them into the
//! packaging layout under canonical names, and rewriting embedded library
//! identities so dependent binaries link against version-free names. It is
//! used by the `orge-installer` CLI binary and can be consumed
//! programmatically for testing or custom packaging workflows.
//!
//! # Modules
//!
//! - [`artifact`] - Versioned artifact location
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types
//! - [`library_name`] - Semantic wrapper for library base names
//! - [`linux`] - Linux install plan
//! - [`macos`] - macOS install plan
//! - [`naming`] - Platform library naming conventions
//! - [`pipeline`] - Install plan execution
//! - [`relink`] - Embedded identity rewriting via platform tools
//! - [`sources`] - Build source enumeration
//! - [`stager`] - Destination staging and file copying
//! - [`windows`] - Windows install plan

pub mod artifact;
pub mod cli;
pub mod error;
pub mod library_name;
pub mod linux;
pub mod macos;
pub mod naming;
pub mod pipeline;
pub mod relink;
pub mod sources;
pub mod stager;
pub mod windows;
