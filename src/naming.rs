//! Platform naming conventions for native library artifacts.
//!
//! Build output carries version-embedded, platform-idiomatic file names;
//! staged output carries stable, version-free names that dependent binaries
//! can link against. This module holds both sides of that mapping so no call
//! site assembles file names by hand.

use crate::library_name::LibraryName;

/// Versioned ELF shared object name, e.g. `libvulkan.so.1.3.268`.
///
/// # Examples
///
/// ```
/// use orge_installer::library_name::LibraryName;
/// use orge_installer::naming::versioned_shared_object;
///
/// let name = LibraryName::from("vulkan");
/// assert_eq!(versioned_shared_object(&name, "1.3.268"), "libvulkan.so.1.3.268");
/// ```
#[must_use]
pub fn versioned_shared_object(name: &LibraryName, version: &str) -> String {
    format!("lib{name}.so.{version}")
}

/// Canonical ELF shared object name, e.g. `libvulkan.so`.
///
/// This doubles as the canonical SONAME recorded in the staged library.
#[must_use]
pub fn canonical_shared_object(name: &LibraryName) -> String {
    format!("lib{name}.so")
}

/// Prefix and suffix matching any version of an ELF shared object.
///
/// `libvulkan.so.` / `` (empty) matches `libvulkan.so.1.3.268` but not the
/// canonical `libvulkan.so` itself.
#[must_use]
pub fn shared_object_pattern(name: &LibraryName) -> (String, String) {
    (format!("lib{name}.so."), String::new())
}

/// Versioned Mach-O dynamic library name, e.g. `libvulkan.1.3.268.dylib`.
#[must_use]
pub fn versioned_dylib(name: &LibraryName, version: &str) -> String {
    format!("lib{name}.{version}.dylib")
}

/// Canonical Mach-O dynamic library name, e.g. `libvulkan.dylib`.
#[must_use]
pub fn canonical_dylib(name: &LibraryName) -> String {
    format!("lib{name}.dylib")
}

/// Prefix and suffix matching any version of a Mach-O dynamic library.
///
/// `libvulkan.` / `.dylib` matches `libvulkan.1.3.268.dylib` but not the
/// canonical `libvulkan.dylib` itself.
#[must_use]
pub fn dylib_pattern(name: &LibraryName) -> (String, String) {
    (format!("lib{name}."), ".dylib".to_owned())
}

/// Canonical rpath-relative install-name, e.g. `@rpath/libvulkan.dylib`.
#[must_use]
pub fn rpath_install_name(name: &LibraryName) -> String {
    format!("@rpath/{}", canonical_dylib(name))
}

/// Unix static archive name, e.g. `libSDL3.a`.
#[must_use]
pub fn static_archive(name: &LibraryName) -> String {
    format!("lib{name}.a")
}

/// Windows import library name, e.g. `vulkan-1.lib`.
#[must_use]
pub fn import_library(name: &LibraryName) -> String {
    format!("{name}.lib")
}

/// Windows dynamic-link library name, e.g. `vulkan-1.dll`.
#[must_use]
pub fn dynamic_link_library(name: &LibraryName) -> String {
    format!("{name}.dll")
}
