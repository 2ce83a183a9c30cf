//! Test utilities used across integration and unit tests.
//!
//! Helpers here lay out listing fixtures on disk and manage environment
//! variables for configuration tests.

use std::fs;
use std::path::Path;

use crate::pipeline::Catalog;

/// Create `base/name` holding a `logolist.info` listing with `listing` as
/// its content plus an empty file for each of `icons`.
///
/// # Panics
///
/// Panics if the fixture cannot be written.
///
/// # Examples
///
/// ```
/// use iconmap::test_utils::write_catalog;
///
/// let dir = tempfile::tempdir().expect("tempdir");
/// let catalog = write_catalog(dir.path(), "Source", "Name\tIcon\n", &["roku.png"]);
/// assert!(catalog.listing.ends_with("Source/logolist.info"));
/// assert!(catalog.icon_dir.join("roku.png").exists());
/// ```
#[must_use]
pub fn write_catalog(base: &Path, name: &str, listing: &str, icons: &[&str]) -> Catalog {
    let dir = base.join(name);
    fs::create_dir_all(&dir).expect("create catalog dir");
    let listing_path = dir.join("logolist.info");
    fs::write(&listing_path, listing).expect("write listing");
    for icon in icons {
        fs::write(dir.join(icon), b"").expect("write icon");
    }
    Catalog::new(listing_path, dir)
}

/// Set an environment variable for testing.
///
/// # Safety
///
/// Callers serialise environment access with `serial_test`.
pub fn set_var<K: AsRef<std::ffi::OsStr>, V: AsRef<std::ffi::OsStr>>(key: K, value: V) {
    unsafe { std::env::set_var(key, value) }
}

/// Remove an environment variable set during testing.
///
/// # Safety
///
/// Callers serialise environment access with `serial_test`.
pub fn remove_var<K: AsRef<std::ffi::OsStr>>(key: K) {
    unsafe { std::env::remove_var(key) }
}
