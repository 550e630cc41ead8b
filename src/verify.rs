//! Search-path verification for the installed binary.
//!
//! A read-only check: the installer never mutates `PATH` or any startup file
//! here. When the binary directory is missing from the search path the
//! orchestrator prints remediation text and carries a flag into the final
//! summary; the exit code is unaffected.

use camino::Utf8Path;
use std::ffi::OsStr;

/// Returns whether `dir` appears as a segment of the given search path.
///
/// Segment comparison, not substring matching, so `/home/u/.local/bin` does
/// not count when only `/home/u/.local/bin2` is present.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use tasker_installer::verify::is_dir_on_search_path;
///
/// let dir = Utf8Path::new("/home/user/.local/bin");
/// assert!(is_dir_on_search_path(dir, "/usr/bin:/home/user/.local/bin".as_ref()));
/// assert!(!is_dir_on_search_path(dir, "/usr/bin".as_ref()));
/// ```
#[must_use]
pub fn is_dir_on_search_path(dir: &Utf8Path, search_path: &OsStr) -> bool {
    std::env::split_paths(search_path).any(|segment| segment == dir.as_std_path())
}

/// Checks the process environment's `PATH` for the binary directory.
#[must_use]
pub fn verify_search_path(bin_dir: &Utf8Path) -> bool {
    std::env::var_os("PATH")
        .map(|path| is_dir_on_search_path(bin_dir, &path))
        .unwrap_or(false)
}
