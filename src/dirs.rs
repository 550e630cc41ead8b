//! Directory resolution for installer targets.
//!
//! All installation paths are rooted under the invoking user's home directory;
//! nothing is ever placed beneath a system-owned prefix. The [`BaseDirs`] trait
//! is the seam that lets tests substitute a temporary home.

use camino::Utf8PathBuf;

/// Resolves the base directories installation paths derive from.
pub trait BaseDirs {
    /// Returns the invoking user's home directory, when it can be determined
    /// and is valid UTF-8.
    fn home_dir(&self) -> Option<Utf8PathBuf>;
}

/// Resolves directories from the host platform conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn home_dir(&self) -> Option<Utf8PathBuf> {
        let dirs = directories_next::UserDirs::new()?;
        Utf8PathBuf::from_path_buf(dirs.home_dir().to_path_buf()).ok()
    }
}
