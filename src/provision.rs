//! Filesystem provisioning and payload installation.
//!
//! The install target describes where everything lands: the binary directory,
//! the tasker data directory, and its log subdirectory, all rooted under the
//! invoking user's home. Directory creation is idempotent; re-running the
//! installer over an existing layout is a no-op success.

use crate::dirs::BaseDirs;
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Canonical name of the installed binary and of the data directory stem.
pub const TOOL_NAME: &str = "tasker";

/// Destination description for one installation.
///
/// Built once at orchestration start and immutable thereafter. All paths are
/// rooted under the invoking user's home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Directory the executable is installed into (`~/.local/bin`).
    pub bin_dir: Utf8PathBuf,
    /// Data directory (`~/.tasker`).
    pub data_dir: Utf8PathBuf,
    /// Log subdirectory (`~/.tasker/logs`).
    pub log_dir: Utf8PathBuf,
    /// Name of the installed binary.
    pub binary_name: String,
}

impl InstallTarget {
    /// Resolves the target from the platform base directories.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::HomeNotFound`] when the home directory
    /// cannot be determined.
    pub fn from_dirs(dirs: &dyn BaseDirs) -> Result<Self> {
        let home = dirs.home_dir().ok_or(InstallerError::HomeNotFound)?;
        Ok(Self::from_home(&home))
    }

    /// Builds the target layout beneath an explicit home directory.
    #[must_use]
    pub fn from_home(home: &Utf8Path) -> Self {
        let data_dir = home.join(format!(".{TOOL_NAME}"));
        Self {
            bin_dir: home.join(".local").join("bin"),
            log_dir: data_dir.join("logs"),
            data_dir,
            binary_name: TOOL_NAME.to_owned(),
        }
    }

    /// Full path of the installed binary.
    #[must_use]
    pub fn installed_binary(&self) -> Utf8PathBuf {
        self.bin_dir.join(&self.binary_name)
    }
}

/// Checks that the executable payload exists in the working context.
///
/// This check runs before any directory is created, so an aborted run leaves
/// no trace. There is no attempt to locate the payload elsewhere.
///
/// # Errors
///
/// Returns [`InstallerError::PayloadMissing`] when the file is absent.
pub fn payload_present(payload: &Utf8Path) -> Result<()> {
    if !payload.is_file() {
        return Err(InstallerError::PayloadMissing {
            path: payload.to_owned(),
        });
    }
    Ok(())
}

/// Creates the binary, data, and log directories if absent.
///
/// A single recursive creation covers the data directory via its log
/// subdirectory. Idempotent: existing directories are a no-op success, never
/// an error. No content is written by this step.
///
/// # Errors
///
/// Returns the underlying I/O error when a directory cannot be created.
pub fn provision_directories(target: &InstallTarget) -> Result<()> {
    std::fs::create_dir_all(&target.bin_dir)?;
    std::fs::create_dir_all(&target.log_dir)?;
    Ok(())
}

/// Copies the payload into the binary directory and marks it executable.
///
/// The copy preserves file contents; the permission bits are then set to
/// `0755` explicitly regardless of the source mode, so the installed binary
/// is always owner-executable and world-readable.
///
/// # Errors
///
/// Returns [`InstallerError::PayloadMissing`] when the payload is absent and
/// [`InstallerError::PayloadInstall`] when the copy or permission step fails.
pub fn install_payload(target: &InstallTarget, payload: &Utf8Path) -> Result<Utf8PathBuf> {
    payload_present(payload)?;
    let destination = target.installed_binary();

    std::fs::copy(payload, &destination).map_err(|e| InstallerError::PayloadInstall {
        reason: format!("copying {payload} to {destination}: {e}"),
    })?;

    set_executable(&destination)?;
    Ok(destination)
}

#[cfg(unix)]
fn set_executable(path: &Utf8Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|e| InstallerError::PayloadInstall {
            reason: format!("reading permissions of {path}: {e}"),
        })?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).map_err(|e| InstallerError::PayloadInstall {
        reason: format!("setting permissions on {path}: {e}"),
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Utf8Path) -> Result<()> {
    Ok(())
}
