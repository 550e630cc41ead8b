//! Preconditions checked before any side effect occurs.
//!
//! Two hard preconditions gate the installation: the process must not run
//! with an elevated identity, and the host Python runtime must meet the
//! minimum supported version. Both abort the whole run when violated.

use crate::error::{InstallerError, Result};
use crate::exec::CommandExecutor;

/// Minimum supported Python version as `(major, minor)`.
pub const MIN_PYTHON: (u32, u32) = (3, 6);

/// One-liner handed to the interpreter to report its own version.
const VERSION_PROBE: &str = "import sys; print('{}.{}'.format(*sys.version_info[:2]))";

/// Refuses to proceed when running with an elevated identity.
///
/// tasker works entirely in user space; running the installer as root would
/// place files under root's home and is always a mistake.
///
/// # Errors
///
/// Returns [`InstallerError::ElevatedUser`] when the effective uid is 0.
pub fn check_not_root() -> Result<()> {
    if effective_uid_is_root() {
        return Err(InstallerError::ElevatedUser);
    }
    Ok(())
}

#[cfg(unix)]
fn effective_uid_is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn effective_uid_is_root() -> bool {
    false
}

/// Checks that the host Python runtime meets [`MIN_PYTHON`].
///
/// Runs a version probe through the executor and compares the reported
/// `major.minor` against the fixed threshold. No side effects.
///
/// # Errors
///
/// Returns [`InstallerError::RuntimeProbe`] when the interpreter cannot be
/// executed or reports an unparseable version, and
/// [`InstallerError::RuntimeTooOld`] when the version is below the minimum.
pub fn check_python(executor: &dyn CommandExecutor) -> Result<(u32, u32)> {
    let output = executor
        .run("python3", &["-c", VERSION_PROBE])
        .map_err(|e| InstallerError::RuntimeProbe {
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InstallerError::RuntimeProbe {
            reason: format!("python3 exited with {}: {}", output.status, stderr.trim()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let (major, minor) =
        parse_python_version(&stdout).ok_or_else(|| InstallerError::RuntimeProbe {
            reason: format!("unexpected version output: {}", stdout.trim()),
        })?;

    if (major, minor) < MIN_PYTHON {
        return Err(InstallerError::RuntimeTooOld { major, minor });
    }

    Ok((major, minor))
}

/// Parses a `major.minor` version string as printed by the probe.
#[must_use]
pub fn parse_python_version(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}
