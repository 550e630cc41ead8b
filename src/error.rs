//! Error types for the tasker installer CLI.
//!
//! This module defines semantic error variants that provide actionable guidance
//! when installation fails. Only fatal conditions are modelled here; optional
//! steps (shell integration, search-path verification) report their outcomes
//! without raising errors.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during the installation process.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// The installer was started with an elevated identity.
    #[error("refusing to run as root: tasker installs into user space and never needs sudo")]
    ElevatedUser,

    /// The Python runtime version could not be determined.
    #[error("could not determine the Python version: {reason}")]
    RuntimeProbe {
        /// Description of why the probe failed.
        reason: String,
    },

    /// The Python runtime is older than the supported minimum.
    #[error("Python {major}.{minor} found; Python 3.6 or newer is required")]
    RuntimeTooOld {
        /// Detected major version.
        major: u32,
        /// Detected minor version.
        minor: u32,
    },

    /// Every dependency resolution strategy failed.
    #[error("could not install {dependency} automatically")]
    DependencyUnresolved {
        /// Name of the unresolved dependency.
        dependency: &'static str,
    },

    /// The executable payload was not found in the working context.
    #[error("{path} not found; run the installer from the tasker source directory")]
    PayloadMissing {
        /// Path where the payload was expected.
        path: Utf8PathBuf,
    },

    /// Copying the payload or setting its permissions failed.
    #[error("failed to install the tasker executable: {reason}")]
    PayloadInstall {
        /// Description of the copy or permission failure.
        reason: String,
    },

    /// The invoking user's home directory could not be resolved.
    #[error("could not determine the home directory")]
    HomeNotFound,

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Clone for InstallerError {
    fn clone(&self) -> Self {
        match self {
            InstallerError::ElevatedUser => InstallerError::ElevatedUser,
            InstallerError::RuntimeProbe { reason } => InstallerError::RuntimeProbe {
                reason: reason.clone(),
            },
            InstallerError::RuntimeTooOld { major, minor } => InstallerError::RuntimeTooOld {
                major: *major,
                minor: *minor,
            },
            InstallerError::DependencyUnresolved { dependency } => {
                InstallerError::DependencyUnresolved { dependency }
            }
            InstallerError::PayloadMissing { path } => {
                InstallerError::PayloadMissing { path: path.clone() }
            }
            InstallerError::PayloadInstall { reason } => InstallerError::PayloadInstall {
                reason: reason.clone(),
            },
            InstallerError::HomeNotFound => InstallerError::HomeNotFound,
            // Lossy: only ErrorKind and formatted message are preserved; any
            // original source chain is discarded because std::io::Error cannot
            // be cloned directly.
            InstallerError::Io(source) => {
                InstallerError::Io(std::io::Error::new(source.kind(), source.to_string()))
            }
        }
    }
}

/// Result type alias using [`InstallerError`].
pub type Result<T> = std::result::Result<T, InstallerError>;
