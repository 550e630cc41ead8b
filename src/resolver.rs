//! Dependency resolution for the psutil runtime dependency.
//!
//! tasker needs psutil at runtime. The resolver satisfies it with the least
//! invasive method that works, trying each strategy in a fixed priority order
//! and stopping at the first success:
//!
//! 1. import probe - the dependency may already be present;
//! 2. `pip install --user` - user-scoped, no elevation;
//! 3. system package managers (apt, yum, dnf, pacman) - the only strategies
//!    that request elevation, and only per attempt;
//! 4. pipx - isolated installer fallback.
//!
//! A strategy whose underlying tool is absent from the search path is skipped
//! silently; it counts as not attempted, not as failed. Subprocess output is
//! captured and discarded so the resolver's own status lines remain the single
//! source of truth.

use crate::error::{InstallerError, Result};
use crate::exec::{CommandExecutor, ToolLocator, command_succeeds};
use crate::report::{Reporter, Status};

/// The single runtime dependency this resolver satisfies.
pub const DEPENDENCY: &str = "psutil";

/// How the dependency ended up satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The dependency was importable before any install action ran.
    AlreadyPresent,
    /// One of the install strategies succeeded.
    Installed {
        /// Display name of the strategy that succeeded.
        method: String,
    },
}

/// A system package manager that can supply the dependency.
///
/// These are the only strategies that request elevation, and they do so per
/// attempt via `sudo`, never for the whole program.
#[derive(Debug, Clone, Copy)]
pub struct SystemManager {
    /// Name of the manager binary probed on the search path.
    pub binary: &'static str,
    /// Display name used in status lines.
    pub label: &'static str,
    /// Full argument vector passed to `sudo`.
    pub install_args: &'static [&'static str],
    /// Manual command suggested when automatic resolution is exhausted.
    pub manual_command: &'static str,
}

/// Candidate system package managers in fixed priority order.
pub const SYSTEM_MANAGERS: [SystemManager; 4] = [
    SystemManager {
        binary: "apt",
        label: "apt (Ubuntu/Debian)",
        install_args: &["apt", "install", "-y", "python3-psutil"],
        manual_command: "sudo apt install python3-psutil     # Ubuntu/Debian",
    },
    SystemManager {
        binary: "yum",
        label: "yum (CentOS/RHEL)",
        install_args: &["yum", "install", "-y", "python3-psutil"],
        manual_command: "sudo yum install python3-psutil     # CentOS/RHEL",
    },
    SystemManager {
        binary: "dnf",
        label: "dnf (Fedora)",
        install_args: &["dnf", "install", "-y", "python3-psutil"],
        manual_command: "sudo dnf install python3-psutil     # Fedora",
    },
    SystemManager {
        binary: "pacman",
        label: "pacman (Arch Linux)",
        install_args: &["pacman", "-S", "--noconfirm", "python-psutil"],
        manual_command: "sudo pacman -S python-psutil        # Arch Linux",
    },
];

/// Manual fallback suggested when no package manager is usable.
const VENV_FALLBACK: &str =
    "python3 -m venv venv && venv/bin/pip install psutil  # virtual environment";

/// Manual remediation commands, one per known system package manager plus the
/// virtual-environment fallback, in the order they are suggested.
#[must_use]
pub fn remediation_commands() -> Vec<&'static str> {
    SYSTEM_MANAGERS
        .iter()
        .map(|manager| manager.manual_command)
        .chain(std::iter::once(VENV_FALLBACK))
        .collect()
}

/// Resolves the psutil dependency through the strategy chain.
pub struct Resolver<'a> {
    executor: &'a dyn CommandExecutor,
    locator: &'a dyn ToolLocator,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given execution seams.
    pub fn new(executor: &'a dyn CommandExecutor, locator: &'a dyn ToolLocator) -> Self {
        Self { executor, locator }
    }

    /// Attempts each strategy in priority order, first success wins.
    ///
    /// When the import probe succeeds no install action runs at all. Each
    /// failed attempt is discarded and the next strategy tried; no strategy
    /// is attempted twice.
    ///
    /// # Errors
    ///
    /// Returns [`InstallerError::DependencyUnresolved`] when every strategy
    /// has been exhausted. The orchestrator prints the manual
    /// [`remediation_commands`] for that case.
    pub fn resolve(&self, reporter: &mut dyn Reporter) -> Result<Resolution> {
        if self.probe_import() {
            reporter.emit(Status::Success, "psutil is already installed");
            return Ok(Resolution::AlreadyPresent);
        }

        reporter.emit(Status::Info, "Installing psutil dependency...");

        if self.try_pip_user() {
            reporter.emit(Status::Success, "psutil installed via pip --user");
            return Ok(Resolution::Installed {
                method: "pip --user".to_owned(),
            });
        }

        for manager in &SYSTEM_MANAGERS {
            if self.locator.locate(manager.binary).is_none() {
                log::debug!("{} not on search path, skipping", manager.binary);
                continue;
            }
            reporter.emit(
                Status::Info,
                &format!("Trying to install via {}...", manager.label),
            );
            if self.try_elevated(manager) {
                reporter.emit(
                    Status::Success,
                    &format!("psutil installed via {}", manager.label),
                );
                return Ok(Resolution::Installed {
                    method: manager.label.to_owned(),
                });
            }
        }

        if self.locator.locate("pipx").is_some() {
            reporter.emit(Status::Info, "Trying to install via pipx...");
            if self.try_pipx() {
                reporter.emit(Status::Success, "psutil installed via pipx");
                return Ok(Resolution::Installed {
                    method: "pipx".to_owned(),
                });
            }
        }

        Err(InstallerError::DependencyUnresolved {
            dependency: DEPENDENCY,
        })
    }

    /// Probes whether the dependency is already importable.
    fn probe_import(&self) -> bool {
        command_succeeds(self.executor, "python3", &["-c", "import psutil"])
    }

    /// Attempts a user-scoped pip install; exit status decides, output is
    /// discarded.
    fn try_pip_user(&self) -> bool {
        command_succeeds(
            self.executor,
            "python3",
            &["-m", "pip", "install", "--user", DEPENDENCY],
        )
    }

    /// Attempts one elevated system-package-manager install.
    fn try_elevated(&self, manager: &SystemManager) -> bool {
        command_succeeds(self.executor, "sudo", manager.install_args)
    }

    /// Attempts an install through the isolated pipx installer.
    fn try_pipx(&self) -> bool {
        command_succeeds(self.executor, "pipx", &["install", DEPENDENCY, "--include-deps"])
    }
}

#[cfg(test)]
mod tests;
