//! Abstractions over external command execution and search-path lookup.
//!
//! Every subprocess the installer spawns goes through [`CommandExecutor`], and
//! every "is this tool on PATH" probe goes through [`ToolLocator`]. Both seams
//! exist so resolver and preflight logic can be tested against mocks without
//! touching the host system.

use crate::error::{InstallerError, Result};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Abstraction for running external commands.
///
/// Output is captured rather than inherited, so diagnostic chatter from the
/// underlying tools never interleaves with the installer's own status lines.
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning or running the
    /// command.
    fn run<'a>(&self, cmd: &str, args: &[&'a str]) -> Result<Output>;
}

/// Executes commands on the host system.
///
/// # Examples
///
/// ```no_run
/// use tasker_installer::exec::{CommandExecutor, SystemCommandExecutor};
///
/// let executor = SystemCommandExecutor;
/// let output = executor.run("python3", &["--version"])?;
/// assert!(output.status.success());
/// # Ok::<(), tasker_installer::error::InstallerError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandExecutor;

impl CommandExecutor for SystemCommandExecutor {
    fn run<'a>(&self, cmd: &str, args: &[&'a str]) -> Result<Output> {
        Command::new(cmd)
            .args(args)
            .output()
            .map_err(InstallerError::from)
    }
}

/// Abstraction for locating executables on the search path.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator {
    /// Returns the path to `tool` when it is discoverable, `None` otherwise.
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Locates executables via the `PATH` environment variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolLocator;

impl ToolLocator for SystemToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}

/// Returns true if the given command executes successfully.
pub(crate) fn command_succeeds(executor: &dyn CommandExecutor, cmd: &str, args: &[&str]) -> bool {
    executor.run(cmd, args).is_ok_and(|o| o.status.success())
}
