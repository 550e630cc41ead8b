//! Best-effort shell completion installation.
//!
//! Completions are an optional feature: a missing source file is an expected
//! informational outcome (completions were not packaged), and no failure here
//! may abort the orchestration. Each shell is attempted independently.
//!
//! bash completions auto-load from the user completion directory. zsh needs
//! its completion directory on `fpath`, so the installer either drops the file
//! into an auto-loading framework directory (oh-my-zsh, when its marker
//! directory exists) or installs into the generic site-functions directory and
//! registers it in `~/.zshrc` with an idempotent append.

use crate::error::Result;
use crate::provision::TOOL_NAME;
use crate::report::{Reporter, Status};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

/// A shell with completion support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Line-oriented completions, auto-loaded from the user completion dir.
    Bash,
    /// Function-based completions, discovered via `fpath`.
    Zsh,
}

impl ShellKind {
    /// Lower-case shell name for status lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
        }
    }
}

/// Outcome of one shell's completion installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion file was installed.
    Installed {
        /// Where the completion file landed.
        destination: Utf8PathBuf,
    },
    /// The source completion file was not packaged; nothing to do.
    SkippedMissingSource,
    /// Installation failed; never fatal for the orchestration.
    Failed {
        /// Description of the failure.
        reason: String,
    },
}

/// Installs completion scripts for all supported shells.
pub struct ShellIntegration<'a> {
    home: &'a Utf8Path,
    source_root: &'a Utf8Path,
}

impl<'a> ShellIntegration<'a> {
    /// Creates an integration rooted at the given home directory, reading
    /// completion sources from `<source_root>/completions/`.
    pub fn new(home: &'a Utf8Path, source_root: &'a Utf8Path) -> Self {
        Self { home, source_root }
    }

    /// Attempts every shell independently and reports each outcome.
    ///
    /// Skips are reported as informational notices, failures as warnings;
    /// neither affects the return of the overall orchestration.
    pub fn install_all(&self, reporter: &mut dyn Reporter) -> Vec<(ShellKind, CompletionOutcome)> {
        let outcomes = vec![
            (ShellKind::Bash, self.install_bash()),
            (ShellKind::Zsh, self.install_zsh()),
        ];
        for (shell, outcome) in &outcomes {
            match outcome {
                CompletionOutcome::Installed { destination } => reporter.emit(
                    Status::Success,
                    &format!("{} completions installed to {destination}", shell.label()),
                ),
                CompletionOutcome::SkippedMissingSource => reporter.emit(
                    Status::Info,
                    &format!("{} completions not found (optional)", shell.label()),
                ),
                CompletionOutcome::Failed { reason } => reporter.emit(
                    Status::Warn,
                    &format!("could not install {} completions: {reason}", shell.label()),
                ),
            }
        }
        outcomes
    }

    fn install_bash(&self) -> CompletionOutcome {
        let source = self
            .source_root
            .join("completions")
            .join(format!("{TOOL_NAME}-completion.bash"));
        if !source.is_file() {
            return CompletionOutcome::SkippedMissingSource;
        }

        let destination_dir = self
            .home
            .join(".local/share/bash-completion/completions");
        match copy_into(&source, &destination_dir, TOOL_NAME) {
            Ok(destination) => CompletionOutcome::Installed { destination },
            Err(e) => CompletionOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn install_zsh(&self) -> CompletionOutcome {
        let source = self
            .source_root
            .join("completions")
            .join(format!("_{TOOL_NAME}"));
        if !source.is_file() {
            return CompletionOutcome::SkippedMissingSource;
        }

        let file_name = format!("_{TOOL_NAME}");
        let result = match self.zsh_framework_completions_dir() {
            // Framework completion dirs auto-load; no startup-file mutation.
            Some(framework_dir) => copy_into(&source, &framework_dir, &file_name),
            None => {
                let destination_dir = self.home.join(".local/share/zsh/site-functions");
                copy_into(&source, &destination_dir, &file_name).and_then(|destination| {
                    register_fpath(&self.home.join(".zshrc"), &destination_dir)?;
                    Ok(destination)
                })
            }
        };

        match result {
            Ok(destination) => CompletionOutcome::Installed { destination },
            Err(e) => CompletionOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// Detects an installed zsh framework by its marker directory.
    fn zsh_framework_completions_dir(&self) -> Option<Utf8PathBuf> {
        let marker = self.home.join(".oh-my-zsh");
        marker.is_dir().then(|| marker.join("completions"))
    }
}

/// Copies `source` into `destination_dir/file_name`, creating the directory
/// first.
fn copy_into(
    source: &Utf8Path,
    destination_dir: &Utf8Path,
    file_name: &str,
) -> Result<Utf8PathBuf> {
    std::fs::create_dir_all(destination_dir)?;
    let destination = destination_dir.join(file_name);
    std::fs::copy(source, &destination)?;
    Ok(destination)
}

/// Appends an `fpath` registration line to a zsh startup file, at most once.
///
/// The guard is structural: when the directory string already appears
/// anywhere in the file, nothing is written. The handle is scoped so the
/// append is flushed and closed on every exit path. Returns whether a line
/// was appended.
///
/// # Errors
///
/// Returns the underlying I/O error when the startup file cannot be read or
/// appended to.
pub fn register_fpath(startup_file: &Utf8Path, completions_dir: &Utf8Path) -> Result<bool> {
    let existing = match std::fs::read_to_string(startup_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if existing.contains(completions_dir.as_str()) {
        return Ok(false);
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(startup_file)?;
    writeln!(file, "fpath=({completions_dir} $fpath)")?;
    Ok(true)
}
