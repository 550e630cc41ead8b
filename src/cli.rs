//! CLI argument definitions for the tasker installer.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary focused on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Install the tasker process supervisor into user space.
#[derive(Parser, Debug, Clone)]
#[command(name = "tasker-installer")]
#[command(version, about)]
#[command(long_about = concat!(
    "Install the tasker process supervisor into user space.\n\n",
    "tasker is a lightweight process supervisor. This installer provisions it ",
    "without elevated privileges: it verifies the Python runtime, satisfies the ",
    "psutil dependency through the least invasive method that works, copies the ",
    "tasker executable into ~/.local/bin, creates the ~/.tasker data directory, ",
    "and optionally installs bash and zsh completions.\n\n",
    "Run it from the tasker source directory so the tasker.py payload and the ",
    "optional completions/ files can be found.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Install with all defaults:\n",
    "    $ tasker-installer\n\n",
    "  Preview without touching the filesystem:\n",
    "    $ tasker-installer --dry-run\n\n",
    "  Skip dependency resolution (psutil already managed elsewhere):\n",
    "    $ tasker-installer --skip-deps\n\n",
    "  Skip shell completion installation:\n",
    "    $ tasker-installer --skip-completions\n",
))]
pub struct Cli {
    /// Path to the tasker executable payload.
    #[arg(long, value_name = "FILE", default_value = "tasker.py")]
    pub payload: Utf8PathBuf,

    /// Skip dependency resolution for psutil.
    #[arg(long)]
    pub skip_deps: bool,

    /// Skip shell completion installation.
    #[arg(long)]
    pub skip_completions: bool,

    /// Show resolved configuration and exit without installing.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase diagnostic verbosity (repeatable: -v, -vv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress progress output (warnings and errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Default for Cli {
    /// Creates a `Cli` instance with all flags disabled and the default
    /// payload path.
    ///
    /// Useful for testing or programmatic construction where only specific
    /// fields need to be set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasker_installer::cli::Cli;
    ///
    /// let cli = Cli::default();
    /// assert_eq!(cli.payload.as_str(), "tasker.py");
    /// assert!(!cli.skip_deps);
    /// ```
    fn default() -> Self {
        Self {
            payload: Utf8PathBuf::from("tasker.py"),
            skip_deps: false,
            skip_completions: false,
            dry_run: false,
            verbosity: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
