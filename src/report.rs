//! Status reporting for the installer CLI.
//!
//! Components never write to process-wide handles directly; they emit status
//! lines through an injected [`Reporter`], so the orchestrator and each step
//! can be tested with a capturing fake. The default [`ConsoleReporter`] writes
//! styled lines to any [`Write`] handle (the binary passes stderr).

use crate::cli::Cli;
use crate::provision::InstallTarget;
use camino::Utf8Path;
use console::style;
use std::io::Write;

/// Severity of one reported status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Neutral progress or informational notice.
    Info,
    /// A completed step.
    Success,
    /// A non-fatal problem the operator should know about.
    Warn,
    /// A fatal problem; the orchestration is about to abort.
    Error,
}

/// Capability to emit one status line.
pub trait Reporter {
    /// Emits a single status line at the given severity.
    fn emit(&mut self, status: Status, message: &str);
}

/// Reporter that writes styled lines to a [`Write`] handle.
///
/// In quiet mode only warnings and errors are written. Write failures are
/// ignored; status output is best-effort.
pub struct ConsoleReporter<'a> {
    out: &'a mut dyn Write,
    quiet: bool,
}

impl<'a> ConsoleReporter<'a> {
    /// Creates a reporter over the given handle.
    pub fn new(out: &'a mut dyn Write, quiet: bool) -> Self {
        Self { out, quiet }
    }
}

impl Reporter for ConsoleReporter<'_> {
    fn emit(&mut self, status: Status, message: &str) {
        if self.quiet && matches!(status, Status::Info | Status::Success) {
            return;
        }
        let line = match status {
            Status::Info => message.to_owned(),
            Status::Success => format!("{} {message}", style("✓").green()),
            Status::Warn => format!("{} {message}", style("warning:").yellow().bold()),
            Status::Error => format!("{} {message}", style("error:").red().bold()),
        };
        let _ = writeln!(self.out, "{line}");
    }
}

/// Formats the banner printed before any installation step.
#[must_use]
pub fn banner(tool: &str) -> String {
    format!("{tool} - simple process supervisor\n{}", "=".repeat(50))
}

/// Formats the usage summary printed after a successful installation.
#[must_use]
pub fn usage_summary(tool: &str) -> String {
    format!(
        concat!(
            "Usage:\n",
            "  {tool} start <name> <script>   # Start a process\n",
            "  {tool} list                    # List all processes\n",
            "  {tool} logs <name>             # Show logs\n",
            "  {tool} info <name>             # Process information\n",
            "  {tool} --help                  # Show help\n",
            "\n",
            "Example:\n",
            "  {tool} start mybot /path/to/bot.py"
        ),
        tool = tool
    )
}

/// Configuration information for dry-run output.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use tasker_installer::cli::Cli;
/// use tasker_installer::provision::InstallTarget;
/// use tasker_installer::report::DryRunInfo;
///
/// let cli = Cli::default();
/// let target = InstallTarget::from_home(Utf8Path::new("/home/user"));
/// let info = DryRunInfo {
///     cli: &cli,
///     target: &target,
/// };
///
/// let output = info.display_text();
/// assert!(output.contains("Dry run"));
/// assert!(output.contains("/home/user/.local/bin"));
/// ```
#[derive(Debug)]
pub struct DryRunInfo<'a> {
    /// Parsed CLI arguments.
    pub cli: &'a Cli,
    /// Resolved installation target.
    pub target: &'a InstallTarget,
}

impl DryRunInfo<'_> {
    /// Format the dry-run information for display.
    #[must_use]
    pub fn display_text(&self) -> String {
        let lines = vec![
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Payload: {}", self.cli.payload),
            format!("Binary directory: {}", self.target.bin_dir),
            format!("Data directory: {}", self.target.data_dir),
            format!("Log directory: {}", self.target.log_dir),
            format!("Installed binary: {}", self.target.installed_binary()),
            format!("Skip deps: {}", self.cli.skip_deps),
            format!("Skip completions: {}", self.cli.skip_completions),
            format!("Quiet: {}", self.cli.quiet),
            format!("Verbosity level: {}", self.cli.verbosity),
        ];
        lines.join("\n")
    }
}

/// Remediation text shown when the binary directory is missing from the
/// search path.
#[must_use]
pub fn path_remediation(bin_dir: &Utf8Path) -> String {
    format!(
        concat!(
            "Add this line to your ~/.bashrc or ~/.zshrc:\n",
            "  export PATH=\"{}:$PATH\"\n",
            "Then restart your terminal or run: source ~/.bashrc"
        ),
        bin_dir
    )
}
