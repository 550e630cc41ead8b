//! tasker installer CLI entrypoint.
//!
//! This binary provisions the tasker process supervisor in user space: it
//! checks preconditions, satisfies the psutil dependency, installs the
//! executable payload and optional shell completions, and verifies that the
//! binary directory is discoverable via `PATH`.

use camino::Utf8Path;
use clap::Parser;
use std::io::Write;
use tasker_installer::cli::Cli;
use tasker_installer::completions::ShellIntegration;
use tasker_installer::dirs::{BaseDirs, SystemBaseDirs};
use tasker_installer::error::{InstallerError, Result};
use tasker_installer::exec::{SystemCommandExecutor, SystemToolLocator};
use tasker_installer::preflight;
use tasker_installer::provision::{self, InstallTarget, TOOL_NAME};
use tasker_installer::report::{
    ConsoleReporter, DryRunInfo, Reporter, Status, banner, path_remediation, usage_summary,
};
use tasker_installer::resolver::{Resolver, remediation_commands};
use tasker_installer::verify;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<()> {
    let dirs = SystemBaseDirs;
    let target = InstallTarget::from_dirs(&dirs)?;
    let mut reporter = ConsoleReporter::new(stderr, cli.quiet);
    reporter.emit(Status::Info, &banner(TOOL_NAME));

    // Dry-run mode: show resolved configuration without side effects
    if cli.dry_run {
        let info = DryRunInfo {
            cli,
            target: &target,
        };
        reporter.emit(Status::Info, &info.display_text());
        return Ok(());
    }

    let executor = SystemCommandExecutor;

    // Step 1: hard preconditions, before any side effect
    preflight::check_not_root()?;
    let (major, minor) = preflight::check_python(&executor)?;
    reporter.emit(
        Status::Success,
        &format!("Python {major}.{minor} is available"),
    );

    // Step 2: satisfy the psutil runtime dependency
    if !cli.skip_deps {
        let locator = SystemToolLocator;
        Resolver::new(&executor, &locator).resolve(&mut reporter)?;
    }

    // Step 3: payload presence is checked before any directory is created
    provision::payload_present(&cli.payload)?;
    provision::provision_directories(&target)?;
    reporter.emit(
        Status::Success,
        &format!("{} directory structure ready", target.data_dir),
    );
    let installed = provision::install_payload(&target, &cli.payload)?;
    reporter.emit(
        Status::Success,
        &format!("{TOOL_NAME} installed to {installed}"),
    );

    // Step 4: shell integration, never fatal
    if !cli.skip_completions {
        let home = dirs.home_dir().ok_or(InstallerError::HomeNotFound)?;
        let source_root = cli.payload.parent().unwrap_or(Utf8Path::new("."));
        ShellIntegration::new(&home, source_root).install_all(&mut reporter);
    }

    // Step 5: verify the search path, advisory only
    let path_ok = verify::verify_search_path(&target.bin_dir);
    if path_ok {
        reporter.emit(
            Status::Success,
            &format!("{} is already in PATH", target.bin_dir),
        );
    } else {
        reporter.emit(Status::Warn, &format!("{} is not in PATH", target.bin_dir));
        reporter.emit(Status::Info, &path_remediation(&target.bin_dir));
    }

    print_summary(&mut reporter, path_ok);
    Ok(())
}

/// Prints the final usage summary, with a shell-restart reminder when the
/// binary directory is not yet discoverable.
fn print_summary(reporter: &mut dyn Reporter, path_ok: bool) {
    reporter.emit(Status::Info, "");
    reporter.emit(Status::Success, "Installation completed!");
    reporter.emit(Status::Info, "");
    reporter.emit(Status::Info, &usage_summary(TOOL_NAME));
    if !path_ok {
        reporter.emit(Status::Info, "");
        reporter.emit(
            Status::Warn,
            &format!("Restart your terminal or update PATH before running {TOOL_NAME}"),
        );
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let mut reporter = ConsoleReporter::new(stderr, false);
            reporter.emit(Status::Error, &err.to_string());
            if matches!(err, InstallerError::DependencyUnresolved { .. }) {
                reporter.emit(
                    Status::Info,
                    "Please install psutil manually using one of these methods:",
                );
                for command in remediation_commands() {
                    reporter.emit(Status::Info, &format!("  {command}"));
                }
            }
            1
        }
    }
}

/// Routes `log` records from library modules to stderr, gated on `-v`.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
