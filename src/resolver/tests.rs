//! Tests for the psutil dependency resolver.

use super::*;
use crate::exec::{MockCommandExecutor, MockToolLocator};
use crate::test_utils::{CapturingReporter, failure_output, success_output};
use mockall::Sequence;
use std::path::PathBuf;

fn expect_probe(executor: &mut MockCommandExecutor, sequence: &mut Sequence, succeeds: bool) {
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "python3" && args == ["-c", "import psutil"])
        .times(1)
        .in_sequence(sequence)
        .returning(move |_, _| {
            if succeeds {
                Ok(success_output())
            } else {
                Ok(failure_output("ModuleNotFoundError: No module named 'psutil'"))
            }
        });
}

fn expect_pip_user(executor: &mut MockCommandExecutor, sequence: &mut Sequence, succeeds: bool) {
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "python3" && args == ["-m", "pip", "install", "--user", "psutil"])
        .times(1)
        .in_sequence(sequence)
        .returning(move |_, _| {
            if succeeds {
                Ok(success_output())
            } else {
                Ok(failure_output("pip failed"))
            }
        });
}

fn locator_with(available: &'static [&'static str]) -> MockToolLocator {
    let mut locator = MockToolLocator::new();
    locator.expect_locate().returning(move |tool| {
        if available.contains(&tool) {
            Some(PathBuf::from(format!("/usr/bin/{tool}")))
        } else {
            None
        }
    });
    locator
}

#[test]
fn already_importable_dependency_runs_zero_install_actions() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, true);
    // No locate expectations: any search-path probe would fail the test.
    let locator = MockToolLocator::new();
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");

    assert_eq!(resolution, Resolution::AlreadyPresent);
    assert!(reporter.contains("already installed"));
}

#[test]
fn pip_user_is_tried_before_any_system_manager() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, false);
    expect_pip_user(&mut executor, &mut sequence, true);
    let locator = MockToolLocator::new();
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");

    assert_eq!(
        resolution,
        Resolution::Installed {
            method: "pip --user".to_owned()
        }
    );
}

#[test]
fn absent_managers_are_skipped_without_an_attempt() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, false);
    expect_pip_user(&mut executor, &mut sequence, false);
    // Only dnf is present; apt and yum must not trigger a sudo invocation.
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "sudo" && args == ["dnf", "install", "-y", "python3-psutil"])
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(success_output()));
    let locator = locator_with(&["dnf"]);
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");

    assert_eq!(
        resolution,
        Resolution::Installed {
            method: "dnf (Fedora)".to_owned()
        }
    );
}

#[test]
fn failed_manager_attempt_moves_to_next_candidate() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, false);
    expect_pip_user(&mut executor, &mut sequence, false);
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "sudo" && args == ["apt", "install", "-y", "python3-psutil"])
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(failure_output("unable to locate package")));
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "sudo" && args == ["pacman", "-S", "--noconfirm", "python-psutil"])
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(success_output()));
    let locator = locator_with(&["apt", "pacman"]);
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");

    assert_eq!(
        resolution,
        Resolution::Installed {
            method: "pacman (Arch Linux)".to_owned()
        }
    );
}

#[test]
fn pipx_is_the_final_automatic_fallback() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, false);
    expect_pip_user(&mut executor, &mut sequence, false);
    executor
        .expect_run()
        .withf(|cmd, args| cmd == "pipx" && args == ["install", "psutil", "--include-deps"])
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Ok(success_output()));
    let locator = locator_with(&["pipx"]);
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");

    assert_eq!(
        resolution,
        Resolution::Installed {
            method: "pipx".to_owned()
        }
    );
}

#[test]
fn exhaustion_yields_dependency_unresolved() {
    let mut executor = MockCommandExecutor::new();
    let mut sequence = Sequence::new();
    expect_probe(&mut executor, &mut sequence, false);
    expect_pip_user(&mut executor, &mut sequence, false);
    let locator = locator_with(&[]);
    let mut reporter = CapturingReporter::default();

    let err = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect_err("expected resolution to fail");

    assert!(matches!(
        err,
        InstallerError::DependencyUnresolved {
            dependency: "psutil"
        }
    ));
}

#[test]
fn remediation_lists_four_managers_then_venv_fallback() {
    let commands = remediation_commands();

    assert_eq!(commands.len(), 5);
    assert!(commands[0].starts_with("sudo apt install python3-psutil"));
    assert!(commands[1].starts_with("sudo yum install python3-psutil"));
    assert!(commands[2].starts_with("sudo dnf install python3-psutil"));
    assert!(commands[3].starts_with("sudo pacman -S python-psutil"));
    assert!(commands[4].starts_with("python3 -m venv"));
}
