//! Shared test utilities for the installer crate.
//!
//! Exposed to external test suites through the `test-support` feature; not
//! part of the semver-stable API.

use crate::error::Result;
use crate::exec::{CommandExecutor, ToolLocator};
use crate::report::{Reporter, Status};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::{ExitStatus, Output};

/// Creates an `ExitStatus` from an exit code (Unix implementation).
#[cfg(unix)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    ExitStatus::from_raw(code << 8)
}

/// Creates an `ExitStatus` from an exit code (Windows implementation).
#[cfg(windows)]
#[must_use]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;

    ExitStatus::from_raw(code as u32)
}

/// Creates a successful command `Output` with empty stdout and stderr.
#[must_use]
pub fn success_output() -> Output {
    Output {
        status: exit_status(0),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

/// Creates a successful command `Output` carrying the given stdout.
#[must_use]
pub fn output_with_stdout(stdout: &str) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

/// Creates a failed command `Output` with the given stderr message.
#[must_use]
pub fn failure_output(stderr: &str) -> Output {
    Output {
        status: exit_status(1),
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

/// Represents an expected command invocation for testing.
#[derive(Debug)]
pub struct ExpectedCall {
    /// The command to execute (e.g., "python3").
    pub cmd: &'static str,
    /// The arguments to pass to the command.
    pub args: Vec<&'static str>,
    /// The result to return when this command is invoked.
    pub result: Result<Output>,
}

/// A stub implementation of `CommandExecutor` for testing.
///
/// Records expected command invocations and returns predefined results,
/// allowing tests to verify command execution without side effects.
#[derive(Debug)]
pub struct StubExecutor {
    expected: RefCell<VecDeque<ExpectedCall>>,
}

impl StubExecutor {
    /// Creates a new `StubExecutor` with the given expected calls.
    #[must_use]
    pub fn new(expected: Vec<ExpectedCall>) -> Self {
        Self {
            expected: RefCell::new(expected.into()),
        }
    }

    /// Asserts that all expected command invocations have been consumed.
    ///
    /// # Panics
    ///
    /// Panics if there are remaining expected calls that were not invoked.
    pub fn assert_finished(&self) {
        assert!(
            self.expected.borrow().is_empty(),
            "expected no further command invocations"
        );
    }
}

impl CommandExecutor for StubExecutor {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<Output> {
        let mut expected = self.expected.borrow_mut();
        let call = expected.pop_front().expect("unexpected command invocation");

        assert_eq!(call.cmd, cmd);
        assert_eq!(call.args.as_slice(), args);

        call.result
    }
}

/// A `ToolLocator` that knows a fixed set of available tools.
#[derive(Debug, Default)]
pub struct StubLocator {
    available: Vec<&'static str>,
}

impl StubLocator {
    /// Creates a locator that reports only the given tools as present.
    #[must_use]
    pub fn with_tools(available: Vec<&'static str>) -> Self {
        Self { available }
    }
}

impl ToolLocator for StubLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.available
            .iter()
            .find(|candidate| **candidate == tool)
            .map(|candidate| PathBuf::from(format!("/usr/bin/{candidate}")))
    }
}

/// A `Reporter` that records every emitted status line.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    /// Emitted `(status, message)` pairs in order.
    pub events: Vec<(Status, String)>,
}

impl CapturingReporter {
    /// Returns whether any recorded message contains the given fragment.
    #[must_use]
    pub fn contains(&self, fragment: &str) -> bool {
        self.events
            .iter()
            .any(|(_, message)| message.contains(fragment))
    }

    /// Counts recorded events at the given status.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.events
            .iter()
            .filter(|(recorded, _)| *recorded == status)
            .count()
    }
}

impl Reporter for CapturingReporter {
    fn emit(&mut self, status: Status, message: &str) {
        self.events.push((status, message.to_owned()));
    }
}
