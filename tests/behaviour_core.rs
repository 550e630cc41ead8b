//! Behaviour-driven tests for installer core logic.
//!
//! These scenarios validate remediation-command generation, search-path
//! verification, and zero-action dependency resolution using rstest-bdd.

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use tasker_installer::resolver::{Resolution, Resolver, remediation_commands};
use tasker_installer::test_utils::{
    CapturingReporter, ExpectedCall, StubExecutor, StubLocator, success_output,
};
use tasker_installer::verify::is_dir_on_search_path;

// ---------------------------------------------------------------------------
// Remediation world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RemediationWorld {
    commands: RefCell<Vec<&'static str>>,
}

#[fixture]
fn remediation_world() -> RemediationWorld {
    RemediationWorld::default()
}

#[given("dependency resolution has been exhausted")]
fn given_resolution_exhausted(remediation_world: &RemediationWorld) {
    remediation_world.commands.replace(Vec::new());
}

#[when("the manual remediation commands are generated")]
fn when_commands_generated(remediation_world: &RemediationWorld) {
    remediation_world.commands.replace(remediation_commands());
}

#[then("four package manager commands precede the virtual environment fallback")]
fn then_commands_ordered(remediation_world: &RemediationWorld) {
    let commands = remediation_world.commands.borrow();
    assert_eq!(commands.len(), 5);
    assert!(commands[0].starts_with("sudo apt install python3-psutil"));
    assert!(commands[1].starts_with("sudo yum install python3-psutil"));
    assert!(commands[2].starts_with("sudo dnf install python3-psutil"));
    assert!(commands[3].starts_with("sudo pacman -S python-psutil"));
    assert!(commands[4].starts_with("python3 -m venv"));
}

// ---------------------------------------------------------------------------
// Search-path world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct SearchPathWorld {
    search_path: RefCell<String>,
    discoverable: Cell<Option<bool>>,
}

#[fixture]
fn search_path_world() -> SearchPathWorld {
    SearchPathWorld::default()
}

const BIN_DIR: &str = "/home/user/.local/bin";

#[given("a search path containing the binary directory")]
fn given_search_path_with_bin(search_path_world: &SearchPathWorld) {
    search_path_world
        .search_path
        .replace(format!("/usr/bin:{BIN_DIR}:/bin"));
}

#[given("a search path without the binary directory")]
fn given_search_path_without_bin(search_path_world: &SearchPathWorld) {
    search_path_world
        .search_path
        .replace("/usr/bin:/bin".to_owned());
}

#[when("the search path is checked")]
fn when_search_path_checked(search_path_world: &SearchPathWorld) {
    let search_path = search_path_world.search_path.borrow();
    let discoverable =
        is_dir_on_search_path(&Utf8PathBuf::from(BIN_DIR), search_path.as_str().as_ref());
    search_path_world.discoverable.set(Some(discoverable));
}

#[then("the binary directory is reported discoverable")]
fn then_reported_discoverable(search_path_world: &SearchPathWorld) {
    assert_eq!(search_path_world.discoverable.get(), Some(true));
}

#[then("the binary directory is reported missing")]
fn then_reported_missing(search_path_world: &SearchPathWorld) {
    assert_eq!(search_path_world.discoverable.get(), Some(false));
}

// ---------------------------------------------------------------------------
// Resolution world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ResolutionWorld {
    importable: Cell<bool>,
    resolution: RefCell<Option<Resolution>>,
}

#[fixture]
fn resolution_world() -> ResolutionWorld {
    ResolutionWorld::default()
}

#[given("the dependency is already importable")]
fn given_dependency_importable(resolution_world: &ResolutionWorld) {
    resolution_world.importable.set(true);
}

#[when("the dependency is resolved")]
fn when_dependency_resolved(resolution_world: &ResolutionWorld) {
    assert!(
        resolution_world.importable.get(),
        "only the importable case is scripted"
    );
    // A single expected call: any install action would trip the stub.
    let executor = StubExecutor::new(vec![ExpectedCall {
        cmd: "python3",
        args: vec!["-c", "import psutil"],
        result: Ok(success_output()),
    }]);
    let locator = StubLocator::default();
    let mut reporter = CapturingReporter::default();

    let resolution = Resolver::new(&executor, &locator)
        .resolve(&mut reporter)
        .expect("expected resolution to succeed");
    executor.assert_finished();
    resolution_world.resolution.replace(Some(resolution));
}

#[then("resolution succeeds without any install action")]
fn then_resolved_without_install(resolution_world: &ResolutionWorld) {
    let resolution = resolution_world.resolution.borrow();
    assert_eq!(resolution.as_ref(), Some(&Resolution::AlreadyPresent));
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/installer.feature", index = 0)]
fn scenario_remediation_commands(remediation_world: RemediationWorld) {
    let _ = remediation_world;
}

#[scenario(path = "tests/features/installer.feature", index = 1)]
fn scenario_search_path_discoverable(search_path_world: SearchPathWorld) {
    let _ = search_path_world;
}

#[scenario(path = "tests/features/installer.feature", index = 2)]
fn scenario_search_path_missing(search_path_world: SearchPathWorld) {
    let _ = search_path_world;
}

#[scenario(path = "tests/features/installer.feature", index = 3)]
fn scenario_resolution_without_install(resolution_world: ResolutionWorld) {
    let _ = resolution_world;
}
