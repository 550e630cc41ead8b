//! tasker installer library.
//!
//! This crate provides the core functionality for provisioning the tasker
//! process supervisor in user space: precondition checks, dependency
//! resolution, filesystem provisioning, payload installation, shell
//! completion integration, and search-path verification. It is used by the
//! `tasker-installer` CLI binary and can be consumed programmatically for
//! testing or custom installation workflows.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`completions`] - Best-effort shell completion installation
//! - [`dirs`] - Directory resolution abstraction for the user's home
//! - [`error`] - Semantic error types with recovery hints
//! - [`exec`] - Command execution and search-path lookup seams
//! - [`preflight`] - Privilege and runtime version preconditions
//! - [`provision`] - Install target layout and payload installation
//! - [`report`] - Injected status reporting
//! - [`resolver`] - Ordered-strategy psutil dependency resolution
//! - [`verify`] - Read-only search-path verification

pub mod cli;
pub mod completions;
pub mod dirs;
pub mod error;
pub mod exec;
pub mod preflight;
pub mod provision;
pub mod report;
pub mod resolver;
pub mod verify;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
