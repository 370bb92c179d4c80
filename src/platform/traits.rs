//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing the console to be driven by fakes in tests.

use crate::error::Result;
use std::path::PathBuf;
use std::process::Command;

/// Locate programs on the search path
pub trait ProgramLocator: Send + Sync {
    /// Find a program in PATH, `None` when it is not installed
    fn find_program(&self, program: &str) -> Result<Option<PathBuf>>;
}

/// Build invocations of the OS command interpreter
pub trait ShellOps: Send + Sync {
    /// Program used to interpret command lines
    fn interpreter(&self) -> PathBuf;

    /// Command running `line` verbatim with stderr merged into stdout
    fn interpreter_command(&self, line: &str) -> Command;
}
