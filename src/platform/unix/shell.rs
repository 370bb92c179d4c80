//! Unix command interpreter

use crate::platform::traits::ShellOps;
use std::path::PathBuf;
use std::process::Command;

/// POSIX interpreter every Unix system provides
const POSIX_SHELL: &str = "/bin/sh";

pub struct UnixShell;

impl UnixShell {
    pub fn new() -> Self {
        Self
    }
}

impl ShellOps for UnixShell {
    fn interpreter(&self) -> PathBuf {
        PathBuf::from(POSIX_SHELL)
    }

    fn interpreter_command(&self, line: &str) -> Command {
        // The redirect runs before the line is parsed, so parse errors
        // and trailing comments in the line still land on stdout.
        let mut command = Command::new(self.interpreter());
        command.arg("-c").arg(format!("exec 2>&1\n{}", line));
        command
    }
}
