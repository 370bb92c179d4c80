//! Windows command interpreter

use crate::platform::traits::ShellOps;
use std::env;
use std::path::PathBuf;
use std::process::Command;

pub struct WindowsShell;

impl WindowsShell {
    pub fn new() -> Self {
        Self
    }
}

impl ShellOps for WindowsShell {
    fn interpreter(&self) -> PathBuf {
        env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    }

    fn interpreter_command(&self, line: &str) -> Command {
        let mut command = Command::new(self.interpreter());
        command.arg("/C").arg(format!("{} 2>&1", line));
        command
    }
}
