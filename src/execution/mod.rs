//! Subprocess execution through the OS command interpreter
//!
//! Each line is handed verbatim to the platform interpreter (`/bin/sh -c` on
//! Unix, `cmd /C` on Windows) with standard error merged into standard
//! output. The call blocks until the child exits and its output is fully
//! drained; there is no timeout, so a command that never exits hangs the
//! caller.

use crate::error::{Error, Result};
use crate::models::CommandResult;
use crate::platform::{Platform, ShellOps};
use std::process::{ExitStatus, Output, Stdio};
use std::sync::Arc;
use std::time::Instant;

/// Error text reported when the interpreter cannot be started
pub const LAUNCH_FAILED_MESSAGE: &str = "Failed to execute command";

/// Exit code reported when the interpreter cannot be started
pub const LAUNCH_FAILED_EXIT_CODE: i32 = 127;

/// Runs command lines as external processes
#[derive(Clone)]
pub struct SubprocessRunner {
    shell: Arc<dyn ShellOps>,
}

impl SubprocessRunner {
    /// Create a runner using the platform interpreter
    pub fn new() -> Self {
        Self::with_shell(Arc::from(Platform::shell()))
    }

    /// Create a runner using a specific interpreter
    pub fn with_shell(shell: Arc<dyn ShellOps>) -> Self {
        Self { shell }
    }

    /// Run `line` and capture its merged output, exit code and duration
    pub fn run(&self, line: &str) -> CommandResult {
        let start = Instant::now();

        match self.spawn_and_wait(line) {
            Ok(output) => {
                let elapsed = start.elapsed();
                let exit_code = exit_code_of(output.status);
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                // Anything written to stderr before the redirect took effect
                text.push_str(&String::from_utf8_lossy(&output.stderr));

                debug!("Command '{}' exited with code {}", line, exit_code);
                CommandResult {
                    success: exit_code == 0,
                    output: text,
                    error: String::new(),
                    execution_time: Default::default(),
                    exit_code,
                }
                .with_execution_time(elapsed)
            }
            Err(e) => {
                warn!("{}", e);
                CommandResult::failure(LAUNCH_FAILED_MESSAGE, LAUNCH_FAILED_EXIT_CODE)
            }
        }
    }

    /// Run a delegated program
    ///
    /// Same as [`SubprocessRunner::run`], except that on failure the captured
    /// output is reported as the error text.
    pub fn run_program(&self, line: &str) -> CommandResult {
        let mut result = self.run(line);
        if !result.success && !result.output.is_empty() {
            result.error = std::mem::take(&mut result.output);
        }
        result
    }

    fn spawn_and_wait(&self, line: &str) -> Result<Output> {
        self.shell
            .interpreter_command(line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::CommandSpawnFailed {
                command: line.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for SubprocessRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a process status to an exit code
///
/// On Unix a signal-terminated child reports `128 + signal`, as shells do.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
