//! Command Result Model
//!
//! The single value produced for every line handed to the console. Front
//! ends render `output` on success and `error` on failure.

use std::time::Duration;

/// Outcome of executing one console line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Whether the command succeeded
    pub success: bool,

    /// Text produced by the command
    pub output: String,

    /// Failure description, empty unless `success` is false
    pub error: String,

    /// Wall-clock time spent executing
    pub execution_time: Duration,

    /// Exit code, 0 for success
    pub exit_code: i32,
}

impl CommandResult {
    /// Successful result carrying `output`
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            ..Self::default()
        }
    }

    /// Result for an empty line: success with nothing to show
    pub fn empty() -> Self {
        Self::ok(String::new())
    }

    /// Failed result with an error message and exit code
    pub fn failure(error: impl Into<String>, exit_code: i32) -> Self {
        Self {
            success: false,
            error: error.into(),
            exit_code,
            ..Self::default()
        }
    }

    /// Replace the execution time, truncated to microsecond resolution
    pub fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = Duration::from_micros(elapsed.as_micros() as u64);
        self
    }

    /// Text a front end should display for this result
    pub fn display_text(&self) -> &str {
        if self.success {
            &self.output
        } else {
            &self.error
        }
    }
}

/// Format an execution time in human units chosen by magnitude
///
/// Below a millisecond the value is shown in microseconds, below a second in
/// milliseconds with one decimal, otherwise in seconds with two decimals.
pub fn format_execution_time(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
