//! Configuration management for the console
//!
//! The dispatcher itself only needs the alias files. `config.json` carries
//! front-end settings (initial mode, prompt, history size) and is read by
//! whoever drives the console.

pub mod loader;
pub mod paths;

use crate::error::{Error, Result};
use crate::history::DEFAULT_HISTORY_SIZE;
use crate::models::Mode;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the current mode name in `prompt_format`
pub const MODE_PLACEHOLDER: &str = "{mode}";

/// Settings stored in `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Mode the console starts in
    pub default_mode: Mode,

    /// Prompt template, `{mode}` is substituted
    pub prompt_format: String,

    /// Print how long each command took
    pub show_execution_time: bool,

    /// Number of history entries kept
    pub history_size: usize,

    /// Hand unanswered questions to an external `ask` program
    pub ask_fallback: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Shell,
            prompt_format: "[{mode}] λ ".to_string(),
            show_execution_time: true,
            history_size: DEFAULT_HISTORY_SIZE,
            ask_fallback: true,
        }
    }
}

impl ConsoleConfig {
    /// Check settings that would make the console unusable
    pub fn validate(&self) -> Result<()> {
        if self.history_size == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "history_size".to_string(),
                reason: "History size must be greater than 0".to_string(),
            });
        }

        if self.prompt_format.is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "prompt_format".to_string(),
                reason: "Prompt format cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Render the prompt for `mode`
    pub fn prompt(&self, mode: Mode) -> String {
        self.prompt_format
            .replace(MODE_PLACEHOLDER, &mode.name().to_lowercase())
    }
}
