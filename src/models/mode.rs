//! Console dispatch mode

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dispatch context deciding where unprefixed input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Lines are handed to the OS command interpreter
    #[default]
    Shell,
    /// Lines are handed to the scripting engine
    #[serde(alias = "js")]
    JavaScript,
}

impl Mode {
    /// Human-readable mode name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Shell => "Shell",
            Mode::JavaScript => "JavaScript",
        }
    }

    /// Mode selected by a whole-line switch keyword, if any
    pub fn from_switch_keyword(line: &str) -> Option<Mode> {
        match line {
            "js" | "javascript" => Some(Mode::JavaScript),
            "shell" | "sh" => Some(Mode::Shell),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
