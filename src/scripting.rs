//! Scripting engine seam
//!
//! The console treats the scripting language as an opaque capability: it
//! hands over source text and gets a [`CommandResult`] back. Any closure of
//! the right shape is an engine, which keeps tests free of a real runtime.

use crate::models::CommandResult;

/// Evaluates scripting-mode source text
pub trait ScriptEngine {
    /// Evaluate `source`; the caller measures the duration
    fn evaluate(&mut self, source: &str) -> CommandResult;
}

impl<F> ScriptEngine for F
where
    F: FnMut(&str) -> CommandResult,
{
    fn evaluate(&mut self, source: &str) -> CommandResult {
        self(source)
    }
}

/// Stand-in engine that echoes the code it was given
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedScriptEngine;

impl ScriptEngine for SimulatedScriptEngine {
    fn evaluate(&mut self, source: &str) -> CommandResult {
        CommandResult::ok(format!(
            "// JavaScript execution simulated\n// Code: {}",
            source
        ))
    }
}
