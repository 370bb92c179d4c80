//! Builtin command registry and line tokenization
//!
//! Builtins are recognised by the first whitespace-delimited token of a line.
//! Tokenization is deliberately plain: no quoting, so `"a b"` is two tokens.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Keyword → description for every builtin, sorted by keyword
static BUILTIN_COMMANDS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("help", "Show help message"),
        ("quit", "Exit the console"),
        ("exit", "Exit the console"),
        ("clear", "Clear the console"),
        ("js", "Switch to JavaScript mode"),
        ("javascript", "Switch to JavaScript mode"),
        ("shell", "Switch to shell mode"),
        ("sh", "Switch to shell mode"),
        ("ask", "Ask a question"),
        ("config", "Manage configuration and aliases"),
        ("reload", "Reload configuration from files"),
    ])
});

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Split a line on runs of whitespace
pub fn split_command(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Whether the first token of `line` names a builtin
pub fn is_builtin_command(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|word| BUILTIN_COMMANDS.contains_key(word))
}

/// All builtins with their descriptions, sorted by keyword
pub fn builtin_commands() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN_COMMANDS.iter().map(|(name, desc)| (*name, *desc))
}
