//! cll - an interactive command console
//!
//! This library provides the dispatch core of the console: each input line
//! is routed to the OS command interpreter, a scripting engine, a small
//! keyword-rule question responder, or a builtin command, depending on the
//! current mode and the line's prefix.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`console`] - The dispatcher and its builtin commands
//! - [`aliases`] - User-defined first-token substitutions
//! - [`history`] - Bounded command history with recall
//! - [`execution`] - Subprocess execution with merged output and timing
//! - [`knowledge`] - Ordered keyword rules with an `ask` program fallback
//! - [`scripting`] - The scripting engine seam
//!
//! ### Supporting Modules
//!
//! - [`config`] - Alias files, `config.json`, directory bootstrap
//! - [`models`] - `CommandResult` and `Mode`
//! - [`platform`] - Program lookup and command interpreter per OS
//! - [`commands`] - Builtin registry and tokenization
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use cll::Console;
//!
//! # fn main() -> cll::Result<()> {
//! let mut console = Console::new()?;
//! let line = console.expand_alias("ll /tmp");
//! let result = console.execute(&line);
//! if result.success {
//!     print!("{}", result.output);
//! } else {
//!     eprintln!("{}", result.error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Execution Model
//!
//! The console is single-threaded and synchronous: `execute` runs one line
//! to completion, including any child process, before returning. There is
//! no timeout, so an external command that never exits blocks the caller.
//! Each session owns its own [`Console`] and [`CommandHistory`].

#[macro_use]
extern crate tracing;

pub mod aliases;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod execution;
pub mod history;
pub mod knowledge;
pub mod models;
pub mod platform;
pub mod scripting;

// Re-exports for core functionality
pub use aliases::AliasTable;
pub use config::loader::ConfigLoader;
pub use config::paths::{ConfigPaths, FixedConfigPaths, HomeConfigPaths};
pub use config::ConsoleConfig;
pub use console::{Console, ConsoleBuilder};
pub use error::{Error, Result};
pub use execution::SubprocessRunner;
pub use history::CommandHistory;
pub use knowledge::KnowledgeResponder;
pub use models::{format_execution_time, CommandResult, Mode};
pub use scripting::{ScriptEngine, SimulatedScriptEngine};

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prepare a console session rooted at `paths`
///
/// Creates the configuration directory with default files on first run,
/// reads `config.json` (falling back to defaults when it is unreadable or
/// invalid), and builds a [`Console`] in the configured initial mode.
///
/// # Errors
///
/// Fails when the directory cannot be created or the alias files cannot be
/// read.
pub fn init(paths: impl ConfigPaths + 'static) -> Result<(Console, ConsoleConfig)> {
    info!("Initializing {} v{}", NAME, VERSION);

    ConfigLoader::bootstrap(&paths)?;

    let config = match ConfigLoader::load_console_config(&paths.config_file()) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}. Using default settings", e);
            ConsoleConfig::default()
        }
    };

    let mut knowledge = KnowledgeResponder::new();
    knowledge.set_ask_fallback(config.ask_fallback);

    let console = Console::builder()
        .mode(config.default_mode)
        .config_paths(paths)
        .knowledge(knowledge)
        .build()?;

    Ok((console, config))
}
