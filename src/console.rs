//! Console engine
//!
//! [`Console::execute`] takes one input line and routes it, in order, to:
//!
//! 1. a mode switch when the whole line is `js`/`javascript` or `shell`/`sh`
//! 2. the builtin handler when the first token is a registered builtin
//! 3. the scripting engine in JavaScript mode
//! 4. in Shell mode: the scripting engine for `&code`, the knowledge
//!    responder for `?question`, otherwise the OS command interpreter
//!
//! Alias expansion is not applied here; callers that want it run
//! [`Console::expand_alias`] first.

use crate::aliases::{is_valid_alias_name, AliasTable};
use crate::commands::{builtin_commands, is_builtin_command, split_command, CLEAR_SCREEN};
use crate::config::loader::ConfigLoader;
use crate::config::paths::{ConfigPaths, HomeConfigPaths, ALIASES_FILE, CONFIG_FILE};
use crate::error::Result;
use crate::execution::SubprocessRunner;
use crate::knowledge::KnowledgeResponder;
use crate::models::{CommandResult, Mode};
use crate::platform::{Platform, ProgramLocator};
use crate::scripting::{ScriptEngine, SimulatedScriptEngine};
use std::path::PathBuf;
use std::time::Instant;

pub const ASK_USAGE: &str = "Usage: ask <question>";
pub const CONFIG_ALIAS_USAGE: &str = "Usage: config alias name=value";
pub const CONFIG_USAGE: &str = "Usage: config [alias name=value]";

/// Exit code for malformed builtin invocations and builtin failures
const USAGE_EXIT_CODE: i32 = 1;

/// Interactive command console
pub struct Console {
    mode: Mode,
    aliases: AliasTable,
    paths: Box<dyn ConfigPaths>,
    engine: Box<dyn ScriptEngine>,
    knowledge: KnowledgeResponder,
    runner: SubprocessRunner,
}

impl Console {
    /// Console with the default collaborators, configured from the home directory
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("Switching console mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Expand the first token of `line` through the alias table
    pub fn expand_alias(&self, line: &str) -> String {
        self.aliases.expand(line)
    }

    /// Directory holding `config.json` and `aliases`
    pub fn config_dir(&self) -> PathBuf {
        self.paths.config_dir()
    }

    /// Set an alias and persist the table to the local alias file
    ///
    /// The table only changes once the file has been written.
    pub fn set_alias(&mut self, name: &str, value: &str) -> Result<()> {
        let mut updated = self.aliases.clone();
        updated.set(name, value)?;
        ConfigLoader::save_aliases(&self.paths.local_aliases(), updated.as_map())?;
        self.aliases = updated;
        Ok(())
    }

    /// Rebuild the alias table from the shared and local files
    pub fn reload(&mut self) -> Result<()> {
        self.aliases = ConfigLoader::load_alias_table(&*self.paths)?;
        Ok(())
    }

    /// Execute one input line
    pub fn execute(&mut self, line: &str) -> CommandResult {
        if line.is_empty() {
            return CommandResult::empty();
        }

        if let Some(mode) = Mode::from_switch_keyword(line) {
            self.set_mode(mode);
            return CommandResult::ok(format!("Switched to {} mode", mode));
        }

        if is_builtin_command(line) {
            return self.execute_builtin(line);
        }

        match self.mode {
            Mode::JavaScript => self.execute_script(line),
            Mode::Shell => {
                if let Some(code) = line.strip_prefix('&') {
                    self.execute_script(code)
                } else if let Some(question) = line.strip_prefix('?') {
                    debug!("Routing to knowledge responder: {}", question);
                    self.knowledge.answer(question)
                } else {
                    debug!("Routing to subprocess: {}", line);
                    self.runner.run(line)
                }
            }
        }
    }

    fn execute_script(&mut self, source: &str) -> CommandResult {
        debug!("Routing to script engine: {}", source);
        let start = Instant::now();
        let result = self.engine.evaluate(source);
        result.with_execution_time(start.elapsed())
    }

    fn execute_builtin(&mut self, line: &str) -> CommandResult {
        let words = split_command(line);
        let Some(&command) = words.first() else {
            return CommandResult::failure("Empty command", USAGE_EXIT_CODE);
        };

        match command {
            "help" => CommandResult::ok(self.help_text()),
            "quit" | "exit" => CommandResult::ok("Exiting..."),
            "clear" => CommandResult::ok(CLEAR_SCREEN),
            "ask" => {
                if words.len() > 1 {
                    self.knowledge.answer(&words[1..].join(" "))
                } else {
                    CommandResult::failure(ASK_USAGE, USAGE_EXIT_CODE)
                }
            }
            "config" => self.config_command(line, &words),
            "reload" => match self.reload() {
                Ok(()) => CommandResult::ok(format!(
                    "Configuration reloaded from {}",
                    self.config_dir().display()
                )),
                Err(e) => CommandResult::failure(e.to_string(), USAGE_EXIT_CODE),
            },
            other => CommandResult::failure(format!("Unknown command: {}", other), USAGE_EXIT_CODE),
        }
    }

    fn config_command(&mut self, line: &str, words: &[&str]) -> CommandResult {
        match words {
            ["config"] => CommandResult::ok(format!(
                "Configuration directory: {}\n\
                 Configuration files:\n  \
                 {} - Main configuration\n  \
                 {} - Command aliases\n\n\
                 Use 'reload' to reload configuration from files\n",
                self.config_dir().display(),
                CONFIG_FILE,
                ALIASES_FILE
            )),
            ["config", "alias", _, ..] => self.config_alias(alias_definition(line)),
            _ => CommandResult::failure(CONFIG_USAGE, USAGE_EXIT_CODE),
        }
    }

    fn config_alias(&mut self, definition: &str) -> CommandResult {
        let Some((name, value)) = definition.split_once('=') else {
            return CommandResult::failure(CONFIG_ALIAS_USAGE, USAGE_EXIT_CODE);
        };

        let name = name.trim();
        if !is_valid_alias_name(name) {
            return CommandResult::failure(CONFIG_ALIAS_USAGE, USAGE_EXIT_CODE);
        }
        let value = strip_quotes(value);

        match self.set_alias(name, value) {
            Ok(()) => CommandResult::ok(format!("Alias set: {} = '{}'", name, value)),
            Err(e) => {
                warn!("Failed to persist alias '{}': {}", name, e);
                CommandResult::failure(e.to_string(), USAGE_EXIT_CODE)
            }
        }
    }

    fn help_text(&self) -> String {
        let mut text = String::from("Available commands:\n");
        for (name, description) in builtin_commands() {
            text.push_str(&format!("  {} - {}\n", name, description));
        }
        text.push_str("\nSpecial features:\n");
        text.push_str(
            "  &<javascript> - Execute JavaScript from shell mode (e.g., &Math.sqrt(16))\n",
        );
        text.push_str("  ?<question> - Ask a question (e.g., ?what is capital of canada)\n");
        text.push_str(&format!("\nCurrent mode: {}", self.mode));
        text
    }
}

/// Text following the `alias` token of a `config alias ...` line
fn alias_definition(line: &str) -> &str {
    line.trim_start()
        .strip_prefix("config")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix("alias"))
        .map(str::trim_start)
        .unwrap_or("")
}

/// Remove one layer of surrounding double quotes
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Assembles a [`Console`] from its collaborators
///
/// Anything not supplied falls back to the platform default: home-directory
/// configuration paths, the simulated script engine, the platform program
/// lookup and command interpreter.
#[derive(Default)]
pub struct ConsoleBuilder {
    mode: Mode,
    paths: Option<Box<dyn ConfigPaths>>,
    engine: Option<Box<dyn ScriptEngine>>,
    knowledge: Option<KnowledgeResponder>,
    locator: Option<Box<dyn ProgramLocator>>,
    runner: Option<SubprocessRunner>,
}

impl ConsoleBuilder {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config_paths(mut self, paths: impl ConfigPaths + 'static) -> Self {
        self.paths = Some(Box::new(paths));
        self
    }

    pub fn script_engine(mut self, engine: impl ScriptEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    pub fn knowledge(mut self, knowledge: KnowledgeResponder) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Program lookup for the default knowledge responder
    ///
    /// Ignored when a responder is supplied with [`ConsoleBuilder::knowledge`].
    pub fn program_locator(mut self, locator: impl ProgramLocator + 'static) -> Self {
        self.locator = Some(Box::new(locator));
        self
    }

    /// Runner for shell lines, also used by the default knowledge responder
    pub fn runner(mut self, runner: SubprocessRunner) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Build the console and load its aliases
    pub fn build(self) -> Result<Console> {
        let paths: Box<dyn ConfigPaths> = match self.paths {
            Some(paths) => paths,
            None => Box::new(HomeConfigPaths::new()),
        };
        let engine: Box<dyn ScriptEngine> = match self.engine {
            Some(engine) => engine,
            None => Box::new(SimulatedScriptEngine),
        };
        let runner = self.runner.unwrap_or_default();
        let knowledge = match self.knowledge {
            Some(knowledge) => knowledge,
            None => {
                let locator = match self.locator {
                    Some(locator) => locator,
                    None => Platform::program_locator(),
                };
                KnowledgeResponder::with_locator(locator, runner.clone())
            }
        };
        let aliases = ConfigLoader::load_alias_table(&*paths)?;

        Ok(Console {
            mode: self.mode,
            aliases,
            paths,
            engine,
            knowledge,
            runner,
        })
    }
}
