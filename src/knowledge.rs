//! Keyword-rule question answering
//!
//! Questions are lower-cased and tested against an ordered table of rules;
//! the first rule whose trigger matches supplies the answer. When nothing
//! matches, an external `ask` program found on the search path gets the
//! original question instead.

use crate::execution::SubprocessRunner;
use crate::models::CommandResult;
use crate::platform::{Platform, ProgramLocator};
use chrono::Local;
use std::time::Instant;

/// External program consulted when no rule matches
pub const ASK_PROGRAM: &str = "ask";

/// `ctime`-style timestamp layout
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const GREETING: &str = "Hello! How can I help you today?";

const CAPABILITIES: &str = "I can help answer basic questions about:\n\
- World capitals (e.g., 'what is capital of canada')\n\
- Current time and date\n\
- Basic greetings\n\
Type 'help' for console commands or try asking me something!";

const NO_KNOWLEDGE: &str = "I don't have built-in knowledge about that topic. \
I can answer questions about world capitals, time, and basic greetings. \
For more advanced questions, please install an assistant CLI or add 'ask' to your PATH.";

/// Condition a lower-cased question must meet for a rule to fire
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// Every keyword is present
    All(&'static [&'static str]),
    /// At least one keyword is present
    Any(&'static [&'static str]),
    /// Every keyword of the first list is present, or any of the second
    AllOrAny(&'static [&'static str], &'static [&'static str]),
}

impl Trigger {
    fn matches(&self, question: &str) -> bool {
        match *self {
            Trigger::All(words) => words.iter().all(|w| question.contains(w)),
            Trigger::Any(words) => words.iter().any(|w| question.contains(w)),
            Trigger::AllOrAny(all, any) => {
                Trigger::All(all).matches(question) || Trigger::Any(any).matches(question)
            }
        }
    }
}

/// Answer produced by a matching rule
#[derive(Debug, Clone, Copy)]
enum Reply {
    Text(&'static str),
    LocalTime,
}

impl Reply {
    fn render(&self) -> String {
        match *self {
            Reply::Text(text) => text.to_string(),
            Reply::LocalTime => Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A single (trigger, reply) pair
#[derive(Debug, Clone, Copy)]
struct KnowledgeRule {
    name: &'static str,
    trigger: Trigger,
    reply: Reply,
}

/// Rules in priority order; the first match wins.
///
/// The United States and United Kingdom rules also fire on the country name
/// alone, without "capital".
const RULES: &[KnowledgeRule] = &[
    KnowledgeRule {
        name: "capital-canada",
        trigger: Trigger::All(&["capital", "canada"]),
        reply: Reply::Text("Ottawa"),
    },
    KnowledgeRule {
        name: "capital-france",
        trigger: Trigger::All(&["capital", "france"]),
        reply: Reply::Text("Paris"),
    },
    KnowledgeRule {
        name: "capital-japan",
        trigger: Trigger::All(&["capital", "japan"]),
        reply: Reply::Text("Tokyo"),
    },
    KnowledgeRule {
        name: "capital-usa",
        trigger: Trigger::AllOrAny(&["capital", "usa"], &["united states"]),
        reply: Reply::Text("Washington, D.C."),
    },
    KnowledgeRule {
        name: "capital-uk",
        trigger: Trigger::AllOrAny(&["capital", "uk"], &["united kingdom"]),
        reply: Reply::Text("London"),
    },
    KnowledgeRule {
        name: "time",
        trigger: Trigger::Any(&["time", "date"]),
        reply: Reply::LocalTime,
    },
    KnowledgeRule {
        name: "greeting",
        trigger: Trigger::Any(&["hello", "hi"]),
        reply: Reply::Text(GREETING),
    },
    KnowledgeRule {
        name: "help",
        trigger: Trigger::Any(&["help"]),
        reply: Reply::Text(CAPABILITIES),
    },
];

/// Answers free-text questions
pub struct KnowledgeResponder {
    locator: Box<dyn ProgramLocator>,
    runner: SubprocessRunner,
    ask_fallback: bool,
}

impl KnowledgeResponder {
    /// Create a responder using the platform program lookup
    pub fn new() -> Self {
        Self::with_locator(Platform::program_locator(), SubprocessRunner::new())
    }

    /// Create a responder with an injected program lookup and runner
    pub fn with_locator(locator: Box<dyn ProgramLocator>, runner: SubprocessRunner) -> Self {
        Self {
            locator,
            runner,
            ask_fallback: true,
        }
    }

    /// Enable or disable delegation to the external `ask` program
    pub fn set_ask_fallback(&mut self, enabled: bool) {
        self.ask_fallback = enabled;
    }

    /// Answer `question`
    pub fn answer(&self, question: &str) -> CommandResult {
        let start = Instant::now();
        let lowered = question.to_lowercase();

        if let Some(rule) = RULES.iter().find(|rule| rule.trigger.matches(&lowered)) {
            debug!("Question matched rule '{}'", rule.name);
            return CommandResult::ok(rule.reply.render()).with_execution_time(start.elapsed());
        }

        if self.ask_program_available() {
            info!("Delegating question to '{}'", ASK_PROGRAM);
            return self
                .runner
                .run_program(&format!("{} \"{}\"", ASK_PROGRAM, question));
        }

        CommandResult::ok(NO_KNOWLEDGE).with_execution_time(start.elapsed())
    }

    fn ask_program_available(&self) -> bool {
        if !self.ask_fallback {
            return false;
        }
        match self.locator.find_program(ASK_PROGRAM) {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }
}

impl Default for KnowledgeResponder {
    fn default() -> Self {
        Self::new()
    }
}
