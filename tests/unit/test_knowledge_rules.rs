//! Unit tests for the knowledge responder
//!
//! Rule order and matching are checked through the public `answer` API with
//! injected program lookups.

use cll::error::Result;
use cll::knowledge::ASK_PROGRAM;
use cll::platform::ProgramLocator;
use cll::{KnowledgeResponder, SubprocessRunner};
use std::path::PathBuf;

struct NoPrograms;

impl ProgramLocator for NoPrograms {
    fn find_program(&self, _program: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

struct BrokenLookup;

impl ProgramLocator for BrokenLookup {
    fn find_program(&self, program: &str) -> Result<Option<PathBuf>> {
        Err(cll::Error::ProgramLookupFailed {
            program: program.to_string(),
            reason: "which is missing".to_string(),
        })
    }
}

fn responder() -> KnowledgeResponder {
    KnowledgeResponder::with_locator(Box::new(NoPrograms), SubprocessRunner::new())
}

fn answer(question: &str) -> String {
    let result = responder().answer(question);
    assert!(result.success);
    assert_eq!(result.exit_code, 0);
    result.output
}

#[cfg(test)]
mod knowledge_rule_tests {
    use super::*;

    #[test]
    fn test_capitals() {
        assert_eq!(answer("What is the capital of Canada?"), "Ottawa");
        assert_eq!(answer("capital of france"), "Paris");
        assert_eq!(answer("CAPITAL OF JAPAN"), "Tokyo");
        assert_eq!(answer("what's the capital of the USA"), "Washington, D.C.");
        assert_eq!(answer("capital of the uk"), "London");
    }

    #[test]
    fn test_country_names_without_capital() {
        assert_eq!(answer("united states"), "Washington, D.C.");
        assert_eq!(answer("tell me about the United Kingdom"), "London");
        // The other countries need the word "capital"
        assert_ne!(answer("canada"), "Ottawa");
        assert_ne!(answer("usa"), "Washington, D.C.");
    }

    #[test]
    fn test_earlier_rules_win() {
        assert_eq!(answer("capital of japan or the united states"), "Tokyo");
        // "update" contains "date", checked before the greeting
        let output = answer("hi, any update?");
        assert_ne!(output, "Hello! How can I help you today?");
        assert_eq!(output.split_whitespace().count(), 5);
    }

    #[test]
    fn test_time_and_date() {
        for question in ["what time is it", "today's date"] {
            let output = answer(question);
            assert!(!output.ends_with('\n'));
            // e.g. "Fri Oct 16 09:41:07 2026"
            assert_eq!(output.split_whitespace().count(), 5, "got '{}'", output);
            assert_eq!(output.matches(':').count(), 2);
        }
    }

    #[test]
    fn test_greeting_and_help() {
        assert_eq!(answer("hello there"), "Hello! How can I help you today?");
        assert_eq!(answer("Hi"), "Hello! How can I help you today?");
        let help = answer("help");
        assert!(help.starts_with("I can help answer basic questions about:\n"));
        assert!(help.contains("World capitals"));
    }

    #[test]
    fn test_unknown_topic_without_ask() {
        let output = answer("capital of Mars");
        assert!(output.starts_with("I don't have built-in knowledge about that topic."));
        assert!(output.contains("'ask'"));
    }

    #[test]
    fn test_lookup_error_counts_as_absent() {
        let responder =
            KnowledgeResponder::with_locator(Box::new(BrokenLookup), SubprocessRunner::new());
        let result = responder.answer("capital of Mars");
        assert!(result.success);
        assert!(result.output.starts_with("I don't have built-in knowledge"));
    }
}

#[cfg(all(test, unix))]
mod delegation_tests {
    use super::*;
    use cll::platform::ShellOps;
    use std::process::Command;
    use std::sync::Arc;

    struct AskInstalled;

    impl ProgramLocator for AskInstalled {
        fn find_program(&self, program: &str) -> Result<Option<PathBuf>> {
            Ok(Some(PathBuf::from("/usr/local/bin").join(program)))
        }
    }

    /// Echoes the line it was asked to run instead of running it
    struct EchoShell {
        exit_code: i32,
    }

    impl ShellOps for EchoShell {
        fn interpreter(&self) -> PathBuf {
            PathBuf::from("/bin/sh")
        }

        fn interpreter_command(&self, line: &str) -> Command {
            let mut command = Command::new(self.interpreter());
            command
                .arg("-c")
                .arg(format!("printf 'ran: %s' \"$1\"; exit {}", self.exit_code))
                .arg("sh")
                .arg(line);
            command
        }
    }

    fn delegating(exit_code: i32) -> KnowledgeResponder {
        KnowledgeResponder::with_locator(
            Box::new(AskInstalled),
            SubprocessRunner::with_shell(Arc::new(EchoShell { exit_code })),
        )
    }

    #[test]
    fn test_unmatched_question_goes_to_ask() {
        let result = delegating(0).answer("Capital of Mars");
        assert!(result.success);
        assert_eq!(
            result.output,
            format!("ran: {} \"Capital of Mars\"", ASK_PROGRAM)
        );
    }

    #[test]
    fn test_failed_delegation_reports_output_as_error() {
        let result = delegating(4).answer("Capital of Mars");
        assert!(!result.success);
        assert_eq!(result.exit_code, 4);
        assert!(result.output.is_empty());
        assert!(result.error.starts_with("ran: ask"));
    }

    #[test]
    fn test_rules_still_take_priority() {
        assert_eq!(delegating(0).answer("capital of france").output, "Paris");
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let mut responder = delegating(0);
        responder.set_ask_fallback(false);
        let result = responder.answer("Capital of Mars");
        assert!(result.output.starts_with("I don't have built-in knowledge"));
    }
}
