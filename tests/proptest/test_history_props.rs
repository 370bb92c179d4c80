//! Property-based tests for the command history

use cll::CommandHistory;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_repeated_add_is_stored_once(cmd in "[a-z ]{1,20}", repeats in 1usize..10) {
        let mut history = CommandHistory::default();
        for _ in 0..repeats {
            history.add(&cmd);
        }
        prop_assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_capacity_keeps_most_recent(capacity in 1usize..20, extra in 0usize..30) {
        let total = capacity + extra;
        let mut history = CommandHistory::new(capacity);
        for i in 0..total {
            history.add(&format!("cmd{}", i));
        }

        let expected: Vec<String> = (total.saturating_sub(capacity)..total)
            .map(|i| format!("cmd{}", i))
            .collect();
        let actual: Vec<String> = history.entries().iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_adjacent_duplicates(cmds in prop::collection::vec("[ab]{1,2}", 0..50)) {
        let mut history = CommandHistory::new(100);
        for cmd in &cmds {
            history.add(cmd);
        }
        let entries: Vec<&String> = history.entries().iter().collect();
        for pair in entries.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_previous_walks_back_to_oldest(n in 1usize..20, steps in 0usize..40) {
        let mut history = CommandHistory::default();
        for i in 0..n {
            history.add(&format!("cmd{}", i));
        }

        let mut last = String::new();
        for _ in 0..=steps {
            last = history.get_previous();
        }
        let expected_index = n - 1 - steps.min(n - 1);
        prop_assert_eq!(last, format!("cmd{}", expected_index));
    }

    #[test]
    fn test_next_after_previous_returns_to_blank(n in 1usize..20, back in 1usize..20) {
        let mut history = CommandHistory::default();
        for i in 0..n {
            history.add(&format!("cmd{}", i));
        }
        let back = back.min(n);
        for _ in 0..back {
            history.get_previous();
        }
        // Walk forward until the selection clears
        let mut blank_after = 0;
        while !history.get_next().is_empty() {
            blank_after += 1;
            prop_assert!(blank_after <= n);
        }
        prop_assert_eq!(blank_after, back - 1);
        prop_assert_eq!(history.get_next(), "");
    }
}
