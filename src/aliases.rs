//! User-defined command aliases
//!
//! An alias replaces the first whitespace-delimited token of a line with its
//! value; the remaining tokens are appended after a single space. The table
//! is layered at load time (shared file first, application file second) and
//! later entries overwrite earlier ones.

use crate::commands::split_command;
use crate::error::{Error, Result};
use std::collections::btree_map::{self, BTreeMap};

/// Whether `name` can be used as an alias key
pub fn is_valid_alias_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// Mapping from alias name to replacement text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite an alias
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        if !is_valid_alias_name(name) {
            return Err(Error::InvalidAliasName {
                name: name.to_string(),
            });
        }
        self.aliases.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Entries sorted by name
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.aliases.iter()
    }

    /// Layer `mapping` over the table, overwriting existing names
    pub fn merge(&mut self, mapping: BTreeMap<String, String>) {
        self.aliases.extend(mapping);
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Expand the first token of `line` if it names an alias
    ///
    /// Arguments are re-joined with single spaces, so runs of whitespace
    /// collapse. Lines whose first token is not an alias come back unchanged.
    pub fn expand(&self, line: &str) -> String {
        let words = split_command(line);
        let Some((first, args)) = words.split_first() else {
            return line.to_string();
        };

        match self.aliases.get(*first) {
            Some(value) => {
                let mut expanded = value.clone();
                for arg in args {
                    expanded.push(' ');
                    expanded.push_str(arg);
                }
                expanded
            }
            None => line.to_string(),
        }
    }
}

impl From<BTreeMap<String, String>> for AliasTable {
    fn from(aliases: BTreeMap<String, String>) -> Self {
        Self { aliases }
    }
}
