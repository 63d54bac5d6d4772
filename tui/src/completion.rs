//! Prefix completion over the command set.
//!
//! The rule is deliberately simple: the first command name in enumeration
//! order whose name starts with the trimmed input wins. A completed
//! `project` gains a trailing space to ease argument entry. Prefix matching
//! lives only here; dispatch resolves exact names.

use termfolio_core::command::CommandKind;


/// Completes partial input to a known command name.
pub struct Completer {
    names: Vec<&'static str>,
}

impl Completer {
    /// Create a completer over the full command set.
    pub fn new() -> Self {
        Completer {
            names: CommandKind::ALL.iter().map(|cmd| cmd.name()).collect(),
        }
    }

    /// Complete the input, or return `None` when nothing matches.
    ///
    /// Blank input never completes. Completion is idempotent: an already
    /// complete name maps to itself.
    pub fn complete(&self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let matched = self.names.iter().find(|name| name.starts_with(trimmed))?;
        if *matched == "project" {
            Some(format!("{} ", matched))
        } else {
            Some((*matched).to_string())
        }
    }
}

impl Default for Completer {
    fn default() -> Self {
        Self::new()
    }
}
