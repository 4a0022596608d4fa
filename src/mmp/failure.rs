use crate::grammar::Grammar;

use regex::Regex;

/// Recognizes decline phrasing before any field extraction happens
#[derive(Debug)]
pub struct FailureDetector {
    pattern: Regex,
}

impl FailureDetector {
    pub fn compile(grammar: &Grammar) -> Result<Self, regex::Error> {
        let pattern = Regex::new(grammar.failure)?;

        return Ok(Self { pattern });
    }

    /// Returns the exact decline phrase found in the message, if any
    pub fn detect<'t>(&self, message: &'t str) -> Option<&'t str> {
        self.pattern.find(message).map(|m| m.as_str())
    }
}
