//! Fixed pattern tables for every message shape the parser understands.
//!
//! Each language has an optional header, an ordered list of categories and a
//! failure pattern. Category order matters: when a match is resolved, the first
//! category whose group captured text decides the transaction kind.
//!
//! Inside a category pattern, groups are named `<category>_<role>` (lowercased
//! category name) so the normalizer can find the amount, party and date fields
//! without a per-category mapping. Roles: `amount`, `name`, `phone`, `account`,
//! `date`, `time`.

mod english;
pub mod side_fields;
mod swahili;

use crate::{Language, TransactionKind};

pub use side_fields::SideField;

const AMOUNT: &str = r"[\d,.]+";
const DATE: &str = r"\d{1,2}/\d{1,2}/\d{2}";
const TIME: &str = r"\d{1,2}:\d{2}\s*[AP]M";
// 9 to 12 characters, middle digits may be masked with `*`
const PHONE: &str = r"\d[\d*]{7,10}\d";

/// How a matched category turns into a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRule {
    Fixed(TransactionKind),

    /// `from` M-Shwari is a withdrawal, `to` M-Shwari is a deposit
    MshwariDirection,
}

#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub kind: KindRule,
    pub pattern: &'static str,
}

impl Category {
    /// Name of the capture group holding `role` for this category
    pub fn group(&self, role: &str) -> String {
        format!("{}_{}", self.name.to_lowercase(), role)
    }
}

#[derive(Debug)]
pub struct Grammar {
    pub language: Language,
    pub header: &'static str,
    pub categories: &'static [Category],
    pub failure: &'static str,
}

pub fn for_language(language: Language) -> &'static Grammar {
    match language {
        Language::English => &english::GRAMMAR,
        Language::Swahili => &swahili::GRAMMAR,
    }
}

/// Replaces the `{amount}`, `{date}`, `{time}` and `{phone}` placeholders with their patterns
pub fn expand(pattern: &str) -> String {
    pattern
        .replace("{amount}", AMOUNT)
        .replace("{date}", DATE)
        .replace("{time}", TIME)
        .replace("{phone}", PHONE)
}
