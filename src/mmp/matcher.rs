use crate::grammar::{self, Grammar, SideField};

use std::collections::HashMap;

use regex::Regex;

/// Named captures of one composite match, keyed by group name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CaptureBag {
    values: HashMap<String, String>,
}

impl CaptureBag {
    pub fn insert(&mut self, group: &str, value: &str) {
        self.values.insert(group.to_string(), value.to_string());
    }

    pub fn trim_values(&mut self) {
        for value in self.values.values_mut() {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }
    }

    pub fn get(&self, group: &str) -> Option<&str> {
        self.values.get(group).map(String::as_str)
    }

    pub fn is_filled(&self, group: &str) -> bool {
        self.get(group).is_some_and(|value| !value.is_empty())
    }

    /// Removes a value from the bag, treating empty captures as absent
    pub fn take(&mut self, group: &str) -> Option<String> {
        self.values.remove(group).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct SideFieldScanner {
    field: SideField,
    regex: Regex,
}

/// One language's compiled grammar: optional header, category alternation, then the
/// side-field scanners
#[derive(Debug)]
pub struct CompositeMatcher {
    regex: Regex,
    side_fields: Vec<SideFieldScanner>,
}

impl CompositeMatcher {
    pub fn compile(grammar: &Grammar) -> Result<Self, regex::Error> {
        let categories = grammar
            .categories
            .iter()
            .map(|category| format!("(?P<{}>{})", category.name, grammar::expand(category.pattern)))
            .collect::<Vec<String>>()
            .join("|");

        let pattern = format!("(?is)(?:{})?(?:{})", grammar.header, categories);
        log::debug!(
            "Compiling {:?} matcher over {} categories",
            grammar.language,
            grammar.categories.len()
        );

        let regex = Regex::new(&pattern)?;

        let side_fields = SideField::SCAN_ORDER
            .iter()
            .map(|field| {
                let pattern = format!("(?is){}", grammar::expand(field.pattern()));
                Regex::new(&pattern).map(|regex| SideFieldScanner {
                    field: *field,
                    regex,
                })
            })
            .collect::<Result<Vec<SideFieldScanner>, regex::Error>>()?;

        return Ok(Self { regex, side_fields });
    }

    /// Matches the header and categories, then scans forward for side fields.
    ///
    /// The side-field cursor starts at the end of the category match and only moves
    /// forward, so a side field written before an earlier-priority one is missed.
    pub fn captures(&self, message: &str) -> Option<CaptureBag> {
        let captures = self.regex.captures(message)?;

        let mut bag = CaptureBag::default();
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = captures.name(name) {
                bag.insert(name, m.as_str());
            }
        }

        let mut cursor = captures.get(0).map_or(0, |m| m.end());

        for scanner in self.side_fields.iter() {
            let Some(side) = scanner.regex.captures_at(message, cursor) else {
                continue;
            };

            if let Some(m) = side.name(scanner.field.group()) {
                bag.insert(scanner.field.group(), m.as_str());
            }

            cursor = side.get(0).map_or(cursor, |m| m.end());
        }

        Some(bag)
    }
}
