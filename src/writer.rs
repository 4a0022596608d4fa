use mmp::batch::{BatchReport, LineError};
use mmp::summary::Summary;
use mmp::{Result, Transaction};

use std::{fs, path::Path};

use anyhow::Context;

use chrono::NaiveDateTime;

use serde::Serialize;

/// JSON document written at the end of a run
#[derive(Serialize, Debug)]
pub struct OutputDocument<'a> {
    pub processed_at: NaiveDateTime,
    pub input_file: String,
    pub transactions: &'a [Transaction],
    pub errors: &'a [LineError],

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl<'a> OutputDocument<'a> {
    pub fn new(input: &Path, report: &'a BatchReport, summary: Option<Summary>) -> Self {
        return Self {
            processed_at: chrono::Local::now().naive_local(),
            input_file: input.display().to_string(),
            transactions: &report.transactions,
            errors: &report.errors,
            summary,
        };
    }
}

pub fn write_to_string(document: &OutputDocument) -> Result<String> {
    let json = serde_json::to_string_pretty(document)?;
    return Ok(json);
}

pub fn write_to_file(path: &Path, contents: &str) -> Result {
    fs::write(path, contents)
        .with_context(|| format!("Couldn't write output file: {}", path.display()))?;

    return Ok(());
}
