use crate::{MessageParser, ParseError, Result, Transaction};

use std::fmt::Display;
use std::io::BufRead;

use serde::{Serialize, Serializer};

/// A line that couldn't be turned into a transaction
#[derive(Serialize, Debug)]
pub struct LineError {
    pub line: usize,
    pub message: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ParseError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub transactions: Vec<Transaction>,
    pub errors: Vec<LineError>,
}

/// Parses every non-blank line of the reader.
///
/// Bad lines are logged and collected as [`LineError`]s; they never stop the batch.
/// Only a failure to read from the reader aborts processing.
pub fn process_lines<R: BufRead>(parser: &MessageParser, reader: R) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line_num = idx + 1;
        let line = line?;

        let message = line.trim_ascii();
        if message.is_empty() {
            continue;
        }

        match parser.parse_bytes(message) {
            Ok(tx) => {
                log::debug!("Line {line_num} parsed: {tx:?}");
                report.transactions.push(tx);
            }
            Err(error) => {
                let message = String::from_utf8_lossy(message).into_owned();
                log::warn!("Error processing line {line_num}: {error}\nMessage: {message}");

                report.errors.push(LineError {
                    line: line_num,
                    message,
                    error,
                });
            }
        }
    }

    log::debug!(
        "Processed {} transactions with {} errors",
        report.transactions.len(),
        report.errors.len()
    );

    return Ok(report);
}

fn serialize_display<T: Display, S: Serializer>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
