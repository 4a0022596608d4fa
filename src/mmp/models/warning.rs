use std::fmt;

use serde::Serialize;

/// Soft, non-fatal note about a field that was captured but could not be used
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum ParseWarning {
    TimestampDropped { date: String, time: String },
    DueDateDropped { date: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseWarning::TimestampDropped { date, time } => {
                write!(f, "Dropped invalid timestamp: {date:?} {time:?}")
            }
            ParseWarning::DueDateDropped { date } => {
                write!(f, "Dropped invalid due date: {date:?}")
            }
        }
    }
}
