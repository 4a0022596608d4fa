pub mod batch;
mod failure;
pub mod grammar;
pub mod ids;
mod language;
pub mod matcher;
pub mod models;
mod money;
pub mod normalizer;
mod parser;
mod result;
pub mod summary;

pub use language::Language;
pub use models::{ParseWarning, Transaction, TransactionKind, TransactionOutcome};
pub use money::{Money, MoneyError};
pub use parser::{MessageParser, ParseError};
pub use result::{ParseResult, Result};
