mod kind;
mod outcome;
mod transaction;
mod warning;

pub use kind::TransactionKind;
pub use outcome::TransactionOutcome;
pub use transaction::Transaction;
pub use warning::ParseWarning;
