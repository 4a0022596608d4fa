use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionOutcome {
    Success,

    /// A recognized decline, carrying the exact phrase that matched
    Failed { reason: String },
}
