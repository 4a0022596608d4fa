use super::{ParseWarning, TransactionKind, TransactionOutcome};

use crate::ids::TransactionId;
use crate::Money;

use chrono::{NaiveDate, NaiveDateTime};

use serde::Serialize;

/// Canonical record built from one message, regardless of its language
///
/// Failed records only ever carry the decline reason and the raw message.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,

    #[serde(rename = "transaction_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,

    #[serde(flatten)]
    pub outcome: TransactionOutcome,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpesa_balance: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_cost: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_limit: Option<Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mshwari_balance: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuliza_interest: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuliza_total: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuliza_limit: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuliza_due_date: Option<NaiveDate>,

    #[serde(rename = "datetime", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    pub raw_message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

impl Transaction {
    /// Successful record of the given kind, every optional field left empty
    pub fn success(kind: TransactionKind, amount: Money, raw_message: &str) -> Self {
        return Self {
            kind: Some(kind),
            outcome: TransactionOutcome::Success,
            amount: Some(amount),
            ..Self::empty(TransactionOutcome::Success, raw_message)
        };
    }

    pub fn failed(reason: &str, raw_message: &str) -> Self {
        let outcome = TransactionOutcome::Failed {
            reason: reason.to_string(),
        };

        return Self::empty(outcome, raw_message);
    }

    pub fn is_success(&self) -> bool {
        self.outcome == TransactionOutcome::Success
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, TransactionOutcome::Failed { .. })
    }

    /// The decline phrase of a failed record
    pub fn reason(&self) -> Option<&str> {
        match &self.outcome {
            TransactionOutcome::Failed { reason } => Some(reason),
            TransactionOutcome::Success => None,
        }
    }

    fn empty(outcome: TransactionOutcome, raw_message: &str) -> Self {
        Self {
            transaction_id: None,
            kind: None,
            outcome,
            amount: None,
            mpesa_balance: None,
            transaction_cost: None,
            daily_limit: None,
            counterparty_name: None,
            counterparty_phone: None,
            account_number: None,
            mshwari_balance: None,
            fuliza_interest: None,
            fuliza_total: None,
            fuliza_limit: None,
            fuliza_due_date: None,
            timestamp: None,
            raw_message: raw_message.to_string(),
            warnings: vec![],
        }
    }
}
