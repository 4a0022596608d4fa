use std::fmt;

use serde::{Serialize, Serializer};

/// What a successfully parsed message did to the account
///
/// Serialized as its [`TransactionKind::as_str`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionKind {
    FulizaUsed,
    FulizaRepayment,
    Received,
    Paid,
    Sent,
    MshwariWithdrawal,
    MshwariDeposit,
    Airtime,
    Withdraw,
    BalanceCheck,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::FulizaUsed => "FULIZA_USED",
            TransactionKind::FulizaRepayment => "FULIZA_REPAYMENT",
            TransactionKind::Received => "RECEIVED",
            TransactionKind::Paid => "PAID",
            TransactionKind::Sent => "SENT",
            TransactionKind::MshwariWithdrawal => "MSHWARI_WITHDRAWAL",
            TransactionKind::MshwariDeposit => "MSHWARI_DEPOSIT",
            TransactionKind::Airtime => "AIRTIME",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::BalanceCheck => "BALANCE_CHECK",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
