use crate::batch::BatchReport;
use crate::{Money, Result, TransactionKind};

use std::collections::BTreeMap;

use serde::Serialize;

/// Aggregate figures over one processed batch
///
/// Declined transactions (`failed_transactions`) and lines that couldn't be parsed
/// at all (`errored_lines`) are counted separately.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct Summary {
    pub total_transactions: usize,
    pub successful_transactions: usize,
    pub failed_transactions: usize,
    pub errored_lines: usize,
    pub transaction_types: BTreeMap<TransactionKind, usize>,
    pub total_amount_processed: Money,
    pub average_transaction_amount: Money,
    pub total_transaction_costs: Money,
}

impl Summary {
    pub fn build(report: &BatchReport) -> Result<Self> {
        let mut summary = Summary {
            total_transactions: report.transactions.len(),
            errored_lines: report.errors.len(),
            ..Summary::default()
        };

        for tx in report.transactions.iter() {
            if tx.is_failed() {
                summary.failed_transactions += 1;
                continue;
            }

            summary.successful_transactions += 1;

            if let Some(kind) = tx.kind {
                *summary.transaction_types.entry(kind).or_insert(0) += 1;
            }

            if let Some(amount) = &tx.amount {
                summary.total_amount_processed.add(amount)?;
            }

            if let Some(cost) = &tx.transaction_cost {
                summary.total_transaction_costs.add(cost)?;
            }
        }

        summary.average_transaction_amount = summary
            .total_amount_processed
            .divide(summary.successful_transactions);

        log::debug!("Built summary: {summary:?}");

        return Ok(summary);
    }
}
