use crate::grammar::{Category, KindRule, SideField};
use crate::ids::TransactionId;
use crate::matcher::CaptureBag;
use crate::{Money, ParseError, ParseResult, ParseWarning, Transaction, TransactionKind};

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%d/%m/%y";
const TIMESTAMP_FORMAT: &str = "%d/%m/%y %I:%M %p";

/// Turns the raw captures of a composite match into a canonical record
pub fn normalize(
    mut bag: CaptureBag,
    categories: &[Category],
    raw_message: &str,
) -> ParseResult<Transaction> {
    bag.trim_values();

    let category = resolve_category(&bag, categories)?;
    let kind = resolve_kind(category, &bag);

    log::debug!("Resolved category {} as {kind}", category.name);

    let amount = clean_amount("amount", bag.take(&category.group("amount")).as_deref())?;

    let mut tx = Transaction::success(kind, amount, raw_message);

    tx.transaction_id = bag.take("transaction_id").map(TransactionId);

    tx.counterparty_name = bag.take(&category.group("name"));
    tx.counterparty_phone = bag.take(&category.group("phone"));
    tx.account_number = bag.take(&category.group("account"));

    tx.mpesa_balance = take_amount(&mut bag, SideField::Balance.group())?;
    tx.transaction_cost = take_amount(&mut bag, SideField::TransactionCost.group())?;
    tx.daily_limit = take_amount(&mut bag, SideField::DailyLimit.group())?;

    tx.mshwari_balance = take_amount(&mut bag, "mshwari_balance")?;
    tx.fuliza_interest = take_amount(&mut bag, "fuliza_interest")?;
    tx.fuliza_total = take_amount(&mut bag, "fuliza_total")?;
    tx.fuliza_limit = take_amount(&mut bag, "fuliza_limit")?;

    if let Some(date) = bag.take("fuliza_due_date") {
        tx.fuliza_due_date = NaiveDate::parse_from_str(&date, DATE_FORMAT).ok();

        if tx.fuliza_due_date.is_none() {
            push_warning(&mut tx, ParseWarning::DueDateDropped { date });
        }
    }

    let date = bag.take(&category.group("date"));
    let time = bag.take(&category.group("time"));

    if let (Some(date), Some(time)) = (date, time) {
        tx.timestamp = assemble_timestamp(&date, &time);

        if tx.timestamp.is_none() {
            push_warning(&mut tx, ParseWarning::TimestampDropped { date, time });
        }
    }

    return Ok(tx);
}

/// First category, in declared order, whose group captured any text
pub fn resolve_category<'g>(bag: &CaptureBag, categories: &'g [Category]) -> ParseResult<&'g Category> {
    let category = categories.iter().find(|category| bag.is_filled(category.name));

    match category {
        Some(category) => Ok(category),
        None => {
            let msg = format!(
                "Composite match resolved to no category; captured {} groups",
                bag.len()
            );
            log::error!("{}", msg);
            Err(ParseError::Internal(msg))
        }
    }
}

fn resolve_kind(category: &Category, bag: &CaptureBag) -> TransactionKind {
    match category.kind {
        KindRule::Fixed(kind) => kind,
        KindRule::MshwariDirection => match bag.get("mshwari_direction") {
            Some(direction) if direction.eq_ignore_ascii_case("from") => {
                TransactionKind::MshwariWithdrawal
            }
            _ => TransactionKind::MshwariDeposit,
        },
    }
}

/// Cleans a captured monetary string; a missing capture is zero
pub fn clean_amount(field: &str, raw: Option<&str>) -> ParseResult<Money> {
    let raw = raw.unwrap_or_default();

    Money::parse(raw).map_err(|source| ParseError::NumericConversion {
        field: field.to_string(),
        source,
    })
}

fn take_amount(bag: &mut CaptureBag, group: &str) -> ParseResult<Option<Money>> {
    bag.take(group)
        .map(|raw| clean_amount(group, Some(&raw)))
        .transpose()
}

/// Joins a `D/M/YY` date and an `H:MM AM|PM` time into one timestamp.
///
/// The meridiem may be glued to the minutes or in lower case; it is normalized
/// before parsing. Invalid calendar values yield `None`.
pub fn assemble_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let time = time.trim();
    let split = time.len().checked_sub(2)?;

    let (clock, meridiem) = (time.get(..split)?, time.get(split..)?);
    let joined = format!("{} {} {}", date.trim(), clock.trim_end(), meridiem.to_uppercase());

    NaiveDateTime::parse_from_str(&joined, TIMESTAMP_FORMAT).ok()
}

fn push_warning(tx: &mut Transaction, warning: ParseWarning) {
    log::warn!("{warning} in message: {:?}", tx.raw_message);
    tx.warnings.push(warning);
}
