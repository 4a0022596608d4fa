use crate::failure::FailureDetector;
use crate::grammar::{self, Grammar};
use crate::matcher::CompositeMatcher;
use crate::money::MoneyError;
use crate::normalizer;
use crate::{Language, ParseResult, Result, Transaction};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message: {0}")]
    InputInvalid(String),

    #[error("Message format not recognized")]
    FormatUnrecognized,

    #[error("Couldn't convert {field} to an amount: {source}")]
    NumericConversion {
        field: String,
        #[source]
        source: MoneyError,
    },

    #[error("Internal grammar error: {0}")]
    Internal(String),
}

/// Compiled matcher and decline detector for one language
#[derive(Debug)]
struct LanguageRules {
    grammar: &'static Grammar,
    matcher: CompositeMatcher,
    failures: FailureDetector,
}

impl LanguageRules {
    fn compile(language: Language) -> Result<Self> {
        let grammar = grammar::for_language(language);

        return Ok(Self {
            grammar,
            matcher: CompositeMatcher::compile(grammar)?,
            failures: FailureDetector::compile(grammar)?,
        });
    }
}

/// Parses single notification messages into transactions.
///
/// All patterns are compiled once in [`MessageParser::new`]; afterwards the parser holds
/// no mutable state and can be shared freely between threads.
#[derive(Debug)]
pub struct MessageParser {
    english: LanguageRules,
    swahili: LanguageRules,
}

impl MessageParser {
    pub fn new() -> Result<Self> {
        let parser = Self {
            english: LanguageRules::compile(Language::English)?,
            swahili: LanguageRules::compile(Language::Swahili)?,
        };

        log::debug!("Message parser compiled");

        return Ok(parser);
    }

    /// Parses one message.
    ///
    /// A recognized decline is a successful parse with a failed outcome; only messages
    /// that can't be read or understood produce an error.
    pub fn parse(&self, message: &str) -> ParseResult<Transaction> {
        if message.trim().is_empty() {
            Err(ParseError::InputInvalid("Message is blank".to_string()))?
        }

        let language = Language::detect(message);
        let rules = self.rules(language);

        log::debug!("Parsing {language:?} message: {message:?}");

        if let Some(reason) = rules.failures.detect(message) {
            log::debug!("Recognized declined transaction: {reason:?}");
            return Ok(Transaction::failed(reason, message));
        }

        let bag = rules
            .matcher
            .captures(message)
            .ok_or(ParseError::FormatUnrecognized)?;

        log::debug!("Matched {} groups", bag.len());

        return normalizer::normalize(bag, rules.grammar.categories, message);
    }

    /// Parses raw bytes, rejecting anything that is not UTF-8 text
    pub fn parse_bytes(&self, message: &[u8]) -> ParseResult<Transaction> {
        let message = std::str::from_utf8(message).map_err(|e| {
            ParseError::InputInvalid(format!("Message must be UTF-8 text: {e}"))
        })?;

        return self.parse(message);
    }

    fn rules(&self, language: Language) -> &LanguageRules {
        match language {
            Language::English => &self.english,
            Language::Swahili => &self.swahili,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Money, ParseWarning, TransactionKind};

    use chrono::NaiveDate;

    const ENGLISH_RECEIVED: &str = "QCD1EFGH23 Confirmed.You have received Ksh1,500.00 from JOHN DOE 0712345678 on 5/3/24 at 2:15 PM New M-PESA balance is Ksh3,200.00. Separate personal and business funds through Pochi la Biashara on *334#.";
    const ENGLISH_SENT: &str = "QCD1EFGH25 Confirmed. Ksh500.00 sent to JANE DOE 0722000000 on 5/3/24 at 2:15 PM. New M-PESA balance is Ksh2,700.00. Transaction cost, Ksh7.00. Amount you can transact within the day is 299,500.00.";
    const ENGLISH_PAYBILL: &str = "QCD1EFGH26 Confirmed. Ksh1,000.00 sent to KPLC PREPAID for account 12345678 on 5/3/24 at 2:15 PM New M-PESA balance is Ksh1,700.00. Transaction cost, Ksh23.00.";
    const ENGLISH_WITHDRAW: &str = "QCD1EFGH27 Confirmed.on 5/3/24 at 2:15 PMWithdraw Ksh1,000.00 from 123456 - JOHN AGENT SHOP New M-PESA balance is Ksh500.00. Transaction cost, Ksh29.00.";
    const ENGLISH_MSHWARI: &str = "QCD1EFGH32 Confirmed.Ksh500.00 transferred from M-Shwari account on 5/3/24 at 2:15 PM. M-Shwari balance is Ksh1,000.00 .M-PESA balance is Ksh1,500.00 .Transaction cost Ksh.0.00";
    const ENGLISH_FULIZA_USED: &str = "QCD1EFGH33 Confirmed. Fuliza M-PESA amount is Ksh 150.00. Interest charged Ksh 1.50. Total Fuliza M-PESA outstanding amount is Ksh 151.50 due on 04/04/24. To check daily charges, Dial *234*0#OK Select Query Charges";
    const ENGLISH_FULIZA_REPAYMENT: &str = "QCD1EFGH34 Confirmed. Ksh 100.00 from your M-PESA has been used to fully pay your outstanding Fuliza M-PESA. Available Fuliza M-PESA limit is Ksh 1,000.00. M-PESA balance is Ksh 50.00.";
    const ENGLISH_BALANCE_CHECK: &str = "QCD1EFGH35 Confirmed. Your account balance was: M-PESA Account : Ksh1,234.00 on 5/3/24 at 10:00 AM. Transaction cost, Ksh0.00.";

    const SWAHILI_KUTUMA: &str = "QCD1EFGH28 Imethibitishwa. Ksh500.00 imetumwa kwa JANE DOE 0722000000 tarehe 5/3/24 saa 2:15 PM. Baki yako mpya katika M-PESA ni Ksh2,700.00. Gharama ya kutuma ni Ksh7.00. Kiwango cha Pesa unachoweza kutuma kwa siku ni 299,500.00.";
    const SWAHILI_KUPOKEA: &str = "QCD1EFGH36 Imethibitishwa. Umepokea Ksh2,500.00 kutoka JOHN DOE 0712345678 mnamo 5/3/24 saa 6:40 PM. Baki mpya ya M-PESA ni Ksh3,000.00.";
    const SWAHILI_KUPOKEA_BANK: &str = "QCD1EFGH37 Imethibitishwa. Umepokea Ksh10,000.00 kutoka EQUITY BANK 247247 mnamo 5/3/24 saa 9:00 AM. Baki mpya ya M-PESA ni Ksh10,500.00.";
    const SWAHILI_PAYBILL: &str = "QCD1EFGH38 Imethibitishwa. Ksh1,000.00 imetumwa kwa KPLC PREPAID kwa akaunti nambari 12345678 tarehe 5/3/24 saa 2:15 PM. Baki yako mpya katika M-PESA ni Ksh1,700.00. Gharama ya kutuma ni Ksh23.00.";
    const SWAHILI_POCHI: &str = "QCD1EFGH39 Imethibitishwa. Ksh300.00 imetumwa kwa MAMA MBOGA tarehe 5/3/24 saa 9:05 AM. Baki yako mpya katika M-PESA ni Ksh400.00.";
    const SWAHILI_KULIPA_TILL: &str = "QCD1EFGH40 Imethibitishwa. Umelipa Ksh200.00 kwa NAIVAS SUPERMARKET tarehe 5/3/24 saa 2:15 PM. Baki yako mpya katika M-PESA ni Ksh1,500.00.";
    const SWAHILI_DATA: &str = "QCD1EFGH41 Imethibitishwa. Ksh99.00 zimetumwa kwa SAFARICOM DATA BUNDLES kwa akaunti SAFARICOM DATA BUNDLES mnamo 5/3/24 saa 8:00 PM. Baki yako mpya katika M-PESA ni Ksh401.00.";
    const SWAHILI_MJAZO: &str = "QCD1EFGH42 Imethibitishwa. Umenunua Ksh50.00 ya mjazo siku 5/3/24 saa 7:30 AM. Baki yako mpya katika M-PESA ni Ksh351.00.";
    const SWAHILI_SALIO: &str = "QCD1EFGH43 Imethibitishwa. Baki yako ni: Akaunti ya M-PESA : Ksh1,234.00 Tarehe 5/3/24 saa 10:00 AM.";

    fn parser() -> MessageParser {
        MessageParser::new().unwrap()
    }

    fn timestamp(day: u32, hour: u32, minute: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, day).and_then(|d| d.and_hms_opt(hour, minute, 0))
    }

    #[test]
    fn parse_english_received() {
        let tx = parser().parse(ENGLISH_RECEIVED).unwrap();

        assert!(tx.is_success());
        assert_eq!(tx.kind, Some(TransactionKind::Received));
        assert_eq!(tx.transaction_id.unwrap().0, "QCD1EFGH23");
        assert_eq!(tx.amount, Some(Money(15_000_000)));
        assert_eq!(tx.counterparty_name.as_deref(), Some("JOHN DOE"));
        assert_eq!(tx.counterparty_phone.as_deref(), Some("0712345678"));
        assert_eq!(tx.mpesa_balance, Some(Money(32_000_000)));
        assert_eq!(tx.timestamp, timestamp(5, 14, 15));
        assert_eq!(tx.raw_message, ENGLISH_RECEIVED);
    }

    #[test]
    fn parse_english_received_upper_case_header() {
        let tx = parser()
            .parse("QCD1EFGH23 CONFIRMED. You have received Ksh1,234.50 from JOHN DOE 0712345678")
            .unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Received));
        assert_eq!(tx.transaction_id.unwrap().0, "QCD1EFGH23");
        assert_eq!(tx.amount, Some(Money(12_345_000)));
        assert_eq!(tx.counterparty_name.as_deref(), Some("JOHN DOE"));
        assert_eq!(tx.counterparty_phone.as_deref(), Some("0712345678"));
        assert_eq!(tx.timestamp, None);
    }

    #[test]
    fn parse_english_sent() {
        let tx = parser().parse(ENGLISH_SENT).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Sent));
        assert_eq!(tx.amount, Some(Money(5_000_000)));
        assert_eq!(tx.counterparty_name.as_deref(), Some("JANE DOE"));
        assert_eq!(tx.counterparty_phone.as_deref(), Some("0722000000"));
        assert_eq!(tx.mpesa_balance, Some(Money(27_000_000)));
        assert_eq!(tx.transaction_cost, Some(Money(70_000)));
        assert_eq!(tx.daily_limit, Some(Money(2_995_000_000)));
    }

    #[test]
    fn parse_english_paybill() {
        let tx = parser().parse(ENGLISH_PAYBILL).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Sent));
        assert_eq!(tx.counterparty_name.as_deref(), Some("KPLC PREPAID"));
        assert_eq!(tx.account_number.as_deref(), Some("12345678"));
        assert_eq!(tx.counterparty_phone, None);
        assert_eq!(tx.timestamp, timestamp(5, 14, 15));
        assert_eq!(tx.transaction_cost, Some(Money(230_000)));
    }

    #[test]
    fn name_without_number_stops_at_date_clause() {
        let parser = parser();

        let received = parser
            .parse("QCD1EFGH23 Confirmed.You have received Ksh500.00 from EQUITY BULK ACCOUNT on 5/3/24 at 2:15 PM New M-PESA balance is Ksh3,200.00.")
            .unwrap();
        assert_eq!(received.kind, Some(TransactionKind::Received));
        assert_eq!(received.counterparty_name.as_deref(), Some("EQUITY BULK ACCOUNT"));
        assert_eq!(received.counterparty_phone, None);
        assert_eq!(received.timestamp, timestamp(5, 14, 15));
        assert_eq!(received.mpesa_balance, Some(Money(32_000_000)));

        let sent = parser
            .parse("QCD1EFGH25 Confirmed. Ksh500.00 sent to KPLC PREPAID on 5/3/24 at 2:15 PM. New M-PESA balance is Ksh2,700.00.")
            .unwrap();
        assert_eq!(sent.kind, Some(TransactionKind::Sent));
        assert_eq!(sent.counterparty_name.as_deref(), Some("KPLC PREPAID"));
        assert_eq!(sent.counterparty_phone, None);
        assert_eq!(sent.account_number, None);
        assert_eq!(sent.timestamp, timestamp(5, 14, 15));
        assert_eq!(sent.mpesa_balance, Some(Money(27_000_000)));
    }

    #[test]
    fn name_without_number_or_date() {
        let tx = parser()
            .parse("QCD1EFGH23 Confirmed.You have received Ksh500.00 from EQUITY BULK ACCOUNT. New M-PESA balance is Ksh3,200.00.")
            .unwrap();

        assert_eq!(tx.counterparty_name.as_deref(), Some("EQUITY BULK ACCOUNT"));
        assert_eq!(tx.counterparty_phone, None);
        assert_eq!(tx.timestamp, None);
        assert!(tx.warnings.is_empty());
    }

    #[test]
    fn masked_phone_is_kept_whole() {
        let parser = parser();

        let received = parser
            .parse("QCD1EFGH23 Confirmed.You have received Ksh500.00 from JOHN DOE 0712***678 on 5/3/24 at 2:15 PM New M-PESA balance is Ksh3,200.00.")
            .unwrap();
        assert_eq!(received.counterparty_name.as_deref(), Some("JOHN DOE"));
        assert_eq!(received.counterparty_phone.as_deref(), Some("0712***678"));
        assert_eq!(received.timestamp, timestamp(5, 14, 15));

        let sent = parser
            .parse("QCD1EFGH25 Confirmed. Ksh500.00 sent to JANE DOE 0722***000 on 5/3/24 at 2:15 PM. New M-PESA balance is Ksh2,700.00.")
            .unwrap();
        assert_eq!(sent.counterparty_phone.as_deref(), Some("0722***000"));
        assert_eq!(sent.timestamp, timestamp(5, 14, 15));
    }

    #[test]
    fn parse_english_withdraw() {
        let tx = parser().parse(ENGLISH_WITHDRAW).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Withdraw));
        assert_eq!(tx.amount, Some(Money(10_000_000)));
        assert_eq!(tx.counterparty_name.as_deref(), Some("123456 - JOHN AGENT SHOP"));
        assert_eq!(tx.timestamp, timestamp(5, 14, 15));
        assert_eq!(tx.mpesa_balance, Some(Money(5_000_000)));
        assert_eq!(tx.transaction_cost, Some(Money(290_000)));
    }

    #[test]
    fn parse_english_mshwari() {
        let tx = parser().parse(ENGLISH_MSHWARI).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::MshwariWithdrawal));
        assert_eq!(tx.amount, Some(Money(5_000_000)));
        assert_eq!(tx.mshwari_balance, Some(Money(10_000_000)));
        assert_eq!(tx.mpesa_balance, Some(Money(15_000_000)));
        assert_eq!(tx.transaction_cost, Some(Money::ZERO));
    }

    #[test]
    fn parse_english_fuliza() {
        let parser = parser();

        let used = parser.parse(ENGLISH_FULIZA_USED).unwrap();
        assert_eq!(used.kind, Some(TransactionKind::FulizaUsed));
        assert_eq!(used.amount, Some(Money(1_500_000)));
        assert_eq!(used.fuliza_interest, Some(Money(15_000)));
        assert_eq!(used.fuliza_total, Some(Money(1_515_000)));
        assert_eq!(used.fuliza_due_date, NaiveDate::from_ymd_opt(2024, 4, 4));

        let repayment = parser.parse(ENGLISH_FULIZA_REPAYMENT).unwrap();
        assert_eq!(repayment.kind, Some(TransactionKind::FulizaRepayment));
        assert_eq!(repayment.amount, Some(Money(1_000_000)));
        assert_eq!(repayment.fuliza_limit, Some(Money(10_000_000)));
        assert_eq!(repayment.mpesa_balance, Some(Money(500_000)));
    }

    #[test]
    fn parse_english_balance_check() {
        let tx = parser().parse(ENGLISH_BALANCE_CHECK).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::BalanceCheck));
        assert_eq!(tx.amount, Some(Money(12_340_000)));
        assert_eq!(tx.timestamp, timestamp(5, 10, 0));
    }

    #[test]
    fn parse_swahili_kutuma() {
        let tx = parser().parse(SWAHILI_KUTUMA).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Sent));
        assert_eq!(tx.transaction_id.unwrap().0, "QCD1EFGH28");
        assert_eq!(tx.amount, Some(Money(5_000_000)));
        assert_eq!(tx.counterparty_name.as_deref(), Some("JANE DOE"));
        assert_eq!(tx.counterparty_phone.as_deref(), Some("0722000000"));
        assert_eq!(tx.timestamp, timestamp(5, 14, 15));
        assert_eq!(tx.mpesa_balance, Some(Money(27_000_000)));
        assert_eq!(tx.transaction_cost, Some(Money(70_000)));
        assert_eq!(tx.daily_limit, Some(Money(2_995_000_000)));
    }

    #[test]
    fn parse_swahili_received() {
        let parser = parser();

        let tx = parser.parse(SWAHILI_KUPOKEA).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Received));
        assert_eq!(tx.counterparty_phone.as_deref(), Some("0712345678"));
        assert_eq!(tx.mpesa_balance, Some(Money(30_000_000)));
        assert_eq!(tx.timestamp, timestamp(5, 18, 40));

        let tx = parser.parse(SWAHILI_KUPOKEA_BANK).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Received));
        assert_eq!(tx.counterparty_name.as_deref(), Some("EQUITY BANK"));
        assert_eq!(tx.account_number.as_deref(), Some("247247"));
        assert_eq!(tx.counterparty_phone, None);
    }

    #[test]
    fn parse_swahili_payments() {
        let parser = parser();

        let tx = parser.parse(SWAHILI_PAYBILL).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Paid));
        assert_eq!(tx.counterparty_name.as_deref(), Some("KPLC PREPAID"));
        assert_eq!(tx.account_number.as_deref(), Some("12345678"));
        assert_eq!(tx.transaction_cost, Some(Money(230_000)));

        let tx = parser.parse(SWAHILI_POCHI).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Sent));
        assert_eq!(tx.counterparty_name.as_deref(), Some("MAMA MBOGA"));
        assert_eq!(tx.timestamp, timestamp(5, 9, 5));

        let tx = parser.parse(SWAHILI_KULIPA_TILL).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Paid));
        assert_eq!(tx.counterparty_name.as_deref(), Some("NAIVAS SUPERMARKET"));
        assert_eq!(tx.amount, Some(Money(2_000_000)));

        let tx = parser.parse(SWAHILI_DATA).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Paid));
        assert_eq!(tx.counterparty_name.as_deref(), Some("SAFARICOM DATA BUNDLES"));
        assert_eq!(tx.timestamp, timestamp(5, 20, 0));
    }

    #[test]
    fn parse_swahili_airtime_and_balance() {
        let parser = parser();

        let tx = parser.parse(SWAHILI_MJAZO).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::Airtime));
        assert_eq!(tx.amount, Some(Money(500_000)));

        let tx = parser.parse(SWAHILI_SALIO).unwrap();
        assert_eq!(tx.kind, Some(TransactionKind::BalanceCheck));
        assert_eq!(tx.amount, Some(Money(12_340_000)));
        assert_eq!(tx.timestamp, timestamp(5, 10, 0));
    }

    #[test]
    fn decline_takes_priority_over_category() {
        let message = "QCD1EFGH29 Confirmed. Failed. You have insufficient funds Ksh500.00 sent to JANE DOE 0722000000 on 5/3/24 at 2:15 PM.";

        let tx = parser().parse(message).unwrap();

        assert!(tx.is_failed());
        assert_eq!(tx.reason(), Some("Failed. You have insufficient funds"));
        assert_eq!(tx.kind, None);
        assert_eq!(tx.amount, None);
        assert_eq!(tx.transaction_id, None);
        assert_eq!(tx.counterparty_name, None);
        assert_eq!(tx.raw_message, message);
    }

    #[test]
    fn swahili_decline() {
        let tx = parser()
            .parse("Imefeli. Hakuna pesa za kutosha katika akaunti yako ya M-PESA kutuma Ksh500.00.")
            .unwrap();

        assert!(tx.is_failed());
        assert_eq!(tx.reason(), Some("Imefeli"));
    }

    #[test]
    fn invalid_timestamp_is_dropped_with_warning() {
        let tx = parser()
            .parse("QCD1EFGH31 Confirmed.You have received Ksh100.00 from JOHN DOE 0712345678 on 5/13/24 at 2:15 PM")
            .unwrap();

        assert!(tx.is_success());
        assert_eq!(tx.timestamp, None);
        assert_eq!(
            tx.warnings,
            vec![ParseWarning::TimestampDropped {
                date: "5/13/24".to_string(),
                time: "2:15 PM".to_string(),
            }]
        );
    }

    #[test]
    fn unrecognized_format() {
        let parser = parser();

        assert!(matches!(parser.parse("hello world"), Err(ParseError::FormatUnrecognized)));
        assert!(matches!(
            parser.parse("QCD1EFGH23 Confirmed. Something else entirely"),
            Err(ParseError::FormatUnrecognized)
        ));
    }

    #[test]
    fn invalid_input() {
        let parser = parser();

        assert!(matches!(parser.parse(""), Err(ParseError::InputInvalid(_))));
        assert!(matches!(parser.parse(" \t\n"), Err(ParseError::InputInvalid(_))));
        assert!(matches!(
            parser.parse_bytes(&[0xff, 0xfe, 0x4b]),
            Err(ParseError::InputInvalid(_))
        ));
    }

    #[test]
    fn parse_bytes_accepts_utf8() {
        let tx = parser().parse_bytes(SWAHILI_MJAZO.as_bytes()).unwrap();

        assert_eq!(tx.kind, Some(TransactionKind::Airtime));
    }

    #[test]
    fn numeric_conversion_error() {
        let res = parser().parse("QCD1EFGH24 Confirmed. Ksh1.2.3 paid to JAVA HOUSE.");

        assert!(matches!(res, Err(ParseError::NumericConversion { .. })));
    }

    #[test]
    fn parser_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MessageParser>();

        let parser = std::sync::Arc::new(parser());

        let handles: Vec<_> = [ENGLISH_SENT, SWAHILI_KUTUMA]
            .into_iter()
            .map(|message| {
                let parser = parser.clone();
                std::thread::spawn(move || parser.parse(message).map(|tx| tx.kind))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), Some(TransactionKind::Sent));
        }
    }
}
