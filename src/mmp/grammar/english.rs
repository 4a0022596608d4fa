use super::{Category, Grammar, KindRule};

use crate::{Language, TransactionKind};

pub static GRAMMAR: Grammar = Grammar {
    language: Language::English,
    header: r"(?P<transaction_id>[A-Z0-9]{10})\s+confirmed\.?\s*",
    categories: CATEGORIES,
    failure: FAILURE,
};

// Counterparty names are lazy runs of non-digits. A name ends at an optional
// phone or account, an optional date clause and then the end of the sentence,
// so a bare "on <date>" never becomes part of the name.
const CATEGORIES: &[Category] = &[
    Category {
        name: "RECEIVED",
        kind: KindRule::Fixed(TransactionKind::Received),
        pattern: concat!(
            r"You\shave\sreceived\sKsh\s?(?P<received_amount>{amount})\s",
            r"from\s(?P<received_name>[^0-9]+?)(?:\s(?P<received_phone>{phone}))?",
            r"(?:\son\s(?P<received_date>{date})\sat\s(?P<received_time>{time}))?",
            r"(?:\.?\s*New\b|\.?\s*$|\.\s*Transaction\b)",
        ),
    },
    Category {
        name: "PAID",
        kind: KindRule::Fixed(TransactionKind::Paid),
        pattern: concat!(
            r"Ksh\s?(?P<paid_amount>{amount})\spaid\sto\s(?P<paid_name>[^.]+)",
            r"(?:\.\s*on\s(?P<paid_date>{date})\sat\s(?P<paid_time>{time}))?",
        ),
    },
    Category {
        name: "SENT",
        kind: KindRule::Fixed(TransactionKind::Sent),
        pattern: concat!(
            r"Ksh\s?(?P<sent_amount>{amount})\ssent\sto\s(?P<sent_name>[^0-9]+?)",
            r"(?:\sfor\saccount\s(?P<sent_account>\S+?)|\s(?P<sent_phone>{phone}))?",
            r"(?:\son\s(?P<sent_date>{date})\sat\s(?P<sent_time>{time}))?",
            r"(?:\.?\s*New\b|\.?\s*$|\.\s*Transaction\b)",
        ),
    },
    Category {
        name: "MSHWARI",
        kind: KindRule::MshwariDirection,
        pattern: concat!(
            r"Ksh\s?(?P<mshwari_amount>{amount})\stransferred\s",
            r"(?P<mshwari_direction>from|to)\sM-Shwari\saccount",
            r"(?:\son\s(?P<mshwari_date>{date})\sat\s(?P<mshwari_time>{time}))?",
            r"(?:\.\s*M-Shwari\sbalance\sis\sKsh\s?(?P<mshwari_balance>{amount}))?",
        ),
    },
    Category {
        name: "AIRTIME",
        kind: KindRule::Fixed(TransactionKind::Airtime),
        pattern: concat!(
            r"You\sbought\sKsh\s?(?P<airtime_amount>{amount})\sof\sairtime",
            r"(?:\sfor\s(?P<airtime_phone>{phone}))?",
            r"(?:\son\s(?P<airtime_date>{date})\sat\s(?P<airtime_time>{time}))?",
        ),
    },
    Category {
        name: "WITHDRAW",
        kind: KindRule::Fixed(TransactionKind::Withdraw),
        // agent details stop at a period or at the balance sentence that follows them
        pattern: concat!(
            r"(?:on\s(?P<withdraw_date>{date})\sat\s(?P<withdraw_time>{time})\s*)?",
            r"Withdraw\s*Ksh\s?(?P<withdraw_amount>{amount})\s",
            r"from\s(?P<withdraw_name>[^.]+?)(?:\.|\s+New\b|$)",
        ),
    },
    Category {
        name: "BALANCE_CHECK",
        kind: KindRule::Fixed(TransactionKind::BalanceCheck),
        pattern: concat!(
            r"Your\saccount\sbalance\swas:\sM-PESA\sAccount\s:\s",
            r"Ksh\s?(?P<balance_check_amount>{amount})",
            r"(?:\son\s(?P<balance_check_date>{date})\sat\s(?P<balance_check_time>{time}))?",
        ),
    },
    Category {
        name: "FULIZA_USED",
        kind: KindRule::Fixed(TransactionKind::FulizaUsed),
        pattern: concat!(
            r"Fuliza\sM-PESA\samount\sis\sKsh\s?(?P<fuliza_used_amount>{amount})",
            r"(?:\s*Interest\scharged\sKsh\s?(?P<fuliza_interest>{amount}))?",
            r"(?:\s*Total\sFuliza\sM-PESA\soutstanding\samount\sis\s",
            r"Ksh\s?(?P<fuliza_total>{amount})",
            r"(?:\sdue\son\s(?P<fuliza_due_date>{date}))?)?",
        ),
    },
    Category {
        name: "FULIZA_REPAYMENT",
        kind: KindRule::Fixed(TransactionKind::FulizaRepayment),
        pattern: concat!(
            r"Ksh\s?(?P<fuliza_repayment_amount>{amount})\sfrom\syour\sM-PESA\s",
            r"has\sbeen\sused\sto\s(?:fully|partially)\spay\syour\soutstanding\sFuliza\sM-PESA",
            r"(?:\.\s*Available\sFuliza\sM-PESA\slimit\sis\sKsh\s?(?P<fuliza_limit>{amount}))?",
        ),
    },
];

// longer phrases come first so the reported reason is the full phrase
const FAILURE: &str = concat!(
    r"Failed\.\s(?:",
    r"You\sdo\snot\shave\senough\smoney",
    r"|Insufficient\sfunds\sin\syour\sM-PESA\saccount\sas\swell\sas\sFuliza\sM-PESA",
    r"|Insufficient\sfunds\sin\syour\sM-PESA\saccount",
    r"|You\shave\sinsufficient\sfunds\sin\syour\sM-Shwari\saccount",
    r"|You\shave\sinsufficient\sfunds",
    r"|You\shave\sreached\syour\sFuliza\sM-PESA\slimit",
    r"|Your\sFuliza\sM-PESA\slimit\sis\snot\savailable\sat\sthis\stime",
    r")",
);
