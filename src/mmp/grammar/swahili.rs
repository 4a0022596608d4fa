use super::{Category, Grammar, KindRule};

use crate::{Language, TransactionKind};

pub static GRAMMAR: Grammar = Grammar {
    language: Language::Swahili,
    header: r"(?P<transaction_id>[A-Z0-9]{10})\s+Imethibitishwa\.?\s*",
    categories: CATEGORIES,
    failure: FAILURE,
};

const CATEGORIES: &[Category] = &[
    Category {
        name: "KUTUMA",
        kind: KindRule::Fixed(TransactionKind::Sent),
        pattern: concat!(
            r"Ksh\s?(?P<kutuma_amount>{amount})\simetumwa\skwa\s",
            r"(?P<kutuma_name>[^0-9]+?)\s(?P<kutuma_phone>{phone})\s",
            r"(?:tarehe|siku)\s(?P<kutuma_date>{date})\ssaa\s(?P<kutuma_time>{time})",
        ),
    },
    Category {
        name: "KUPOKEA",
        kind: KindRule::Fixed(TransactionKind::Received),
        pattern: concat!(
            r"Umepokea\sKsh\s?(?P<kupokea_amount>{amount})\skutoka\s",
            r"(?P<kupokea_name>[^0-9]+?)\s(?P<kupokea_phone>{phone})\s",
            r"mnamo\s(?P<kupokea_date>{date})\ssaa\s(?P<kupokea_time>{time})",
        ),
    },
    Category {
        name: "SALIO",
        kind: KindRule::Fixed(TransactionKind::BalanceCheck),
        pattern: concat!(
            r"Baki\syako\sni:\sAkaunti\sya\sM-PESA\s:\sKsh\s?(?P<salio_amount>{amount})\s",
            r"tarehe\s(?P<salio_date>{date})\ssaa\s(?P<salio_time>{time})",
        ),
    },
    Category {
        name: "KULIPA_TILL",
        kind: KindRule::Fixed(TransactionKind::Paid),
        pattern: concat!(
            r"Umelipa\sKsh\s?(?P<kulipa_till_amount>{amount})\skwa\s",
            r"(?P<kulipa_till_name>[^0-9]+?)\s(?:(?:tarehe|siku)\s)?",
            r"(?P<kulipa_till_date>{date})\s(?:saa\s)?(?P<kulipa_till_time>{time})",
        ),
    },
    Category {
        name: "DATA",
        kind: KindRule::Fixed(TransactionKind::Paid),
        pattern: concat!(
            r"Ksh\s?(?P<data_amount>{amount})\szimetumwa\skwa\s",
            r"(?P<data_name>SAFARICOM\sDATA\sBUNDLES)",
            r"(?:\skwa\sakaunti\sSAFARICOM\sDATA\sBUNDLES)?\s",
            r"mnamo\s(?P<data_date>{date})\ssaa\s(?P<data_time>{time})",
        ),
    },
    Category {
        name: "MJAZO",
        kind: KindRule::Fixed(TransactionKind::Airtime),
        pattern: concat!(
            r"Umenunua\sKsh\s?(?P<mjazo_amount>{amount})\sya\smjazo\s",
            r"(?:siku|tarehe)\s(?P<mjazo_date>{date})\ssaa\s(?P<mjazo_time>{time})",
        ),
    },
    Category {
        name: "PAYBILL",
        kind: KindRule::Fixed(TransactionKind::Paid),
        pattern: concat!(
            r"Ksh\s?(?P<paybill_amount>{amount})\simetumwa\skwa\s",
            r"(?P<paybill_name>[^0-9]+?)\skwa\sakaunti\snambari\s(?P<paybill_account>\d+)",
            r"(?:\s(?:tarehe|siku)\s(?P<paybill_date>{date})\ssaa\s(?P<paybill_time>{time}))?",
        ),
    },
    Category {
        name: "KUPOKEA_BANK",
        kind: KindRule::Fixed(TransactionKind::Received),
        pattern: concat!(
            r"Umepokea\sKsh\s?(?P<kupokea_bank_amount>{amount})\skutoka\s",
            r"(?P<kupokea_bank_name>[^0-9]+?)\s(?P<kupokea_bank_account>\d+)\s",
            r"mnamo\s(?P<kupokea_bank_date>{date})\ssaa\s(?P<kupokea_bank_time>{time})",
        ),
    },
    Category {
        name: "POCHI_LA_BIASHARA",
        kind: KindRule::Fixed(TransactionKind::Sent),
        pattern: concat!(
            r"Ksh\s?(?P<pochi_la_biashara_amount>{amount})\simetumwa\skwa\s",
            r"(?P<pochi_la_biashara_name>[^0-9]+?)\s(?:tarehe|siku)\s",
            r"(?P<pochi_la_biashara_date>{date})\ssaa\s(?P<pochi_la_biashara_time>{time})",
        ),
    },
];

const FAILURE: &str = concat!(
    r"Hakuna\spesa\sza\skutosha",
    r"|Imefeli",
    r"|Umekataa\skuidhinisha\s(?:amali|malipo)",
    r"|Huduma\shi\shaipatikani",
);
