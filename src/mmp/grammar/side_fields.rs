/// Optional trailing facts that are not tied to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideField {
    Balance,
    TransactionCost,
    DailyLimit,
}

impl SideField {
    /// Order in which the scanners run. Each scan starts where the previous one ended.
    pub const SCAN_ORDER: [SideField; 3] = [
        SideField::Balance,
        SideField::TransactionCost,
        SideField::DailyLimit,
    ];

    pub fn group(&self) -> &'static str {
        match self {
            SideField::Balance => "mpesa_balance",
            SideField::TransactionCost => "transaction_cost",
            SideField::DailyLimit => "daily_limit",
        }
    }

    /// Phrases are shared by both languages
    pub fn pattern(&self) -> &'static str {
        match self {
            SideField::Balance => concat!(
                r"(?:(?:New\s)?M-PESA\sbalance\sis",
                r"|Baki\s(?:yako|mpya)(?:\sya|\smpya\skatika|\skatika)\sM-PESA\sni)",
                r"\sKsh\s?(?P<mpesa_balance>{amount})",
            ),
            SideField::TransactionCost => concat!(
                r"(?:Transaction\scost,?",
                r"|Gharama\sya\s(?:kutuma|kununua|matumizi|kulipa)\sni)",
                r"\sKsh\.?\s?(?P<transaction_cost>{amount})",
            ),
            SideField::DailyLimit => concat!(
                r"(?:Amount\syou\scan\stransact\swithin\sthe\sday\sis",
                r"|Kiwango\scha\sPesa\sunachoweza\skutuma\skwa\ssiku\sni)",
                r"\s(?:Ksh\s?)?(?P<daily_limit>{amount})",
            ),
        }
    }
}
