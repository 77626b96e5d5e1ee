use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pay categories that carry a unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKey {
    Base,
    Shift,
    Shopping,
    Prep,
    Debt,
    Leader,
    Insta,
    Chief,
    Accountant,
}

impl RateKey {
    pub const ALL: [RateKey; 9] = [
        RateKey::Base,
        RateKey::Shift,
        RateKey::Shopping,
        RateKey::Prep,
        RateKey::Debt,
        RateKey::Leader,
        RateKey::Insta,
        RateKey::Chief,
        RateKey::Accountant,
    ];

    /// The key as written in rate configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateKey::Base => "BASE",
            RateKey::Shift => "SHIFT",
            RateKey::Shopping => "SHOPPING",
            RateKey::Prep => "PREP",
            RateKey::Debt => "DEBT",
            RateKey::Leader => "LEADER",
            RateKey::Insta => "INSTA",
            RateKey::Chief => "CHIEF",
            RateKey::Accountant => "ACCOUNTANT",
        }
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit prices in yen, one per [`RateKey`].
///
/// Built once at startup and only ever read afterwards. Keys missing from a
/// configuration file keep their default price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", default, deny_unknown_fields)]
pub struct RateTable {
    pub base: Decimal,
    pub shift: Decimal,
    pub shopping: Decimal,
    pub prep: Decimal,
    pub debt: Decimal,
    pub leader: Decimal,
    pub insta: Decimal,
    pub chief: Decimal,
    pub accountant: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base: dec!(300),
            shift: dec!(400),
            shopping: dec!(600),
            prep: dec!(400),
            debt: dec!(4500),
            leader: dec!(5000),
            insta: dec!(1000),
            chief: dec!(2000),
            accountant: dec!(2000),
        }
    }
}

impl RateTable {
    pub fn rate(&self, key: RateKey) -> Decimal {
        match key {
            RateKey::Base => self.base,
            RateKey::Shift => self.shift,
            RateKey::Shopping => self.shopping,
            RateKey::Prep => self.prep,
            RateKey::Debt => self.debt,
            RateKey::Leader => self.leader,
            RateKey::Insta => self.insta,
            RateKey::Chief => self.chief,
            RateKey::Accountant => self.accountant,
        }
    }
}
