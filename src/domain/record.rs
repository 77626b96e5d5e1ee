use super::rates::RateKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized student identifier.
///
/// Stored ids and queried ids go through the same normalization, so
/// `" 25b12345 "` and `"25B12345.0"` both resolve to `25B12345`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    /// Normalizes a raw identifier, returning `None` when nothing is left.
    ///
    /// Anything from the first `.` onward is dropped (sheets that store ids as
    /// numbers hand them back as `25012345.0`), surrounding whitespace is
    /// trimmed and letters are upper-cased.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let head = trimmed
            .split_once('.')
            .map_or(trimmed, |(head, _)| head)
            .trim();
        if head.is_empty() {
            None
        } else {
            Some(Self(head.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named responsibility that earns a flat bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Leader,
    Insta,
    Chief,
    Accountant,
}

impl Role {
    /// Bonus enumeration order. Base pay is deliberately absent: it is paid
    /// once through `base_units` and never again as a role.
    pub const ALL: [Role; 4] = [Role::Leader, Role::Insta, Role::Chief, Role::Accountant];

    pub fn rate_key(&self) -> RateKey {
        match self {
            Role::Leader => RateKey::Leader,
            Role::Insta => RateKey::Insta,
            Role::Chief => RateKey::Chief,
            Role::Accountant => RateKey::Accountant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Leader => "Leader",
            Role::Insta => "Instagram",
            Role::Chief => "Section chief",
            Role::Accountant => "Accountant",
        }
    }
}

/// One staff member's row from the payout sheet.
///
/// Every numeric field is a plain count; blank cells arrive here as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub student_id: StudentId,
    pub name: String,
    pub base_units: Decimal,
    pub debt_units: Decimal,
    pub shift_hours: Decimal,
    pub shopping_count: Decimal,
    pub prep_count: Decimal,
    pub leader: Decimal,
    pub insta: Decimal,
    pub chief: Decimal,
    pub accountant: Decimal,
}

impl ParticipantRecord {
    /// A record with every count at zero.
    pub fn new(student_id: StudentId, name: impl Into<String>) -> Self {
        Self {
            student_id,
            name: name.into(),
            base_units: Decimal::ZERO,
            debt_units: Decimal::ZERO,
            shift_hours: Decimal::ZERO,
            shopping_count: Decimal::ZERO,
            prep_count: Decimal::ZERO,
            leader: Decimal::ZERO,
            insta: Decimal::ZERO,
            chief: Decimal::ZERO,
            accountant: Decimal::ZERO,
        }
    }

    pub fn role_flag(&self, role: Role) -> Decimal {
        match role {
            Role::Leader => self.leader,
            Role::Insta => self.insta,
            Role::Chief => self.chief,
            Role::Accountant => self.accountant,
        }
    }

    /// A role is held only when its flag is exactly one.
    pub fn holds(&self, role: Role) -> bool {
        self.role_flag(role) == Decimal::ONE
    }
}
