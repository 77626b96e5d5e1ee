use super::money::Yen;
use super::rates::{RateKey, RateTable};
use super::record::{ParticipantRecord, Role};
use serde::Serialize;

/// A flat bonus paid for holding a role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleBonus {
    pub role: Role,
    pub amount: Yen,
}

impl RoleBonus {
    pub fn label(&self) -> &'static str {
        self.role.label()
    }
}

/// The itemized payout for one record.
///
/// All five categories are always computed, zero or not. Amounts are kept at
/// full precision; truncation to whole yen is left to whoever renders them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutBreakdown {
    pub base: Yen,
    pub shift: Yen,
    pub shopping: Yen,
    pub prep: Yen,
    pub debt: Yen,
    pub role_bonuses: Vec<RoleBonus>,
    pub total: Yen,
}

impl PayoutBreakdown {
    /// Prices a record against the rate table.
    ///
    /// Never fails: negative or fractional counts are multiplied through as
    /// they are, and amounts too large for a `Decimal` saturate.
    pub fn compute(record: &ParticipantRecord, rates: &RateTable) -> Self {
        let base = Yen::of(record.base_units, rates.rate(RateKey::Base));
        let shift = Yen::of(record.shift_hours, rates.rate(RateKey::Shift));
        let shopping = Yen::of(record.shopping_count, rates.rate(RateKey::Shopping));
        let prep = Yen::of(record.prep_count, rates.rate(RateKey::Prep));
        let debt = Yen::of(record.debt_units, rates.rate(RateKey::Debt));

        let role_bonuses: Vec<RoleBonus> = Role::ALL
            .iter()
            .filter(|role| record.holds(**role))
            .map(|role| RoleBonus {
                role: *role,
                amount: Yen::new(rates.rate(role.rate_key())),
            })
            .collect();

        let role_total: Yen = role_bonuses.iter().map(|b| b.amount).sum();
        let total = base + shift + shopping + prep + debt + role_total;

        Self {
            base,
            shift,
            shopping,
            prep,
            debt,
            role_bonuses,
            total,
        }
    }

    pub fn role_bonus_total(&self) -> Yen {
        self.role_bonuses.iter().map(|b| b.amount).sum()
    }

    /// The five per-unit categories, in display order.
    pub fn categories(&self) -> [(RateKey, Yen); 5] {
        [
            (RateKey::Base, self.base),
            (RateKey::Shift, self.shift),
            (RateKey::Shopping, self.shopping),
            (RateKey::Prep, self.prep),
            (RateKey::Debt, self.debt),
        ]
    }
}
