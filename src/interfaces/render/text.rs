use crate::application::lookup::Statement;
use crate::domain::money::Yen;
use crate::domain::rates::{RateKey, RateTable};
use rust_decimal::Decimal;
use std::fmt;

/// Renders a statement as the itemized text shown to a staff member.
///
/// Base pay is always listed. The other categories only appear when they
/// pay something, and role bonuses are listed one per line. Every line,
/// the last included, ends with a newline.
pub fn render(statement: &Statement, rates: &RateTable) -> String {
    TextStatement { statement, rates }.to_string()
}

struct TextStatement<'a> {
    statement: &'a Statement,
    rates: &'a RateTable,
}

impl fmt::Display for TextStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.statement.record;
        let b = &self.statement.breakdown;

        writeln!(f, "Payout for {} ({})", record.name, record.student_id)?;
        writeln!(f, "Total: {}", b.total)?;
        writeln!(f)?;
        writeln!(f, "Breakdown:")?;
        writeln!(f, "  Base pay: {}", b.base)?;

        if !b.shift.is_zero() {
            writeln!(
                f,
                "  Shifts: {}h x @{} = {}",
                quantity(record.shift_hours),
                self.rate(RateKey::Shift),
                b.shift
            )?;
        }
        if !b.prep.is_zero() {
            writeln!(
                f,
                "  Setup/cleanup: {} x @{} = {}",
                quantity(record.prep_count),
                self.rate(RateKey::Prep),
                b.prep
            )?;
        }
        if !b.shopping.is_zero() {
            writeln!(
                f,
                "  Shopping runs: {} x @{} = {}",
                quantity(record.shopping_count),
                self.rate(RateKey::Shopping),
                b.shopping
            )?;
        }
        if !b.debt.is_zero() {
            writeln!(f, "  Reimbursements: {}", b.debt)?;
        }
        if !b.role_bonuses.is_empty() {
            writeln!(f, "  Role bonuses:")?;
            for bonus in &b.role_bonuses {
                writeln!(f, "    - {} (+{})", bonus.label(), bonus.amount)?;
            }
        }
        Ok(())
    }
}

impl TextStatement<'_> {
    fn rate(&self, key: RateKey) -> Yen {
        Yen::new(self.rates.rate(key))
    }
}

fn quantity(q: Decimal) -> String {
    q.normalize().to_string()
}
