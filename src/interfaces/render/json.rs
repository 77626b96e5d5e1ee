use crate::application::lookup::Statement;
use crate::domain::money::Yen;
use crate::domain::record::Role;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RoleBonusView {
    role: Role,
    label: &'static str,
    amount: Decimal,
}

/// Whole-yen view of a statement. Every category is present, zero or not.
#[derive(Debug, Serialize)]
struct StatementView<'a> {
    student_id: &'a str,
    name: &'a str,
    base: Decimal,
    shift: Decimal,
    shopping: Decimal,
    prep: Decimal,
    debt: Decimal,
    role_bonuses: Vec<RoleBonusView>,
    role_bonus_total: Decimal,
    total: Decimal,
}

fn whole(yen: Yen) -> Decimal {
    yen.truncated()
}

pub fn render(statement: &Statement) -> Result<String> {
    let b = &statement.breakdown;
    let view = StatementView {
        student_id: statement.record.student_id.as_str(),
        name: &statement.record.name,
        base: whole(b.base),
        shift: whole(b.shift),
        shopping: whole(b.shopping),
        prep: whole(b.prep),
        debt: whole(b.debt),
        role_bonuses: b
            .role_bonuses
            .iter()
            .map(|bonus| RoleBonusView {
                role: bonus.role,
                label: bonus.label(),
                amount: whole(bonus.amount),
            })
            .collect(),
        role_bonus_total: whole(b.role_bonus_total()),
        total: whole(b.total),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
