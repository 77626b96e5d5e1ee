use crate::application::lookup::Statement;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    student_id: &'a str,
    name: &'a str,
    base: Decimal,
    shift: Decimal,
    shopping: Decimal,
    prep: Decimal,
    debt: Decimal,
    roles: String,
    total: Decimal,
}

/// Writes one CSV line per statement, amounts in whole yen.
///
/// This is the accountant's view of the whole sheet, e.g. for preparing the
/// envelopes before the payout day.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_statements(&mut self, statements: &[Statement]) -> Result<()> {
        for statement in statements {
            let b = &statement.breakdown;
            let roles: Vec<&str> = b.role_bonuses.iter().map(|r| r.label()).collect();
            self.writer.serialize(ReportRow {
                student_id: statement.record.student_id.as_str(),
                name: &statement.record.name,
                base: b.base.truncated(),
                shift: b.shift.truncated(),
                shopping: b.shopping.truncated(),
                prep: b.prep.truncated(),
                debt: b.debt.truncated(),
                roles: roles.join("; "),
                total: b.total.truncated(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
