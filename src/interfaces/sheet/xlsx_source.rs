use super::{decode_row, Cell, SheetLayout};
use crate::domain::record::ParticipantRecord;
use crate::error::{PayoutError, Result};
use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use std::path::Path;

/// Reads records from an Excel workbook.
///
/// Positions are absolute: a sheet whose used range starts at `C2` still has
/// its student ids in column `C`.
pub fn read_records(
    path: &Path,
    layout: &SheetLayout,
    sheet: Option<&str>,
) -> Result<Vec<ParticipantRecord>> {
    let range = open_range(path, sheet)?;

    let (end_row, end_col) = range.end().ok_or_else(|| {
        PayoutError::SourceMalformed(format!("worksheet in {} is empty", path.display()))
    })?;
    debug!("read_records: used range ends at {:?}", (end_row, end_col));

    if (end_row as usize) < layout.header_row {
        return Err(PayoutError::SourceMalformed(format!(
            "no header row at line {}",
            layout.header_row + 1
        )));
    }
    if (end_col as usize) + 1 < layout.end_column() {
        return Err(PayoutError::SourceMalformed(format!(
            "worksheet has {} columns, at least {} are required",
            end_col + 1,
            layout.end_column()
        )));
    }

    let mut records = Vec::new();
    for row in layout.first_data_row()..=(end_row as usize) {
        let cells: Vec<Cell> = (layout.first_column..layout.end_column())
            .map(|col| cell_at(&range, row, col))
            .collect();
        if let Some(record) = decode_row(row, &cells)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn open_range(path: &Path, sheet: Option<&str>) -> Result<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        PayoutError::SourceMalformed(format!("cannot open workbook {}: {}", path.display(), e))
    })?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook.worksheet_range_at(0),
    };
    range
        .ok_or_else(|| {
            PayoutError::SourceMalformed(match sheet {
                Some(name) => format!("worksheet {:?} not found", name),
                None => "workbook has no worksheets".to_string(),
            })
        })?
        .map_err(|e| PayoutError::SourceMalformed(format!("cannot read worksheet: {}", e)))
}

fn cell_at(range: &Range<DataType>, row: usize, col: usize) -> Cell {
    match range.get_value((row as u32, col as u32)) {
        None | Some(DataType::Empty) => Cell::Empty,
        Some(DataType::String(s)) => Cell::Text(s.clone()),
        Some(DataType::Float(f)) => Cell::Number(*f),
        Some(DataType::Int(i)) => Cell::Number(*i as f64),
        Some(other) => Cell::Other(format!("{:?}", other)),
    }
}
