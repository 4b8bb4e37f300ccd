//! Date coercion for designated columns

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{CellType, CellValue, Table};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse the designated columns into date/time values
///
/// Cells that cannot be parsed become null; this is counted, not raised.
/// Columns absent from the table are skipped. Each coerced column's stored
/// type becomes the widened date kind. Returns the number of non-null cells
/// that became null.
pub fn coerce_date_columns(table: &mut Table, date_columns: &[String]) -> usize {
    let mut nulled = 0;

    for name in date_columns {
        if let Some(col_idx) = table.column_index(name) {
            let mut widened = CellType::Null;

            for row in &mut table.rows {
                if let Some(cell) = row.cells.get_mut(col_idx) {
                    let coerced = coerce_cell(cell);
                    match &coerced {
                        CellValue::Date(_) => widened = widened.widen(CellType::Date),
                        CellValue::DateTime(_) => widened = widened.widen(CellType::DateTime),
                        CellValue::Null if !cell.is_null() => nulled += 1,
                        _ => {}
                    }
                    *cell = coerced;
                }
            }

            if let Some(col) = table.columns.get_mut(col_idx) {
                col.inferred_type = if widened == CellType::Null {
                    CellType::Date
                } else {
                    widened
                };
            }
        }
    }

    nulled
}

fn coerce_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Null | CellValue::Date(_) | CellValue::DateTime(_) => cell.clone(),
        other => parse_datetime_text(&other.display()),
    }
}

/// Best-effort parse of a single value; anything unparsable maps to null
fn parse_datetime_text(s: &str) -> CellValue {
    let trimmed = s.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return CellValue::DateTime(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return CellValue::Date(d);
        }
    }

    CellValue::Null
}
