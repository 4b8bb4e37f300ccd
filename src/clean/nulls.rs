//! Null-handling stages: essential-row filtering, fills, and pruning

use std::borrow::Cow;

use crate::model::{CellType, CellValue, Table};

/// Drop every row holding a null in any of the essential columns
///
/// Only essential columns actually present in the table are checked; row
/// order among survivors is preserved. Returns the number of rows removed.
pub fn drop_rows_missing_essentials(table: &mut Table, essential_columns: &[String]) -> usize {
    let indices: Vec<usize> = essential_columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    if indices.is_empty() {
        return 0;
    }

    let before = table.row_count();
    table.rows.retain(|row| {
        indices
            .iter()
            .all(|&idx| row.get(idx).is_some_and(|cell| !cell.is_null()))
    });
    before - table.row_count()
}

/// Replace nulls in the designated numeric columns with zero
///
/// Absent columns are skipped. The zero matches the column's stored kind
/// (`0.0` for float columns, `0` otherwise) and the kind is widened so an
/// all-null column ends up numeric. Returns the number of cells filled.
pub fn fill_numeric_nulls(table: &mut Table, numeric_columns: &[String]) -> usize {
    let mut filled = 0;

    for name in numeric_columns {
        if let Some(col_idx) = table.column_index(name) {
            let (fill, kind) = match table.columns[col_idx].inferred_type {
                CellType::Float => (CellValue::Float(0.0), CellType::Float),
                _ => (CellValue::Int(0), CellType::Int),
            };

            for row in &mut table.rows {
                if let Some(cell) = row.cells.get_mut(col_idx) {
                    if cell.is_null() {
                        *cell = fill.clone();
                        filled += 1;
                    }
                }
            }

            let col = &mut table.columns[col_idx];
            col.inferred_type = col.inferred_type.widen(kind);
        }
    }

    filled
}

/// Replace nulls in the designated text columns with the sentinel string
///
/// Absent columns are skipped. Returns the number of cells filled.
pub fn fill_text_nulls(table: &mut Table, text_columns: &[String], sentinel: &str) -> usize {
    let mut filled = 0;

    for name in text_columns {
        if let Some(col_idx) = table.column_index(name) {
            for row in &mut table.rows {
                if let Some(cell) = row.cells.get_mut(col_idx) {
                    if cell.is_null() {
                        *cell = CellValue::String(Cow::Owned(sentinel.to_string()));
                        filled += 1;
                    }
                }
            }

            let col = &mut table.columns[col_idx];
            col.inferred_type = col.inferred_type.widen(CellType::String);
        }
    }

    filled
}

/// Remove every column whose cells are all null across the surviving rows
///
/// A single non-null cell retains the column, so zero fills and sentinels
/// keep their columns alive. A table with no rows keeps all columns.
/// Returns the names of the pruned columns.
pub fn prune_empty_columns(table: &mut Table) -> Vec<String> {
    if table.row_count() == 0 {
        return Vec::new();
    }

    let empty: Vec<usize> = (0..table.column_count())
        .filter(|&idx| table.non_null_count(idx) == 0)
        .collect();

    if empty.is_empty() {
        return Vec::new();
    }

    let names: Vec<String> = empty
        .iter()
        .map(|&idx| table.columns[idx].name.clone())
        .collect();
    table.remove_columns(&empty);
    names
}
