//! Text value normalization

use std::borrow::Cow;

use rayon::prelude::*;

use crate::model::{CellType, CellValue, Table};

/// Trim and lowercase every cell of the text-typed columns, preserving nulls
///
/// A column qualifies when its stored type is textual (`String` or `Mixed`);
/// numeric and date columns are untouched even if individual cells render as
/// strings. Cells of a `Mixed` column are coerced to their textual
/// representation, so the column's type settles to `String`. Returns the
/// number of cells rewritten.
pub fn normalize_text_values(table: &mut Table) -> usize {
    let text_cols: Vec<usize> = table
        .columns
        .iter()
        .filter(|c| c.inferred_type.is_textual())
        .map(|c| c.index)
        .collect();

    if text_cols.is_empty() {
        return 0;
    }

    // Cells are independent; parallel rows keep the sequential result.
    let rewritten: usize = table
        .rows
        .par_iter_mut()
        .map(|row| {
            let mut count = 0;
            for &idx in &text_cols {
                if let Some(cell) = row.cells.get_mut(idx) {
                    if !cell.is_null() {
                        let normalized = cell.display().trim().to_lowercase();
                        *cell = CellValue::String(Cow::Owned(normalized));
                        count += 1;
                    }
                }
            }
            count
        })
        .sum();

    for col in &mut table.columns {
        if col.inferred_type.is_textual() {
            col.inferred_type = CellType::String;
        }
    }

    rewritten
}
