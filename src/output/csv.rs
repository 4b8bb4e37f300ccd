//! CSV writer for the cleaned table

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{CellValue, Table};
use crate::parser::DELIMITER;

/// Serialize the table as `;`-delimited text
///
/// The header row carries the normalized column names; nulls are written as
/// the empty field. The destination directory is created if absent.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create output directory: {}", dir.display())
            })?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    writer.write_record(&header).context("Failed to write header row")?;

    for row in &table.rows {
        let record: Vec<String> = row.cells.iter().map(render_cell).collect();
        writer.write_record(&record).with_context(|| {
            format!("Failed to write row from source line {}", row.source_line)
        })?;
    }

    writer.flush().context("Failed to flush output file")?;
    Ok(())
}

/// Serialized form of a cell
///
/// Date formats match what the loader re-parses, so a cleaned file
/// re-ingests without loss.
fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        other => other.display().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellType, Column};
    use chrono::NaiveDate;

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(&CellValue::Null), "");
        assert_eq!(render_cell(&CellValue::Int(42)), "42");
        assert_eq!(render_cell(&CellValue::from("nao_informado")), "nao_informado");
        assert_eq!(
            render_cell(&CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())),
            "2024-01-05"
        );
    }

    #[test]
    fn test_write_csv_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed").join("out.csv");

        let mut table = Table::new(vec![
            Column::with_type("cdvenda", 0, CellType::Int),
            Column::with_type("observacao", 1, CellType::String),
        ]);
        table.add_row(vec![CellValue::from(1i64), CellValue::Null], 2);

        write_csv(&path, &table).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "cdvenda;observacao\n1;\n");
    }
}
