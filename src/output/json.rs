//! JSON report format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::clean::CleanReport;
use crate::model::{CellValue, Table};

use super::ReportRenderer;

/// Machine-readable post-run report
pub struct JsonReport {
    preview_rows: usize,
    pretty: bool,
}

impl JsonReport {
    pub fn new(preview_rows: usize) -> Self {
        Self {
            preview_rows,
            pretty: true,
        }
    }

    pub fn compact(preview_rows: usize) -> Self {
        Self {
            preview_rows,
            pretty: false,
        }
    }
}

#[derive(Serialize)]
struct JsonColumn {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    non_null: usize,
}

#[derive(Serialize)]
struct JsonCell {
    column: String,
    value: serde_json::Value,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    output_file: String,
    stats: &'a CleanReport,
    columns: Vec<JsonColumn>,
    preview: Vec<Vec<JsonCell>>,
}

fn cell_value_to_json(value: &CellValue) -> serde_json::Value {
    match value {
        CellValue::Null => serde_json::Value::Null,
        CellValue::Int(i) => serde_json::json!(*i),
        CellValue::Float(f) => serde_json::json!(*f),
        CellValue::String(s) => serde_json::Value::String(s.to_string()),
        CellValue::Date(d) => serde_json::Value::String(d.to_string()),
        CellValue::DateTime(dt) => serde_json::Value::String(dt.to_string()),
    }
}

impl ReportRenderer for JsonReport {
    fn render(
        &self,
        table: &Table,
        report: &CleanReport,
        output_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let columns: Vec<JsonColumn> = table
            .columns
            .iter()
            .map(|col| JsonColumn {
                name: col.name.clone(),
                kind: col.inferred_type.to_string(),
                non_null: table.non_null_count(col.index),
            })
            .collect();

        let preview: Vec<Vec<JsonCell>> = table
            .rows
            .iter()
            .take(self.preview_rows)
            .map(|row| {
                row.cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| JsonCell {
                        column: table
                            .columns
                            .get(i)
                            .map(|col| col.name.clone())
                            .unwrap_or_else(|| format!("column_{}", i)),
                        value: cell_value_to_json(cell),
                    })
                    .collect()
            })
            .collect();

        let output = JsonOutput {
            output_file: output_path.display().to_string(),
            stats: report,
            columns,
            preview,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
