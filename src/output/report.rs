//! Terminal report for operator inspection

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::clean::CleanReport;
use crate::model::Table;

use super::ReportRenderer;

/// Human-readable post-run report
///
/// Informational only: a preview of the first rows, a structural summary,
/// stage statistics, and the final column list.
pub struct TerminalReport {
    preview_rows: usize,
}

impl TerminalReport {
    pub fn new(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    fn write_header(&self, writer: &mut dyn Write, output_path: &Path) -> Result<()> {
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer, " vendas-clean: {}", output_path.display())?;
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_preview(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if table.row_count() == 0 || self.preview_rows == 0 {
            return Ok(());
        }

        writeln!(writer, "Preview (first {} rows):", self.preview_rows.min(table.row_count()))?;

        let mut builder = Builder::default();
        builder.push_record(table.columns.iter().map(|c| c.name.clone()));
        for row in table.rows.iter().take(self.preview_rows) {
            builder.push_record(row.cells.iter().map(|c| c.display().into_owned()));
        }

        let rendered = builder.build().with(Style::sharp()).to_string();
        writeln!(writer, "{}", rendered)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_structure(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        writeln!(
            writer,
            "Structure: {} rows x {} columns",
            table.row_count(),
            table.column_count()
        )?;

        let mut builder = Builder::default();
        builder.push_record(["column", "type", "non-null"]);
        for col in &table.columns {
            builder.push_record([
                col.name.clone(),
                col.inferred_type.to_string(),
                table.non_null_count(col.index).to_string(),
            ]);
        }

        let rendered = builder.build().with(Style::sharp()).to_string();
        writeln!(writer, "{}", rendered)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_summary(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        writeln!(
            writer,
            "Summary: {} rows read, -{} dropped, {} written",
            report.rows_read, report.rows_dropped, report.rows_written
        )?;
        writeln!(
            writer,
            "  {} text cells normalized, {} date cells coerced to null",
            report.text_cells_normalized, report.date_cells_nulled
        )?;
        writeln!(
            writer,
            "  {} numeric cells zero-filled, {} text cells sentinel-filled",
            report.numeric_cells_filled, report.text_cells_filled
        )?;
        if !report.columns_pruned.is_empty() {
            writeln!(
                writer,
                "  pruned empty columns: {}",
                report.columns_pruned.join(", ")
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn write_columns(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        writeln!(writer, "Columns: {}", names.join(", "))?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ReportRenderer for TerminalReport {
    fn render(
        &self,
        table: &Table,
        report: &CleanReport,
        output_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        self.write_header(writer, output_path)?;
        self.write_preview(table, writer)?;
        self.write_structure(table, writer)?;
        self.write_summary(report, writer)?;
        self.write_columns(table, writer)?;
        Ok(())
    }
}
