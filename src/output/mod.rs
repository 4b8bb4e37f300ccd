//! Writer and post-run reporting for the cleaned table

mod csv;
mod json;
mod report;

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::clean::CleanReport;
use crate::config::ReportFormat;
use crate::model::Table;

pub use self::csv::write_csv;
pub use self::json::JsonReport;
pub use self::report::TerminalReport;

/// Trait for post-run report renderers
pub trait ReportRenderer {
    /// Render the cleaned table's report to a writer
    fn render(
        &self,
        table: &Table,
        report: &CleanReport,
        output_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Factory for creating report renderers
pub struct ReportFactory;

impl ReportFactory {
    /// Create a report renderer based on format type
    pub fn create(format: ReportFormat, preview_rows: usize) -> Box<dyn ReportRenderer> {
        match format {
            ReportFormat::Terminal => Box::new(TerminalReport::new(preview_rows)),
            ReportFormat::Json => Box::new(JsonReport::new(preview_rows)),
        }
    }
}

/// Render the post-run report to stdout
pub fn render_to_stdout(
    table: &Table,
    report: &CleanReport,
    output_path: &Path,
    format: ReportFormat,
    preview_rows: usize,
) -> Result<()> {
    let renderer = ReportFactory::create(format, preview_rows);
    let mut stdout = std::io::stdout();
    renderer.render(table, report, output_path, &mut stdout)
}
