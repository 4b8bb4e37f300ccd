//! Cleaning engine: sequential stage orchestration over one table

pub mod columns;
pub mod dates;
pub mod nulls;
pub mod text;

use serde::Serialize;

use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::model::Table;

/// Statistics accumulated across a cleaning run
#[derive(Debug, Default, Clone, Serialize)]
pub struct CleanReport {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub rows_written: usize,
    pub text_cells_normalized: usize,
    pub date_cells_nulled: usize,
    pub numeric_cells_filled: usize,
    pub text_cells_filled: usize,
    pub columns_pruned: Vec<String>,
}

/// Main cleaning engine
///
/// Runs the stages strictly in order; each stage consumes the table state
/// produced by the previous one. The table is held by exactly one owner for
/// the whole run.
pub struct Cleaner {
    config: CleanConfig,
}

impl Cleaner {
    /// Create a new cleaner with configuration
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Run every cleaning stage in order over the table
    pub fn run(&self, table: &mut Table) -> Result<CleanReport, CleanError> {
        let mut report = CleanReport {
            rows_read: table.row_count(),
            ..Default::default()
        };

        columns::normalize_column_names(table)?;
        report.text_cells_normalized = text::normalize_text_values(table);
        report.date_cells_nulled = dates::coerce_date_columns(table, &self.config.date_columns);
        report.rows_dropped =
            nulls::drop_rows_missing_essentials(table, &self.config.essential_columns);
        report.numeric_cells_filled =
            nulls::fill_numeric_nulls(table, &self.config.numeric_fill_columns);
        report.text_cells_filled = nulls::fill_text_nulls(
            table,
            &self.config.text_fill_columns,
            &self.config.text_sentinel,
        );
        report.columns_pruned = nulls::prune_empty_columns(table);

        report.rows_written = table.row_count();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellType, CellValue, Column};
    use chrono::NaiveDate;

    /// Raw table shaped like the sales export after loading: headers
    /// unnormalized, values type-inferred.
    fn raw_sales_table() -> Table {
        let mut table = Table::new(vec![
            Column::with_type("CdVenda", 0, CellType::Int),
            Column::with_type("CdCliente", 1, CellType::Int),
            Column::with_type("Data Venda", 2, CellType::Mixed),
            Column::with_type("ValorFreteCte", 3, CellType::Float),
            Column::with_type("Observação", 4, CellType::Null),
            Column::with_type("Coluna Vazia", 5, CellType::Null),
        ]);
        // Clean row
        table.add_row(
            vec![
                CellValue::from(1i64),
                CellValue::from(10i64),
                CellValue::from("2024-01-05"),
                CellValue::from(12.5),
                CellValue::Null,
                CellValue::Null,
            ],
            2,
        );
        // Missing customer id: dropped by the essential filter
        table.add_row(
            vec![
                CellValue::from(2i64),
                CellValue::Null,
                CellValue::from("2024-01-06"),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
            ],
            3,
        );
        // Invalid sale date: nulled by coercion, then dropped
        table.add_row(
            vec![
                CellValue::from(3i64),
                CellValue::from(30i64),
                CellValue::from("2024-13-45"),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
            ],
            4,
        );
        table
    }

    fn config() -> CleanConfig {
        CleanConfig::default()
            .with_date_columns(vec!["data_venda".to_string()])
            .with_essential_columns(vec![
                "cdvenda".to_string(),
                "cdcliente".to_string(),
                "data_venda".to_string(),
            ])
            .with_numeric_fill_columns(vec!["valorfretecte".to_string()])
            .with_text_fill_columns(vec!["observacao".to_string()])
    }

    #[test]
    fn test_full_pipeline() {
        let mut table = raw_sales_table();
        let report = Cleaner::new(config()).run(&mut table).unwrap();

        assert_eq!(report.rows_read, 3);
        assert_eq!(report.rows_dropped, 2);
        assert_eq!(report.rows_written, 1);
        assert_eq!(report.date_cells_nulled, 1);
        assert_eq!(report.numeric_cells_filled, 0);
        assert_eq!(report.text_cells_filled, 1);
        assert_eq!(report.columns_pruned, vec!["coluna_vazia".to_string()]);

        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["cdvenda", "cdcliente", "data_venda", "valorfretecte", "observacao"]
        );

        let row = &table.rows[0];
        assert_eq!(row.get(0), Some(&CellValue::Int(1)));
        assert_eq!(
            row.get(2),
            Some(&CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()))
        );
        assert_eq!(row.get(4), Some(&CellValue::from("nao_informado")));
    }

    #[test]
    fn test_essential_columns_never_null_in_output() {
        let mut table = raw_sales_table();
        Cleaner::new(config()).run(&mut table).unwrap();

        for name in ["cdvenda", "cdcliente", "data_venda"] {
            let idx = table.column_index(name).unwrap();
            assert_eq!(table.non_null_count(idx), table.row_count());
        }
    }

    #[test]
    fn test_sentinel_fill_neutralizes_pruning() {
        let mut table = raw_sales_table();
        Cleaner::new(config()).run(&mut table).unwrap();

        // All-null at load time, filled before the pruner ran
        let col = table.column("observacao").unwrap();
        assert_eq!(col.inferred_type, CellType::String);
        for row in &table.rows {
            assert_eq!(row.get(col.index), Some(&CellValue::from("nao_informado")));
        }
    }

    #[test]
    fn test_stages_tolerate_absent_columns() {
        let mut table = Table::new(vec![Column::with_type("cdvenda", 0, CellType::Int)]);
        table.add_row(vec![CellValue::from(1i64)], 2);

        // Default config names many columns this table lacks
        let report = Cleaner::new(CleanConfig::default()).run(&mut table).unwrap();

        assert_eq!(report.rows_written, 1);
        assert_eq!(report.date_cells_nulled, 0);
        assert_eq!(report.numeric_cells_filled, 0);
    }
}
