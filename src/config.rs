//! Configuration handling for the cleaning pipeline

/// Format for the post-run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Column roles and fill policies for one cleaning run
///
/// The defaults describe the sales-export shape this tool was built for;
/// every stage takes its column list from here, so a synthetic config makes
/// each stage testable in isolation.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Columns parsed into date/time values (unparsable cells become null)
    pub date_columns: Vec<String>,
    /// Columns whose null invalidates the entire row
    pub essential_columns: Vec<String>,
    /// Numeric columns where null means zero
    pub numeric_fill_columns: Vec<String>,
    /// Text columns where null is replaced with the sentinel
    pub text_fill_columns: Vec<String>,
    /// Placeholder written into null text cells
    pub text_sentinel: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            date_columns: to_strings(&["dtvenda", "dtestorno", "dtaltera", "criacaofinalizada"]),
            essential_columns: to_strings(&["cdvenda", "cdcliente", "dtvenda"]),
            numeric_fill_columns: to_strings(&[
                "valorfretecte",
                "valorusadovalecompra",
                "valoraproximadoimposto",
            ]),
            text_fill_columns: to_strings(&["observacao", "observacaointerna"]),
            text_sentinel: "nao_informado".to_string(),
        }
    }
}

impl CleanConfig {
    /// Set the date-bearing columns
    pub fn with_date_columns(mut self, columns: Vec<String>) -> Self {
        self.date_columns = columns;
        self
    }

    /// Set the columns required for a row to survive
    pub fn with_essential_columns(mut self, columns: Vec<String>) -> Self {
        self.essential_columns = columns;
        self
    }

    /// Set the numeric columns filled with zero
    pub fn with_numeric_fill_columns(mut self, columns: Vec<String>) -> Self {
        self.numeric_fill_columns = columns;
        self
    }

    /// Set the text columns filled with the sentinel
    pub fn with_text_fill_columns(mut self, columns: Vec<String>) -> Self {
        self.text_fill_columns = columns;
        self
    }

    /// Set the sentinel written into null text cells
    pub fn with_text_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.text_sentinel = sentinel.into();
        self
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
