//! Column-name normalization

use indexmap::IndexMap;
use unicode_normalization::UnicodeNormalization;

use crate::error::CleanError;
use crate::model::Table;

/// Rewrite every column label into canonical token form
///
/// Order and count of columns are preserved; row data is untouched. Two
/// distinct raw headers collapsing to the same token abort the run, so the
/// output never carries ambiguous duplicate columns.
pub fn normalize_column_names(table: &mut Table) -> Result<(), CleanError> {
    let tokens: Vec<String> = table.columns.iter().map(|c| slugify(&c.name)).collect();

    let mut seen: IndexMap<String, usize> = IndexMap::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        if let Some(&first) = seen.get(token.as_str()) {
            return Err(CleanError::ColumnCollision {
                token: token.clone(),
                raw_a: table.columns[first].name.clone(),
                raw_b: table.columns[idx].name.clone(),
            });
        }
        seen.insert(token.clone(), idx);
    }

    for (col, token) in table.columns.iter_mut().zip(tokens) {
        col.name = token;
    }

    Ok(())
}

/// Canonical token form of a header label
///
/// Lowercase, trimmed, spaces to underscores, diacritics separated by NFKD
/// decomposition and discarded, every remaining character outside
/// `[a-z0-9_]` deleted.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let spaced = lowered.trim().replace(' ', "_");

    spaced
        .nfkd()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    #[test]
    fn test_slugify_accents() {
        assert_eq!(slugify("Código Venda"), "codigo_venda");
        assert_eq!(slugify("Preço Médio"), "preco_medio");
        assert_eq!(slugify("Ação"), "acao");
    }

    #[test]
    fn test_slugify_whitespace_and_symbols() {
        assert_eq!(slugify("  CdVenda  "), "cdvenda");
        assert_eq!(slugify("Valor (R$)"), "valor_r");
        assert_eq!(slugify("Desconto %"), "desconto_");
    }

    #[test]
    fn test_slugify_already_canonical() {
        assert_eq!(slugify("dtvenda"), "dtvenda");
        assert_eq!(slugify("observacao_interna"), "observacao_interna");
    }

    #[test]
    fn test_normalize_preserves_order() {
        let mut table = Table::new(vec![
            Column::new("Código Venda", 0),
            Column::new("Data Venda", 1),
        ]);

        normalize_column_names(&mut table).unwrap();

        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["codigo_venda", "data_venda"]);
    }

    #[test]
    fn test_normalize_rejects_collisions() {
        let mut table = Table::new(vec![
            Column::new("Código Venda", 0),
            Column::new("codigo venda", 1),
        ]);

        let err = normalize_column_names(&mut table).unwrap_err();
        let CleanError::ColumnCollision { token, raw_a, raw_b } = err;
        assert_eq!(token, "codigo_venda");
        assert_eq!(raw_a, "Código Venda");
        assert_eq!(raw_b, "codigo venda");
    }
}
