//! Library-level pipeline properties over real files

use std::fs;
use std::path::Path;

use vendas_clean::clean::Cleaner;
use vendas_clean::config::CleanConfig;
use vendas_clean::model::{CellType, CellValue};
use vendas_clean::output::write_csv;
use vendas_clean::parser::read_csv;

fn clean_file(input: &Path) -> vendas_clean::Table {
    let mut table = read_csv(input).unwrap();
    Cleaner::new(CleanConfig::default()).run(&mut table).unwrap();
    table
}

#[test]
fn accented_header_is_normalized_and_date_inferred() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, "Código Venda;Data Venda\n1; 2024-01-05\n").unwrap();

    let table = clean_file(&input);

    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["codigo_venda", "data_venda"]);

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows[0].get(0), Some(&CellValue::Int(1)));
    assert_eq!(
        table.rows[0].get(1),
        Some(&CellValue::Date(
            chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        ))
    );
}

#[test]
fn output_never_gains_rows_and_headers_stay_canonical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(
        &input,
        "CdVenda;CdCliente;DtVenda;Observação Interna;Coluna Vazia\n\
         1;10;2024-01-05;Nota A;\n\
         2;;2024-01-06;;\n\
         3;30;;Nota C;\n",
    )
    .unwrap();

    let rows_read = read_csv(&input).unwrap().row_count();
    let table = clean_file(&input);

    assert!(table.row_count() <= rows_read);
    for col in &table.columns {
        assert!(
            col.name.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_')),
            "non-canonical column name: {}",
            col.name
        );
    }
}

#[test]
fn essential_and_numeric_columns_are_null_free_after_cleaning() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(
        &input,
        "CdVenda;CdCliente;DtVenda;ValorFreteCte;ValorUsadoValeCompra\n\
         1;10;2024-01-05;;\n\
         2;20;2024-01-06;7.25;100\n\
         3;;2024-01-07;;\n",
    )
    .unwrap();

    let table = clean_file(&input);

    assert_eq!(table.row_count(), 2);
    for name in [
        "cdvenda",
        "cdcliente",
        "dtvenda",
        "valorfretecte",
        "valorusadovalecompra",
    ] {
        let col = table.column(name).unwrap();
        assert_eq!(
            table.non_null_count(col.index),
            table.row_count(),
            "null left in {}",
            name
        );
    }
    assert_eq!(table.column("dtvenda").unwrap().inferred_type, CellType::Date);
}

#[test]
fn cleaning_its_own_output_is_a_fixpoint() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    fs::write(
        &input,
        "CdVenda;CdCliente;DtVenda;ValorFreteCte;Observacao\n\
         1;10;2024-01-05T10:30:00;;  Entrega URGENTE \n\
         2;20;2024-02-15;9.9;\n\
         3;;2024-03-01;;\n",
    )
    .unwrap();

    let table = clean_file(&input);
    write_csv(&first, &table).unwrap();

    let table = clean_file(&first);
    write_csv(&second, &table).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}
