use std::fs;
use std::path::PathBuf;
use taskdesk_core::{load_dataset, TableError};

fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn semicolon_file_with_header_and_decimal_commas() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "idade;altura\n23,00;1,70\n31,00;1,65\n45,00;1,82\n");

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.columns().len(), 2);
    assert_eq!(dataset.row_count(), 3);

    let idade = dataset.column("idade").unwrap();
    assert_eq!(idade.values, vec![23.0, 31.0, 45.0]);
    let altura = dataset.column("altura").unwrap();
    assert_eq!(altura.values, vec![1.70, 1.65, 1.82]);
}

#[test]
fn headerless_comma_file_generates_column_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "1.5,2.5\n3.5,4.5\n");

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.column("Column_1").unwrap().values, vec![1.5, 3.5]);
    assert_eq!(dataset.column("Column_2").unwrap().values, vec![2.5, 4.5]);
}

#[test]
fn grouped_brazilian_numbers_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "salario\n1.234,56\n2.500,00\n");

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(
        dataset.column("salario").unwrap().values,
        vec![1234.56, 2500.0]
    );
}

#[test]
fn non_numeric_column_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "nome;idade\nana;23\nbeto;31\n");

    let dataset = load_dataset(&path).unwrap();
    assert!(dataset.column("nome").is_none());
    assert_eq!(dataset.column("idade").unwrap().values, vec![23.0, 31.0]);
}

#[test]
fn row_with_unparseable_cell_is_excluded_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "x;y\n1;2\noops;4\n5;6\n");

    let dataset = load_dataset(&path).unwrap();
    // Ragged columns are forbidden: the bad row disappears from both sides.
    assert_eq!(dataset.column("x").unwrap().values, vec![1.0, 5.0]);
    assert_eq!(dataset.column("y").unwrap().values, vec![2.0, 6.0]);
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn short_row_is_excluded_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "x;y\n1;2\n3\n5;6\n");

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.column("x").unwrap().values, vec![1.0, 5.0]);
    assert_eq!(dataset.column("y").unwrap().values, vec![2.0, 6.0]);
}

#[test]
fn empty_file_fails_with_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "\n\n");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, TableError::EmptyInput { .. }));
}

#[test]
fn text_only_file_fails_with_no_numeric_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "nome;cidade\nana;lisboa\nbeto;porto\n");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, TableError::NoNumericColumns));
}

#[test]
fn missing_file_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
}
