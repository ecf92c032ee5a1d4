//! Full-tree extraction against a small fixture grid.


use std::fs;

use mvx_extract::{build_dataset, schema};
use mvx_table::{write_csv, Cell, Table};

use fixtures::{populate_tree, tiny_config};

fn numbers(table: &Table, name: &str) -> Vec<f64> {
    table
        .column(name)
        .expect("column")
        .iter()
        .map(|cell| cell.as_number().expect("numeric cell"))
        .collect()
}

fn texts(table: &Table, name: &str) -> Vec<String> {
    table
        .column(name)
        .expect("column")
        .iter()
        .map(|cell| match cell {
            Cell::Text(text) => text.clone(),
            other => panic!("expected text, got {other:?}"),
        })
        .collect()
}

#[test]
fn builds_reference_shaped_dataset() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, report) = build_dataset(&cfg, dir.path()).expect("build");

    assert_eq!(table.rows(), 4);
    assert_eq!(table.width(), 29);
    assert_eq!(table.column_names(), schema::dataset_columns(&cfg));
    assert!(report.defaulted.is_empty());
    assert_eq!(report.rows, 4);
    assert_eq!(report.columns, 29);
    assert_eq!(report.dataset_hash.len(), 64);
    assert!(report.dataset_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_rows_precede_selected_rows() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, _) = build_dataset(&cfg, dir.path()).expect("build");

    assert_eq!(texts(&table, "formula"), vec!["box p", "p -> q", "box (p -> q)", "dia dia r"]);
    assert_eq!(numbers(&table, "depth"), vec![6.0, 6.0, 9.0, 11.0]);
}

#[test]
fn truth_flags_become_binary_numbers() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, _) = build_dataset(&cfg, dir.path()).expect("build");

    assert_eq!(numbers(&table, "tautology_GL"), vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(numbers(&table, "contradiction_GL"), vec![0.0, 0.0, 0.0, 1.0]);
    assert_eq!(numbers(&table, "tautology_K4"), vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(numbers(&table, "contradiction_K4"), vec![0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn numeric_blocks_are_coerced_and_aligned() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, _) = build_dataset(&cfg, dir.path()).expect("build");

    assert_eq!(numbers(&table, "asymptotic_model_val_GL"), vec![0.25, 0.5, 0.1, 0.9]);
    assert_eq!(numbers(&table, "asymptotic_model_val_S4"), vec![1.0, 0.0, 0.5, 0.5]);
    assert_eq!(numbers(&table, "asymptotic_model_val_K4"), vec![0.75, 0.125, 0.0, 1.0]);
    assert_eq!(numbers(&table, "frame_GL_40"), vec![100.0, 500.0, 20.0, 500.0]);
    assert_eq!(numbers(&table, "model_GL_40"), vec![5000.0, 300.0, 10.0, 5000.0]);
    assert_eq!(numbers(&table, "frame_S4_48"), vec![400.0, 0.0, 1.0, 4.0]);
    assert_eq!(numbers(&table, "model_K4_48"), vec![0.0, 4000.0, 200.0, 0.0]);
}

#[test]
fn trend_flags_follow_fit_rules() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, _) = build_dataset(&cfg, dir.path()).expect("build");

    assert_eq!(numbers(&table, "trend_GL_frame"), vec![1.0, 1.0, 0.0, 1.0]);
    assert_eq!(numbers(&table, "trend_GL_model"), vec![1.0, 0.0, 1.0, 1.0]);
    assert_eq!(numbers(&table, "trend_S4_frame"), vec![0.0, 0.0, 0.0, 1.0]);
    assert_eq!(numbers(&table, "trend_S4_model"), vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(numbers(&table, "trend_K4_frame"), vec![1.0, 1.0, 0.0, 0.0]);
    assert_eq!(numbers(&table, "trend_K4_model"), vec![0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn exported_csv_rows_match_dataset() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (table, _) = build_dataset(&cfg, dir.path()).expect("build");
    let out = dir.path().join("dataset.csv");
    write_csv(&table, &out).expect("export");

    let contents = fs::read_to_string(&out).expect("read export");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], schema::dataset_columns(&cfg).join(","));
    assert_eq!(
        lines[1],
        "box p,1,0,1,0,1,0,6,0.25,1,0.75,100,5000,200,5000,500,100,400,100,1,0,2,0,1,1,0,0,1,0"
    );
    assert_eq!(
        lines[3],
        "box (p -> q),1,0,0,0,1,1,9,0.1,0.5,0,20,10,10,30,1,1,1,1,200,100,100,200,0,1,0,0,0,1"
    );
}

#[test]
fn rebuild_is_deterministic() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());

    let (first, first_report) = build_dataset(&cfg, dir.path()).expect("first build");
    let (second, second_report) = build_dataset(&cfg, dir.path()).expect("second build");

    assert_eq!(first, second);
    assert_eq!(first_report.dataset_hash, second_report.dataset_hash);
}
