//! Structural problems abort the build instead of being papered over.


use mvx_core::{Logic, MvxError};
use mvx_extract::{build_dataset, layout};

use fixtures::{populate_tree, tiny_config, write_file};

#[test]
fn unparseable_number_is_a_coercion_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::asymptotic_generated(&cfg, dir.path(), Logic::GL, 1, 6),
        "0.25\nnot a score\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("garbage number");
    assert!(matches!(err, MvxError::Coerce(_)));
    let info = err.info();
    assert_eq!(info.code, "not-numeric");
    assert!(info.context.contains_key("path"));
    assert_eq!(info.context.get("value").map(String::as_str), Some("not a score"));
}

#[test]
fn non_finite_number_is_a_coercion_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::asymptotic_generated(&cfg, dir.path(), Logic::K4, 1, 6),
        "inf\n0.5\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("non-finite number");
    assert!(matches!(err, MvxError::Coerce(_)));
    assert_eq!(err.info().code, "non-finite");
}

#[test]
fn wrong_field_count_is_a_schema_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::validation_generated(&cfg, dir.path(), Logic::GL, 40, 1, 6),
        "1,2,3,4,5\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("short record");
    assert!(matches!(err, MvxError::Schema(_)));
    let info = err.info();
    assert_eq!(info.code, "record-width");
    assert_eq!(info.context.get("expected").map(String::as_str), Some("7"));
    assert_eq!(info.context.get("found").map(String::as_str), Some("5"));
}

#[test]
fn overfull_generated_block_is_a_table_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::generated_formulas(&cfg, dir.path(), 1, 6),
        "box p\np -> q\none too many\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("overfull block");
    assert!(matches!(err, MvxError::Table(_)));
    let info = err.info();
    assert_eq!(info.code, "pad-overflow");
    assert_eq!(info.context.get("rows").map(String::as_str), Some("3"));
    assert_eq!(info.context.get("target").map(String::as_str), Some("2"));
    assert!(info.context.contains_key("path"));
}

#[test]
fn overfull_selected_block_is_a_table_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::selected_formulas(&cfg, dir.path()),
        "a\nb\nc\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("overfull selected block");
    assert_eq!(err.info().code, "pad-overflow");
}

#[test]
fn unparseable_selected_depth_is_a_coercion_error() {
    let cfg = tiny_config();
    let dir = tempfile::tempdir().expect("tempdir");
    populate_tree(&cfg, dir.path());
    write_file(
        &layout::selected_metadata(&cfg, dir.path()),
        "True,False,False,False,True,True,deep\nFalse,True,False,True,False,False,11\n",
    );

    let err = build_dataset(&cfg, dir.path()).expect_err("garbage depth");
    assert!(matches!(err, MvxError::Coerce(_)));
    let info = err.info();
    assert_eq!(info.code, "not-numeric");
    assert_eq!(info.context.get("column").map(String::as_str), Some("depth"));
}
