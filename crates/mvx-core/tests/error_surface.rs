use mvx_core::errors::{ErrorInfo, MvxError};
use mvx_core::{Logic, ValMetric};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "generated/formulas 1/depth 6.txt")
        .with_context("row", "12")
}

#[test]
fn schema_error_surface() {
    let err = MvxError::Schema(sample_info("record-width", "unexpected field count"));
    assert_eq!(err.info().code, "record-width");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn coerce_error_surface() {
    let err = MvxError::Coerce(sample_info("not-numeric", "field does not parse as a number"));
    assert_eq!(err.info().code, "not-numeric");
    assert!(err.info().context.contains_key("row"));
}

#[test]
fn table_error_surface() {
    let err = MvxError::Table(sample_info("pad-overflow", "block taller than its cap"));
    assert_eq!(err.info().code, "pad-overflow");
}

#[test]
fn config_error_surface() {
    let err = MvxError::Config(sample_info("empty-axis", "no node counts configured"));
    assert_eq!(err.info().code, "empty-axis");
}

#[test]
fn serde_error_surface() {
    let err = MvxError::Serde(sample_info("csv-write", "failed to write record"));
    assert_eq!(err.info().code, "csv-write");
}

#[test]
fn with_context_preserves_family() {
    let err = MvxError::Coerce(ErrorInfo::new("not-numeric", "bad field"))
        .with_context("path", "validated-Peregrine/GL/40/formulas 2/depth 7.txt");
    match &err {
        MvxError::Coerce(info) => {
            assert_eq!(
                info.context.get("path").map(String::as_str),
                Some("validated-Peregrine/GL/40/formulas 2/depth 7.txt")
            );
        }
        other => panic!("family changed: {other:?}"),
    }
}

#[test]
fn display_includes_code_context_and_hint() {
    let err = MvxError::Table(
        ErrorInfo::new("adjoin-rows", "row counts differ")
            .with_context("left", "8047")
            .with_context("right", "8000")
            .with_hint("check the padding caps"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("table error:"));
    assert!(rendered.contains("code: adjoin-rows"));
    assert!(rendered.contains("left=8047"));
    assert!(rendered.contains("hint: check the padding caps"));
}

#[test]
fn identifier_serde_forms_match_column_naming() {
    assert_eq!(serde_json::to_string(&Logic::GL).unwrap(), "\"GL\"");
    assert_eq!(serde_json::to_string(&Logic::K4).unwrap(), "\"K4\"");
    assert_eq!(serde_json::to_string(&ValMetric::Frame).unwrap(), "\"frame\"");
    assert_eq!(ValMetric::Model.as_str(), "model");
    assert_eq!(Logic::S4.to_string(), "S4");
}
