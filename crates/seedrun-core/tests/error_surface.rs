use seedrun_core::errors::{ConfigError, ErrorInfo};
use seedrun_core::RunProvenance;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("key", "runs")
        .with_context("line", "3")
}

#[test]
fn file_not_found_surface() {
    let err = ConfigError::FileNotFound(ErrorInfo::new("config.file_not_found", "missing"));
    assert_eq!(err.info().code, "config.file_not_found");
    assert!(err.to_string().starts_with("file not found:"));
}

#[test]
fn parse_error_surface() {
    let err = ConfigError::Parse(sample_info("config.parse", "no separator"));
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("3"));
}

#[test]
fn missing_key_surface() {
    let err = ConfigError::MissingKey(sample_info("config.missing_key", "absent"));
    assert_eq!(err.key(), Some("runs"));
}

#[test]
fn format_error_surface() {
    let err = ConfigError::Format(sample_info("config.format", "not an integer"));
    assert_eq!(err.info().code, "config.format");
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = ConfigError::MissingKey(sample_info("config.missing_key", "absent"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "MissingKey");
    assert_eq!(json["detail"]["context"]["key"], "runs");
    let decoded: ConfigError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn provenance_records_derived_seed() {
    let provenance = RunProvenance::for_run("config/default.properties", "abc", 3);
    assert_eq!(provenance.seed, 3);
    assert_eq!(provenance.derived_seed, seedrun_core::derive_run_seed(3));
    assert_eq!(provenance.config_hash, "abc");
}
