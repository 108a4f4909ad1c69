use vt_core::errors::{ErrorInfo, VtError};
use vt_core::serde::{from_json_slice, to_canonical_json_bytes};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("shape", "Long")
        .with_hint("pass a container")
}

#[test]
fn usage_error_surface() {
    let err = VtError::Usage(sample_info("incompatible-container", "not a container"));
    assert!(err.is_usage());
    assert_eq!(err.info().code, "incompatible-container");
    assert_eq!(
        err.to_string(),
        "usage error: not a container (code: incompatible-container) | context: [shape=Long] | hint: pass a container"
    );
}

#[test]
fn config_error_surface() {
    let err = VtError::Config(ErrorInfo::new("max-depth-zero", "depth"));
    assert!(!err.is_usage());
    assert_eq!(err.info().code, "max-depth-zero");
}

#[test]
fn errors_roundtrip_through_json() {
    let err = VtError::Serde(sample_info("json_deserialize", "eof"));
    let bytes = to_canonical_json_bytes(&err).unwrap();
    let decoded: VtError = from_json_slice(&bytes).unwrap();
    assert_eq!(err, decoded);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with(r#"{"detail":"#));
    assert!(text.contains(r#""family":"Serde""#));
}
