use super::*;

#[test]
fn missing_global_names_the_global() {
    assert_eq!(Error::MissingGlobal("window").to_string(), "missing global: window");
}

#[test]
fn json_error_becomes_config_error() {
    let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("config invalid:"));
}

#[test]
fn js_error_display() {
    assert_eq!(Error::Js("SyntaxError".into()).to_string(), "javascript error: SyntaxError");
}
