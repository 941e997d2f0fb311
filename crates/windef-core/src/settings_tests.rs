use super::*;

#[test]
fn presets() {
    assert!(Settings::WIN64_UNICODE.word_size_is_64);
    assert!(Settings::WIN64_UNICODE.is_unicode_build);
    assert!(!Settings::WIN32_ANSI.word_size_is_64);
    assert!(!Settings::WIN32_ANSI.is_unicode_build);
    assert_eq!(Settings::all().count(), 4);
}

#[test]
fn host_defaults_to_unicode() {
    let host = Settings::host();
    assert!(host.is_unicode_build);
    assert_eq!(host.word_size_is_64, cfg!(target_pointer_width = "64"));
    assert_eq!(Settings::default(), host);
}

#[test]
fn builders_flip_one_axis() {
    let s = Settings::WIN64_UNICODE.with_word_size_64(false);
    assert_eq!(s, Settings::WIN32_UNICODE);
    let s = s.with_unicode(false);
    assert_eq!(s, Settings::WIN32_ANSI);
}

#[test]
fn display() {
    assert_eq!(Settings::WIN64_UNICODE.to_string(), "x64/unicode");
    assert_eq!(Settings::WIN32_ANSI.to_string(), "ia32/ansi");
}

#[test]
fn from_json_uses_header_macro_names() {
    let s = Settings::from_json(r#"{"_WIN64": false, "_UNICODE": false}"#).unwrap();
    assert_eq!(s, Settings::WIN32_ANSI);
}

#[test]
fn from_json_fills_missing_keys_from_host() {
    let s = Settings::from_json(r#"{"_UNICODE": false}"#).unwrap();
    assert_eq!(s, Settings::host().with_unicode(false));

    let s = Settings::from_json("{}").unwrap();
    assert_eq!(s, Settings::host());
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(Settings::from_json(r#"{"_WIN64": "yes"}"#).is_err());
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = Settings::from_json(r#"{"_WIN64": true, "_UNICDE": false}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `_UNICDE`"), "{err}");
}

#[test]
fn serializes_with_header_macro_names() {
    let json = serde_json::to_string(&Settings::WIN64_ANSI).unwrap();
    assert_eq!(json, r#"{"_WIN64":true,"_UNICODE":false}"#);
}
