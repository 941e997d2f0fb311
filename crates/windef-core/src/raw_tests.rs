use super::*;

fn parse(json: &str) -> Result<Entry, ResolveError> {
    Entry::from_raw(&RawValue::from_json(json).unwrap())
}

#[test]
fn plain_string_is_plain_entry() {
    assert_eq!(parse(r#""uint32""#), Ok(Entry::plain("uint32")));
}

#[test]
fn word_size_triple() {
    let entry = parse(r#"["_WIN64_HOLDER_", "int64", "int32"]"#).unwrap();
    assert_eq!(entry, Entry::WordSize(ParamMacro::new("int64", "int32")));
}

#[test]
fn half_pointer_triple() {
    let entry = parse(
        r#"["_WIN64_HOLDER_",
            ["_WIN64_HOLDER_", "int32", "int16"],
            ["_WIN64_HOLDER_", "int32", "int16"]]"#,
    )
    .unwrap();
    assert_eq!(entry, Entry::WordSize(ParamMacro::half("int32", "int16")));
    assert_eq!(entry.resolve(Settings::WIN64_ANSI), Ok("int32"));
    assert_eq!(entry.resolve(Settings::WIN32_ANSI), Ok("int16"));
}

#[test]
fn unicode_triple() {
    let entry = parse(r#"["_UNICODE_HOLDER_", "wchar16*", "char*"]"#).unwrap();
    assert_eq!(entry, Entry::Unicode(RetTypeMacro::new("wchar16*", "char*")));
}

#[test]
fn wrong_arity_is_invalid_shape() {
    let err = parse(r#"["_WIN64_HOLDER_", "int64"]"#).unwrap_err();
    insta::assert_snapshot!(err, @"invalid macro shape: expected [tag, value, value], found 2 elements");

    let err = parse(r#"["_WIN64_HOLDER_", "int64", "int32", "int16"]"#).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidMacroShape(_)));

    assert!(matches!(parse("[]"), Err(ResolveError::InvalidMacroShape(_))));
}

#[test]
fn unknown_tag_is_invalid_shape() {
    let err = parse(r#"["_ARM64_HOLDER_", "int64", "int32"]"#).unwrap_err();
    insta::assert_snapshot!(err, @"invalid macro shape: unknown macro tag `_ARM64_HOLDER_`");
}

#[test]
fn tag_must_be_a_string() {
    let err = parse(r#"[["_WIN64_HOLDER_"], "int64", "int32"]"#).unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidMacroShape("macro tag must be a string".into())
    );
}

#[test]
fn unicode_candidates_never_nest() {
    let err = parse(
        r#"["_UNICODE_HOLDER_", ["_UNICODE_HOLDER_", "wchar16", "uint8"], "char*"]"#,
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidMacroShape(_)));
}

#[test]
fn nested_word_size_must_keep_its_tag() {
    let err = parse(
        r#"["_WIN64_HOLDER_", ["_UNICODE_HOLDER_", "wchar16", "uint8"], "int32"]"#,
    )
    .unwrap_err();
    assert!(matches!(err, ResolveError::InvalidMacroShape(_)));
}

#[test]
fn deep_nesting_parses_but_fails_to_resolve() {
    let entry = parse(
        r#"["_WIN64_HOLDER_",
            ["_WIN64_HOLDER_", ["_WIN64_HOLDER_", "int32", "int16"], "int16"],
            "int32"]"#,
    )
    .unwrap();
    assert_eq!(
        entry.resolve(Settings::WIN64_UNICODE),
        Err(ResolveError::UnresolvedNesting { depth: 2 })
    );
}

#[test]
fn to_raw_restores_triple_form() {
    let entry = Entry::WordSize(ParamMacro::half("uint32", "uint16"));
    let json = serde_json::to_string(&entry.to_raw()).unwrap();
    insta::assert_snapshot!(json, @r#"["_WIN64_HOLDER_",["_WIN64_HOLDER_","uint32","uint16"],["_WIN64_HOLDER_","uint32","uint16"]]"#);

    let entry = Entry::Unicode(RetTypeMacro::new("wchar16", "uint8"));
    let json = serde_json::to_string(&entry.to_raw()).unwrap();
    assert_eq!(json, r#"["_UNICODE_HOLDER_","wchar16","uint8"]"#);

    assert_eq!(
        Entry::plain("void").to_raw(),
        RawValue::Type("void".to_owned())
    );
}

#[test]
fn try_from_raw() {
    let raw = RawValue::Type("int16".to_owned());
    assert_eq!(Entry::try_from(&raw), Ok(Entry::plain("int16")));
}
