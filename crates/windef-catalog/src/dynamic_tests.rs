use indoc::indoc;
use windef_core::{Entry, ParamMacro, ResolveError, Settings};

use super::*;

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "HWND": ["_WIN64_HOLDER_", "int64", "int32"],
        "DWORD": "uint32",
        "HALF_PTR": ["_WIN64_HOLDER_",
            ["_WIN64_HOLDER_", "int32", "int16"],
            ["_WIN64_HOLDER_", "int32", "int16"]],
        "LPCTSTR": ["_UNICODE_HOLDER_", "wchar16*", "char*"]
    }
"#};

#[test]
fn load_from_json() {
    let dynamic = DynamicCatalog::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(dynamic.len(), 4);

    let names: Vec<_> = dynamic.entries().map(|(name, _)| name).collect();
    assert_eq!(names, ["HWND", "DWORD", "HALF_PTR", "LPCTSTR"]);

    assert_eq!(dynamic.resolve("HWND", Settings::WIN32_ANSI).unwrap(), "int32");
    assert_eq!(dynamic.resolve("HALF_PTR", Settings::WIN32_ANSI).unwrap(), "int16");
    assert_eq!(dynamic.resolve("LPCTSTR", Settings::WIN32_ANSI).unwrap(), "char*");
    assert_eq!(dynamic.resolve("DWORD", Settings::WIN64_UNICODE).unwrap(), "uint32");
}

#[test]
fn json_entries_match_builtin() {
    let dynamic = DynamicCatalog::from_json(SAMPLE_JSON).unwrap();
    for (name, entry) in dynamic.entries() {
        assert_eq!(catalog().lookup(name), Some(entry), "{name}");
    }
}

#[test]
fn malformed_entry_rejects_whole_document() {
    let mut dynamic = DynamicCatalog::new();
    let err = dynamic
        .extend_from_json(r#"{"DWORD": "uint32", "BAD": ["_WIN64_HOLDER_", "int64"]}"#)
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::InvalidEntry {
            ref alias,
            source: ResolveError::InvalidMacroShape(_),
        } if alias == "BAD"
    ));
    assert!(dynamic.is_empty());
}

#[test]
fn malformed_json() {
    let err = DynamicCatalog::from_json("{").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));

    let err = DynamicCatalog::from_json(r#"{"X": 42}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn layered_over_builtin() {
    let mut dynamic = DynamicCatalog::from_builtin();
    assert_eq!(dynamic.len(), catalog().len());

    let merged = dynamic
        .extend_from_json(r#"{"HFILE": "int32", "HTASK": ["_WIN64_HOLDER_", "int64", "int32"]}"#)
        .unwrap();
    assert_eq!(merged, 2);
    assert_eq!(dynamic.len(), catalog().len() + 1);

    assert_eq!(dynamic.resolve("HFILE", Settings::WIN64_UNICODE).unwrap(), "int32");
    assert_eq!(dynamic.resolve("HTASK", Settings::WIN64_UNICODE).unwrap(), "int64");
    assert_eq!(dynamic.resolve("HWND", Settings::WIN64_UNICODE).unwrap(), "int64");
}

#[test]
fn insert_returns_previous() {
    let mut dynamic = DynamicCatalog::new();
    assert!(dynamic.insert("X", Entry::plain("int8")).is_none());
    let previous = dynamic.insert("X", Entry::WordSize(ParamMacro::new("int64", "int32")));
    assert_eq!(previous, Some(Entry::plain("int8")));
    assert!(dynamic.contains("X"));
}

#[test]
fn works_through_reference() {
    fn resolve_via<C: TypeCatalog>(c: C) -> String {
        c.resolve("HWND", Settings::WIN32_UNICODE).unwrap().to_owned()
    }
    assert_eq!(resolve_via(catalog()), "int32");
}
