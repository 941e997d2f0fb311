use super::*;

fn hwnd() -> ParamMacro {
    ParamMacro::new("int64", "int32")
}

fn lpctstr() -> RetTypeMacro {
    RetTypeMacro::new("wchar16*", "char*")
}

#[test]
fn word_size_selects_by_pointer_width() {
    assert_eq!(resolve_param(&hwnd(), Settings::WIN64_UNICODE), Ok("int64"));
    assert_eq!(resolve_param(&hwnd(), Settings::WIN64_ANSI), Ok("int64"));
    assert_eq!(resolve_param(&hwnd(), Settings::WIN32_UNICODE), Ok("int32"));
    assert_eq!(resolve_param(&hwnd(), Settings::WIN32_ANSI), Ok("int32"));
}

#[test]
fn half_pointer_unwraps_one_level() {
    let half = ParamMacro::half("int32", "int16");
    assert!(half.win64.is_nested());
    assert!(half.win32.is_nested());

    for settings in Settings::all() {
        let ty = resolve_param(&half, settings).unwrap();
        if settings.word_size_is_64 {
            assert_eq!(ty, "int32");
        } else {
            assert_eq!(ty, "int16");
        }
    }
}

#[test]
fn nested_only_in_64bit_slot() {
    let param = ParamMacro::new(ParamMacro::new("int32", "int16"), "int16");
    assert_eq!(resolve_param(&param, Settings::WIN64_ANSI), Ok("int32"));
    assert_eq!(resolve_param(&param, Settings::WIN32_ANSI), Ok("int16"));
}

#[test]
fn nesting_deeper_than_one_hop_is_rejected() {
    let too_deep = ParamMacro::new(
        ParamMacro::new(ParamMacro::new("int32", "int16"), "int16"),
        "int32",
    );
    assert_eq!(
        resolve_param(&too_deep, Settings::WIN64_UNICODE),
        Err(ResolveError::UnresolvedNesting { depth: 2 })
    );
    // The 32-bit path bottoms out immediately, so it still resolves.
    assert_eq!(resolve_param(&too_deep, Settings::WIN32_UNICODE), Ok("int32"));
}

#[test]
fn unicode_selects_by_charset() {
    assert_eq!(resolve_unicode(&lpctstr(), true), Ok("wchar16*"));
    assert_eq!(resolve_unicode(&lpctstr(), false), Ok("char*"));
}

#[test]
fn resolution_is_idempotent() {
    let half = ParamMacro::half("uint32", "uint16");
    for settings in Settings::all() {
        assert_eq!(
            resolve_param(&half, settings),
            resolve_param(&half, settings)
        );
        assert_eq!(
            resolve_unicode(&lpctstr(), settings.is_unicode_build),
            resolve_unicode(&lpctstr(), settings.is_unicode_build)
        );
    }
}

#[test]
fn swapping_candidates_changes_result() {
    let param = hwnd();
    let swapped = param.swapped();
    assert_ne!(
        resolve_param(&param, Settings::WIN64_UNICODE),
        resolve_param(&swapped, Settings::WIN64_UNICODE)
    );

    let ret = lpctstr();
    let swapped = ret.swapped();
    assert_ne!(
        resolve_unicode(&ret, true),
        resolve_unicode(&swapped, true)
    );
}

#[test]
fn entry_resolve_dispatches_on_shape() {
    let plain = Entry::plain("uint32");
    let word = Entry::WordSize(hwnd());
    let text = Entry::Unicode(lpctstr());

    for settings in Settings::all() {
        assert_eq!(plain.resolve(settings), Ok("uint32"));
    }
    assert_eq!(word.resolve(Settings::WIN64_ANSI), Ok("int64"));
    assert_eq!(word.resolve(Settings::WIN32_ANSI), Ok("int32"));
    assert_eq!(text.resolve(Settings::WIN32_UNICODE), Ok("wchar16*"));
    assert_eq!(text.resolve(Settings::WIN64_ANSI), Ok("char*"));
}

#[test]
fn expect_rejects_wrong_shape() {
    let plain = Entry::plain("uint32");
    assert!(matches!(
        plain.expect_unicode(),
        Err(ResolveError::InvalidMacroShape(_))
    ));
    assert!(matches!(
        plain.expect_word_size(),
        Err(ResolveError::InvalidMacroShape(_))
    ));

    let text = Entry::Unicode(lpctstr());
    assert!(text.expect_unicode().is_ok());
    let err = text.expect_word_size().unwrap_err();
    insta::assert_snapshot!(err, @"invalid macro shape: expected a word-size macro, found a unicode entry");
}

#[test]
fn entry_kinds() {
    assert_eq!(Entry::plain("int8").kind(), EntryKind::Plain);
    assert!(!Entry::plain("int8").is_conditional());
    assert_eq!(Entry::WordSize(hwnd()).kind(), EntryKind::WordSize);
    assert_eq!(Entry::Unicode(lpctstr()).kind(), EntryKind::Unicode);
    assert!(Entry::Unicode(lpctstr()).is_conditional());

    assert_eq!(EntryKind::from_name("word-size"), Some(EntryKind::WordSize));
    assert_eq!(EntryKind::from_name("unicode"), Some(EntryKind::Unicode));
    assert_eq!(EntryKind::from_name("charset"), None);
    assert_eq!(EntryKind::from_name("nope"), None);
    assert_eq!(EntryKind::Unicode.name(), "unicode");
}
