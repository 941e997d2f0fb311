//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every command composes the same
//! settings flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Alias names to resolve (positional, one or more).
pub fn aliases_arg() -> Arg {
    Arg::new("aliases")
        .value_name("ALIAS")
        .num_args(1..)
        .required(true)
        .help("Windows type alias, e.g. HWND or LPCTSTR")
}

/// Function declaration file (positional).
pub fn decls_path_arg() -> Arg {
    Arg::new("decls_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file mapping function names to [return, [params...]]")
}

/// Pointer width (--arch).
pub fn arch_arg() -> Arg {
    Arg::new("arch")
        .long("arch")
        .value_name("ARCH")
        .value_parser(["x64", "ia32"])
        .help("Target pointer width (default: host)")
}

/// Character set (--charset).
pub fn charset_arg() -> Arg {
    Arg::new("charset")
        .long("charset")
        .value_name("CHARSET")
        .value_parser(["unicode", "ansi"])
        .help("Character-set convention (default: unicode)")
}

/// Settings file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON settings file, e.g. {\"_WIN64\": false, \"_UNICODE\": true}")
}

/// Extra catalog entries (--catalog), layered over the builtin ones.
pub fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .value_name("FILE")
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file of extra aliases (may be repeated)")
}

/// Entry kind filter (--kind).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_name("KIND")
        .value_parser(["plain", "word-size", "unicode"])
        .help("Only show entries of this kind")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Unresolved macro output (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Output entries in their unresolved [tag, 64/wide, 32/narrow] form")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
