//! Command builders for the CLI.
//!
//! Every command takes the same settings flags; they are added in one place
//! so `--arch`/`--charset`/`--config`/`--catalog` behave identically everywhere.

use clap::Command;

use super::args::*;

/// Add the flags that pick settings and the catalog.
fn with_settings_args(cmd: Command) -> Command {
    cmd.arg(arch_arg())
        .arg(charset_arg())
        .arg(config_arg())
        .arg(catalog_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("windef")
        .about("Resolve Windows type aliases to concrete FFI types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(resolve_command())
        .subcommand(list_command())
        .subcommand(dump_command())
        .subcommand(sig_command())
}

/// Resolve one or more aliases.
///
/// Examples:
///   windef resolve HWND
///   windef resolve HALF_PTR --arch ia32
///   windef resolve LPCTSTR --charset ansi
pub fn resolve_command() -> Command {
    with_settings_args(
        Command::new("resolve")
            .about("Resolve aliases under the active settings")
            .override_usage("windef resolve <ALIAS>... [OPTIONS]")
            .arg(aliases_arg()),
    )
    .arg(color_arg())
}

/// List catalog entries, optionally of one kind.
pub fn list_command() -> Command {
    with_settings_args(
        Command::new("list")
            .about("List catalog aliases with their kind and resolved type")
            .arg(kind_arg()),
    )
    .arg(color_arg())
}

/// Dump the whole catalog.
///
/// Examples:
///   windef dump                 # aligned table
///   windef dump --json          # {"HWND": "int64", ...}
///   windef dump --raw           # {"HWND": ["_WIN64_HOLDER_", "int64", "int32"], ...}
pub fn dump_command() -> Command {
    with_settings_args(
        Command::new("dump")
            .about("Dump the catalog resolved under the active settings")
            .arg(json_arg())
            .arg(raw_arg()),
    )
    .arg(color_arg())
}

/// Resolve a file of function declarations.
///
/// The file maps function names to `[return, [params...]]`:
///   {"GetWindowRect": ["BOOL", ["HWND", "LPRECT"]]}
pub fn sig_command() -> Command {
    with_settings_args(
        Command::new("sig")
            .about("Resolve function declarations to FFI signatures")
            .arg(decls_path_arg()),
    )
}
