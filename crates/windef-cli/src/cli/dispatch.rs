//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::list::ListArgs;
use crate::commands::loader::SettingsArgs;
use crate::commands::resolve::ResolveArgs;
use crate::commands::sig::SigArgs;

pub struct SettingsParams {
    pub arch: Option<String>,
    pub charset: Option<String>,
    pub config: Option<PathBuf>,
    pub catalogs: Vec<PathBuf>,
}

impl SettingsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            arch: m.get_one::<String>("arch").cloned(),
            charset: m.get_one::<String>("charset").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            catalogs: m
                .get_many::<PathBuf>("catalog")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<SettingsParams> for SettingsArgs {
    fn from(p: SettingsParams) -> Self {
        Self {
            word_size_is_64: p.arch.map(|arch| arch == "x64"),
            is_unicode_build: p.charset.map(|charset| charset == "unicode"),
            config: p.config,
            catalogs: p.catalogs,
        }
    }
}

pub struct ResolveParams {
    pub aliases: Vec<String>,
    pub settings: SettingsParams,
    pub color: ColorChoice,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            aliases: m
                .get_many::<String>("aliases")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            settings: SettingsParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            aliases: p.aliases,
            settings: p.settings.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ListParams {
    pub kind: Option<String>,
    pub settings: SettingsParams,
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kind: m.get_one::<String>("kind").cloned(),
            settings: SettingsParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            kind: p.kind,
            settings: p.settings.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub json: bool,
    pub raw: bool,
    pub settings: SettingsParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            raw: m.get_flag("raw"),
            settings: SettingsParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            json: p.json,
            raw: p.raw,
            settings: p.settings.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct SigParams {
    pub decls_path: PathBuf,
    pub settings: SettingsParams,
}

impl SigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            decls_path: m
                .get_one::<PathBuf>("decls_path")
                .cloned()
                .unwrap_or_default(),
            settings: SettingsParams::from_matches(m),
        }
    }
}

impl From<SigParams> for SigArgs {
    fn from(p: SigParams) -> Self {
        Self {
            decls_path: p.decls_path,
            settings: p.settings.into(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
