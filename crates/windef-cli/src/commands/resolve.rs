use std::fmt::Write as _;

use windef_catalog::{CatalogError, TypeCatalog};
use windef_core::{Colors, Settings};

use super::loader::{SettingsArgs, require, suggest_alias};

pub struct ResolveArgs {
    pub aliases: Vec<String>,
    pub settings: SettingsArgs,
    pub color: bool,
}

pub fn run(args: ResolveArgs) {
    let (settings, catalog) = require(&args.settings);
    let c = Colors::new(args.color);

    match render_resolved(&*catalog, &args.aliases, settings, c) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            if let CatalogError::UnknownAlias(name) = &e
                && let Some(suggestion) = suggest_alias(&*catalog, name)
            {
                eprintln!();
                eprintln!("Did you mean '{}'?", suggestion);
            }
            std::process::exit(1);
        }
    }
}

/// `ALIAS  TYPE` per alias, aligned. Fails on the first alias that does not resolve.
pub fn render_resolved(
    catalog: &dyn TypeCatalog,
    aliases: &[String],
    settings: Settings,
    c: Colors,
) -> Result<String, CatalogError> {
    let resolved = aliases
        .iter()
        .map(|alias| catalog.resolve(alias, settings).map(|ty| (alias, ty)))
        .collect::<Result<Vec<_>, _>>()?;

    let width = resolved
        .iter()
        .map(|(alias, _)| alias.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (alias, ty) in resolved {
        writeln!(
            out,
            "{}{:<width$}{}  {}{}{}",
            c.alias, alias, c.reset, c.ty, ty, c.reset
        )
        .unwrap();
    }
    Ok(out)
}
