//! Human-readable and JSON renderings of a catalog.

use std::fmt::Write as _;

use indexmap::IndexMap;

use windef_core::{Colors, Entry, EntryKind, RawValue, Settings};

use crate::{CatalogError, TypeCatalog};

/// Width of the kind column (`word-size`).
const KIND_WIDTH: usize = 9;

/// Aligned `ALIAS  KIND  TYPE` table of the entries accepted by `filter`.
pub fn dump_table<C, F>(
    catalog: &C,
    settings: Settings,
    c: Colors,
    filter: F,
) -> Result<String, CatalogError>
where
    C: TypeCatalog + ?Sized,
    F: Fn(&str, &Entry) -> bool,
{
    let rows = catalog
        .entries()
        .filter(|(name, entry)| filter(name, entry))
        .map(|(name, entry)| {
            catalog
                .resolve(name, settings)
                .map(|ty| (name, entry.kind(), ty))
        })
        .collect::<Result<Vec<(&str, EntryKind, &str)>, CatalogError>>()?;

    let width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, kind, ty) in rows {
        writeln!(
            out,
            "{}{:<width$}{}  {}{:<KIND_WIDTH$}{}  {}{}{}",
            c.alias,
            name,
            c.reset,
            c.dim,
            kind.name(),
            c.reset,
            c.ty,
            ty,
            c.reset,
        )
        .unwrap();
    }
    Ok(out)
}

/// Every entry resolved under `settings`, as an alias -> type map.
pub fn resolve_all<C>(catalog: &C, settings: Settings) -> Result<IndexMap<&str, &str>, CatalogError>
where
    C: TypeCatalog + ?Sized,
{
    catalog
        .entries()
        .map(|(name, _)| catalog.resolve(name, settings).map(|ty| (name, ty)))
        .collect()
}

/// Every entry in its unresolved triple form.
pub fn raw_entries<C>(catalog: &C) -> IndexMap<&str, RawValue>
where
    C: TypeCatalog + ?Sized,
{
    catalog
        .entries()
        .map(|(name, entry)| (name, entry.to_raw()))
        .collect()
}
