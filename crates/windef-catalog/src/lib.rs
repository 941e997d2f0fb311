#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Catalog of Windows type aliases (`windef.h`/`winnt.h`) and their FFI types.
//!
//! Two implementations:
//! - **Builtin** (`Catalog`): declared statically, built once on first use
//! - **Dynamic** (`DynamicCatalog`): loaded from JSON at runtime, optionally
//!   layered over the builtin entries
//!
//! Both answer point lookups through the `TypeCatalog` trait.

use std::sync::LazyLock;

use indexmap::IndexMap;

use windef_core::{Entry, EntryKind, Settings};

pub mod builtin;
pub mod dump;
pub mod dynamic;
mod error;
mod invariants;
pub mod signature;

#[cfg(test)]
mod dynamic_tests;

pub use builtin::WinType;
pub use dynamic::DynamicCatalog;
pub use error::CatalogError;
pub use signature::{FnDecl, FnDecls, ResolvedFn, parse_fn_decls};

/// Point lookups over a set of alias entries.
pub trait TypeCatalog {
    fn lookup(&self, alias: &str) -> Option<&Entry>;

    /// All entries in declaration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Entry)> + '_>;

    fn contains(&self, alias: &str) -> bool {
        self.lookup(alias).is_some()
    }

    /// Look up `alias` and collapse it under `settings`.
    fn resolve(&self, alias: &str, settings: Settings) -> Result<&str, CatalogError> {
        let Some(entry) = self.lookup(alias) else {
            log::debug!("alias `{alias}` not in catalog");
            return Err(CatalogError::UnknownAlias(alias.to_owned()));
        };
        entry
            .resolve(settings)
            .map_err(|source| CatalogError::Resolve {
                alias: alias.to_owned(),
                settings,
                source,
            })
    }

    /// Resolve a function declaration's return and parameter aliases.
    fn resolve_fn(
        &self,
        name: &str,
        decl: &FnDecl,
        settings: Settings,
    ) -> Result<ResolvedFn, CatalogError> {
        let in_fn = |source: CatalogError| CatalogError::Function {
            name: name.to_owned(),
            source: Box::new(source),
        };
        let ret = self.resolve(&decl.ret, settings).map_err(in_fn)?.to_owned();
        let params = decl
            .params
            .iter()
            .map(|param| self.resolve(param, settings).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()
            .map_err(in_fn)?;
        Ok(ResolvedFn { ret, params })
    }

    /// Resolve every declaration in `decls`, stopping at the first failure.
    fn resolve_fn_decls(
        &self,
        decls: &FnDecls,
        settings: Settings,
    ) -> Result<IndexMap<String, ResolvedFn>, CatalogError> {
        decls
            .iter()
            .map(|(name, decl)| {
                self.resolve_fn(name, decl, settings)
                    .map(|resolved| (name.clone(), resolved))
            })
            .collect()
    }
}

impl<T: TypeCatalog + ?Sized> TypeCatalog for &T {
    fn lookup(&self, alias: &str) -> Option<&Entry> {
        (*self).lookup(alias)
    }
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Entry)> + '_> {
        (*self).entries()
    }
}

/// The builtin catalog. Immutable once built; reads need no locking.
#[derive(Debug)]
pub struct Catalog {
    entries: IndexMap<&'static str, Entry>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Process-wide builtin catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    fn build() -> Self {
        let entries: IndexMap<_, _> = WinType::ALL
            .iter()
            .map(|ty| (ty.name(), ty.entry()))
            .collect();
        log::debug!("built windef catalog with {} aliases", entries.len());
        Self { entries }
    }

    /// Entry for a known alias. Never fails: every `WinType` has an entry.
    pub fn get(&self, ty: WinType) -> &Entry {
        self.ensure_entry(ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    /// Entries of one shape, in declaration order.
    pub fn iter_kind(&self, kind: EntryKind) -> impl Iterator<Item = (&str, &Entry)> {
        self.iter().filter(move |(_, entry)| entry.kind() == kind)
    }
}

impl TypeCatalog for Catalog {
    fn lookup(&self, alias: &str) -> Option<&Entry> {
        self.entries.get(alias)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Entry)> + '_> {
        Box::new(self.iter())
    }
}
