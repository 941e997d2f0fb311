//! Catalogs loaded at runtime from JSON.

use indexmap::IndexMap;

use windef_core::{Entry, RawValue};

use crate::{CatalogError, TypeCatalog, catalog};

/// Heap-allocated catalog built from JSON documents.
///
/// A document is an object mapping alias names to raw values:
/// `{"HWND": ["_WIN64_HOLDER_", "int64", "int32"], "DWORD": "uint32"}`.
/// Later documents override earlier entries with the same name.
#[derive(Debug, Clone, Default)]
pub struct DynamicCatalog {
    entries: IndexMap<String, Entry>,
}

impl DynamicCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the builtin catalog, ready to be extended.
    pub fn from_builtin() -> Self {
        let entries = catalog()
            .iter()
            .map(|(name, entry)| (name.to_owned(), entry.clone()))
            .collect();
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut dynamic = Self::new();
        dynamic.extend_from_json(json)?;
        Ok(dynamic)
    }

    /// Merge a JSON document. Either every entry is merged or none is.
    ///
    /// Returns the number of entries in the document.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, CatalogError> {
        let raw: IndexMap<String, RawValue> = serde_json::from_str(json)?;
        let parsed = raw
            .into_iter()
            .map(|(alias, value)| match Entry::from_raw(&value) {
                Ok(entry) => Ok((alias, entry)),
                Err(source) => Err(CatalogError::InvalidEntry { alias, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        for (alias, entry) in parsed {
            if let Some(previous) = self.entries.insert(alias.clone(), entry) {
                log::debug!("alias `{alias}` overridden (was {:?})", previous.kind());
            }
        }
        log::debug!("merged {count} catalog entries");
        Ok(count)
    }

    pub fn insert(&mut self, alias: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(alias.into(), entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeCatalog for DynamicCatalog {
    fn lookup(&self, alias: &str) -> Option<&Entry> {
        self.entries.get(alias)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Entry)> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(name, entry)| (name.as_str(), entry)),
        )
    }
}
