//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use windef_core::Entry;

use crate::{Catalog, WinType};

impl Catalog {
    pub(crate) fn ensure_entry(&self, ty: WinType) -> &Entry {
        self.entries.get(ty.name()).unwrap_or_else(|| {
            panic!(
                "Catalog: `{ty}` has no entry \
                 (catalog must be built from WinType::ALL)"
            )
        })
    }
}
