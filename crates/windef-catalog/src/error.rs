//! Errors surfaced by catalog lookups and declaration files.

use windef_core::{ResolveError, Settings};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Alias is not in the catalog.
    #[error("unknown type alias `{0}`")]
    UnknownAlias(String),

    /// Alias was found but its entry could not be collapsed.
    #[error("resolution failed for alias `{alias}` under {settings}: {source}")]
    Resolve {
        alias: String,
        settings: Settings,
        source: ResolveError,
    },

    /// A catalog document contains a malformed value.
    #[error("invalid catalog entry `{alias}`: {source}")]
    InvalidEntry {
        alias: String,
        source: ResolveError,
    },

    /// A function declaration references a bad alias.
    #[error("function `{name}`: {source}")]
    Function {
        name: String,
        source: Box<CatalogError>,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
