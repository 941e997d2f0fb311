//! Function declarations written with alias names.
//!
//! Declaration files map a function name to `[return, [params...]]`:
//!
//! ```json
//! { "MessageBoxW": ["INT", ["HWND", "LPCTSTR", "LPCTSTR", "UINT"]] }
//! ```
//!
//! Resolving one turns every alias into its concrete FFI type for the
//! active settings, in the same `[return, [params...]]` layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::CatalogError;

/// One declaration: return alias and parameter aliases.
///
/// Accepts both the positional form `["INT", ["HWND"]]` and
/// `{"ret": "INT", "params": ["HWND"]}`.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct FnDecl {
    pub ret: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl FnDecl {
    pub fn new(ret: &str, params: &[&str]) -> Self {
        Self {
            ret: ret.to_owned(),
            params: params.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

/// Declarations keyed by function name, in file order.
pub type FnDecls = IndexMap<String, FnDecl>;

/// A declaration with every alias resolved.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResolvedFn {
    pub ret: String,
    pub params: Vec<String>,
}

impl Serialize for ResolvedFn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.ret, &self.params).serialize(serializer)
    }
}

pub fn parse_fn_decls(json: &str) -> Result<FnDecls, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
