#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures and resolvers for Windows type aliases.
//!
//! A catalog value is either a concrete FFI type string or a conditional
//! macro whose answer depends on the build settings:
//! - **Word-size macros** (`ParamMacro`): 64-bit candidate first, 32-bit second.
//!   The half-pointer family nests one more word-size macro.
//! - **Unicode macros** (`RetTypeMacro`): wide candidate first, narrow second.
//!
//! Two layers:
//! - **Raw layer**: 1:1 mapping to the JSON triple form
//!   (`["_WIN64_HOLDER_", "int64", "int32"]`)
//! - **Typed layer**: `Entry` and the two macro types, consumed by the resolvers

pub mod colors;
mod entry;
mod error;
mod raw;
mod resolve;
mod settings;

#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
mod settings_tests;

pub use colors::Colors;
pub use entry::{Candidate, ConcreteType, Entry, EntryKind, ParamMacro, RetTypeMacro};
pub use error::ResolveError;
pub use raw::{RawValue, UNICODE_TAG, WIN64_TAG};
pub use resolve::{MAX_NESTING, resolve_param, resolve_unicode};
pub use settings::Settings;
