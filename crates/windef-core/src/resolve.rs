//! Placeholder and unicode resolvers.
//!
//! Both are pure selectors: they pick a candidate slot by a settings axis and
//! hand back the literal stored there. No validation of the type text.

use crate::{Candidate, Entry, ParamMacro, ResolveError, RetTypeMacro, Settings};

/// Extra word-size hops allowed after the first selection.
///
/// The half-pointer family needs exactly one ("half of whatever the pointer
/// size is"); anything deeper is a malformed catalog entry.
pub const MAX_NESTING: usize = 1;

/// Resolve a word-size macro: 64-bit slot when `word_size_is_64`, else 32-bit.
///
/// A nested macro in the selected slot is unwrapped with the same rule, at
/// most [`MAX_NESTING`] times.
pub fn resolve_param(param: &ParamMacro, settings: Settings) -> Result<&str, ResolveError> {
    let mut current = param;
    for depth in 0..=MAX_NESTING {
        match current.select(settings.word_size_is_64) {
            Candidate::Concrete(ty) => {
                log::trace!("word-size macro resolved to `{ty}` at depth {depth} under {settings}");
                return Ok(ty.as_ref());
            }
            Candidate::Nested(inner) => current = inner.as_ref(),
        }
    }
    Err(ResolveError::UnresolvedNesting {
        depth: MAX_NESTING + 1,
    })
}

/// Resolve a unicode macro: wide slot when `is_unicode`, else narrow.
///
/// The narrow slot may hold a bare `char*`; it is returned verbatim.
pub fn resolve_unicode(ret: &RetTypeMacro, is_unicode: bool) -> Result<&str, ResolveError> {
    let ty = ret.select(is_unicode);
    log::trace!("unicode macro resolved to `{ty}` (unicode: {is_unicode})");
    Ok(ty)
}

impl Entry {
    /// Collapse any entry to its concrete type under `settings`.
    pub fn resolve(&self, settings: Settings) -> Result<&str, ResolveError> {
        match self {
            Self::Plain(ty) => Ok(ty.as_ref()),
            Self::WordSize(param) => resolve_param(param, settings),
            Self::Unicode(ret) => resolve_unicode(ret, settings.is_unicode_build),
        }
    }

    /// The word-size macro behind this entry, for callers that go straight
    /// to [`resolve_param`].
    pub fn expect_word_size(&self) -> Result<&ParamMacro, ResolveError> {
        match self {
            Self::WordSize(param) => Ok(param),
            other => Err(ResolveError::InvalidMacroShape(format!(
                "expected a word-size macro, found a {} entry",
                other.kind().name()
            ))),
        }
    }

    /// The unicode macro behind this entry. Plain entries are rejected rather
    /// than passed through.
    pub fn expect_unicode(&self) -> Result<&RetTypeMacro, ResolveError> {
        match self {
            Self::Unicode(ret) => Ok(ret),
            other => Err(ResolveError::InvalidMacroShape(format!(
                "expected a unicode macro, found a {} entry",
                other.kind().name()
            ))),
        }
    }
}
