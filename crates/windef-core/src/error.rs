//! Errors raised while turning catalog values into concrete types.

/// Resolution failure. Both variants point at a malformed value or a caller
/// passing the wrong shape; retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Value is not a recognizable conditional-macro triple, or is the wrong
    /// kind of macro for the resolver it was handed to.
    #[error("invalid macro shape: {0}")]
    InvalidMacroShape(String),

    /// Word-size unwrapping did not reach a concrete type in time.
    #[error("unresolved nesting: no concrete type after {depth} nested word-size macros")]
    UnresolvedNesting { depth: usize },
}
