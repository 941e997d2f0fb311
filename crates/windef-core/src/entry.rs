//! Typed representation of catalog values.

use std::borrow::Cow;

/// A resolved FFI type string such as `int32`, `uint64*` or `char*`.
///
/// Width is embedded in the text by convention only; nothing here checks it.
pub type ConcreteType = Cow<'static, str>;

/// One slot of a word-size macro.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Candidate {
    Concrete(ConcreteType),
    /// Another word-size macro, selected again with the same settings.
    /// Only the half-pointer family uses this.
    Nested(Box<ParamMacro>),
}

impl Candidate {
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

impl From<&'static str> for Candidate {
    fn from(ty: &'static str) -> Self {
        Self::Concrete(Cow::Borrowed(ty))
    }
}

impl From<String> for Candidate {
    fn from(ty: String) -> Self {
        Self::Concrete(Cow::Owned(ty))
    }
}

impl From<ParamMacro> for Candidate {
    fn from(inner: ParamMacro) -> Self {
        Self::Nested(Box::new(inner))
    }
}

/// Word-size-conditional type: `(tag, value_for_64bit, value_for_32bit)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParamMacro {
    pub win64: Candidate,
    pub win32: Candidate,
}

impl ParamMacro {
    pub fn new(win64: impl Into<Candidate>, win32: impl Into<Candidate>) -> Self {
        Self {
            win64: win64.into(),
            win32: win32.into(),
        }
    }

    /// Half-pointer macro: both slots hold the same inner macro, so the
    /// word size picks twice (`int32` on x64, `int16` on ia32).
    pub fn half(win64: &'static str, win32: &'static str) -> Self {
        let inner = Self::new(win64, win32);
        Self::new(inner.clone(), inner)
    }

    pub fn select(&self, word_size_is_64: bool) -> &Candidate {
        if word_size_is_64 {
            &self.win64
        } else {
            &self.win32
        }
    }

    /// Copy with the two slots exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            win64: self.win32.clone(),
            win32: self.win64.clone(),
        }
    }
}

/// Unicode-conditional type: `(tag, value_for_wide, value_for_narrow)`.
///
/// Wide comes first, the mirror of [`ParamMacro`]'s 64-bit-first order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RetTypeMacro {
    pub wide: ConcreteType,
    pub narrow: ConcreteType,
}

impl RetTypeMacro {
    pub fn new(wide: impl Into<ConcreteType>, narrow: impl Into<ConcreteType>) -> Self {
        Self {
            wide: wide.into(),
            narrow: narrow.into(),
        }
    }

    pub fn select(&self, is_unicode: bool) -> &str {
        if is_unicode { &self.wide } else { &self.narrow }
    }

    pub fn swapped(&self) -> Self {
        Self {
            wide: self.narrow.clone(),
            narrow: self.wide.clone(),
        }
    }
}

/// Shape of a catalog value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntryKind {
    Plain,
    WordSize,
    Unicode,
}

impl EntryKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::WordSize => "word-size",
            Self::Unicode => "unicode",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(Self::Plain),
            "word-size" => Some(Self::WordSize),
            "unicode" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// A catalog value, classified by shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Entry {
    Plain(ConcreteType),
    WordSize(ParamMacro),
    Unicode(RetTypeMacro),
}

impl Entry {
    pub fn plain(ty: impl Into<ConcreteType>) -> Self {
        Self::Plain(ty.into())
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Plain(_) => EntryKind::Plain,
            Self::WordSize(_) => EntryKind::WordSize,
            Self::Unicode(_) => EntryKind::Unicode,
        }
    }

    pub fn is_conditional(&self) -> bool {
        !matches!(self, Self::Plain(_))
    }
}
