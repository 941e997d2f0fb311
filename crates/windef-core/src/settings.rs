//! Build settings that drive macro resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two build axes a conditional type can depend on.
///
/// Both axes are independent; every combination is valid. Serialized with the
/// historical header macro names (`_WIN64`, `_UNICODE`). A key missing from a
/// settings document falls back to [`Settings::host`]; an unknown key is an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Resolve for a 64-bit pointer-width target.
    #[serde(rename = "_WIN64")]
    pub word_size_is_64: bool,
    /// Resolve for the wide-character (`UNICODE`) build convention.
    #[serde(rename = "_UNICODE")]
    pub is_unicode_build: bool,
}

impl Settings {
    pub const WIN64_UNICODE: Self = Self::new(true, true);
    pub const WIN64_ANSI: Self = Self::new(true, false);
    pub const WIN32_UNICODE: Self = Self::new(false, true);
    pub const WIN32_ANSI: Self = Self::new(false, false);

    pub const fn new(word_size_is_64: bool, is_unicode_build: bool) -> Self {
        Self {
            word_size_is_64,
            is_unicode_build,
        }
    }

    /// Settings for the running process: native pointer width, unicode on.
    pub const fn host() -> Self {
        Self::new(cfg!(target_pointer_width = "64"), true)
    }

    /// All four axis combinations.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::WIN64_UNICODE,
            Self::WIN64_ANSI,
            Self::WIN32_UNICODE,
            Self::WIN32_ANSI,
        ]
        .into_iter()
    }

    pub const fn with_word_size_64(self, word_size_is_64: bool) -> Self {
        Self::new(word_size_is_64, self.is_unicode_build)
    }

    pub const fn with_unicode(self, is_unicode_build: bool) -> Self {
        Self::new(self.word_size_is_64, is_unicode_build)
    }

    /// Architecture label, in the naming node-style tooling uses (`x64`/`ia32`).
    pub fn arch_name(self) -> &'static str {
        if self.word_size_is_64 { "x64" } else { "ia32" }
    }

    pub fn charset_name(self) -> &'static str {
        if self.is_unicode_build {
            "unicode"
        } else {
            "ansi"
        }
    }

    /// Parse a settings document such as `{"_WIN64": false, "_UNICODE": true}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.arch_name(), self.charset_name())
    }
}
