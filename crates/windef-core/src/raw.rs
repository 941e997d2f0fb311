//! JSON triple form of catalog values.
//!
//! A value is either a type string or a 3-element array whose first element
//! is a tag marker: `["_WIN64_HOLDER_", "int64", "int32"]`,
//! `["_UNICODE_HOLDER_", "wchar16*", "char*"]`.

use serde::{Deserialize, Serialize};

use crate::{Candidate, Entry, ParamMacro, ResolveError, RetTypeMacro};

/// Tag marking a word-size macro (64-bit candidate first).
pub const WIN64_TAG: &str = "_WIN64_HOLDER_";

/// Tag marking a unicode macro (wide candidate first).
pub const UNICODE_TAG: &str = "_UNICODE_HOLDER_";

/// Untyped catalog value as found in JSON.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Type(String),
    Macro(Vec<RawValue>),
}

impl RawValue {
    /// Parse a single value from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn triple(tag: &str, first: RawValue, second: RawValue) -> Self {
        Self::Macro(vec![Self::Type(tag.to_owned()), first, second])
    }
}

fn shape_error(msg: impl Into<String>) -> ResolveError {
    ResolveError::InvalidMacroShape(msg.into())
}

/// Split a macro array into `(tag, first, second)`.
fn split_triple(items: &[RawValue]) -> Result<(&str, &RawValue, &RawValue), ResolveError> {
    let [tag, first, second] = items else {
        return Err(shape_error(format!(
            "expected [tag, value, value], found {} elements",
            items.len()
        )));
    };
    let RawValue::Type(tag) = tag else {
        return Err(shape_error("macro tag must be a string"));
    };
    Ok((tag.as_str(), first, second))
}

fn param_from_raw(items: &[RawValue]) -> Result<ParamMacro, ResolveError> {
    let (tag, win64, win32) = split_triple(items)?;
    if tag != WIN64_TAG {
        return Err(shape_error(format!(
            "nested macro must be tagged `{WIN64_TAG}`, found `{tag}`"
        )));
    }
    Ok(ParamMacro {
        win64: candidate_from_raw(win64)?,
        win32: candidate_from_raw(win32)?,
    })
}

fn candidate_from_raw(raw: &RawValue) -> Result<Candidate, ResolveError> {
    match raw {
        RawValue::Type(ty) => Ok(Candidate::from(ty.clone())),
        // Depth is left for the resolver to judge.
        RawValue::Macro(items) => Ok(Candidate::from(param_from_raw(items)?)),
    }
}

fn unicode_slot(raw: &RawValue) -> Result<String, ResolveError> {
    match raw {
        RawValue::Type(ty) => Ok(ty.clone()),
        RawValue::Macro(_) => Err(shape_error("unicode macro candidates cannot nest")),
    }
}

fn candidate_to_raw(candidate: &Candidate) -> RawValue {
    match candidate {
        Candidate::Concrete(ty) => RawValue::Type(ty.to_string()),
        Candidate::Nested(inner) => param_to_raw(inner),
    }
}

fn param_to_raw(param: &ParamMacro) -> RawValue {
    RawValue::triple(
        WIN64_TAG,
        candidate_to_raw(&param.win64),
        candidate_to_raw(&param.win32),
    )
}

impl Entry {
    /// Classify a raw value by shape.
    pub fn from_raw(raw: &RawValue) -> Result<Self, ResolveError> {
        let items = match raw {
            RawValue::Type(ty) => return Ok(Self::plain(ty.clone())),
            RawValue::Macro(items) => items,
        };
        let (tag, first, second) = split_triple(items)?;
        match tag {
            WIN64_TAG => param_from_raw(items).map(Self::WordSize),
            UNICODE_TAG => Ok(Self::Unicode(RetTypeMacro::new(
                unicode_slot(first)?,
                unicode_slot(second)?,
            ))),
            other => Err(shape_error(format!("unknown macro tag `{other}`"))),
        }
    }

    pub fn to_raw(&self) -> RawValue {
        match self {
            Self::Plain(ty) => RawValue::Type(ty.to_string()),
            Self::WordSize(param) => param_to_raw(param),
            Self::Unicode(ret) => RawValue::triple(
                UNICODE_TAG,
                RawValue::Type(ret.wide.to_string()),
                RawValue::Type(ret.narrow.to_string()),
            ),
        }
    }
}

impl TryFrom<&RawValue> for Entry {
    type Error = ResolveError;

    fn try_from(raw: &RawValue) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
