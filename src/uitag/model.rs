//! # Core Types
//!
//! - [`TagId`]: opaque tag token, usually `#<number>`
//! - [`TagType`]: closed set of relationship kinds, with `Undefined` as the
//!   "not chosen yet" sentinel
//! - [`CandidateTag`]: the tag currently being composed
//! - [`AssignedTag`]: a tag attached to the target, with its [`Origin`]
//!
//! ## Id Ordering
//!
//! The available pool is ordered by the integer embedded in each id
//! (see [`TagId::number`]). Ids without a number sort after all numbered ids,
//! by their raw text, so [`compare_ids`] is a total order.

use crate::error::{Result, TagError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(TagError::EmptyId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name: the id with its leading `#` removed.
    pub fn display_name(&self) -> String {
        derive_name(&self.0)
    }

    /// The integer embedded in the id, read like `#12` → 12.
    ///
    /// Leading whitespace and an optional sign are accepted, then as many
    /// digits as follow; trailing text is ignored (`#12b` → 12). Returns
    /// `None` when no digits follow or the value does not fit an `i64`.
    pub fn number(&self) -> Option<i64> {
        let text = self.0.strip_prefix('#').unwrap_or(&self.0).trim_start();
        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }
        let value: i64 = rest[..digits_len].parse().ok()?;
        Some(if negative { -value } else { value })
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips a single leading `#` from an id.
pub fn derive_name(id: &str) -> String {
    id.strip_prefix('#').unwrap_or(id).to_string()
}

/// Pool order: by embedded number, then by raw text; unnumbered ids last.
pub fn compare_ids(a: &TagId, b: &TagId) -> Ordering {
    match (a.number(), b.number()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.as_str().cmp(b.as_str())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.as_str().cmp(b.as_str()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    #[default]
    Undefined,
    Unassigned,
    Blocked,
    Duplicate,
    Related,
    Depends,
    Required,
}

impl TagType {
    pub const ALL: [TagType; 7] = [
        TagType::Undefined,
        TagType::Unassigned,
        TagType::Blocked,
        TagType::Duplicate,
        TagType::Related,
        TagType::Depends,
        TagType::Required,
    ];

    /// Types a user may pick; the sentinel is never offered.
    pub const SELECTABLE: [TagType; 6] = [
        TagType::Unassigned,
        TagType::Blocked,
        TagType::Duplicate,
        TagType::Related,
        TagType::Depends,
        TagType::Required,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Undefined => "undefined",
            TagType::Unassigned => "unassigned",
            TagType::Blocked => "blocked",
            TagType::Duplicate => "duplicate",
            TagType::Related => "related",
            TagType::Depends => "depends",
            TagType::Required => "required",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, TagType::Undefined)
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TagType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown tag type '{}'", s))
    }
}

/// The in-progress tag. `id` is empty until the user enters one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateTag {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    pub description: String,
}

impl CandidateTag {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && !self.tag_type.is_defined()
    }
}

/// Where an assigned tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Confirmed by the user during this session.
    Session,
    /// Supplied through the `assigned` attribute.
    Declared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedTag {
    pub id: TagId,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    pub origin: Origin,
}
