//! Attribute values: list codec, the mirrored attribute map, and writes.

use super::spec::AttrKey;
use crate::error::{Result, TagError};
use crate::model::TagId;
use std::collections::{BTreeMap, HashSet};

/// Parses an id-list attribute (`tags`, `assigned`).
///
/// The value must be a JSON array of non-empty, distinct strings. Nothing is
/// returned on failure, so a bad update is never partially applied.
pub fn parse_id_list(key: AttrKey, raw: &str) -> Result<Vec<TagId>> {
    let items: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| TagError::invalid_attribute(key.as_str(), e.to_string()))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut ids = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        if item.is_empty() {
            return Err(TagError::invalid_attribute(
                key.as_str(),
                format!("empty tag id at position {}", position),
            ));
        }
        if !seen.insert(item.clone()) {
            return Err(TagError::invalid_attribute(
                key.as_str(),
                format!("duplicate tag id '{}'", item),
            ));
        }
        ids.push(TagId::new(item)?);
    }
    Ok(ids)
}

/// Serializes ids as a compact JSON array, preserving order.
pub fn serialize_id_list(ids: &[TagId]) -> Result<String> {
    Ok(serde_json::to_string(ids)?)
}

/// A single change to the mirrored attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrWrite {
    Set(AttrKey, String),
    Remove(AttrKey),
}

impl AttrWrite {
    pub fn key(&self) -> AttrKey {
        match self {
            AttrWrite::Set(key, _) | AttrWrite::Remove(key) => *key,
        }
    }
}

/// The string attributes as an outside observer sees them.
///
/// This is a serialization boundary only; widget state never reads back from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<AttrKey, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AttrKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: AttrKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn set(&mut self, key: AttrKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn remove(&mut self, key: AttrKey) -> Option<String> {
        self.values.remove(&key)
    }

    pub fn apply(&mut self, write: &AttrWrite) {
        match write {
            AttrWrite::Set(key, value) => self.set(*key, value.clone()),
            AttrWrite::Remove(key) => {
                self.remove(*key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Attribute map keyed by externally visible names.
    pub fn qualified(&self, prefix: &str) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.qualified(prefix), v.clone()))
            .collect()
    }
}
