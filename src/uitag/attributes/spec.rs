//! Attribute keys and their registry.
//!
//! Six keys make up the whole external surface of a widget. Each key carries
//! a spec describing how its string value is shaped and which direction it
//! flows.

use std::fmt;

/// One of the observed attribute keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttrKey {
    Tags,
    Assigned,
    Id,
    Name,
    Type,
    Target,
}

impl AttrKey {
    pub const ALL: [AttrKey; 6] = [
        AttrKey::Tags,
        AttrKey::Assigned,
        AttrKey::Id,
        AttrKey::Name,
        AttrKey::Type,
        AttrKey::Target,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttrKey::Tags => "tags",
            AttrKey::Assigned => "assigned",
            AttrKey::Id => "id",
            AttrKey::Name => "name",
            AttrKey::Type => "type",
            AttrKey::Target => "target",
        }
    }

    /// Resolves a key from its bare name (`tags`) or prefixed name (`data-tags`).
    pub fn from_name(name: &str, prefix: &str) -> Option<AttrKey> {
        let bare = name.strip_prefix(prefix).unwrap_or(name);
        AttrKey::ALL.iter().copied().find(|k| k.as_str() == bare)
    }

    /// The externally visible attribute name.
    pub fn qualified(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.as_str())
    }

    pub fn spec(&self) -> &'static AttributeSpec {
        match self {
            AttrKey::Tags => &TAGS,
            AttrKey::Assigned => &ASSIGNED,
            AttrKey::Id => &ID,
            AttrKey::Name => &NAME,
            AttrKey::Type => &TYPE,
            AttrKey::Target => &TARGET,
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of an attribute's string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// JSON array of tag ids (e.g., `tags`, `assigned`)
    IdList,

    /// Plain string (e.g., `id`, `target`)
    Text,
}

#[derive(Debug, Clone)]
pub struct AttributeSpec {
    pub key: AttrKey,

    pub kind: AttributeKind,

    /// Whether the widget writes this attribute back after internal changes.
    pub outbound: bool,

    /// Whether this attribute mirrors a field of the candidate tag.
    ///
    /// Candidate attributes are removed, not blanked, when the field is cleared.
    pub candidate_field: bool,
}

impl AttributeSpec {
    const fn new(key: AttrKey, kind: AttributeKind) -> Self {
        Self {
            key,
            kind,
            outbound: false,
            candidate_field: false,
        }
    }

    const fn outbound(mut self) -> Self {
        self.outbound = true;
        self
    }

    const fn candidate_field(mut self) -> Self {
        self.candidate_field = true;
        self
    }
}

static TAGS: AttributeSpec = AttributeSpec::new(AttrKey::Tags, AttributeKind::IdList).outbound();
static ASSIGNED: AttributeSpec = AttributeSpec::new(AttrKey::Assigned, AttributeKind::IdList);
static ID: AttributeSpec = AttributeSpec::new(AttrKey::Id, AttributeKind::Text)
    .outbound()
    .candidate_field();
static NAME: AttributeSpec = AttributeSpec::new(AttrKey::Name, AttributeKind::Text)
    .outbound()
    .candidate_field();
static TYPE: AttributeSpec = AttributeSpec::new(AttrKey::Type, AttributeKind::Text)
    .outbound()
    .candidate_field();
static TARGET: AttributeSpec = AttributeSpec::new(AttrKey::Target, AttributeKind::Text);

/// The registry, in [`AttrKey::ALL`] order.
pub static ATTRIBUTES: [&AttributeSpec; 6] = [&TAGS, &ASSIGNED, &ID, &NAME, &TYPE, &TARGET];
