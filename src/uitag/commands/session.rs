//! Edit session: the candidate tag and its confirm gate.
//!
//! ```text
//!   Empty ──id──▶ IdEntered ──type──▶ Ready
//!     ▲                                 │
//!     └────────── confirm / cancel ─────┘
//! ```
//!
//! The state is derived from the candidate fields, never stored. Only `Ready`
//! may be confirmed; cancel is always allowed.

use crate::config::WidgetConfig;
use crate::model::{derive_name, CandidateTag, TagId, TagType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No id entered. A type may already be chosen.
    Empty,
    IdEntered,
    Ready,
}

/// Placeholders the two inputs show when focused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputHints {
    pub id_placeholder: String,
    pub type_placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    candidate: CandidateTag,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> &CandidateTag {
        &self.candidate
    }

    pub fn state(&self) -> SessionState {
        match (self.candidate.id.is_empty(), self.candidate.tag_type.is_defined()) {
            (true, _) => SessionState::Empty,
            (false, false) => SessionState::IdEntered,
            (false, true) => SessionState::Ready,
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.state() == SessionState::Ready
    }

    /// Sets the id and re-derives the name from it.
    pub fn input_id(&mut self, text: &str) {
        self.candidate.id = text.to_string();
        self.candidate.name = derive_name(text);
        tracing::debug!(id = text, state = ?self.state(), "candidate id changed");
    }

    /// Sets the type from free text.
    ///
    /// Text that is not a type name (partial input, the sentinel) leaves the
    /// type undefined, which keeps the session out of `Ready`.
    pub fn input_type(&mut self, text: &str) {
        let tag_type = text.trim().parse().unwrap_or(TagType::Undefined);
        self.select_type(tag_type);
    }

    pub fn select_type(&mut self, tag_type: TagType) {
        self.candidate.tag_type = tag_type;
        tracing::debug!(%tag_type, state = ?self.state(), "candidate type changed");
    }

    /// Overrides the derived name until the id next changes.
    pub fn set_name(&mut self, name: &str) {
        self.candidate.name = name.to_string();
    }

    /// Drops a name override, falling back to the name derived from the id.
    pub fn clear_name(&mut self) {
        self.candidate.name = derive_name(&self.candidate.id);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.candidate.description = description.into();
    }

    /// The candidate as an assignable tag, only when `Ready`.
    pub fn confirmable(&self) -> Option<(TagId, String, TagType)> {
        if !self.can_confirm() {
            return None;
        }
        let id = TagId::new(self.candidate.id.clone()).ok()?;
        Some((id, self.candidate.name.clone(), self.candidate.tag_type))
    }

    pub fn reset(&mut self) {
        self.candidate = CandidateTag::default();
        tracing::debug!("edit session reset");
    }

    pub fn hints(&self, config: &WidgetConfig) -> InputHints {
        let id_placeholder = if self.candidate.id.is_empty() {
            config.id_placeholder.clone()
        } else {
            self.candidate.id.clone()
        };
        let type_placeholder = if self.candidate.tag_type.is_defined() {
            self.candidate.tag_type.to_string()
        } else {
            config.type_placeholder.clone()
        };
        InputHints {
            id_placeholder,
            type_placeholder,
        }
    }
}
