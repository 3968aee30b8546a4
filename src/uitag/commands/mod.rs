//! # Command Layer
//!
//! The state logic of a widget, free of any rendering or I/O.
//!
//! ## State
//!
//! [`WidgetState`] is the single authoritative state of one widget: the
//! [`ledger::Ledger`], the [`session::EditSession`] and the render target.
//! Attributes are only ever a serialization of it. The ledger never waits on
//! the renderer: declared tags that could not be drawn yet are kept in
//! `unrendered` until the target resolves.
//!
//! ## Structured Returns
//!
//! Operations return [`CmdResult`], not strings:
//! - `assigned`: tags that were assigned or updated
//! - `released`: ids moved back to the pool
//! - `writes`: outbound attribute writes the caller must mirror
//! - `messages`: leveled messages (info, success, warning)
//!
//! ## Modules
//!
//! - [`ledger`]: pool / assigned bookkeeping
//! - [`session`]: candidate tag and confirm gate
//! - [`assignment`]: assign, unassign, confirm and cancel against a renderer
//! - [`inbound`]: attribute value → state
//! - [`outbound`]: state → attribute writes, pool options, control state

use crate::attributes::AttrWrite;
use crate::model::{AssignedTag, CandidateTag, TagId};
use serde::Serialize;

pub mod assignment;
pub mod inbound;
pub mod ledger;
pub mod outbound;
pub mod session;

use ledger::Ledger;
use session::{EditSession, SessionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub ledger: Ledger,
    pub session: EditSession,
    pub target: Option<String>,
    /// Declared ids in the ledger but not yet drawn, in declaration order.
    pub unrendered: Vec<TagId>,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            tags: self.ledger.available().to_vec(),
            added: self.ledger.added().to_vec(),
            assigned: self.ledger.declared().to_vec(),
            view: self.ledger.assigned().to_vec(),
            target: self.target.clone(),
            tag: self.session.candidate().clone(),
            state: self.session.state(),
        }
    }
}

/// Serializable view of a widget, for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSnapshot {
    pub tags: Vec<TagId>,
    pub added: Vec<TagId>,
    pub assigned: Vec<TagId>,
    pub view: Vec<AssignedTag>,
    pub target: Option<String>,
    pub tag: CandidateTag,
    pub state: SessionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub assigned: Vec<AssignedTag>,
    pub released: Vec<TagId>,
    pub writes: Vec<AttrWrite>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_writes(&mut self, writes: impl IntoIterator<Item = AttrWrite>) {
        self.writes.extend(writes);
    }

    /// Folds another result into this one, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.assigned.extend(other.assigned);
        self.released.extend(other.released);
        self.writes.extend(other.writes);
        self.messages.extend(other.messages);
    }
}
