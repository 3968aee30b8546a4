//! # Rendering Collaborator
//!
//! The widget core never draws anything. Everything visible goes through the
//! [`TagRenderer`] trait, which lets the same core drive a DOM, a terminal,
//! or a test double.
//!
//! ## Contract
//!
//! - [`TagRenderer::resolve_target`] reports whether a locator (the `target`
//!   attribute) names an existing container. When it does not, assignment
//!   and removal become no-ops: the widget warns and leaves its state alone.
//! - Assigned tags are rendered into that container and removed from it on
//!   unassign. A rendered tag offers a "remove" affordance that calls back
//!   into [`crate::api::TagWidget::remove`].
//! - The pool options and control state are republished after every change.
//!
//! ## Implementations
//!
//! - [`board::Board`]: in-memory containers, used by the CLI and tests.

use crate::model::{AssignedTag, TagId, TagType};
use serde::Serialize;

pub mod board;

/// One selectable entry of the available pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolOption {
    pub id: TagId,
    pub label: String,
}

/// Enabled state of the confirm and cancel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub confirm_enabled: bool,
    pub cancel_enabled: bool,
}

impl ControlState {
    pub fn for_ready(ready: bool) -> Self {
        Self {
            confirm_enabled: ready,
            cancel_enabled: true,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::for_ready(false)
    }
}

pub trait TagRenderer {
    /// Whether `target` names a container tags can be rendered into.
    fn resolve_target(&self, target: &str) -> bool;

    /// Shows an assigned tag in the target container. Called again with the
    /// same id when its name or type changes.
    fn render_tag(&mut self, target: &str, tag: &AssignedTag);

    /// Removes a tag from the target container.
    fn remove_tag(&mut self, target: &str, id: &TagId);

    /// Republishes the selectable pool.
    fn update_pool(&mut self, options: &[PoolOption]);

    /// The type choices offered next to the pool. Never includes the sentinel.
    fn update_types(&mut self, _types: &[TagType]) {}

    fn update_controls(&mut self, controls: ControlState);

    /// Closes the tag composer after a confirm, cancel or assignment.
    fn close_composer(&mut self) {}
}
