//! # API Facade
//!
//! [`TagWidget`] is the single entry point for a widget instance, whatever UI
//! hosts it. It owns the [`WidgetState`], the mirrored [`Attributes`] and the
//! renderer.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Resolves** external attribute names to [`AttrKey`]s
//! - **Dispatches** to the command layer (`commands/*.rs`)
//! - **Mirrors** outbound writes into the attribute map and republishes the
//!   control state after every step
//!
//! It holds no tag logic of its own.
//!
//! ## Generic Over TagRenderer
//!
//! `TagWidget<R: TagRenderer>` works with any rendering collaborator:
//! - CLI: `TagWidget<Board>`, printed after each step
//! - Tests: `TagWidget<Board>` inspected directly
//!
//! ## Event Order
//!
//! Every call runs to completion before the next. Several attributes set
//! together are applied as separate, ordered calls.

use crate::attributes::{AttrKey, Attributes};
use crate::commands::outbound::{control_state, sync_candidate};
use crate::commands::session::{InputHints, SessionState};
use crate::commands::{assignment, inbound, CmdResult, WidgetSnapshot, WidgetState};
use crate::config::WidgetConfig;
use crate::error::{Result, TagError};
use crate::model::{AssignedTag, CandidateTag, TagId, TagType};
use crate::render::{ControlState, TagRenderer};

pub struct TagWidget<R: TagRenderer> {
    state: WidgetState,
    attributes: Attributes,
    renderer: R,
    config: WidgetConfig,
}

impl<R: TagRenderer> TagWidget<R> {
    /// Attaches a widget to `renderer`, publishing the type choices and the
    /// initial (disabled) controls.
    pub fn new(mut renderer: R, config: WidgetConfig) -> Self {
        renderer.update_types(&TagType::SELECTABLE);
        renderer.update_controls(ControlState::default());
        Self {
            state: WidgetState::new(),
            attributes: Attributes::new(),
            renderer,
            config,
        }
    }

    /// Sets an attribute by external name (`data-tags` or `tags`).
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<CmdResult> {
        let key = self.resolve_key(name)?;
        self.apply_attribute(key, Some(value))
    }

    /// Removes an attribute by external name.
    pub fn remove_attribute(&mut self, name: &str) -> Result<CmdResult> {
        let key = self.resolve_key(name)?;
        self.apply_attribute(key, None)
    }

    /// Applies an inbound change of `key`; `None` means removal.
    ///
    /// A rejected change leaves both state and attributes as they were.
    pub fn apply_attribute(&mut self, key: AttrKey, value: Option<&str>) -> Result<CmdResult> {
        tracing::debug!(%key, kind = ?key.spec().kind, ?value, "attribute changed");
        let update = inbound::parse_update(key, value)?;
        let result = inbound::apply(&mut self.state, &mut self.renderer, &self.config, update)?;

        match value {
            Some(value) => self.attributes.set(key, value),
            None => {
                self.attributes.remove(key);
            }
        }
        Ok(self.finish(result))
    }

    /// Id input changed.
    pub fn input_id(&mut self, text: &str) -> CmdResult {
        self.state.session.input_id(text);
        self.candidate_changed()
    }

    /// Type input changed. Unknown text leaves the type undefined.
    pub fn input_type(&mut self, text: &str) -> CmdResult {
        self.state.session.input_type(text);
        self.candidate_changed()
    }

    pub fn describe(&mut self, description: &str) {
        self.state.session.set_description(description);
    }

    pub fn confirm(&mut self) -> Result<CmdResult> {
        let result = assignment::confirm(&mut self.state, &mut self.renderer)?;
        Ok(self.finish(result))
    }

    pub fn cancel(&mut self) -> CmdResult {
        let result = assignment::cancel(&mut self.state, &mut self.renderer);
        self.finish(result)
    }

    /// The "remove" affordance of a rendered tag.
    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        let id = TagId::new(id)?;
        let result = assignment::unassign(&mut self.state, &mut self.renderer, &id)?;
        Ok(self.finish(result))
    }

    /// Drops all state and attributes, as when the widget is detached, and
    /// clears everything it drew.
    pub fn detach(&mut self) {
        tracing::debug!("widget detached");
        if let Some(target) = self
            .state
            .target
            .as_deref()
            .filter(|target| self.renderer.resolve_target(target))
        {
            for tag in self.state.ledger.assigned() {
                self.renderer.remove_tag(target, &tag.id);
            }
        }
        self.renderer.update_pool(&[]);
        self.renderer.update_controls(ControlState::default());
        self.renderer.close_composer();
        self.state = WidgetState::new();
        self.attributes.clear();
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        let key = AttrKey::from_name(name, &self.config.attribute_prefix)?;
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn available(&self) -> &[TagId] {
        self.state.ledger.available()
    }

    pub fn added(&self) -> &[TagId] {
        self.state.ledger.added()
    }

    pub fn declared(&self) -> &[TagId] {
        self.state.ledger.declared()
    }

    pub fn assigned(&self) -> &[AssignedTag] {
        self.state.ledger.assigned()
    }

    pub fn candidate(&self) -> &CandidateTag {
        self.state.session.candidate()
    }

    pub fn session_state(&self) -> SessionState {
        self.state.session.state()
    }

    pub fn target(&self) -> Option<&str> {
        self.state.target.as_deref()
    }

    pub fn controls(&self) -> ControlState {
        control_state(&self.state.session)
    }

    pub fn hints(&self) -> InputHints {
        self.state.session.hints(&self.config)
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn resolve_key(&self, name: &str) -> Result<AttrKey> {
        AttrKey::from_name(name, &self.config.attribute_prefix)
            .ok_or_else(|| TagError::invalid_attribute(name, "not an observed attribute"))
    }

    fn candidate_changed(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        sync_candidate(&self.state.session, &mut result);
        self.finish(result)
    }

    /// Mirrors outbound writes and republishes the controls.
    fn finish(&mut self, result: CmdResult) -> CmdResult {
        for write in &result.writes {
            debug_assert!(write.key().spec().outbound, "{} is caller-only", write.key());
            self.attributes.apply(write);
        }
        debug_assert!(self.state.ledger.is_partitioned());
        let controls = self.controls();
        self.renderer.update_controls(controls);
        result
    }
}
