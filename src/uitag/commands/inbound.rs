//! Inbound sync: attribute value → state.
//!
//! Handling is split in two so bad input never half-applies:
//! [`parse_update`] turns a raw attribute change into a typed
//! [`InboundUpdate`] (and is where malformed input is rejected), then
//! [`apply`] performs it.

use super::assignment;
use super::outbound::{pool_options, sync_candidate, sync_pool};
use super::{CmdMessage, CmdResult, WidgetState};
use crate::attributes::{parse_id_list, AttrKey};
use crate::config::WidgetConfig;
use crate::error::{Result, TagError};
use crate::model::{TagId, TagType};
use crate::render::TagRenderer;

/// A validated attribute change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundUpdate {
    /// Replace the available pool.
    Pool(Vec<TagId>),
    /// The caller removed `tags`: empty the pool without writing it back.
    ClearPool,
    /// Show these ids as already assigned.
    Declared(Vec<TagId>),
    CandidateId(String),
    /// `None` drops a name override.
    CandidateName(Option<String>),
    CandidateType(TagType),
    Target(Option<String>),
    /// The change has no effect on state.
    Ignored,
}

/// Parses a change of `key`. `None` means the attribute was removed.
pub fn parse_update(key: AttrKey, value: Option<&str>) -> Result<InboundUpdate> {
    let update = match (key, value) {
        (AttrKey::Tags, Some(raw)) => InboundUpdate::Pool(parse_id_list(key, raw)?),
        (AttrKey::Tags, None) => InboundUpdate::ClearPool,
        (AttrKey::Assigned, Some(raw)) => InboundUpdate::Declared(parse_id_list(key, raw)?),
        (AttrKey::Assigned, None) => InboundUpdate::Ignored,
        (AttrKey::Id, value) => InboundUpdate::CandidateId(value.unwrap_or_default().to_string()),
        (AttrKey::Name, value) => InboundUpdate::CandidateName(value.map(str::to_string)),
        (AttrKey::Type, Some(raw)) => InboundUpdate::CandidateType(
            raw.parse()
                .map_err(|reason: String| TagError::invalid_attribute(key.as_str(), reason))?,
        ),
        (AttrKey::Type, None) => InboundUpdate::CandidateType(TagType::Undefined),
        (AttrKey::Target, value) => InboundUpdate::Target(value.map(str::to_string)),
    };
    Ok(update)
}

pub fn apply<R: TagRenderer>(
    state: &mut WidgetState,
    renderer: &mut R,
    config: &WidgetConfig,
    update: InboundUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match update {
        InboundUpdate::Pool(ids) => {
            let count = ids.len();
            state.ledger.replace_pool(ids)?;
            sync_pool(&state.ledger, renderer, &mut result)?;
            result.add_message(CmdMessage::info(format!("{} tags available", count)));
        }
        InboundUpdate::ClearPool => {
            state.ledger.replace_pool(Vec::new())?;
            renderer.update_pool(&pool_options(&state.ledger));
            result.add_message(CmdMessage::info("0 tags available"));
        }
        InboundUpdate::Declared(ids) => {
            for id in ids {
                if state.ledger.is_assigned(&id) {
                    continue;
                }
                result.merge(assignment::declare(
                    state,
                    renderer,
                    id,
                    config.preassigned_type,
                )?);
            }
        }
        InboundUpdate::CandidateId(id) => {
            state.session.input_id(&id);
            sync_candidate(&state.session, &mut result);
        }
        InboundUpdate::CandidateName(Some(name)) => {
            state.session.set_name(&name);
            sync_candidate(&state.session, &mut result);
        }
        InboundUpdate::CandidateName(None) => {
            state.session.clear_name();
            sync_candidate(&state.session, &mut result);
        }
        InboundUpdate::CandidateType(tag_type) => {
            state.session.select_type(tag_type);
            sync_candidate(&state.session, &mut result);
        }
        InboundUpdate::Target(target) => {
            tracing::debug!(?target, "target changed");
            state.target = target;
            result.merge(assignment::render_pending(state, renderer));
        }
        InboundUpdate::Ignored => {}
    }

    Ok(result)
}
