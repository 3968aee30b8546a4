//! Assignment moves against a renderer.
//!
//! These wrap the [`Ledger`](super::ledger::Ledger) moves with the render
//! target: a user's assign or release only happens when the `target` locator
//! resolves. When it does not, the move is skipped with a warning and the
//! state stays as it was, so the edit session can still be reset.
//!
//! Caller declarations ([`declare`]) are the exception. The ledger move always
//! happens; only the drawing waits for the target, see [`render_pending`].
//!
//! Confirm is two explicit steps: [`perform_assign_if_ready`] followed
//! unconditionally by [`reset_session`].

use super::outbound::{sync_candidate, sync_pool};
use super::{CmdMessage, CmdResult, WidgetState};
use crate::error::{Result, TagError};
use crate::model::{Origin, TagId, TagType};
use crate::render::TagRenderer;

fn resolved_target<R: TagRenderer>(state: &WidgetState, renderer: &R) -> Option<String> {
    state
        .target
        .as_deref()
        .filter(|target| renderer.resolve_target(target))
        .map(str::to_string)
}

fn missing_target(state: &WidgetState, id: &TagId, action: &str) -> CmdMessage {
    let target = state.target.as_deref().unwrap_or("<unset>");
    tracing::warn!(%id, locator = target, action, "render target not found, skipping");
    CmdMessage::warning(format!(
        "Target '{}' not found; {} of {} skipped",
        target, action, id
    ))
}

pub fn assign<R: TagRenderer>(
    state: &mut WidgetState,
    renderer: &mut R,
    id: TagId,
    name: String,
    tag_type: TagType,
    origin: Origin,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(target) = resolved_target(state, renderer) else {
        result.add_message(missing_target(state, &id, "assignment"));
        return Ok(result);
    };

    let outcome = state.ledger.assign(id, name, tag_type, origin);
    renderer.render_tag(&target, &outcome.tag);
    if outcome.pool_changed {
        sync_pool(&state.ledger, renderer, &mut result)?;
    }
    renderer.close_composer();

    let verb = if outcome.updated { "Updated" } else { "Assigned" };
    result.add_message(CmdMessage::success(format!(
        "{} {} as {}",
        verb, outcome.tag.id, outcome.tag.tag_type
    )));
    result.assigned.push(outcome.tag);
    Ok(result)
}

/// Records an id the caller declared as already assigned.
pub fn declare<R: TagRenderer>(
    state: &mut WidgetState,
    renderer: &mut R,
    id: TagId,
    tag_type: TagType,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let name = id.as_str().to_string();
    let outcome = state.ledger.assign(id, name, tag_type, Origin::Declared);

    match resolved_target(state, renderer) {
        Some(target) => {
            renderer.render_tag(&target, &outcome.tag);
            renderer.close_composer();
        }
        None => {
            tracing::debug!(id = %outcome.tag.id, "render target not resolved, drawing deferred");
            state.unrendered.push(outcome.tag.id.clone());
        }
    }
    if outcome.pool_changed {
        sync_pool(&state.ledger, renderer, &mut result)?;
    }

    result.add_message(CmdMessage::success(format!(
        "Declared {} as {}",
        outcome.tag.id, outcome.tag.tag_type
    )));
    result.assigned.push(outcome.tag);
    Ok(result)
}

/// Draws declared tags recorded while the target did not resolve.
pub fn render_pending<R: TagRenderer>(state: &mut WidgetState, renderer: &mut R) -> CmdResult {
    let mut result = CmdResult::default();
    if state.unrendered.is_empty() {
        return result;
    }
    let Some(target) = resolved_target(state, renderer) else {
        return result;
    };

    let mut drawn = 0;
    for id in std::mem::take(&mut state.unrendered) {
        if let Some(tag) = state.ledger.find_assigned(&id) {
            renderer.render_tag(&target, tag);
            drawn += 1;
        }
    }
    tracing::debug!(drawn, target = target.as_str(), "drew deferred tags");
    result.add_message(CmdMessage::info(format!(
        "Rendered {} declared tags into '{}'",
        drawn, target
    )));
    result
}

pub fn unassign<R: TagRenderer>(
    state: &mut WidgetState,
    renderer: &mut R,
    id: &TagId,
) -> Result<CmdResult> {
    if !state.ledger.is_assigned(id) {
        return Err(TagError::NotAssigned(id.to_string()));
    }

    let mut result = CmdResult::default();
    let Some(target) = resolved_target(state, renderer) else {
        result.add_message(missing_target(state, id, "removal"));
        return Ok(result);
    };

    let tag = state.ledger.unassign(id)?;
    state.unrendered.retain(|pending| pending != id);
    renderer.remove_tag(&target, &tag.id);
    sync_pool(&state.ledger, renderer, &mut result)?;

    result.add_message(CmdMessage::success(format!("Removed {}", tag.id)));
    result.released.push(tag.id);
    Ok(result)
}

/// Assigns the candidate when the session is `Ready`; otherwise only warns.
pub fn perform_assign_if_ready<R: TagRenderer>(
    state: &mut WidgetState,
    renderer: &mut R,
) -> Result<CmdResult> {
    match state.session.confirmable() {
        Some((id, name, tag_type)) => {
            assign(state, renderer, id, name, tag_type, Origin::Session)
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(
                "Nothing to confirm: choose a tag and a type first",
            ));
            Ok(result)
        }
    }
}

/// Clears the candidate and its attributes and closes the composer.
pub fn reset_session<R: TagRenderer>(state: &mut WidgetState, renderer: &mut R) -> CmdResult {
    let mut result = CmdResult::default();
    state.session.reset();
    sync_candidate(&state.session, &mut result);
    renderer.close_composer();
    result
}

pub fn confirm<R: TagRenderer>(state: &mut WidgetState, renderer: &mut R) -> Result<CmdResult> {
    let mut result = perform_assign_if_ready(state, renderer)?;
    result.merge(reset_session(state, renderer));
    Ok(result)
}

pub fn cancel<R: TagRenderer>(state: &mut WidgetState, renderer: &mut R) -> CmdResult {
    let mut result = reset_session(state, renderer);
    result.add_message(CmdMessage::info("Cancelled"));
    result
}
