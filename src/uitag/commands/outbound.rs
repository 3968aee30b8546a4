//! Outbound sync: state → attribute writes.
//!
//! Runs after every internal mutation. The pool is written back as `tags`;
//! candidate fields are written as `id`, `name` and `type`, and a cleared field
//! removes its attribute instead of writing an empty string.

use super::ledger::Ledger;
use super::session::EditSession;
use super::CmdResult;
use crate::attributes::{serialize_id_list, AttrKey, AttrWrite};
use crate::error::Result;
use crate::model::CandidateTag;
use crate::render::{ControlState, PoolOption, TagRenderer};

pub fn pool_write(ledger: &Ledger) -> Result<AttrWrite> {
    Ok(AttrWrite::Set(
        AttrKey::Tags,
        serialize_id_list(ledger.available())?,
    ))
}

pub fn candidate_writes(candidate: &CandidateTag) -> Vec<AttrWrite> {
    let text = |key: AttrKey, value: &str| {
        if value.is_empty() && key.spec().candidate_field {
            AttrWrite::Remove(key)
        } else {
            AttrWrite::Set(key, value.to_string())
        }
    };
    let type_write = if candidate.tag_type.is_defined() {
        AttrWrite::Set(AttrKey::Type, candidate.tag_type.to_string())
    } else {
        AttrWrite::Remove(AttrKey::Type)
    };
    vec![
        text(AttrKey::Id, &candidate.id),
        text(AttrKey::Name, &candidate.name),
        type_write,
    ]
}

pub fn pool_options(ledger: &Ledger) -> Vec<PoolOption> {
    ledger
        .available()
        .iter()
        .map(|id| PoolOption {
            id: id.clone(),
            label: id.display_name(),
        })
        .collect()
}

pub fn control_state(session: &EditSession) -> ControlState {
    ControlState::for_ready(session.can_confirm())
}

/// Serializes the pool into `result` and republishes it to the renderer.
pub fn sync_pool<R: TagRenderer>(
    ledger: &Ledger,
    renderer: &mut R,
    result: &mut CmdResult,
) -> Result<()> {
    let write = pool_write(ledger)?;
    tracing::debug!(?write, "syncing pool attribute");
    result.writes.push(write);
    renderer.update_pool(&pool_options(ledger));
    Ok(())
}

/// Writes the candidate fields into `result`.
pub fn sync_candidate(session: &EditSession, result: &mut CmdResult) {
    let writes = candidate_writes(session.candidate());
    tracing::debug!(?writes, "syncing candidate attributes");
    result.add_writes(writes);
}
