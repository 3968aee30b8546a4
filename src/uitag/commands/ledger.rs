//! Assignment ledger.
//!
//! Tracks which tags are available and which are assigned. Every move is a
//! paired removal and insertion: an id leaving the pool enters the assigned
//! view and vice versa, so no id is ever in both.
//!
//! The assigned view is split by [`Origin`]: `added` holds ids confirmed
//! during this session, `declared` holds ids supplied through the `assigned`
//! attribute.

use crate::error::{Result, TagError};
use crate::model::{compare_ids, AssignedTag, Origin, TagId, TagType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    available: Vec<TagId>,
    added: Vec<TagId>,
    declared: Vec<TagId>,
    view: Vec<AssignedTag>,
}

/// What an [`Ledger::assign`] call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOutcome {
    pub tag: AssignedTag,
    /// The id was removed from the available pool.
    pub pool_changed: bool,
    /// The id was already assigned; only its name and type changed.
    pub updated: bool,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> &[TagId] {
        &self.available
    }

    pub fn added(&self) -> &[TagId] {
        &self.added
    }

    pub fn declared(&self) -> &[TagId] {
        &self.declared
    }

    /// Every currently assigned tag, most recent first.
    pub fn assigned(&self) -> &[AssignedTag] {
        &self.view
    }

    pub fn is_available(&self, id: &TagId) -> bool {
        self.available.contains(id)
    }

    pub fn is_assigned(&self, id: &TagId) -> bool {
        self.find_assigned(id).is_some()
    }

    pub fn find_assigned(&self, id: &TagId) -> Option<&AssignedTag> {
        self.view.iter().find(|tag| &tag.id == id)
    }

    /// Replaces the pool wholesale.
    ///
    /// Rejected, with the pool untouched, if any incoming id is currently
    /// assigned.
    pub fn replace_pool(&mut self, ids: Vec<TagId>) -> Result<()> {
        if let Some(clash) = ids.iter().find(|id| self.is_assigned(id)) {
            return Err(TagError::AlreadyAssigned(clash.to_string()));
        }
        tracing::debug!(count = ids.len(), "replacing available pool");
        self.available = ids;
        Ok(())
    }

    /// Moves `id` into the assigned view.
    ///
    /// Reassigning an id that is already assigned updates its name and type in
    /// place and never duplicates it.
    pub fn assign(
        &mut self,
        id: TagId,
        name: String,
        tag_type: TagType,
        origin: Origin,
    ) -> AssignOutcome {
        let before = self.available.len();
        self.available.retain(|t| t != &id);
        let pool_changed = self.available.len() != before;

        if let Some(existing) = self.view.iter_mut().find(|t| t.id == id) {
            existing.name = name;
            existing.tag_type = tag_type;
            tracing::debug!(id = %id, tag_type = %tag_type, "updated assigned tag");
            return AssignOutcome {
                tag: existing.clone(),
                pool_changed,
                updated: true,
            };
        }

        match origin {
            Origin::Session => self.added.push(id.clone()),
            Origin::Declared => self.declared.push(id.clone()),
        }
        let tag = AssignedTag {
            id,
            name,
            tag_type,
            origin,
        };
        self.view.insert(0, tag.clone());
        tracing::debug!(id = %tag.id, tag_type = %tag_type, ?origin, "assigned tag");

        AssignOutcome {
            tag,
            pool_changed,
            updated: false,
        }
    }

    /// Moves an assigned id back into the pool and re-sorts it.
    pub fn unassign(&mut self, id: &TagId) -> Result<AssignedTag> {
        let position = self
            .view
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TagError::NotAssigned(id.to_string()))?;

        let tag = self.view.remove(position);
        self.added.retain(|t| t != id);
        self.declared.retain(|t| t != id);
        if !self.is_available(id) {
            self.available.push(id.clone());
        }
        self.sort_pool();
        tracing::debug!(id = %id, "unassigned tag");
        Ok(tag)
    }

    /// Sorts the pool by embedded number; see [`compare_ids`].
    pub fn sort_pool(&mut self) {
        self.available.sort_by(compare_ids);
    }

    /// True when no id is both available and assigned.
    pub fn is_partitioned(&self) -> bool {
        self.available.iter().all(|id| !self.is_assigned(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TagId {
        TagId::new(s).unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<TagId> {
        raw.iter().map(|s| id(s)).collect()
    }

    fn ledger_with(pool: &[&str]) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.replace_pool(ids(pool)).unwrap();
        ledger
    }

    #[test]
    fn assign_moves_id_out_of_pool() {
        let mut ledger = ledger_with(&["#3", "#10", "#2"]);
        let outcome = ledger.assign(id("#3"), "3".into(), TagType::Blocked, Origin::Session);

        assert!(outcome.pool_changed);
        assert!(!outcome.updated);
        assert_eq!(ledger.available(), ids(&["#10", "#2"]).as_slice());
        let tag = ledger.find_assigned(&id("#3")).unwrap();
        assert_eq!(tag.tag_type, TagType::Blocked);
        assert_eq!(ledger.added(), ids(&["#3"]).as_slice());
        assert!(ledger.is_partitioned());
    }

    #[test]
    fn assign_of_unknown_id_leaves_pool_alone() {
        let mut ledger = ledger_with(&["#1"]);
        let outcome = ledger.assign(id("#5"), "5".into(), TagType::Related, Origin::Session);
        assert!(!outcome.pool_changed);
        assert_eq!(ledger.available(), ids(&["#1"]).as_slice());
        assert!(ledger.is_assigned(&id("#5")));
    }

    #[test]
    fn reassign_updates_in_place_without_duplicating() {
        let mut ledger = ledger_with(&["#1"]);
        ledger.assign(id("#1"), "1".into(), TagType::Blocked, Origin::Session);
        let outcome = ledger.assign(id("#1"), "one".into(), TagType::Depends, Origin::Session);

        assert!(outcome.updated);
        assert_eq!(ledger.added(), ids(&["#1"]).as_slice());
        assert_eq!(ledger.assigned().len(), 1);
        assert_eq!(ledger.assigned()[0].tag_type, TagType::Depends);
        assert_eq!(ledger.assigned()[0].name, "one");
    }

    #[test]
    fn declared_tags_are_not_counted_as_added() {
        let mut ledger = ledger_with(&["#7", "#8"]);
        ledger.assign(id("#7"), "#7".into(), TagType::Unassigned, Origin::Declared);
        assert!(ledger.added().is_empty());
        assert_eq!(ledger.declared(), ids(&["#7"]).as_slice());
        assert_eq!(ledger.available(), ids(&["#8"]).as_slice());
    }

    #[test]
    fn newest_assignment_comes_first() {
        let mut ledger = Ledger::new();
        ledger.assign(id("#1"), "1".into(), TagType::Blocked, Origin::Session);
        ledger.assign(id("#2"), "2".into(), TagType::Blocked, Origin::Session);
        assert_eq!(ledger.assigned()[0].id, id("#2"));
    }

    #[test]
    fn unassign_returns_id_to_sorted_pool() {
        let mut ledger = ledger_with(&["#10", "#2"]);
        ledger.assign(id("#3"), "3".into(), TagType::Blocked, Origin::Session);
        let tag = ledger.unassign(&id("#3")).unwrap();

        assert_eq!(tag.id, id("#3"));
        assert_eq!(ledger.available(), ids(&["#2", "#3", "#10"]).as_slice());
        assert!(ledger.added().is_empty());
        assert!(!ledger.is_assigned(&id("#3")));
    }

    #[test]
    fn unassign_of_declared_tag_clears_declared() {
        let mut ledger = Ledger::new();
        ledger.assign(id("#4"), "#4".into(), TagType::Unassigned, Origin::Declared);
        ledger.unassign(&id("#4")).unwrap();
        assert!(ledger.declared().is_empty());
        assert_eq!(ledger.available(), ids(&["#4"]).as_slice());
    }

    #[test]
    fn unassign_of_unassigned_id_is_rejected() {
        let mut ledger = ledger_with(&["#1"]);
        let before = ledger.clone();
        let err = ledger.unassign(&id("#1")).unwrap_err();
        assert!(matches!(err, TagError::NotAssigned(_)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn replacing_pool_with_assigned_id_is_rejected() {
        let mut ledger = ledger_with(&["#1", "#2"]);
        ledger.assign(id("#1"), "1".into(), TagType::Blocked, Origin::Session);
        let err = ledger.replace_pool(ids(&["#1", "#9"])).unwrap_err();
        assert!(matches!(err, TagError::AlreadyAssigned(ref s) if s == "#1"));
        assert_eq!(ledger.available(), ids(&["#2"]).as_slice());
    }

    #[test]
    fn unnumbered_ids_sort_last() {
        let mut ledger = ledger_with(&["beta", "#5"]);
        ledger.assign(id("#1"), "1".into(), TagType::Blocked, Origin::Session);
        ledger.assign(id("alpha"), "alpha".into(), TagType::Blocked, Origin::Session);
        ledger.unassign(&id("alpha")).unwrap();
        ledger.unassign(&id("#1")).unwrap();
        assert_eq!(
            ledger.available(),
            ids(&["#1", "#5", "alpha", "beta"]).as_slice()
        );
    }
}
