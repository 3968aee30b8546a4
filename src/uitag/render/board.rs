use super::{ControlState, PoolOption, TagRenderer};
use crate::model::{AssignedTag, TagId, TagType};
use std::collections::BTreeMap;

/// In-memory renderer: named containers holding rendered tags.
///
/// Only containers registered up front resolve as targets, so an unknown
/// `target` exercises the missing-collaborator path.
#[derive(Debug, Clone, Default)]
pub struct Board {
    containers: BTreeMap<String, Vec<AssignedTag>>,
    pool: Vec<PoolOption>,
    types: Vec<TagType>,
    controls: ControlState,
    composer_open: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.add_target(name);
        self
    }

    pub fn add_target(&mut self, name: impl Into<String>) {
        self.containers.entry(name.into()).or_default();
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Tags rendered into `target`, newest first.
    pub fn tags_in(&self, target: &str) -> &[AssignedTag] {
        self.containers
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn pool(&self) -> &[PoolOption] {
        &self.pool
    }

    pub fn types(&self) -> &[TagType] {
        &self.types
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    pub fn is_composer_open(&self) -> bool {
        self.composer_open
    }
}

impl TagRenderer for Board {
    fn resolve_target(&self, target: &str) -> bool {
        self.containers.contains_key(target)
    }

    fn render_tag(&mut self, target: &str, tag: &AssignedTag) {
        let Some(container) = self.containers.get_mut(target) else {
            return;
        };
        match container.iter_mut().find(|t| t.id == tag.id) {
            Some(existing) => *existing = tag.clone(),
            None => container.insert(0, tag.clone()),
        }
    }

    fn remove_tag(&mut self, target: &str, id: &TagId) {
        if let Some(container) = self.containers.get_mut(target) {
            container.retain(|t| &t.id != id);
        }
    }

    fn update_pool(&mut self, options: &[PoolOption]) {
        self.pool = options.to_vec();
    }

    fn update_types(&mut self, types: &[TagType]) {
        self.types = types.to_vec();
    }

    fn update_controls(&mut self, controls: ControlState) {
        self.controls = controls;
    }

    fn close_composer(&mut self) {
        self.composer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Origin;

    fn tag(id: &str, tag_type: TagType) -> AssignedTag {
        AssignedTag {
            id: TagId::new(id).unwrap(),
            name: id.trim_start_matches('#').to_string(),
            tag_type,
            origin: Origin::Session,
        }
    }

    #[test]
    fn only_registered_targets_resolve() {
        let board = Board::new().with_target("tags");
        assert!(board.resolve_target("tags"));
        assert!(!board.resolve_target("#sidebar"));
    }

    #[test]
    fn render_prepends_and_replaces() {
        let mut board = Board::new().with_target("tags");
        board.render_tag("tags", &tag("#1", TagType::Blocked));
        board.render_tag("tags", &tag("#2", TagType::Related));
        board.render_tag("tags", &tag("#1", TagType::Depends));

        let rendered = board.tags_in("tags");
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].id.as_str(), "#2");
        assert_eq!(rendered[1].tag_type, TagType::Depends);
    }

    #[test]
    fn render_into_unknown_target_is_ignored() {
        let mut board = Board::new();
        board.render_tag("nowhere", &tag("#1", TagType::Blocked));
        assert!(board.tags_in("nowhere").is_empty());
    }

    #[test]
    fn remove_drops_tag() {
        let mut board = Board::new().with_target("tags");
        board.render_tag("tags", &tag("#1", TagType::Blocked));
        board.remove_tag("tags", &TagId::new("#1").unwrap());
        assert!(board.tags_in("tags").is_empty());
    }

    #[test]
    fn composer_closes() {
        let mut board = Board::new();
        board.open_composer();
        assert!(board.is_composer_open());
        board.close_composer();
        assert!(!board.is_composer_open());
    }
}
