//! The board facade: the single stateful owner of the idea collection,
//! filter state, and store write-back.
//!
//! Mutations run on discrete user events, one at a time; each applies a pure
//! collection transformation and then synchronously writes the new snapshot
//! back to the store before returning. The derived views (`categories`,
//! `filtered_ideas`) are recomputed on demand from current state and hold no
//! state of their own.

use uuid::Uuid;

use crate::config::BoardConfig;
use crate::core::collection::IdeaCollection;
use crate::core::idea::{Idea, IdeaDraft};
use crate::core::view;
use crate::store::{FileBackend, Store};

/// The storage slot holding the serialized collection. Kept as `future-ideas`
/// for compatibility with existing data blobs.
pub const IDEAS_KEY: &str = "future-ideas";

pub struct IdeaBoard {
    store: Store,
    ideas: IdeaCollection,
    search_term: String,
    selected_category: String,
}

impl IdeaBoard {
    /// Load the board from an injected store. A missing or unreadable slot
    /// starts the board empty.
    pub fn new(store: Store) -> Self {
        let ideas = store.load(IDEAS_KEY, IdeaCollection::default());
        Self {
            store,
            ideas,
            search_term: String::new(),
            selected_category: String::new(),
        }
    }

    /// Open the board against the filesystem store described by `config`,
    /// creating the data directory if needed.
    pub fn open(config: &BoardConfig) -> std::io::Result<Self> {
        config.ensure_dirs()?;
        let store = Store::new(FileBackend::new(&config.data_dir));
        Ok(Self::new(store))
    }

    pub fn ideas(&self) -> &[Idea] {
        self.ideas.ideas()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Idea> {
        self.ideas.get(id)
    }

    pub fn serial_number(&self, id: Uuid) -> Option<usize> {
        self.ideas.serial_number(id)
    }

    /// Distinct non-empty categories across the whole collection, sorted.
    pub fn categories(&self) -> Vec<String> {
        view::categories(self.ideas.ideas())
    }

    /// The ideas matching the current search term and selected category.
    pub fn filtered_ideas(&self) -> Vec<&Idea> {
        view::filter(self.ideas.ideas(), &self.search_term, &self.selected_category)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn create(&mut self, draft: IdeaDraft) {
        self.ideas = self.ideas.create(draft);
        self.persist();
    }

    pub fn update(&mut self, id: Uuid, draft: IdeaDraft) {
        self.ideas = self.ideas.update(id, draft);
        self.persist();
    }

    pub fn delete(&mut self, id: Uuid) {
        self.ideas = self.ideas.delete(id);
        self.persist();
    }

    pub fn toggle_checklist_item(&mut self, idea_id: Uuid, item_id: Uuid) {
        self.ideas = self.ideas.toggle_checklist_item(idea_id, item_id);
        self.persist();
    }

    fn persist(&mut self) {
        self.store.save(IDEAS_KEY, &self.ideas);
    }
}
