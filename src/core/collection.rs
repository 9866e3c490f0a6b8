use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::idea::{Idea, IdeaDraft};

/// The ordered collection of ideas, most recently created first.
///
/// Every transformation borrows the current collection and returns a new one,
/// so each revision is an immutable snapshot: the derived views and the
/// persisted store never observe a half-applied mutation. Unknown ids are
/// silent no-ops throughout, matching the observed behavior of the board.
///
/// Serialization is transparent: the durable format is a bare JSON array of
/// ideas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaCollection(Vec<Idea>);

impl IdeaCollection {
    pub fn new(ideas: Vec<Idea>) -> Self {
        Self(ideas)
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Idea> {
        self.0.iter().find(|idea| idea.id == id)
    }

    /// 1-based position of an idea in the unfiltered collection, used as the
    /// badge number on cards.
    pub fn serial_number(&self, id: Uuid) -> Option<usize> {
        self.0.iter().position(|idea| idea.id == id).map(|i| i + 1)
    }

    /// New collection with a fresh idea prepended.
    pub fn create(&self, draft: IdeaDraft) -> Self {
        let mut ideas = Vec::with_capacity(self.0.len() + 1);
        ideas.push(Idea::new(draft));
        ideas.extend(self.0.iter().cloned());
        Self(ideas)
    }

    /// New collection with the matching idea's fields replaced from the
    /// draft. Id and `created_at` are preserved, `updated_at` is refreshed.
    pub fn update(&self, id: Uuid, draft: IdeaDraft) -> Self {
        Self(
            self.0
                .iter()
                .map(|idea| {
                    if idea.id == id {
                        let mut updated = idea.clone();
                        updated.apply_draft(draft.clone());
                        updated
                    } else {
                        idea.clone()
                    }
                })
                .collect(),
        )
    }

    /// New collection without the matching idea.
    pub fn delete(&self, id: Uuid) -> Self {
        Self(self.0.iter().filter(|idea| idea.id != id).cloned().collect())
    }

    /// New collection with one checklist item's `completed` flag flipped and
    /// the owning idea's `updated_at` refreshed. Nothing else changes.
    pub fn toggle_checklist_item(&self, idea_id: Uuid, item_id: Uuid) -> Self {
        Self(
            self.0
                .iter()
                .map(|idea| {
                    if idea.id != idea_id {
                        return idea.clone();
                    }
                    let mut updated = idea.clone();
                    let mut flipped = false;
                    for item in &mut updated.checklist {
                        if item.id == item_id {
                            item.completed = !item.completed;
                            flipped = true;
                        }
                    }
                    if flipped {
                        updated.updated_at = chrono::Utc::now();
                    }
                    updated
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draft(title: &str, category: &str) -> IdeaDraft {
        IdeaDraft {
            title: title.into(),
            description: format!("about {title}"),
            category: category.into(),
            ..IdeaDraft::default()
        }
    }

    fn seeded() -> IdeaCollection {
        let mut d = draft("Build a treehouse", "DIY");
        d.add_checklist_item("buy wood");
        d.add_checklist_item("find a tree");
        IdeaCollection::default()
            .create(d)
            .create(draft("Learn Rust", "Tech"))
    }

    #[test]
    fn create_prepends() {
        let ideas = seeded();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas.ideas()[0].title, "Learn Rust");
        assert_eq!(ideas.ideas()[1].title, "Build a treehouse");
    }

    #[test]
    fn created_ids_are_distinct() {
        let mut ideas = IdeaCollection::default();
        for i in 0..20 {
            ideas = ideas.create(draft(&format!("idea {i}"), ""));
        }
        let ids: HashSet<_> = ideas.ideas().iter().map(|idea| idea.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let ideas = seeded();
        let target = ideas.ideas()[1].clone();

        let mut d = IdeaDraft::from(&target);
        d.title = "Build a bigger treehouse".into();
        let updated = ideas.update(target.id, d);

        let after = updated.get(target.id).unwrap();
        assert_eq!(after.title, "Build a bigger treehouse");
        assert_eq!(after.id, target.id);
        assert_eq!(after.created_at, target.created_at);
        assert!(after.updated_at >= target.updated_at);
        // Order and the other record are untouched
        assert_eq!(updated.ideas()[0], ideas.ideas()[0]);
        assert_eq!(updated.ideas()[1].id, target.id);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let ideas = seeded();
        let updated = ideas.update(Uuid::new_v4(), draft("ghost", ""));
        assert_eq!(updated, ideas);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let ideas = seeded();
        let victim = ideas.ideas()[0].id;

        let remaining = ideas.delete(victim);
        assert_eq!(remaining.len(), 1);
        assert!(remaining.get(victim).is_none());

        // Re-deleting the same id is a no-op
        let again = remaining.delete(victim);
        assert_eq!(again, remaining);
    }

    #[test]
    fn toggle_flips_exactly_one_bit() {
        let ideas = seeded();
        let owner = ideas.ideas()[1].clone();
        let item = owner.checklist[0].id;

        let toggled = ideas.toggle_checklist_item(owner.id, item);
        let after = toggled.get(owner.id).unwrap();

        assert!(after.checklist[0].completed);
        assert_eq!(after.checklist[1], owner.checklist[1]);
        assert!(after.updated_at >= owner.updated_at);

        // Everything else on the owner is unchanged
        assert_eq!(after.title, owner.title);
        assert_eq!(after.created_at, owner.created_at);
        // The other record is untouched entirely
        assert_eq!(toggled.ideas()[0], ideas.ideas()[0]);

        // Toggling again flips it back
        let back = toggled.toggle_checklist_item(owner.id, item);
        assert!(!back.get(owner.id).unwrap().checklist[0].completed);
    }

    #[test]
    fn toggle_unknown_ids_are_noop() {
        let ideas = seeded();
        let owner = ideas.ideas()[1].clone();

        assert_eq!(
            ideas.toggle_checklist_item(Uuid::new_v4(), owner.checklist[0].id),
            ideas
        );
        assert_eq!(ideas.toggle_checklist_item(owner.id, Uuid::new_v4()), ideas);
    }

    #[test]
    fn serial_numbers_follow_collection_order() {
        let ideas = seeded();
        assert_eq!(ideas.serial_number(ideas.ideas()[0].id), Some(1));
        assert_eq!(ideas.serial_number(ideas.ideas()[1].id), Some(2));
        assert_eq!(ideas.serial_number(Uuid::new_v4()), None);
    }
}
