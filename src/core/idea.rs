use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A sub-task of an idea with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A user-authored record capturing a concept, its rationale, resources,
/// and an action checklist.
///
/// Serialized field names are camelCase and priorities are lowercase so the
/// stored JSON matches the historical `future-ideas` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub resources: String,
    #[serde(default)]
    pub how_to_do: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    /// Construct a fresh idea from a draft, assigning id and timestamps.
    pub fn new(draft: IdeaDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            resources: draft.resources,
            how_to_do: draft.how_to_do,
            category: draft.category,
            priority: draft.priority,
            checklist: draft.checklist,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field from a draft, preserving id and
    /// `created_at` and refreshing `updated_at`.
    pub fn apply_draft(&mut self, draft: IdeaDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.resources = draft.resources;
        self.how_to_do = draft.how_to_do;
        self.category = draft.category;
        self.priority = draft.priority;
        self.checklist = draft.checklist;
        self.updated_at = Utc::now();
    }

    pub fn checklist_progress(&self) -> (usize, usize) {
        let total = self.checklist.len();
        let done = self.checklist.iter().filter(|item| item.completed).count();
        (done, total)
    }
}

/// Form data for creating or editing an idea: everything on [`Idea`] except
/// the id and the timestamps, which the collection owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub resources: String,
    pub how_to_do: String,
    pub category: String,
    pub priority: Priority,
    pub checklist: Vec<ChecklistItem>,
}

impl IdeaDraft {
    /// Append a checklist item. Input is trimmed; empty or whitespace-only
    /// text is discarded. Returns whether an item was added.
    pub fn add_checklist_item(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.checklist.push(ChecklistItem::new(text));
        true
    }

    pub fn remove_checklist_item(&mut self, item_id: Uuid) {
        self.checklist.retain(|item| item.id != item_id);
    }

    pub fn toggle_checklist_item(&mut self, item_id: Uuid) {
        if let Some(item) = self.checklist.iter_mut().find(|item| item.id == item_id) {
            item.completed = !item.completed;
        }
    }
}

impl From<&Idea> for IdeaDraft {
    /// Prefill a draft from an existing idea for editing.
    fn from(idea: &Idea) -> Self {
        Self {
            title: idea.title.clone(),
            description: idea.description.clone(),
            resources: idea.resources.clone(),
            how_to_do: idea.how_to_do.clone(),
            category: idea.category.clone(),
            priority: idea.priority,
            checklist: idea.checklist.clone(),
        }
    }
}
