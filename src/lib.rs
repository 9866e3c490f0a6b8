//! glint — a local-first idea board.
//!
//! The crate is the "core" behind an idea-tracking UI: a persisted collection
//! of ideas ([`IdeaCollection`]), pure derived views over it
//! ([`crate::core::view`]), and a fail-soft JSON key-value store
//! ([`crate::store`]). [`IdeaBoard`] ties the three together for a
//! presentation layer to consume.

pub mod app;
pub mod config;
pub mod core;
pub mod store;

pub use crate::app::{IDEAS_KEY, IdeaBoard};
pub use crate::config::BoardConfig;
pub use crate::core::collection::IdeaCollection;
pub use crate::core::idea::{ChecklistItem, Idea, IdeaDraft, Priority};
pub use crate::store::{FileBackend, MemoryBackend, StorageBackend, Store, StoreError};
