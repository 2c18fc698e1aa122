//! Repository Layer
//!
//! Data access abstractions and implementations.
//! - traits: generic entity repository and the key-value storage seam
//! - db / sqlite_store: SQLite-backed key-value store
//! - memory_store: in-process store for tests and dry runs
//! - document_repo: the category document, persisted whole on every change
//! - preference_repo: sort preferences stored beside the document

mod traits;
mod db;
mod sqlite_store;
mod memory_store;
mod document_repo;
mod preference_repo;


pub use traits::{KeyValueStore, Repository, SearchableRepository};
pub use db::{init_db, DbState};
pub use sqlite_store::SqliteStore;
pub use memory_store::MemoryStore;
pub use document_repo::DocumentRepository;
pub use preference_repo::PreferenceRepository;

/// Storage key of the category document
pub const CATEGORIES_KEY: &str = "categories";
/// Storage key of the category list sort preference
pub const CATEGORY_SORT_KEY: &str = "categorySort";
/// Storage key of the item view sort preference
pub const ITEM_SORT_KEY: &str = "itemSort";
