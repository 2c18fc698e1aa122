//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage dependencies (serde for serialization only).

mod entity;
mod item;
mod category;
mod id_gen;
mod sort;

pub use entity::{now_millis, DomainError, DomainResult, Entity};
pub use item::{Group, Item, ItemId, ItemType, OptionItem};
pub use category::Category;
pub use id_gen::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use sort::{title_sort_key, SortDirection, SortField, SortPreference};
