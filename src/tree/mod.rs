//! Item Tree Operations
//!
//! Pure, copy-on-write operations on one category's items, split into:
//! - item_tree: insert, delete, find, rename
//! - item_positioning: manual reorder within a section or a group
//! - item_hierarchy: moving options between containers
//! - drag: drag gesture gating and drop resolution
//! - view / search: sorted and filtered read-only views
//!
//! Mutations take the current time (epoch ms) and return `Some(category)`
//! with `modified_at` stamped, or `None` when the request does not apply
//! to the category (stale or unknown ids). `None` leaves nothing to persist.

mod item_tree;
mod item_positioning;
mod item_hierarchy;
mod drag;
mod view;
mod search;

#[cfg(test)]
pub(crate) mod fixtures;

pub use item_tree::{delete_item, find_item, insert_at_root, insert_into_group, rename_item, ItemRef};
pub use item_positioning::{array_move, classify, reorder_items, Bucket};
pub use item_hierarchy::{move_option, Destination};
pub use drag::{DragController, DragOutcome, DropTarget};
pub use view::{item_view, sort_categories, ItemView};
pub use search::{search_categories, search_items};
