//! Item Positioning - Manual Reorder
//!
//! Groups reorder among groups, root options among root options, and
//! nested options only inside their own group. Indices are taken against
//! the physical list being mutated (the full root list, or the group's
//! list), so items of the other type keep their relative order.

use crate::domain::{Category, Item};

/// Reorder section an id belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bucket {
    RootGroup,
    RootOption,
    /// Option inside the group with this id
    Nested(String),
}

pub fn classify(category: &Category, id: &str) -> Option<Bucket> {
    for item in &category.items {
        if item.id() == id {
            return Some(match item {
                Item::Group(_) => Bucket::RootGroup,
                Item::Option(_) => Bucket::RootOption,
            });
        }
    }
    category
        .groups()
        .find(|g| g.position_of(id).is_some())
        .map(|g| Bucket::Nested(g.id.clone()))
}

/// Remove the element at `from` and reinsert it at `to`.
/// Out-of-range indices leave the list untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let element = items.remove(from);
    items.insert(to, element);
}

/// Move `active_id` to the position of `over_id`.
///
/// `None` when both ids are equal, either is unknown, or they sit in
/// different buckets (including options of two different groups).
pub fn reorder_items(category: &Category, active_id: &str, over_id: &str, now: i64) -> Option<Category> {
    if active_id == over_id {
        return None;
    }
    let bucket = classify(category, active_id)?;
    if classify(category, over_id)? != bucket {
        log::debug!("reorder {} over {} crosses sections, ignored", active_id, over_id);
        return None;
    }

    let mut next = category.clone();
    match bucket {
        Bucket::RootGroup | Bucket::RootOption => {
            let from = next.items.iter().position(|i| i.id() == active_id)?;
            let to = next.items.iter().position(|i| i.id() == over_id)?;
            array_move(&mut next.items, from, to);
        }
        Bucket::Nested(group_id) => {
            let group = next
                .items
                .iter_mut()
                .filter_map(Item::as_group_mut)
                .find(|g| g.id == group_id)?;
            let from = group.position_of(active_id)?;
            let to = group.position_of(over_id)?;
            array_move(&mut group.items, from, to);
        }
    }
    Some(next.touched(now))
}
