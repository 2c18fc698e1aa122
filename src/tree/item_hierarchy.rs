//! Item Hierarchy - Moving Options Between Containers

use crate::domain::{Category, Item, OptionItem};
use super::item_tree::root_option_slot;

/// Container an option is moved into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Root,
    Group(String),
}

impl Destination {
    /// `None` = root container
    pub fn from_container(group_id: Option<String>) -> Self {
        match group_id {
            Some(id) => Destination::Group(id),
            None => Destination::Root,
        }
    }
}

/// Relocate an option to another container.
///
/// Into root it lands ahead of the first root option (same rule as
/// `insert_at_root`); into a group it is appended. `None` if the option is
/// not found or the destination is not a group of this category. Moving
/// into the current container keeps the order and only stamps the time.
pub fn move_option(category: &Category, option_id: &str, destination: &Destination, now: i64) -> Option<Category> {
    if let Destination::Group(group_id) = destination {
        if !category.groups().any(|g| g.id == *group_id) {
            return None;
        }
    }

    let current = current_container(category, option_id)?;
    if current == *destination {
        return Some(category.clone().touched(now));
    }

    let mut next = category.clone();
    let option = detach_option(&mut next.items, option_id)?;
    match destination {
        Destination::Root => {
            let slot = root_option_slot(&next.items);
            next.items.insert(slot, Item::Option(option));
        }
        Destination::Group(group_id) => {
            next.items
                .iter_mut()
                .filter_map(Item::as_group_mut)
                .find(|g| g.id == *group_id)?
                .items
                .push(option);
        }
    }
    Some(next.touched(now))
}

fn current_container(category: &Category, option_id: &str) -> Option<Destination> {
    if category.root_options().any(|o| o.id == option_id) {
        return Some(Destination::Root);
    }
    category
        .groups()
        .find(|g| g.position_of(option_id).is_some())
        .map(|g| Destination::Group(g.id.clone()))
}

/// Remove an option from root, or else from the first group holding it
fn detach_option(items: &mut Vec<Item>, option_id: &str) -> Option<OptionItem> {
    let root_index = items
        .iter()
        .position(|i| matches!(i, Item::Option(o) if o.id == option_id));
    if let Some(index) = root_index {
        return match items.remove(index) {
            Item::Option(option) => Some(option),
            Item::Group(_) => None,
        };
    }

    items
        .iter_mut()
        .filter_map(Item::as_group_mut)
        .find_map(|g| g.position_of(option_id).map(|index| g.items.remove(index)))
}
