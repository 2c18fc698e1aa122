//! Item Tree - Insert, Delete, Find, Rename

use crate::domain::{Category, Group, Item, OptionItem};

/// Result of a lookup: a root item, or an option nested in a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemRef<'a> {
    Root(&'a Item),
    Nested { group: &'a Group, option: &'a OptionItem },
}

impl<'a> ItemRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            ItemRef::Root(item) => item.id(),
            ItemRef::Nested { option, .. } => &option.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            ItemRef::Root(item) => item.title(),
            ItemRef::Nested { option, .. } => &option.title,
        }
    }

    /// Containing group, `None` at root
    pub fn parent_group_id(&self) -> Option<&'a str> {
        match self {
            ItemRef::Root(_) => None,
            ItemRef::Nested { group, .. } => Some(&group.id),
        }
    }
}

/// Index at which a new root option goes: just ahead of the first existing
/// root option, or at the end when there is none.
pub(crate) fn root_option_slot(items: &[Item]) -> usize {
    items
        .iter()
        .position(Item::is_option)
        .unwrap_or(items.len())
}

/// Add a root item. Groups are prepended; options go before the first
/// existing root option.
pub fn insert_at_root(category: &Category, item: Item, now: i64) -> Category {
    let mut next = category.clone();
    match item {
        Item::Group(_) => next.items.insert(0, item),
        Item::Option(_) => {
            let slot = root_option_slot(&next.items);
            next.items.insert(slot, item);
        }
    }
    next.touched(now)
}

/// Prepend an option to a group. `None` if the id is not a group.
pub fn insert_into_group(category: &Category, group_id: &str, option: OptionItem, now: i64) -> Option<Category> {
    let mut next = category.clone();
    let group = next
        .items
        .iter_mut()
        .filter_map(Item::as_group_mut)
        .find(|g| g.id == group_id)?;
    group.items.insert(0, option);
    Some(next.touched(now))
}

/// Remove an item. With `parent_group_id` the option is removed from that
/// group; otherwise the root item is removed (a group goes with all of its
/// options).
pub fn delete_item(category: &Category, item_id: &str, parent_group_id: Option<&str>, now: i64) -> Option<Category> {
    let mut next = category.clone();
    match parent_group_id {
        Some(group_id) => {
            let group = next
                .items
                .iter_mut()
                .filter_map(Item::as_group_mut)
                .find(|g| g.id == group_id)?;
            let index = group.position_of(item_id)?;
            group.items.remove(index);
        }
        None => {
            let index = next.items.iter().position(|i| i.id() == item_id)?;
            next.items.remove(index);
        }
    }
    Some(next.touched(now))
}

/// Look up an id among root items first, then one level into each group
pub fn find_item<'a>(category: &'a Category, id: &str) -> Option<ItemRef<'a>> {
    if let Some(item) = category.items.iter().find(|i| i.id() == id) {
        return Some(ItemRef::Root(item));
    }
    category.groups().find_map(|group| {
        group
            .items
            .iter()
            .find(|o| o.id == id)
            .map(|option| ItemRef::Nested { group, option })
    })
}

/// Change the title of a root item or of an option inside `parent_group_id`
pub fn rename_item(
    category: &Category,
    item_id: &str,
    parent_group_id: Option<&str>,
    title: String,
    now: i64,
) -> Option<Category> {
    let mut next = category.clone();
    match parent_group_id {
        Some(group_id) => {
            let option = next
                .items
                .iter_mut()
                .filter_map(Item::as_group_mut)
                .find(|g| g.id == group_id)?
                .items
                .iter_mut()
                .find(|o| o.id == item_id)?;
            option.title = title;
        }
        None => {
            next.items
                .iter_mut()
                .find(|i| i.id() == item_id)?
                .set_title(title);
        }
    }
    Some(next.touched(now))
}
