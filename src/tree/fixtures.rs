//! Test builders. Titles equal ids unless stated.

use crate::domain::{Category, Group, Item, OptionItem};

pub fn option(id: &str) -> OptionItem {
    OptionItem::new(id.to_string(), id.to_string(), 1)
}

pub fn root_option(id: &str) -> Item {
    Item::Option(option(id))
}

pub fn group(id: &str, options: &[&str]) -> Item {
    let mut g = Group::new(id.to_string(), id.to_string(), 1);
    g.items = options.iter().map(|o| option(o)).collect();
    Item::Group(g)
}

pub fn category(items: Vec<Item>) -> Category {
    let mut cat = Category::new("cat".to_string(), "Category".to_string(), None, 1);
    cat.items = items;
    cat
}

/// Root item ids in physical order
pub fn root_ids(category: &Category) -> Vec<&str> {
    category.items.iter().map(|i| i.id()).collect()
}

/// Option ids of a group in order
pub fn group_ids<'a>(category: &'a Category, group_id: &str) -> Vec<&'a str> {
    category
        .groups()
        .find(|g| g.id == group_id)
        .map(|g| g.items.iter().map(|o| o.id.as_str()).collect())
        .unwrap_or_default()
}
