//! Title-based structural merge
//!
//! Categories, groups and options are matched by exact, case-sensitive
//! title. Matches are merged recursively; everything unmatched is added
//! with freshly generated ids. Nothing is ever removed or overwritten, so
//! importing the same file twice adds nothing the second time.

use crate::domain::{Category, Group, IdGenerator, Item, OptionItem};
use super::stamp_missing;

pub fn title_merge(existing: &[Category], imported: &[Category], ids: &dyn IdGenerator, now: i64) -> Vec<Category> {
    let mut result = existing.to_vec();

    for incoming in imported {
        // Earlier imports in the same batch are candidates too
        match result.iter_mut().find(|c| c.title == incoming.title) {
            Some(target) => merge_into(target, incoming, ids, now),
            None => result.push(fresh_category(incoming, ids, now)),
        }
    }

    result
}

fn merge_into(target: &mut Category, incoming: &Category, ids: &dyn IdGenerator, now: i64) {
    let mut added = 0usize;

    for item in &incoming.items {
        match item {
            Item::Group(group) => {
                let index = target
                    .items
                    .iter()
                    .position(|i| matches!(i, Item::Group(g) if g.title == group.title));
                let index = match index {
                    Some(index) => index,
                    None => {
                        target.items.push(Item::Group(empty_group(group, ids, now)));
                        added += 1;
                        target.items.len() - 1
                    }
                };
                if let Item::Group(existing) = &mut target.items[index] {
                    added += merge_options(existing, group, ids, now);
                }
            }
            Item::Option(option) => {
                if !target.root_options().any(|o| o.title == option.title) {
                    target.items.push(Item::Option(fresh_option(option, ids, now)));
                    added += 1;
                }
            }
        }
    }

    target.modified_at = now.max(target.created_at);
    log::debug!("merged into '{}': {} new items", target.title, added);
}

/// Options of `incoming` whose titles `target` lacks; returns how many were added
fn merge_options(target: &mut Group, incoming: &Group, ids: &dyn IdGenerator, now: i64) -> usize {
    let mut added = 0;
    for option in &incoming.items {
        if !target.items.iter().any(|o| o.title == option.title) {
            target.items.push(fresh_option(option, ids, now));
            added += 1;
        }
    }
    added
}

fn fresh_option(option: &OptionItem, ids: &dyn IdGenerator, now: i64) -> OptionItem {
    OptionItem {
        id: ids.new_id(),
        title: option.title.clone(),
        created_at: if option.created_at > 0 { option.created_at } else { now },
    }
}

fn empty_group(group: &Group, ids: &dyn IdGenerator, now: i64) -> Group {
    Group {
        id: ids.new_id(),
        title: group.title.clone(),
        created_at: if group.created_at > 0 { group.created_at } else { now },
        items: Vec::new(),
    }
}

/// New category shell; its items go through the same title dedupe as a merge
fn fresh_category(category: &Category, ids: &dyn IdGenerator, now: i64) -> Category {
    let mut fresh = Category {
        id: ids.new_id(),
        title: category.title.clone(),
        description: category.description.clone(),
        created_at: category.created_at,
        modified_at: category.modified_at,
        items: Vec::new(),
    };
    stamp_missing(&mut fresh, now);
    let modified_at = fresh.modified_at;
    merge_into(&mut fresh, category, ids, now);
    fresh.modified_at = modified_at;
    fresh
}
