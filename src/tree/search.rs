//! Free-text search
//!
//! Case-insensitive substring matching. A blank query matches everything.

use crate::domain::{Category, Group, Item};
use super::view::ItemView;

fn normalize(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn category_matches(category: &Category, needle: &str) -> bool {
    if contains(&category.title, needle) {
        return true;
    }
    if category.description.as_deref().is_some_and(|d| contains(d, needle)) {
        return true;
    }
    category.items.iter().any(|item| match item {
        Item::Option(o) => contains(&o.title, needle),
        Item::Group(g) => contains(&g.title, needle) || g.items.iter().any(|o| contains(&o.title, needle)),
    })
}

/// Categories whose title, description, or any item title matches
pub fn search_categories(categories: &[Category], query: &str) -> Vec<Category> {
    match normalize(query) {
        None => categories.to_vec(),
        Some(needle) => categories
            .iter()
            .filter(|c| category_matches(c, &needle))
            .cloned()
            .collect(),
    }
}

/// Filtered item view in manual order. A group whose title matches keeps
/// all of its options; otherwise it is kept with only its matching options.
pub fn search_items(category: &Category, query: &str) -> ItemView {
    let Some(needle) = normalize(query) else {
        return ItemView {
            groups: category.groups().cloned().collect(),
            options: category.root_options().cloned().collect(),
        };
    };

    let groups = category
        .groups()
        .filter_map(|g| {
            if contains(&g.title, &needle) {
                return Some(g.clone());
            }
            let items: Vec<_> = g.items.iter().filter(|o| contains(&o.title, &needle)).cloned().collect();
            if items.is_empty() {
                None
            } else {
                Some(Group { items, ..g.clone() })
            }
        })
        .collect();

    let options = category
        .root_options()
        .filter(|o| contains(&o.title, &needle))
        .cloned()
        .collect();

    ItemView { groups, options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::fixtures::{category, group, root_option};

    fn travel() -> Category {
        let mut cat = category(vec![
            group("Beach", &["Hawaii", "Maldives"]),
            group("Cities", &["Paris", "Rome"]),
            root_option("Hiking"),
        ]);
        cat.title = "Travel".into();
        cat.description = Some("Places to go".into());
        cat
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let cats = vec![travel()];
        assert_eq!(search_categories(&cats, "   ").len(), 1);
        let view = search_items(&travel(), "");
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.options.len(), 1);
    }

    #[test]
    fn test_category_search_looks_into_items() {
        let mut other = travel();
        other.title = "Food".into();
        other.description = None;
        other.items.clear();
        let cats = vec![travel(), other];

        assert_eq!(search_categories(&cats, "rOmE").len(), 1);
        assert_eq!(search_categories(&cats, "places").len(), 1);
        assert_eq!(search_categories(&cats, "foo").len(), 1);
        assert!(search_categories(&cats, "tokyo").is_empty());
    }

    #[test]
    fn test_group_title_match_keeps_all_options() {
        let view = search_items(&travel(), "beach");
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].items.len(), 2);
        assert!(view.options.is_empty());
    }

    #[test]
    fn test_option_match_keeps_only_matching_options() {
        let view = search_items(&travel(), "hawaii");
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].items.len(), 1);
        assert_eq!(view.groups[0].items[0].title, "Hawaii");

        let view = search_items(&travel(), "hik");
        assert!(view.groups.is_empty());
        assert_eq!(view.options.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(search_items(&travel(), "tokyo").is_empty());
    }
}
