//! Sorted views for rendering

use serde::Serialize;

use crate::domain::{title_sort_key, Category, Group, OptionItem, SortField, SortPreference};

/// Item view of a category: the groups section, then the root options
/// section, each in display order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemView {
    pub groups: Vec<Group>,
    pub options: Vec<OptionItem>,
}

impl ItemView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.options.is_empty()
    }
}

/// Stable sort by the preference; manual keeps the given order
fn sort_by_preference<T>(
    values: &mut [T],
    pref: &SortPreference,
    title: impl Fn(&T) -> &str,
    date: impl Fn(&T) -> i64,
) {
    match pref.field {
        SortField::Manual => {}
        SortField::Title => values.sort_by(|a, b| {
            let ordering = title_sort_key(title(a)).cmp(&title_sort_key(title(b)));
            pref.directed(ordering)
        }),
        SortField::Date => values.sort_by(|a, b| pref.directed(date(a).cmp(&date(b)))),
    }
}

/// Category list in display order. Date sorts by `modified_at`.
pub fn sort_categories(categories: &[Category], pref: &SortPreference) -> Vec<Category> {
    let mut sorted = categories.to_vec();
    sort_by_preference(&mut sorted, pref, |c| c.title.as_str(), |c| c.modified_at);
    sorted
}

/// Sections of a category in display order. Date sorts by `created_at`;
/// options inside each group follow the same preference.
pub fn item_view(category: &Category, pref: &SortPreference) -> ItemView {
    let mut groups: Vec<Group> = category.groups().cloned().collect();
    let mut options: Vec<OptionItem> = category.root_options().cloned().collect();

    sort_by_preference(&mut groups, pref, |g| g.title.as_str(), |g| g.created_at);
    for group in &mut groups {
        sort_by_preference(&mut group.items, pref, |o| o.title.as_str(), |o| o.created_at);
    }
    sort_by_preference(&mut options, pref, |o| o.title.as_str(), |o| o.created_at);

    ItemView { groups, options }
}
