//! Sort preferences
//!
//! Persisted per view (category list, item view). Only `Manual` exposes
//! the physical order and allows drag reordering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Manual,
    Title,
    /// `modifiedAt` for categories, `createdAt` for items
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortPreference {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortPreference {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn is_manual(&self) -> bool {
        self.field == SortField::Manual
    }

    /// Apply direction to an ascending ordering
    pub fn directed(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive title key; CJK characters sort by their pinyin
pub fn title_sort_key(title: &str) -> String {
    use pinyin::ToPinyin;

    let mut key = String::with_capacity(title.len());
    for c in title.chars() {
        match c.to_pinyin() {
            Some(p) => key.push_str(p.plain()),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}
