//! Category Entity
//!
//! A category owns one flat, ordered list of root items mixing groups and
//! options. The physical order is the manual order; the groups section and
//! the options section are derived from it by filtering on the item type.

use serde::{Deserialize, Serialize};
use super::entity::{deserialize_timestamp, Entity};
use super::item::{Group, Item, OptionItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub modified_at: i64,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(id: String, title: String, description: Option<String>, now: i64) -> Self {
        Self {
            id,
            title,
            description: normalize_description(description),
            created_at: now,
            modified_at: now,
            items: Vec::new(),
        }
    }

    /// Copy with a new title and description
    pub fn edit(&self, title: String, description: Option<String>, now: i64) -> Self {
        let mut next = self.clone();
        next.title = title;
        next.description = normalize_description(description);
        next.touched(now)
    }

    /// Stamp `modified_at`, never earlier than `created_at`
    pub fn touched(mut self, now: i64) -> Self {
        self.modified_at = now.max(self.created_at);
        self
    }

    /// Groups section, in manual order
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.items.iter().filter_map(Item::as_group)
    }

    /// Root options section, in manual order
    pub fn root_options(&self) -> impl Iterator<Item = &OptionItem> {
        self.items.iter().filter_map(Item::as_option)
    }

    /// Root items plus every option nested in a group
    pub fn option_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Option(_) => 1,
                Item::Group(g) => g.items.len(),
            })
            .sum()
    }

    /// Every id held by the category, itself included
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        for item in &self.items {
            ids.push(item.id());
            if let Item::Group(g) = item {
                ids.extend(g.items.iter().map(|o| o.id.as_str()));
            }
        }
        ids
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

impl Entity for Category {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        let mut cat = Category::new("c1".into(), "Travel".into(), Some("  trips  ".into()), 100);
        let mut beach = Group::new("g1".into(), "Beach".into(), 100);
        beach.items.push(OptionItem::new("o1".into(), "Hawaii".into(), 100));
        cat.items.push(Item::Group(beach));
        cat.items.push(Item::Option(OptionItem::new("o2".into(), "Paris".into(), 100)));
        cat
    }

    #[test]
    fn test_category_creation() {
        let cat = sample();
        assert_eq!(cat.id(), "c1");
        assert_eq!(cat.description.as_deref(), Some("trips"));
        assert_eq!(cat.created_at, cat.modified_at);
    }

    #[test]
    fn test_sections_and_counts() {
        let cat = sample();
        assert_eq!(cat.groups().count(), 1);
        assert_eq!(cat.root_options().count(), 1);
        assert_eq!(cat.option_count(), 2);
        assert_eq!(cat.all_ids(), vec!["c1", "g1", "o1", "o2"]);
    }

    #[test]
    fn test_edit_updates_modified_at() {
        let cat = sample();
        let edited = cat.edit("Trips".into(), Some("   ".into()), 200);
        assert_eq!(edited.title, "Trips");
        assert_eq!(edited.description, None);
        assert_eq!(edited.modified_at, 200);
        assert_eq!(cat.title, "Travel");
    }

    #[test]
    fn test_touched_never_precedes_creation() {
        let cat = sample().touched(50);
        assert_eq!(cat.modified_at, 100);
    }

    #[test]
    fn test_json_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("modifiedAt").is_some());
        assert_eq!(json["items"][0]["type"], "GROUP");
    }
}
