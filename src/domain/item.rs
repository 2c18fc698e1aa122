//! Item Entities
//!
//! Options are leaves; groups hold options. Groups never nest, so a
//! category's tree is exactly two levels deep.

use serde::{Deserialize, Serialize};
use super::entity::deserialize_timestamp;

pub type ItemId = String;

/// Item discriminant, serialized as the `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Option,
    Group,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Option => "OPTION",
            ItemType::Group => "GROUP",
        }
    }
}

/// Leaf item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: i64,
}

impl OptionItem {
    pub fn new(id: ItemId, title: String, created_at: i64) -> Self {
        Self { id, title, created_at }
    }
}

/// Container item holding options only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: ItemId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: i64,
    #[serde(default, with = "group_options")]
    pub items: Vec<OptionItem>,
}

impl Group {
    pub fn new(id: ItemId, title: String, created_at: i64) -> Self {
        Self {
            id,
            title,
            created_at,
            items: Vec::new(),
        }
    }

    pub fn position_of(&self, option_id: &str) -> Option<usize> {
        self.items.iter().position(|o| o.id == option_id)
    }
}

/// Root-level entry of a category: either an option or a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "OPTION")]
    Option(OptionItem),
    #[serde(rename = "GROUP")]
    Group(Group),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Option(o) => &o.id,
            Item::Group(g) => &g.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Option(o) => &o.title,
            Item::Group(g) => &g.title,
        }
    }

    pub fn set_title(&mut self, title: String) {
        match self {
            Item::Option(o) => o.title = title,
            Item::Group(g) => g.title = title,
        }
    }

    pub fn created_at(&self) -> i64 {
        match self {
            Item::Option(o) => o.created_at,
            Item::Group(g) => g.created_at,
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Option(_) => ItemType::Option,
            Item::Group(_) => ItemType::Group,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Item::Group(_))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Item::Option(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Item::Group(g) => Some(g),
            Item::Option(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Item::Group(g) => Some(g),
            Item::Option(_) => None,
        }
    }

    pub fn as_option(&self) -> Option<&OptionItem> {
        match self {
            Item::Option(o) => Some(o),
            Item::Group(_) => None,
        }
    }
}

/// Group options are written with their `"type": "OPTION"` tag like root
/// items. On read the tag is optional, and nested groups are dropped.
mod group_options {
    use super::{ItemType, OptionItem};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum Tagged<'a> {
        #[serde(rename = "OPTION")]
        Option(&'a OptionItem),
    }

    #[derive(Deserialize)]
    struct Nested {
        #[serde(rename = "type", default)]
        kind: Option<ItemType>,
        #[serde(flatten)]
        option: OptionItem,
    }

    pub fn serialize<S: Serializer>(items: &[OptionItem], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(items.iter().map(Tagged::Option))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<OptionItem>, D::Error> {
        let nested = Vec::<Nested>::deserialize(deserializer)?;
        Ok(nested
            .into_iter()
            .filter_map(|n| match n.kind {
                Some(ItemType::Group) => {
                    log::warn!("dropping nested group {} inside a group", n.option.id);
                    None
                }
                _ => Some(n.option),
            })
            .collect())
    }
}
