//! Import Merge Engine
//!
//! Two interchangeable policies for folding imported categories into the
//! document. They are never mixed within one import.
//! - title_merge: additive, keyed on titles, fresh ids (default)
//! - identity_merge: overwrite-or-insert keyed on category id
//! - transfer: import file validation and export

mod title_merge;
mod identity_merge;
mod transfer;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, IdGenerator, Item};

pub use title_merge::title_merge;
pub use identity_merge::identity_merge;
pub use transfer::{export_document, export_file_name, parse_import, ImportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Match by title, add what is missing, never overwrite
    #[default]
    Title,
    /// Replace categories with the same id, append the rest
    Identity,
}

impl MergePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::Title => "title",
            MergePolicy::Identity => "identity",
        }
    }
}

impl std::str::FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(MergePolicy::Title),
            "identity" | "id" => Ok(MergePolicy::Identity),
            other => Err(format!("unknown merge policy: {}", other)),
        }
    }
}

/// Merge `imported` into `existing` under `policy`, returning the new document
pub fn merge_categories(
    existing: &[Category],
    imported: Vec<Category>,
    policy: MergePolicy,
    ids: &dyn IdGenerator,
    now: i64,
) -> Vec<Category> {
    log::info!(
        "merging {} imported categories into {} ({} policy)",
        imported.len(),
        existing.len(),
        policy.as_str()
    );
    match policy {
        MergePolicy::Title => title_merge(existing, &imported, ids, now),
        MergePolicy::Identity => identity_merge(existing, imported, now),
    }
}

/// Fill timestamps an import left out, on the category and every item in it
pub(crate) fn stamp_missing(category: &mut Category, now: i64) {
    if category.created_at <= 0 {
        category.created_at = now;
    }
    if category.modified_at < category.created_at {
        category.modified_at = category.created_at;
    }
    for item in &mut category.items {
        match item {
            Item::Option(option) => stamp_created(&mut option.created_at, now),
            Item::Group(group) => {
                stamp_created(&mut group.created_at, now);
                for option in &mut group.items {
                    stamp_created(&mut option.created_at, now);
                }
            }
        }
    }
}

fn stamp_created(created_at: &mut i64, now: i64) {
    if *created_at <= 0 {
        *created_at = now;
    }
}
