//! Preference Repository
//!
//! Sort preferences for the category list and the item view, each under
//! its own storage key and independent of the document.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, SortPreference};
use super::traits::KeyValueStore;
use super::{CATEGORY_SORT_KEY, ITEM_SORT_KEY};

pub struct PreferenceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn category_sort(&self) -> SortPreference {
        self.load(CATEGORY_SORT_KEY).await
    }

    pub async fn set_category_sort(&self, pref: &SortPreference) -> DomainResult<()> {
        self.save(CATEGORY_SORT_KEY, pref).await
    }

    pub async fn item_sort(&self) -> SortPreference {
        self.load(ITEM_SORT_KEY).await
    }

    pub async fn set_item_sort(&self, pref: &SortPreference) -> DomainResult<()> {
        self.save(ITEM_SORT_KEY, pref).await
    }

    /// Missing or malformed values fall back to the default
    async fn load(&self, key: &str) -> SortPreference {
        match self.store.get(key).await {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("ignoring malformed {} preference: {}", key, e);
                SortPreference::default()
            }),
            Ok(None) => SortPreference::default(),
            Err(e) => {
                log::warn!("failed to read {} preference: {}", key, e);
                SortPreference::default()
            }
        }
    }

    async fn save(&self, key: &str, pref: &SortPreference) -> DomainResult<()> {
        let text = serde_json::to_string(pref).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.store.set(key, &text).await
    }
}
