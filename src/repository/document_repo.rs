//! Document Repository
//!
//! Owns the in-memory category list and persists the whole document under
//! one storage key after every successful mutation. A failed write is
//! logged and the in-memory state is kept.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Category, DomainError, DomainResult};
use crate::tree::search_categories;
use super::traits::{KeyValueStore, Repository, SearchableRepository};
use super::CATEGORIES_KEY;

pub struct DocumentRepository {
    store: Arc<dyn KeyValueStore>,
    categories: Mutex<Vec<Category>>,
}

impl DocumentRepository {
    /// Read the stored document. Absent, unreadable or malformed values
    /// start an empty document.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let categories = match store.get(CATEGORIES_KEY).await {
            Ok(Some(text)) => match serde_json::from_str::<Vec<Category>>(&text) {
                Ok(categories) => categories,
                Err(e) => {
                    log::warn!("discarding malformed stored document: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read stored document: {}", e);
                Vec::new()
            }
        };
        log::info!("loaded {} categories", categories.len());

        Self {
            store,
            categories: Mutex::new(categories),
        }
    }

    async fn persist(&self, categories: &[Category]) {
        let text = match serde_json::to_string(categories) {
            Ok(text) => text,
            Err(e) => {
                log::error!("failed to serialize document: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(CATEGORIES_KEY, &text).await {
            log::error!("failed to persist document: {}", e);
        }
    }

    /// Replace the whole document
    pub async fn replace_all(&self, categories: Vec<Category>) {
        self.replace_with(|_| categories).await;
    }

    /// Compute a new document from the current one and store it
    pub async fn replace_with<F>(&self, f: F) -> Vec<Category>
    where
        F: FnOnce(&[Category]) -> Vec<Category> + Send,
    {
        let mut guard = self.categories.lock().await;
        let next = f(&guard);
        *guard = next;
        self.persist(&guard).await;
        guard.clone()
    }

    /// Run a tree operation against one category. Its result is substituted
    /// and persisted only when the operation returned `Some`; `Ok(None)`
    /// means it was a no-op.
    pub async fn apply<F>(&self, category_id: &str, op: F) -> DomainResult<Option<Category>>
    where
        F: FnOnce(&Category) -> Option<Category> + Send,
    {
        let mut guard = self.categories.lock().await;
        let index = guard
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| DomainError::NotFound(format!("category {}", category_id)))?;

        let Some(next) = op(&guard[index]) else {
            log::debug!("no-op on category {}", category_id);
            return Ok(None);
        };
        guard[index] = next.clone();
        self.persist(&guard).await;
        Ok(Some(next))
    }
}

#[async_trait]
impl Repository<Category> for DocumentRepository {
    /// New categories go first
    async fn create(&self, entity: &Category) -> DomainResult<Category> {
        let mut guard = self.categories.lock().await;
        if guard.iter().any(|c| c.id == entity.id) {
            return Err(DomainError::Conflict(format!("category {} already exists", entity.id)));
        }
        guard.insert(0, entity.clone());
        self.persist(&guard).await;
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Category>> {
        let guard = self.categories.lock().await;
        Ok(guard.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.lock().await.clone())
    }

    async fn update(&self, entity: &Category) -> DomainResult<Category> {
        let mut guard = self.categories.lock().await;
        let slot = guard
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("category {}", entity.id)))?;
        *slot = entity.clone();
        self.persist(&guard).await;
        Ok(entity.clone())
    }

    /// Removes the category with everything in it. Unknown ids are a no-op.
    async fn delete(&self, id: &String) -> DomainResult<()> {
        let mut guard = self.categories.lock().await;
        let before = guard.len();
        guard.retain(|c| &c.id != id);
        if guard.len() != before {
            self.persist(&guard).await;
        }
        Ok(())
    }
}

#[async_trait]
impl SearchableRepository<Category> for DocumentRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<Category>> {
        let guard = self.categories.lock().await;
        Ok(search_categories(&guard, query))
    }
}
