//! Category Commands
//!
//! Category CRUD and search over the document.

use crate::domain::{now_millis, Category, DomainError};
use crate::repository::{Repository, SearchableRepository};
use crate::tree::sort_categories;
use crate::AppState;
use super::require_title;

/// All categories in the saved category-list order
pub async fn list_categories(state: &AppState) -> Result<Vec<Category>, String> {
    let categories = state.documents.list().await.map_err(|e| e.to_string())?;
    let pref = state.preferences.category_sort().await;
    Ok(sort_categories(&categories, &pref))
}

pub async fn get_category(state: &AppState, id: &str) -> Result<Category, String> {
    state
        .documents
        .find_by_id(&id.to_string())
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("category {}", id)).to_string())
}

pub async fn create_category(
    state: &AppState,
    title: String,
    description: Option<String>,
) -> Result<Category, String> {
    let title = require_title(&title)?;
    let category = Category::new(state.ids.new_id(), title, description, now_millis());
    log::info!("creating category {} '{}'", category.id, category.title);
    state.documents.create(&category).await.map_err(|e| e.to_string())
}

/// Edit title and description
pub async fn update_category(
    state: &AppState,
    id: &str,
    title: String,
    description: Option<String>,
) -> Result<Category, String> {
    let title = require_title(&title)?;
    let existing = get_category(state, id).await?;
    let edited = existing.edit(title, description, now_millis());
    state.documents.update(&edited).await.map_err(|e| e.to_string())
}

/// Delete a category and everything in it
pub async fn delete_category(state: &AppState, id: &str) -> Result<(), String> {
    log::info!("deleting category {}", id);
    state.documents.delete(&id.to_string()).await.map_err(|e| e.to_string())
}

/// Categories matching `query`, in the saved category-list order
pub async fn search(state: &AppState, query: &str) -> Result<Vec<Category>, String> {
    let hits = state.documents.search(query).await.map_err(|e| e.to_string())?;
    let pref = state.preferences.category_sort().await;
    Ok(sort_categories(&hits, &pref))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::commands::set_category_sort;
    use crate::domain::{SortDirection, SortField, SortPreference};

    #[tokio::test]
    async fn test_create_and_list() {
        let state = state().await;
        create_category(&state, "Books".into(), None).await.unwrap();
        create_category(&state, "  Travel ".into(), Some("trips".into())).await.unwrap();

        let all = list_categories(&state).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Travel", "Books"]);
        assert_eq!(all[0].id, "id-2");
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let state = state().await;
        assert!(create_category(&state, "   ".into(), None).await.is_err());
        assert!(list_categories(&state).await.unwrap().is_empty());

        let created = create_category(&state, "Books".into(), None).await.unwrap();
        assert!(update_category(&state, &created.id, "".into(), None).await.is_err());
        assert_eq!(get_category(&state, &created.id).await.unwrap().title, "Books");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let state = state().await;
        let created = create_category(&state, "Books".into(), None).await.unwrap();

        let updated = update_category(&state, &created.id, "Novels".into(), Some("fiction".into()))
            .await
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("fiction"));
        assert!(updated.modified_at >= updated.created_at);

        delete_category(&state, &created.id).await.unwrap();
        let err = get_category(&state, &created.id).await.unwrap_err();
        assert!(err.starts_with("Not found"));
    }

    #[tokio::test]
    async fn test_list_follows_sort_preference() {
        let state = state().await;
        create_category(&state, "beta".into(), None).await.unwrap();
        create_category(&state, "Alpha".into(), None).await.unwrap();
        create_category(&state, "gamma".into(), None).await.unwrap();

        set_category_sort(&state, SortPreference::new(SortField::Title, SortDirection::Asc))
            .await
            .unwrap();
        let titles: Vec<String> = list_categories(&state).await.unwrap().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "gamma"]);

        let hits = search(&state, "A").await.unwrap();
        assert_eq!(hits.len(), 3);
        assert!(search(&state, "zzz").await.unwrap().is_empty());
    }
}
