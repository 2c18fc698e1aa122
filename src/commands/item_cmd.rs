//! Item Commands
//!
//! Group and option operations inside one category. Each returns the
//! updated category, or `None` when the operation was a no-op (stale ids).

use serde::Serialize;

use crate::domain::{now_millis, Category, Group, Item, OptionItem};
use crate::tree::{self, search_items, Destination, ItemRef, ItemView};
use crate::AppState;
use super::{get_category, require_title};

/// A located item and its containing group (`None` at root)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem {
    pub item: Item,
    pub parent_group_id: Option<String>,
}

impl From<ItemRef<'_>> for FoundItem {
    fn from(found: ItemRef<'_>) -> Self {
        match found {
            ItemRef::Root(item) => FoundItem {
                item: item.clone(),
                parent_group_id: None,
            },
            ItemRef::Nested { group, option } => FoundItem {
                item: Item::Option(option.clone()),
                parent_group_id: Some(group.id.clone()),
            },
        }
    }
}

pub async fn create_group(state: &AppState, category_id: &str, title: String) -> Result<Option<Category>, String> {
    let title = require_title(&title)?;
    let now = now_millis();
    let group = Item::Group(Group::new(state.ids.new_id(), title, now));
    state
        .documents
        .apply(category_id, |c| Some(tree::insert_at_root(c, group, now)))
        .await
        .map_err(|e| e.to_string())
}

/// Add an option at root, or prepend it to `group_id`
pub async fn create_option(
    state: &AppState,
    category_id: &str,
    title: String,
    group_id: Option<String>,
) -> Result<Option<Category>, String> {
    let title = require_title(&title)?;
    let now = now_millis();
    let option = OptionItem::new(state.ids.new_id(), title, now);
    state
        .documents
        .apply(category_id, |c| match group_id.as_deref() {
            Some(group_id) => tree::insert_into_group(c, group_id, option, now),
            None => Some(tree::insert_at_root(c, Item::Option(option), now)),
        })
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_item(
    state: &AppState,
    category_id: &str,
    item_id: &str,
    parent_group_id: Option<String>,
) -> Result<Option<Category>, String> {
    state
        .documents
        .apply(category_id, |c| tree::delete_item(c, item_id, parent_group_id.as_deref(), now_millis()))
        .await
        .map_err(|e| e.to_string())
}

pub async fn rename_item(
    state: &AppState,
    category_id: &str,
    item_id: &str,
    parent_group_id: Option<String>,
    title: String,
) -> Result<Option<Category>, String> {
    let title = require_title(&title)?;
    state
        .documents
        .apply(category_id, |c| {
            tree::rename_item(c, item_id, parent_group_id.as_deref(), title, now_millis())
        })
        .await
        .map_err(|e| e.to_string())
}

pub async fn find_item(state: &AppState, category_id: &str, item_id: &str) -> Result<Option<FoundItem>, String> {
    let category = get_category(state, category_id).await?;
    Ok(tree::find_item(&category, item_id).map(FoundItem::from))
}

/// Move an option to root (`group_id` = `None`) or to the end of a group
pub async fn move_option(
    state: &AppState,
    category_id: &str,
    option_id: &str,
    group_id: Option<String>,
) -> Result<Option<Category>, String> {
    let destination = Destination::from_container(group_id);
    state
        .documents
        .apply(category_id, |c| tree::move_option(c, option_id, &destination, now_millis()))
        .await
        .map_err(|e| e.to_string())
}

/// Manual reorder of `active_id` onto `over_id`. Refused unless the item
/// view is in manual order.
pub async fn reorder_items(
    state: &AppState,
    category_id: &str,
    active_id: &str,
    over_id: &str,
) -> Result<Option<Category>, String> {
    if !state.preferences.item_sort().await.is_manual() {
        log::debug!("reorder in {} ignored: item view is not in manual order", category_id);
        return Ok(None);
    }
    state
        .documents
        .apply(category_id, |c| tree::reorder_items(c, active_id, over_id, now_millis()))
        .await
        .map_err(|e| e.to_string())
}

/// Groups and root options in the saved item-view order
pub async fn item_view(state: &AppState, category_id: &str) -> Result<ItemView, String> {
    let category = get_category(state, category_id).await?;
    let pref = state.preferences.item_sort().await;
    Ok(tree::item_view(&category, &pref))
}

/// Items of one category matching `query`, in manual order
pub async fn search_category_items(state: &AppState, category_id: &str, query: &str) -> Result<ItemView, String> {
    let category = get_category(state, category_id).await?;
    Ok(search_items(&category, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::commands::{create_category, set_item_sort};
    use crate::domain::{SortDirection, SortField, SortPreference};

    fn root_titles(category: &Category) -> Vec<String> {
        category.items.iter().map(|i| i.title().to_string()).collect()
    }

    #[tokio::test]
    async fn test_build_tree() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();

        create_option(&state, &cat.id, "Rome".into(), None).await.unwrap();
        let with_group = create_group(&state, &cat.id, "Beach".into()).await.unwrap().unwrap();
        let group_id = with_group.groups().next().unwrap().id.clone();
        let done = create_option(&state, &cat.id, "Hawaii".into(), Some(group_id.clone()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(root_titles(&done), vec!["Beach", "Rome"]);
        assert_eq!(done.option_count(), 2);

        let hawaii_id = done.groups().next().unwrap().items[0].id.clone();
        let found = find_item(&state, &cat.id, &hawaii_id).await.unwrap().unwrap();
        assert_eq!(found.parent_group_id.as_deref(), Some(group_id.as_str()));
        assert_eq!(found.item.title(), "Hawaii");
    }

    #[tokio::test]
    async fn test_stale_ids_are_noops() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();

        assert!(create_option(&state, &cat.id, "x".into(), Some("ghost".into())).await.unwrap().is_none());
        assert!(delete_item(&state, &cat.id, "ghost", None).await.unwrap().is_none());
        assert!(move_option(&state, &cat.id, "ghost", None).await.unwrap().is_none());
        assert!(find_item(&state, &cat.id, "ghost").await.unwrap().is_none());
        assert!(create_option(&state, "no-such-category", "x".into(), None).await.is_err());
    }

    #[tokio::test]
    async fn test_blank_titles_rejected() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();
        assert!(create_group(&state, &cat.id, " ".into()).await.is_err());
        assert!(create_option(&state, &cat.id, "".into(), None).await.is_err());

        let with_option = create_option(&state, &cat.id, "Rome".into(), None).await.unwrap().unwrap();
        let id = with_option.items[0].id().to_string();
        assert!(rename_item(&state, &cat.id, &id, None, "  ".into()).await.is_err());
        let renamed = rename_item(&state, &cat.id, &id, None, "Roma".into()).await.unwrap().unwrap();
        assert_eq!(root_titles(&renamed), vec!["Roma"]);
    }

    #[tokio::test]
    async fn test_move_and_delete_group() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();
        let c = create_option(&state, &cat.id, "Rome".into(), None).await.unwrap().unwrap();
        let rome = c.items[0].id().to_string();
        let c = create_group(&state, &cat.id, "Cities".into()).await.unwrap().unwrap();
        let cities = c.groups().next().unwrap().id.clone();

        let moved = move_option(&state, &cat.id, &rome, Some(cities.clone())).await.unwrap().unwrap();
        assert_eq!(moved.option_count(), 1);
        assert_eq!(moved.root_options().count(), 0);

        let after = delete_item(&state, &cat.id, &cities, None).await.unwrap().unwrap();
        assert!(after.items.is_empty());
        assert!(find_item(&state, &cat.id, &rome).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reorder_only_in_manual_mode() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();
        for title in ["C", "B", "A"] {
            create_option(&state, &cat.id, title.into(), None).await.unwrap();
        }
        let current = get_category(&state, &cat.id).await.unwrap();
        assert_eq!(root_titles(&current), vec!["A", "B", "C"]);
        let a = current.items[0].id().to_string();
        let c = current.items[2].id().to_string();

        set_item_sort(&state, SortPreference::new(SortField::Title, SortDirection::Asc)).await.unwrap();
        assert!(reorder_items(&state, &cat.id, &a, &c).await.unwrap().is_none());

        set_item_sort(&state, SortPreference::default()).await.unwrap();
        let reordered = reorder_items(&state, &cat.id, &a, &c).await.unwrap().unwrap();
        assert_eq!(root_titles(&reordered), vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_item_view_and_search() {
        let state = state().await;
        let cat = create_category(&state, "Travel".into(), None).await.unwrap();
        create_option(&state, &cat.id, "pear".into(), None).await.unwrap();
        create_option(&state, &cat.id, "Apple".into(), None).await.unwrap();

        set_item_sort(&state, SortPreference::new(SortField::Title, SortDirection::Asc)).await.unwrap();
        let view = item_view(&state, &cat.id).await.unwrap();
        let titles: Vec<&str> = view.options.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "pear"]);

        let hits = search_category_items(&state, &cat.id, "PE").await.unwrap();
        assert_eq!(hits.options.len(), 1);
    }
}
