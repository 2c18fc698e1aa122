//! Sort Preference Commands

use crate::domain::SortPreference;
use crate::AppState;

pub async fn get_category_sort(state: &AppState) -> Result<SortPreference, String> {
    Ok(state.preferences.category_sort().await)
}

pub async fn set_category_sort(state: &AppState, pref: SortPreference) -> Result<(), String> {
    state.preferences.set_category_sort(&pref).await.map_err(|e| e.to_string())
}

pub async fn get_item_sort(state: &AppState) -> Result<SortPreference, String> {
    Ok(state.preferences.item_sort().await)
}

/// Leaving manual order abandons any drag in progress
pub async fn set_item_sort(state: &AppState, pref: SortPreference) -> Result<(), String> {
    if !pref.is_manual() {
        state.drag.lock().await.cancel();
    }
    state.preferences.set_item_sort(&pref).await.map_err(|e| e.to_string())
}
