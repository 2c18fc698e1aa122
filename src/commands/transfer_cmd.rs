//! Import / Export Commands

use serde::Serialize;
use std::path::Path;

use crate::domain::{now_millis, Category};
use crate::merge::{export_document, export_file_name, merge_categories, parse_import, MergePolicy};
use crate::repository::Repository;
use crate::AppState;

/// Serialized document with a suggested download name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

/// Merge an import file's contents into the document. A malformed file
/// is rejected whole and leaves the document untouched. `policy` falls
/// back to the configured one.
pub async fn import_categories(
    state: &AppState,
    text: &str,
    policy: Option<MergePolicy>,
) -> Result<Vec<Category>, String> {
    let imported = parse_import(text).map_err(|e| {
        log::warn!("import rejected: {}", e);
        e.to_string()
    })?;
    let policy = policy.unwrap_or(state.config.merge_policy);
    let now = now_millis();
    let ids = state.ids.as_ref();

    let merged = state
        .documents
        .replace_with(|existing| merge_categories(existing, imported, policy, ids, now))
        .await;
    Ok(merged)
}

/// Read an import file and merge it
pub async fn import_file(state: &AppState, path: &Path, policy: Option<MergePolicy>) -> Result<Vec<Category>, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    import_categories(state, &text, policy).await
}

pub async fn export_categories(state: &AppState) -> Result<ExportFile, String> {
    let categories = state.documents.list().await.map_err(|e| e.to_string())?;
    let content = export_document(&categories).map_err(|e| e.to_string())?;
    Ok(ExportFile {
        file_name: export_file_name(now_millis()),
        content,
    })
}
