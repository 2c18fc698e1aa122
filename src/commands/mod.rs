//! Commands Layer
//!
//! Handlers the UI or CLI calls with the shared `AppState`. Every handler
//! returns `Result<_, String>`. Tree operations that had nothing to do
//! return `Ok(None)`.

mod category_cmd;
mod item_cmd;
mod drag_cmd;
mod transfer_cmd;
mod preference_cmd;

pub use category_cmd::*;
pub use item_cmd::*;
pub use drag_cmd::*;
pub use transfer_cmd::*;
pub use preference_cmd::*;

use crate::domain::DomainError;

/// Trimmed title, or `InvalidInput` when blank
pub(crate) fn require_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidInput("title must not be blank".to_string()).to_string());
    }
    Ok(title.to_string())
}
