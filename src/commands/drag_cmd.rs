//! Drag Commands
//!
//! Pointer-level drag gestures over a category's item view. The gesture
//! state lives in `AppState::drag`; dropping applies a reorder or a move.

use crate::domain::{now_millis, Category};
use crate::AppState;

/// Begin dragging `item_id`. Returns `false` when the item view is not in
/// manual order.
pub async fn begin_drag(state: &AppState, category_id: &str, item_id: &str) -> Result<bool, String> {
    let sort = state.preferences.item_sort().await;
    let mut drag = state.drag.lock().await;
    Ok(drag.drag_start(category_id, item_id, &sort))
}

/// Pointer pressed on `item_id`; the drag begins once `pointer_move` goes
/// past the threshold. Returns `false` when the item view is not in manual
/// order.
pub async fn press_drag(state: &AppState, category_id: &str, item_id: &str, x: i32, y: i32) -> Result<bool, String> {
    let sort = state.preferences.item_sort().await;
    let mut drag = state.drag.lock().await;
    Ok(drag.press(category_id, item_id, x, y, &sort))
}

/// Returns `true` when this move started the drag
pub async fn pointer_move(state: &AppState, x: i32, y: i32) -> Result<bool, String> {
    Ok(state.drag.lock().await.pointer_move(x, y))
}

pub async fn drag_over_item(state: &AppState, item_id: &str) -> Result<(), String> {
    state.drag.lock().await.drag_over_item(item_id);
    Ok(())
}

/// Hover a container: `None` for the root options zone, else a group
pub async fn drag_over_zone(state: &AppState, group_id: Option<String>) -> Result<(), String> {
    state.drag.lock().await.drag_over_zone(group_id.as_deref());
    Ok(())
}

/// Drop on the hovered target. `None` when nothing changed.
pub async fn end_drag(state: &AppState) -> Result<Option<Category>, String> {
    let mut drag = state.drag.lock().await;
    let Some(category_id) = drag.active_category().map(str::to_string) else {
        drag.cancel();
        return Ok(None);
    };

    let now = now_millis();
    let result = state
        .documents
        .apply(&category_id, |c| drag.drag_end(c, now).into_category())
        .await;
    if result.is_err() {
        // The category vanished mid-gesture
        drag.cancel();
    }
    result.map_err(|e| e.to_string())
}

/// Pointer left every target; releasing now drops nothing
pub async fn drag_leave(state: &AppState) -> Result<(), String> {
    state.drag.lock().await.leave();
    Ok(())
}

pub async fn cancel_drag(state: &AppState) -> Result<(), String> {
    state.drag.lock().await.cancel();
    Ok(())
}
