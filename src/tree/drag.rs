//! Drag Controller
//!
//! Wraps a pointer drag session for one category's item view. A drag can
//! only start while the view is in manual order; the drop is then resolved
//! into a reorder (dropped on an item) or a move (dropped on a container).

use dragdrop::DragSession;
pub use dragdrop::DropTarget;

use crate::domain::{Category, SortPreference};
use super::item_hierarchy::{move_option, Destination};
use super::item_positioning::reorder_items;

/// What a finished drag did to the category
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Reordered(Category),
    Moved(Category),
    Ignored,
}

impl DragOutcome {
    pub fn into_category(self) -> Option<Category> {
        match self {
            DragOutcome::Reordered(c) | DragOutcome::Moved(c) => Some(c),
            DragOutcome::Ignored => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    session: DragSession<String>,
    category_id: Option<String>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging immediately. Refused unless `sort` is manual.
    pub fn drag_start(&mut self, category_id: &str, item_id: &str, sort: &SortPreference) -> bool {
        if !sort.is_manual() {
            log::debug!("drag of {} refused: sort field is {:?}", item_id, sort.field);
            return false;
        }
        self.session.start(item_id.to_string());
        self.category_id = Some(category_id.to_string());
        true
    }

    /// Pointer pressed on an item; the drag starts once the pointer moves
    /// past the threshold. Refused unless `sort` is manual.
    pub fn press(&mut self, category_id: &str, item_id: &str, x: i32, y: i32, sort: &SortPreference) -> bool {
        if !sort.is_manual() {
            return false;
        }
        self.session.press(item_id.to_string(), x, y);
        self.category_id = Some(category_id.to_string());
        true
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        self.session.pointer_move(x, y)
    }

    pub fn drag_over_item(&mut self, item_id: &str) {
        self.session.enter_item(item_id.to_string());
    }

    /// Hover a container: `None` = root, `Some(group_id)` = a group
    pub fn drag_over_zone(&mut self, group_id: Option<&str>) {
        self.session.enter_zone(group_id.map(str::to_string));
    }

    pub fn leave(&mut self) {
        self.session.leave();
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
        self.category_id = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn dragging_id(&self) -> Option<&str> {
        self.session.dragging_id().map(String::as_str)
    }

    /// Category the current gesture belongs to
    pub fn active_category(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Release over the hovered target and apply it to `category`.
    /// Drops that target another category are ignored.
    pub fn drag_end(&mut self, category: &Category, now: i64) -> DragOutcome {
        let owner = self.category_id.take();
        let Some((active_id, target)) = self.session.release() else {
            return DragOutcome::Ignored;
        };
        if owner.as_deref() != Some(category.id.as_str()) {
            return DragOutcome::Ignored;
        }
        resolve_drop(category, &active_id, &target, now)
    }
}

/// Interpret a drop of `active_id` onto `target`
pub fn resolve_drop(category: &Category, active_id: &str, target: &DropTarget<String>, now: i64) -> DragOutcome {
    match target {
        DropTarget::Item(over_id) => reorder_items(category, active_id, over_id, now)
            .map(DragOutcome::Reordered)
            .unwrap_or(DragOutcome::Ignored),
        DropTarget::Zone(container) => {
            let destination = Destination::from_container(container.clone());
            move_option(category, active_id, &destination, now)
                .map(DragOutcome::Moved)
                .unwrap_or(DragOutcome::Ignored)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField};
    use crate::tree::fixtures::{category, group, group_ids, root_ids, root_option};

    fn sample() -> Category {
        category(vec![group("g1", &["x"]), root_option("a"), root_option("b"), root_option("c")])
    }

    #[test]
    fn test_manual_drag_reorders() {
        let cat = sample();
        let mut dnd = DragController::new();
        assert!(dnd.drag_start("cat", "a", &SortPreference::default()));
        dnd.drag_over_item("c");
        let outcome = dnd.drag_end(&cat, 3);
        let next = outcome.into_category().unwrap();
        assert_eq!(root_ids(&next), vec!["g1", "b", "c", "a"]);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_drag_disabled_when_sorted_by_title() {
        let cat = sample();
        let mut dnd = DragController::new();
        let by_title = SortPreference::new(SortField::Title, SortDirection::Asc);
        assert!(!dnd.drag_start("cat", "a", &by_title));
        dnd.drag_over_item("c");
        assert_eq!(dnd.drag_end(&cat, 3), DragOutcome::Ignored);
        assert_eq!(root_ids(&cat), vec!["g1", "a", "b", "c"]);
    }

    #[test]
    fn test_drop_on_group_zone_moves() {
        let cat = sample();
        let mut dnd = DragController::new();
        dnd.drag_start("cat", "b", &SortPreference::default());
        dnd.drag_over_zone(Some("g1"));
        match dnd.drag_end(&cat, 3) {
            DragOutcome::Moved(next) => assert_eq!(group_ids(&next, "g1"), vec!["x", "b"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_pointer_press_needs_movement() {
        let cat = sample();
        let mut dnd = DragController::new();
        assert!(dnd.press("cat", "a", 0, 0, &SortPreference::default()));
        dnd.drag_over_item("c");
        // A click without movement never drops
        assert_eq!(dnd.drag_end(&cat, 3), DragOutcome::Ignored);

        dnd.press("cat", "a", 0, 0, &SortPreference::default());
        assert!(dnd.pointer_move(0, 20));
        assert_eq!(dnd.dragging_id(), Some("a"));
        dnd.drag_over_item("b");
        assert!(matches!(dnd.drag_end(&cat, 3), DragOutcome::Reordered(_)));
    }

    #[test]
    fn test_drop_into_other_category_is_ignored() {
        let cat = sample();
        let mut dnd = DragController::new();
        dnd.drag_start("another", "a", &SortPreference::default());
        dnd.drag_over_item("c");
        assert_eq!(dnd.drag_end(&cat, 3), DragOutcome::Ignored);
    }

    #[test]
    fn test_cross_section_drop_is_ignored() {
        let cat = sample();
        let mut dnd = DragController::new();
        dnd.drag_start("cat", "g1", &SortPreference::default());
        dnd.drag_over_item("a");
        assert_eq!(dnd.drag_end(&cat, 3), DragOutcome::Ignored);
    }
}
