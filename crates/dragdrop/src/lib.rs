//! DragDrop Utilities
//!
//! Drag-and-drop gesture state for pointer-driven UIs.
//! Uses a movement threshold to distinguish click from drag.
//!
//! The session only tracks *what* is being dragged and *where* it would
//! land. Interpreting the drop is left to the caller.

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget<Id> {
    /// Drop on another item (reorder against it)
    Item(Id),
    /// Drop on a container zone (`None` = root container)
    Zone(Option<Id>),
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state for a single pointer
#[derive(Clone, Debug)]
pub struct DragSession<Id> {
    dragging: Option<Id>,
    drop_target: Option<DropTarget<Id>>,
    /// Pending item id (pressed but not yet dragging)
    pending: Option<Id>,
    /// Start position for movement detection
    start: (i32, i32),
    just_ended: bool,
}

impl<Id> Default for DragSession<Id> {
    fn default() -> Self {
        Self {
            dragging: None,
            drop_target: None,
            pending: None,
            start: (0, 0),
            just_ended: false,
        }
    }
}

impl<Id: Clone + PartialEq + std::fmt::Debug> DragSession<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending drag with its start position
    pub fn press(&mut self, id: Id, x: i32, y: i32) {
        self.pending = Some(id);
        self.start = (x, y);
        self.just_ended = false;
    }

    /// Pointer moved; starts dragging once moved beyond the threshold.
    ///
    /// Returns true if this call started the drag.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        if self.dragging.is_some() {
            return false;
        }
        let Some(pending) = self.pending.clone() else {
            return false;
        };
        let dx = (x - self.start.0).abs();
        let dy = (y - self.start.1).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            log::debug!("drag started for {:?}", pending);
            self.dragging = Some(pending);
            return true;
        }
        false
    }

    /// Start dragging immediately (keyboard sensor, tests)
    pub fn start(&mut self, id: Id) {
        self.pending = Some(id.clone());
        self.dragging = Some(id);
        self.drop_target = None;
        self.just_ended = false;
    }

    /// Pointer entered an item
    pub fn enter_item(&mut self, id: Id) {
        // Don't allow dropping on self
        if let Some(dragging) = &self.dragging {
            if *dragging != id {
                self.drop_target = Some(DropTarget::Item(id));
            }
        }
    }

    /// Pointer entered a container zone
    pub fn enter_zone(&mut self, container: Option<Id>) {
        if self.dragging.is_some() {
            self.drop_target = Some(DropTarget::Zone(container));
        }
    }

    pub fn leave(&mut self) {
        if self.dragging.is_some() {
            self.drop_target = None;
        }
    }

    /// Pointer released.
    ///
    /// Yields the dragged id and its target only if a drag was actually in
    /// progress and a target was hovered; a plain click yields nothing.
    pub fn release(&mut self) -> Option<(Id, DropTarget<Id>)> {
        let dragging = self.dragging.take();
        let target = self.drop_target.take();
        self.end();
        match (dragging, target) {
            (Some(dragged), Some(target)) => Some((dragged, target)),
            _ => None,
        }
    }

    /// Abort without dropping
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.drop_target = None;
        self.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn dragging_id(&self) -> Option<&Id> {
        self.dragging.as_ref()
    }

    pub fn drop_target(&self) -> Option<&DropTarget<Id>> {
        self.drop_target.as_ref()
    }

    /// True right after a drag ended, until the next press.
    /// Lets a click handler ignore the click that follows a drop.
    pub fn drag_just_ended(&self) -> bool {
        self.just_ended
    }

    fn end(&mut self) {
        self.pending = None;
        self.just_ended = true;
    }
}
