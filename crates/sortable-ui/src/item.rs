//! Per-item position tracking.
//!
//! A [`ListItem`] records where an item rests logically and whether a move
//! transition is in flight for it. The transition notifications
//! ([`complete_transition`](ListItem::complete_transition) and
//! [`interrupt_transition`](ListItem::interrupt_transition)) are the only
//! writers that end a transition; the controller only starts, retargets or
//! force-commits them.

use indexmap::IndexMap;
use sortable_core::alloc::HashMap;
use sortable_core::math::{Rect, Vec2};
use sortable_input::ElementId;

use crate::ports::TransitionHandle;

/// Stable identity of a list item, unaffected by reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Position and animation state of one list item.
#[derive(Debug, Clone)]
pub struct ListItem {
    id: ItemId,
    /// Root element of the item in the host's visual tree.
    element: ElementId,
    /// Position at first layout. Never changes afterwards.
    initial: Vec2,
    /// Logical resting slot.
    current: Vec2,
    /// Destination of the most recent transition.
    backup: Vec2,
    /// In-flight transition, if any. `Some` is what "animating" means.
    transition: Option<TransitionHandle>,
    drag_disabled: bool,
    is_drag_item: bool,
}

impl ListItem {
    /// Create the record from the item's first layout measurement.
    pub fn mounted(id: ItemId, element: ElementId, bounds: Rect) -> Self {
        let position = bounds.position();
        Self {
            id,
            element,
            initial: position,
            current: position,
            backup: position,
            transition: None,
            drag_disabled: false,
            is_drag_item: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn initial_position(&self) -> Vec2 {
        self.initial
    }

    pub fn current_position(&self) -> Vec2 {
        self.current
    }

    pub fn backup_position(&self) -> Vec2 {
        self.backup
    }

    /// Offset from the initial position to the logical slot.
    pub fn translation(&self) -> Vec2 {
        self.current - self.initial
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<TransitionHandle> {
        self.transition
    }

    pub fn is_drag_disabled(&self) -> bool {
        self.drag_disabled
    }

    pub fn is_drag_item(&self) -> bool {
        self.is_drag_item
    }

    /// Whether the item may be returned as a drop target.
    pub fn is_eligible_target(&self) -> bool {
        !self.drag_disabled
    }

    /// The slot a displaced neighbour should move into when filling the gap
    /// this item leaves behind.
    ///
    /// While this item is itself mid-transition its committed destination is
    /// used instead of its possibly stale resting slot, unless it is the
    /// dragged item.
    pub fn fill_slot(&self) -> Vec2 {
        if self.is_animating() && !self.is_drag_item {
            self.backup
        } else {
            self.current
        }
    }

    pub fn set_drag_disabled(&mut self, disabled: bool) {
        self.drag_disabled = disabled;
    }

    pub(crate) fn set_drag_item(&mut self, is_drag_item: bool) {
        self.is_drag_item = is_drag_item;
    }

    /// Mark as the dragged item. An item picked up mid-slide takes its
    /// pending destination as its slot; the slide itself keeps running.
    pub(crate) fn pick_up(&mut self) {
        self.is_drag_item = true;
        if self.is_animating() {
            self.current = self.backup;
        }
    }

    /// Move the logical slot without a transition (the dragged item follows
    /// the pointer, not an animation).
    ///
    /// Also overwrites the pending destination, so a transition still
    /// outstanding from before the drag completes onto this slot.
    pub(crate) fn assign_slot(&mut self, position: Vec2) {
        self.current = position;
        self.backup = position;
    }

    pub(crate) fn begin_transition(&mut self, handle: TransitionHandle, destination: Vec2) {
        self.transition = Some(handle);
        self.backup = destination;
    }

    /// Point the in-flight transition at a new destination.
    pub(crate) fn retarget(&mut self, destination: Vec2) {
        self.backup = destination;
    }

    /// Immediately settle at `position`, dropping any in-flight transition.
    pub(crate) fn commit(&mut self, position: Vec2) {
        self.transition = None;
        self.current = position;
        self.backup = position;
    }

    /// Transition finished normally.
    ///
    /// Returns `false` and changes nothing if `handle` is not the item's
    /// current transition.
    pub fn complete_transition(&mut self, handle: TransitionHandle) -> bool {
        if self.transition != Some(handle) {
            return false;
        }
        self.transition = None;
        if !self.is_drag_item {
            self.current = self.backup;
        }
        true
    }

    /// Transition was destroyed before finishing.
    ///
    /// `measured` is the on-screen position read back from layout; it
    /// becomes the logical slot so state never diverges from what is drawn.
    pub fn interrupt_transition(&mut self, handle: TransitionHandle, measured: Option<Vec2>) {
        if let Some(position) = measured {
            self.current = position;
        }
        if self.transition == Some(handle) {
            self.transition = None;
        }
    }
}

/// All mounted items, in mount order, with a reverse element lookup.
#[derive(Debug, Default)]
pub struct ItemTable {
    items: IndexMap<ItemId, ListItem>,
    by_element: HashMap<ElementId, ItemId>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn get(&self, id: ItemId) -> Option<&ListItem> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ListItem> {
        self.items.get_mut(&id)
    }

    /// Item whose root element is `element`.
    pub fn by_element(&self, element: ElementId) -> Option<&ListItem> {
        self.by_element
            .get(&element)
            .and_then(|id| self.items.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListItem> {
        self.items.values()
    }

    /// Insert a freshly mounted item. Returns `false` if the id is taken.
    pub(crate) fn insert(&mut self, item: ListItem) -> bool {
        if self.items.contains_key(&item.id) {
            return false;
        }
        self.by_element.insert(item.element, item.id);
        self.items.insert(item.id, item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ListItem {
        ListItem::mounted(ItemId(1), ElementId(10), Rect::new(0.0, 50.0, 100.0, 40.0))
    }

    #[test]
    fn test_mount_sets_all_positions() {
        let item = item();
        assert_eq!(item.initial_position(), Vec2::new(0.0, 50.0));
        assert_eq!(item.current_position(), Vec2::new(0.0, 50.0));
        assert_eq!(item.backup_position(), Vec2::new(0.0, 50.0));
        assert!(!item.is_animating());
        assert!(item.is_eligible_target());
    }

    #[test]
    fn test_complete_commits_backup() {
        let mut item = item();
        let handle = TransitionHandle(3);
        item.begin_transition(handle, Vec2::new(0.0, 0.0));
        assert!(item.is_animating());
        assert_eq!(item.current_position(), Vec2::new(0.0, 50.0));

        assert!(item.complete_transition(handle));
        assert!(!item.is_animating());
        assert_eq!(item.current_position(), Vec2::ZERO);
        assert_eq!(item.translation(), Vec2::new(0.0, -50.0));
    }

    #[test]
    fn test_complete_keeps_slot_of_drag_item() {
        let mut item = item();
        let handle = TransitionHandle(1);
        item.begin_transition(handle, Vec2::new(0.0, 100.0));
        item.set_drag_item(true);
        item.assign_slot(Vec2::new(0.0, 150.0));

        assert!(item.complete_transition(handle));
        assert_eq!(item.current_position(), Vec2::new(0.0, 150.0));
    }

    #[test]
    fn test_pick_up_mid_slide_settles_on_destination() {
        let mut item = item();
        let handle = TransitionHandle(4);
        item.begin_transition(handle, Vec2::ZERO);
        item.pick_up();
        assert!(item.is_drag_item());
        assert!(item.is_animating());
        assert_eq!(item.current_position(), Vec2::ZERO);
        assert_eq!(item.fill_slot(), Vec2::ZERO);
    }

    #[test]
    fn test_outstanding_completion_after_drop_keeps_assigned_slot() {
        let mut item = item();
        let handle = TransitionHandle(6);
        item.begin_transition(handle, Vec2::ZERO);
        item.pick_up();
        item.assign_slot(Vec2::new(0.0, 100.0));
        item.set_drag_item(false);

        assert!(item.complete_transition(handle));
        assert_eq!(item.current_position(), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut item = item();
        item.begin_transition(TransitionHandle(2), Vec2::ZERO);
        assert!(!item.complete_transition(TransitionHandle(1)));
        assert!(item.is_animating());
    }

    #[test]
    fn test_interrupt_uses_measured_position() {
        let mut item = item();
        let handle = TransitionHandle(5);
        item.begin_transition(handle, Vec2::ZERO);
        item.interrupt_transition(handle, Some(Vec2::new(0.0, 21.5)));
        assert!(!item.is_animating());
        assert_eq!(item.current_position(), Vec2::new(0.0, 21.5));
    }

    #[test]
    fn test_retarget_updates_backup_only() {
        let mut item = item();
        let handle = TransitionHandle(7);
        item.begin_transition(handle, Vec2::ZERO);
        item.retarget(Vec2::new(0.0, 100.0));
        assert_eq!(item.transition(), Some(handle));
        assert_eq!(item.backup_position(), Vec2::new(0.0, 100.0));
        assert_eq!(item.fill_slot(), Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_fill_slot_of_animating_drag_item_is_current() {
        let mut item = item();
        item.begin_transition(TransitionHandle(1), Vec2::ZERO);
        item.set_drag_item(true);
        assert_eq!(item.fill_slot(), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_table_rejects_duplicate_ids() {
        let mut table = ItemTable::new();
        assert!(table.insert(item()));
        assert!(!table.insert(item()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.by_element(ElementId(10)).map(|i| i.id()), Some(ItemId(1)));
        assert!(table.by_element(ElementId(11)).is_none());
    }
}
