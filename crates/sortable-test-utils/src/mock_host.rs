//! Mock host implementation for testing.
//!
//! This module provides a mock host that records every port call instead of
//! driving a real visual tree. Useful for testing gesture handling and
//! reordering without a UI toolkit.

use std::time::Duration;

use parking_lot::Mutex;
use sortable_core::alloc::{HashMap, HashSet};
use sortable_core::math::{Rect, Vec2};
use sortable_input::ElementId;
use sortable_ui::{
    DragController, DragResult, ItemId, LayoutMeasure, ProxyHandle, ProxyHost, SpatialQuery,
    TransitionError, TransitionHandle, TransitionPort, TransitionResult,
};

/// Recorded port call for verification.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Measure {
        item: ItemId,
    },
    PlayMove {
        item: ItemId,
        from: Vec2,
        to: Vec2,
        handle: TransitionHandle,
    },
    Redirect {
        handle: TransitionHandle,
        to: Vec2,
    },
    Place {
        item: ItemId,
        position: Vec2,
    },
    PressFeedback {
        item: ItemId,
        duration: Duration,
    },
    SpawnProxy {
        item: ItemId,
        bounds: Rect,
        proxy: ProxyHandle,
    },
    MoveProxy {
        proxy: ProxyHandle,
        bounds: Rect,
    },
    DestroyProxy {
        proxy: ProxyHandle,
    },
}

#[derive(Debug, Clone)]
struct MockElement {
    id: ElementId,
    parent: Option<ElementId>,
    /// Bounds at mount time.
    rect: Rect,
    /// Item this element belongs to; it moves with the item.
    owner: Option<ItemId>,
}

#[derive(Debug, Clone, Copy)]
struct MockItem {
    root: ElementId,
    label: Option<ElementId>,
    initial: Rect,
    rendered: Vec2,
}

/// Mock host for testing.
///
/// Elements are painted in insertion order, so the most recently added
/// element under a point is the topmost one.
///
/// # Example
///
/// ```rust
/// use sortable_test_utils::MockHost;
/// use sortable_ui::{ItemId, SpatialQuery};
/// use sortable_core::math::Vec2;
///
/// let host = MockHost::vertical_list(3, 40.0, 10.0);
///
/// // Point inside the second item's label
/// let hit = host.element_at(Vec2::new(50.0, 70.0));
/// assert_eq!(hit, host.label_element(ItemId(1)));
/// ```
pub struct MockHost {
    /// Recorded calls for verification
    calls: Mutex<Vec<HostCall>>,

    elements: Vec<MockElement>,
    order: Vec<ItemId>,
    items: HashMap<ItemId, MockItem>,

    measure_overrides: HashMap<ItemId, Rect>,
    unmeasurable: HashSet<ItemId>,

    /// Transitions started but not yet completed or interrupted
    outstanding: HashMap<TransitionHandle, ItemId>,
    max_outstanding_per_item: usize,

    proxies: HashMap<ProxyHandle, Rect>,
    spawned_proxies: usize,
    destroyed_proxies: usize,
    invalid_destroys: usize,

    fail_play_move: bool,
    fail_redirect: bool,

    /// Counters for generating IDs
    next_element: u64,
    next_transition: u64,
    next_proxy: u64,
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            elements: Vec::new(),
            order: Vec::new(),
            items: HashMap::new(),
            measure_overrides: HashMap::new(),
            unmeasurable: HashSet::new(),
            outstanding: HashMap::new(),
            max_outstanding_per_item: 0,
            proxies: HashMap::new(),
            spawned_proxies: 0,
            destroyed_proxies: 0,
            invalid_destroys: 0,
            fail_play_move: false,
            fail_redirect: false,
            next_element: 1,
            next_transition: 0,
            next_proxy: 0,
        }
    }

    /// A container with `count` items stacked vertically.
    ///
    /// Item `i` is `ItemId(i)` at `y = i * (height + spacing)`, 100 wide, with
    /// a label child inset by 10 on every side.
    pub fn vertical_list(count: u64, height: f32, spacing: f32) -> Self {
        let mut host = Self::new();
        let stride = height + spacing;
        let container = host.add_element(None, Rect::new(0.0, 0.0, 100.0, count as f32 * stride));
        for i in 0..count {
            let rect = Rect::new(0.0, i as f32 * stride, 100.0, height);
            host.add_item(ItemId(i), Some(container), rect);
        }
        host
    }

    /// Add a plain element. It moves with its parent's item, if any.
    pub fn add_element(&mut self, parent: Option<ElementId>, rect: Rect) -> ElementId {
        let owner = parent.and_then(|p| self.element(p)).and_then(|e| e.owner);
        self.push_element(parent, rect, owner)
    }

    /// Add an item root element with a label child. Returns the root.
    pub fn add_item(&mut self, item: ItemId, parent: Option<ElementId>, rect: Rect) -> ElementId {
        let root = self.push_element(parent, rect, Some(item));
        let label_rect = Rect::new(
            rect.x + 10.0,
            rect.y + 10.0,
            (rect.width - 20.0).max(0.0),
            (rect.height - 20.0).max(0.0),
        );
        let label = self.push_element(Some(root), label_rect, Some(item));

        self.order.push(item);
        self.items.insert(
            item,
            MockItem {
                root,
                label: Some(label),
                initial: rect,
                rendered: rect.position(),
            },
        );
        root
    }

    /// Mount every item, in insertion order, on `controller`.
    pub fn mount_all(&self, controller: &mut DragController) -> DragResult<()> {
        for id in &self.order {
            if let Some(item) = self.items.get(id) {
                controller.mount_item(*id, item.root, self)?;
            }
        }
        Ok(())
    }

    fn push_element(
        &mut self,
        parent: Option<ElementId>,
        rect: Rect,
        owner: Option<ItemId>,
    ) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.elements.push(MockElement {
            id,
            parent,
            rect,
            owner,
        });
        id
    }

    fn element(&self, id: ElementId) -> Option<&MockElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn absolute_bounds(&self, element: &MockElement) -> Rect {
        let offset = element
            .owner
            .and_then(|owner| self.items.get(&owner))
            .map_or(Vec2::ZERO, |item| item.rendered - item.initial.position());
        element.rect.translate(offset)
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }

    fn set_rendered(&mut self, item: ItemId, position: Vec2) {
        if let Some(mock) = self.items.get_mut(&item) {
            mock.rendered = position;
        }
    }

    fn outstanding_count(&self, item: ItemId) -> usize {
        self.outstanding.values().filter(|&&i| i == item).count()
    }

    // ---------------------------------------------------------------------
    // Scene queries
    // ---------------------------------------------------------------------

    pub fn item_element(&self, item: ItemId) -> Option<ElementId> {
        self.items.get(&item).map(|i| i.root)
    }

    pub fn label_element(&self, item: ItemId) -> Option<ElementId> {
        self.items.get(&item).and_then(|i| i.label)
    }

    /// Where `item` is currently drawn.
    pub fn rendered_position(&self, item: ItemId) -> Option<Vec2> {
        self.items.get(&item).map(|i| i.rendered)
    }

    /// Current bounds of a live proxy.
    pub fn proxy_bounds(&self, proxy: ProxyHandle) -> Option<Rect> {
        self.proxies.get(&proxy).copied()
    }

    // ---------------------------------------------------------------------
    // Scripting
    // ---------------------------------------------------------------------

    /// Make `measure` return `bounds` for `item`.
    pub fn set_measure_override(&mut self, item: ItemId, bounds: Rect) {
        self.measure_overrides.insert(item, bounds);
    }

    /// Make `measure` return `None` for `item`.
    pub fn set_unmeasurable(&mut self, item: ItemId) {
        self.unmeasurable.insert(item);
    }

    /// Make every `play_move` fail.
    pub fn set_fail_play_move(&mut self, fail: bool) {
        self.fail_play_move = fail;
    }

    /// Make every `redirect` fail.
    pub fn set_fail_redirect(&mut self, fail: bool) {
        self.fail_redirect = fail;
    }

    /// Finish an outstanding transition. Returns `false` if it was not
    /// outstanding.
    pub fn complete(&mut self, handle: TransitionHandle) -> bool {
        self.outstanding.remove(&handle).is_some()
    }

    /// Finish every outstanding transition, returning their handles in
    /// issue order.
    pub fn complete_all(&mut self) -> Vec<TransitionHandle> {
        let mut handles: Vec<_> = self.outstanding.drain().map(|(h, _)| h).collect();
        handles.sort();
        handles
    }

    /// Cut an outstanding transition short with the item drawn at `at`.
    pub fn interrupt(&mut self, handle: TransitionHandle, at: Vec2) -> bool {
        let Some(item) = self.outstanding.remove(&handle) else {
            return false;
        };
        self.set_rendered(item, at);
        true
    }

    // ---------------------------------------------------------------------
    // Verification
    // ---------------------------------------------------------------------

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn count_play_moves(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::PlayMove { .. }))
            .count()
    }

    pub fn count_redirects(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::Redirect { .. }))
            .count()
    }

    pub fn count_places(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::Place { .. }))
            .count()
    }

    pub fn count_measures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::Measure { .. }))
            .count()
    }

    pub fn count_press_feedback(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::PressFeedback { .. }))
            .count()
    }

    /// Items that received a `play_move`, in call order.
    pub fn moved_items(&self) -> Vec<ItemId> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::PlayMove { item, .. } => Some(*item),
                _ => None,
            })
            .collect()
    }

    /// Outstanding transition of `item`, if exactly one exists.
    pub fn handle_for(&self, item: ItemId) -> Option<TransitionHandle> {
        let mut handles = self
            .outstanding
            .iter()
            .filter(|&(_, &i)| i == item)
            .map(|(h, _)| *h);
        let first = handles.next()?;
        handles.next().is_none().then_some(first)
    }

    pub fn outstanding_transitions(&self) -> usize {
        self.outstanding.len()
    }

    /// Highest number of simultaneous transitions ever seen on one item.
    pub fn max_outstanding_per_item(&self) -> usize {
        self.max_outstanding_per_item
    }

    pub fn live_proxies(&self) -> usize {
        self.proxies.len()
    }

    pub fn spawned_proxies(&self) -> usize {
        self.spawned_proxies
    }

    pub fn destroyed_proxies(&self) -> usize {
        self.destroyed_proxies
    }

    /// `destroy_proxy` calls for handles that were not live.
    pub fn invalid_destroys(&self) -> usize {
        self.invalid_destroys
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialQuery for MockHost {
    fn element_at(&self, point: Vec2) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|element| self.absolute_bounds(element).contains(point))
            .map(|element| element.id)
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.element(element).and_then(|e| e.parent)
    }
}

impl LayoutMeasure for MockHost {
    fn measure(&self, item: ItemId) -> Option<Rect> {
        self.record(HostCall::Measure { item });
        if self.unmeasurable.contains(&item) {
            return None;
        }
        if let Some(bounds) = self.measure_overrides.get(&item) {
            return Some(*bounds);
        }
        self.items
            .get(&item)
            .map(|mock| mock.initial.with_position(mock.rendered))
    }
}

impl TransitionPort for MockHost {
    fn play_move(
        &mut self,
        item: ItemId,
        from: Vec2,
        to: Vec2,
    ) -> TransitionResult<TransitionHandle> {
        if self.fail_play_move {
            return Err(TransitionError::Unavailable("mock play_move failure".to_string()));
        }
        let handle = TransitionHandle(self.next_transition);
        self.next_transition += 1;
        self.record(HostCall::PlayMove {
            item,
            from,
            to,
            handle,
        });

        self.outstanding.insert(handle, item);
        self.max_outstanding_per_item = self
            .max_outstanding_per_item
            .max(self.outstanding_count(item));
        self.set_rendered(item, to);
        Ok(handle)
    }

    fn redirect(&mut self, handle: TransitionHandle, to: Vec2) -> TransitionResult<()> {
        if self.fail_redirect {
            return Err(TransitionError::Unavailable("mock redirect failure".to_string()));
        }
        let item = *self
            .outstanding
            .get(&handle)
            .ok_or(TransitionError::UnknownHandle(handle))?;
        self.record(HostCall::Redirect { handle, to });
        self.set_rendered(item, to);
        Ok(())
    }

    fn place(&mut self, item: ItemId, position: Vec2) {
        self.record(HostCall::Place { item, position });
        self.set_rendered(item, position);
    }

    fn play_press_feedback(&mut self, item: ItemId, duration: Duration) {
        self.record(HostCall::PressFeedback { item, duration });
    }
}

impl ProxyHost for MockHost {
    fn spawn_proxy(&mut self, item: ItemId, bounds: Rect) -> ProxyHandle {
        let proxy = ProxyHandle(self.next_proxy);
        self.next_proxy += 1;
        self.record(HostCall::SpawnProxy {
            item,
            bounds,
            proxy,
        });
        self.proxies.insert(proxy, bounds);
        self.spawned_proxies += 1;
        proxy
    }

    fn move_proxy(&mut self, proxy: ProxyHandle, bounds: Rect) {
        self.record(HostCall::MoveProxy { proxy, bounds });
        if let Some(current) = self.proxies.get_mut(&proxy) {
            *current = bounds;
        }
    }

    fn destroy_proxy(&mut self, proxy: ProxyHandle) {
        self.record(HostCall::DestroyProxy { proxy });
        if self.proxies.remove(&proxy).is_some() {
            self.destroyed_proxies += 1;
        } else {
            self.invalid_destroys += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_element_wins() {
        let host = MockHost::vertical_list(2, 40.0, 10.0);
        assert_eq!(
            host.element_at(Vec2::new(50.0, 20.0)),
            host.label_element(ItemId(0))
        );
        assert_eq!(
            host.element_at(Vec2::new(2.0, 2.0)),
            host.item_element(ItemId(0))
        );
        // Gap between items hits the container
        assert_eq!(host.element_at(Vec2::new(50.0, 45.0)), Some(ElementId(1)));
        assert_eq!(host.element_at(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_elements_follow_rendered_item() {
        let mut host = MockHost::vertical_list(2, 40.0, 10.0);
        host.place(ItemId(0), Vec2::new(0.0, 200.0));
        assert_eq!(
            host.element_at(Vec2::new(50.0, 220.0)),
            host.label_element(ItemId(0))
        );
        assert_eq!(
            host.measure(ItemId(0)),
            Some(Rect::new(0.0, 200.0, 100.0, 40.0))
        );
    }

    #[test]
    fn test_tracks_outstanding_transitions() {
        let mut host = MockHost::vertical_list(1, 40.0, 10.0);
        let first = host.play_move(ItemId(0), Vec2::ZERO, Vec2::Y).unwrap();
        let second = host.play_move(ItemId(0), Vec2::Y, Vec2::ZERO).unwrap();
        assert_eq!(host.max_outstanding_per_item(), 2);
        assert_eq!(host.handle_for(ItemId(0)), None);

        assert!(host.complete(first));
        assert_eq!(host.handle_for(ItemId(0)), Some(second));
        assert!(!host.complete(first));
    }

    #[test]
    fn test_counts_proxy_lifecycle() {
        let mut host = MockHost::new();
        let proxy = host.spawn_proxy(ItemId(0), Rect::ZERO);
        assert_eq!(host.live_proxies(), 1);

        host.destroy_proxy(proxy);
        host.destroy_proxy(proxy);
        assert_eq!(host.destroyed_proxies(), 1);
        assert_eq!(host.invalid_destroys(), 1);
        assert_eq!(host.live_proxies(), 0);
    }
}
