//! Interfaces the drag machinery consumes from its host.
//!
//! The host is whatever owns the real visual tree: a retained-mode UI, a
//! browser binding, a test double. It implements four narrow traits and gets
//! [`DragHost`] for free through the blanket impl.
//!
//! Everything the core needs from the outside world is a rectangle, an id or
//! a notification; it never touches host widgets directly.

use std::time::Duration;

use sortable_core::math::{Rect, Vec2};
use sortable_input::ElementId;

use crate::error::TransitionResult;
use crate::item::ItemId;

/// Opaque handle to an in-flight move transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionHandle(pub u64);

/// Opaque handle to the floating drag proxy visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProxyHandle(pub u64);

/// Hit testing against the rendered visual tree.
pub trait SpatialQuery {
    /// Topmost element rendered at `point`.
    fn element_at(&self, point: Vec2) -> Option<ElementId>;

    /// Parent of `element` in the visual tree.
    fn parent_of(&self, element: ElementId) -> Option<ElementId>;
}

/// Read-back of rendered geometry.
pub trait LayoutMeasure {
    /// Current on-screen bounds of an item, including any in-progress
    /// transition offset.
    fn measure(&self, item: ItemId) -> Option<Rect>;
}

/// Plays positional move transitions.
///
/// Completion and interruption are reported back by the host through
/// [`GestureMachine::on_transition_complete`](crate::GestureMachine::on_transition_complete)
/// and [`GestureMachine::on_transition_interrupted`](crate::GestureMachine::on_transition_interrupted)
/// with the handle returned here.
pub trait TransitionPort {
    /// Start moving `item` from `from` to `to`.
    fn play_move(&mut self, item: ItemId, from: Vec2, to: Vec2)
    -> TransitionResult<TransitionHandle>;

    /// Point an in-flight transition at a new destination. The handle stays
    /// valid and no completion is reported for the old destination.
    fn redirect(&mut self, handle: TransitionHandle, to: Vec2) -> TransitionResult<()>;

    /// Snap `item` to `position` without animating.
    fn place(&mut self, item: ItemId, position: Vec2);

    /// Optional pulse played on the dragged item when a drag starts.
    fn play_press_feedback(&mut self, item: ItemId, duration: Duration) {
        let _ = (item, duration);
    }
}

/// Creates and drives the floating drag proxy.
pub trait ProxyHost {
    /// Clone `item`'s visual, detach it from layout and show it at `bounds`.
    fn spawn_proxy(&mut self, item: ItemId, bounds: Rect) -> ProxyHandle;

    fn move_proxy(&mut self, proxy: ProxyHandle, bounds: Rect);

    fn destroy_proxy(&mut self, proxy: ProxyHandle);
}

/// Everything the drag controller needs from its host.
pub trait DragHost: SpatialQuery + LayoutMeasure + TransitionPort + ProxyHost {}

impl<T> DragHost for T where T: SpatialQuery + LayoutMeasure + TransitionPort + ProxyHost + ?Sized {}
