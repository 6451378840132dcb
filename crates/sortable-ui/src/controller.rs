//! Drag session controller.
//!
//! Owns the list state (items and order), the single optional drag session
//! and the bookkeeping that ties transition handles back to items. The
//! [`GestureMachine`](crate::GestureMachine) decides *when* to press, start,
//! move and end; this type decides *what* each of those does.

use sortable_core::alloc::HashMap;
use sortable_core::math::{Rect, Vec2};
use sortable_core::profiling::profile_function;
use sortable_input::ElementId;

use crate::error::{DragError, DragResult};
use crate::hit;
use crate::item::{ItemId, ItemTable, ListItem};
use crate::list::OrderedList;
use crate::options::DragOptions;
use crate::ports::{DragHost, LayoutMeasure, ProxyHost, TransitionHandle, TransitionPort};
use crate::reorder::{self, MoveCommand, ReorderPlan};
use crate::session::{DragProxy, DragSession, SessionId};

/// Record of one reorder performed during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderEvent {
    pub item: ItemId,
    pub from: usize,
    pub to: usize,
}

/// Orchestrates drag sessions over one list.
#[derive(Debug)]
pub struct DragController {
    options: DragOptions,
    items: ItemTable,
    order: OrderedList,
    session: Option<DragSession>,
    next_session: u64,
    /// In-flight transitions, keyed by the handle the port returned.
    transitions: HashMap<TransitionHandle, ItemId>,
    events: Vec<ReorderEvent>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}

impl DragController {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            items: ItemTable::new(),
            order: OrderedList::new(),
            session: None,
            next_session: 0,
            transitions: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DragOptions) {
        self.options = options;
    }

    /// Register an item whose visual has just been laid out for the first
    /// time. Its measured position becomes its initial position for good.
    pub fn mount_item<H>(&mut self, id: ItemId, element: ElementId, host: &H) -> DragResult<()>
    where
        H: LayoutMeasure + ?Sized,
    {
        if self.items.contains(id) {
            return Err(DragError::DuplicateItem(id));
        }
        let bounds = host.measure(id).ok_or(DragError::MeasureFailed(id))?;

        self.items.insert(ListItem::mounted(id, element, bounds));
        self.order.push(id);
        tracing::trace!("Mounted {:?} at {:?}", id, bounds.position());
        Ok(())
    }

    /// Exclude (or re-include) an item as a drop target.
    pub fn set_drag_disabled(&mut self, id: ItemId, disabled: bool) -> DragResult<()> {
        let item = self.items.get_mut(id).ok_or(DragError::UnknownItem(id))?;
        item.set_drag_disabled(disabled);
        Ok(())
    }

    pub fn item(&self, id: ItemId) -> Option<&ListItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> &ItemTable {
        &self.items
    }

    pub fn order(&self) -> &OrderedList {
        &self.order
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a drag (not just a press) is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_active)
    }

    /// Number of transitions the controller is waiting on.
    pub fn transitions_in_flight(&self) -> usize {
        self.transitions.len()
    }

    /// Take the reorders recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<ReorderEvent> {
        std::mem::take(&mut self.events)
    }

    /// A move transition finished.
    pub fn on_transition_complete(&mut self, handle: TransitionHandle) {
        let Some(id) = self.transitions.remove(&handle) else {
            tracing::trace!("Ignoring completion of untracked {:?}", handle);
            return;
        };
        if let Some(item) = self.items.get_mut(id) {
            item.complete_transition(handle);
        }
    }

    /// A move transition was destroyed before it finished.
    pub fn on_transition_interrupted<H>(&mut self, handle: TransitionHandle, host: &H)
    where
        H: LayoutMeasure + ?Sized,
    {
        let Some(id) = self.transitions.remove(&handle) else {
            tracing::trace!("Ignoring interruption of untracked {:?}", handle);
            return;
        };
        let measured = host.measure(id).map(|bounds| bounds.position());
        if measured.is_none() {
            tracing::warn!("Could not re-measure {:?} after interrupted transition", id);
        }
        if let Some(item) = self.items.get_mut(id) {
            item.interrupt_transition(handle, measured);
        }
    }

    /// Open a pending session on `item`. Fails if a session already exists
    /// or the item is unknown.
    pub(crate) fn press(&mut self, item: ItemId) -> Option<SessionId> {
        if self.session.is_some() {
            return None;
        }
        self.items.get_mut(item)?.pick_up();

        let id = SessionId(self.next_session);
        self.next_session += 1;
        self.session = Some(DragSession::pending(id, item));
        tracing::trace!("Pressed {:?}", item);
        Some(id)
    }

    /// Turn the pending session into a drag by spawning the proxy.
    pub(crate) fn begin_drag<H>(&mut self, host: &mut H) -> Option<SessionId>
    where
        H: DragHost + ?Sized,
    {
        let session = self.session.as_mut()?;
        if session.is_active() {
            return Some(session.id());
        }

        let dragged = session.dragged();
        let bounds = host.measure(dragged).unwrap_or_else(|| {
            tracing::warn!("Could not measure {:?}; proxy starts at its slot", dragged);
            let slot = self
                .items
                .get(dragged)
                .map_or(Vec2::ZERO, ListItem::current_position);
            Rect::from_pos_size(slot, Vec2::ZERO)
        });

        session.activate(DragProxy::spawn(host, dragged, bounds));
        if self.options.press_feedback {
            host.play_press_feedback(dragged, self.options.press_feedback_duration());
        }
        tracing::debug!("Drag started on {:?}", dragged);
        Some(session.id())
    }

    /// Follow the pointer and reorder if the proxy now sits over another item.
    pub(crate) fn drag_move<H>(&mut self, movement: Vec2, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        profile_function!();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let dragged = session.dragged();
        let Some(proxy) = session.proxy_mut() else {
            return;
        };
        proxy.translate(host, movement);
        let bounds = proxy.bounds();

        let Some(target) = hit::resolve_target(&*host, &self.items, bounds, dragged) else {
            return;
        };
        if self.items.get(target).is_none_or(ListItem::is_animating) {
            tracing::trace!("Target {:?} is still animating", target);
            return;
        }
        let (Some(drag_index), Some(target_index)) =
            (self.order.index_of(dragged), self.order.index_of(target))
        else {
            return;
        };

        match reorder::reorder(&mut self.order, &mut self.items, drag_index, target_index) {
            Ok(plan) => self.apply_plan(plan, host),
            Err(err) => tracing::warn!("Reorder rejected: {}", err),
        }
    }

    /// Close the session, if any. Returns `true` if one was closed.
    pub(crate) fn end<H>(&mut self, host: &mut H) -> bool
    where
        H: ProxyHost + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return false;
        };
        if let Some(item) = self.items.get_mut(session.dragged()) {
            item.set_drag_item(false);
        }
        tracing::debug!(
            "Drag session {:?} on {:?} ended",
            session.id(),
            session.dragged()
        );
        session.close(host);
        true
    }

    fn apply_plan<H>(&mut self, plan: ReorderPlan, host: &mut H)
    where
        H: TransitionPort + ?Sized,
    {
        host.place(plan.dragged, plan.drag_destination);
        for command in &plan.moves {
            self.issue_move(*command, host);
        }
        self.events.push(ReorderEvent {
            item: plan.dragged,
            from: plan.from_index,
            to: plan.to_index,
        });
    }

    /// Send one move command to the port, keeping at most one transition per
    /// item in flight.
    fn issue_move<H>(&mut self, command: MoveCommand, host: &mut H)
    where
        H: TransitionPort + ?Sized,
    {
        let MoveCommand { item: id, destination } = command;
        let Some(item) = self.items.get_mut(id) else {
            return;
        };

        if let Some(handle) = item.transition() {
            match host.redirect(handle, destination) {
                Ok(()) => item.retarget(destination),
                Err(err) => {
                    tracing::warn!("Redirect of {:?} failed: {}; placing directly", id, err);
                    self.transitions.remove(&handle);
                    host.place(id, destination);
                    item.commit(destination);
                }
            }
            return;
        }

        match host.play_move(id, item.current_position(), destination) {
            Ok(handle) => {
                item.begin_transition(handle, destination);
                self.transitions.insert(handle, id);
            }
            Err(err) => {
                tracing::warn!("Move of {:?} failed to start: {}; placing directly", id, err);
                host.place(id, destination);
                item.commit(destination);
            }
        }
    }
}
