//! Gesture state machine: pointer stream in, drag lifecycle out.
//!
//! ```text
//!            down on item             first qualifying move
//!   Idle ------------------> Pressed ----------------------> Dragging
//!    ^                          |                              |  ^
//!    |        up / cancel       |                              |  | move: follow,
//!    +--------------------------+------------------------------+--+ hit-test, reorder
//! ```
//!
//! A pointer-down while `Pressed` or `Dragging` is ignored, so there is never
//! more than one gesture at a time. Events that resolve to no item are
//! no-ops; nothing here panics or returns an error to the caller.

use sortable_input::{PointerEvent, PointerKind, PointerMerger, RawPointer};

use crate::controller::DragController;
use crate::hit;
use crate::item::ItemId;
use crate::options::DragOptions;
use crate::ports::{DragHost, LayoutMeasure, TransitionHandle};
use crate::session::SessionId;

/// Where the gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down on `item` but has not moved enough to drag.
    Pressed { item: ItemId },
    /// `item` is being dragged in `session`.
    Dragging { session: SessionId, item: ItemId },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// The pressed or dragged item.
    pub fn item(&self) -> Option<ItemId> {
        match self {
            GestureState::Idle => None,
            GestureState::Pressed { item } | GestureState::Dragging { item, .. } => Some(*item),
        }
    }
}

/// Top-level driver for drag-to-reorder on one list.
#[derive(Debug, Default)]
pub struct GestureMachine {
    state: GestureState,
    controller: DragController,
    merger: PointerMerger,
}

impl GestureMachine {
    pub fn new(options: DragOptions) -> Self {
        Self {
            state: GestureState::Idle,
            controller: DragController::new(options),
            merger: PointerMerger::new(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragController {
        &mut self.controller
    }

    /// Feed raw input from any modality; duplicates are filtered first.
    pub fn handle_raw<H>(&mut self, raw: &RawPointer, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        if let Some(event) = self.merger.process(raw) {
            self.handle_event(&event, host);
        }
    }

    /// Feed one event of the logical pointer stream.
    pub fn handle_event<H>(&mut self, event: &PointerEvent, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        let next = match (self.state, event.kind) {
            (GestureState::Idle, PointerKind::Down) => self.on_down(event, host),
            (state, PointerKind::Down) => {
                tracing::trace!("Ignoring pointer down while {:?}", state);
                state
            }
            (GestureState::Idle, _) => GestureState::Idle,
            (GestureState::Pressed { item }, PointerKind::Move) => {
                if self.controller.options().start_rule.starts_drag(event.movement)
                    && let Some(session) = self.controller.begin_drag(host)
                {
                    GestureState::Dragging { session, item }
                } else {
                    GestureState::Pressed { item }
                }
            }
            (state @ GestureState::Dragging { .. }, PointerKind::Move) => {
                self.controller.drag_move(event.movement, host);
                state
            }
            (_, PointerKind::Up | PointerKind::Cancel) => {
                self.controller.end(host);
                GestureState::Idle
            }
        };

        if next != self.state {
            tracing::trace!("Gesture {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    /// Terminate any press or drag, e.g. on focus loss or teardown.
    pub fn abort<H>(&mut self, host: &mut H)
    where
        H: DragHost + ?Sized,
    {
        self.merger.reset();
        if !self.state.is_idle() {
            self.controller.end(host);
            self.state = GestureState::Idle;
        }
    }

    /// Forward a transition completion from the host.
    pub fn on_transition_complete(&mut self, handle: TransitionHandle) {
        self.controller.on_transition_complete(handle);
    }

    /// Forward a transition interruption from the host.
    pub fn on_transition_interrupted<H>(&mut self, handle: TransitionHandle, host: &H)
    where
        H: LayoutMeasure + ?Sized,
    {
        self.controller.on_transition_interrupted(handle, host);
    }

    fn on_down<H>(&mut self, event: &PointerEvent, host: &mut H) -> GestureState
    where
        H: DragHost + ?Sized,
    {
        let Some(element) = event.target else {
            return GestureState::Idle;
        };
        let Some(item) = hit::closest_item(&*host, self.controller.items(), element).map(|i| i.id())
        else {
            return GestureState::Idle;
        };

        match self.controller.press(item) {
            Some(_) => GestureState::Pressed { item },
            None => GestureState::Idle,
        }
    }
}
