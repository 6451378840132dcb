//! Sortable UI - drag-to-reorder for lists of visual items
//!
//! This crate turns a pointer event stream into live list reordering:
//! - Gesture state machine (idle, pressed, dragging)
//! - Hit testing of the drag proxy against sibling items
//! - Reorder engine computing the new order and displacement moves
//! - Per-item position tracking across overlapping transitions
//!
//! Rendering, layout and animation stay with the host, reached through the
//! traits in [`ports`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sortable_ui::{DragOptions, GestureMachine, ItemId};
//!
//! let mut list = GestureMachine::new(DragOptions::default());
//! for (id, element) in mounted_items {
//!     list.controller_mut().mount_item(id, element, &host)?;
//! }
//!
//! // In the event loop:
//! // list.handle_raw(&raw_pointer, &mut host);
//! // for event in host.transitions.update(dt) { ... feed back ... }
//! ```

pub mod animation;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod hit;
pub mod item;
pub mod list;
pub mod options;
pub mod ports;
pub mod reorder;
pub mod session;

pub use animation::{TransitionEvent, TweenTransitions};
pub use controller::{DragController, ReorderEvent};
pub use error::{
    DragError, DragResult, ReorderError, ReorderResult, TransitionError, TransitionResult,
};
pub use gesture::{GestureMachine, GestureState};
pub use item::{ItemId, ItemTable, ListItem};
pub use list::OrderedList;
pub use options::{DragOptions, DragStartRule};
pub use ports::{
    DragHost, LayoutMeasure, ProxyHandle, ProxyHost, SpatialQuery, TransitionHandle,
    TransitionPort,
};
pub use reorder::{MoveCommand, ReorderPlan};
pub use session::{DragProxy, DragSession, SessionId};
