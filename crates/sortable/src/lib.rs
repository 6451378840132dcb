//! Sortable - pointer-driven drag-to-reorder
//!
//! Sortable lets a user press an item in a list, drag a floating copy of it
//! over its siblings, and watch the list reorder live with animated
//! displacement:
//!
//! - **Input**: merges mouse, touch and pen events into one pointer stream
//! - **Gesture**: idle, pressed and dragging states with a single active drag
//! - **Reorder**: fill-from-neighbour displacement with overlapping transitions
//! - **Ports**: hit testing, layout, transitions and the proxy stay with the host
//!
//! # Quick Start
//!
//! ```ignore
//! use sortable::prelude::*;
//!
//! sortable::init(Config::default());
//!
//! let mut list = GestureMachine::new(DragOptions::default().with_press_feedback(true));
//! for (id, element) in items {
//!     list.controller_mut().mount_item(id, element, &host)?;
//! }
//!
//! // Per input event
//! list.handle_raw(&raw, &mut host);
//!
//! // Per frame
//! for event in host.transitions.update(dt) {
//!     match event {
//!         TransitionEvent::Completed(handle) => list.on_transition_complete(handle),
//!         TransitionEvent::Interrupted(handle) => list.on_transition_interrupted(handle, &host),
//!     }
//! }
//! ```

pub use sortable_core as core;
pub use sortable_core::math;
pub use sortable_input as input;
pub use sortable_ui as ui;

pub use sortable_core::{Config, ProfilingMode};

/// Install logging and profiling as described by `config`.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(config: Config) {
    config.apply();
    tracing::info!(
        "Sortable {} initialized (profiling: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.profiling
    );
}

/// Commonly used types.
pub mod prelude {
    pub use sortable_core::math::{Rect, Vec2};
    pub use sortable_core::{Config, ProfilingMode};
    pub use sortable_input::{
        ElementId, Modality, PointerEvent, PointerKind, PointerMerger, RawPointer,
    };
    pub use sortable_ui::{
        DragController, DragError, DragHost, DragOptions, DragStartRule, GestureMachine,
        GestureState, ItemId, LayoutMeasure, ProxyHandle, ProxyHost, ReorderEvent, SpatialQuery,
        TransitionError, TransitionEvent, TransitionHandle, TransitionPort, TransitionResult,
        TweenTransitions,
    };
}
