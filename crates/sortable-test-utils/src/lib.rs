//! Test utilities for Sortable.
//!
//! This crate provides a scriptable host for exercising the drag machinery
//! without a real UI toolkit.
//!
//! # Overview
//!
//! - [`MockHost`] - Implements every port trait over an in-memory element tree
//! - [`HostCall`] - Record of each port call, for assertions
//!
//! # Example
//!
//! ```rust
//! use sortable_input::PointerEvent;
//! use sortable_test_utils::MockHost;
//! use sortable_ui::{DragOptions, GestureMachine, ItemId};
//! use sortable_core::math::Vec2;
//!
//! let mut host = MockHost::vertical_list(4, 40.0, 10.0);
//! let mut machine = GestureMachine::new(DragOptions::default());
//! host.mount_all(machine.controller_mut()).unwrap();
//!
//! let label = host.label_element(ItemId(0)).unwrap();
//! machine.handle_event(&PointerEvent::down(label), &mut host);
//! machine.handle_event(&PointerEvent::moved(Vec2::new(1.0, 1.0)), &mut host);
//! machine.handle_event(&PointerEvent::moved(Vec2::new(0.0, 100.0)), &mut host);
//! machine.handle_event(&PointerEvent::up(), &mut host);
//!
//! assert_eq!(host.live_proxies(), 0);
//! ```
//!
//! # Design
//!
//! The mock renders every move instantly at its destination while keeping
//! the transition outstanding until the test completes or interrupts it.
//! That keeps hit testing deterministic while still letting tests observe
//! overlapping transitions.
//!
//! `measure` takes `&self`, so the call log sits behind a `Mutex` the same way
//! for every port method.

mod mock_host;

pub use mock_host::*;
