//! Property-based invariant tests for drag reordering.
//!
//! Arbitrary drags over a vertical list, with transitions completing at
//! arbitrary points, must keep:
//!
//! 1. The order a permutation of the mounted items
//! 2. At most one outstanding transition per item
//! 3. Controller and host agreeing on in-flight transitions
//! 4. Every item settling in the slot of its final index
//! 5. The reported reorder events replaying to the final order
//! 6. Exactly one proxy spawned and destroyed per drag
//! 7. Back-to-back drags, picked up while earlier slides are still
//!    running, settling with every slot where its item is drawn

use proptest::prelude::*;
use sortable_core::math::Vec2;
use sortable_input::PointerEvent;
use sortable_test_utils::MockHost;
use sortable_ui::{DragOptions, GestureMachine, ItemId};

const HEIGHT: f32 = 40.0;
const SPACING: f32 = 10.0;

// ── Strategies ──────────────────────────────────────────────────────────

/// One pointer move, optionally followed by the host finishing every
/// outstanding transition.
#[derive(Debug, Clone)]
struct Step {
    dy: i32,
    settle: bool,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (-160i32..160, any::<bool>()).prop_map(|(dy, settle)| Step { dy, settle })
}

/// One complete drag: press `pick`, then move by each of `moves`.
#[derive(Debug, Clone)]
struct Drag {
    pick: u64,
    moves: Vec<i32>,
}

fn drag_strategy() -> impl Strategy<Value = Drag> {
    (0u64..8, proptest::collection::vec(-160i32..160, 0..8))
        .prop_map(|(pick, moves)| Drag { pick, moves })
}

fn settle(host: &mut MockHost, machine: &mut GestureMachine) {
    for handle in host.complete_all() {
        machine.on_transition_complete(handle);
    }
}

proptest! {
    #[test]
    fn drag_preserves_reorder_invariants(
        count in 2u64..8,
        pick in 0u64..8,
        steps in proptest::collection::vec(step_strategy(), 0..24),
    ) {
        let mut host = MockHost::vertical_list(count, HEIGHT, SPACING);
        let mut machine = GestureMachine::new(DragOptions::default());
        host.mount_all(machine.controller_mut()).unwrap();

        let dragged = ItemId(pick % count);
        let label = host.label_element(dragged).unwrap();
        machine.handle_event(&PointerEvent::down(label), &mut host);
        machine.handle_event(&PointerEvent::moved(Vec2::new(1.0, 1.0)), &mut host);
        prop_assert!(machine.controller().is_dragging());

        for step in &steps {
            machine.handle_event(&PointerEvent::moved(Vec2::new(0.0, step.dy as f32)), &mut host);
            if step.settle {
                settle(&mut host, &mut machine);
            }
            prop_assert!(host.max_outstanding_per_item() <= 1);
            prop_assert_eq!(
                machine.controller().transitions_in_flight(),
                host.outstanding_transitions()
            );
        }

        machine.handle_event(&PointerEvent::up(), &mut host);
        settle(&mut host, &mut machine);

        let order: Vec<ItemId> = machine.controller().order().iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(sorted, (0..count).map(ItemId).collect::<Vec<_>>());

        for (index, id) in order.iter().enumerate() {
            let item = machine.controller().item(*id).unwrap();
            prop_assert!(!item.is_animating());
            prop_assert_eq!(
                item.current_position(),
                Vec2::new(0.0, index as f32 * (HEIGHT + SPACING))
            );
        }

        let mut replay: Vec<ItemId> = (0..count).map(ItemId).collect();
        for event in machine.controller_mut().drain_events() {
            prop_assert_eq!(replay[event.from], event.item);
            let item = replay.remove(event.from);
            replay.insert(event.to, item);
        }
        prop_assert_eq!(replay, order);

        prop_assert_eq!(host.spawned_proxies(), 1);
        prop_assert_eq!(host.destroyed_proxies(), 1);
        prop_assert_eq!(host.invalid_destroys(), 0);
    }

    #[test]
    fn overlapping_drags_settle_where_items_are_drawn(
        count in 2u64..8,
        drags in proptest::collection::vec(drag_strategy(), 1..6),
    ) {
        let mut host = MockHost::vertical_list(count, HEIGHT, SPACING);
        let mut machine = GestureMachine::new(DragOptions::default());
        host.mount_all(machine.controller_mut()).unwrap();

        // No transition completes until every drag has been released
        for drag in &drags {
            let label = host.label_element(ItemId(drag.pick % count)).unwrap();
            machine.handle_event(&PointerEvent::down(label), &mut host);
            machine.handle_event(&PointerEvent::moved(Vec2::new(1.0, 1.0)), &mut host);
            prop_assert!(machine.controller().is_dragging());

            for dy in &drag.moves {
                machine.handle_event(&PointerEvent::moved(Vec2::new(0.0, *dy as f32)), &mut host);
                prop_assert!(host.max_outstanding_per_item() <= 1);
                prop_assert_eq!(
                    machine.controller().transitions_in_flight(),
                    host.outstanding_transitions()
                );
            }
            machine.handle_event(&PointerEvent::up(), &mut host);
            prop_assert!(machine.state().is_idle());
        }
        settle(&mut host, &mut machine);

        let order: Vec<ItemId> = machine.controller().order().iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(sorted, (0..count).map(ItemId).collect::<Vec<_>>());

        for (index, id) in order.iter().enumerate() {
            let item = machine.controller().item(*id).unwrap();
            prop_assert!(!item.is_animating());
            prop_assert_eq!(Some(item.current_position()), host.rendered_position(*id));
            prop_assert_eq!(
                item.current_position(),
                Vec2::new(0.0, index as f32 * (HEIGHT + SPACING))
            );
        }

        let mut replay: Vec<ItemId> = (0..count).map(ItemId).collect();
        for event in machine.controller_mut().drain_events() {
            prop_assert_eq!(replay[event.from], event.item);
            let item = replay.remove(event.from);
            replay.insert(event.to, item);
        }
        prop_assert_eq!(replay, order);

        prop_assert_eq!(host.spawned_proxies(), drags.len());
        prop_assert_eq!(host.destroyed_proxies(), drags.len());
        prop_assert_eq!(host.invalid_destroys(), 0);
    }

    #[test]
    fn arbitrary_pointer_streams_never_leak_proxies(
        events in proptest::collection::vec((0u8..4, 0u64..6, -80i32..80, -80i32..80), 0..40),
    ) {
        let mut host = MockHost::vertical_list(5, HEIGHT, SPACING);
        let mut machine = GestureMachine::new(DragOptions::default());
        host.mount_all(machine.controller_mut()).unwrap();

        for (kind, item, dx, dy) in events {
            let event = match kind {
                0 => match host.label_element(ItemId(item)) {
                    Some(label) => PointerEvent::down(label),
                    None => PointerEvent::up(),
                },
                1 => PointerEvent::moved(Vec2::new(dx as f32, dy as f32)),
                2 => PointerEvent::up(),
                _ => PointerEvent::cancel(),
            };
            machine.handle_event(&event, &mut host);
            prop_assert!(host.live_proxies() <= 1);
            prop_assert!(host.max_outstanding_per_item() <= 1);
        }

        machine.abort(&mut host);
        prop_assert_eq!(host.live_proxies(), 0);
        prop_assert_eq!(host.spawned_proxies(), host.destroyed_proxies());
        prop_assert_eq!(host.invalid_destroys(), 0);
        prop_assert!(machine.state().is_idle());
    }
}
