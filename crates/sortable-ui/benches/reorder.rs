//! Benchmarks for drag reordering.
//!
//! Measures:
//! - A full sweep of the dragged item from the top to the bottom of a list
//! - A single long-distance reorder, which displaces every other item

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sortable_core::math::Vec2;
use sortable_input::PointerEvent;
use sortable_test_utils::MockHost;
use sortable_ui::{DragOptions, GestureMachine, ItemId};

const STRIDE: f32 = 50.0;

fn setup(count: u64) -> (MockHost, GestureMachine) {
    let host = MockHost::vertical_list(count, 40.0, STRIDE - 40.0);
    let mut machine = GestureMachine::new(DragOptions::default());
    host.mount_all(machine.controller_mut())
        .expect("mock items are measurable");
    (host, machine)
}

fn start_drag(host: &mut MockHost, machine: &mut GestureMachine, item: ItemId) {
    let label = host.label_element(item).expect("item exists");
    machine.handle_event(&PointerEvent::down(label), host);
    machine.handle_event(&PointerEvent::moved(Vec2::new(1.0, 1.0)), host);
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/sweep");

    for count in [10u64, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let (mut host, mut machine) = setup(count);
                start_drag(&mut host, &mut machine, ItemId(0));
                for _ in 1..count {
                    machine.handle_event(&PointerEvent::moved(Vec2::new(0.0, STRIDE)), &mut host);
                }
                machine.handle_event(&PointerEvent::up(), &mut host);
                black_box(machine.controller().order().len());
            });
        });
    }

    group.finish();
}

fn bench_long_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/long_jump");

    for count in [10u64, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let (mut host, mut machine) = setup(count);
                start_drag(&mut host, &mut machine, ItemId(0));
                let distance = (count - 1) as f32 * STRIDE;
                machine.handle_event(&PointerEvent::moved(Vec2::new(0.0, distance)), &mut host);
                black_box(host.count_play_moves());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_long_jump);
criterion_main!(benches);
