//! Headless example of a touch drag reordering a list.
//!
//! This example shows how to:
//! - Implement the host ports over a simple column of boxes
//! - Feed raw touch input, including emulated mouse duplicates
//! - Drive the built-in tween transitions once per frame
//! - Read back the final order and the reorder events
//!
//! Run with: cargo run -p sortable --example headless_reorder

use sortable::prelude::*;

const ITEM_HEIGHT: f32 = 40.0;
const STRIDE: f32 = 50.0;
const FRAME: f32 = 1.0 / 60.0;

struct Column {
    labels: Vec<&'static str>,
    transitions: TweenTransitions,
    proxy: Option<Rect>,
    next_proxy: u64,
}

impl Column {
    fn new(labels: Vec<&'static str>) -> Self {
        Self {
            labels,
            transitions: TweenTransitions::new(),
            proxy: None,
            next_proxy: 0,
        }
    }

    fn element(index: usize) -> ElementId {
        ElementId(100 + index as u64)
    }

    fn bounds(&self, index: usize) -> Rect {
        let initial = Vec2::new(0.0, index as f32 * STRIDE);
        let position = self
            .transitions
            .position(ItemId(index as u64))
            .unwrap_or(initial);
        Rect::from_pos_size(position, Vec2::new(200.0, ITEM_HEIGHT))
    }
}

impl SpatialQuery for Column {
    fn element_at(&self, point: Vec2) -> Option<ElementId> {
        (0..self.labels.len())
            .rev()
            .find(|&index| self.bounds(index).contains(point))
            .map(Column::element)
    }

    fn parent_of(&self, _element: ElementId) -> Option<ElementId> {
        None
    }
}

impl LayoutMeasure for Column {
    fn measure(&self, item: ItemId) -> Option<Rect> {
        let index = item.0 as usize;
        (index < self.labels.len()).then(|| self.bounds(index))
    }
}

impl TransitionPort for Column {
    fn play_move(&mut self, item: ItemId, from: Vec2, to: Vec2) -> TransitionResult<TransitionHandle> {
        self.transitions.play_move(item, from, to)
    }

    fn redirect(&mut self, handle: TransitionHandle, to: Vec2) -> TransitionResult<()> {
        self.transitions.redirect(handle, to)
    }

    fn place(&mut self, item: ItemId, position: Vec2) {
        self.transitions.place(item, position);
    }

    fn play_press_feedback(&mut self, item: ItemId, duration: std::time::Duration) {
        self.transitions.play_press_feedback(item, duration);
    }
}

impl ProxyHost for Column {
    fn spawn_proxy(&mut self, item: ItemId, bounds: Rect) -> ProxyHandle {
        println!("Proxy for {:?} spawned at y={}", item, bounds.y);
        self.proxy = Some(bounds);
        self.next_proxy += 1;
        ProxyHandle(self.next_proxy)
    }

    fn move_proxy(&mut self, _proxy: ProxyHandle, bounds: Rect) {
        self.proxy = Some(bounds);
    }

    fn destroy_proxy(&mut self, proxy: ProxyHandle) {
        println!("Proxy {:?} destroyed", proxy);
        self.proxy = None;
    }
}

fn pump(list: &mut GestureMachine, column: &mut Column, frames: usize) {
    for _ in 0..frames {
        for event in column.transitions.update(FRAME) {
            match event {
                TransitionEvent::Completed(handle) => list.on_transition_complete(handle),
                TransitionEvent::Interrupted(handle) => {
                    list.on_transition_interrupted(handle, &*column)
                }
            }
        }
    }
}

fn main() -> Result<(), DragError> {
    sortable::init(Config::default().with_log_filter("info,sortable_ui=trace"));

    let mut column = Column::new(vec!["Apples", "Bread", "Cheese", "Dates", "Eggs"]);
    let mut list = GestureMachine::new(DragOptions::default().with_press_feedback(true));
    for index in 0..column.labels.len() {
        list.controller_mut()
            .mount_item(ItemId(index as u64), Column::element(index), &column)?;
    }

    let touch = |kind, x: f32, y: f32| RawPointer::new(Modality::Touch, kind, Vec2::new(x, y));
    let mouse = |kind, x: f32, y: f32| RawPointer::new(Modality::Mouse, kind, Vec2::new(x, y));

    // Press "Apples", with the browser-style emulated mouse down right after
    list.handle_raw(&touch(PointerKind::Down, 100.0, 20.0).with_target(Column::element(0)), &mut column);
    list.handle_raw(&mouse(PointerKind::Down, 100.0, 20.0).with_target(Column::element(0)), &mut column);

    // Pick it up, then drag it down one slot per step
    list.handle_raw(&touch(PointerKind::Move, 101.0, 21.0).with_target(Column::element(0)), &mut column);
    for step in 1..=3 {
        let y = 21.0 + step as f32 * STRIDE;
        list.handle_raw(&touch(PointerKind::Move, 101.0, y), &mut column);
        pump(&mut list, &mut column, 10);
    }
    list.handle_raw(&touch(PointerKind::Up, 101.0, 171.0), &mut column);
    pump(&mut list, &mut column, 120);

    for event in list.controller_mut().drain_events() {
        println!(
            "{} moved from {} to {}",
            column.labels[event.item.0 as usize], event.from, event.to
        );
    }

    let order: Vec<_> = list
        .controller()
        .order()
        .iter()
        .map(|id| column.labels[id.0 as usize])
        .collect();
    println!("Final order: {}", order.join(", "));
    assert!(column.proxy.is_none());

    Ok(())
}
