//! The reorder engine.
//!
//! Moving the dragged item from `drag_index` to `target_index` displaces
//! every item in between by one slot toward the gap the dragged item left.
//! Each displaced item takes the slot of its neighbour on the dragged item's
//! side ("fill from neighbour"). Direction only decides which side that is and
//! in which order the items are visited:
//!
//! ```text
//! drag 0 -> 2:   [A B C D]  visit C, B   C -> slot(B), B -> slot(A)   => [B C A D]
//! drag 3 -> 1:   [A B C D]  visit B, C   B -> slot(C), C -> slot(D)   => [A D B C]
//! ```
//!
//! Destinations are computed from the state before any of them is applied,
//! so no item reads a slot that a command in the same batch already took.

use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;

use crate::error::{ReorderError, ReorderResult};
use crate::item::{ItemId, ItemTable, ListItem};
use crate::list::OrderedList;

/// Instruction to transition a displaced item to a new slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    pub item: ItemId,
    pub destination: Vec2,
}

/// Outcome of a reorder.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPlan {
    /// The item that was dragged.
    pub dragged: ItemId,
    pub from_index: usize,
    pub to_index: usize,
    /// Slot the dragged item takes, committed without a transition.
    pub drag_destination: Vec2,
    /// Transitions for displaced items, in visiting order.
    pub moves: Vec<MoveCommand>,
}

/// Compute a reorder without touching any state.
///
/// Equal indices yield an empty plan: the dragged item keeps its slot and
/// nothing is displaced.
pub fn plan_reorder(
    order: &OrderedList,
    items: &ItemTable,
    drag_index: usize,
    target_index: usize,
) -> ReorderResult<ReorderPlan> {
    let ids = order.as_slice();
    let len = ids.len();
    for index in [drag_index, target_index] {
        if index >= len {
            return Err(ReorderError::IndexOutOfRange { index, len });
        }
    }
    let dragged = ids[drag_index];
    lookup(items, dragged)?;
    let drag_destination = lookup(items, ids[target_index])?.current_position();

    // (visited index, neighbour index) pairs
    let visits: Vec<(usize, usize)> = if drag_index < target_index {
        (drag_index + 1..=target_index).rev().map(|i| (i, i - 1)).collect()
    } else {
        (target_index..drag_index).map(|i| (i, i + 1)).collect()
    };

    let moves = visits
        .into_iter()
        .map(|(index, neighbour)| {
            let item = lookup(items, ids[index])?;
            let neighbour = lookup(items, ids[neighbour])?;
            Ok(MoveCommand {
                item: item.id(),
                destination: neighbour.fill_slot(),
            })
        })
        .collect::<ReorderResult<Vec<_>>>()?;

    Ok(ReorderPlan {
        dragged,
        from_index: drag_index,
        to_index: target_index,
        drag_destination,
        moves,
    })
}

fn lookup(items: &ItemTable, id: ItemId) -> ReorderResult<&ListItem> {
    items.get(id).ok_or(ReorderError::UnknownItem(id))
}

/// Compute and apply a reorder.
///
/// On success the ordered list has been repositioned and the dragged item's
/// logical slot updated; the returned move commands still have to be issued
/// to the transition port. On error nothing was mutated.
pub fn reorder(
    order: &mut OrderedList,
    items: &mut ItemTable,
    drag_index: usize,
    target_index: usize,
) -> ReorderResult<ReorderPlan> {
    profile_function!();
    let plan = plan_reorder(order, items, drag_index, target_index)?;
    if plan.from_index == plan.to_index {
        return Ok(plan);
    }

    order.reposition(plan.from_index, plan.to_index)?;
    if let Some(item) = items.get_mut(plan.dragged) {
        item.assign_slot(plan.drag_destination);
    }

    tracing::debug!(
        "Reordered {:?} from {} to {} ({} displaced)",
        plan.dragged,
        plan.from_index,
        plan.to_index,
        plan.moves.len()
    );
    Ok(plan)
}
