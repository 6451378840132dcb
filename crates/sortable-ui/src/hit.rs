//! Resolving which item sits under a point.

use sortable_core::math::Rect;
use sortable_core::profiling::profile_function;
use sortable_input::ElementId;

use crate::item::{ItemId, ItemTable, ListItem};
use crate::ports::SpatialQuery;

/// Upper bound on ancestor walks; a host reporting a parent cycle stops here.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Nearest item enclosing `element`, whatever its flags.
///
/// Used to resolve the target of a pointer-down: disabled items can still be
/// picked up.
pub fn closest_item<'a, Q>(query: &Q, items: &'a ItemTable, element: ElementId) -> Option<&'a ListItem>
where
    Q: SpatialQuery + ?Sized,
{
    ancestors(query, element).find_map(|el| items.by_element(el))
}

/// Find the drop target under the dragged item's proxy.
///
/// Hit-tests the center of `bounds` and walks up from the topmost element to
/// the nearest enclosing item that is eligible and is not `dragged`. Returns
/// at most one item.
pub fn resolve_target<Q>(query: &Q, items: &ItemTable, bounds: Rect, dragged: ItemId) -> Option<ItemId>
where
    Q: SpatialQuery + ?Sized,
{
    profile_function!();
    let top = query.element_at(bounds.center())?;
    ancestors(query, top)
        .filter_map(|el| items.by_element(el))
        .find(|item| item.id() != dragged && item.is_eligible_target())
        .map(ListItem::id)
}

fn ancestors<Q>(query: &Q, start: ElementId) -> impl Iterator<Item = ElementId> + '_
where
    Q: SpatialQuery + ?Sized,
{
    std::iter::successors(Some(start), move |&el| query.parent_of(el)).take(MAX_ANCESTOR_DEPTH)
}
