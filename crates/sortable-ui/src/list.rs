//! The ordered sequence of item ids.

use crate::error::{ReorderError, ReorderResult};
use crate::item::ItemId;

/// Logical order of the list. Index in this sequence is the single source of
/// truth for an item's position.
///
/// The only mutation after mounting is [`reposition`](Self::reposition),
/// which the reorder engine performs as one remove-and-insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedList {
    ids: Vec<ItemId>,
}

impl OrderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.ids.get(index).copied()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub(crate) fn push(&mut self, id: ItemId) {
        self.ids.push(id);
    }

    /// Move the id at `from` so it ends up at index `to`. Equal indices leave
    /// the list untouched.
    pub(crate) fn reposition(&mut self, from: usize, to: usize) -> ReorderResult<()> {
        let len = self.ids.len();
        for index in [from, to] {
            if index >= len {
                return Err(ReorderError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let id = self.ids.remove(from);
        self.ids.insert(to, id);
        Ok(())
    }
}

impl FromIterator<ItemId> for OrderedList {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
