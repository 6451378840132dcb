//! Sortable Input
//!
//! Pointer input as the drag machinery sees it: a single logical stream of
//! down/move/up/cancel events carrying the element under the pointer and the
//! movement since the previous event.
//!
//! Hosts usually receive input from several modalities at once (a browser
//! fires both touch events and emulated mouse events for the same finger).
//! [`PointerMerger`] folds those into one stream.

mod merger;

pub use merger::PointerMerger;

use sortable_core::math::Vec2;

/// Identifier of an element in the host's visual tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Input device family a raw event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Mouse,
    Touch,
    Pen,
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerKind {
    /// Up and Cancel both end a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self, PointerKind::Up | PointerKind::Cancel)
    }
}

/// Pointer input exactly as the host received it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointer {
    pub modality: Modality,
    pub kind: PointerKind,
    /// Topmost element under the pointer, if the host could resolve one.
    pub target: Option<ElementId>,
    /// Pointer position in screen space.
    pub position: Vec2,
    /// Movement reported by the device since its previous event.
    ///
    /// Mouse sources report this directly; touch sources generally don't, in
    /// which case the merger derives it from consecutive positions.
    pub movement: Option<Vec2>,
}

impl RawPointer {
    pub fn new(modality: Modality, kind: PointerKind, position: Vec2) -> Self {
        Self {
            modality,
            kind,
            target: None,
            position,
            movement: None,
        }
    }

    pub fn with_target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = Some(movement);
        self
    }
}

/// A normalized event of the logical pointer stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: Option<ElementId>,
    pub position: Vec2,
    /// Movement since the previous event of the same gesture.
    pub movement: Vec2,
}

impl PointerEvent {
    pub fn down(target: ElementId) -> Self {
        Self {
            kind: PointerKind::Down,
            target: Some(target),
            position: Vec2::ZERO,
            movement: Vec2::ZERO,
        }
    }

    pub fn moved(movement: Vec2) -> Self {
        Self {
            kind: PointerKind::Move,
            target: None,
            position: Vec2::ZERO,
            movement,
        }
    }

    pub fn up() -> Self {
        Self {
            kind: PointerKind::Up,
            target: None,
            position: Vec2::ZERO,
            movement: Vec2::ZERO,
        }
    }

    pub fn cancel() -> Self {
        Self {
            kind: PointerKind::Cancel,
            target: None,
            position: Vec2::ZERO,
            movement: Vec2::ZERO,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn on(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }
}
