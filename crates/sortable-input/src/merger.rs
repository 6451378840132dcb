//! Folds raw multi-modality pointer input into one logical stream.

use sortable_core::math::Vec2;

use crate::{Modality, PointerEvent, PointerKind, RawPointer};

/// A gesture that has seen a down but no up/cancel yet.
#[derive(Debug, Clone, Copy)]
struct OpenGesture {
    modality: Modality,
    last_position: Vec2,
}

/// Merges mouse, touch and pen input into a single pointer stream.
///
/// Once a gesture opens on one modality, events from every other modality are
/// dropped until that gesture is released. Movement is taken from the device
/// when it reports one and derived from consecutive positions otherwise.
#[derive(Debug, Default)]
pub struct PointerMerger {
    open: Option<OpenGesture>,
}

impl PointerMerger {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Modality owning the currently open gesture, if any.
    pub fn active_modality(&self) -> Option<Modality> {
        self.open.map(|g| g.modality)
    }

    /// Forget any open gesture.
    pub fn reset(&mut self) {
        self.open = None;
    }

    /// Normalize one raw event. Returns `None` when the event is a duplicate
    /// from a competing modality.
    pub fn process(&mut self, raw: &RawPointer) -> Option<PointerEvent> {
        if let Some(open) = self.open
            && open.modality != raw.modality
        {
            tracing::trace!(
                "Dropping {:?} {:?} during {:?} gesture",
                raw.modality,
                raw.kind,
                open.modality
            );
            return None;
        }

        let movement = match (raw.kind, self.open) {
            (PointerKind::Move, Some(open)) => raw
                .movement
                .unwrap_or_else(|| raw.position - open.last_position),
            _ => raw.movement.unwrap_or(Vec2::ZERO),
        };

        match raw.kind {
            PointerKind::Down | PointerKind::Move => {
                if raw.kind == PointerKind::Down || self.open.is_some() {
                    self.open = Some(OpenGesture {
                        modality: raw.modality,
                        last_position: raw.position,
                    });
                }
            }
            PointerKind::Up | PointerKind::Cancel => {
                self.open = None;
            }
        }

        Some(PointerEvent {
            kind: raw.kind,
            target: raw.target,
            position: raw.position,
            movement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementId;

    fn raw(modality: Modality, kind: PointerKind, x: f32, y: f32) -> RawPointer {
        RawPointer::new(modality, kind, Vec2::new(x, y))
    }

    #[test]
    fn test_touch_movement_is_derived_from_positions() {
        let mut merger = PointerMerger::new();
        merger.process(&raw(Modality::Touch, PointerKind::Down, 10.0, 10.0).with_target(ElementId(1)));

        let first = merger
            .process(&raw(Modality::Touch, PointerKind::Move, 13.0, 14.0))
            .unwrap();
        assert_eq!(first.movement, Vec2::new(3.0, 4.0));

        let second = merger
            .process(&raw(Modality::Touch, PointerKind::Move, 12.0, 20.0))
            .unwrap();
        assert_eq!(second.movement, Vec2::new(-1.0, 6.0));
    }

    #[test]
    fn test_reported_movement_wins() {
        let mut merger = PointerMerger::new();
        merger.process(&raw(Modality::Mouse, PointerKind::Down, 0.0, 0.0));

        let event = merger
            .process(&raw(Modality::Mouse, PointerKind::Move, 50.0, 50.0).with_movement(Vec2::new(1.0, 2.0)))
            .unwrap();
        assert_eq!(event.movement, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_competing_modality_is_dropped_until_release() {
        let mut merger = PointerMerger::new();
        merger.process(&raw(Modality::Touch, PointerKind::Down, 0.0, 0.0));
        assert_eq!(merger.active_modality(), Some(Modality::Touch));

        assert!(merger.process(&raw(Modality::Mouse, PointerKind::Down, 0.0, 0.0)).is_none());
        assert!(merger.process(&raw(Modality::Mouse, PointerKind::Move, 5.0, 5.0)).is_none());
        assert!(merger.process(&raw(Modality::Mouse, PointerKind::Up, 5.0, 5.0)).is_none());

        let up = merger.process(&raw(Modality::Touch, PointerKind::Up, 1.0, 1.0)).unwrap();
        assert_eq!(up.kind, PointerKind::Up);
        assert_eq!(merger.active_modality(), None);

        // After release the mouse is accepted again.
        assert!(merger.process(&raw(Modality::Mouse, PointerKind::Down, 0.0, 0.0)).is_some());
    }

    #[test]
    fn test_hover_moves_pass_through_without_opening_a_gesture() {
        let mut merger = PointerMerger::new();
        let event = merger
            .process(&raw(Modality::Mouse, PointerKind::Move, 40.0, 40.0))
            .unwrap();
        assert_eq!(event.movement, Vec2::ZERO);
        assert_eq!(merger.active_modality(), None);
    }

    #[test]
    fn test_reset_closes_gesture() {
        let mut merger = PointerMerger::new();
        merger.process(&raw(Modality::Pen, PointerKind::Down, 0.0, 0.0));
        merger.reset();
        assert!(merger.process(&raw(Modality::Mouse, PointerKind::Down, 0.0, 0.0)).is_some());
    }
}
