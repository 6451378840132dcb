//! Frame-driven move transitions.
//!
//! [`TweenTransitions`] is a ready-made [`TransitionPort`] for hosts without
//! an animation engine of their own:
//! - Displaced items slide to their new slot with an ease-out curve
//! - Redirected transitions restart from wherever the item currently is
//! - Direct placement cancels any running slide
//! - Optional press pulse on the dragged item
//!
//! The host calls [`update`](TweenTransitions::update) once per frame and
//! feeds the returned [`TransitionEvent`]s back into the gesture machine.

use std::time::Duration;

use indexmap::IndexMap;
use sortable_core::alloc::HashMap;
use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;

use crate::error::{TransitionError, TransitionResult};
use crate::item::ItemId;
use crate::ports::{TransitionHandle, TransitionPort};

/// Default slide duration in seconds.
const DEFAULT_MOVE_DURATION: f32 = 1.0;

/// Peak scale of the press pulse, reached halfway through.
const PRESS_PULSE_PEAK: f32 = 1.2;

/// Notification for the controller produced by [`TweenTransitions::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Completed(TransitionHandle),
    Interrupted(TransitionHandle),
}

// ---------------------------------------------------------------------------
// Move Tween
// ---------------------------------------------------------------------------

/// Slides one item between two positions.
#[derive(Debug, Clone)]
pub struct MoveTween {
    pub item: ItemId,
    /// Starting position.
    pub from: Vec2,
    /// Target position.
    pub to: Vec2,
    /// Current interpolated position.
    pub current: Vec2,
    elapsed: f32,
    duration: f32,
}

impl MoveTween {
    pub fn new(item: ItemId, from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            item,
            from,
            to,
            current: from,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        // Ease-out cubic: 1 - (1-t)^3
        let t = self.progress();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.current = self.from.lerp(self.to, eased);
    }

    /// Start over from the current position toward `to`.
    pub fn restart_toward(&mut self, to: Vec2) {
        self.from = self.current;
        self.to = to;
        self.elapsed = 0.0;
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Get the progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }
}

// ---------------------------------------------------------------------------
// Press Pulse
// ---------------------------------------------------------------------------

/// Scales an item 1.0 -> 1.2 -> 1.0 when it is picked up.
#[derive(Debug, Clone)]
pub struct PressPulse {
    pub item: ItemId,
    pub scale: f32,
    elapsed: f32,
    duration: f32,
}

impl PressPulse {
    pub fn new(item: ItemId, duration: f32) -> Self {
        Self {
            item,
            scale: 1.0,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).min(1.0);
        let triangle = 1.0 - (2.0 * t - 1.0).abs();
        self.scale = 1.0 + (PRESS_PULSE_PEAK - 1.0) * triangle;
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

// ---------------------------------------------------------------------------
// Tween Transitions
// ---------------------------------------------------------------------------

/// Tick-driven implementation of [`TransitionPort`].
#[derive(Debug)]
pub struct TweenTransitions {
    duration: f32,
    next_handle: u64,
    tweens: IndexMap<TransitionHandle, MoveTween>,
    /// Where items rest when no tween is running.
    resting: HashMap<ItemId, Vec2>,
    pulses: Vec<PressPulse>,
    /// Events produced outside `update`, delivered on the next `update`.
    pending: Vec<TransitionEvent>,
}

impl Default for TweenTransitions {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenTransitions {
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_MOVE_DURATION,
            next_handle: 0,
            tweens: IndexMap::new(),
            resting: HashMap::new(),
            pulses: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Use a custom slide duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration.as_secs_f32();
        self
    }

    /// Advance every running animation by `dt` seconds.
    ///
    /// Returns the completions and interruptions since the last call.
    pub fn update(&mut self, dt: f32) -> Vec<TransitionEvent> {
        profile_function!();
        let mut events = std::mem::take(&mut self.pending);

        for tween in self.tweens.values_mut() {
            tween.update(dt);
        }
        let resting = &mut self.resting;
        self.tweens.retain(|handle, tween| {
            if tween.is_done() {
                resting.insert(tween.item, tween.to);
                events.push(TransitionEvent::Completed(*handle));
                false
            } else {
                true
            }
        });

        for pulse in &mut self.pulses {
            pulse.update(dt);
        }
        self.pulses.retain(|pulse| !pulse.is_done());

        events
    }

    /// Check if any animation is active.
    pub fn has_active_animations(&self) -> bool {
        !self.tweens.is_empty() || !self.pulses.is_empty()
    }

    pub fn is_animating(&self, item: ItemId) -> bool {
        self.tweens.values().any(|tween| tween.item == item)
    }

    /// Rendered position of `item`, if it has ever been moved or placed.
    pub fn position(&self, item: ItemId) -> Option<Vec2> {
        self.tweens
            .values()
            .find(|tween| tween.item == item)
            .map(|tween| tween.current)
            .or_else(|| self.resting.get(&item).copied())
    }

    /// Offset to apply to `item`'s visual relative to its initial layout
    /// position.
    pub fn translation(&self, item: ItemId, initial: Vec2) -> Vec2 {
        self.position(item).map_or(Vec2::ZERO, |position| position - initial)
    }

    /// Current press pulse scale of `item` (1.0 when not pulsing).
    pub fn scale(&self, item: ItemId) -> f32 {
        self.pulses
            .iter()
            .find(|pulse| pulse.item == item)
            .map_or(1.0, |pulse| pulse.scale)
    }

    /// Drop every tween of `item`, reporting each as interrupted.
    fn interrupt_item(&mut self, item: ItemId) {
        let pending = &mut self.pending;
        let resting = &mut self.resting;
        self.tweens.retain(|handle, tween| {
            if tween.item == item {
                resting.insert(item, tween.current);
                pending.push(TransitionEvent::Interrupted(*handle));
                false
            } else {
                true
            }
        });
    }
}

impl TransitionPort for TweenTransitions {
    fn play_move(
        &mut self,
        item: ItemId,
        from: Vec2,
        to: Vec2,
    ) -> TransitionResult<TransitionHandle> {
        if !from.is_finite() || !to.is_finite() {
            return Err(TransitionError::InvalidDestination);
        }
        self.interrupt_item(item);

        let handle = TransitionHandle(self.next_handle);
        self.next_handle += 1;
        self.tweens
            .insert(handle, MoveTween::new(item, from, to, self.duration));
        Ok(handle)
    }

    fn redirect(&mut self, handle: TransitionHandle, to: Vec2) -> TransitionResult<()> {
        if !to.is_finite() {
            return Err(TransitionError::InvalidDestination);
        }
        let tween = self
            .tweens
            .get_mut(&handle)
            .ok_or(TransitionError::UnknownHandle(handle))?;
        tween.restart_toward(to);
        Ok(())
    }

    fn place(&mut self, item: ItemId, position: Vec2) {
        self.interrupt_item(item);
        self.resting.insert(item, position);
    }

    fn play_press_feedback(&mut self, item: ItemId, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        self.pulses.retain(|pulse| pulse.item != item);
        self.pulses
            .push(PressPulse::new(item, duration.as_secs_f32()));
    }
}
