//! Configuration for drag-and-drop behaviour.

use std::time::Duration;

use sortable_core::math::Vec2;

/// Default minimum hold duration before press feedback may play.
pub const DEFAULT_PRESS_DELAY: Duration = Duration::from_millis(300);

/// The press feedback pulse ends this long before `press_delay` elapses.
const PRESS_FEEDBACK_LEAD: Duration = Duration::from_millis(20);

/// Which first movement turns a press into a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStartRule {
    /// Both axes must move on the same event.
    ///
    /// Purely horizontal or vertical first moves do not start a drag; the
    /// press stays pending until a diagonal move arrives.
    #[default]
    BothAxes,
    /// Movement along either axis starts the drag.
    AnyAxis,
}

impl DragStartRule {
    /// Check whether `movement` starts a drag under this rule.
    pub fn starts_drag(&self, movement: Vec2) -> bool {
        match self {
            DragStartRule::BothAxes => movement.x != 0.0 && movement.y != 0.0,
            DragStartRule::AnyAxis => movement.x != 0.0 || movement.y != 0.0,
        }
    }
}

/// Options supplied by the embedding application.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOptions {
    /// Minimum hold duration associated with the press feedback pulse.
    pub press_delay: Duration,
    /// Play a pulse on the dragged item when the drag starts.
    pub press_feedback: bool,
    pub start_rule: DragStartRule,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            press_delay: DEFAULT_PRESS_DELAY,
            press_feedback: false,
            start_rule: DragStartRule::default(),
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_press_delay(mut self, delay: Duration) -> Self {
        self.press_delay = delay;
        self
    }

    pub fn with_press_feedback(mut self, enabled: bool) -> Self {
        self.press_feedback = enabled;
        self
    }

    pub fn with_start_rule(mut self, rule: DragStartRule) -> Self {
        self.start_rule = rule;
        self
    }

    /// Length of the press feedback pulse.
    pub fn press_feedback_duration(&self) -> Duration {
        self.press_delay.saturating_sub(PRESS_FEEDBACK_LEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_axes_rule_needs_diagonal_motion() {
        let rule = DragStartRule::BothAxes;
        assert!(rule.starts_drag(Vec2::new(1.0, -1.0)));
        assert!(!rule.starts_drag(Vec2::new(5.0, 0.0)));
        assert!(!rule.starts_drag(Vec2::new(0.0, 5.0)));
        assert!(!rule.starts_drag(Vec2::ZERO));
    }

    #[test]
    fn test_any_axis_rule() {
        let rule = DragStartRule::AnyAxis;
        assert!(rule.starts_drag(Vec2::new(5.0, 0.0)));
        assert!(rule.starts_drag(Vec2::new(0.0, -2.0)));
        assert!(!rule.starts_drag(Vec2::ZERO));
    }

    #[test]
    fn test_press_feedback_duration_saturates() {
        let options = DragOptions::default();
        assert_eq!(options.press_feedback_duration(), Duration::from_millis(280));

        let short = options.with_press_delay(Duration::from_millis(5));
        assert_eq!(short.press_feedback_duration(), Duration::ZERO);
    }
}
