//! Post-step display delay.

use std::time::{Duration, Instant};

/// Tracks when the last step was shown and how long it must stay visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
    shown_at: Option<Instant>,
}

impl Pacing {
    /// Pacing with the given delay and no step shown yet.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            shown_at: None,
        }
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay; applies to the step currently on screen too.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Record that a step finished drawing at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Forget the last step.
    pub fn clear(&mut self) {
        self.shown_at = None;
    }

    /// Time left before the next step may be shown, if any.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let ready_at = self.shown_at? + self.delay;
        let remaining = ready_at.saturating_duration_since(now);
        (!remaining.is_zero()).then_some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delay_never_blocks() {
        let mut pacing = Pacing::default();
        let now = Instant::now();
        pacing.mark(now);
        assert_eq!(pacing.remaining(now), None);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut pacing = Pacing::new(Duration::from_millis(800));
        let now = Instant::now();
        assert_eq!(pacing.remaining(now), None);

        pacing.mark(now);
        assert_eq!(pacing.remaining(now), Some(Duration::from_millis(800)));
        assert_eq!(
            pacing.remaining(now + Duration::from_millis(300)),
            Some(Duration::from_millis(500))
        );
        assert_eq!(pacing.remaining(now + Duration::from_millis(800)), None);
    }

    #[test]
    fn test_clear_unblocks() {
        let mut pacing = Pacing::new(Duration::from_secs(5));
        let now = Instant::now();
        pacing.mark(now);
        pacing.clear();
        assert_eq!(pacing.remaining(now), None);
    }
}
