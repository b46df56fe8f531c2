//! Progress arithmetic for one opacity transition.

/// Lifecycle of a fade run. `Destroyed` is reachable from every other phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    Initializing,
    Animating,
    Settled,
    Destroyed,
}

/// One active animation session: a start timestamp plus a fixed duration.
/// The session ends when progress reaches 1 or the owner cancels it.
#[derive(Debug, Clone, Copy)]
pub struct FadeTimeline {
    start_ms: f64,
    duration_ms: f64,
}

impl FadeTimeline {
    /// Negative durations collapse to zero, which completes on the first
    /// frame.
    pub fn new(start_ms: f64, duration_ms: f64) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Monotone progress in `[0, 1]`. The divisor is floored at one
    /// millisecond so a sub-millisecond duration cannot blow up the
    /// quotient.
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / self.duration_ms.max(1.0)).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress_at(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_at_start() {
        let timeline = FadeTimeline::new(1_000.0, 600.0);
        assert_eq!(timeline.progress_at(1_000.0), 0.0);
        assert!(!timeline.is_complete(1_000.0));
    }

    #[test]
    fn progress_is_exactly_one_at_duration() {
        let timeline = FadeTimeline::new(1_000.0, 600.0);
        assert_eq!(timeline.progress_at(1_600.0), 1.0);
        assert!(timeline.is_complete(1_600.0));
    }

    #[test]
    fn progress_is_proportional_in_between() {
        let timeline = FadeTimeline::new(0.0, 400.0);
        assert_eq!(timeline.progress_at(100.0), 0.25);
        assert_eq!(timeline.progress_at(300.0), 0.75);
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let timeline = FadeTimeline::new(500.0, 0.0);
        assert_eq!(timeline.progress_at(500.0), 1.0);
    }

    #[test]
    fn negative_duration_collapses_to_zero() {
        let timeline = FadeTimeline::new(500.0, -250.0);
        assert_eq!(timeline.progress_at(500.0), 1.0);
    }

    #[test]
    fn progress_clamps_outside_the_session() {
        let timeline = FadeTimeline::new(1_000.0, 200.0);
        assert_eq!(timeline.progress_at(900.0), 0.0);
        assert_eq!(timeline.progress_at(5_000.0), 1.0);
    }

    #[test]
    fn sub_millisecond_duration_divides_by_one() {
        let timeline = FadeTimeline::new(0.0, 0.5);
        assert_eq!(timeline.progress_at(0.25), 0.25);
        assert_eq!(timeline.progress_at(1.0), 1.0);
    }
}
