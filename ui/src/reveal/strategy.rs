//! Strategy selection and viewport arithmetic for scroll reveal.

/// How reveal state is driven on the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Reduced motion: everything is revealed up front, nothing is observed.
    Static,
    /// Viewport-intersection notifications.
    Observer,
    /// Per-frame geometry polling off scroll and resize events.
    Polling,
}

pub fn choose(reduced_motion: bool, observer_supported: bool) -> RevealStrategy {
    if reduced_motion {
        RevealStrategy::Static
    } else if observer_supported {
        RevealStrategy::Observer
    } else {
        RevealStrategy::Polling
    }
}

/// Outcome of one polling pass for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reveal,
    Conceal,
    /// Neither test matched; the element keeps whatever state it had.
    Leave,
}

/// The "in view" and "out of view" tests are independent rather than
/// complements: a top between `viewport_height / 1.25` and
/// `viewport_height` matches neither and must be left unchanged.
pub fn classify(top: f64, viewport_height: f64) -> Verdict {
    if top <= viewport_height / 1.25 {
        Verdict::Reveal
    } else if top > viewport_height {
        Verdict::Conceal
    } else {
        Verdict::Leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn reduced_motion_wins_over_everything() {
        assert_eq!(choose(true, true), RevealStrategy::Static);
        assert_eq!(choose(true, false), RevealStrategy::Static);
    }

    #[test]
    fn observer_preferred_when_supported() {
        assert_eq!(choose(false, true), RevealStrategy::Observer);
    }

    #[test]
    fn polling_is_the_fallback() {
        assert_eq!(choose(false, false), RevealStrategy::Polling);
    }

    #[test]
    fn top_above_the_80_percent_line_reveals() {
        assert_eq!(classify(VIEWPORT / 1.25 - 1.0, VIEWPORT), Verdict::Reveal);
        assert_eq!(classify(VIEWPORT / 1.25, VIEWPORT), Verdict::Reveal);
        assert_eq!(classify(0.0, VIEWPORT), Verdict::Reveal);
        assert_eq!(classify(-50.0, VIEWPORT), Verdict::Reveal);
    }

    #[test]
    fn top_below_the_viewport_conceals() {
        assert_eq!(classify(VIEWPORT + 1.0, VIEWPORT), Verdict::Conceal);
        assert_eq!(classify(VIEWPORT * 3.0, VIEWPORT), Verdict::Conceal);
    }

    #[test]
    fn band_between_the_tests_is_left_unchanged() {
        // Regression guard: the two tests are not complements. Anything
        // strictly between vh/1.25 and vh (inclusive) satisfies neither.
        assert_eq!(classify(VIEWPORT / 1.25 + 1.0, VIEWPORT), Verdict::Leave);
        assert_eq!(classify(900.0, VIEWPORT), Verdict::Leave);
        assert_eq!(classify(VIEWPORT, VIEWPORT), Verdict::Leave);
    }
}
