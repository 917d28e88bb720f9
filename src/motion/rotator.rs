//! Wrap-around advance rule for the auto-playing carousel.
//!
//! The component feeds this from a coarse repeating timer with the current
//! timestamp; tests feed it synthetic clocks.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotator {
    active: usize,
    len: usize,
    period_ms: f64,
    paused: bool,
    last_advance_ms: f64,
}

impl Rotator {
    pub fn new(len: usize, period_ms: f64, now_ms: f64) -> Self {
        Self {
            active: 0,
            len: len.max(1),
            period_ms,
            paused: false,
            last_advance_ms: now_ms,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances to the next slide (wrapping) once a full period has elapsed,
    /// one step per tick no matter how late the tick arrives. Returns true
    /// when the active slide changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.paused || now_ms - self.last_advance_ms < self.period_ms {
            return false;
        }
        self.active = (self.active + 1) % self.len;
        self.last_advance_ms = now_ms;
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resuming restarts the full period rather than finishing a partial one.
    pub fn resume(&mut self, now_ms: f64) {
        self.paused = false;
        self.last_advance_ms = now_ms;
    }

    /// Manual selection from the dot affordance; restarts the period.
    pub fn select(&mut self, index: usize, now_ms: f64) {
        if index < self.len {
            self.active = index;
            self.last_advance_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: f64 = 2_400.0;

    #[test]
    fn advances_only_after_a_full_period() {
        let mut rotator = Rotator::new(5, PERIOD, 0.0);
        assert!(!rotator.tick(PERIOD - 1.0));
        assert_eq!(rotator.active(), 0);
        assert!(rotator.tick(PERIOD));
        assert_eq!(rotator.active(), 1);
    }

    #[test]
    fn wraps_back_to_the_first_slide() {
        let mut rotator = Rotator::new(3, PERIOD, 0.0);
        for advance in 1..=3 {
            assert!(rotator.tick(PERIOD * advance as f64));
        }
        assert_eq!(rotator.active(), 0);
    }

    #[test]
    fn one_advance_per_tick_even_when_ticks_arrive_late() {
        let mut rotator = Rotator::new(4, PERIOD, 0.0);
        // Three periods pass before the next tick fires.
        assert!(rotator.tick(PERIOD * 3.0));
        assert_eq!(rotator.active(), 1);
        // The late advance reset the period, so the next one is a full
        // period out from it.
        assert!(!rotator.tick(PERIOD * 3.0 + PERIOD / 2.0));
        assert!(rotator.tick(PERIOD * 4.0));
        assert_eq!(rotator.active(), 2);
    }

    #[test]
    fn paused_ticks_never_advance() {
        let mut rotator = Rotator::new(3, PERIOD, 0.0);
        rotator.pause();
        assert!(rotator.is_paused());
        assert!(!rotator.tick(PERIOD * 10.0));
        assert_eq!(rotator.active(), 0);
    }

    #[test]
    fn resume_restarts_the_full_period() {
        let mut rotator = Rotator::new(3, PERIOD, 0.0);
        rotator.pause();
        rotator.resume(10_000.0);
        // A moment later is not enough, even though several periods passed
        // while paused.
        assert!(!rotator.tick(10_000.0 + PERIOD - 1.0));
        assert!(rotator.tick(10_000.0 + PERIOD));
        assert_eq!(rotator.active(), 1);
    }

    #[test]
    fn manual_selection_restarts_the_period() {
        let mut rotator = Rotator::new(5, PERIOD, 0.0);
        rotator.select(3, 1_000.0);
        assert_eq!(rotator.active(), 3);
        assert!(!rotator.tick(1_000.0 + PERIOD - 1.0));
        assert!(rotator.tick(1_000.0 + PERIOD));
        assert_eq!(rotator.active(), 4);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut rotator = Rotator::new(3, PERIOD, 0.0);
        rotator.select(7, 0.0);
        assert_eq!(rotator.active(), 0);
    }
}
