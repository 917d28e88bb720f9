//! Scroll-position mapping for the pinned product stepper.
//!
//! The stepper section is a tall wrapper with a viewport-high panel stuck
//! inside it. While the user scrolls through the wrapper, the scrollable
//! range is divided into one equal band per product; this module turns a raw
//! scroll offset into "which product is active" plus a 0..1 fill for the
//! active band's progress bar. Everything here is plain math so it can be
//! exercised with synthetic scroll values, no DOM attached.

/// One sampled position on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSample {
    /// Index of the active step, always within `0..steps`.
    pub active_index: usize,
    /// How far through the active step's band the scroll sits, in `[0, 1]`.
    pub fill_progress: f64,
    /// Overall progress through the whole scrollable range, in `[0, 1]`.
    pub progress: f64,
}

/// Equal-band timeline over the scrollable range of a pinned section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTimeline {
    steps: usize,
}

impl StepTimeline {
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Maps an absolute scroll offset to the active step and its band fill.
    ///
    /// Total over all finite inputs: outputs are clamped on both ends, so
    /// positions before the wrapper report the first step at fill 0 and
    /// positions past it report the last step at fill 1. A wrapper no taller
    /// than the viewport has no scrollable range; anything at or past its
    /// top counts as fully progressed.
    pub fn sample(
        &self,
        scroll_y: f64,
        container_top: f64,
        viewport_height: f64,
        container_height: f64,
    ) -> StepSample {
        let range = container_height - viewport_height;
        let progress = if range > 0.0 {
            clamp01((scroll_y - container_top) / range)
        } else if scroll_y < container_top {
            0.0
        } else {
            1.0
        };

        // A band boundary belongs to the band being entered, which is what
        // flooring gives us; the top end folds onto the last band.
        let scaled = progress * self.steps as f64;
        let active_index = (scaled as usize).min(self.steps - 1);
        let fill_progress = clamp01(scaled - active_index as f64);

        StepSample {
            active_index,
            fill_progress,
            progress,
        }
    }

    /// Absolute scroll offset the jump-to-step affordance targets: the start
    /// of step `index`'s band, nudged one pixel inside so that re-sampling
    /// the landing position can never round back into the previous band.
    pub fn jump_target(
        &self,
        index: usize,
        container_top: f64,
        viewport_height: f64,
        container_height: f64,
    ) -> f64 {
        let range = (container_height - viewport_height).max(0.0);
        let index = index.min(self.steps - 1);
        let band_start = container_top + (index as f64 / self.steps as f64) * range;
        if index == 0 {
            band_start
        } else {
            band_start + 1.0
        }
    }
}

fn clamp01(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f64 = 1_000.0;
    const VIEWPORT: f64 = 800.0;

    fn timeline() -> StepTimeline {
        StepTimeline::new(3)
    }

    /// Wrapper is 300% of the viewport, so the scrollable range is exactly
    /// two viewport heights.
    fn container() -> f64 {
        VIEWPORT * 3.0
    }

    #[test]
    fn before_the_wrapper_pins_the_first_step() {
        let sample = timeline().sample(TOP - 500.0, TOP, VIEWPORT, container());
        assert_eq!(sample.active_index, 0);
        assert_eq!(sample.fill_progress, 0.0);
        assert_eq!(sample.progress, 0.0);
    }

    #[test]
    fn past_the_wrapper_pins_the_last_step() {
        let past = TOP + (container() - VIEWPORT) + 750.0;
        let sample = timeline().sample(past, TOP, VIEWPORT, container());
        assert_eq!(sample.active_index, 2);
        assert_eq!(sample.fill_progress, 1.0);
        assert_eq!(sample.progress, 1.0);
    }

    #[test]
    fn three_step_walkthrough_at_known_offsets() {
        let t = timeline();

        let start = t.sample(TOP, TOP, VIEWPORT, container());
        assert_eq!(start.active_index, 0);
        assert_eq!(start.fill_progress, 0.0);

        // One viewport of scroll is progress 0.5: the middle of band 1.
        let middle = t.sample(TOP + VIEWPORT, TOP, VIEWPORT, container());
        assert_eq!(middle.active_index, 1);
        assert!((middle.fill_progress - 0.5).abs() < 1e-9);
        assert!((middle.progress - 0.5).abs() < 1e-9);

        let end = t.sample(TOP + 2.0 * VIEWPORT, TOP, VIEWPORT, container());
        assert_eq!(end.active_index, 2);
        assert_eq!(end.fill_progress, 1.0);
    }

    #[test]
    fn band_boundary_belongs_to_the_band_being_entered() {
        // Two equal bands over the 1600px range put the boundary at exactly
        // half progress, which is exactly representable.
        let t = StepTimeline::new(2);
        let sample = t.sample(TOP + 800.0, TOP, VIEWPORT, container());
        assert_eq!(sample.active_index, 1);
        assert_eq!(sample.fill_progress, 0.0);
    }

    #[test]
    fn outputs_stay_in_bounds_across_a_sweep() {
        let t = timeline();
        let mut scroll = TOP - 2_000.0;
        while scroll < TOP + 6_000.0 {
            let sample = t.sample(scroll, TOP, VIEWPORT, container());
            assert!(sample.active_index < t.steps());
            assert!((0.0..=1.0).contains(&sample.fill_progress));
            assert!((0.0..=1.0).contains(&sample.progress));
            assert!(!sample.fill_progress.is_nan());
            scroll += 37.0;
        }
    }

    #[test]
    fn active_index_is_monotonic_in_scroll() {
        let t = timeline();
        let mut previous = 0;
        let mut scroll = TOP - 500.0;
        while scroll < TOP + 4_000.0 {
            let index = t.sample(scroll, TOP, VIEWPORT, container()).active_index;
            assert!(index >= previous, "index regressed at scroll {scroll}");
            previous = index;
            scroll += 13.0;
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let t = timeline();
        let a = t.sample(TOP + 617.0, TOP, VIEWPORT, container());
        let b = t.sample(TOP + 617.0, TOP, VIEWPORT, container());
        assert_eq!(a, b);
    }

    #[test]
    fn zero_scroll_range_never_divides_by_zero() {
        let t = timeline();

        let before = t.sample(TOP - 10.0, TOP, VIEWPORT, VIEWPORT);
        assert_eq!(before.active_index, 0);
        assert_eq!(before.fill_progress, 0.0);

        let at = t.sample(TOP, TOP, VIEWPORT, VIEWPORT);
        assert_eq!(at.active_index, 2);
        assert_eq!(at.fill_progress, 1.0);

        // Shorter than the viewport behaves the same way.
        let shorter = t.sample(TOP + 5.0, TOP, VIEWPORT, VIEWPORT / 2.0);
        assert_eq!(shorter.active_index, 2);
        assert_eq!(shorter.fill_progress, 1.0);
    }

    #[test]
    fn jump_targets_land_inside_their_band() {
        let t = timeline();
        let range = container() - VIEWPORT;
        for index in 0..t.steps() {
            let target = t.jump_target(index, TOP, VIEWPORT, container());
            let band_start = TOP + (index as f64 / 3.0) * range;
            assert!(target >= band_start - 1e-9);
            assert!(target <= band_start + 1.0 + 1e-9);

            let landed = t.sample(target, TOP, VIEWPORT, container());
            assert_eq!(landed.active_index, index);
            // At most one pixel into a band that is hundreds of pixels tall.
            assert!(landed.fill_progress * range / t.steps() as f64 <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn jump_target_clamps_out_of_range_indices() {
        let t = timeline();
        let last = t.jump_target(2, TOP, VIEWPORT, container());
        assert_eq!(t.jump_target(99, TOP, VIEWPORT, container()), last);
    }

    #[test]
    fn single_step_timeline_fills_across_the_whole_range() {
        let t = StepTimeline::new(1);
        let sample = t.sample(TOP + VIEWPORT, TOP, VIEWPORT, container());
        assert_eq!(sample.active_index, 0);
        assert!((sample.fill_progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_requested_steps_is_treated_as_one() {
        let t = StepTimeline::new(0);
        assert_eq!(t.steps(), 1);
        let sample = t.sample(TOP + 100.0, TOP, VIEWPORT, container());
        assert_eq!(sample.active_index, 0);
    }
}
