//! Critically damped spring used to smooth the stepper's fill bar.
//!
//! The active step switches instantly; only the thin fill indicator runs
//! through this filter so fast scrolling doesn't make it jitter.

const SETTLE_VALUE_EPSILON: f64 = 1e-3;
const SETTLE_VELOCITY_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    /// Angular frequency; damping is fixed at critical.
    stiffness: f64,
}

impl Spring {
    pub fn new(initial: f64, stiffness: f64) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            stiffness: stiffness.max(f64::EPSILON),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps straight to the current target without animating. Used on mount
    /// so a page loaded mid-scroll doesn't animate the bar up from zero.
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_VALUE_EPSILON
            && self.velocity.abs() < SETTLE_VELOCITY_EPSILON
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    ///
    /// Uses the closed-form critically damped solution, so the step is exact
    /// for any dt and a step that lands inside the settle window snaps onto
    /// the target instead of approaching it forever.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 {
            return self.value;
        }

        let omega = self.stiffness;
        let offset = self.value - self.target;
        let temp = self.velocity + omega * offset;
        let decay = (-omega * dt).exp();

        self.value = self.target + (offset + temp * dt) * decay;
        self.velocity = (self.velocity - omega * temp * dt) * decay;

        if self.settled() {
            self.snap_to_target();
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.03;

    #[test]
    fn converges_onto_the_target() {
        let mut spring = Spring::new(0.0, 14.0);
        spring.set_target(1.0);
        for _ in 0..200 {
            spring.step(DT);
        }
        assert_eq!(spring.value(), 1.0);
        assert!(spring.settled());
    }

    #[test]
    fn never_overshoots_from_rest() {
        let mut spring = Spring::new(0.0, 14.0);
        spring.set_target(1.0);
        let mut previous = 0.0;
        for _ in 0..200 {
            let value = spring.step(DT);
            assert!(value <= 1.0 + 1e-9, "overshot to {value}");
            assert!(value >= previous - 1e-9, "reversed at {value}");
            previous = value;
        }
    }

    #[test]
    fn retargeting_mid_flight_converges_on_the_new_target() {
        let mut spring = Spring::new(0.0, 14.0);
        spring.set_target(1.0);
        for _ in 0..5 {
            spring.step(DT);
        }
        spring.set_target(0.25);
        for _ in 0..300 {
            spring.step(DT);
        }
        assert_eq!(spring.value(), 0.25);
    }

    #[test]
    fn zero_or_negative_dt_is_a_no_op() {
        let mut spring = Spring::new(0.4, 14.0);
        spring.set_target(1.0);
        assert_eq!(spring.step(0.0), 0.4);
        assert_eq!(spring.step(-1.0), 0.4);
    }

    #[test]
    fn snap_lands_exactly_on_the_target() {
        let mut spring = Spring::new(0.0, 14.0);
        spring.set_target(0.8);
        spring.snap_to_target();
        assert_eq!(spring.value(), 0.8);
        assert!(spring.settled());
    }

    #[test]
    fn a_settled_spring_stays_put() {
        let mut spring = Spring::new(0.6, 14.0);
        for _ in 0..10 {
            assert_eq!(spring.step(DT), 0.6);
        }
    }
}
