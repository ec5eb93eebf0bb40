use std::ops::{Add, Mul, Sub};

use crate::utils::ease_out_quad;

/// A value that eases towards a target over a fixed duration with a quadratic ease-out.
///
/// Retargeting mid-flight restarts the curve from wherever the value currently is, so rapid
/// retargets (pointer moves) never jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eased<T> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
}

impl<T> Eased<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(value: T, duration: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
        }
    }

    pub fn value(&self) -> T {
        self.from + (self.to - self.from) * ease_out_quad(self.progress())
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_settled(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn retarget(&mut self, to: T) {
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Retargets with a different duration, e.g. press vs. hover transitions.
    pub fn retarget_over(&mut self, to: T, duration: f32) {
        self.retarget(to);
        self.duration = duration;
    }

    /// Jumps straight to `value` with no transition.
    pub fn set(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn starts_settled_on_initial_value() {
        let eased = Eased::new(3.0f32, 1.0);
        assert_eq!(eased.value(), 3.0);
        assert!(eased.is_settled());
    }

    #[test]
    fn reaches_target_after_duration() {
        let mut eased = Eased::new(0.0f32, 1.0);
        eased.retarget(10.0);
        eased.advance(0.5);
        assert_eq!(eased.value(), 7.5);
        eased.advance(0.6);
        assert_eq!(eased.value(), 10.0);
        assert!(eased.is_settled());
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let mut eased = Eased::new(Vector2::new(0.0f32, 0.0), 1.0);
        eased.retarget(Vector2::new(10.0, 0.0));
        eased.advance(0.5);
        let mid = eased.value();

        eased.retarget(Vector2::new(-10.0, 0.0));

        assert_eq!(eased.value(), mid);
        assert_eq!(eased.target(), Vector2::new(-10.0, 0.0));
    }

    #[test]
    fn set_jumps_without_transition() {
        let mut eased = Eased::new(1.0f32, 0.3);
        eased.retarget(0.0);
        eased.set(0.5);
        assert_eq!(eased.value(), 0.5);
        assert!(eased.is_settled());
    }
}
