/*!
Fall animation for the raining shapes.

Each shape owns one [`FallTween`]. A tween first burns its start delay, then moves the shape
linearly from its spawn y to a target y while spinning it by a random extra amount. What
happens at the end depends on [`FallMode`]:

- `Loop`: the shape respawns above the viewport and falls again. The start delay only applies
  to the first fall.
- `Collect`: the shape is flagged `fallen`, reported as landed, and never moves again.

Pausing is global. While paused neither delays nor falls progress, so resuming continues
from exactly where things stopped.

```text
Waiting(delay) --delay elapsed--> Falling --t = 1--> Falling (Loop, respawned)
                                          \--t = 1--> Fallen  (Collect)
```
*/

use crate::{
    config::{BackgroundConfig, FallMode},
    constants::FULL_TURN_DEG,
    generator::respawn,
    shape::{Shape, Viewport},
    utils::{lerp, sample_range},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RainState {
    #[default]
    Raining,
    Paused,
}

impl RainState {
    pub fn toggled(self) -> Self {
        match self {
            RainState::Raining => RainState::Paused,
            RainState::Paused => RainState::Raining,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapePhase {
    /// Start delay not over yet. Holds the remaining seconds.
    Waiting(f32),
    Falling,
    Fallen,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallTween {
    pub phase: ShapePhase,
    pub elapsed: f32,
    pub duration: f32,
    pub from_y: f32,
    pub to_y: f32,
    pub from_rotation: f32,
    pub spin: f32,
    /// How many times the shape has wrapped around in loop mode.
    pub loops: u32,
}

impl FallTween {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Starts the next loop. `carry` is time already spent past the end of the last fall.
    fn restart(&mut self, shape: &Shape, spin: f32, carry: f32) {
        self.phase = ShapePhase::Falling;
        self.elapsed = carry;
        self.from_y = shape.position.y;
        self.from_rotation = shape.rotation;
        self.spin = spin;
        self.loops += 1;
    }

    fn apply(&self, shape: &mut Shape) {
        let t = self.progress();
        shape.position.y = lerp(self.from_y, self.to_y, t);
        shape.rotation = (self.from_rotation + self.spin * t).rem_euclid(FULL_TURN_DEG);
    }
}

/// Emitted once per shape when it completes a fall in `Collect` mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    pub index: usize,
}

#[derive(Debug)]
pub struct FallAnimator {
    mode: FallMode,
    state: RainState,
    viewport: Viewport,
    tray_height: f32,
    tweens: Vec<FallTween>,
}

impl FallAnimator {
    /// Builds one tween per shape. `shapes` must keep the same order for every `advance` call.
    pub fn new(
        shapes: &[Shape],
        viewport: Viewport,
        config: &BackgroundConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let mut animator = Self {
            mode: config.mode,
            state: RainState::Raining,
            viewport,
            tray_height: config.tray_height,
            tweens: Vec::with_capacity(shapes.len()),
        };
        animator.tweens = shapes
            .iter()
            .map(|shape| FallTween {
                phase: ShapePhase::Waiting(shape.start_delay),
                elapsed: 0.0,
                duration: shape.fall_duration(config.fall_duration_scale),
                from_y: shape.position.y,
                to_y: animator.target_y(shape),
                from_rotation: shape.rotation,
                spin: sample_range(rng, &(0.0..FULL_TURN_DEG)),
                loops: 0,
            })
            .collect();
        animator
    }

    /// Where a fall ends: fully below the screen when looping, on the tray's top edge when
    /// collecting.
    pub fn target_y(&self, shape: &Shape) -> f32 {
        match self.mode {
            FallMode::Loop => self.viewport.height + shape.size,
            FallMode::Collect => self.viewport.height - self.tray_height,
        }
    }

    pub fn mode(&self) -> FallMode {
        self.mode
    }

    pub fn state(&self) -> RainState {
        self.state
    }

    pub fn is_raining(&self) -> bool {
        self.state == RainState::Raining
    }

    pub fn tweens(&self) -> &[FallTween] {
        &self.tweens
    }

    pub fn toggle(&mut self) -> RainState {
        self.state = self.state.toggled();
        tracing::debug!(state = ?self.state, "rain toggled");
        self.state
    }

    pub fn pause(&mut self) {
        self.state = RainState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RainState::Raining;
    }

    /// Drops every tween. Shapes stay where they are and never move again.
    pub fn kill(&mut self) {
        self.tweens.clear();
    }

    /// Advances all tweens by `dt` seconds and writes the results into `shapes`.
    ///
    /// Returns the shapes that landed during this step (collect mode only).
    pub fn advance(
        &mut self,
        dt: f32,
        shapes: &mut [Shape],
        rng: &mut fastrand::Rng,
    ) -> Vec<Landing> {
        let mut landings = Vec::new();
        if self.state == RainState::Paused || dt.is_nan() || dt <= 0.0 {
            return landings;
        }

        for (index, (tween, shape)) in self.tweens.iter_mut().zip(shapes.iter_mut()).enumerate() {
            let mut step = dt;

            if let ShapePhase::Waiting(remaining) = tween.phase {
                if remaining > step {
                    tween.phase = ShapePhase::Waiting(remaining - step);
                    continue;
                }
                step -= remaining;
                tween.phase = ShapePhase::Falling;
            }

            if tween.phase != ShapePhase::Falling {
                continue;
            }

            tween.elapsed += step;
            tween.apply(shape);
            if tween.elapsed < tween.duration {
                continue;
            }

            match self.mode {
                FallMode::Loop => {
                    // A long frame can overshoot by more than a whole fall; skipped loops are
                    // not replayed.
                    let carry = (tween.elapsed - tween.duration).rem_euclid(tween.duration);
                    respawn(shape, self.viewport, rng);
                    let spin = sample_range(rng, &(0.0..FULL_TURN_DEG));
                    tween.restart(shape, spin, carry);
                    tween.apply(shape);
                }
                FallMode::Collect => {
                    tween.phase = ShapePhase::Fallen;
                    shape.fallen = true;
                    landings.push(Landing { index });
                }
            }
        }

        landings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_shapes;

    fn setup(mode: FallMode, seed: u64) -> (Vec<Shape>, FallAnimator, fastrand::Rng) {
        let config = BackgroundConfig {
            mode,
            ..Default::default()
        };
        let viewport = Viewport::new(1200.0, 800.0);
        let mut rng = fastrand::Rng::with_seed(seed);
        let shapes = generate_shapes(viewport, &config, &mut rng);
        let animator = FallAnimator::new(&shapes, viewport, &config, &mut rng);
        (shapes, animator, rng)
    }

    #[test]
    fn shapes_wait_for_their_start_delay() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Collect, 5);
        let before = shapes.clone();

        // Step to half of the longest delay.
        let (idx, delay) = shapes
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.start_delay))
            .fold((0, 0.0), |acc, x| if x.1 > acc.1 { x } else { acc });
        animator.advance(delay * 0.5, &mut shapes, &mut rng);

        assert_eq!(shapes[idx].position, before[idx].position);
        assert!(matches!(animator.tweens()[idx].phase, ShapePhase::Waiting(_)));
    }

    #[test]
    fn collect_mode_lands_every_shape_exactly_once() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Collect, 11);
        let mut landed = vec![0u32; shapes.len()];

        // Max delay 10s + max duration 10s, stepped at 60fps with headroom.
        for _ in 0..(60 * 25) {
            for landing in animator.advance(1.0 / 60.0, &mut shapes, &mut rng) {
                landed[landing.index] += 1;
            }
        }

        assert!(landed.iter().all(|&n| n == 1), "{landed:?}");
        for shape in &shapes {
            assert!(shape.fallen);
            assert!((shape.position.y - (800.0 - 100.0)).abs() < 1.0e-3);
        }
    }

    #[test]
    fn loop_mode_never_lands_and_respawns_at_top() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Loop, 3);

        for _ in 0..(60 * 30) {
            assert!(animator.advance(1.0 / 60.0, &mut shapes, &mut rng).is_empty());
        }

        assert!(shapes.iter().all(|s| !s.fallen));
        // Longest first fall is 10s delay + 10s fall, so by 30s every shape has wrapped.
        assert!(animator.tweens().iter().all(|t| t.loops >= 1));
        for shape in &shapes {
            assert!(shape.position.y >= -shape.size - 1.0e-3);
            assert!(shape.position.y <= 800.0 + shape.size + 1.0e-3);
        }
    }

    #[test]
    fn paused_animator_freezes_everything() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Collect, 21);
        animator.advance(4.0, &mut shapes, &mut rng);
        let frozen_shapes = shapes.clone();
        let frozen_tweens = animator.tweens().to_vec();

        animator.pause();
        for _ in 0..100 {
            assert!(animator.advance(0.5, &mut shapes, &mut rng).is_empty());
        }

        assert_eq!(shapes, frozen_shapes);
        assert_eq!(animator.tweens(), frozen_tweens.as_slice());
    }

    #[test]
    fn double_toggle_is_identity() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Collect, 8);
        animator.advance(3.0, &mut shapes, &mut rng);
        let snapshot = shapes.clone();

        assert_eq!(animator.toggle(), RainState::Paused);
        assert_eq!(animator.toggle(), RainState::Raining);

        assert_eq!(shapes, snapshot);
        assert!(animator.is_raining());
    }

    #[test]
    fn resume_continues_from_frozen_position() {
        let (mut a_shapes, mut a, mut a_rng) = setup(FallMode::Collect, 13);
        let (mut b_shapes, mut b, mut b_rng) = setup(FallMode::Collect, 13);

        // a: 2s, pause, (time passes), resume, 2s. b: 4s straight.
        a.advance(2.0, &mut a_shapes, &mut a_rng);
        a.pause();
        a.advance(5.0, &mut a_shapes, &mut a_rng);
        a.resume();
        a.advance(2.0, &mut a_shapes, &mut a_rng);

        b.advance(2.0, &mut b_shapes, &mut b_rng);
        b.advance(2.0, &mut b_shapes, &mut b_rng);

        assert_eq!(a_shapes, b_shapes);
    }

    #[test]
    fn falling_is_linear_in_time() {
        let config = BackgroundConfig::default();
        let viewport = Viewport::new(1000.0, 1000.0);
        let mut rng = fastrand::Rng::with_seed(2);
        let mut shapes = generate_shapes(viewport, &config, &mut rng);
        shapes.truncate(1);
        shapes[0].start_delay = 0.0;
        shapes[0].fall_speed = 2.0; // 5s fall
        let mut animator = FallAnimator::new(&shapes, viewport, &config, &mut rng);
        let from = shapes[0].position.y;
        let to = animator.target_y(&shapes[0]);

        animator.advance(2.5, &mut shapes, &mut rng);

        assert!((shapes[0].position.y - (from + to) * 0.5).abs() < 1.0e-3);
        assert!((animator.tweens()[0].progress() - 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn loop_restart_keeps_leftover_time() {
        let config = BackgroundConfig {
            mode: FallMode::Loop,
            ..Default::default()
        };
        let viewport = Viewport::new(1000.0, 1000.0);
        let mut rng = fastrand::Rng::with_seed(6);
        let mut shapes = generate_shapes(viewport, &config, &mut rng);
        shapes.truncate(1);
        shapes[0].start_delay = 0.0;
        shapes[0].fall_speed = 2.0; // 5s fall
        let mut animator = FallAnimator::new(&shapes, viewport, &config, &mut rng);

        animator.advance(5.5, &mut shapes, &mut rng);

        let tween = &animator.tweens()[0];
        assert_eq!(tween.loops, 1);
        assert!((tween.elapsed - 0.5).abs() < 1.0e-4);
        let expected = lerp(-shapes[0].size, animator.target_y(&shapes[0]), 0.1);
        assert!((shapes[0].position.y - expected).abs() < 1.0e-2);
    }

    #[test]
    fn loops_track_wall_clock_time() {
        let config = BackgroundConfig {
            mode: FallMode::Loop,
            ..Default::default()
        };
        let viewport = Viewport::new(1000.0, 1000.0);
        let mut rng = fastrand::Rng::with_seed(12);
        let mut shapes = generate_shapes(viewport, &config, &mut rng);
        shapes.truncate(1);
        shapes[0].start_delay = 0.0;
        shapes[0].fall_speed = 4.0; // 2.5s fall
        let mut animator = FallAnimator::new(&shapes, viewport, &config, &mut rng);

        // 99s at 7 steps per second. Every fall ends half a step past its duration; dropping
        // that remainder would lose more than a whole loop by the end.
        for _ in 0..693 {
            animator.advance(1.0 / 7.0, &mut shapes, &mut rng);
        }

        assert_eq!(animator.tweens()[0].loops, 39);
    }

    #[test]
    fn kill_stops_all_motion() {
        let (mut shapes, mut animator, mut rng) = setup(FallMode::Loop, 4);
        animator.advance(3.0, &mut shapes, &mut rng);
        animator.kill();
        let snapshot = shapes.clone();

        animator.advance(3.0, &mut shapes, &mut rng);

        assert!(animator.tweens().is_empty());
        assert_eq!(shapes, snapshot);
    }
}
