//! Random shape batches.
//!
//! Every attribute is drawn independently and uniformly from its configured range. The random
//! source is always passed in, so a seeded `fastrand::Rng` reproduces a batch exactly.

use nalgebra::Vector2;

use crate::{
    config::BackgroundConfig,
    constants::FULL_TURN_DEG,
    shape::{NeonColor, Shape, ShapeKind, Viewport},
    utils::{pick, sample_range},
};

/// Number of shapes for a viewport: `min(max_shapes, floor(area / area_per_shape))`.
pub fn shape_count(viewport: Viewport, config: &BackgroundConfig) -> usize {
    let raw = (viewport.area() / f64::from(config.area_per_shape)).floor();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // Saturating float->int cast (`inf` becomes `usize::MAX`), then clamp.
    (raw as usize).min(config.max_shapes)
}

/// Creates a fresh batch of shapes above the top edge of `viewport`.
///
/// Shapes start up to one screen height above the viewport so they trickle in instead of
/// arriving as a wall.
pub fn generate_shapes(
    viewport: Viewport,
    config: &BackgroundConfig,
    rng: &mut fastrand::Rng,
) -> Vec<Shape> {
    let count = shape_count(viewport, config);
    (0..count)
        .map(|_| {
            let kind = pick(rng, &ShapeKind::ALL);
            let size = sample_range(rng, &config.size);
            let x = sample_range(rng, &(0.0..viewport.width));
            let y = -size - rng.f32() * viewport.height;
            let rotation = sample_range(rng, &(0.0..FULL_TURN_DEG));
            let fall_speed = sample_range(rng, &config.fall_speed);
            let start_delay = sample_range(rng, &config.start_delay);
            let color = pick(rng, &NeonColor::ALL);

            Shape {
                kind,
                size,
                color,
                position: Vector2::new(x, y),
                rotation,
                fall_speed,
                start_delay,
                fallen: false,
            }
        })
        .collect()
}

/// Puts a shape back just above the top edge at a new random x and rotation.
pub fn respawn(shape: &mut Shape, viewport: Viewport, rng: &mut fastrand::Rng) {
    shape.position = Vector2::new(sample_range(rng, &(0.0..viewport.width)), -shape.size);
    shape.rotation = sample_range(rng, &(0.0..FULL_TURN_DEG));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SHAPES;
    use proptest::prelude::*;

    #[test]
    fn example_viewport_is_clamped_to_thirty() {
        // 1200 * 800 = 960_000 -> 38.4 -> 38 -> clamped to 30.
        let config = BackgroundConfig::default();
        assert_eq!(shape_count(Viewport::new(1200.0, 800.0), &config), 30);
    }

    #[test]
    fn small_viewports_get_fewer_shapes() {
        let config = BackgroundConfig::default();
        assert_eq!(shape_count(Viewport::new(500.0, 500.0), &config), 10);
        assert_eq!(shape_count(Viewport::new(100.0, 100.0), &config), 0);
        assert_eq!(shape_count(Viewport::new(0.0, 0.0), &config), 0);
    }

    #[test]
    fn huge_viewports_are_still_clamped() {
        let config = BackgroundConfig::default();
        assert_eq!(shape_count(Viewport::new(1.0e20, 1.0e20), &config), 30);
        assert_eq!(shape_count(Viewport::new(f32::MAX, f32::MAX), &config), 30);
    }

    #[test]
    fn same_seed_same_batch() {
        let config = BackgroundConfig::default();
        let viewport = Viewport::new(1280.0, 720.0);
        let a = generate_shapes(viewport, &config, &mut fastrand::Rng::with_seed(42));
        let b = generate_shapes(viewport, &config, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);

        let c = generate_shapes(viewport, &config, &mut fastrand::Rng::with_seed(43));
        assert_ne!(a, c);
    }

    #[test]
    fn shapes_spawn_above_the_viewport() {
        let config = BackgroundConfig::default();
        let viewport = Viewport::new(1280.0, 720.0);
        let shapes = generate_shapes(viewport, &config, &mut fastrand::Rng::with_seed(1));
        for shape in &shapes {
            assert!(shape.position.y <= -shape.size);
            assert!(shape.position.y >= -shape.size - viewport.height);
            assert!((0.0..viewport.width).contains(&shape.position.x));
            assert!((0.0..360.0).contains(&shape.rotation));
            assert!(!shape.fallen);
        }
    }

    #[test]
    fn respawn_resets_to_top_edge() {
        let config = BackgroundConfig::default();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = fastrand::Rng::with_seed(9);
        let mut shape = generate_shapes(viewport, &config, &mut rng).remove(0);
        shape.position.y = 700.0;

        respawn(&mut shape, viewport, &mut rng);

        assert_eq!(shape.position.y, -shape.size);
        assert!((0.0..viewport.width).contains(&shape.position.x));
    }

    proptest! {
        #[test]
        fn count_matches_clamped_area(width in 0.0f32..1.0e30, height in 0.0f32..1.0e30) {
            let config = BackgroundConfig::default();
            let count = shape_count(Viewport::new(width, height), &config);
            let area = f64::from(width) * f64::from(height);
            let expected = ((area / 25_000.0).floor() as usize).min(MAX_SHAPES);
            prop_assert!(count <= MAX_SHAPES);
            prop_assert_eq!(count, expected);
        }

        #[test]
        fn small_viewports_count_exactly(width in 0.0f32..4000.0, height in 0.0f32..4000.0) {
            let config = BackgroundConfig::default();
            let count = shape_count(Viewport::new(width, height), &config);
            let area = f64::from(width) * f64::from(height);
            prop_assert_eq!(count, ((area / 25_000.0).floor() as usize).min(MAX_SHAPES));
        }

        #[test]
        fn attributes_stay_in_range(seed in any::<u64>(), width in 1.0f32..3000.0, height in 1.0f32..3000.0) {
            let config = BackgroundConfig::default();
            let viewport = Viewport::new(width, height);
            let shapes = generate_shapes(viewport, &config, &mut fastrand::Rng::with_seed(seed));
            prop_assert_eq!(shapes.len(), shape_count(viewport, &config));
            for shape in shapes {
                prop_assert!((10.0..40.0).contains(&shape.size));
                prop_assert!((1.0..4.0).contains(&shape.fall_speed));
                prop_assert!((0.0..10.0).contains(&shape.start_delay));
            }
        }
    }
}
