use std::ops::Range;

/// Uniform sample from a half-open range.
///
/// `start + u * (end - start)` can round up to `end` for `u` just below 1, which would break
/// the half-open contract, so that case folds back to `start`.
pub fn sample_range(rng: &mut fastrand::Rng, range: &Range<f32>) -> f32 {
    let value = range.start + rng.f32() * (range.end - range.start);
    if value < range.end { value } else { range.start }
}

/// Uniform pick from a non-empty slice.
pub fn pick<T: Copy>(rng: &mut fastrand::Rng, items: &[T]) -> T {
    items[rng.usize(..items.len())]
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out (`power2.out`): fast start, gentle landing. `t` is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out: slow at both ends. `t` is clamped to `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_range_stays_half_open() {
        let mut rng = fastrand::Rng::with_seed(7);
        let range = 10.0..40.0;
        for _ in 0..10_000 {
            let v = sample_range(&mut rng, &range);
            assert!(range.contains(&v), "{v} escaped {range:?}");
        }
    }

    #[test]
    fn ease_out_quad_endpoints_and_shape() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        // Out-of-range progress is clamped.
        assert_eq!(ease_out_quad(-1.0), 0.0);
        assert_eq!(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn ease_in_out_quad_is_symmetric() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(0.25), 0.125);
        assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1.0e-6);
    }

    #[test]
    fn pick_only_returns_members() {
        let mut rng = fastrand::Rng::with_seed(3);
        let items = [1, 2, 3];
        for _ in 0..100 {
            assert!(items.contains(&pick(&mut rng, &items)));
        }
    }
}
