/*!
Project carousel: one card visible at a time, flipped around its vertical axis on navigation.

A flip has two halves. The old card turns away and fades out, then the new card turns in
from the opposite edge and fades in. The current index switches at the midpoint. While a
flip runs every navigation request is ignored.

| direction | old card exits to | new card enters from |
|-----------|-------------------|----------------------|
| Forward   | +90°              | -90°                 |
| Backward  | -90°              | +90°                 |

Direction comes from comparing indices, so wrapping from the last card to the first counts
as `Backward`.
*/

use crate::{
    constants::{CAROUSEL_FLIP_ANGLE_DEG, CAROUSEL_FLIP_HALF_S},
    listener::{ListenerGuard, ListenerKind, ListenerRegistry},
    utils::ease_in_out_quad,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Backward,
}

impl FlipDirection {
    pub fn sign(self) -> f32 {
        match self {
            FlipDirection::Forward => 1.0,
            FlipDirection::Backward => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Flip {
    to: usize,
    direction: FlipDirection,
    elapsed: f32,
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    direction: Option<FlipDirection>,
    flip: Option<Flip>,
    half: f32,
    _keys: ListenerGuard,
}

impl Carousel {
    /// A carousel over `len` cards, starting at the first. Holds the arrow-key listener until
    /// dropped.
    pub fn new(len: usize, registry: &ListenerRegistry) -> Self {
        Self {
            len,
            current: 0,
            direction: None,
            flip: None,
            half: CAROUSEL_FLIP_HALF_S,
            _keys: registry.acquire(ListenerKind::KeyDown),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The card on screen. Switches halfway through a flip.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Direction of the most recent flip, `None` before the first one.
    pub fn direction(&self) -> Option<FlipDirection> {
        self.direction
    }

    pub fn is_flipping(&self) -> bool {
        self.flip.is_some()
    }

    /// Starts a flip to `index`. Returns `false` if a flip is already running, the index is
    /// out of range, or it is already the current card.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_flipping() || index >= self.len || index == self.current {
            return false;
        }
        let direction = if index > self.current {
            FlipDirection::Forward
        } else {
            FlipDirection::Backward
        };
        self.direction = Some(direction);
        self.flip = Some(Flip {
            to: index,
            direction,
            elapsed: 0.0,
        });
        tracing::debug!(from = self.current, to = index, ?direction, "carousel flip");
        true
    }

    /// Next card, wrapping to the first after the last.
    pub fn next(&mut self) -> bool {
        if self.is_flipping() || self.len == 0 {
            return false;
        }
        self.go_to((self.current + 1) % self.len)
    }

    /// Previous card, wrapping to the last before the first.
    pub fn prev(&mut self) -> bool {
        if self.is_flipping() || self.len == 0 {
            return false;
        }
        self.go_to((self.current + self.len - 1) % self.len)
    }

    pub fn advance(&mut self, dt: f32) {
        let Some(flip) = self.flip.as_mut() else {
            return;
        };
        if dt.is_finite() {
            flip.elapsed += dt.max(0.0);
        }
        if flip.elapsed >= self.half {
            self.current = flip.to;
        }
        if flip.elapsed >= 2.0 * self.half {
            self.flip = None;
        }
    }

    /// Rotation of the visible card around its vertical axis, in degrees.
    pub fn angle(&self) -> f32 {
        let Some(flip) = self.flip else {
            return 0.0;
        };
        let sign = flip.direction.sign();
        if flip.elapsed < self.half {
            sign * CAROUSEL_FLIP_ANGLE_DEG * ease_in_out_quad(flip.elapsed / self.half)
        } else {
            let t = ease_in_out_quad((flip.elapsed - self.half) / self.half);
            -sign * CAROUSEL_FLIP_ANGLE_DEG * (1.0 - t)
        }
    }

    pub fn opacity(&self) -> f32 {
        let Some(flip) = self.flip else {
            return 1.0;
        };
        if flip.elapsed < self.half {
            1.0 - ease_in_out_quad(flip.elapsed / self.half)
        } else {
            ease_in_out_quad((flip.elapsed - self.half) / self.half)
        }
    }

    /// Horizontal foreshortening of the visible card, `cos(angle)`.
    pub fn width_factor(&self) -> f32 {
        self.angle().to_radians().cos().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(registry: &ListenerRegistry) -> Carousel {
        Carousel::new(5, registry)
    }

    fn finish(carousel: &mut Carousel) {
        carousel.advance(2.0 * CAROUSEL_FLIP_HALF_S);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let registry = ListenerRegistry::new();
        let mut carousel = carousel(&registry);

        assert!(carousel.prev());
        finish(&mut carousel);
        assert_eq!(carousel.current(), 4);
        assert_eq!(carousel.direction(), Some(FlipDirection::Forward));

        assert!(carousel.next());
        finish(&mut carousel);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.direction(), Some(FlipDirection::Backward));
    }

    #[test]
    fn navigation_is_locked_while_flipping() {
        let registry = ListenerRegistry::new();
        let mut carousel = carousel(&registry);

        assert!(carousel.next());
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(3));

        carousel.advance(0.6);
        assert!(carousel.is_flipping());
        assert!(!carousel.next());

        carousel.advance(0.4);
        assert!(!carousel.is_flipping());
        assert_eq!(carousel.current(), 1);
        assert!(carousel.go_to(3));
    }

    #[test]
    fn go_to_rejects_current_and_out_of_range() {
        let registry = ListenerRegistry::new();
        let mut carousel = carousel(&registry);
        assert!(!carousel.go_to(0));
        assert!(!carousel.go_to(5));
        assert!(!carousel.is_flipping());
        assert_eq!(carousel.direction(), None);
    }

    #[test]
    fn index_switches_at_the_midpoint() {
        let registry = ListenerRegistry::new();
        let mut carousel = carousel(&registry);
        carousel.go_to(2);

        carousel.advance(0.25);
        assert_eq!(carousel.current(), 0);
        assert!((carousel.angle() - 45.0).abs() < 1.0e-4);
        assert!((carousel.opacity() - 0.5).abs() < 1.0e-6);

        carousel.advance(0.25);
        assert_eq!(carousel.current(), 2);
        assert!((carousel.angle() + 90.0).abs() < 1.0e-4);
        assert!(carousel.opacity().abs() < 1.0e-6);

        carousel.advance(0.5);
        assert_eq!(carousel.angle(), 0.0);
        assert_eq!(carousel.opacity(), 1.0);
        assert_eq!(carousel.width_factor(), 1.0);
    }

    #[test]
    fn backward_flip_mirrors_the_angles() {
        let registry = ListenerRegistry::new();
        let mut carousel = carousel(&registry);
        carousel.go_to(3);
        finish(&mut carousel);

        carousel.go_to(1);
        carousel.advance(0.25);
        assert!((carousel.angle() + 45.0).abs() < 1.0e-4);
        carousel.advance(0.5);
        assert!(carousel.angle() > 0.0);
    }

    #[test]
    fn single_card_never_flips() {
        let registry = ListenerRegistry::new();
        let mut carousel = Carousel::new(1, &registry);
        assert!(!carousel.next());
        assert!(!carousel.prev());

        let mut empty = Carousel::new(0, &registry);
        assert!(!empty.next());
        assert!(empty.is_empty());
    }

    #[test]
    fn dropping_the_carousel_releases_the_key_listener() {
        let registry = ListenerRegistry::new();
        let carousel = carousel(&registry);
        assert_eq!(registry.live_of(ListenerKind::KeyDown), 1);
        drop(carousel);
        assert_eq!(registry.live(), 0);
    }
}
