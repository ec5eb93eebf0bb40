use crate::constants::MARQUEE_SPEED_PX_S;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarqueeDirection {
    /// Content travels right to left.
    #[default]
    Left,
    Right,
}

/// Endless horizontal ticker.
///
/// The content is laid out twice back to back; shifting both copies by `offset` in
/// `(-content_width, 0]` and wrapping every `content_width / speed` seconds gives a seamless
/// loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub direction: MarqueeDirection,
    /// Pixels per second.
    pub speed: f32,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            direction: MarqueeDirection::Left,
            speed: MARQUEE_SPEED_PX_S,
        }
    }
}

impl Marquee {
    pub fn new(direction: MarqueeDirection, speed: f32) -> Self {
        Self { direction, speed }
    }

    /// Seconds for one full cycle, or `None` when nothing can scroll.
    pub fn cycle_duration(&self, content_width: f32) -> Option<f32> {
        let valid = content_width.is_finite()
            && content_width > 0.0
            && self.speed.is_finite()
            && self.speed > 0.0;
        valid.then(|| content_width / self.speed)
    }

    /// Horizontal shift of the doubled content after `elapsed` seconds.
    pub fn offset(&self, elapsed: f32, content_width: f32) -> f32 {
        let Some(cycle) = self.cycle_duration(content_width) else {
            return 0.0;
        };
        let phase = elapsed.max(0.0).rem_euclid(cycle) / cycle;
        let shift = match self.direction {
            MarqueeDirection::Left => phase,
            MarqueeDirection::Right => 1.0 - phase,
        };
        // Keep the result in (-width, 0]; `1.0 - 0.0` would land exactly on -width.
        let offset = -shift * content_width;
        if offset <= -content_width { 0.0 } else { offset }
    }
}
