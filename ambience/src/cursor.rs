/*!
Custom cursor: a dot, a lagging ring and a short glow trail.

The dot and ring chase the pointer with different ease times, so the ring visibly trails the
dot. Each pointer move has a chance of dropping a trail dot that fades and shrinks, with the
oldest dot evicted once `max_trails` are alive.

Scale targets:

| situation              | dot | ring |
|------------------------|-----|------|
| idle                   | 1.0 | 1.0  |
| button held            | 0.8 | 1.2  |
| over interactive item  | 0.5 | 1.5  |

Hover wins over press when both apply.
*/

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::{
    config::CursorConfig,
    constants::{
        CURSOR_FADE_S, CURSOR_HOVER_EASE_S, CURSOR_PRESS_EASE_S, TRAIL_END_SCALE,
        TRAIL_START_OPACITY,
    },
    ease::Eased,
    listener::{ListenerGuard, ListenerKind, ListenerRegistry},
    shape::Viewport,
    utils::{lerp, sample_range},
};

/// Listeners the cursor holds while enabled.
pub const CURSOR_LISTENERS: [ListenerKind; 5] = [
    ListenerKind::PointerMove,
    ListenerKind::PointerEnter,
    ListenerKind::PointerLeave,
    ListenerKind::PointerDown,
    ListenerKind::PointerUp,
];

#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    pub position: Vector2<f32>,
    pub size: f32,
    pub hue: f32,
    pub age: f32,
}

impl Trail {
    pub fn opacity(&self, fade: f32) -> f32 {
        lerp(TRAIL_START_OPACITY, 0.0, (self.age / fade).clamp(0.0, 1.0))
    }

    pub fn scale(&self, fade: f32) -> f32 {
        lerp(1.0, TRAIL_END_SCALE, (self.age / fade).clamp(0.0, 1.0))
    }
}

#[derive(Debug)]
pub struct CustomCursor {
    config: CursorConfig,
    rng: fastrand::Rng,
    dot: Eased<Vector2<f32>>,
    ring: Eased<Vector2<f32>>,
    dot_scale: Eased<f32>,
    ring_scale: Eased<f32>,
    opacity: Eased<f32>,
    pressed: bool,
    hovering: bool,
    trails: VecDeque<Trail>,
    _listeners: Vec<ListenerGuard>,
}

impl CustomCursor {
    /// The custom cursor only replaces the system one on wide, non-touch screens.
    pub fn enabled_for(viewport: Viewport, touch: bool, config: &CursorConfig) -> bool {
        !touch && viewport.width >= config.min_viewport_width
    }

    pub fn new(config: CursorConfig, registry: &ListenerRegistry, rng: fastrand::Rng) -> Self {
        Self {
            dot: Eased::new(Vector2::zeros(), config.dot_ease),
            ring: Eased::new(Vector2::zeros(), config.ring_ease),
            dot_scale: Eased::new(1.0, CURSOR_PRESS_EASE_S),
            ring_scale: Eased::new(1.0, CURSOR_PRESS_EASE_S),
            // Hidden until the pointer enters the window.
            opacity: Eased::new(0.0, CURSOR_FADE_S),
            pressed: false,
            hovering: false,
            trails: VecDeque::with_capacity(config.max_trails + 1),
            _listeners: registry.acquire_all(&CURSOR_LISTENERS),
            config,
            rng,
        }
    }

    pub fn pointer_moved(&mut self, position: Vector2<f32>) {
        self.dot.retarget(position);
        self.ring.retarget(position);

        // Movement implies the pointer is inside the window, enter event or not.
        if self.opacity.target() < 1.0 {
            self.opacity.retarget(1.0);
        }

        if self.rng.f32() < self.config.trail_chance {
            self.spawn_trail(position);
        }
    }

    fn spawn_trail(&mut self, position: Vector2<f32>) {
        if self.config.max_trails == 0 {
            return;
        }
        let trail = Trail {
            position,
            size: sample_range(&mut self.rng, &self.config.trail_size),
            hue: sample_range(&mut self.rng, &self.config.trail_hue).floor(),
            age: 0.0,
        };
        self.trails.push_back(trail);
        while self.trails.len() > self.config.max_trails {
            self.trails.pop_front();
        }
    }

    pub fn entered(&mut self) {
        self.opacity.retarget(1.0);
    }

    pub fn left(&mut self) {
        self.opacity.retarget(0.0);
    }

    pub fn pressed(&mut self) {
        self.pressed = true;
        self.retarget_scales();
    }

    pub fn released(&mut self) {
        self.pressed = false;
        self.retarget_scales();
    }

    /// Pointer entered (`true`) or left (`false`) an interactive element.
    pub fn hover(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.retarget_scales();
        }
    }

    fn retarget_scales(&mut self) {
        let (dot, ring, duration) = if self.hovering {
            (0.5, 1.5, CURSOR_HOVER_EASE_S)
        } else if self.pressed {
            (0.8, 1.2, CURSOR_PRESS_EASE_S)
        } else if self.dot_scale.target() == 0.5 {
            // Coming back from hover.
            (1.0, 1.0, CURSOR_HOVER_EASE_S)
        } else {
            (1.0, 1.0, CURSOR_PRESS_EASE_S)
        };
        self.dot_scale.retarget_over(dot, duration);
        self.ring_scale.retarget_over(ring, duration);
    }

    pub fn advance(&mut self, dt: f32) {
        self.dot.advance(dt);
        self.ring.advance(dt);
        self.dot_scale.advance(dt);
        self.ring_scale.advance(dt);
        self.opacity.advance(dt);

        let fade = self.config.trail_fade;
        for trail in &mut self.trails {
            trail.age += dt.max(0.0);
        }
        self.trails.retain(|trail| trail.age < fade);
    }

    pub fn dot_position(&self) -> Vector2<f32> {
        self.dot.value()
    }

    pub fn ring_position(&self) -> Vector2<f32> {
        self.ring.value()
    }

    pub fn dot_scale(&self) -> f32 {
        self.dot_scale.value()
    }

    pub fn ring_scale(&self) -> f32 {
        self.ring_scale.value()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn trails(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(registry: &ListenerRegistry, config: CursorConfig) -> CustomCursor {
        CustomCursor::new(config, registry, fastrand::Rng::with_seed(5))
    }

    #[test]
    fn only_enabled_on_wide_non_touch_viewports() {
        let config = CursorConfig::default();
        assert!(CustomCursor::enabled_for(Viewport::new(1024.0, 768.0), false, &config));
        assert!(CustomCursor::enabled_for(Viewport::new(768.0, 400.0), false, &config));
        assert!(!CustomCursor::enabled_for(Viewport::new(767.0, 400.0), false, &config));
        assert!(!CustomCursor::enabled_for(Viewport::new(1024.0, 768.0), true, &config));
    }

    #[test]
    fn ring_lags_behind_dot() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(&registry, CursorConfig::default());
        cursor.pointer_moved(Vector2::new(100.0, 0.0));
        cursor.advance(0.1);

        assert_eq!(cursor.dot_position(), Vector2::new(100.0, 0.0));
        assert!(cursor.ring_position().x < 100.0);

        cursor.advance(0.3);
        assert_eq!(cursor.ring_position(), Vector2::new(100.0, 0.0));
    }

    #[test]
    fn trails_are_capped_and_fade_out() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(
            &registry,
            CursorConfig {
                trail_chance: 1.0,
                ..Default::default()
            },
        );

        for i in 0..50 {
            cursor.pointer_moved(Vector2::new(i as f32, 0.0));
            assert!(cursor.trail_count() <= 10);
        }
        assert_eq!(cursor.trail_count(), 10);
        // Oldest were evicted first.
        assert_eq!(cursor.trails().next().map(|t| t.position.x), Some(40.0));

        cursor.advance(0.5);
        let trail = cursor.trails().next().cloned().unwrap();
        assert!((trail.opacity(1.0) - 0.35).abs() < 1.0e-6);
        assert!((trail.scale(1.0) - 0.75).abs() < 1.0e-6);

        cursor.advance(0.5);
        assert_eq!(cursor.trail_count(), 0);
    }

    #[test]
    fn trail_attributes_stay_in_range() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(
            &registry,
            CursorConfig {
                trail_chance: 1.0,
                max_trails: 1000,
                ..Default::default()
            },
        );
        for _ in 0..500 {
            cursor.pointer_moved(Vector2::new(1.0, 1.0));
        }
        for trail in cursor.trails() {
            assert!((5.0..15.0).contains(&trail.size));
            assert!((180.0..240.0).contains(&trail.hue));
        }
    }

    #[test]
    fn zero_chance_never_leaves_trails() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(
            &registry,
            CursorConfig {
                trail_chance: 0.0,
                ..Default::default()
            },
        );
        for _ in 0..100 {
            cursor.pointer_moved(Vector2::new(3.0, 4.0));
        }
        assert_eq!(cursor.trail_count(), 0);
    }

    #[test]
    fn press_and_hover_scales() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(&registry, CursorConfig::default());

        cursor.pressed();
        cursor.advance(1.0);
        assert_eq!((cursor.dot_scale(), cursor.ring_scale()), (0.8, 1.2));

        cursor.hover(true);
        cursor.advance(1.0);
        assert_eq!((cursor.dot_scale(), cursor.ring_scale()), (0.5, 1.5));

        cursor.hover(false);
        cursor.released();
        cursor.advance(1.0);
        assert_eq!((cursor.dot_scale(), cursor.ring_scale()), (1.0, 1.0));
    }

    #[test]
    fn fades_in_on_enter_and_out_on_leave() {
        let registry = ListenerRegistry::new();
        let mut cursor = cursor(&registry, CursorConfig::default());
        assert_eq!(cursor.opacity(), 0.0);

        cursor.entered();
        cursor.advance(0.3);
        assert_eq!(cursor.opacity(), 1.0);

        cursor.left();
        cursor.advance(0.3);
        assert_eq!(cursor.opacity(), 0.0);
    }

    #[test]
    fn dropping_the_cursor_releases_its_listeners() {
        let registry = ListenerRegistry::new();
        let cursor = cursor(&registry, CursorConfig::default());
        assert_eq!(registry.live(), CURSOR_LISTENERS.len());
        drop(cursor);
        assert_eq!(registry.live(), 0);
    }
}
