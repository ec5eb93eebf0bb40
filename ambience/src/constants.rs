use std::ops::Range;

/// Upper bound on the number of shapes raining at once, whatever the viewport size.
pub const MAX_SHAPES: usize = 30;

/// Viewport area (px^2) that "pays for" one shape.
///
/// `shape_count = min(MAX_SHAPES, floor(width * height / AREA_PER_SHAPE))`
pub const AREA_PER_SHAPE: f32 = 25_000.0;

/// Edge length of a shape in logical pixels.
pub const SHAPE_SIZE_PX: Range<f32> = 10.0..40.0;

/// Unitless fall speed. The fall lasts `FALL_DURATION_SCALE / speed` seconds.
pub const FALL_SPEED: Range<f32> = 1.0..4.0;

/// Seconds to wait before a shape starts its first fall.
pub const START_DELAY_S: Range<f32> = 0.0..10.0;

/// Divided by the fall speed to get the fall duration in seconds.
pub const FALL_DURATION_SCALE: f32 = 10.0;

/// Full turn, in degrees. Used for initial rotation and extra spin during a fall.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Height of the collection tray at the bottom of the viewport.
pub const TRAY_HEIGHT_PX: f32 = 100.0;

/// Maximum parallax shift of the shape layer (both axes).
pub const LAYER_PARALLAX_PX: f32 = 20.0;

/// Maximum parallax shift of the tray (horizontal only).
pub const TRAY_PARALLAX_PX: f32 = 10.0;

/// Time for a parallax offset to settle on a new pointer target.
pub const PARALLAX_EASE_S: f32 = 1.0;

/// Seconds before the usage hint hides itself.
pub const HINT_TIMEOUT_S: f32 = 5.0;

/// Cursor dot chase time.
pub const CURSOR_DOT_EASE_S: f32 = 0.1;

/// Cursor ring chase time. Slower than the dot so the ring lags behind.
pub const CURSOR_RING_EASE_S: f32 = 0.3;

/// Fade in/out when the pointer enters or leaves the window.
pub const CURSOR_FADE_S: f32 = 0.3;

/// Press/release scale change.
pub const CURSOR_PRESS_EASE_S: f32 = 0.2;

/// Hover scale change over interactive elements.
pub const CURSOR_HOVER_EASE_S: f32 = 0.3;

/// Probability that a pointer move leaves a trail dot.
pub const TRAIL_SPAWN_CHANCE: f32 = 0.4;

/// Maximum number of trail dots alive at once. The oldest is dropped first.
pub const MAX_TRAILS: usize = 10;

/// Trail dot diameter.
pub const TRAIL_SIZE_PX: Range<f32> = 5.0..15.0;

/// Trail hue in degrees (blue to cyan).
pub const TRAIL_HUE_DEG: Range<f32> = 180.0..240.0;

/// Trail fade time. Opacity goes 0.7 -> 0, scale 1 -> 0.5.
pub const TRAIL_FADE_S: f32 = 1.0;

pub const TRAIL_START_OPACITY: f32 = 0.7;

pub const TRAIL_END_SCALE: f32 = 0.5;

/// The custom cursor is only shown on viewports at least this wide.
pub const CURSOR_MIN_VIEWPORT_WIDTH: f32 = 768.0;

/// Default marquee scroll speed in logical pixels per second.
pub const MARQUEE_SPEED_PX_S: f32 = 50.0;

/// Each half of a carousel flip (old card out, new card in).
pub const CAROUSEL_FLIP_HALF_S: f32 = 0.5;

/// Card edge angle at the midpoint of a flip, in degrees around the vertical axis.
pub const CAROUSEL_FLIP_ANGLE_DEG: f32 = 90.0;

/// Distance below its resting place a stacked card waits at before it scrolls in.
pub const CARD_REST_OFFSET_PX: f32 = 40.0;

pub const CARD_REST_OPACITY: f32 = 0.6;

pub const CARD_REST_SCALE: f32 = 0.95;

/// How far the previous card is pushed up as the next one arrives.
pub const CARD_PUSH_PX: f32 = 60.0;

/// Opacity the previous card loses as the next one arrives.
pub const CARD_PUSH_FADE: f32 = 0.3;

/// Scale the previous card loses as the next one arrives.
pub const CARD_PUSH_SHRINK: f32 = 0.05;

/// A card starts arriving when its top edge is this far above the viewport bottom, and has
/// arrived when its top reaches the viewport center.
pub const CARD_TRIGGER_INSET_PX: f32 = 200.0;
