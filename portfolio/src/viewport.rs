//! Conversions between page space and Bevy world space.
//!
//! Page space is what `ambience` works in: logical pixels, origin at the top-left corner,
//! +Y down. The 2D camera sits at the origin with one world unit per logical pixel, so world
//! space is the same scale with the origin at the window center and +Y up.

use ambience::Viewport;
use bevy::{prelude::*, window::PrimaryWindow};
use nalgebra::Vector2;

pub fn from_window(window: &Window) -> Viewport {
    Viewport::new(window.width(), window.height())
}

/// Viewport of the primary window, if there is one.
pub fn primary(window: &Query<&Window, With<PrimaryWindow>>) -> Option<Viewport> {
    window.single().ok().map(from_window)
}

/// Maps a page-space point to world space.
pub fn to_world(point: Vector2<f32>, viewport: Viewport) -> Vec2 {
    Vec2::new(
        point.x - viewport.width * 0.5,
        viewport.height * 0.5 - point.y,
    )
}

/// Center of a `size`-wide box whose top-left corner is at `top_left`, in world space.
pub fn box_center(top_left: Vector2<f32>, size: f32, viewport: Viewport) -> Vec2 {
    to_world(top_left + Vector2::repeat(size * 0.5), viewport)
}

/// Page-space offset (+Y down) to a world-space offset (+Y up).
pub fn offset_to_world(offset: Vector2<f32>) -> Vec2 {
    Vec2::new(offset.x, -offset.y)
}

/// Page-space rotation (degrees, clockwise on screen) to a world-space rotation.
pub fn rotation_to_world(degrees: f32) -> Quat {
    Quat::from_rotation_z(-degrees.to_radians())
}

pub fn to_page(position: Vec2) -> Vector2<f32> {
    Vector2::new(position.x, position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn corners_map_to_window_edges() {
        assert_eq!(to_world(Vector2::new(0.0, 0.0), VIEWPORT), Vec2::new(-400.0, 300.0));
        assert_eq!(to_world(Vector2::new(800.0, 600.0), VIEWPORT), Vec2::new(400.0, -300.0));
        assert_eq!(to_world(Vector2::new(400.0, 300.0), VIEWPORT), Vec2::ZERO);
    }

    #[test]
    fn box_center_is_half_a_size_in() {
        let center = box_center(Vector2::new(0.0, 0.0), 20.0, VIEWPORT);
        assert_eq!(center, Vec2::new(-390.0, 290.0));
    }

    #[test]
    fn offsets_flip_vertically() {
        assert_eq!(offset_to_world(Vector2::new(5.0, 10.0)), Vec2::new(5.0, -10.0));
    }

    #[test]
    fn clockwise_page_rotation_is_negative_z() {
        let q = rotation_to_world(90.0);
        let rotated = q * Vec3::X;
        assert!((rotated - Vec3::NEG_Y).length() < 1.0e-5);
    }
}
