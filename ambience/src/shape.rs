use nalgebra::Vector2;

/// Logical viewport size in pixels. Origin top-left, +Y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area in px^2, or 0 if either side is non-positive or not finite.
    ///
    /// Computed in `f64`: two large finite `f32` sides can overflow an `f32` product.
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            f64::from(self.width) * f64::from(self.height)
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Pointer position as a fraction of the viewport, `(0,0)` top-left, `(1,1)` bottom-right.
    pub fn normalize(&self, point: Vector2<f32>) -> Vector2<f32> {
        if self.is_degenerate() {
            return Vector2::new(0.5, 0.5);
        }
        Vector2::new(point.x / self.width, point.y / self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ];
}

/// The four neon accents used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeonColor {
    Blue,
    Purple,
    Pink,
    Green,
}

impl NeonColor {
    pub const ALL: [NeonColor; 4] = [
        NeonColor::Blue,
        NeonColor::Purple,
        NeonColor::Pink,
        NeonColor::Green,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            NeonColor::Blue => [0x00, 0xc8, 0xff],
            NeonColor::Purple => [0xb0, 0x26, 0xff],
            NeonColor::Pink => [0xff, 0x2d, 0x92],
            NeonColor::Green => [0x00, 0xff, 0x9d],
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            NeonColor::Blue => "#00c8ff",
            NeonColor::Purple => "#b026ff",
            NeonColor::Pink => "#ff2d92",
            NeonColor::Green => "#00ff9d",
        }
    }
}

/// One falling shape.
///
/// `position` is the top-left corner in viewport pixels, `rotation` is in degrees.
/// Only the fall animator mutates `position`, `rotation` and `fallen`.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: f32,
    pub color: NeonColor,
    pub position: Vector2<f32>,
    pub rotation: f32,
    pub fall_speed: f32,
    pub start_delay: f32,
    pub fallen: bool,
}

impl Shape {
    /// Seconds one fall takes for this shape.
    pub fn fall_duration(&self, duration_scale: f32) -> f32 {
        duration_scale / self.fall_speed
    }
}
