use nalgebra::Vector2;

use crate::{config::BackgroundConfig, ease::Eased, shape::Viewport};

/// Depth illusion: the shape layer and the tray drift against the pointer.
///
/// For a pointer at fraction `p` of the viewport, the layer targets
/// `(0.5 - p) * layer_strength` on both axes and the tray `(0.5 - p.x) * tray_strength`
/// horizontally. A centered pointer means no offset.
#[derive(Clone, Debug)]
pub struct Parallax {
    layer_strength: f32,
    tray_strength: f32,
    layer: Eased<Vector2<f32>>,
    tray: Eased<Vector2<f32>>,
}

impl Parallax {
    pub fn new(config: &BackgroundConfig) -> Self {
        Self {
            layer_strength: config.layer_parallax,
            tray_strength: config.tray_parallax,
            layer: Eased::new(Vector2::zeros(), config.parallax_ease),
            tray: Eased::new(Vector2::zeros(), config.parallax_ease),
        }
    }

    pub fn pointer_moved(&mut self, pointer: Vector2<f32>, viewport: Viewport) {
        let p = viewport.normalize(pointer);
        let centered = Vector2::new(0.5 - p.x, 0.5 - p.y);
        self.layer.retarget(centered * self.layer_strength);
        self.tray
            .retarget(Vector2::new(centered.x * self.tray_strength, 0.0));
    }

    pub fn advance(&mut self, dt: f32) {
        self.layer.advance(dt);
        self.tray.advance(dt);
    }

    /// Current shift of the shape layer, in pixels, +Y down.
    pub fn layer_offset(&self) -> Vector2<f32> {
        self.layer.value()
    }

    pub fn tray_offset(&self) -> Vector2<f32> {
        self.tray.value()
    }
}
