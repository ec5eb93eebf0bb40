use crate::{
    shape::{NeonColor, Shape, ShapeKind},
    utils::sample_range,
};

/// Owned copy of the rendering-relevant fields of a landed shape.
///
/// `x` is the left edge in viewport pixels; settled shapes sit on the tray floor.
#[derive(Clone, Debug, PartialEq)]
pub struct SettledShape {
    pub kind: ShapeKind,
    pub size: f32,
    pub color: NeonColor,
    pub rotation: f32,
    pub x: f32,
}

/// Fixed-height strip at the bottom of the viewport that accumulates landed shapes.
#[derive(Clone, Debug, Default)]
pub struct CollectionTray {
    height: f32,
    settled: Vec<SettledShape>,
}

impl CollectionTray {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            settled: Vec::new(),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn settled(&self) -> &[SettledShape] {
        &self.settled
    }

    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Copies `shape` into the tray at a random x in `[0, viewport_width)`.
    pub fn receive(
        &mut self,
        shape: &Shape,
        viewport_width: f32,
        rng: &mut fastrand::Rng,
    ) -> &SettledShape {
        let x = sample_range(rng, &(0.0..viewport_width));
        self.settled.push(SettledShape {
            kind: shape.kind,
            size: shape.size,
            color: shape.color,
            rotation: shape.rotation,
            x,
        });
        tracing::trace!(settled = self.settled.len(), "shape collected");
        &self.settled[self.settled.len() - 1]
    }

    pub fn clear(&mut self) {
        self.settled.clear();
    }
}
