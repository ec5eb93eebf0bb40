use bevy::prelude::*;

use super::{FallingShape, RainScene, ShapeLayer, TrayLayer, render::shape_transform};
use crate::viewport;

/// Copies shape state from the scene onto the rendered entities.
pub(super) fn sync_falling(
    scene: Query<&RainScene>,
    mut shapes: Query<(&FallingShape, &mut Transform, &mut Visibility)>,
) {
    let Ok(scene) = scene.single() else {
        return;
    };
    let viewport = scene.viewport();
    let all = scene.shapes();

    for (FallingShape(index), mut transform, mut visibility) in &mut shapes {
        let Some(shape) = all.get(*index) else {
            continue;
        };
        if shape.fallen {
            *visibility = Visibility::Hidden;
            continue;
        }
        *transform = shape_transform(shape.position, shape.size, shape.rotation, viewport, *index);
    }
}

pub(super) fn apply_parallax(
    scene: Query<&RainScene>,
    mut layer: Query<&mut Transform, (With<ShapeLayer>, Without<TrayLayer>)>,
    mut tray: Query<&mut Transform, (With<TrayLayer>, Without<ShapeLayer>)>,
) {
    let Ok(scene) = scene.single() else {
        return;
    };
    let parallax = scene.parallax();

    if let Ok(mut layer) = layer.single_mut() {
        let offset = viewport::offset_to_world(parallax.layer_offset());
        layer.translation.x = offset.x;
        layer.translation.y = offset.y;
    }
    if let Ok(mut tray) = tray.single_mut() {
        tray.translation.x = viewport::offset_to_world(parallax.tray_offset()).x;
    }
}
