use ambience::{Background, NeonColor, ShapeKind, Viewport};
use bevy::prelude::*;
use nalgebra::Vector2;

use super::{FallingShape, RainScene, SettledShapeSprite, TrayLayer};
use crate::viewport;

/// Shapes are drawn semi-transparent so the glow orbs show through.
const SHAPE_ALPHA: u8 = 150;

/// Unit-sized meshes, one per kind, and one material per neon color. Every shape entity
/// shares these and is scaled to its own size.
#[derive(Resource)]
pub struct ShapeAssets {
    square: Handle<Mesh>,
    circle: Handle<Mesh>,
    triangle: Handle<Mesh>,
    diamond: Handle<Mesh>,
    colors: [Handle<ColorMaterial>; 4],
}

impl ShapeAssets {
    pub fn mesh(&self, kind: ShapeKind) -> Handle<Mesh> {
        match kind {
            ShapeKind::Square => self.square.clone(),
            ShapeKind::Circle => self.circle.clone(),
            ShapeKind::Triangle => self.triangle.clone(),
            ShapeKind::Diamond => self.diamond.clone(),
        }
    }

    pub fn material(&self, color: NeonColor) -> Handle<ColorMaterial> {
        let index = NeonColor::ALL
            .iter()
            .position(|c| *c == color)
            .unwrap_or_default();
        self.colors[index].clone()
    }
}

pub(super) fn load_shape_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let colors = NeonColor::ALL.map(|color| {
        let [r, g, b] = color.rgb();
        materials.add(Color::srgba_u8(r, g, b, SHAPE_ALPHA))
    });

    commands.insert_resource(ShapeAssets {
        square: meshes.add(Rectangle::new(1.0, 1.0)),
        circle: meshes.add(Circle::new(0.5)),
        // Apex at the top center, base along the bottom edge.
        triangle: meshes.add(Triangle2d::new(
            Vec2::new(0.0, 0.5),
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
        )),
        diamond: meshes.add(Rhombus::new(1.0, 1.0)),
        colors,
    });
}

/// Spawns one entity per shape still on the falling layer, as children of `layer`.
pub(super) fn spawn_falling(
    commands: &mut Commands,
    layer: Entity,
    background: &Background,
    assets: &ShapeAssets,
) {
    let viewport = background.viewport();
    for (index, shape) in background.falling() {
        commands.spawn((
            Name::new(format!("Shape{index}")),
            FallingShape(index),
            Mesh2d(assets.mesh(shape.kind)),
            MeshMaterial2d(assets.material(shape.color)),
            shape_transform(shape.position, shape.size, shape.rotation, viewport, index),
            ChildOf(layer),
        ));
    }
}

/// Tray sprites are append-only between resizes, so any settled index without a sprite yet
/// is new.
pub(super) fn spawn_settled(
    mut commands: Commands,
    scene: Query<&RainScene>,
    tray_layer: Query<Entity, With<TrayLayer>>,
    sprites: Query<(), With<SettledShapeSprite>>,
    assets: Res<ShapeAssets>,
) {
    let (Ok(scene), Ok(tray_layer)) = (scene.single(), tray_layer.single()) else {
        return;
    };
    let viewport = scene.viewport();
    let existing = sprites.iter().count();

    for (index, settled) in scene.tray().settled().iter().enumerate().skip(existing) {
        let top_left = Vector2::new(settled.x, viewport.height - settled.size);
        commands.spawn((
            Name::new(format!("Settled{index}")),
            SettledShapeSprite(index),
            Mesh2d(assets.mesh(settled.kind)),
            MeshMaterial2d(assets.material(settled.color)),
            shape_transform(top_left, settled.size, settled.rotation, viewport, index),
            ChildOf(tray_layer),
        ));
    }
}

/// `index` breaks z-fighting between overlapping shapes.
pub(super) fn shape_transform(
    top_left: Vector2<f32>,
    size: f32,
    rotation: f32,
    viewport: Viewport,
    index: usize,
) -> Transform {
    let center = viewport::box_center(top_left, size, viewport);
    Transform {
        translation: center.extend(index as f32 * 0.01),
        rotation: viewport::rotation_to_world(rotation),
        scale: Vec3::new(size, size, 1.0),
    }
}
