mod glow;
mod render;
mod sync;

use crate::{
    input::{PageAction, toggle_requested},
    settings::{Listeners, Settings},
    viewport,
};
use ambience::{Background, Viewport};
use bevy::{
    prelude::*,
    window::{CursorMoved, PrimaryWindow, WindowResized},
};
use leafwing_input_manager::prelude::ActionState;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(glow::plugin);
    app.add_systems(Startup, (render::load_shape_assets, mount).chain());
    app.add_systems(
        Update,
        (handle_toggle, track_pointer, handle_resize, tick).chain(),
    );
    // Tick runs before sync so the rendered frame always shows this frame's fall step.
    app.add_systems(
        PostUpdate,
        (
            render::spawn_settled,
            sync::sync_falling,
            sync::apply_parallax,
        ),
    );
}

/// The mounted background. Despawning this entity tears the effect down: tweens are killed
/// and the window listeners are released.
#[derive(Component, Deref, DerefMut)]
pub struct RainScene(pub Background);

/// Parent of the falling shapes; moved by the layer parallax.
#[derive(Component)]
pub struct ShapeLayer;

/// Parent of the settled shapes; moved by the tray parallax.
#[derive(Component)]
pub struct TrayLayer;

/// Renders `RainScene::shapes()[index]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct FallingShape(pub usize);

/// Renders `RainScene::tray().settled()[index]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct SettledShapeSprite(pub usize);

const BACKGROUND_Z: f32 = -100.0;
const TRAY_Z: f32 = 1.0;

fn mount(
    mut commands: Commands,
    window: Query<&Window, With<PrimaryWindow>>,
    settings: Res<Settings>,
    listeners: Res<Listeners>,
    assets: Res<render::ShapeAssets>,
) {
    let Some(viewport) = viewport::primary(&window) else {
        warn!("No primary window, background not mounted");
        return;
    };

    let background = Background::mount(
        viewport,
        settings.background.clone(),
        &listeners.0,
        settings.rng(),
    );

    let root = commands
        .spawn((
            Name::new("RainBackground"),
            Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
            Visibility::default(),
        ))
        .id();
    let layer = commands
        .spawn((
            Name::new("ShapeLayer"),
            ShapeLayer,
            Transform::default(),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();
    commands.spawn((
        Name::new("TrayLayer"),
        TrayLayer,
        Transform::from_xyz(0.0, 0.0, TRAY_Z),
        Visibility::default(),
        ChildOf(root),
    ));

    render::spawn_falling(&mut commands, layer, &background, &assets);
    commands.entity(root).insert(RainScene(background));
}

fn handle_toggle(actions: Res<ActionState<PageAction>>, mut scene: Query<&mut RainScene>) {
    if !toggle_requested(&actions) {
        return;
    }
    let Ok(mut scene) = scene.single_mut() else {
        return;
    };
    let state = scene.click();
    info!("Rain {state:?}");
}

fn track_pointer(mut moves: MessageReader<CursorMoved>, mut scene: Query<&mut RainScene>) {
    // Only the latest position matters for the parallax target.
    let Some(moved) = moves.read().last() else {
        return;
    };
    let Ok(mut scene) = scene.single_mut() else {
        return;
    };
    scene.pointer_moved(viewport::to_page(moved.position));
}

fn handle_resize(
    mut commands: Commands,
    mut resizes: MessageReader<WindowResized>,
    mut scene: Query<&mut RainScene>,
    layer: Query<Entity, With<ShapeLayer>>,
    stale: Query<Entity, Or<(With<FallingShape>, With<SettledShapeSprite>)>>,
    assets: Res<render::ShapeAssets>,
) {
    let Some(resized) = resizes.read().last() else {
        return;
    };
    let Ok(mut scene) = scene.single_mut() else {
        return;
    };
    let Ok(layer) = layer.single() else {
        return;
    };

    let viewport = Viewport::new(resized.width, resized.height);
    if viewport == scene.viewport() {
        return;
    }
    scene.resize(viewport);

    for entity in &stale {
        commands.entity(entity).despawn();
    }
    render::spawn_falling(&mut commands, layer, &scene, &assets);
}

fn tick(time: Res<Time>, mut scene: Query<&mut RainScene>) {
    let Ok(mut scene) = scene.single_mut() else {
        return;
    };
    let landings = scene.tick(time.delta_secs());
    if !landings.is_empty() {
        debug!(
            "{} shape(s) landed, tray holds {}",
            landings.len(),
            scene.tray().len()
        );
    }
}
