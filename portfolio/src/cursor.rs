use ambience::{CustomCursor, Trail, Viewport};
use bevy::{
    input::touch::TouchInput,
    prelude::*,
    window::{
        CursorEntered, CursorLeft, CursorMoved, CursorOptions, PrimaryWindow, WindowFocused,
        WindowResized,
    },
};
use leafwing_input_manager::prelude::ActionState;

use crate::{
    input::PageAction,
    settings::{Listeners, Settings},
    viewport,
};

const CURSOR_Z: f32 = 900.0;
const DOT_RADIUS_PX: f32 = 10.0;
const RING_RADIUS_PX: f32 = 20.0;
const RING_BORDER_PX: f32 = 2.0;
/// Sky blue shared by the dot and the ring.
const CURSOR_RGB: [u8; 3] = [14, 165, 233];
const DOT_ALPHA: (f32, f32) = (0.5, 0.8);
const RING_ALPHA: (f32, f32) = (0.3, 0.5);

/// The live cursor effect. Only present while the custom cursor is enabled; removing it
/// releases the pointer listeners.
#[derive(Resource, Deref, DerefMut)]
pub struct PageCursor(pub CustomCursor);

#[derive(Component)]
struct CursorDot;

#[derive(Component)]
struct CursorRing;

/// One reusable trail sprite. Slot `n` draws the `n`th live trail, oldest first.
#[derive(Component)]
struct TrailSlot(usize);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup_cursor);

    app.add_systems(
        Update,
        (
            track_pointer,
            track_window_presence,
            track_press,
            track_hover,
            advance_cursor,
            disable_on_touch,
        )
            .chain()
            .run_if(resource_exists::<PageCursor>),
    );
    app.add_systems(
        PostUpdate,
        (sync_dot_and_ring, sync_trails).run_if(resource_exists::<PageCursor>),
    );

    // Re-hide on focus/enter/resize to avoid OS/browser resets
    app.add_systems(
        Update,
        (reapply_on_focus, reapply_on_enter, reapply_on_resize)
            .run_if(resource_exists::<PageCursor>),
    );
}

fn setup_cursor(
    mut commands: Commands,
    window: Query<&Window, With<PrimaryWindow>>,
    settings: Res<Settings>,
    listeners: Res<Listeners>,
    options: Query<&mut CursorOptions, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(viewport) = viewport::primary(&window) else {
        return;
    };
    if !CustomCursor::enabled_for(viewport, false, &settings.cursor) {
        info!(
            "Viewport {}px wide, keeping the system cursor",
            viewport.width
        );
        return;
    }

    let cursor = CustomCursor::new(settings.cursor.clone(), &listeners.0, settings.rng());
    let max_trails = cursor.config().max_trails;
    commands.insert_resource(PageCursor(cursor));

    let [r, g, b] = CURSOR_RGB;
    commands.spawn((
        Name::new("CursorDot"),
        CursorDot,
        Mesh2d(meshes.add(Circle::new(DOT_RADIUS_PX))),
        MeshMaterial2d(materials.add(Color::srgba_u8(r, g, b, 0))),
        Transform::from_xyz(0.0, 0.0, CURSOR_Z + 2.0),
    ));
    commands.spawn((
        Name::new("CursorRing"),
        CursorRing,
        Mesh2d(meshes.add(Annulus::new(RING_RADIUS_PX - RING_BORDER_PX, RING_RADIUS_PX))),
        MeshMaterial2d(materials.add(Color::srgba_u8(r, g, b, 0))),
        Transform::from_xyz(0.0, 0.0, CURSOR_Z + 1.0),
    ));

    // Trail sizes are diameters; the unit disc is scaled per trail.
    let disc = meshes.add(Circle::new(0.5));
    for slot in 0..max_trails {
        commands.spawn((
            Name::new(format!("CursorTrail{slot}")),
            TrailSlot(slot),
            Mesh2d(disc.clone()),
            MeshMaterial2d(materials.add(Color::NONE)),
            Transform::from_xyz(0.0, 0.0, CURSOR_Z + slot as f32 * 0.01),
            Visibility::Hidden,
        ));
    }

    hide_system_cursor(options);
    info!("Custom cursor enabled");
}

fn track_pointer(mut moves: MessageReader<CursorMoved>, mut cursor: ResMut<PageCursor>) {
    // Every move may drop a trail, so each message counts.
    for moved in moves.read() {
        cursor.pointer_moved(viewport::to_page(moved.position));
    }
}

fn track_window_presence(
    mut entered: MessageReader<CursorEntered>,
    mut left: MessageReader<CursorLeft>,
    mut cursor: ResMut<PageCursor>,
) {
    if entered.read().count() > 0 {
        cursor.entered();
    }
    if left.read().count() > 0 {
        cursor.left();
    }
}

fn track_press(actions: Res<ActionState<PageAction>>, mut cursor: ResMut<PageCursor>) {
    if actions.just_pressed(&PageAction::Press) {
        cursor.pressed();
    }
    if actions.just_released(&PageAction::Press) {
        cursor.released();
    }
}

/// Any hovered or pressed UI button counts as an interactive element.
fn track_hover(interactions: Query<&Interaction>, mut cursor: ResMut<PageCursor>) {
    let hovering = interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    cursor.hover(hovering);
}

fn advance_cursor(time: Res<Time>, mut cursor: ResMut<PageCursor>) {
    cursor.advance(time.delta_secs());
}

/// A touch means a touch device: drop the custom cursor and give the system one back.
fn disable_on_touch(
    mut commands: Commands,
    mut touches: MessageReader<TouchInput>,
    sprites: Query<Entity, Or<(With<CursorDot>, With<CursorRing>, With<TrailSlot>)>>,
    mut options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if touches.read().count() == 0 {
        return;
    }
    commands.remove_resource::<PageCursor>();
    for entity in &sprites {
        commands.entity(entity).despawn();
    }
    if let Ok(mut options) = options.single_mut() {
        options.visible = true;
    }
    info!("Touch input detected, custom cursor disabled");
}

fn sync_dot_and_ring(
    cursor: Res<PageCursor>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut dot: Query<
        (&mut Transform, &MeshMaterial2d<ColorMaterial>),
        (With<CursorDot>, Without<CursorRing>),
    >,
    mut ring: Query<
        (&mut Transform, &MeshMaterial2d<ColorMaterial>),
        (With<CursorRing>, Without<CursorDot>),
    >,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(viewport) = viewport::primary(&window) else {
        return;
    };
    let hovering = cursor.is_hovering();
    let opacity = cursor.opacity();

    if let Ok((mut transform, material)) = dot.single_mut() {
        place(&mut transform, cursor.dot_position(), cursor.dot_scale(), viewport);
        let alpha = if hovering { DOT_ALPHA.1 } else { DOT_ALPHA.0 };
        tint(&mut materials, material, alpha * opacity);
    }
    if let Ok((mut transform, material)) = ring.single_mut() {
        place(&mut transform, cursor.ring_position(), cursor.ring_scale(), viewport);
        let alpha = if hovering { RING_ALPHA.1 } else { RING_ALPHA.0 };
        tint(&mut materials, material, alpha * opacity);
    }
}

fn sync_trails(
    cursor: Res<PageCursor>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut slots: Query<(
        &TrailSlot,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(viewport) = viewport::primary(&window) else {
        return;
    };
    let fade = cursor.config().trail_fade;
    let trails: Vec<&Trail> = cursor.trails().collect();

    for (TrailSlot(slot), mut transform, mut visibility, material) in &mut slots {
        let Some(trail) = trails.get(*slot) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        *visibility = Visibility::Inherited;
        place(
            &mut transform,
            trail.position,
            trail.size * trail.scale(fade),
            viewport,
        );
        if let Some(material) = materials.get_mut(&material.0) {
            material.color = Color::hsla(trail.hue, 0.8, 0.6, trail.opacity(fade));
        }
    }
}

fn place(
    transform: &mut Transform,
    position: nalgebra::Vector2<f32>,
    scale: f32,
    viewport: Viewport,
) {
    let world = viewport::to_world(position, viewport);
    transform.translation.x = world.x;
    transform.translation.y = world.y;
    transform.scale = Vec3::new(scale, scale, 1.0);
}

fn tint(
    materials: &mut Assets<ColorMaterial>,
    material: &MeshMaterial2d<ColorMaterial>,
    alpha: f32,
) {
    if let Some(material) = materials.get_mut(&material.0) {
        material.color.set_alpha(alpha);
    }
}

fn hide_system_cursor(mut options: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut options) = options.single_mut() {
        options.visible = false;
    }
}

fn reapply_on_focus(
    mut messages: MessageReader<WindowFocused>,
    options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if messages.read().any(|message| message.focused) {
        hide_system_cursor(options);
    }
}

fn reapply_on_enter(
    mut messages: MessageReader<CursorEntered>,
    options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if messages.read().count() > 0 {
        hide_system_cursor(options);
    }
}

fn reapply_on_resize(
    mut messages: MessageReader<WindowResized>,
    options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if messages.read().count() > 0 {
        hide_system_cursor(options);
    }
}
