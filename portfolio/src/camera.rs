use bevy::prelude::*;

/// Page background, the `darker` tone of the site palette.
pub const PAGE_COLOR: Color = Color::srgb(0.039, 0.055, 0.102);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(PAGE_COLOR));
    app.add_systems(Startup, add_camera);
}

fn add_camera(mut commands: Commands) {
    // One world unit per logical pixel, origin at the window center.
    commands.spawn((Name::new("PageCamera"), Camera2d));
}
