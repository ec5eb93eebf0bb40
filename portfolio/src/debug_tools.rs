//! Debug/performance tooling for native dev builds.
//!
//! Only compiled with `dev_native`. F3 dumps the background state to the log.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

use crate::{background::RainScene, settings::Listeners};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, log_background_stats);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn log_background_stats(
    keys: Res<ButtonInput<KeyCode>>,
    scene: Query<&RainScene>,
    listeners: Res<Listeners>,
) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    let Ok(scene) = scene.single() else {
        info!("Background not mounted");
        return;
    };
    info!(
        "Background: {} shapes, {} falling, {} in tray, {:?}, {} live listeners",
        scene.shapes().len(),
        scene.falling().count(),
        scene.tray().len(),
        scene.state(),
        listeners.0.live(),
    );
}
