use ambience::{
    UsageHint,
    hint::{HINT_BODY, HINT_TITLE},
};
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use crate::{
    background::RainScene,
    input::{PageAction, toggle_requested},
};

const PANEL_BACKGROUND: Color = Color::srgba(0.02, 0.03, 0.06, 0.8);
const PANEL_BORDER: Color = Color::srgba(0.0, 0.784, 1.0, 0.3);
const DIM_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);

#[derive(Resource, Deref, DerefMut, Default)]
struct Hint(UsageHint);

/// The centered one-shot panel.
#[derive(Component)]
struct HintPanel;

/// The always-on corner badge showing the rain state.
#[derive(Component)]
struct RainStatus;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Hint>();
    app.add_systems(Startup, (spawn_hint_panel, spawn_rain_status));
    app.add_systems(
        Update,
        (
            (dismiss_on_toggle, expire_hint, hide_panel)
                .chain()
                .run_if(any_with_component::<HintPanel>),
            update_rain_status,
        ),
    );
}

fn spawn_hint_panel(mut commands: Commands) {
    commands.spawn((
        Name::new("HintPanel"),
        HintPanel,
        Node {
            position_type: PositionType::Absolute,
            // Centered: both insets set, auto margins absorb the rest.
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            margin: UiRect::all(Val::Auto),
            max_width: Val::Px(320.0),
            height: Val::Auto,
            width: Val::Auto,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            align_self: AlignSelf::Center,
            padding: UiRect::axes(Val::Px(24.0), Val::Px(16.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BorderRadius::all(Val::Px(12.0)),
        BorderColor::all(PANEL_BORDER),
        BackgroundColor(PANEL_BACKGROUND),
        GlobalZIndex(50),
        children![
            (
                Text::new(HINT_TITLE),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ),
            (
                Text::new(HINT_BODY),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(DIM_TEXT),
                TextLayout::new_with_justify(Justify::Center),
            ),
        ],
    ));
}

fn spawn_rain_status(mut commands: Commands) {
    commands.spawn((
        Name::new("RainStatus"),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            bottom: Val::Px(16.0),
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            ..default()
        },
        BorderRadius::all(Val::Px(8.0)),
        BackgroundColor(PANEL_BACKGROUND.with_alpha(0.6)),
        GlobalZIndex(10),
        children![(
            RainStatus,
            Text::new(UsageHint::status(true)),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(DIM_TEXT),
        )],
    ));
}

fn dismiss_on_toggle(actions: Res<ActionState<PageAction>>, mut hint: ResMut<Hint>) {
    if toggle_requested(&actions) {
        hint.dismiss();
    }
}

fn expire_hint(time: Res<Time>, mut hint: ResMut<Hint>) {
    hint.advance(time.delta_secs());
}

fn hide_panel(mut commands: Commands, hint: Res<Hint>, panel: Query<Entity, With<HintPanel>>) {
    if hint.is_visible() {
        return;
    }
    for entity in &panel {
        commands.entity(entity).despawn();
    }
    debug!("Usage hint hidden");
}

fn update_rain_status(scene: Query<&RainScene>, mut status: Query<&mut Text, With<RainStatus>>) {
    let Ok(scene) = scene.single() else {
        return;
    };
    let wanted = UsageHint::status(scene.animator().is_raining());
    for mut text in &mut status {
        if text.0 != wanted {
            text.0 = wanted.to_string();
        }
    }
}
