use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageAction {
    /// Primary button anywhere on the page. Drives the cursor press animation.
    Press,
    /// Flip the rain between falling and paused. Bound to the click and to Space so the
    /// effect can be paused without a pointer.
    ToggleRain,
    /// Flip the project carousel forward.
    NextProject,
    /// Flip the project carousel back.
    PrevProject,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PageAction>::default());

    app.register_type::<PageAction>();

    let mut input_map = InputMap::<PageAction>::default();
    input_map.insert(PageAction::Press, MouseButton::Left);
    input_map.insert(PageAction::ToggleRain, MouseButton::Left);
    input_map.insert(PageAction::ToggleRain, KeyCode::Space);
    input_map.insert(PageAction::NextProject, KeyCode::ArrowRight);
    input_map.insert(PageAction::PrevProject, KeyCode::ArrowLeft);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<PageAction>::default());
}

/// True on the frame the rain toggle fired.
pub fn toggle_requested(actions: &ActionState<PageAction>) -> bool {
    actions.just_pressed(&PageAction::ToggleRain)
}
