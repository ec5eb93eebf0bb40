//! Featured projects: a side nav, prev/next arrows and a single card that flips between
//! projects.

use ambience::Carousel;
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

use crate::{input::PageAction, settings::Listeners};

const PANEL_TOP_PX: f32 = 160.0;
const NAV_WIDTH_PX: f32 = 220.0;
const CARD_MAX_WIDTH_PX: f32 = 560.0;
const PANEL_BACKGROUND: Color = Color::srgba(0.02, 0.03, 0.06, 0.4);
const NAV_IDLE: Color = Color::srgba(0.02, 0.03, 0.06, 0.6);
const DIM_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);
const BODY_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

struct Project {
    title: &'static str,
    description: &'static str,
    accent: [u8; 3],
    tags: [&'static str; 4],
}

const ORANGE: [u8; 3] = [0xff, 0x9d, 0x00];
const CYAN: [u8; 3] = [0x00, 0xff, 0xf0];

const PROJECTS: [Project; 5] = [
    Project {
        title: "Currency Converter",
        description: "A responsive web app that converts between 150+ currencies in real time \
                      using exchange rate APIs. Historical data, dark mode and offline support.",
        accent: [0x00, 0xc8, 0xff],
        tags: ["React", "CSS", "JavaScript", "ExchangeRate API"],
    },
    Project {
        title: "Wordle Clone",
        description: "A browser Wordle clone built with React. Guess 5-letter words with daily \
                      puzzles, animations and keyboard feedback.",
        accent: [0x00, 0xff, 0x9d],
        tags: ["React", "JavaScript", "CSS Animations", "Game Logic"],
    },
    Project {
        title: "Resume Builder",
        description: "A customizable resume builder with live previews. Multiple themes, section \
                      reordering and PDF export.",
        accent: [0xb0, 0x26, 0xff],
        tags: ["JavaScript", "Tailwind CSS", "HTML to PDF", "Form Validation"],
    },
    Project {
        title: "Blockchain Learning Platform",
        description: "An interactive platform teaching blockchain concepts in simple terms, with \
                      lessons, quizzes and Web3 project walkthroughs.",
        accent: ORANGE,
        tags: ["Next.js", "Tailwind CSS", "Web3.js", "Markdown"],
    },
    Project {
        title: "World Atlas",
        description: "A data-driven world atlas with interactive maps and country stats. Pulls \
                      population, GDP and weather data from REST APIs.",
        accent: CYAN,
        tags: ["React", "Leaflet.js", "REST API", "OpenWeatherMap"],
    },
];

/// The carousel over [`PROJECTS`]. Removing it releases the arrow-key listener.
#[derive(Resource, Deref, DerefMut)]
pub struct Projects(pub Carousel);

/// The flipping card. Its width follows the flip angle.
#[derive(Component)]
struct ProjectCard;

/// Content block for one project; only the current one is displayed.
#[derive(Component)]
struct ProjectContent(usize);

#[derive(Component)]
struct ProjectNavButton(usize);

#[derive(Component)]
struct ProjectNavLabel(usize);

#[derive(Component, Clone, Copy)]
enum ArrowButton {
    Prev,
    Next,
}

#[derive(Component)]
struct ProjectCounter;

/// Text inside the card, faded with the flip.
#[derive(Component)]
struct CardText(Color);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_projects);
    app.add_systems(
        Update,
        (
            navigate_with_keys,
            navigate_with_buttons,
            advance_flip,
            (show_current, style_card, style_nav, update_counter),
        )
            .chain()
            .run_if(resource_exists::<Projects>),
    );
}

fn accent(project: &Project) -> Color {
    let [r, g, b] = project.accent;
    Color::srgb_u8(r, g, b)
}

fn counter_label(current: usize, len: usize) -> String {
    format!("Project {} / {}", current + 1, len)
}

fn faded(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.alpha() * opacity.clamp(0.0, 1.0))
}

fn spawn_projects(mut commands: Commands, listeners: Res<Listeners>) {
    commands.insert_resource(Projects(Carousel::new(PROJECTS.len(), &listeners.0)));

    let panel = commands
        .spawn((
            Name::new("Projects"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(PANEL_TOP_PX),
                left: Val::Percent(4.0),
                width: Val::Percent(58.0),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .id();

    spawn_nav(&mut commands, panel);

    let display = commands
        .spawn((
            Node {
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            ChildOf(panel),
        ))
        .id();

    commands.spawn((
        ProjectCounter,
        Text::new(counter_label(0, PROJECTS.len())),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(DIM_TEXT),
        Node {
            align_self: AlignSelf::FlexEnd,
            ..default()
        },
        ChildOf(display),
    ));

    let row = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
            ChildOf(display),
        ))
        .id();

    spawn_arrow(&mut commands, row, ArrowButton::Prev);

    let frame = commands
        .spawn((
            Node {
                flex_grow: 1.0,
                max_width: Val::Px(CARD_MAX_WIDTH_PX),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ChildOf(row),
        ))
        .id();

    let card = commands
        .spawn((
            Name::new("ProjectCard"),
            ProjectCard,
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(24.0)),
                border: UiRect::all(Val::Px(1.0)),
                overflow: Overflow::clip(),
                ..default()
            },
            BorderRadius::all(Val::Px(12.0)),
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.1)),
            BackgroundColor(PANEL_BACKGROUND),
            ChildOf(frame),
        ))
        .id();

    for (index, project) in PROJECTS.iter().enumerate() {
        spawn_content(&mut commands, card, index, project);
    }

    spawn_arrow(&mut commands, row, ArrowButton::Next);

    commands.spawn((
        Text::new("Use arrow keys to navigate projects"),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.2)),
        ChildOf(display),
    ));
}

fn spawn_nav(commands: &mut Commands, panel: Entity) {
    let nav = commands
        .spawn((
            Node {
                width: Val::Px(NAV_WIDTH_PX),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(12.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(12.0)),
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.1)),
            BackgroundColor(PANEL_BACKGROUND),
            ChildOf(panel),
        ))
        .id();

    commands.spawn((
        Text::new("Projects"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(BODY_TEXT),
        ChildOf(nav),
    ));

    for (index, project) in PROJECTS.iter().enumerate() {
        commands.spawn((
            Name::new(format!("ProjectNav{index}")),
            ProjectNavButton(index),
            Button,
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(10.0)),
                border: UiRect::left(Val::Px(4.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(8.0)),
            BorderColor::all(Color::NONE),
            BackgroundColor(NAV_IDLE),
            children![(
                ProjectNavLabel(index),
                Text::new(project.title),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(DIM_TEXT),
            )],
            ChildOf(nav),
        ));
    }
}

fn spawn_arrow(commands: &mut Commands, row: Entity, arrow: ArrowButton) {
    let label = match arrow {
        ArrowButton::Prev => "<",
        ArrowButton::Next => ">",
    };
    commands.spawn((
        arrow,
        Button,
        Node {
            width: Val::Px(40.0),
            height: Val::Px(40.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BorderRadius::MAX,
        BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.1)),
        BackgroundColor(NAV_IDLE),
        children![(
            Text::new(label),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(BODY_TEXT),
        )],
        ChildOf(row),
    ));
}

fn spawn_content(commands: &mut Commands, card: Entity, index: usize, project: &Project) {
    let accent = accent(project);
    let content = commands
        .spawn((
            ProjectContent(index),
            Node {
                display: if index == 0 {
                    Display::Flex
                } else {
                    Display::None
                },
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                ..default()
            },
            ChildOf(card),
        ))
        .id();

    commands.spawn((
        CardText(accent),
        Text::new(project.title),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(accent),
        ChildOf(content),
    ));
    commands.spawn((
        CardText(BODY_TEXT),
        Text::new(project.description),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(BODY_TEXT),
        ChildOf(content),
    ));

    let tags = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                column_gap: Val::Px(8.0),
                row_gap: Val::Px(8.0),
                ..default()
            },
            ChildOf(content),
        ))
        .id();
    for tag in project.tags {
        commands.spawn((
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderRadius::MAX,
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.1)),
            BackgroundColor(NAV_IDLE),
            children![(
                CardText(accent),
                Text::new(tag),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(accent),
            )],
            ChildOf(tags),
        ));
    }
}

fn navigate_with_keys(actions: Res<ActionState<PageAction>>, mut projects: ResMut<Projects>) {
    if actions.just_pressed(&PageAction::NextProject) {
        projects.next();
    } else if actions.just_pressed(&PageAction::PrevProject) {
        projects.prev();
    }
}

fn navigate_with_buttons(
    mut projects: ResMut<Projects>,
    nav: Query<(&Interaction, &ProjectNavButton), Changed<Interaction>>,
    arrows: Query<(&Interaction, &ArrowButton), Changed<Interaction>>,
) {
    for (interaction, button) in &nav {
        if *interaction == Interaction::Pressed {
            projects.go_to(button.0);
        }
    }
    for (interaction, arrow) in &arrows {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match arrow {
            ArrowButton::Prev => projects.prev(),
            ArrowButton::Next => projects.next(),
        };
    }
}

fn advance_flip(time: Res<Time>, mut projects: ResMut<Projects>) {
    projects.advance(time.delta_secs());
}

fn show_current(projects: Res<Projects>, mut contents: Query<(&ProjectContent, &mut Node)>) {
    let current = projects.current();
    for (content, mut node) in &mut contents {
        let display = if content.0 == current {
            Display::Flex
        } else {
            Display::None
        };
        if node.display != display {
            node.display = display;
        }
    }
}

fn style_card(
    projects: Res<Projects>,
    mut card: Query<(&mut Node, &mut BackgroundColor, &mut BorderColor), With<ProjectCard>>,
    mut texts: Query<(&CardText, &mut TextColor)>,
) {
    let opacity = projects.opacity();
    let accent = PROJECTS
        .get(projects.current())
        .map(accent)
        .unwrap_or(Color::WHITE);

    for (mut node, mut background, mut border) in &mut card {
        node.width = Val::Percent(100.0 * projects.width_factor());
        background.0 = faded(PANEL_BACKGROUND, opacity);
        *border = BorderColor::all(faded(accent.with_alpha(0.3), opacity));
    }
    for (text, mut color) in &mut texts {
        color.0 = faded(text.0, opacity);
    }
}

fn style_nav(
    projects: Res<Projects>,
    mut buttons: Query<(&ProjectNavButton, &mut BorderColor)>,
    mut labels: Query<(&ProjectNavLabel, &mut TextColor)>,
) {
    if !projects.is_changed() {
        return;
    }
    let current = projects.current();
    for (button, mut border) in &mut buttons {
        *border = match PROJECTS.get(button.0) {
            Some(project) if button.0 == current => BorderColor::all(accent(project)),
            _ => BorderColor::all(Color::NONE),
        };
    }
    for (label, mut color) in &mut labels {
        color.0 = if label.0 == current {
            Color::WHITE
        } else {
            DIM_TEXT
        };
    }
}

fn update_counter(projects: Res<Projects>, mut counter: Query<&mut Text, With<ProjectCounter>>) {
    let label = counter_label(projects.current(), projects.len());
    for mut text in &mut counter {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}
