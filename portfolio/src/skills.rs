//! Skill categories as a scroll-stacked column of cards with a timeline beside them.

use ambience::{CardPose, CardStack};
use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{settings::Listeners, viewport};

/// Page y of the column's top edge.
const COLUMN_TOP_PX: f32 = 160.0;
/// Distance between card tops in the unscrolled column.
const CARD_SPACING_PX: f32 = 320.0;
/// Pixels per wheel line, for wheels that report lines.
const LINE_HEIGHT_PX: f32 = 40.0;
const TIMELINE_WIDTH_PX: f32 = 4.0;
const CARD_BACKGROUND: Color = Color::srgba(0.02, 0.03, 0.06, 0.6);
const BODY_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

struct Category {
    title: &'static str,
    accent: [u8; 3],
    skills: &'static [&'static str],
}

const CATEGORIES: [Category; 5] = [
    Category {
        title: "Frontend Development",
        accent: [0x00, 0xc8, 0xff],
        skills: &[
            "React.js (Hooks, Context API)",
            "JavaScript (ES6+)",
            "Tailwind CSS",
            "GSAP Animations",
            "HTML5 & CSS3",
            "Bootstrap",
            "Responsive Design & Accessibility",
        ],
    },
    Category {
        title: "Backend & Database",
        accent: [0x00, 0xff, 0x9d],
        skills: &[
            "Node.js & Express.js",
            "REST APIs",
            "MongoDB + Mongoose",
            "Postman for API testing",
        ],
    },
    Category {
        title: "Web3 & Blockchain",
        accent: [0xb0, 0x26, 0xff],
        skills: &[
            "Solidity (basic smart contracts)",
            "Web3.js Integration",
            "Metamask wallet setup",
        ],
    },
    Category {
        title: "Dev Tools & Workflow",
        accent: [0xff, 0x2d, 0x92],
        skills: &["Git & GitHub", "VS Code", "Postman", "Vite", "CLI"],
    },
    Category {
        title: "UI/UX & Animation",
        accent: [0x00, 0xc8, 0xff],
        skills: &[
            "Figma (UI design & prototyping)",
            "Framer Motion",
            "Lottie JSON animations",
            "CSS Grid & Flexbox",
        ],
    },
];

/// The scroll state of the column. Removing it releases the scroll listener.
#[derive(Resource, Deref, DerefMut)]
pub struct SkillStack(pub CardStack);

#[derive(Component)]
struct SkillCard(usize);

/// Text inside card `.0`, faded with it.
#[derive(Component)]
struct SkillText(usize, Color);

#[derive(Component)]
struct TimelineFill;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_skills);
    app.add_systems(
        Update,
        (scroll_stack, (pose_cards, fill_timeline))
            .chain()
            .run_if(resource_exists::<SkillStack>),
    );
}

fn accent(category: &Category) -> Color {
    let [r, g, b] = category.accent;
    Color::srgb_u8(r, g, b)
}

/// Wheel motion as a scroll delta in pixels. Wheel up (positive y) scrolls back.
fn wheel_delta(event: &MouseWheel) -> f32 {
    let step = match event.unit {
        MouseScrollUnit::Line => LINE_HEIGHT_PX,
        MouseScrollUnit::Pixel => 1.0,
    };
    -event.y * step
}

/// Node placement for a card at layout top `top` (relative to the column) in `pose`.
/// Scale shrinks the card about its horizontal center.
fn card_rect(top: f32, pose: CardPose) -> (Val, Val, Val) {
    let width = 100.0 * pose.scale;
    (
        Val::Px(top + pose.y),
        Val::Percent((100.0 - width) * 0.5),
        Val::Percent(width),
    )
}

fn spawn_skills(mut commands: Commands, listeners: Res<Listeners>) {
    let stack = CardStack::new(CATEGORIES.len(), CARD_SPACING_PX, &listeners.0);

    let column = commands
        .spawn((
            Name::new("Skills"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(COLUMN_TOP_PX),
                bottom: Val::Px(0.0),
                right: Val::Percent(4.0),
                width: Val::Percent(32.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .id();

    let track = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Px(TIMELINE_WIDTH_PX),
                ..default()
            },
            BackgroundColor(Color::srgba(0.69, 0.149, 1.0, 0.3)),
            ChildOf(column),
        ))
        .id();
    commands.spawn((
        TimelineFill,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(0.0),
            ..default()
        },
        BackgroundColor(Color::srgb_u8(0xb0, 0x26, 0xff)),
        ChildOf(track),
    ));

    let cards = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(TIMELINE_WIDTH_PX + 16.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                ..default()
            },
            ChildOf(column),
        ))
        .id();

    for (index, category) in CATEGORIES.iter().enumerate() {
        spawn_card(&mut commands, cards, index, category, &stack);
    }

    commands.insert_resource(SkillStack(stack));
}

fn spawn_card(
    commands: &mut Commands,
    parent: Entity,
    index: usize,
    category: &Category,
    stack: &CardStack,
) {
    let accent = accent(category);
    let (top, left, width) = card_rect(
        stack.card_top(index, 0.0),
        if index == 0 {
            CardPose::SETTLED
        } else {
            CardPose::WAITING
        },
    );
    let card = commands
        .spawn((
            Name::new(category.title),
            SkillCard(index),
            Node {
                position_type: PositionType::Absolute,
                top,
                left,
                width,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(20.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(12.0)),
            BorderColor::all(accent.with_alpha(0.3)),
            BackgroundColor(CARD_BACKGROUND),
            ZIndex(stack.z_index(index) as i32),
            ChildOf(parent),
        ))
        .id();

    commands.spawn((
        SkillText(index, accent),
        Text::new(category.title),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(accent),
        ChildOf(card),
    ));
    for skill in category.skills {
        commands.spawn((
            SkillText(index, BODY_TEXT),
            Text::new(format!("• {skill}")),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(BODY_TEXT),
            ChildOf(card),
        ));
    }
}

fn scroll_stack(mut wheel: MessageReader<MouseWheel>, mut stack: ResMut<SkillStack>) {
    let delta: f32 = wheel.read().map(wheel_delta).sum();
    if delta != 0.0 {
        stack.scroll_by(delta);
    }
}

fn pose_cards(
    window: Query<&Window, With<PrimaryWindow>>,
    stack: Res<SkillStack>,
    mut cards: Query<(&SkillCard, &mut Node, &mut BackgroundColor)>,
    mut texts: Query<(&SkillText, &mut TextColor)>,
) {
    let Some(page) = viewport::primary(&window) else {
        return;
    };
    let poses = stack.poses(COLUMN_TOP_PX, page.height);

    for (card, mut node, mut background) in &mut cards {
        let Some(&pose) = poses.get(card.0) else {
            continue;
        };
        let (top, left, width) = card_rect(stack.card_top(card.0, 0.0), pose);
        node.top = top;
        node.left = left;
        node.width = width;
        background.0 = CARD_BACKGROUND.with_alpha(CARD_BACKGROUND.alpha() * pose.opacity);
    }
    for (text, mut color) in &mut texts {
        if let Some(pose) = poses.get(text.0) {
            color.0 = text.1.with_alpha(text.1.alpha() * pose.opacity);
        }
    }
}

fn fill_timeline(
    window: Query<&Window, With<PrimaryWindow>>,
    stack: Res<SkillStack>,
    mut fill: Query<&mut Node, With<TimelineFill>>,
) {
    let Some(page) = viewport::primary(&window) else {
        return;
    };
    let progress = stack.timeline_progress(COLUMN_TOP_PX, page.height);
    for mut node in &mut fill {
        node.height = Val::Percent(100.0 * progress);
    }
}
