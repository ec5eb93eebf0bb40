//! Skills ticker across the top of the page.

use ambience::Marquee;
use bevy::prelude::*;

const STRIP_TOP_PX: f32 = 24.0;
const ITEM_GAP_PX: f32 = 48.0;
const TILE_PX: f32 = 64.0;
const STRIP_BACKGROUND: Color = Color::srgba(0.02, 0.03, 0.06, 0.4);
const TILE_BACKGROUND: Color = Color::srgba(0.02, 0.03, 0.06, 0.6);
const LABEL_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);

/// Technology names and their brand colors.
const SKILLS: [(&str, [u8; 3]); 18] = [
    ("HTML", [0xE3, 0x4F, 0x26]),
    ("CSS", [0x15, 0x72, 0xB6]),
    ("JavaScript", [0xF7, 0xDF, 0x1E]),
    ("TypeScript", [0x31, 0x78, 0xC6]),
    ("React", [0x61, 0xDA, 0xFB]),
    ("Next.js", [0x00, 0x00, 0x00]),
    ("Node.js", [0x33, 0x99, 0x33]),
    ("Express", [0x00, 0x00, 0x00]),
    ("MongoDB", [0x47, 0xA2, 0x48]),
    ("Git", [0xF0, 0x50, 0x32]),
    ("Tailwind CSS", [0x06, 0xB6, 0xD4]),
    ("GSAP", [0x88, 0xCE, 0x02]),
    ("Framer Motion", [0x00, 0x55, 0xFF]),
    ("Three.js", [0x00, 0x00, 0x00]),
    ("Firebase", [0xFF, 0xCA, 0x28]),
    ("GraphQL", [0xE1, 0x00, 0x98]),
    ("Figma", [0xF2, 0x4E, 0x1E]),
    ("Vercel", [0x00, 0x00, 0x00]),
];

/// The moving row holding both copies of the content.
#[derive(Component, Deref)]
struct MarqueeTrack(Marquee);

/// One copy of the content. Only the first is measured.
#[derive(Component)]
struct MarqueeGroup(usize);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_skills_marquee);
    app.add_systems(Update, scroll_marquee);
}

/// Black brand colors would vanish against the dark page.
fn brand_color([r, g, b]: [u8; 3]) -> Color {
    if r == 0 && g == 0 && b == 0 {
        Color::WHITE
    } else {
        Color::srgb_u8(r, g, b)
    }
}

/// First two characters, as shown on the tile.
fn monogram(name: &str) -> String {
    name.chars().take(2).collect()
}

fn spawn_skills_marquee(mut commands: Commands) {
    let strip = commands
        .spawn((
            Name::new("SkillsMarquee"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(STRIP_TOP_PX),
                width: Val::Percent(100.0),
                padding: UiRect::vertical(Val::Px(24.0)),
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(STRIP_BACKGROUND),
        ))
        .id();

    let track = commands
        .spawn((
            Name::new("MarqueeTrack"),
            MarqueeTrack(Marquee::default()),
            Node {
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                ..default()
            },
            ChildOf(strip),
        ))
        .id();

    for copy in 0..2 {
        let group = commands
            .spawn((
                MarqueeGroup(copy),
                Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(ITEM_GAP_PX),
                    // Trailing gap so the seam between copies matches the gaps inside them.
                    padding: UiRect::right(Val::Px(ITEM_GAP_PX)),
                    flex_shrink: 0.0,
                    ..default()
                },
                ChildOf(track),
            ))
            .id();
        for (name, rgb) in SKILLS {
            spawn_skill(&mut commands, group, name, brand_color(rgb));
        }
    }
}

fn spawn_skill(commands: &mut Commands, group: Entity, name: &str, color: Color) {
    let item = commands
        .spawn((
            Name::new(name.to_string()),
            Button,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            ChildOf(group),
        ))
        .id();

    let tile = commands
        .spawn((
            Node {
                width: Val::Px(TILE_PX),
                height: Val::Px(TILE_PX),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(12.0)),
            BorderColor::all(Color::srgba(1.0, 1.0, 1.0, 0.1)),
            BackgroundColor(TILE_BACKGROUND),
            ChildOf(item),
        ))
        .id();
    commands.spawn((
        Text::new(monogram(name)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(color),
        ChildOf(tile),
    ));

    commands.spawn((
        Text::new(name),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(LABEL_COLOR),
        Node {
            margin: UiRect::top(Val::Px(8.0)),
            ..default()
        },
        ChildOf(item),
    ));
}

fn scroll_marquee(
    time: Res<Time>,
    groups: Query<(&MarqueeGroup, &ComputedNode)>,
    mut tracks: Query<(&MarqueeTrack, &mut Node)>,
) {
    // Layout reports physical pixels; the offset is in logical ones like `Val::Px`.
    let Some(width) = groups
        .iter()
        .find(|(group, _)| group.0 == 0)
        .map(|(_, node)| node.size().x * node.inverse_scale_factor())
    else {
        return;
    };

    for (track, mut node) in &mut tracks {
        let offset = track.offset(time.elapsed_secs(), width);
        node.left = Val::Px(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_brands_render_white() {
        assert_eq!(brand_color([0, 0, 0]), Color::WHITE);
        assert_eq!(
            brand_color([0x61, 0xDA, 0xFB]),
            Color::srgb_u8(0x61, 0xDA, 0xFB)
        );
    }

    #[test]
    fn monograms_take_two_characters() {
        assert_eq!(monogram("Next.js"), "Ne");
        assert_eq!(monogram("Git"), "Gi");
        assert_eq!(monogram("C"), "C");
    }
}
