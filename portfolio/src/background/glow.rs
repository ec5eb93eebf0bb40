//! Large soft palette-colored orbs drifting behind the shapes.

use std::f32::consts::TAU;

use ambience::{NeonColor, Viewport};
use bevy::{prelude::*, window::PrimaryWindow};
use nalgebra::Vector2;

use crate::viewport;

const GLOW_Z: f32 = -110.0;
const GLOW_OPACITY: f32 = 0.4;
/// Concentric discs per orb; stacking them fakes the blur falloff.
const GLOW_RINGS: usize = 4;
const FLOAT_AMPLITUDE_PX: f32 = 20.0;

/// Where an orb's bounding box sits, in page space, as a function of the viewport.
#[derive(Clone, Copy, Debug)]
enum Anchor {
    TopLeft { left: f32, top: f32 },
    BottomRight { right: f32, bottom: f32 },
    /// Fractions of the viewport.
    TopRightFraction { top: f32, right: f32 },
    BottomLeftFraction { bottom: f32, left: f32 },
}

#[derive(Component, Clone, Copy, Debug)]
struct Orb {
    anchor: Anchor,
    diameter: f32,
    period: f32,
    reverse: bool,
}

impl Orb {
    fn top_left(&self, viewport: Viewport) -> Vector2<f32> {
        let d = self.diameter;
        match self.anchor {
            Anchor::TopLeft { left, top } => Vector2::new(left, top),
            Anchor::BottomRight { right, bottom } => {
                Vector2::new(viewport.width - right - d, viewport.height - bottom - d)
            }
            Anchor::TopRightFraction { top, right } => Vector2::new(
                viewport.width * (1.0 - right) - d,
                viewport.height * top,
            ),
            Anchor::BottomLeftFraction { bottom, left } => Vector2::new(
                viewport.width * left,
                viewport.height * (1.0 - bottom) - d,
            ),
        }
    }

    /// Vertical drift at `t` seconds, page space.
    fn drift(&self, t: f32) -> f32 {
        let phase = (t / self.period) * TAU;
        let sign = if self.reverse { -1.0 } else { 1.0 };
        sign * FLOAT_AMPLITUDE_PX * phase.sin()
    }
}

const ORBS: [(NeonColor, Orb); 4] = [
    (
        NeonColor::Purple,
        Orb {
            anchor: Anchor::TopLeft {
                left: -200.0,
                top: -300.0,
            },
            diameter: 600.0,
            period: 8.0,
            reverse: false,
        },
    ),
    (
        NeonColor::Blue,
        Orb {
            anchor: Anchor::BottomRight {
                right: -100.0,
                bottom: -200.0,
            },
            diameter: 400.0,
            period: 6.0,
            reverse: true,
        },
    ),
    (
        NeonColor::Pink,
        Orb {
            anchor: Anchor::TopRightFraction {
                top: 0.4,
                right: 0.15,
            },
            diameter: 300.0,
            period: 6.0,
            reverse: false,
        },
    ),
    (
        NeonColor::Green,
        Orb {
            anchor: Anchor::BottomLeftFraction {
                bottom: 0.25,
                left: 0.1,
            },
            diameter: 350.0,
            period: 8.0,
            reverse: true,
        },
    ),
];

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_orbs);
    app.add_systems(Update, float_orbs);
}

fn spawn_orbs(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let disc = meshes.add(Circle::new(0.5));
    let layer_alpha = GLOW_OPACITY / GLOW_RINGS as f32;

    for (color, orb) in ORBS {
        let [r, g, b] = color.rgb();
        let material = materials.add(Color::srgb_u8(r, g, b).with_alpha(layer_alpha));

        let root = commands
            .spawn((
                Name::new(format!("Glow{color:?}")),
                orb,
                Transform::from_xyz(0.0, 0.0, GLOW_Z),
                Visibility::default(),
            ))
            .id();
        for ring in 0..GLOW_RINGS {
            let scale = orb.diameter * (1.0 - ring as f32 * 0.2);
            commands.spawn((
                Mesh2d(disc.clone()),
                MeshMaterial2d(material.clone()),
                Transform {
                    translation: Vec3::new(0.0, 0.0, ring as f32 * 0.01),
                    scale: Vec3::new(scale, scale, 1.0),
                    ..default()
                },
                ChildOf(root),
            ));
        }
    }
}

fn float_orbs(
    time: Res<Time>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut orbs: Query<(&Orb, &mut Transform)>,
) {
    let Some(viewport) = viewport::primary(&window) else {
        return;
    };
    let t = time.elapsed_secs();
    for (orb, mut transform) in &mut orbs {
        let top_left = orb.top_left(viewport) + Vector2::new(0.0, orb.drift(t));
        let center = viewport::box_center(top_left, orb.diameter, viewport);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn anchors_resolve_against_the_viewport() {
        let corners: Vec<_> = ORBS.iter().map(|(_, o)| o.top_left(VIEWPORT)).collect();
        assert_eq!(corners[0], Vector2::new(-200.0, -300.0));
        assert_eq!(corners[1], Vector2::new(700.0, 600.0));
        assert_eq!(corners[2], Vector2::new(550.0, 320.0));
        assert_eq!(corners[3], Vector2::new(100.0, 250.0));
    }

    #[test]
    fn reversed_orbs_drift_the_other_way() {
        let (_, forward) = ORBS[0];
        let (_, backward) = ORBS[3];
        let quarter = forward.period / 4.0;
        assert!(forward.drift(quarter) > 0.0);
        assert!(backward.drift(backward.period / 4.0) < 0.0);
        assert!(forward.drift(0.0).abs() < 1.0e-6);
    }
}
