/*!
Tunables for the background and the cursor.

Defaults come from [`crate::constants`]. Both structs deserialize with every field optional,
so an embedder can override just the values it cares about and call `validate()` once.
*/

use std::ops::Range;

use serde::Deserialize;

use crate::{
    constants::*,
    error::{Error, Result},
};

/// What happens when a shape reaches the bottom of its fall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallMode {
    /// Respawn at the top at a new random x and fall again, forever.
    Loop,
    /// Drop a copy into the tray and stop.
    #[default]
    Collect,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub mode: FallMode,
    pub max_shapes: usize,
    pub area_per_shape: f32,
    pub size: Range<f32>,
    pub fall_speed: Range<f32>,
    pub start_delay: Range<f32>,
    pub fall_duration_scale: f32,
    pub tray_height: f32,
    pub layer_parallax: f32,
    pub tray_parallax: f32,
    pub parallax_ease: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: FallMode::default(),
            max_shapes: MAX_SHAPES,
            area_per_shape: AREA_PER_SHAPE,
            size: SHAPE_SIZE_PX,
            fall_speed: FALL_SPEED,
            start_delay: START_DELAY_S,
            fall_duration_scale: FALL_DURATION_SCALE,
            tray_height: TRAY_HEIGHT_PX,
            layer_parallax: LAYER_PARALLAX_PX,
            tray_parallax: TRAY_PARALLAX_PX,
            parallax_ease: PARALLAX_EASE_S,
        }
    }
}

impl BackgroundConfig {
    pub fn validate(&self) -> Result<()> {
        Error::check_positive("area_per_shape", self.area_per_shape)?;
        Error::check_range("size", &self.size)?;
        Error::check_positive("size.start", self.size.start)?;
        Error::check_range("fall_speed", &self.fall_speed)?;
        Error::check_positive("fall_speed.start", self.fall_speed.start)?;
        if self.start_delay.start < 0.0 {
            return Err(Error::InvalidRange {
                field: "start_delay",
                start: self.start_delay.start,
                end: self.start_delay.end,
            });
        }
        Error::check_range("start_delay", &self.start_delay)?;
        Error::check_positive("fall_duration_scale", self.fall_duration_scale)?;
        Error::check_positive("tray_height", self.tray_height)?;
        Error::check_positive("parallax_ease", self.parallax_ease)?;
        Error::check_finite("layer_parallax", self.layer_parallax)?;
        Error::check_finite("tray_parallax", self.tray_parallax)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub min_viewport_width: f32,
    pub dot_ease: f32,
    pub ring_ease: f32,
    pub trail_chance: f32,
    pub max_trails: usize,
    pub trail_size: Range<f32>,
    pub trail_hue: Range<f32>,
    pub trail_fade: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            min_viewport_width: CURSOR_MIN_VIEWPORT_WIDTH,
            dot_ease: CURSOR_DOT_EASE_S,
            ring_ease: CURSOR_RING_EASE_S,
            trail_chance: TRAIL_SPAWN_CHANCE,
            max_trails: MAX_TRAILS,
            trail_size: TRAIL_SIZE_PX,
            trail_hue: TRAIL_HUE_DEG,
            trail_fade: TRAIL_FADE_S,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<()> {
        Error::check_finite("min_viewport_width", self.min_viewport_width)?;
        Error::check_positive("dot_ease", self.dot_ease)?;
        Error::check_positive("ring_ease", self.ring_ease)?;
        Error::check_unit("trail_chance", self.trail_chance)?;
        Error::check_range("trail_size", &self.trail_size)?;
        Error::check_range("trail_hue", &self.trail_hue)?;
        Error::check_positive("trail_fade", self.trail_fade)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(BackgroundConfig::default().validate(), Ok(()));
        assert_eq!(CursorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reversed_size_range_is_rejected() {
        let config = BackgroundConfig {
            size: 40.0..10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidRange {
                field: "size",
                start: 40.0,
                end: 10.0
            })
        );
    }

    #[test]
    fn zero_fall_speed_is_rejected() {
        // A zero speed would make the fall duration infinite.
        let config = BackgroundConfig {
            fall_speed: 0.0..4.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositive {
                field: "fall_speed.start",
                ..
            })
        ));
    }

    #[test]
    fn negative_delay_is_rejected() {
        let config = BackgroundConfig {
            start_delay: -1.0..10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidRange {
                field: "start_delay",
                ..
            })
        ));
    }

    #[test]
    fn trail_chance_must_be_a_probability() {
        let config = CursorConfig {
            trail_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::OutOfUnitInterval {
                field: "trail_chance",
                value: 1.5
            })
        );
    }

    #[test]
    fn nan_min_width_is_rejected() {
        let config = CursorConfig {
            min_viewport_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NotFinite {
                field: "min_viewport_width",
                ..
            })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: BackgroundConfig =
            serde_json::from_str(r#"{ "mode": "loop", "tray_height": 120.0 }"#).unwrap();
        assert_eq!(
            config,
            BackgroundConfig {
                mode: FallMode::Loop,
                tray_height: 120.0,
                ..Default::default()
            }
        );
        assert_eq!(config.validate(), Ok(()));

        let cursor: CursorConfig =
            serde_json::from_str(r#"{ "trail_size": { "start": 2.0, "end": 6.0 } }"#).unwrap();
        assert_eq!(cursor.trail_size, 2.0..6.0);
        assert_eq!(cursor.max_trails, MAX_TRAILS);
    }

    #[test]
    fn empty_json_is_the_default() {
        let config: CursorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CursorConfig::default());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = Error::NonPositive {
            field: "tray_height",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "`tray_height` must be positive, got 0");
    }
}
