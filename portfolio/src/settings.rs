use ambience::{BackgroundConfig, CursorConfig, ListenerRegistry};
use bevy::prelude::*;

/// Validated tunables for the whole page.
#[derive(Resource, Debug, Clone, Default)]
pub struct Settings {
    pub background: BackgroundConfig,
    pub cursor: CursorConfig,
    /// Fixed seed for reproducible rain. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Replaces any invalid section with its defaults, logging why.
    pub fn sanitized(mut self) -> Self {
        if let Err(err) = self.background.validate() {
            error!("Invalid background settings, using defaults: {err}");
            self.background = BackgroundConfig::default();
        }
        if let Err(err) = self.cursor.validate() {
            error!("Invalid cursor settings, using defaults: {err}");
            self.cursor = CursorConfig::default();
        }
        self
    }
}

/// Window-level listener table shared by every interactive effect.
#[derive(Resource, Debug, Clone, Default)]
pub struct Listeners(pub ListenerRegistry);

pub(super) fn plugin(app: &mut App) {
    let settings = app
        .world_mut()
        .remove_resource::<Settings>()
        .unwrap_or_default()
        .sanitized();
    info!(
        "Settings: mode={:?} max_shapes={} seed={:?}",
        settings.background.mode, settings.background.max_shapes, settings.seed
    );
    app.insert_resource(settings);
    app.init_resource::<Listeners>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sections_fall_back_to_defaults() {
        let settings = Settings {
            background: BackgroundConfig {
                tray_height: -1.0,
                ..Default::default()
            },
            cursor: CursorConfig {
                trail_chance: 2.0,
                ..Default::default()
            },
            seed: Some(1),
        }
        .sanitized();

        assert_eq!(settings.background, BackgroundConfig::default());
        assert_eq!(settings.cursor, CursorConfig::default());
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn seeded_settings_give_identical_rngs() {
        let settings = Settings {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(settings.rng().u64(..), settings.rng().u64(..));
    }

    #[test]
    fn plugin_installs_resources() {
        let mut app = App::new();
        app.add_plugins(plugin);
        assert!(app.world().contains_resource::<Settings>());
        assert!(app.world().contains_resource::<Listeners>());
    }
}
