use nalgebra::Vector2;

use crate::{
    animator::{FallAnimator, Landing, RainState},
    config::BackgroundConfig,
    generator::generate_shapes,
    listener::{ListenerGuard, ListenerKind, ListenerRegistry},
    parallax::Parallax,
    shape::{Shape, Viewport},
    tray::CollectionTray,
};

/// Listeners the background holds for as long as it is mounted.
pub const BACKGROUND_LISTENERS: [ListenerKind; 2] = [ListenerKind::PointerMove, ListenerKind::Click];

/// The interactive raining-shapes background.
///
/// Mounting generates the shapes, starts their falls and registers the pointer-move and click
/// listeners. Dropping the value is the teardown: tweens are killed and every listener is
/// released.
#[derive(Debug)]
pub struct Background {
    config: BackgroundConfig,
    viewport: Viewport,
    rng: fastrand::Rng,
    shapes: Vec<Shape>,
    animator: FallAnimator,
    tray: CollectionTray,
    parallax: Parallax,
    _listeners: Vec<ListenerGuard>,
}

impl Background {
    pub fn mount(
        viewport: Viewport,
        config: BackgroundConfig,
        registry: &ListenerRegistry,
        mut rng: fastrand::Rng,
    ) -> Self {
        let shapes = generate_shapes(viewport, &config, &mut rng);
        let animator = FallAnimator::new(&shapes, viewport, &config, &mut rng);
        let tray = CollectionTray::new(config.tray_height);
        let parallax = Parallax::new(&config);
        let listeners = registry.acquire_all(&BACKGROUND_LISTENERS);

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            shapes = shapes.len(),
            mode = ?config.mode,
            "background mounted"
        );

        Self {
            config,
            viewport,
            rng,
            shapes,
            animator,
            tray,
            parallax,
            _listeners: listeners,
        }
    }

    /// Click anywhere: flip between raining and paused.
    pub fn click(&mut self) -> RainState {
        self.animator.toggle()
    }

    pub fn pointer_moved(&mut self, pointer: Vector2<f32>) {
        self.parallax.pointer_moved(pointer, self.viewport);
    }

    /// Advances falls and parallax by `dt` seconds. Landed shapes move into the tray.
    pub fn tick(&mut self, dt: f32) -> Vec<Landing> {
        let landings = self.animator.advance(dt, &mut self.shapes, &mut self.rng);
        for landing in &landings {
            let shape = &self.shapes[landing.index];
            self.tray.receive(shape, self.viewport.width, &mut self.rng);
        }
        self.parallax.advance(dt);
        landings
    }

    /// Regenerates everything for a new viewport. The tray is emptied, the rain state and
    /// the parallax offsets carry over.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let state = self.animator.state();
        self.viewport = viewport;
        self.shapes = generate_shapes(viewport, &self.config, &mut self.rng);
        self.animator = FallAnimator::new(&self.shapes, viewport, &self.config, &mut self.rng);
        if state == RainState::Paused {
            self.animator.pause();
        }
        self.tray.clear();
        tracing::debug!(shapes = self.shapes.len(), "background regenerated");
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes still on the falling layer.
    pub fn falling(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate().filter(|(_, s)| !s.fallen)
    }

    pub fn tray(&self) -> &CollectionTray {
        &self.tray
    }

    pub fn parallax(&self) -> &Parallax {
        &self.parallax
    }

    pub fn animator(&self) -> &FallAnimator {
        &self.animator
    }

    pub fn state(&self) -> RainState {
        self.animator.state()
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.animator.kill();
        tracing::debug!("background torn down");
    }
}
