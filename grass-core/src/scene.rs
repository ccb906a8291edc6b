//! The scene: an ordered collection of blades driven frame by frame.
//!
//! Blades are kept in creation order, which is also the paint order.
//! Two entry points are meant to be called from the host's event loop:
//!
//! - [`Scene::on_frame`] — paints the background, then steps and draws
//!   every blade.
//! - [`Scene::on_pointer_down`] — plants a blade at the pointer and sends
//!   a gust through every blade, the new one included.

use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    blade::Blade,
    canvas::Canvas,
    color::Rgb,
    config::{PhysicsConfig, SceneConfig},
    error::Result,
    factory::BladeFactory,
    types::BladeId,
};

pub struct Scene {
    cfg: SceneConfig,
    factory: BladeFactory,
    blades: Vec<Blade>,
    rng: StdRng,
    next_id: BladeId,
}

impl Scene {
    /// Creates an empty scene.
    ///
    /// ### Parameters
    /// - `cfg` - Layout, appearance ranges and physics; validated here.
    /// - `seed` - Seed for blade randomization, so runs can be replayed.
    ///
    /// ### Returns
    /// The new scene, or [`crate::error::Error::InvalidConfig`].
    pub fn new(cfg: SceneConfig, seed: u64) -> Result<Self> {
        cfg.validate()?;
        log::info!(
            "Scene {}x{} (ground at y={}), seed {seed}",
            cfg.width,
            cfg.height,
            cfg.draw_height()
        );

        Ok(Self {
            cfg,
            factory: BladeFactory::new(cfg),
            blades: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    pub fn blades(&self) -> &[Blade] {
        &self.blades
    }

    pub fn debug_overlay(&self) -> bool {
        self.cfg.debug_overlay
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        self.cfg.debug_overlay = on;
    }

    /// Replaces the physics constants of the factory and of every blade.
    ///
    /// ### Returns
    /// [`crate::error::Error::InvalidConfig`] if `physics` fails
    /// validation; the scene is left unchanged in that case.
    pub fn set_physics(&mut self, physics: PhysicsConfig) -> Result<()> {
        physics.validate()?;
        self.factory.set_physics(physics)?;
        for blade in &mut self.blades {
            blade.set_physics(physics)?;
        }
        self.cfg.physics = physics;
        Ok(())
    }

    /// Removes every blade and restarts id numbering.
    pub fn reset(&mut self) {
        log::info!("Scene reset, dropping {} blades", self.blades.len());
        self.blades.clear();
        self.next_id = 0;
    }

    /// Advances and draws one frame.
    pub fn on_frame(&mut self, canvas: &mut impl Canvas) {
        log::trace!("Frame with {} blades", self.blades.len());
        self.render_background(canvas);

        let debug = self.cfg.debug_overlay;
        for blade in &mut self.blades {
            blade.step();
            blade.render(canvas, debug);
        }
    }

    /// Draws the current state without advancing it.
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.render_background(canvas);
        for blade in &self.blades {
            blade.render(canvas, self.cfg.debug_overlay);
        }
    }

    /// Advances every blade by one frame without drawing.
    pub fn step_all(&mut self) {
        for blade in &mut self.blades {
            blade.step();
        }
    }

    /// Plants a blade at `x` and pushes every blade away from `x`.
    ///
    /// ### Returns
    /// The id of the new blade.
    pub fn on_pointer_down(&mut self, x: f32) -> BladeId {
        let id = self.next_id;
        self.next_id += 1;

        let blade = self.factory.create_at(id, x, &mut self.rng);
        self.blades.push(blade);

        for blade in &mut self.blades {
            blade.apply_impulse(x);
        }
        id
    }

    fn render_background(&self, canvas: &mut impl Canvas) {
        let size = Vec2::new(self.cfg.width, self.cfg.height);
        canvas.fill_rect(Vec2::ZERO, size, Rgb::BLACK);

        if self.cfg.bottom_margin > 0.0 {
            canvas.fill_rect(Vec2::new(0.0, self.cfg.draw_height()), size, Rgb::SOIL);
        }
    }
}
