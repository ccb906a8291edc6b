use glam::Vec2;
use rand::Rng;

use crate::{
    blade::Blade,
    color::Hsb,
    config::{PhysicsConfig, SceneConfig},
    error::Result,
    types::BladeId,
};

/// Builds blades with randomized height, stroke width and lightness.
#[derive(Clone, Debug)]
pub struct BladeFactory {
    cfg: SceneConfig,
}

impl BladeFactory {
    pub fn new(cfg: SceneConfig) -> Self {
        Self { cfg }
    }

    pub fn draw_height(&self) -> f32 {
        self.cfg.draw_height()
    }

    pub fn set_physics(&mut self, physics: PhysicsConfig) -> Result<()> {
        physics.validate()?;
        self.cfg.physics = physics;
        Ok(())
    }

    /// Creates a blade anchored on the ground line at `x`.
    ///
    /// The blade reaches a whole-percent share of the drawable height,
    /// drawn uniformly from the configured range. Taller blades get
    /// thinner strokes.
    pub fn create_at(&self, id: BladeId, x: f32, rng: &mut impl Rng) -> Blade {
        let draw_height = self.cfg.draw_height();

        let height_percent =
            rng.random_range(self.cfg.min_height_percent..=self.cfg.max_height_percent);
        let height = draw_height * (height_percent as f32 / 100.0);
        let lightness =
            rng.random_range(self.cfg.min_lightness_percent..=self.cfg.max_lightness_percent);

        let bottom = Vec2::new(x, draw_height);
        let top_rest = Vec2::new(x, draw_height - height);
        let stroke_width = self.cfg.stroke_scale * (draw_height - height);
        let color = Hsb::new(self.cfg.hue, self.cfg.saturation, lightness as f32);

        log::debug!(
            "Blade {id} at x={x:.1}: height {height_percent}%, stroke {stroke_width:.2}, {color}"
        );

        Blade::new(
            id,
            bottom,
            top_rest,
            stroke_width,
            color,
            self.cfg.height,
            self.cfg.physics,
        )
    }
}
