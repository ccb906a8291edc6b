//! A single blade of grass, simulated as a damped spring.
//!
//! The blade is drawn as a Catmull-Rom segment from its ground anchor to
//! its tip. Every frame [`Blade::step`] runs three phases in order:
//!
//! 1. wind — the current acceleration moves the tip, and the upper
//!    control point by a multiple of it.
//! 2. bounds — a force proportional to the horizontal distance from the
//!    rest position pulls the tip back.
//! 3. drag — a quadratic drag bleeds energy off the acceleration. It can
//!    at most bring the acceleration to zero, never reverse it.
//!
//! Clicks feed energy in through [`Blade::apply_impulse`].

use glam::Vec2;

use crate::{
    canvas::Canvas,
    color::{Hsb, Rgb},
    config::PhysicsConfig,
    error::Result,
    spline::lerp_samples,
    types::BladeId,
};

/// Dots drawn along the lower control segment in the debug overlay.
const DEBUG_LOWER_SAMPLES: usize = 10;
/// Dots drawn along the upper control segment in the debug overlay.
const DEBUG_UPPER_SAMPLES: usize = 20;
const DEBUG_MARKER_WEIGHT: f32 = 10.0;
const DEBUG_SAMPLE_WEIGHT: f32 = 2.0;

#[derive(Clone, Debug)]
pub struct Blade {
    id: BladeId,
    bottom: Vec2,
    top_rest: Vec2,
    top: Vec2,
    curve_start: Vec2,
    curve_end: Vec2,
    acceleration: Vec2,
    stroke_width: f32,
    color: Hsb,
    physics: PhysicsConfig,
}

impl Blade {
    /// Creates a blade at rest.
    ///
    /// The lower control point sits straight below the anchor on the
    /// bottom edge of the canvas and the upper one straight above the tip
    /// on the top edge.
    ///
    /// ### Parameters
    /// - `id` - Identifier assigned by the owning scene.
    /// - `bottom` - Ground anchor of the blade.
    /// - `top_rest` - Equilibrium position of the tip.
    /// - `stroke_width` - Line width used when drawing.
    /// - `color` - Stroke color.
    /// - `canvas_height` - Full canvas height, including any bottom margin.
    /// - `physics` - Constants for the update step; expected to pass
    ///   [`PhysicsConfig::validate`].
    pub fn new(
        id: BladeId,
        bottom: Vec2,
        top_rest: Vec2,
        stroke_width: f32,
        color: Hsb,
        canvas_height: f32,
        physics: PhysicsConfig,
    ) -> Self {
        debug_assert!(physics.validate().is_ok(), "invalid physics {physics:?}");
        Self {
            id,
            bottom,
            top_rest,
            top: top_rest,
            curve_start: Vec2::new(bottom.x, canvas_height),
            curve_end: Vec2::new(top_rest.x, 0.0),
            acceleration: Vec2::ZERO,
            stroke_width,
            color,
            physics,
        }
    }

    pub fn id(&self) -> BladeId {
        self.id
    }

    pub fn bottom(&self) -> Vec2 {
        self.bottom
    }

    pub fn top_rest(&self) -> Vec2 {
        self.top_rest
    }

    pub fn top(&self) -> Vec2 {
        self.top
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn color(&self) -> Hsb {
        self.color
    }

    /// Vertical distance from the ground anchor to the resting tip.
    pub fn height(&self) -> f32 {
        self.bottom.y - self.top_rest.y
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Replaces the physics constants, rejecting values that would make
    /// the update step undefined.
    pub fn set_physics(&mut self, physics: PhysicsConfig) -> Result<()> {
        physics.validate()?;
        self.physics = physics;
        Ok(())
    }

    /// The four points of the drawn curve: lower control, anchor, tip,
    /// upper control.
    pub fn spline_points(&self) -> [Vec2; 4] {
        [self.curve_start, self.bottom, self.top, self.curve_end]
    }

    /// Horizontal displacement of the tip from its rest position.
    pub fn displacement(&self) -> f32 {
        self.top.x - self.top_rest.x
    }

    /// Advances the blade by one frame.
    pub fn step(&mut self) {
        let wind = self.acceleration;
        self.apply_wind(wind);
        self.apply_bounds();
        self.apply_drag();
    }

    fn apply_wind(&mut self, wind: Vec2) {
        self.top += wind;
        self.curve_end += wind * self.physics.wind_multiplier;
    }

    fn apply_bounds(&mut self) {
        let distance = (self.top.x - self.top_rest.x).abs();
        let mut force = Vec2::X * (distance / self.physics.bounds_damping);
        if self.top.x > self.top_rest.x {
            force = -force;
        }
        self.apply_force(force);
    }

    fn apply_drag(&mut self) {
        let speed_sq = self.acceleration.length_squared();
        // Capped at the current speed so a large gust is stopped, not flipped.
        let magnitude = (self.physics.drag_coefficient * speed_sq).clamp(-speed_sq.sqrt(), 0.0);
        // A blade at rest has no direction to drag against.
        let drag = self.acceleration.normalize_or_zero() * magnitude;
        self.apply_force(drag);
    }

    /// Pushes the blade away from a gust originating at `origin_x`.
    ///
    /// A gust from exactly above the tip pushes towards positive x.
    pub fn apply_impulse(&mut self, origin_x: f32) {
        let mut force = Vec2::new(self.physics.impulse_magnitude, 0.0);
        if origin_x > self.top.x {
            force = -force;
        }
        self.apply_force(force);
    }

    #[inline]
    fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Draws the blade, plus its control geometry when `debug` is set.
    pub fn render(&self, canvas: &mut impl Canvas, debug: bool) {
        canvas.curve(self.spline_points(), self.stroke_width, self.color.to_rgb());
        if debug {
            self.render_debug(canvas);
        }
    }

    fn render_debug(&self, canvas: &mut impl Canvas) {
        // Curve endpoints.
        canvas.point(self.bottom, DEBUG_MARKER_WEIGHT, Rgb::WHITE);
        canvas.point(self.top, DEBUG_MARKER_WEIGHT, Rgb::WHITE);

        // Control points.
        canvas.point(self.curve_start, DEBUG_MARKER_WEIGHT, Rgb::RED);
        canvas.point(self.curve_end, DEBUG_MARKER_WEIGHT, Rgb::RED);

        let lower = lerp_samples(self.curve_start, self.bottom, DEBUG_LOWER_SAMPLES);
        let upper = lerp_samples(self.top, self.curve_end, DEBUG_UPPER_SAMPLES);
        for p in lower.chain(upper) {
            canvas.point(p, DEBUG_SAMPLE_WEIGHT, Rgb::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    fn test_blade() -> Blade {
        Blade::new(
            0,
            Vec2::new(300.0, 500.0),
            Vec2::new(300.0, 200.0),
            3.0,
            Hsb::new(120.0, 40.0, 40.0),
            600.0,
            PhysicsConfig::default(),
        )
    }

    fn assert_finite(blade: &Blade) {
        for p in blade.spline_points() {
            assert!(p.is_finite(), "non-finite spline point {p:?}");
        }
        assert!(blade.acceleration().is_finite());
    }

    #[test]
    fn new_blade_is_at_rest_with_edge_control_points() {
        let blade = test_blade();

        assert_eq!(blade.top(), blade.top_rest());
        assert_eq!(blade.acceleration(), Vec2::ZERO);
        assert_eq!(blade.height(), 300.0);

        let [start, bottom, top, end] = blade.spline_points();
        assert_eq!(start, Vec2::new(300.0, 600.0));
        assert_eq!(bottom, Vec2::new(300.0, 500.0));
        assert_eq!(top, Vec2::new(300.0, 200.0));
        assert_eq!(end, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn step_at_rest_produces_no_nan() {
        // Zero acceleration and zero displacement: drag has to normalize a
        // zero vector.
        let mut blade = test_blade();
        for _ in 0..10 {
            blade.step();
        }

        assert_finite(&blade);
        assert_eq!(blade.top(), blade.top_rest());
        assert_eq!(blade.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn drag_on_zero_acceleration_is_a_no_op() {
        let mut blade = test_blade();
        blade.apply_drag();
        assert_eq!(blade.acceleration(), Vec2::ZERO);
    }

    #[test]
    fn drag_is_quadratic_and_opposes_acceleration() {
        let mut blade = test_blade();
        blade.acceleration = Vec2::new(10.0, 0.0);
        blade.apply_drag();
        // 10 - 0.01 * 10^2
        assert!((blade.acceleration().x - 9.0).abs() < 1e-5);

        blade.acceleration = Vec2::new(-10.0, 0.0);
        blade.apply_drag();
        assert!((blade.acceleration().x + 9.0).abs() < 1e-5);
    }

    #[test]
    fn wind_moves_upper_control_point_further_than_tip() {
        let mut blade = test_blade();
        blade.apply_wind(Vec2::new(2.0, 0.0));

        assert_eq!(blade.top(), Vec2::new(302.0, 200.0));
        assert_eq!(blade.spline_points()[3], Vec2::new(310.0, 0.0));
        // The lower control point and the anchor never move.
        assert_eq!(blade.spline_points()[0], Vec2::new(300.0, 600.0));
        assert_eq!(blade.bottom(), Vec2::new(300.0, 500.0));
    }

    #[test]
    fn bounds_pull_towards_rest_from_either_side() {
        let mut blade = test_blade();
        blade.top.x = 325.0;
        blade.apply_bounds();
        assert!((blade.acceleration().x + 0.5).abs() < 1e-6);

        let mut blade = test_blade();
        blade.top.x = 275.0;
        blade.apply_bounds();
        assert!((blade.acceleration().x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn impulse_points_away_from_origin() {
        let mut blade = test_blade();
        blade.apply_impulse(100.0);
        assert_eq!(blade.acceleration(), Vec2::new(10.0, 0.0));

        let mut blade = test_blade();
        blade.apply_impulse(450.0);
        assert_eq!(blade.acceleration(), Vec2::new(-10.0, 0.0));

        // A gust from directly above pushes right.
        let mut blade = test_blade();
        blade.apply_impulse(300.0);
        assert_eq!(blade.acceleration(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn impulse_sign_holds_with_existing_motion() {
        let mut blade = test_blade();
        blade.apply_impulse(0.0);
        for _ in 0..7 {
            blade.step();
        }

        let before = blade.acceleration().x;
        blade.apply_impulse(blade.top().x - 1.0);
        assert!(blade.acceleration().x > before);

        let before = blade.acceleration().x;
        blade.apply_impulse(blade.top().x + 1.0);
        assert!(blade.acceleration().x < before);
    }

    #[test]
    fn oscillation_decays_after_an_impulse() {
        let mut blade = test_blade();
        blade.apply_impulse(0.0);

        let mut early = 0.0f32;
        let mut late = 0.0f32;
        for frame in 1..=1700 {
            blade.step();
            let d = blade.displacement().abs();
            if frame <= 200 {
                early = early.max(d);
            } else if frame > 1500 {
                late = late.max(d);
            }
        }

        assert_finite(&blade);
        assert!(early > 40.0, "early amplitude {early}");
        assert!(late < 5.0, "late amplitude {late}");
        assert!(late < early / 4.0);
    }

    #[test]
    fn set_physics_changes_future_steps() {
        let mut blade = test_blade();
        blade
            .set_physics(PhysicsConfig {
                impulse_magnitude: 3.0,
                ..PhysicsConfig::default()
            })
            .unwrap();
        blade.apply_impulse(0.0);
        assert_eq!(blade.acceleration(), Vec2::new(3.0, 0.0));
        assert_eq!(blade.physics().impulse_magnitude, 3.0);
    }

    #[test]
    fn set_physics_rejects_zero_bounds_damping() {
        let mut blade = test_blade();
        let err = blade.set_physics(PhysicsConfig {
            bounds_damping: 0.0,
            ..PhysicsConfig::default()
        });

        assert!(err.is_err());
        assert_eq!(*blade.physics(), PhysicsConfig::default());
        blade.step();
        blade.step();
        assert_finite(&blade);
    }

    #[test]
    fn drag_never_reverses_a_large_acceleration() {
        let mut blade = test_blade();
        blade.acceleration = Vec2::new(210.0, 0.0);
        blade.apply_drag();
        // Uncapped, 210 - 0.01 * 210^2 would flip to -231.
        assert!(blade.acceleration().length() < 1e-3);

        blade.acceleration = Vec2::new(-50.0, 0.0);
        blade.apply_drag();
        assert!((blade.acceleration().x + 25.0).abs() < 1e-4);
    }

    #[test]
    fn stacked_gusts_stay_finite_and_settle() {
        let mut blade = test_blade();
        // Twenty-one gusts with no frame in between.
        for _ in 0..21 {
            blade.apply_impulse(0.0);
        }
        assert_eq!(blade.acceleration(), Vec2::new(210.0, 0.0));

        let mut late = 0.0f32;
        for frame in 0..3000 {
            blade.step();
            assert_finite(&blade);
            if frame >= 2800 {
                late = late.max(blade.displacement().abs());
            }
        }
        assert!(late < 2.0, "still swinging by {late}");
    }

    #[test]
    fn render_draws_one_curve_through_spline_points() {
        let blade = test_blade();
        let mut list = DrawList::new();

        blade.render(&mut list, false);

        assert_eq!(list.commands.len(), 1);
        match &list.commands[0] {
            DrawCommand::Curve {
                points,
                stroke_width,
                color,
            } => {
                assert_eq!(*points, blade.spline_points());
                assert_eq!(*stroke_width, 3.0);
                assert_eq!(*color, blade.color().to_rgb());
            }
            other => panic!("expected a curve, got {other:?}"),
        }
    }

    #[test]
    fn debug_render_marks_control_geometry() {
        let blade = test_blade();
        let mut list = DrawList::new();

        blade.render(&mut list, true);

        assert_eq!(list.curves().count(), 1);
        // 4 markers, then the sampled dots along both control segments.
        assert_eq!(
            list.points().count(),
            4 + DEBUG_LOWER_SAMPLES + DEBUG_UPPER_SAMPLES
        );

        let red: Vec<Vec2> = list
            .points()
            .filter_map(|c| match c {
                DrawCommand::Point { pos, color, .. } if *color == Rgb::RED => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(red, vec![Vec2::new(300.0, 600.0), Vec2::new(300.0, 0.0)]);
    }
}
