//! Interactive grass viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Scene`] and
//! implements [`eframe::App`] to run frames, forward clicks and paint
//! the blades through an egui [`egui::Painter`].

use eframe::App;
use glam::Vec2;
use grass_core::{
    canvas::Canvas,
    color::Rgb,
    config::PhysicsConfig,
    scene::Scene,
    spline::catmull_rom_to_bezier,
    types::BladeId,
};

// Physics panel limits.
const WIND_MULTIPLIER_RANGE: std::ops::RangeInclusive<f32> = 0.0..=20.0;
const BOUNDS_DAMPING_RANGE: std::ops::RangeInclusive<f32> = 10.0..=500.0;
const DRAG_COEFFICIENT_RANGE: std::ops::RangeInclusive<f32> = -0.05..=0.0;
const IMPULSE_MAGNITUDE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=30.0;

/// Placement of the scene canvas inside a screen rectangle.
///
/// The canvas is scaled uniformly to fit and centered. Both canvas and
/// screen coordinates have y growing downward, so no flip is needed.
#[derive(Clone, Copy, Debug)]
struct CanvasView {
    /// Screen rectangle covered by the canvas.
    rect: egui::Rect,
    /// Screen pixels per canvas pixel.
    scale: f32,
}

impl CanvasView {
    /// Fits a `size` canvas into `available`.
    fn fit(size: Vec2, available: egui::Rect) -> Self {
        let scale = (available.width() / size.x)
            .min(available.height() / size.y)
            .max(f32::EPSILON);
        let rect = egui::Rect::from_center_size(
            available.center(),
            egui::vec2(size.x * scale, size.y * scale),
        );
        Self { rect, scale }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + p.x * self.scale,
            self.rect.min.y + p.y * self.scale,
        )
    }

    fn to_canvas(&self, p: egui::Pos2) -> Vec2 {
        Vec2::new(
            (p.x - self.rect.min.x) / self.scale,
            (p.y - self.rect.min.y) / self.scale,
        )
    }
}

fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

/// [`Canvas`] implementation that paints through an egui painter.
struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    view: CanvasView,
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgb) {
        let rect = egui::Rect::from_min_max(self.view.to_screen(min), self.view.to_screen(max));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, to_color32(color));
    }

    fn curve(&mut self, points: [Vec2; 4], stroke_width: f32, color: Rgb) {
        let bezier = catmull_rom_to_bezier(points).map(|p| self.view.to_screen(p));
        let stroke = egui::Stroke::new(stroke_width * self.view.scale, to_color32(color));
        self.painter
            .add(egui::epaint::CubicBezierShape::from_points_stroke(
                bezier,
                false,
                egui::Color32::TRANSPARENT,
                stroke,
            ));
    }

    fn point(&mut self, pos: Vec2, weight: f32, color: Rgb) {
        let r = (weight * 0.5 * self.view.scale).max(0.5);
        self.painter
            .circle_filled(self.view.to_screen(pos), r, to_color32(color));
    }
}

/// Main application state for the interactive viewer.
///
/// ### Fields
/// - `scene` - Blades and their configuration.
/// - `running` - Whether frames advance automatically.
/// - `frames` - Number of simulation frames run so far.
/// - `frame_interval` - Target time between automatic frames (seconds).
/// - `last_frame_time` - Time stamp of the last automatic frame (egui time).
pub struct Viewer {
    scene: Scene,

    running: bool,
    frames: u64,

    frame_interval: f64,
    last_frame_time: f64,
}

impl Viewer {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            running: true,
            frames: 0,
            frame_interval: 1.0 / 60.0,
            last_frame_time: 0.0,
        }
    }

    fn canvas_size(&self) -> Vec2 {
        let cfg = self.scene.config();
        Vec2::new(cfg.width, cfg.height)
    }

    /// Plants a blade under a click, if the click hit the canvas.
    fn handle_click(&mut self, pos: egui::Pos2, view: &CanvasView) -> Option<BladeId> {
        if !view.rect.contains(pos) {
            log::warn!("Ignoring click at {pos:?} outside the canvas");
            return None;
        }
        let p = view.to_canvas(pos);
        Some(self.scene.on_pointer_down(p.x))
    }

    fn reset(&mut self) {
        self.scene.reset();
        self.frames = 0;
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    ///
    /// ### Returns
    /// `true` if the value was edited this frame.
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel UI (run controls, stepping, debug overlay).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    self.scene.step_all();
                    self.frames += 1;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                let mut debug = self.scene.debug_overlay();
                if ui.checkbox(&mut debug, "Debug overlay").changed() {
                    self.scene.set_debug_overlay(debug);
                }
            });
        });
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("frames = {}", self.frames));
                ui.separator();
                ui.label(format!("blades = {}", self.scene.blades().len()));
            });
        });
    }

    /// Builds the right-hand panel for the physics constants.
    fn ui_physics_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("physics_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Physics");
                ui.separator();

                let mut physics = self.scene.config().physics;
                let mut changed = false;
                changed |= Self::labeled_drag_f32(
                    ui,
                    "wind_multiplier:",
                    &mut physics.wind_multiplier,
                    WIND_MULTIPLIER_RANGE,
                    0.1,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "bounds_damping:",
                    &mut physics.bounds_damping,
                    BOUNDS_DAMPING_RANGE,
                    0.5,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "drag_coefficient:",
                    &mut physics.drag_coefficient,
                    DRAG_COEFFICIENT_RANGE,
                    0.001,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "impulse_magnitude:",
                    &mut physics.impulse_magnitude,
                    IMPULSE_MAGNITUDE_RANGE,
                    0.2,
                );

                ui.separator();
                if ui.button("Reset physics to default").clicked() {
                    physics = PhysicsConfig::default();
                    changed = true;
                }

                if changed && let Err(e) = self.scene.set_physics(physics) {
                    log::warn!("Ignoring physics edit: {e}");
                }
            });
    }

    /// Builds the central panel where the scene is drawn and clicked.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click());
            let view = CanvasView::fit(self.canvas_size(), response.rect);
            let painter = ui.painter_at(view.rect);

            if response.clicked()
                && let Some(pos) = response.interact_pointer_pos()
            {
                self.handle_click(pos, &view);
            }

            let mut canvas = EguiCanvas {
                painter: &painter,
                view,
            };

            let now = ctx.input(|i| i.time);
            if self.running && now - self.last_frame_time >= self.frame_interval {
                self.scene.on_frame(&mut canvas);
                self.frames += 1;
                self.last_frame_time = now;
            } else {
                self.scene.render(&mut canvas);
            }

            if self.running {
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_physics_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
