//! Interactive 2D electrostatics viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (charges, configuration, camera) and implements [`eframe::App`] to
//! render field lines and control the simulation through an egui UI.

use eframe::App;
use field_core::{
    config::Config,
    render::{Canvas, Color},
    sim::Simulation,
};
use glam::Vec2;
use rand::rng;

/// Which charge the next canvas click places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpawnTool {
    Positive,
    Negative,
}

/// [`Canvas`] adapter that maps world-space primitives onto an
/// [`egui::Painter`] using the viewer's camera transform.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    world_center: Vec2,
    zoom: f32,
    pan: egui::Vec2,
}

impl PainterCanvas<'_> {
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        let center = self.rect.center();
        egui::pos2(
            center.x + (p.x - self.world_center.x) * self.zoom + self.pan.x,
            center.y - (p.y - self.world_center.y) * self.zoom + self.pan.y,
        )
    }
}

fn to_color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

impl Canvas for PainterCanvas<'_> {
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            egui::Stroke::new(1.0, to_color32(color)),
        );
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), (radius * self.zoom).max(2.0), to_color32(color));
    }
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Simulation`] (charge set plus [`Config`]).
/// - UI state (camera, spawn tool, timing, run/breathe toggles).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and enough time has passed, call
///    [`Viewer::step_once`].
/// 3. Render the field lines and charge markers through [`PainterCanvas`].
pub struct Viewer {
    sim: Simulation,

    rng: rand::rngs::ThreadRng,

    tool: SpawnTool,
    spawn_magnitude: f32,

    running: bool,
    breathing: bool,
    zoom: f32,
    pan: egui::Vec2,

    step_interval: f64,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Creates a new viewer seeded with the classic dipole scene: a +1
    /// charge at (250, 250) and a −1 charge at (750, 750) on the default
    /// 1000×1000 region.
    pub fn new() -> Self {
        let mut sim = Simulation::new(Config::default());
        Self::spawn_dipole(&mut sim);

        Self {
            sim,
            rng: rng(),
            tool: SpawnTool::Positive,
            spawn_magnitude: 1.0,
            running: false,
            breathing: false,
            zoom: 0.6,
            pan: egui::vec2(0.0, 0.0),
            step_interval: 0.05,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    fn spawn_dipole(sim: &mut Simulation) {
        sim.clear();
        sim.add_charge(1.0, Vec2::new(250.0, 250.0));
        sim.add_charge(-1.0, Vec2::new(750.0, 750.0));
    }

    /// Resets to the dipole scene, keeping configuration and camera.
    fn reset(&mut self) {
        Self::spawn_dipole(&mut self.sim);
        self.running = false;
    }

    /// Removes every charge, leaving a blank canvas for manual spawning.
    fn clear(&mut self) {
        self.sim.clear();
        self.running = false;
    }

    /// Places one charge at a world position according to the active tool.
    fn place_at(&mut self, world: Vec2) {
        let q = match self.tool {
            SpawnTool::Positive => self.spawn_magnitude,
            SpawnTool::Negative => -self.spawn_magnitude,
        };
        self.sim.add_charge(q, world);
    }

    /// Advances the simulation by a single step: an optional breathing
    /// tick followed by one pairwise force update.
    fn step_once(&mut self) {
        if self.breathing {
            self.sim.breathe(self.step_interval as f32);
        }
        let dt = self.sim.cfg.dt;
        self.sim.advance(dt);
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are taken relative to the bounding-region
    /// center, scaled by `zoom`, offset by `pan`, and centered inside
    /// `rect`. The y-axis is flipped so that positive y goes up.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let c = self.sim.cfg.bounds.center();
        let center = rect.center();
        egui::pos2(
            center.x + (p.x - c.x) * self.zoom + self.pan.x,
            center.y - (p.y - c.y) * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`] up to rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let c = self.sim.cfg.bounds.center();
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom + c.x;
        let y = (center.y - p.y + self.pan.y) / self.zoom + c.y;
        Vec2::new(x, y)
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt target = ")
                        .range(0.01..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ui.checkbox(&mut self.breathing, "Breathe");

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                if ui.button("Random").clicked() {
                    self.sim.randomize(8, &mut self.rng);
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=5.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (time step, charge count).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("charges = {}", self.sim.charge_count()));
            });
        });
    }

    /// Builds the right-hand configuration panel for simulation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Field-line tracing");
                Self::labeled_drag_usize(
                    ui,
                    "grid_resolution:",
                    &mut self.sim.cfg.grid_resolution,
                    1..=64,
                    1.0,
                );
                Self::labeled_drag_f32(ui, "trace_dx:", &mut self.sim.cfg.trace_dx, 0.1..=10.0, 0.1);
                Self::labeled_drag_usize(
                    ui,
                    "trace_budget:",
                    &mut self.sim.cfg.trace_budget,
                    100..=100_000,
                    100.0,
                );

                ui.separator();
                ui.label("Force update");
                Self::labeled_drag_f32(ui, "dt:", &mut self.sim.cfg.dt, 1e-9..=1e-3, 1e-7);

                ui.separator();
                ui.label("Breathing");
                Self::labeled_drag_f32(
                    ui,
                    "depth:",
                    &mut self.sim.cfg.breathe_depth,
                    0.0..=2.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "rate:",
                    &mut self.sim.cfg.breathe_rate,
                    0.0..=20.0,
                    0.1,
                );

                ui.separator();
                ui.label("Spawning");
                Self::labeled_drag_f32(
                    ui,
                    "magnitude:",
                    &mut self.spawn_magnitude,
                    0.0..=10.0,
                    0.1,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.sim.cfg = Config::default();
                }
            });
    }

    /// Builds the small floating toolbar for choosing the spawn tool.
    fn ui_toolbar(&mut self, ctx: &egui::Context) {
        egui::Area::new("toolbar".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 100.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 32))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            if ui
                                .selectable_label(self.tool == SpawnTool::Positive, "⊕ Positive")
                                .clicked()
                            {
                                self.tool = SpawnTool::Positive;
                            }

                            if ui
                                .selectable_label(self.tool == SpawnTool::Negative, "⊖ Negative")
                                .clicked()
                            {
                                self.tool = SpawnTool::Negative;
                            }
                        });
                    });
            });
    }

    /// Draws a visual hint for the charge the next click would place.
    fn ui_tool_hint(&self, painter: &egui::Painter, rect: egui::Rect, hover_world: Option<Vec2>) {
        let Some(center) = hover_world else {
            return;
        };

        let color = match self.tool {
            SpawnTool::Positive => egui::Color32::from_rgba_unmultiplied(220, 60, 60, 90),
            SpawnTool::Negative => egui::Color32::from_rgba_unmultiplied(70, 110, 230, 90),
        };
        let p_screen = self.world_to_screen(center, rect);
        let r = (self.sim.cfg.charge_radius * self.zoom).max(2.0);
        painter.circle_filled(p_screen, r, color);
    }

    /// Builds the central panel where field lines and charges are drawn
    /// and interacted with.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            let hover_world = response.hover_pos().map(|p| self.screen_to_world(p, rect));

            // Click places a charge with the active tool.
            if response.clicked()
                && let Some(world) = hover_world
            {
                self.place_at(world);
            }

            // Zoom around the mouse cursor.
            if ui.ctx().input(|i| i.raw_scroll_delta.y != 0.0) {
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    let new_zoom = (self.zoom * factor).clamp(0.1, 5.0);
                    self.zoom = new_zoom;

                    let screen_after = self.world_to_screen(world_before, rect);

                    let delta = pointer_screen - screen_after;
                    self.pan += delta;
                }
            }

            // Field lines and charge markers through the canvas adapter.
            let mut canvas = PainterCanvas {
                painter: &painter,
                rect,
                world_center: self.sim.cfg.bounds.center(),
                zoom: self.zoom,
                pan: self.pan,
            };
            self.sim.render(&mut canvas);

            // Tool hint overlay.
            self.ui_tool_hint(&painter, rect, hover_world);

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

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
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
        self.ui_toolbar(ctx);
    }
}
