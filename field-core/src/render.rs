use crate::charge::ChargeSet;
use crate::config::Config;
use crate::trace::field_line_pass;
use glam::Vec2;

/// 24-bit RGB color handed to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(220, 60, 60);
    pub const BLUE: Color = Color::new(70, 110, 230);
    pub const GREY: Color = Color::new(130, 130, 130);
}

/// Drawing surface the renderer composes frames onto.
///
/// Implementations receive world-space coordinates and are expected to
/// clip out-of-range geometry themselves (a `put_pixel`-level surface
/// where out-of-range writes are silent no-ops).
pub trait Canvas {
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

const LINE_COLOR: Color = Color::GREY;
const POSITIVE_COLOR: Color = Color::RED;
const NEGATIVE_COLOR: Color = Color::BLUE;
const GLYPH_COLOR: Color = Color::WHITE;

/// Renders one frame: a field-line pass per grid seed, then the charge
/// markers on top.
pub fn render_field(charges: &ChargeSet, cfg: &Config, canvas: &mut impl Canvas) {
    for seed in cfg.bounds.seed_grid(cfg.grid_resolution) {
        let pass = field_line_pass(
            charges,
            seed,
            cfg.trace_dx,
            &cfg.bounds,
            cfg.eps2,
            cfg.trace_budget,
        );
        for line in &pass {
            for pair in line.points.windows(2) {
                canvas.draw_line(pair[0], pair[1], LINE_COLOR);
            }
        }
    }

    draw_charges(charges, cfg, canvas);
}

/// Draws every charge inside the bounding region as a filled circle with
/// a sign glyph: a horizontal stroke for negative magnitudes, a full
/// plus for zero-or-positive ones. Out-of-region charges are skipped.
pub fn draw_charges(charges: &ChargeSet, cfg: &Config, canvas: &mut impl Canvas) {
    let r = cfg.charge_radius;
    let half = r * 0.6;

    for c in &charges.charges {
        if !cfg.bounds.contains(c.position) {
            continue;
        }

        let fill = if c.magnitude < 0.0 {
            NEGATIVE_COLOR
        } else {
            POSITIVE_COLOR
        };
        canvas.draw_filled_circle(c.position, r, fill);

        canvas.draw_line(
            c.position - Vec2::new(half, 0.0),
            c.position + Vec2::new(half, 0.0),
            GLYPH_COLOR,
        );
        if c.magnitude >= 0.0 {
            canvas.draw_line(
                c.position - Vec2::new(0.0, half),
                c.position + Vec2::new(0.0, half),
                GLYPH_COLOR,
            );
        }
    }
}
