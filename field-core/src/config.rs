use crate::types::Bounds;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Region of the plane that is simulated and drawn.
    pub bounds: Bounds,
    /// Squared distance under which a field sample counts as sitting on
    /// a charge and is reported as singular.
    pub eps2: f32,
    /// Unit-speed trace step length; each streamline is traced once with
    /// `+trace_dx` and once with `-trace_dx`.
    pub trace_dx: f32,
    /// Hard cap on waypoints per streamline.
    pub trace_budget: usize,
    /// Seeds per axis; one frame traces `grid_resolution²` passes.
    pub grid_resolution: usize,
    /// Floor for the squared inter-charge distance in the force update.
    pub min_r2: f32,
    /// Explicit-Euler time step for the force update.
    pub dt: f32,
    /// Relative amplitude of the breathing magnitude oscillation.
    pub breathe_depth: f32,
    /// Angular rate of the breathing oscillation, radians per clock unit.
    pub breathe_rate: f32,
    /// Marker radius used when drawing charges.
    pub charge_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(Vec2::ZERO, Vec2::new(1000.0, 1000.0)),
            eps2: 1e-3,
            trace_dx: 1.0,
            trace_budget: 10_000,
            grid_resolution: 16,
            min_r2: 1e-3,
            dt: 1e-6,
            breathe_depth: 0.5,
            breathe_rate: 2.0,
            charge_radius: 10.0,
        }
    }
}
