use crate::charge::{Charge, ChargeSet};
use crate::config::Config;
use crate::forces::pairwise_force_update;
use crate::render::{Canvas, render_field};
use glam::Vec2;
use rand::Rng;

/// Owns the charge collection and configuration for one running scene.
///
/// Every per-frame operation goes through this struct; there is no
/// global state. `rest` mirrors the charge collection one-to-one and
/// remembers each charge's magnitude at placement time, giving the
/// breathing oscillation a fixed point to swing around.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub charges: ChargeSet,
    pub cfg: Config,
    rest: Vec<f32>,
    clock: f32,
}

impl Simulation {
    pub fn new(cfg: Config) -> Self {
        Self {
            charges: ChargeSet::new(),
            cfg,
            rest: Vec::new(),
            clock: 0.0,
        }
    }

    /// Appends one charge to the scene.
    pub fn add_charge(&mut self, magnitude: f32, position: Vec2) {
        self.charges.push(Charge::new(magnitude, position));
        self.rest.push(magnitude);
    }

    /// Removes every charge. Single-charge deletion does not exist.
    pub fn clear(&mut self) {
        self.charges.clear();
        self.rest.clear();
        self.clock = 0.0;
    }

    pub fn charge_count(&self) -> usize {
        debug_assert_eq!(self.charges.len(), self.rest.len());
        self.charges.len()
    }

    /// Replaces the scene with `count` unit charges of random sign
    /// placed uniformly inside the bounding region.
    pub fn randomize(&mut self, count: usize, rng: &mut impl Rng) {
        let b = self.cfg.bounds;
        self.charges = ChargeSet::random_in_rect(b.center(), b.half_extents(), count, 1.0, rng);
        self.rest = self.charges.charges.iter().map(|c| c.magnitude).collect();
        self.clock = 0.0;
    }

    /// Advances the breathing clock by `dt` and rescales every magnitude
    /// around its rest value: `rest * (1 + depth * sin(rate * clock))`.
    ///
    /// With `depth < 1` magnitudes keep their sign; with `depth >= 1`
    /// they may pass through zero, which is a valid degenerate state.
    pub fn breathe(&mut self, dt: f32) {
        self.clock += dt;
        let scale = 1.0 + self.cfg.breathe_depth * (self.cfg.breathe_rate * self.clock).sin();
        for (c, &rest) in self.charges.charges.iter_mut().zip(&self.rest) {
            c.magnitude = rest * scale;
        }
    }

    /// One pairwise force step over `dt`.
    pub fn advance(&mut self, dt: f32) {
        pairwise_force_update(&mut self.charges, dt, self.cfg.min_r2);
    }

    /// One full frame of field lines plus charge markers.
    pub fn render(&self, canvas: &mut impl Canvas) {
        render_field(&self.charges, &self.cfg, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn add_and_clear_keep_rest_magnitudes_in_lockstep() {
        let mut sim = Simulation::new(Config::default());
        assert_eq!(sim.charge_count(), 0);

        sim.add_charge(2.0, Vec2::new(100.0, 100.0));
        sim.add_charge(-1.0, Vec2::new(900.0, 900.0));
        assert_eq!(sim.charge_count(), 2);
        assert_eq!(sim.rest, vec![2.0, -1.0]);

        sim.clear();
        assert_eq!(sim.charge_count(), 0);
        assert!(sim.rest.is_empty());
    }

    #[test]
    fn breathe_oscillates_magnitudes_around_rest() {
        let mut cfg = Config::default();
        cfg.breathe_depth = 0.5;
        cfg.breathe_rate = 1.0;

        let mut sim = Simulation::new(cfg);
        sim.add_charge(4.0, Vec2::new(100.0, 100.0));
        sim.add_charge(-4.0, Vec2::new(200.0, 200.0));

        sim.breathe(0.5);

        let scale = 1.0 + 0.5 * 0.5f32.sin();
        assert_eq!(sim.charges.charges[0].magnitude, 4.0 * scale);
        assert_eq!(sim.charges.charges[1].magnitude, -4.0 * scale);

        // Depth below one: signs never flip.
        assert!(sim.charges.charges[0].magnitude > 0.0);
        assert!(sim.charges.charges[1].magnitude < 0.0);
    }

    #[test]
    fn breathe_clock_accumulates_across_calls() {
        let mut cfg = Config::default();
        cfg.breathe_depth = 1.0;
        cfg.breathe_rate = 2.0;

        let mut sim = Simulation::new(cfg);
        sim.add_charge(1.0, Vec2::new(50.0, 50.0));

        sim.breathe(0.25);
        sim.breathe(0.25);

        let expected = 1.0 + (2.0 * 0.5f32).sin();
        assert_eq!(sim.charges.charges[0].magnitude, expected);
    }

    #[test]
    fn advance_pushes_like_charges_apart() {
        let mut sim = Simulation::new(Config::default());
        sim.add_charge(1.0, Vec2::new(400.0, 500.0));
        sim.add_charge(1.0, Vec2::new(600.0, 500.0));

        let before =
            (sim.charges.charges[1].position - sim.charges.charges[0].position).length();
        sim.advance(1e-9);
        let after =
            (sim.charges.charges[1].position - sim.charges.charges[0].position).length();

        assert!(after > before);
    }

    #[test]
    fn randomize_replaces_the_scene_inside_bounds() {
        let mut sim = Simulation::new(Config::default());
        sim.add_charge(5.0, Vec2::new(1.0, 1.0));

        let mut rng = StdRng::seed_from_u64(42);
        sim.randomize(12, &mut rng);

        assert_eq!(sim.charge_count(), 12);
        for c in &sim.charges.charges {
            assert!(sim.cfg.bounds.contains(c.position));
            assert_eq!(c.magnitude.abs(), 1.0);
        }
        assert_eq!(sim.rest.len(), 12);
    }
}
