use glam::Vec2;
use rand::Rng;
use std::fmt;

/// Coulomb's constant, N·m²/C².
pub const COULOMB_CONSTANT: f32 = 8.987_551_787e9;

/// Signals that a field sample point lies degenerately close to a charge.
///
/// Field evaluation refuses to divide by a near-zero squared distance.
/// This is not a fault: callers treat it as a terminal state for the
/// current sample or trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Singularity;

impl fmt::Display for Singularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample point is within the singularity threshold of a charge")
    }
}

impl std::error::Error for Singularity {}

/// A point charge: signed magnitude plus position.
///
/// Any finite magnitude is valid, including zero (a degenerate charge
/// that produces no field). Positions are mutated in place by the force
/// update; magnitudes by the breathing policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    pub magnitude: f32,
    pub position: Vec2,
}

impl Charge {
    pub fn new(magnitude: f32, position: Vec2) -> Self {
        Self {
            magnitude,
            position,
        }
    }

    /// Coulomb field contribution of this charge at `point`.
    ///
    /// Sign convention: the direction vector is `point - position`, so
    /// the field points **away** from a positive charge and toward a
    /// negative one. The magnitude is `K * |q| / r²`.
    ///
    /// `eps2` is the squared singularity threshold; any sample with
    /// `r² < eps2` returns [`Singularity`] instead of a near-infinite
    /// vector. The `r² >= eps2 > 0` guard also makes the normalize safe.
    pub fn field_at(&self, point: Vec2, eps2: f32) -> Result<Vec2, Singularity> {
        let d = point - self.position;
        let r2 = d.length_squared();
        if r2 < eps2 {
            return Err(Singularity);
        }
        Ok(COULOMB_CONSTANT * self.magnitude / r2 * d.normalize())
    }
}

/// Ordered collection of charges; insertion order is creation order.
///
/// Grows by append and shrinks only by bulk [`ChargeSet::clear`].
#[derive(Clone, Debug, Default)]
pub struct ChargeSet {
    pub charges: Vec<Charge>,
}

impl ChargeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_charges(charges: Vec<Charge>) -> Self {
        Self { charges }
    }

    /// `count` charges of magnitude `±magnitude` (random sign) placed
    /// uniformly in the rectangle `center ± half_extents`.
    pub fn random_in_rect(
        center: Vec2,
        half_extents: Vec2,
        count: usize,
        magnitude: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let charges = (0..count)
            .map(|_| {
                let x = rng.random_range(-half_extents.x..=half_extents.x);
                let y = rng.random_range(-half_extents.y..=half_extents.y);
                let q = if rng.random_bool(0.5) {
                    magnitude
                } else {
                    -magnitude
                };
                Charge::new(q, center + Vec2::new(x, y))
            })
            .collect();

        Self { charges }
    }

    pub fn push(&mut self, charge: Charge) {
        self.charges.push(charge);
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Superposed field of every charge at `point`.
    ///
    /// Sums [`Charge::field_at`] over the collection and short-circuits
    /// with [`Singularity`] as soon as any single source is singular:
    /// the aggregate field is all-or-nothing.
    pub fn superposed_field(&self, point: Vec2, eps2: f32) -> Result<Vec2, Singularity> {
        let mut e = Vec2::ZERO;
        for c in &self.charges {
            e += c.field_at(point, eps2)?;
        }
        Ok(e)
    }
}
