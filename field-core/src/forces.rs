//! Pairwise Coulomb force update.
//!
//! This is a direct O(n²) evaluator meant for tens of charges, run once
//! per frame. There is no velocity state: the update is a first-order,
//! quasi-static relaxation where `position += dt * net_force`.

use crate::charge::{COULOMB_CONSTANT, ChargeSet};
use glam::Vec2;

/// Advances every charge by one explicit-Euler step of the net pairwise
/// Coulomb force.
///
/// For each ordered pair `(i, j)` with `i != j`:
///
/// 1. `d = charges[j].position - charges[i].position`, with the squared
///    distance clamped to `min_r2` so near-coincident charges cannot
///    produce unbounded forces.
/// 2. The signed product `K * q_i * q_j / r²` is applied along the unit
///    vector toward `j`, negated: a positive product (like signs) pushes
///    `i` away from `j`, a negative one (unlike signs) pulls it closer.
///
/// Net forces are accumulated against the pre-update positions of all
/// charges and only applied in a second pass, so no charge ever reads a
/// position that was already advanced within the same call.
///
/// A charge whose accumulated force comes out non-finite keeps its
/// position for this step; exactly coincident charges exert no force on
/// each other (the direction is degenerate).
pub fn pairwise_force_update(charges: &mut ChargeSet, dt: f32, min_r2: f32) {
    let n = charges.charges.len();
    let mut net = vec![Vec2::ZERO; n];

    for i in 0..n {
        let a = charges.charges[i];
        for (j, b) in charges.charges.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = b.position - a.position;
            let r2 = d.length_squared().max(min_r2);
            let toward = d.normalize_or_zero();
            let f = COULOMB_CONSTANT * a.magnitude * b.magnitude / r2;
            net[i] -= f * toward;
        }
    }

    for (c, f) in charges.charges.iter_mut().zip(net) {
        if f.is_finite() {
            c.position += dt * f;
        }
    }
}
