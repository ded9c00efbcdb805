use crate::charge::ChargeSet;
use crate::types::Bounds;
use glam::Vec2;

/// Why a streamline stopped. All three are ordinary terminations, not
/// errors; callers usually just stop drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The trace stepped outside the bounding region.
    Exited,
    /// The trace ran into a charge singularity, or the field degenerated
    /// to a zero or non-finite vector.
    Blocked,
    /// The waypoint budget ran out before any other terminal condition.
    BudgetExhausted,
}

/// One traced streamline: waypoints in trace order plus the reason the
/// trace stopped. Transient; nothing retains it past the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Streamline {
    pub points: Vec<Vec2>,
    pub outcome: TraceOutcome,
}

/// Traces a single streamline from `seed`, stepping `dx` along the
/// normalized superposed field each iteration.
///
/// The tracer is unit-speed: every step has length `|dx|` regardless of
/// field strength, and the sign of `dx` selects whether the line is
/// followed with or against the field.
///
/// Waypoints include the seed and never number more than `max_steps`.
/// Every waypoint lies inside `bounds` except possibly the final one,
/// which is the point that triggered [`TraceOutcome::Exited`].
pub fn trace_streamline(
    charges: &ChargeSet,
    seed: Vec2,
    dx: f32,
    bounds: &Bounds,
    eps2: f32,
    max_steps: usize,
) -> Streamline {
    let mut points = Vec::new();

    if max_steps == 0 {
        return Streamline {
            points,
            outcome: TraceOutcome::BudgetExhausted,
        };
    }

    let mut pos = seed;
    points.push(pos);
    if !bounds.contains(pos) {
        return Streamline {
            points,
            outcome: TraceOutcome::Exited,
        };
    }

    while points.len() < max_steps {
        let e = match charges.superposed_field(pos, eps2) {
            Ok(e) => e,
            Err(_) => {
                return Streamline {
                    points,
                    outcome: TraceOutcome::Blocked,
                };
            }
        };

        // Guard the normalize: a null or non-finite field has no
        // direction to follow.
        if e == Vec2::ZERO || !e.is_finite() {
            return Streamline {
                points,
                outcome: TraceOutcome::Blocked,
            };
        }

        pos += dx * e.normalize();
        points.push(pos);

        if !bounds.contains(pos) {
            return Streamline {
                points,
                outcome: TraceOutcome::Exited,
            };
        }
    }

    Streamline {
        points,
        outcome: TraceOutcome::BudgetExhausted,
    }
}

/// The full field-line pass through one seed: the same line traced once
/// with `+dx` and once with `-dx`, drawn back-to-back from the seed.
pub fn field_line_pass(
    charges: &ChargeSet,
    seed: Vec2,
    dx: f32,
    bounds: &Bounds,
    eps2: f32,
    max_steps: usize,
) -> [Streamline; 2] {
    [
        trace_streamline(charges, seed, dx, bounds, eps2, max_steps),
        trace_streamline(charges, seed, -dx, bounds, eps2, max_steps),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::Charge;

    const EPS2: f32 = 1e-3;

    fn unit_bounds() -> Bounds {
        Bounds::new(Vec2::ZERO, Vec2::new(1000.0, 1000.0))
    }

    #[test]
    fn waypoint_count_never_exceeds_the_budget() {
        let set = ChargeSet::from_charges(vec![Charge::new(1.0, Vec2::new(500.0, 500.0))]);
        let bounds = unit_bounds();

        for budget in [1, 2, 10, 50] {
            let line = trace_streamline(
                &set,
                Vec2::new(480.0, 500.0),
                // Tiny step so the budget is the binding condition.
                0.01,
                &bounds,
                EPS2,
                budget,
            );
            assert!(line.points.len() <= budget);
            assert_eq!(line.outcome, TraceOutcome::BudgetExhausted);
        }
    }

    #[test]
    fn zero_budget_emits_nothing() {
        let set = ChargeSet::new();
        let line = trace_streamline(&set, Vec2::new(1.0, 1.0), 1.0, &unit_bounds(), EPS2, 0);

        assert!(line.points.is_empty());
        assert_eq!(line.outcome, TraceOutcome::BudgetExhausted);
    }

    #[test]
    fn empty_charge_set_blocks_immediately() {
        // Zero field everywhere: there is no direction to follow.
        let set = ChargeSet::new();
        let line = trace_streamline(&set, Vec2::new(10.0, 10.0), 1.0, &unit_bounds(), EPS2, 100);

        assert_eq!(line.points, vec![Vec2::new(10.0, 10.0)]);
        assert_eq!(line.outcome, TraceOutcome::Blocked);
    }

    #[test]
    fn seed_outside_bounds_exits_immediately() {
        let set = ChargeSet::from_charges(vec![Charge::new(1.0, Vec2::new(500.0, 500.0))]);
        let seed = Vec2::new(-5.0, 10.0);
        let line = trace_streamline(&set, seed, 1.0, &unit_bounds(), EPS2, 100);

        assert_eq!(line.points, vec![seed]);
        assert_eq!(line.outcome, TraceOutcome::Exited);
    }

    #[test]
    fn all_waypoints_inside_bounds_except_possibly_the_last() {
        // A lone positive charge pushes the trace radially out of bounds.
        let set = ChargeSet::from_charges(vec![Charge::new(1.0, Vec2::new(500.0, 500.0))]);
        let bounds = unit_bounds();
        let line = trace_streamline(&set, Vec2::new(510.0, 500.0), 2.0, &bounds, EPS2, 10_000);

        assert_eq!(line.outcome, TraceOutcome::Exited);
        let (last, interior) = line.points.split_last().unwrap();
        for p in interior {
            assert!(bounds.contains(*p), "interior waypoint {p:?} out of bounds");
        }
        assert!(!bounds.contains(*last));
    }

    #[test]
    fn trace_into_a_charge_terminates_blocked() {
        // Field lines end on negative charges; a fine step lands the
        // trace inside the singularity threshold.
        let set = ChargeSet::from_charges(vec![Charge::new(-1.0, Vec2::new(500.0, 500.0))]);
        let line = trace_streamline(
            &set,
            Vec2::new(490.0, 500.0),
            0.005,
            &unit_bounds(),
            EPS2,
            100_000,
        );

        assert_eq!(line.outcome, TraceOutcome::Blocked);
        let last = *line.points.last().unwrap();
        assert!(
            (last - Vec2::new(500.0, 500.0)).length() < 1.0,
            "trace should stop next to the charge, stopped at {last:?}"
        );
    }

    #[test]
    fn dipole_trace_runs_from_positive_toward_negative() {
        // The concrete scenario: +1 at (250,250), -1 at (750,750) on a
        // 1000x1000 region, seeded just off the positive charge.
        let target = Vec2::new(750.0, 750.0);
        let set = ChargeSet::from_charges(vec![
            Charge::new(1.0, Vec2::new(250.0, 250.0)),
            Charge::new(-1.0, target),
        ]);

        let seed = Vec2::new(252.0, 252.0);
        let line = trace_streamline(&set, seed, 1.0, &unit_bounds(), EPS2, 10_000);

        // Never exits the region; it either reaches the sink's
        // singularity or burns the budget orbiting right next to it.
        assert_ne!(line.outcome, TraceOutcome::Exited);

        // Monotonic approach toward the negative charge until the trace
        // is in its immediate neighborhood (where unit steps may hop
        // back and forth across the sink).
        for pair in line.points.windows(2) {
            let before = (pair[0] - target).length();
            let after = (pair[1] - target).length();
            if before > 2.0 {
                assert!(
                    after < before,
                    "trace moved away from the sink: {} -> {}",
                    before,
                    after
                );
            }
        }

        let closest = line
            .points
            .iter()
            .map(|p| (*p - target).length())
            .fold(f32::MAX, f32::min);
        assert!(closest < 2.0, "trace never reached the sink: {closest}");
    }

    #[test]
    fn field_line_pass_traces_both_directions_from_the_seed() {
        let positive = Vec2::new(250.0, 250.0);
        let negative = Vec2::new(750.0, 750.0);
        let set = ChargeSet::from_charges(vec![
            Charge::new(1.0, positive),
            Charge::new(-1.0, negative),
        ]);

        let seed = Vec2::new(500.0, 500.0);
        let [forward, backward] = field_line_pass(&set, seed, 1.0, &unit_bounds(), EPS2, 10_000);

        assert_eq!(forward.points[0], seed);
        assert_eq!(backward.points[0], seed);

        // Downstream ends at the negative charge, upstream at the positive.
        let fwd_end = *forward.points.last().unwrap();
        let bwd_end = *backward.points.last().unwrap();
        assert!((fwd_end - negative).length() < 5.0, "forward end {fwd_end:?}");
        assert!((bwd_end - positive).length() < 5.0, "backward end {bwd_end:?}");
    }
}
