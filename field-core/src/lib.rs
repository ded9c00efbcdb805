//! Core 2D electrostatics library: point charges, Coulomb field
//! evaluation, field-line tracing and a pairwise force simulator.
//!
//! Main components:
//! - [`charge`] — point charges, charge sets and field evaluation.
//! - [`trace`] — the unit-speed field-line tracer.
//! - [`forces`] — the O(n²) pairwise Coulomb force update.
//! - [`render`] — frame composition onto an abstract [`render::Canvas`].
//! - [`sim`] — the per-scene [`sim::Simulation`] façade.
//! - [`config`] — start-of-run tuning constants.
//! - [`types`] — shared geometry types.

pub mod charge;
pub mod config;
pub mod forces;
pub mod render;
pub mod sim;
pub mod trace;
pub mod types;
