//! Force contributors for the n-body engine
//!
//! Defines the force-term trait, a [`ForceSet`] that sums terms into one net
//! force per body, and direct Newtonian gravity with a distance floor.

use std::collections::HashMap;

use crate::simulation::states::{Body, BodyId};
use crate::simulation::vector::{distance, normalize, scale, subtract, NVec2};

/// Bookkeeping returned by one force evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceStats {
    pub clamped_pairs: usize, // pairs closer than the distance floor
}

impl std::ops::AddAssign for ForceStats {
    fn add_assign(&mut self, rhs: Self) {
        self.clamped_pairs += rhs.clamped_pairs;
    }
}

/// Trait for force sources operating on a body slice
/// Implementations add their contribution into `out[i]` for each body `bodies[i]`
pub trait ForceTerm {
    fn accumulate(&self, bodies: &[Body], out: &mut [NVec2]) -> ForceStats;
}

/// Ordered list of [`ForceTerm`]s evaluated against one body slice.
/// Every term writes into the same zeroed buffer, so `out[i]` ends up as the
/// net force on `bodies[i]`; the [`ForceStats`] each term reports are added up.
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl ForceSet {
    /// No terms: every body sees zero net force
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Append `term`; terms run in insertion order
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies into `out` (slot-aligned with `bodies`)
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec2]) -> ForceStats {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        let mut stats = ForceStats::default();
        for term in &self.terms {
            stats += term.accumulate(bodies, out);
        }
        stats
    }

    /// Slot-aligned net forces
    pub fn net_forces(&self, bodies: &[Body]) -> (Vec<NVec2>, ForceStats) {
        let mut out = vec![NVec2::zeros(); bodies.len()];
        let stats = self.accumulate_forces(bodies, &mut out);
        (out, stats)
    }

    /// Net force keyed by body id
    pub fn force_map(&self, bodies: &[Body]) -> HashMap<BodyId, NVec2> {
        let (forces, _) = self.net_forces(bodies);
        bodies.iter().map(|b| b.id).zip(forces).collect()
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Newtonian gravity, `F = G m_i m_j / r^2`, over every unordered pair
///
/// `r` is clamped to `min_distance` before squaring, so a near-exact overlap
/// yields a large but finite force. Two bodies at the very same point have no
/// defined direction and exert nothing on each other.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // distance floor
}

impl NewtonianGravity {
    /// Magnitude of the attraction between masses `mi`, `mj` at separation `r`
    pub fn magnitude(&self, mi: f64, mj: f64, r: f64) -> f64 {
        let r = r.max(self.min_distance);
        self.G * mi * mj / (r * r)
    }
}

impl ForceTerm for NewtonianGravity {
    fn accumulate(&self, bodies: &[Body], out: &mut [NVec2]) -> ForceStats {
        let mut stats = ForceStats::default();
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                let r = distance(&bi.position, &bj.position);
                if r < self.min_distance {
                    stats.clamped_pairs += 1;
                }

                // unit vector from i toward j
                let dir = normalize(&subtract(&bj.position, &bi.position));
                let f = scale(&dir, self.magnitude(bi.mass, bj.mass, r));

                // equal and opposite
                out[i] += f;
                out[j] -= f;
            }
        }
        stats
    }
}
