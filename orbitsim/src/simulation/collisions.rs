//! Inelastic collision merging
//!
//! Two bodies whose discs overlap (`r < radius_i + radius_j`) merge into one.
//! The heavier body (or the first one visited on an exact tie) survives and
//! absorbs the other:
//! - mass      m' = m_i + m_j
//! - velocity  v' = (m_i v_i + m_j v_j) / m'
//! - radius    r' = cbrt(r_i^3 + r_j^3)
//! - position  kept from the survivor
//!
//! Pairs are visited in registry order. A body absorbed earlier in the pass is
//! skipped for the rest of it, and a survivor is tested with its merged state.

use std::collections::HashSet;

use crate::simulation::registry::BodyRegistry;
use crate::simulation::states::{Body, BodyId};
use crate::simulation::vector::distance;

/// One absorption event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub survivor: BodyId,
    pub absorbed: BodyId,
}

/// True when the discs of `a` and `b` overlap
pub fn overlapping(a: &Body, b: &Body) -> bool {
    distance(&a.position, &b.position) < a.radius + b.radius
}

/// Fold `absorbed` into `survivor`, conserving mass, momentum and volume
pub fn absorb(survivor: &mut Body, absorbed: &Body) {
    let mass = survivor.mass + absorbed.mass;
    let momentum = survivor.momentum() + absorbed.momentum();

    survivor.velocity = momentum / mass;
    survivor.radius = (survivor.radius.powi(3) + absorbed.radius.powi(3)).cbrt();
    survivor.mass = mass;
}

/// Merge every overlapping pair, removing absorbed bodies from `registry`
///
/// Returns the merges in the order they happened.
pub fn resolve_collisions(registry: &mut BodyRegistry) -> Vec<Merge> {
    let ids = registry.ids();
    let mut absorbed: HashSet<BodyId> = HashSet::new();
    let mut merges = Vec::new();

    for (k, &id_i) in ids.iter().enumerate() {
        for &id_j in &ids[k + 1..] {
            if absorbed.contains(&id_i) {
                break;
            }
            if absorbed.contains(&id_j) {
                continue;
            }

            let (bi, bj) = match (registry.get(id_i), registry.get(id_j)) {
                (Some(bi), Some(bj)) => (bi, bj),
                _ => continue,
            };
            if !overlapping(bi, bj) {
                continue;
            }

            // `>=`: on an exact tie the body visited first wins
            let (survivor, loser) = if bi.mass >= bj.mass { (id_i, id_j) } else { (id_j, id_i) };

            let loser_body = match registry.remove(loser) {
                Some(b) => b,
                None => continue,
            };
            if let Some(s) = registry.get_mut(survivor) {
                absorb(s, &loser_body);
            }
            absorbed.insert(loser);
            log::debug!("merge: {} absorbed {} ({})", survivor, loser, loser_body.name);
            merges.push(Merge { survivor, absorbed: loser });
        }
    }
    merges
}
