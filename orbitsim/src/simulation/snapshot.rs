//! Read-only view of the engine handed to rendering and UI code

use crate::simulation::clock::RunState;
use crate::simulation::states::{Body, BodyId};

/// Why a body left the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// Explicit `remove_body`
    Command,
    /// Absorbed by `into` during collision resolution
    Merged { into: BodyId },
    /// Position or velocity went non-finite and the body was dropped
    Unstable,
    /// Cleared by `reset`
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub id: BodyId,
    pub cause: RemovalCause,
}

/// Counters for the work done by one `tick`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub steps: usize,            // integration steps run
    pub merges: usize,           // collision merges
    pub clamped_pairs: usize,    // force pairs below the distance floor
    pub unstable_removed: usize, // bodies dropped for non-finite state
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub time: f64,
    pub ticks: u64,
    pub state: RunState,
    pub time_scale: f64,
    pub collisions_enabled: bool,
    pub bodies: Vec<Body>,
    /// Removals since the previous `tick` snapshot
    pub removed: Vec<Removal>,
    pub stats: TickStats,
}

impl Snapshot {
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// True if `id` was removed since the last tick, for dropping UI selection
    pub fn was_removed(&self, id: BodyId) -> bool {
        self.removed.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
