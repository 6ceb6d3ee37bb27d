//! Commands accepted by the engine from the UI layer
//!
//! [`BodyUpdate`] replaces string-keyed property writes with one variant per
//! editable field. [`EngineCommand`] is the deferred form of every engine
//! command, queued with `Engine::enqueue` and applied in FIFO order at the
//! start of the next tick.

use crate::simulation::states::{BodyColor, BodyId, BodySpec};
use crate::simulation::vector::NVec2;

/// Edit to a single body's user-settable fields
#[derive(Debug, Clone, PartialEq)]
pub enum BodyUpdate {
    Rename(String),
    /// Also recomputes radius from the new mass
    SetMass(f64),
    SetVelocity(NVec2),
    SetVelocityX(f64),
    SetVelocityY(f64),
    SetColor(BodyColor),
}

#[derive(Debug, Clone)]
pub enum EngineCommand {
    AddBody(BodySpec),
    RemoveBody(BodyId),
    UpdateBody(BodyId, BodyUpdate),
    SetTimeScale(f64),
    SetCollisionsEnabled(bool),
    Pause,
    Resume,
    Reset,
}
