//! Semi-implicit (symplectic) Euler integrator
//!
//! Forces for every body must be fully computed before this runs; each body is
//! then advanced independently, so the update order does not matter.

use crate::simulation::states::Body;
use crate::simulation::vector::NVec2;

/// Advance one body's state by `dt` given the net force on it.
///
/// v' = v + (F / m) dt
/// x' = x + v' dt      (uses the updated velocity)
///
/// Returns `(v', x')`.
pub fn step(position: NVec2, velocity: NVec2, force: NVec2, mass: f64, dt: f64) -> (NVec2, NVec2) {
    let accel = force / mass;
    let v_new = velocity + accel * dt;
    let x_new = position + v_new * dt;
    (v_new, x_new)
}

/// Advance every body by `dt` using the slot-aligned `forces`
pub fn semi_implicit_euler(bodies: &mut [Body], forces: &[NVec2], dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());
    if dt == 0.0 {
        return;
    }

    for (b, f) in bodies.iter_mut().zip(forces.iter()) {
        let (v, x) = step(b.position, b.velocity, *f, b.mass, dt);
        b.velocity = v;
        b.position = x;
    }
}
