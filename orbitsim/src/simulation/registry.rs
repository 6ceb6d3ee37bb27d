//! Authoritative store of simulated bodies
//!
//! Bodies live densely in a `Vec` so force and integration passes run over a
//! plain slice. A side index maps each stable [`BodyId`] to its slot, which
//! makes lookup and swap-removal O(1). Iteration order is slot order; it
//! changes when a body is removed (the last body moves into the hole).

use std::collections::HashMap;

use crate::error::Result;
use crate::simulation::states::{radius_for_mass, Body, BodyId, BodySpec};
use crate::simulation::trail::Trail;

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    slots: HashMap<BodyId, usize>,
    next_id: u64, // monotonic, survives `clear`
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` and store a new body built from it
    pub fn insert(&mut self, spec: BodySpec, trail: Trail) -> Result<BodyId> {
        spec.validate()?;

        let id = BodyId(self.next_id);
        self.next_id += 1;

        self.slots.insert(id, self.bodies.len());
        self.bodies.push(Body {
            id,
            name: spec.name,
            mass: spec.mass,
            radius: radius_for_mass(spec.mass),
            position: spec.position,
            velocity: spec.velocity,
            color: spec.color,
            trail,
        });
        Ok(id)
    }

    /// Swap-remove the body with `id`; `None` if it is not present
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self.slots.remove(&id)?;
        let body = self.bodies.swap_remove(slot);
        // the former last body now sits in `slot`
        if let Some(moved) = self.bodies.get(slot) {
            self.slots.insert(moved.id, slot);
        }
        Some(body)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(&id).map(|&s| &self.bodies[s])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match self.slots.get(&id) {
            Some(&s) => Some(&mut self.bodies[s]),
            None => None,
        }
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Ids in current slot order
    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.iter().map(|b| b.id).collect()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    /// Drop every body. Ids handed out so far stay retired.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::vector::NVec2;

    fn spec(name: &str, m: f64) -> BodySpec {
        BodySpec::new(name, m, NVec2::zeros(), NVec2::zeros())
    }

    #[test]
    fn swap_remove_keeps_index_consistent() {
        let mut reg = BodyRegistry::new();
        let a = reg.insert(spec("a", 1.0), Trail::default()).unwrap();
        let b = reg.insert(spec("b", 2.0), Trail::default()).unwrap();
        let c = reg.insert(spec("c", 3.0), Trail::default()).unwrap();

        assert_eq!(reg.remove(a).map(|body| body.name), Some("a".to_string()));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(c).unwrap().name, "c");
        assert_eq!(reg.get(b).unwrap().name, "b");
        assert!(!reg.contains(a));

        // removing the last slot must not touch other entries
        reg.remove(b);
        assert_eq!(reg.get(c).unwrap().mass, 3.0);
        assert_eq!(reg.ids(), vec![c]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut reg = BodyRegistry::new();
        let a = reg.insert(spec("a", 1.0), Trail::default()).unwrap();
        reg.remove(a);
        reg.clear();
        let b = reg.insert(spec("b", 1.0), Trail::default()).unwrap();
        assert!(b > a);
    }

    #[test]
    fn remove_absent_is_none() {
        let mut reg = BodyRegistry::new();
        assert!(reg.remove(BodyId(42)).is_none());
    }

    #[test]
    fn insert_rejects_non_positive_mass() {
        let mut reg = BodyRegistry::new();
        assert!(reg.insert(spec("zero", 0.0), Trail::default()).is_err());
        assert!(reg.insert(spec("neg", -1.0), Trail::default()).is_err());
        assert!(reg.insert(spec("nan", f64::NAN), Trail::default()).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn radius_derived_from_mass() {
        let mut reg = BodyRegistry::new();
        let id = reg.insert(spec("sun", 100.0), Trail::default()).unwrap();
        assert_eq!(reg.get(id).unwrap().radius, 10.0);
    }
}
