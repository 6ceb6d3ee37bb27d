//! Bounded position history per body
//!
//! Trails are display-only: they are written after each step and never read
//! by force computation, integration or collision resolution.

use std::collections::VecDeque;

use crate::simulation::states::Body;
use crate::simulation::vector::NVec2;

pub const DEFAULT_TRAIL_CAPACITY: usize = 100;

/// FIFO ring of past positions, oldest first
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a position, evicting from the front when over capacity
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TRAIL_CAPACITY)
    }
}

/// Appends each body's current position to its trail
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    capacity: usize,
}

impl TrailRecorder {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1) }
    }

    /// Fresh empty trail sized for this recorder
    pub fn new_trail(&self) -> Trail {
        Trail::with_capacity(self.capacity)
    }

    pub fn record(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.trail.push(b.position);
        }
    }

    pub fn clear_all(&self, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.trail.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> NVec2 {
        NVec2::new(i as f64, 0.0)
    }

    #[test]
    fn full_trail_evicts_oldest_first() {
        let mut trail = Trail::with_capacity(100);
        for i in 0..105 {
            trail.push(p(i));
        }

        assert_eq!(trail.len(), 100);
        assert_eq!(trail.capacity(), 100);
        assert!(trail.iter().all(|q| q.x >= 5.0));
        assert_eq!(trail.iter().next(), Some(&p(5)));
        assert_eq!(trail.last(), Some(&p(104)));

        let xs: Vec<f64> = trail.iter().map(|q| q.x).collect();
        let expected: Vec<f64> = (5..105).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn grows_until_capacity() {
        let mut trail = Trail::with_capacity(3);
        assert!(trail.is_empty());
        assert_eq!(trail.last(), None);
        trail.push(p(0));
        trail.push(p(1));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.last(), Some(&p(1)));
        trail.push(p(2));
        trail.push(p(3));
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.iter().next(), Some(&p(1)));
    }

    #[test]
    fn zero_capacity_keeps_latest_point() {
        let mut trail = Trail::with_capacity(0);
        assert_eq!(trail.capacity(), 1);
        trail.push(p(7));
        trail.push(p(8));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.last(), Some(&p(8)));
    }

    #[test]
    fn recorder_sizes_new_trails() {
        let recorder = TrailRecorder::new(4);
        assert_eq!(recorder.new_trail().capacity(), 4);
        assert_eq!(Trail::default().capacity(), DEFAULT_TRAIL_CAPACITY);
    }
}
