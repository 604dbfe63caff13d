use crate::constants::MOUSE_TRAIL_CAPACITY;
use instant::Instant;
use std::collections::VecDeque;

/// One pointer sample in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub struct TrailSample {
    pub x: f64,
    pub y: f64,
    pub at: Instant,
}

/// Bounded FIFO of the most recent pointer samples.
///
/// Holds at most [`MOUSE_TRAIL_CAPACITY`] entries; pushing past that evicts the
/// oldest sample first.
#[derive(Clone, Debug)]
pub struct MouseTrail {
    samples: VecDeque<TrailSample>,
    capacity: usize,
}

impl Default for MouseTrail {
    fn default() -> Self {
        Self::with_capacity(MOUSE_TRAIL_CAPACITY)
    }
}

impl MouseTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a sample, returning the evicted one if the buffer was full.
    pub fn push(&mut self, x: f64, y: f64, at: Instant) -> Option<TrailSample> {
        self.samples.push_back(TrailSample { x, y, at });
        if self.samples.len() > self.capacity {
            return self.samples.pop_front();
        }
        None
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&TrailSample> {
        self.samples.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
