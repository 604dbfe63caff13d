use crate::constants::{
    PARTICLE_COUNT, PARTICLE_DELAY_MAX_SEC, PARTICLE_DURATION_MIN_SEC, PARTICLE_DURATION_SPAN_SEC,
};
use rand::prelude::*;

/// Randomized parameters of one decorative hero particle.
///
/// Fields:
/// - `x_pct`, `y_pct`: position inside the hero container, each in `[0, 100)`
/// - `duration_sec`: float animation period in `[2, 5)`
/// - `delay_sec`: animation start delay in `[0, 2)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub x_pct: f64,
    pub y_pct: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl ParticleSpec {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x_pct: rng.gen::<f64>() * 100.0,
            y_pct: rng.gen::<f64>() * 100.0,
            duration_sec: rng.gen::<f64>() * PARTICLE_DURATION_SPAN_SEC + PARTICLE_DURATION_MIN_SEC,
            delay_sec: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
        }
    }

    /// Time from creation until the particle is replaced.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_sec + self.delay_sec) * 1000.0).round() as u32
    }

    /// CSS `animation` shorthand for this particle.
    pub fn animation_css(&self) -> String {
        format!(
            "float {}s ease-in-out infinite {}s",
            self.duration_sec, self.delay_sec
        )
    }
}

/// Fixed-size set of live particle slots.
///
/// A slot is never emptied: `respawn` swaps the old spec for a fresh one in
/// place, so the pool always reports the same length once filled.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    slots: Vec<ParticleSpec>,
    respawns: u64,
}

impl ParticlePool {
    pub fn fill<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::fill_with(PARTICLE_COUNT, rng)
    }

    pub fn fill_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            slots: (0..count).map(|_| ParticleSpec::sample(rng)).collect(),
            respawns: 0,
        }
    }

    /// Replace the particle in `slot` with a freshly drawn one.
    /// Returns `None` for an out-of-range slot.
    pub fn respawn<R: Rng + ?Sized>(&mut self, slot: usize, rng: &mut R) -> Option<ParticleSpec> {
        let spec = self.slots.get_mut(slot)?;
        *spec = ParticleSpec::sample(rng);
        self.respawns += 1;
        Some(*spec)
    }

    pub fn get(&self, slot: usize) -> Option<&ParticleSpec> {
        self.slots.get(slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn respawn_count(&self) -> u64 {
        self.respawns
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ParticleSpec)> {
        self.slots.iter().enumerate()
    }
}
