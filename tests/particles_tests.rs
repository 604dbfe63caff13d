// Host-side tests for the particle pool and mouse trail buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod trail {
    include!("../src/core/trail.rs");
}

use constants::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use trail::*;

#[test]
fn sampled_particles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = ParticleSpec::sample(&mut rng);
        assert!((0.0..100.0).contains(&p.x_pct));
        assert!((0.0..100.0).contains(&p.y_pct));
        assert!((2.0..5.0).contains(&p.duration_sec));
        assert!((0.0..2.0).contains(&p.delay_sec));
        let life = p.lifetime_ms();
        assert!((2000..=7000).contains(&life), "lifetime {}", life);
    }
}

#[test]
fn lifetime_is_duration_plus_delay() {
    let p = ParticleSpec {
        x_pct: 10.0,
        y_pct: 20.0,
        duration_sec: 3.25,
        delay_sec: 1.5,
    };
    assert_eq!(p.lifetime_ms(), 4750);
    assert_eq!(p.animation_css(), "float 3.25s ease-in-out infinite 1.5s");
}

#[test]
fn pool_holds_fifty_through_respawns() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pool = ParticlePool::fill(&mut rng);
    assert_eq!(pool.len(), PARTICLE_COUNT);
    assert_eq!(pool.len(), 50);

    for round in 0..500 {
        let slot = round % pool.len();
        let before = *pool.get(slot).unwrap();
        let after = pool.respawn(slot, &mut rng).unwrap();
        assert_ne!(before, after);
        assert_eq!(pool.len(), 50);
    }
    assert_eq!(pool.respawn_count(), 500);
}

#[test]
fn respawn_outside_pool_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool = ParticlePool::fill_with(3, &mut rng);
    assert!(pool.respawn(3, &mut rng).is_none());
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.respawn_count(), 0);
}

#[test]
fn trail_is_bounded_to_ten() {
    let start = instant::Instant::now();
    let mut trail = MouseTrail::default();
    assert_eq!(trail.capacity(), MOUSE_TRAIL_CAPACITY);
    for i in 0..10 {
        assert!(trail
            .push(i as f64, 0.0, start + Duration::from_millis(i))
            .is_none());
    }
    assert_eq!(trail.len(), 10);

    let evicted = trail.push(10.0, 0.0, start + Duration::from_millis(10));
    assert_eq!(evicted.map(|s| s.x), Some(0.0));
    assert_eq!(trail.len(), 10);
    assert_eq!(trail.oldest().map(|s| s.x), Some(1.0));
    assert_eq!(trail.latest().map(|s| s.x), Some(10.0));
}

#[test]
fn trail_keeps_order_under_many_pushes() {
    let now = instant::Instant::now();
    let mut trail = MouseTrail::default();
    for i in 0..137 {
        trail.push(i as f64, -(i as f64), now);
        assert!(trail.len() <= 10);
    }
    let xs: Vec<f64> = trail.iter().map(|s| s.x).collect();
    assert_eq!(xs, (127..137).map(|i| i as f64).collect::<Vec<_>>());
    trail.clear();
    assert!(trail.is_empty());
}
