// Host-side tests for randomized placement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod valentine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scatter {
        include!("../src/core/scatter.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine::constants::*;
use valentine::scatter::*;

#[test]
fn float_placements_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut swaying = 0;
    let n = 2000;
    for _ in 0..n {
        let p = FloatPlacement::random(&mut rng);
        assert!((0.0..=100.0).contains(&p.left_vw));
        assert!((0.0..=8.0).contains(&p.delay_sec));
        assert!((10.0..=30.0).contains(&p.duration_sec));
        assert!((0.65..=1.35).contains(&p.scale));
        assert!((0.5..=1.0).contains(&p.opacity));
        if p.sway {
            swaying += 1;
        }
    }
    let share = swaying as f64 / n as f64;
    assert!((0.5..0.7).contains(&share), "sway share {share}");
}

#[test]
fn confetti_uses_palette_and_timing_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let (mut round, mut square) = (0, 0);
    for _ in 0..CONFETTI_PIECES * 4 {
        let c = ConfettiPiece::random(&mut rng);
        assert!(CONFETTI_PALETTE.contains(&c.color));
        assert!((0.0..=100.0).contains(&c.left_vw));
        assert!((0.0..=0.5).contains(&c.delay_sec));
        assert!((2.5..=4.0).contains(&c.duration_sec));
        if c.round {
            round += 1;
            assert_eq!(c.border_radius(), "50%");
        } else {
            square += 1;
            assert_eq!(c.border_radius(), "0");
        }
    }
    assert!(round > 0 && square > 0);
}

#[test]
fn burst_has_six_spread_particles() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let offsets = burst_offsets(&mut rng);
        assert_eq!(offsets.len(), BURST_PARTICLES);
        for (i, o) in offsets.iter().enumerate() {
            let dist = o.length();
            assert!(dist >= 40.0 - 1e-3 && dist <= 80.0 + 1e-3, "dist {dist}");
            // jitter adds at most one radian past the particle's base angle
            let base = i as f32 / BURST_PARTICLES as f32 * std::f32::consts::TAU;
            let jitter = (o.y.atan2(o.x) - base).rem_euclid(std::f32::consts::TAU);
            let wrapped = std::f32::consts::TAU - jitter < 1e-3;
            assert!(jitter <= 1.0 + 1e-3 || wrapped, "particle {i} jitter {jitter}");
        }
    }
}

#[test]
fn evasive_position_keeps_element_on_screen() {
    let mut rng = StdRng::seed_from_u64(11);
    let viewport = Vec2::new(800.0, 600.0);
    let size = Vec2::new(120.0, 40.0);
    for _ in 0..500 {
        let p = evasive_position(&mut rng, viewport, size);
        assert!(p.x >= 0.0 && p.x <= viewport.x - size.x);
        assert!(p.y >= 0.0 && p.y <= viewport.y - size.y);
    }
}

#[test]
fn oversized_element_pins_to_origin() {
    let mut rng = StdRng::seed_from_u64(5);
    let p = evasive_position(&mut rng, Vec2::new(100.0, 100.0), Vec2::new(300.0, 50.0));
    assert_eq!(p.x, 0.0);
    assert!(p.y >= 0.0 && p.y <= 50.0);
}

#[test]
fn glyph_pick_handles_empty_lists() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick_glyph(&mut rng, &[]), None);
    let hearts: Vec<String> = ["❤️", "💖"].map(String::from).to_vec();
    for _ in 0..20 {
        let g = pick_glyph(&mut rng, &hearts).expect("non-empty");
        assert!(hearts.iter().any(|h| h == g));
    }
}
