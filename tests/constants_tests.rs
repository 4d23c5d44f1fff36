// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn meter_thresholds_are_ascending() {
    assert!(METER_NOMINAL_MAX < METER_HIGH_THRESHOLD);
    assert!(METER_HIGH_THRESHOLD < METER_EXTREME_THRESHOLD);
    assert!(METER_MILESTONES.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(METER_MAX_EXCESS as i32 + METER_NOMINAL_MAX, 10_000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_outlive_their_animations() {
    let confetti_longest = CONFETTI_DELAY_MAX_SEC + CONFETTI_DURATION_MIN_SEC + CONFETTI_DURATION_SPAN_SEC;
    assert!(CONFETTI_LIFETIME_MS as f32 / 1000.0 >= confetti_longest);
    assert!(BURST_LIFETIME_MS > 0);
    assert!(WIGGLE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn validation_defaults_sit_inside_their_bounds() {
    assert!((EXPLOSION_SIZE_MIN..=EXPLOSION_SIZE_MAX).contains(&DEFAULT_EXPLOSION_SIZE));
    assert!((0.0..=1.0).contains(&DEFAULT_VOLUME));
    let default_secs: f64 = DEFAULT_FLOAT_DURATION.trim_end_matches('s').parse().unwrap();
    assert!(default_secs >= MIN_FLOAT_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decoration_ranges_are_sane() {
    assert!(FLOAT_SCALE_MIN > 0.0);
    assert!(FLOAT_OPACITY_MIN + FLOAT_OPACITY_SPAN <= 1.0);
    assert!((0.0..=1.0).contains(&FLOAT_SWAY_CHANCE));
    assert!(SECRET_SCALE_STEP > 0.0);
    assert!(BURST_DIST_MIN_PX > 0.0);
    assert_eq!(CONFETTI_PALETTE.len(), 6);
}
