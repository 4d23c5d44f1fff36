// Host-side tests for the love meter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod valentine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod meter {
        include!("../src/core/meter.rs");
    }
}

use valentine::meter::*;

const VW: f32 = 1000.0;

fn bursts(meter: &mut LoveMeter, values: &[i32]) -> Vec<i32> {
    values
        .iter()
        .filter_map(|&v| meter.update(v, VW).burst)
        .collect()
}

#[test]
fn nominal_values_hide_overflow_and_reset_watermark() {
    let mut meter = LoveMeter::new();
    meter.update(3000, VW);
    assert_eq!(meter.watermark(), 1000);
    for v in [100, 99, 50, 0] {
        let r = meter.update(v, VW);
        assert!(r.overflow.is_none());
        assert!(r.burst.is_none());
        assert_eq!(r.width_css(), "100%");
        assert_eq!(meter.watermark(), 0);
    }
}

#[test]
fn fill_tracks_value_and_saturates() {
    assert!((fill_percent(50) - 0.5).abs() < 1e-6);
    assert!((fill_percent(100) - 1.0).abs() < 1e-6);
    assert!((fill_percent(10_000) - 100.0).abs() < 1e-4);
    assert_eq!(fill_percent(50_000), 100.0);
    assert_eq!(fill_percent(-10), 0.0);
}

#[test]
fn tiers_follow_thresholds() {
    let mut meter = LoveMeter::new();
    let tier = |m: &mut LoveMeter, v| m.update(v, VW).overflow.map(|o| o.tier);
    assert_eq!(tier(&mut meter, 101), Some(LoveTier::Normal));
    assert_eq!(tier(&mut meter, 999), Some(LoveTier::Normal));
    assert_eq!(tier(&mut meter, 1000), Some(LoveTier::High));
    assert_eq!(tier(&mut meter, 4999), Some(LoveTier::High));
    assert_eq!(tier(&mut meter, 5000), Some(LoveTier::Extreme));
    assert_eq!(tier(&mut meter, 9999), Some(LoveTier::Extreme));
    assert!(LoveTier::Extreme.emphasized());
    assert!(!LoveTier::High.emphasized());
}

#[test]
fn upward_drag_fires_one_burst_per_threshold() {
    let mut meter = LoveMeter::new();
    let fired = bursts(
        &mut meter,
        &[90, 150, 160, 400, 999, 1200, 1300, 2000, 6000, 7000, 9000],
    );
    assert_eq!(fired, vec![100, 1000, 5000]);
    assert_eq!(meter.watermark(), 5000);
}

#[test]
fn jitter_inside_a_tier_stays_quiet() {
    let mut meter = LoveMeter::new();
    assert_eq!(bursts(&mut meter, &[1500, 1400, 1600, 1100, 1900]), vec![1000]);
}

#[test]
fn big_jump_fires_a_single_burst() {
    let mut meter = LoveMeter::new();
    let r = meter.update(6000, VW);
    assert_eq!(r.burst, Some(5000));
    assert_eq!(meter.watermark(), 5000);
}

#[test]
fn dropping_below_a_threshold_rearms_it() {
    let mut meter = LoveMeter::new();
    assert_eq!(bursts(&mut meter, &[6000, 2000, 6000]), vec![5000, 5000]);
    assert_eq!(bursts(&mut meter, &[500, 1500]), vec![1000]);
    assert_eq!(bursts(&mut meter, &[100, 150]), vec![100]);
}

#[test]
fn overflow_width_scales_with_excess_and_caps() {
    assert!((extra_width_px(100, VW)).abs() < 1e-4);
    assert!((extra_width_px(5050, VW) - 400.0).abs() < 1e-2);
    assert!((extra_width_px(10_000, VW) - 800.0).abs() < 1e-2);
    assert!((extra_width_px(50_000, VW) - 800.0).abs() < 1e-2);

    let mut meter = LoveMeter::new();
    let r = meter.update(5050, VW);
    let o = r.overflow.expect("overflow above 100");
    assert!((o.extra_width_px - 400.0).abs() < 1e-2);
    assert!(r.width_css().starts_with("calc(100% + "));
    assert!(r.width_css().ends_with("px)"));
}

#[test]
fn slider_values_parse_like_parse_int() {
    assert_eq!(parse_slider_value("250"), Some(250));
    assert_eq!(parse_slider_value("250.7"), Some(250));
    assert_eq!(parse_slider_value(" 42 "), Some(42));
    assert_eq!(parse_slider_value("-5"), Some(-5));
    assert_eq!(parse_slider_value("abc"), None);
    assert_eq!(parse_slider_value(""), None);
}

#[test]
fn initial_value_is_nominal_max() {
    let mut meter = LoveMeter::new();
    let r = meter.update(LoveMeter::INITIAL_VALUE, VW);
    assert!(r.overflow.is_none());
    assert_eq!(r.value, 100);
}
