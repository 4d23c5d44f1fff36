// Host-side tests for panel sequencing and the secret answer reveal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod valentine {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod panels {
        include!("../src/core/panels.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use std::collections::HashSet;
use valentine::constants::SECRET_MAX_LEVEL;
use valentine::panels::*;
use valentine::reveal::*;

/// Mirror of the DOM: the set of panels currently un-hidden.
fn apply(visible: &mut HashSet<Panel>, t: &PanelTransition) {
    for p in &t.hide {
        visible.remove(p);
    }
    if t.to != Panel::NoneActive {
        visible.insert(t.to);
    }
}

#[test]
fn starts_with_nothing_shown() {
    assert_eq!(PanelSequencer::new().current(), Panel::NoneActive);
}

#[test]
fn show_two_hides_one_and_three() {
    let mut seq = PanelSequencer::new();
    seq.show(Panel::Question1);
    let t = seq.show(Panel::Question2);
    assert_eq!(t.from, Panel::Question1);
    assert_eq!(t.to, Panel::Question2);
    assert!(t.hide.contains(&Panel::Question1));
    assert!(t.hide.contains(&Panel::Question3));
    assert!(t.hide.contains(&Panel::Celebration));
    assert!(!t.hide.contains(&Panel::Question2));
    assert!(!t.secret_visible);
    assert_eq!(seq.current(), Panel::Question2);
}

#[test]
fn secret_answer_only_with_question_one() {
    let mut seq = PanelSequencer::new();
    assert!(seq.show(Panel::Question1).secret_visible);
    assert!(!seq.show(Panel::Question3).secret_visible);
    assert!(!seq.show(Panel::Celebration).secret_visible);
}

#[test]
fn at_most_one_panel_visible_over_any_sequence() {
    let mut seq = PanelSequencer::new();
    let mut visible = HashSet::new();
    // Includes out-of-order jumps the page never makes on its own.
    let path = [
        Panel::Question1,
        Panel::Question3,
        Panel::Question2,
        Panel::Question1,
        Panel::Celebration,
        Panel::Question2,
        Panel::NoneActive,
        Panel::Question3,
    ];
    for to in path {
        let t = seq.show(to);
        apply(&mut visible, &t);
        let expected = usize::from(to != Panel::NoneActive);
        assert_eq!(visible.len(), expected, "after showing {to:?}");
        if expected == 1 {
            assert!(visible.contains(&to));
        }
    }
}

#[test]
fn panels_map_to_elements_and_classes() {
    assert_eq!(Panel::Question2.element_id(), Some("question2"));
    assert_eq!(Panel::NoneActive.element_id(), None);
    assert_eq!(Panel::Celebration.visible_class(), "celebration-visible");
    assert_eq!(Panel::Question1.visible_class(), "visible");
}

#[test]
fn reveal_scale_grows_linearly() {
    let mut reveal = SecretReveal::new();
    assert_eq!(reveal.level(), 0);
    assert!((reveal.scale() - 0.85).abs() < 1e-6);
    let s1 = reveal.bump();
    assert!((s1 - 0.97).abs() < 1e-5);
    for level in 2..=5u8 {
        let s = reveal.bump();
        assert!((s - (0.85 + level as f32 * 0.12)).abs() < 1e-5);
    }
}

#[test]
fn reveal_level_is_monotonic_and_capped() {
    let mut reveal = SecretReveal::new();
    let mut prev = reveal.level();
    for _ in 0..40 {
        reveal.bump();
        assert!(reveal.level() >= prev);
        assert!(reveal.level() <= SECRET_MAX_LEVEL);
        prev = reveal.level();
    }
    assert_eq!(reveal.level(), 15);
    assert!((reveal.scale() - reveal_scale(15)).abs() < 1e-6);
    assert!((reveal_scale(15) - 2.65).abs() < 1e-5);
}

// Leaving question 1 and coming back keeps the escalation: the counter is
// deliberately not reset on re-entry.
#[test]
fn reveal_level_survives_revisiting_question_one() {
    let mut seq = PanelSequencer::new();
    let mut reveal = SecretReveal::new();
    seq.show(Panel::Question1);
    reveal.bump();
    reveal.bump();
    reveal.bump();
    seq.show(Panel::Question2);
    let back = seq.show(Panel::Question1);
    assert!(back.secret_visible);
    assert_eq!(reveal.level(), 3);
    reveal.bump();
    assert_eq!(reveal.level(), 4);
}
