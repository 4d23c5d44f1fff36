// Randomized placement for decorations and particles.
//
// All functions take the RNG as a parameter so the browser can use
// `thread_rng` while tests pass a seeded `StdRng`.

use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Style parameters for one floating heart or bear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPlacement {
    pub left_vw: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub scale: f32,
    pub opacity: f32,
    pub sway: bool,
}

impl FloatPlacement {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen::<f32>() * FLOAT_LEFT_MAX_VW,
            delay_sec: rng.gen::<f32>() * FLOAT_DELAY_MAX_SEC,
            duration_sec: FLOAT_DURATION_MIN_SEC + rng.gen::<f32>() * FLOAT_DURATION_SPAN_SEC,
            scale: FLOAT_SCALE_MIN + rng.gen::<f32>() * FLOAT_SCALE_SPAN,
            opacity: FLOAT_OPACITY_MIN + rng.gen::<f32>() * FLOAT_OPACITY_SPAN,
            sway: rng.gen_bool(FLOAT_SWAY_CHANCE),
        }
    }
}

/// Style parameters for one confetti piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_vw: f32,
    pub color: &'static str,
    pub round: bool,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen::<f32>() * 100.0,
            color: CONFETTI_PALETTE
                .choose(rng)
                .copied()
                .unwrap_or(CONFETTI_PALETTE[0]),
            round: rng.gen_bool(0.5),
            delay_sec: rng.gen::<f32>() * CONFETTI_DELAY_MAX_SEC,
            duration_sec: CONFETTI_DURATION_MIN_SEC + rng.gen::<f32>() * CONFETTI_DURATION_SPAN_SEC,
        }
    }

    pub fn border_radius(&self) -> &'static str {
        if self.round {
            "50%"
        } else {
            "0"
        }
    }
}

/// Travel vectors for a milestone burst: evenly spaced angles plus jitter.
pub fn burst_offsets<R: Rng + ?Sized>(rng: &mut R) -> SmallVec<[Vec2; BURST_PARTICLES]> {
    (0..BURST_PARTICLES)
        .map(|i| {
            let angle = (i as f32 / BURST_PARTICLES as f32) * std::f32::consts::TAU + rng.gen::<f32>();
            let dist = BURST_DIST_MIN_PX + rng.gen::<f32>() * BURST_DIST_SPAN_PX;
            Vec2::new(angle.cos(), angle.sin()) * dist
        })
        .collect()
}

/// Random top-left corner that keeps an element of `size` inside `viewport`.
pub fn evasive_position<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2, size: Vec2) -> Vec2 {
    let room = (viewport - size).max(Vec2::ZERO);
    Vec2::new(rng.gen::<f32>() * room.x, rng.gen::<f32>() * room.y)
}

/// Pick one glyph uniformly; `None` for an empty list.
pub fn pick_glyph<'a, R: Rng + ?Sized>(rng: &mut R, glyphs: &'a [String]) -> Option<&'a str> {
    glyphs.choose(rng).map(String::as_str)
}
