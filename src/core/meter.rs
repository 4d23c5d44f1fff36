// Love-intensity slider state.
//
// The slider nominally runs 0..=100 but the control allows values far beyond
// that. Going past 100 reveals an overflow message whose tier grows with the
// value, and each milestone (100, 1000, 5000) fires one celebratory burst.
// The watermark records the highest milestone already rewarded so dragging
// back and forth inside a tier stays quiet.

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoveTier {
    Normal,
    High,
    Extreme,
}

impl LoveTier {
    pub fn for_value(value: i32) -> Self {
        if value >= METER_EXTREME_THRESHOLD {
            LoveTier::Extreme
        } else if value >= METER_HIGH_THRESHOLD {
            LoveTier::High
        } else {
            LoveTier::Normal
        }
    }

    /// Extreme love gets the extra visual emphasis.
    pub fn emphasized(self) -> bool {
        self == LoveTier::Extreme
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overflow {
    pub extra_width_px: f32,
    pub tier: LoveTier,
}

/// Everything the DOM needs to reflect one slider input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterReading {
    pub value: i32,
    pub fill_percent: f32,
    pub overflow: Option<Overflow>,
    /// Milestone that fired a burst on this input, if any.
    pub burst: Option<i32>,
}

impl MeterReading {
    pub fn width_css(&self) -> String {
        match self.overflow {
            Some(o) => format!("calc(100% + {}px)", o.extra_width_px),
            None => "100%".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoveMeter {
    watermark: i32,
}

impl LoveMeter {
    pub const INITIAL_VALUE: i32 = METER_NOMINAL_MAX;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn watermark(&self) -> i32 {
        self.watermark
    }

    pub fn update(&mut self, value: i32, viewport_width: f32) -> MeterReading {
        let fill_percent = fill_percent(value);
        if value <= METER_NOMINAL_MAX {
            self.watermark = 0;
            return MeterReading {
                value,
                fill_percent,
                overflow: None,
                burst: None,
            };
        }

        let reached = highest_milestone(value);
        let burst = if reached > self.watermark {
            self.watermark = reached;
            Some(reached)
        } else {
            // Fell back under a rewarded milestone: re-arm it for the next climb.
            self.watermark = reached;
            None
        };

        MeterReading {
            value,
            fill_percent,
            overflow: Some(Overflow {
                extra_width_px: extra_width_px(value, viewport_width),
                tier: LoveTier::for_value(value),
            }),
            burst,
        }
    }
}

/// Fill of the track as a CSS percentage, saturating at 100.
#[inline]
pub fn fill_percent(value: i32) -> f32 {
    (value as f32 / 100.0).clamp(0.0, 100.0)
}

#[inline]
pub fn extra_width_px(value: i32, viewport_width: f32) -> f32 {
    let excess = (value - METER_NOMINAL_MAX) as f32 / METER_MAX_EXCESS;
    excess.clamp(0.0, 1.0) * viewport_width * METER_EXTRA_WIDTH_FRACTION
}

fn highest_milestone(value: i32) -> i32 {
    METER_MILESTONES
        .iter()
        .rev()
        .copied()
        .find(|&m| {
            if m == METER_NOMINAL_MAX {
                value > m
            } else {
                value >= m
            }
        })
        .unwrap_or(0)
}

/// Integer slider reading with `parseInt` leniency (`"250.7"` -> 250).
pub fn parse_slider_value(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    digits[..end].parse::<i32>().ok().map(|v| sign * v)
}
