// Tuning constants for the greeting's interactive pieces.
//
// Time values are in seconds unless the name says otherwise.

// Secret answer progressive reveal
pub const SECRET_MAX_LEVEL: u8 = 15;
pub const SECRET_SCALE_START: f32 = 0.85;
pub const SECRET_SCALE_STEP: f32 = 0.12;

// Floating decorations
pub const FLOAT_LEFT_MAX_VW: f32 = 100.0;
pub const FLOAT_DELAY_MAX_SEC: f32 = 8.0;
pub const FLOAT_DURATION_MIN_SEC: f32 = 10.0;
pub const FLOAT_DURATION_SPAN_SEC: f32 = 20.0;
pub const FLOAT_SCALE_MIN: f32 = 0.65;
pub const FLOAT_SCALE_SPAN: f32 = 0.7;
pub const FLOAT_OPACITY_MIN: f32 = 0.5;
pub const FLOAT_OPACITY_SPAN: f32 = 0.5;
pub const FLOAT_SWAY_CHANCE: f64 = 0.6;

// Love meter
pub const METER_NOMINAL_MAX: i32 = 100;
pub const METER_MAX_EXCESS: f32 = 9900.0;
pub const METER_EXTRA_WIDTH_FRACTION: f32 = 0.8; // of viewport width at max excess
pub const METER_HIGH_THRESHOLD: i32 = 1000;
pub const METER_EXTREME_THRESHOLD: i32 = 5000;
pub const METER_MILESTONES: [i32; 3] = [METER_NOMINAL_MAX, METER_HIGH_THRESHOLD, METER_EXTREME_THRESHOLD];

// Milestone burst particles
pub const BURST_PARTICLES: usize = 6;
pub const BURST_DIST_MIN_PX: f32 = 40.0;
pub const BURST_DIST_SPAN_PX: f32 = 40.0;
pub const BURST_LIFETIME_MS: i32 = 900;

// Evasive button
pub const WIGGLE_MS: i32 = 400;

// Celebration
pub const CONFETTI_PIECES: usize = 45;
pub const CONFETTI_DELAY_MAX_SEC: f32 = 0.5;
pub const CONFETTI_DURATION_MIN_SEC: f32 = 2.5;
pub const CONFETTI_DURATION_SPAN_SEC: f32 = 1.5;
pub const CONFETTI_LIFETIME_MS: i32 = 4500;
pub const CONFETTI_PALETTE: [&str; 6] = [
    "#ff6b6b", "#ff8787", "#ffb8b8", "#ff4757", "#fff0f5", "#ffc0cb",
];
pub const HEART_EXPLOSION_COUNT: usize = 50;

// Config validation bounds
pub const MIN_FLOAT_DURATION_SEC: f64 = 5.0;
pub const EXPLOSION_SIZE_MIN: f64 = 1.0;
pub const EXPLOSION_SIZE_MAX: f64 = 3.0;
pub const DEFAULT_EXPLOSION_SIZE: f64 = 1.5;
pub const DEFAULT_FLOAT_DURATION: &str = "15s";
pub const DEFAULT_VOLUME: f64 = 0.5;
pub const DEFAULT_NAME: &str = "My Love";
