use super::constants::{SECRET_MAX_LEVEL, SECRET_SCALE_START, SECRET_SCALE_STEP};

/// Progressive reveal of the secret answer on question 1.
///
/// Every interaction with the first question grows the hidden answer a little.
/// The level only ever increases and saturates at [`SECRET_MAX_LEVEL`]; it is
/// deliberately kept when the visitor leaves question 1 and comes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecretReveal {
    level: u8,
}

impl SecretReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn scale(&self) -> f32 {
        reveal_scale(self.level)
    }

    /// Advance one level (saturating) and return the new scale.
    pub fn bump(&mut self) -> f32 {
        self.level = (self.level + 1).min(SECRET_MAX_LEVEL);
        self.scale()
    }
}

#[inline]
pub fn reveal_scale(level: u8) -> f32 {
    SECRET_SCALE_START + level as f32 * SECRET_SCALE_STEP
}
