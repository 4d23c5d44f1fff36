// Page configuration supplied by the host page as `window.VALENTINE_CONFIG`.
//
// Every field has a default so a partial (or absent) object still yields a
// usable page. Fields that `validate` checks are decoded leniently: a value of
// the wrong JSON type is carried through as an invalid value, never as a
// decode error, so `ValentineConfig::validate` can repair it in place and
// report one `ConfigIssue` per repair. Nothing here is fatal.

use super::constants::*;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// A single repair made by [`ValentineConfig::validate`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("Valentine's name is not set! Using default.")]
    MissingName,
    #[error("Invalid color for {key}! Using default.")]
    InvalidColor { key: &'static str },
    #[error("Float duration too short! Setting to 5s minimum.")]
    FloatDurationTooShort,
    #[error("Float duration {0:?} is not a number! Using default.")]
    FloatDurationUnparsable(String),
    #[error("Heart explosion size should be between 1 and 3! Using default.")]
    ExplosionSizeOutOfRange,
    #[error("Music volume should be between 0 and 1! Using default.")]
    VolumeOutOfRange,
}

/// Reasons the raw config object could not be read at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window.VALENTINE_CONFIG is not defined")]
    Missing,
    #[error("config object could not be serialized: {0}")]
    Unreadable(String),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValentineConfig {
    #[serde(deserialize_with = "lenient_string")]
    pub valentine_name: String,
    #[serde(deserialize_with = "page_title")]
    pub page_title: String,
    #[serde(deserialize_with = "section")]
    pub colors: Colors,
    #[serde(deserialize_with = "section")]
    pub animations: Animations,
    #[serde(deserialize_with = "section")]
    pub questions: Questions,
    #[serde(deserialize_with = "section")]
    pub floating_emojis: FloatingEmojis,
    #[serde(deserialize_with = "section")]
    pub love_messages: LoveMessages,
    #[serde(deserialize_with = "section")]
    pub celebration: Celebration,
    #[serde(deserialize_with = "section")]
    pub music: MusicSettings,
}

const DEFAULT_PAGE_TITLE: &str = "Will You Be My Valentine? 💝";

impl Default for ValentineConfig {
    fn default() -> Self {
        Self {
            valentine_name: String::new(),
            page_title: DEFAULT_PAGE_TITLE.into(),
            colors: Colors::default(),
            animations: Animations::default(),
            questions: Questions::default(),
            floating_emojis: FloatingEmojis::default(),
            love_messages: LoveMessages::default(),
            celebration: Celebration::default(),
            music: MusicSettings::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    #[serde(deserialize_with = "lenient_string")]
    pub background_start: String,
    #[serde(deserialize_with = "lenient_string")]
    pub background_end: String,
    #[serde(deserialize_with = "lenient_string")]
    pub button_background: String,
    #[serde(deserialize_with = "lenient_string")]
    pub button_hover: String,
    #[serde(deserialize_with = "lenient_string")]
    pub text_color: String,
}

impl Colors {
    /// Fallback value for a color key, as named in the config object.
    pub fn default_for(key: &str) -> Option<&'static str> {
        match key {
            "backgroundStart" => Some("#ffafbd"),
            "backgroundEnd" => Some("#ffc3a0"),
            "buttonBackground" => Some("#ff6b6b"),
            "buttonHover" => Some("#ff8787"),
            "textColor" => Some("#ff4757"),
            _ => None,
        }
    }

    fn entries_mut(&mut self) -> [(&'static str, &mut String); 5] {
        [
            ("backgroundStart", &mut self.background_start),
            ("backgroundEnd", &mut self.background_end),
            ("buttonBackground", &mut self.button_background),
            ("buttonHover", &mut self.button_hover),
            ("textColor", &mut self.text_color),
        ]
    }
}

impl Default for Colors {
    fn default() -> Self {
        let d = |k: &str| Colors::default_for(k).unwrap_or_default().to_string();
        Self {
            background_start: d("backgroundStart"),
            background_end: d("backgroundEnd"),
            button_background: d("buttonBackground"),
            button_hover: d("buttonHover"),
            text_color: d("textColor"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Animations {
    #[serde(deserialize_with = "duration_text")]
    pub float_duration: String,
    #[serde(deserialize_with = "lenient_string")]
    pub float_distance: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bounce_speed: String,
    /// NaN when the host supplied something that is not a number.
    #[serde(deserialize_with = "lenient_number")]
    pub heart_explosion_size: f64,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            float_duration: DEFAULT_FLOAT_DURATION.into(),
            float_distance: "50px".into(),
            bounce_speed: "0.5s".into(),
            heart_explosion_size: DEFAULT_EXPLOSION_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Questions {
    pub first: FirstQuestion,
    pub second: SecondQuestion,
    pub third: ThirdQuestion,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirstQuestion {
    pub text: String,
    pub yes_btn: String,
    pub no_btn: String,
    pub secret_answer: String,
}

impl Default for FirstQuestion {
    fn default() -> Self {
        Self {
            text: "Do you like me?".into(),
            yes_btn: "Yes".into(),
            no_btn: "No".into(),
            secret_answer: "I don't like you, I love you! ❤️".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecondQuestion {
    pub text: String,
    pub start_text: String,
    pub next_btn: String,
}

impl Default for SecondQuestion {
    fn default() -> Self {
        Self {
            text: "How much do you love me?".into(),
            start_text: "This much!".into(),
            next_btn: "Next ❤️".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThirdQuestion {
    pub text: String,
    pub yes_btn: String,
    pub no_btn: String,
}

impl Default for ThirdQuestion {
    fn default() -> Self {
        Self {
            text: "Will you be my Valentine? 🌹".into(),
            yes_btn: "Yes!".into(),
            no_btn: "No".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FloatingEmojis {
    pub hearts: Vec<String>,
    pub bears: Vec<String>,
}

impl Default for FloatingEmojis {
    fn default() -> Self {
        Self {
            hearts: ["❤️", "💖", "💝", "💗", "💓"].map(String::from).to_vec(),
            bears: ["🧸", "🐻"].map(String::from).to_vec(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoveMessages {
    pub normal: String,
    pub high: String,
    pub extreme: String,
}

impl Default for LoveMessages {
    fn default() -> Self {
        Self {
            normal: "And beyond! 🥰".into(),
            high: "To infinity and beyond! 🚀💝".into(),
            extreme: "WOOOOW You love me that much?? 🥰🚀💝".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Celebration {
    pub title: String,
    pub message: String,
    #[serde(deserialize_with = "emoji_list")]
    pub emojis: Vec<String>,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            title: "Yay! I'm the luckiest person in the world! 🎉💝💖".into(),
            message: "Now come get your gift, a big warm hug and a huge kiss!".into(),
            emojis: ["🎁", "💖", "🤗", "💝", "💋", "❤️", "💕"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicSettings {
    #[serde(deserialize_with = "truthy")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub music_url: String,
    #[serde(deserialize_with = "lenient_volume")]
    pub volume: Option<f64>,
}

/// What the page should do with its audio element.
#[derive(Clone, Debug, PartialEq)]
pub enum MusicPlan {
    /// Hide the tap prompt and leave the audio element alone.
    HideOverlay,
    Load { url: String, volume: f64 },
}

impl MusicSettings {
    pub fn effective_volume(&self) -> f64 {
        self.volume.unwrap_or(DEFAULT_VOLUME)
    }

    /// `has_audio` is whether the page provides both the audio and source nodes.
    pub fn plan(&self, has_audio: bool) -> MusicPlan {
        if !self.enabled || !has_audio {
            return MusicPlan::HideOverlay;
        }
        MusicPlan::Load {
            url: self.music_url.clone(),
            volume: self.effective_volume(),
        }
    }
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            music_url: String::new(),
            volume: None,
        }
    }
}

impl ValentineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace invalid fields with their defaults, returning one issue per fix.
    pub fn validate(&mut self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.valentine_name.trim().is_empty() {
            issues.push(ConfigIssue::MissingName);
            self.valentine_name = DEFAULT_NAME.into();
        }

        for (key, value) in self.colors.entries_mut() {
            if !is_valid_hex(value) {
                issues.push(ConfigIssue::InvalidColor { key });
                *value = Colors::default_for(key).unwrap_or_default().into();
            }
        }

        let anim = &mut self.animations;
        match parse_leading_float(&anim.float_duration) {
            Some(secs) if secs < MIN_FLOAT_DURATION_SEC => {
                issues.push(ConfigIssue::FloatDurationTooShort);
                anim.float_duration = "5s".into();
            }
            Some(_) => {}
            None => {
                issues.push(ConfigIssue::FloatDurationUnparsable(
                    anim.float_duration.clone(),
                ));
                anim.float_duration = DEFAULT_FLOAT_DURATION.into();
            }
        }

        let size = anim.heart_explosion_size;
        if !(EXPLOSION_SIZE_MIN..=EXPLOSION_SIZE_MAX).contains(&size) {
            issues.push(ConfigIssue::ExplosionSizeOutOfRange);
            anim.heart_explosion_size = DEFAULT_EXPLOSION_SIZE;
        }

        if let Some(v) = self.music.volume {
            if !(0.0..=1.0).contains(&v) {
                issues.push(ConfigIssue::VolumeOutOfRange);
                self.music.volume = Some(DEFAULT_VOLUME);
            }
        }

        issues
    }
}

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(value: &str) -> bool {
    HEX_COLOR
        .get_or_init(|| {
            Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern compiles")
        })
        .is_match(value)
}

/// Numeric prefix of `s`, ignoring leading whitespace and any trailing unit
/// (`"12.5s"` -> 12.5). Returns `None` when no number leads the string.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let candidate_len = s
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
        .count();
    (1..=candidate_len)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
}

pub fn title_text(name: &str) -> String {
    format!("{name}, my love...")
}

/// Emoji entries worth rendering (whitespace-only entries are skipped).
pub fn visible_emojis(emojis: &[String]) -> impl Iterator<Item = &str> {
    emojis
        .iter()
        .map(String::as_str)
        .filter(|e| !e.trim().is_empty())
}

// Non-string values (null, numbers, objects) become "", which validation
// treats as missing.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn page_title<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => DEFAULT_PAGE_TITLE.into(),
    })
}

// A bare number is accepted as seconds, so `3` goes through the same
// minimum-duration check as `"3s"`.
fn duration_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn number_or_nan(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(number_or_nan(&Value::deserialize(d)?))
}

fn lenient_volume<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        other => Some(number_or_nan(&other)),
    })
}

fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

// A section of the wrong shape falls back to its defaults instead of failing
// the whole object.
fn section<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(d)?;
    Ok(T::deserialize(raw).unwrap_or_else(|e| {
        log::warn!("[config] ignoring malformed section: {}", e);
        T::default()
    }))
}

// Accepts either a list of strings or one string split into characters.
fn emoji_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }
    Ok(match Raw::deserialize(d)? {
        Raw::List(list) => list,
        Raw::Text(text) => text.chars().map(String::from).collect(),
    })
}
