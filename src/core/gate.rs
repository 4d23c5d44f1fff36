// Gesture-gated background music.
//
// Browsers only allow audio to start from inside a user input handler, so
// playback waits for the first click or touch. A failed start (autoplay
// policy, missing source, ...) re-arms the gate so a later gesture retries.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Something that can start the background track.
///
/// `play` must kick off playback synchronously. When the backend reports its
/// outcome later (a promise), it is fed back through [`MusicGate::settle`].
pub trait Playback {
    fn play(&self) -> Result<(), PlaybackError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    NotStarted,
    Starting,
    Playing,
    /// Last attempt failed; the next gesture may try again.
    Failed,
}

#[derive(Clone, Debug)]
pub struct MusicGate {
    state: GateState,
    attempts: u32,
}

impl Default for MusicGate {
    fn default() -> Self {
        Self::new()
    }
}

impl MusicGate {
    pub fn new() -> Self {
        Self {
            state: GateState::NotStarted,
            attempts: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn can_attempt(&self) -> bool {
        matches!(self.state, GateState::NotStarted | GateState::Failed)
    }

    /// Handle a user gesture. Returns true when a playback attempt was made.
    pub fn on_gesture<P: Playback + ?Sized>(&mut self, player: &P) -> bool {
        if !self.can_attempt() {
            return false;
        }
        self.state = GateState::Starting;
        self.attempts += 1;
        if let Err(e) = player.play() {
            log::warn!("[music] start failed: {}", e);
            self.state = GateState::Failed;
        }
        true
    }

    /// Record the asynchronous outcome of the attempt in flight.
    pub fn settle(&mut self, outcome: Result<(), PlaybackError>) {
        if self.state != GateState::Starting {
            return;
        }
        self.state = match outcome {
            Ok(()) => GateState::Playing,
            Err(e) => {
                log::info!("[music] {}; waiting for another gesture", e);
                GateState::Failed
            }
        };
    }
}
