use crate::constants::ids;
use crate::core::{MusicGate, MusicPlan, MusicSettings, Playback, PlaybackError};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `HTMLMediaElement.play()` with the promise outcome fed back to the gate.
struct AudioPlayback {
    audio: web::HtmlAudioElement,
    gate: Weak<RefCell<MusicGate>>,
}

impl Playback for AudioPlayback {
    fn play(&self) -> Result<(), PlaybackError> {
        let promise = self
            .audio
            .play()
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))?;
        let gate = self.gate.clone();
        spawn_local(async move {
            let outcome = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)));
            if let Some(gate) = gate.upgrade() {
                gate.borrow_mut().settle(outcome);
            }
        });
        Ok(())
    }
}

#[derive(Clone)]
pub struct MusicHandle {
    gate: Rc<RefCell<MusicGate>>,
    playback: Rc<AudioPlayback>,
}

impl MusicHandle {
    /// Must be called from inside a user gesture handler.
    pub fn try_play(&self) -> bool {
        let mut gate = self.gate.borrow_mut();
        let started = gate.on_gesture(self.playback.as_ref());
        if started {
            log::info!("[music] playback requested (attempt {})", gate.attempts());
        }
        started
    }
}

thread_local! {
    static HANDLE: RefCell<Option<MusicHandle>> = const { RefCell::new(None) };
}

/// Entry point for the page's own `startMusic()` calls; no-op until set up.
pub fn start_from_js() {
    let handle = HANDLE.with(|h| h.borrow().clone());
    if let Some(handle) = handle {
        handle.try_play();
    }
}

pub fn setup(document: &web::Document, settings: &MusicSettings) {
    let audio = document
        .get_element_by_id(ids::BG_MUSIC)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
    let source = document
        .get_element_by_id(ids::MUSIC_SOURCE)
        .and_then(|el| el.dyn_into::<web::HtmlSourceElement>().ok());
    let elements = audio.zip(source);

    let (MusicPlan::Load { url, volume }, Some((audio, source))) =
        (settings.plan(elements.is_some()), elements)
    else {
        if settings.enabled {
            log::warn!("[music] audio element or source missing; music off");
        } else {
            log::info!("[music] disabled");
        }
        overlay::hide(document);
        return;
    };

    source.set_src(&url);
    audio.set_volume(volume);
    audio.load();

    let gate = Rc::new(RefCell::new(MusicGate::new()));
    let handle = MusicHandle {
        playback: Rc::new(AudioPlayback {
            audio,
            gate: Rc::downgrade(&gate),
        }),
        gate,
    };
    HANDLE.with(|h| *h.borrow_mut() = Some(handle.clone()));

    overlay::show(document);
    if let Some(prompt) = document.get_element_by_id(ids::MUSIC_TAP_OVERLAY) {
        let once = dom::ListenOpts {
            once: true,
            ..Default::default()
        };
        for (event, opts) in [
            ("click", once),
            ("touchstart", dom::ListenOpts { passive: true, ..once }),
        ] {
            let handle = handle.clone();
            let doc = document.clone();
            dom::listen(&prompt, event, opts, move || {
                handle.try_play();
                overlay::hide(&doc);
            });
        }
    }

    // Not `once`: a rejected start must be retryable on a later gesture.
    let capture = dom::ListenOpts {
        capture: true,
        ..Default::default()
    };
    for (event, opts) in [
        ("click", capture),
        ("touchstart", dom::ListenOpts { passive: true, ..capture }),
    ] {
        let handle = handle.clone();
        dom::listen(document, event, opts, move || {
            handle.try_play();
        });
    }
}
