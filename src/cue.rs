//! Warning cue played when the countdown enters its last seconds.
//!
//! The countdown only knows the [`WarningCue`] trait; the browser build plugs
//! in [`AudioCue`], tests plug in a recorder.

use log::{debug, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Capability to play the near-end warning.
pub trait WarningCue {
    fn play(&self);
}

/// Plays an audio asset through an `HTMLAudioElement`.
#[derive(Debug, Clone)]
pub struct AudioCue {
    src: String,
}

impl AudioCue {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

impl WarningCue for AudioCue {
    fn play(&self) {
        let audio = match HtmlAudioElement::new_with_src(&self.src) {
            Ok(audio) => audio,
            Err(err) => {
                warn!("Could not create audio element for {}: {:?}", self.src, err);
                return;
            }
        };

        debug!("Playing warning cue {}", self.src);
        match audio.play() {
            Ok(promise) => {
                // Autoplay policies reject the promise; nothing to recover.
                let src = self.src.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        warn!("Warning cue {} was not played: {:?}", src, err);
                    }
                });
            }
            Err(err) => warn!("Warning cue {} failed to start: {:?}", self.src, err),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::WarningCue;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many times the cue was played.
    #[derive(Default)]
    pub struct RecordingCue {
        plays: Cell<usize>,
    }

    impl RecordingCue {
        pub fn shared() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn plays(&self) -> usize {
            self.plays.get()
        }
    }

    impl WarningCue for RecordingCue {
        fn play(&self) {
            self.plays.set(self.plays.get() + 1);
        }
    }
}
