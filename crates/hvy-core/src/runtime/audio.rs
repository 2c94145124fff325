//! Audio cue seam.
//!
//! The store and terminal fire cues opportunistically. Implementations must
//! swallow their own failures; a cue never affects navigation or log state.

use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Hover,
    Click,
    Navigate,
    Mount,
    Error,
}

pub trait AudioCues {
    fn play(&self, cue: AudioCue);

    /// Unlocks audio output after a user gesture.
    fn start(&self) {}

    /// Flips the mute state, returning the new value.
    fn toggle_mute(&self) -> bool {
        true
    }

    fn is_muted(&self) -> bool {
        true
    }

    fn play_hover(&self) {
        self.play(AudioCue::Hover);
    }

    fn play_click(&self) {
        self.play(AudioCue::Click);
    }

    fn play_navigate(&self) {
        self.play(AudioCue::Navigate);
    }

    fn play_mount(&self) {
        self.play(AudioCue::Mount);
    }

    fn play_error(&self) {
        self.play(AudioCue::Error);
    }
}

/// No audio at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCues for SilentAudio {
    fn play(&self, _cue: AudioCue) {}
}

/// Records every cue it is asked to play.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    cues: RefCell<Vec<AudioCue>>,
    muted: Cell<bool>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.borrow().clone()
    }

    pub fn take(&self) -> Vec<AudioCue> {
        self.cues.take()
    }
}

impl AudioCues for RecordingAudio {
    fn play(&self, cue: AudioCue) {
        if !self.muted.get() {
            self.cues.borrow_mut().push(cue);
        }
    }

    fn toggle_mute(&self) -> bool {
        self.muted.set(!self.muted.get());
        self.muted.get()
    }

    fn is_muted(&self) -> bool {
        self.muted.get()
    }
}
