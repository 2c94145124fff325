//! Interface sound cues synthesized with the Web Audio API.

use std::cell::{Cell, RefCell};

use hvy_core::runtime::{AudioCue, AudioCues};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

use crate::config::audio;

/// Short oscillator beeps, one per [`AudioCue`].
///
/// Browsers only allow an `AudioContext` after a user gesture, so nothing
/// plays until [`AudioCues::start`] succeeds. Every failure is swallowed.
#[derive(Default)]
pub struct WebAudio {
    context: RefCell<Option<AudioContext>>,
    muted: Cell<bool>,
}

impl WebAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn tone(cue: AudioCue) -> (f32, f64, OscillatorType) {
        let ((frequency, duration), wave) = match cue {
            AudioCue::Hover => (audio::HOVER, OscillatorType::Sine),
            AudioCue::Click => (audio::CLICK, OscillatorType::Square),
            AudioCue::Navigate => (audio::NAVIGATE, OscillatorType::Triangle),
            AudioCue::Mount => (audio::MOUNT, OscillatorType::Sine),
            AudioCue::Error => (audio::ERROR, OscillatorType::Sawtooth),
        };
        (frequency, duration, wave)
    }

    fn beep(context: &AudioContext, cue: AudioCue) -> Result<(), JsValue> {
        let (frequency, duration, wave) = Self::tone(cue);
        let now = context.current_time();

        let oscillator = context.create_oscillator()?;
        oscillator.set_type(wave);
        oscillator.frequency().set_value(frequency);

        let gain = context.create_gain()?;
        gain.gain().set_value_at_time(audio::GAIN, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(audio::FLOOR_GAIN, now + duration)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(now + duration)?;
        Ok(())
    }
}

impl AudioCues for WebAudio {
    fn play(&self, cue: AudioCue) {
        if self.muted.get() {
            return;
        }
        let context = self.context.borrow();
        let Some(context) = context.as_ref() else {
            return;
        };
        if let Err(e) = Self::beep(context, cue) {
            log::debug!("audio cue {:?} failed: {:?}", cue, e);
        }
    }

    fn start(&self) {
        let mut context = self.context.borrow_mut();
        match context.as_ref() {
            Some(existing) if existing.state() == AudioContextState::Suspended => {
                let _ = existing.resume();
            }
            Some(_) => {}
            None => match AudioContext::new() {
                Ok(created) => *context = Some(created),
                Err(e) => log::warn!("audio unavailable: {:?}", e),
            },
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
