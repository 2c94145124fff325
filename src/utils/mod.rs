//! Browser-side services and DOM helpers.
//!
//! - [`BrowserScheduler`] - `setTimeout`/`setInterval` behind the core scheduler seam
//! - [`WebAudio`] - oscillator cues behind the core audio seam
//! - [`send_contact`] - contact relay client
//! - [`dom`] - window, focus and hash helpers

mod audio;
pub mod dom;
mod fetch;
mod scheduler;

pub use audio::WebAudio;
pub use fetch::send_contact;
pub use scheduler::BrowserScheduler;
