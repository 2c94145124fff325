//! Front-end configuration.
//!
//! Navigation timings and log sizing live in [`hvy_core::config`]; this module
//! only holds what the browser shell itself needs.

pub use hvy_core::config::{terminal, CONTACT_ENDPOINT, VIEW_LOG_STAGGER_MS};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the status bar and boot overlay.
pub const APP_NAME: &str = "HVY-OS";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "app";

/// Console log level.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query honoured by the log reveal animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Placeholder shown in the command line.
pub const INPUT_PLACEHOLDER: &str = "type 'help'";

// =============================================================================
// Audio Cues
// =============================================================================

/// Oscillator settings for each interface cue.
pub mod audio {
    /// Peak gain of every cue.
    pub const GAIN: f32 = 0.04;

    /// Gain the envelope decays to before the oscillator stops.
    pub const FLOOR_GAIN: f32 = 0.0001;

    /// `(frequency Hz, duration s)`.
    pub const HOVER: (f32, f64) = (1200.0, 0.02);
    pub const CLICK: (f32, f64) = (800.0, 0.05);
    pub const NAVIGATE: (f32, f64) = (440.0, 0.12);
    pub const MOUNT: (f32, f64) = (660.0, 0.25);
    pub const ERROR: (f32, f64) = (140.0, 0.3);
}
