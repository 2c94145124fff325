//! Subsystem configuration.
//!
//! Centralizes the timing, sizing and probability constants that drive the
//! navigation state machine and the terminal log.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

/// Portfolio records (projects, experience, stack).
pub const CONTENT_TOML: &str = include_str!("../assets/content.toml");

// =============================================================================
// Prompt
// =============================================================================

/// User shown in the terminal prompt.
pub const PROMPT_USER: &str = "system";

/// Host shown in the terminal prompt.
pub const PROMPT_HOST: &str = "hvy";

// =============================================================================
// Log Buffer
// =============================================================================

/// Maximum number of log entries retained by the store.
pub const MAX_LOG_ENTRIES: usize = 50;

/// Maximum number of submitted commands kept for recall.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Boot Sequence
// =============================================================================

/// Boot log lines and the delay (ms from boot start) at which each appears.
pub mod boot {
    use crate::models::LogType;

    pub const SEQUENCE: &[(u32, &str, LogType)] = &[
        (200, "BIOS_CHECK... OK", LogType::System),
        (600, "Loading kernel modules: [hvy_core, render_engine, net_stack]", LogType::Info),
        (1000, "Mounting virtual filesystem at /dev/portfolio...", LogType::Info),
        (1400, "Establishing secure uplink... CONNECTED", LogType::System),
        (2000, "SYSTEM_READY.", LogType::Success),
    ];

    /// Delay after which the lifecycle leaves BOOT.
    pub const IDLE_AT_MS: u32 = 2500;
}

// =============================================================================
// Module Mounting
// =============================================================================

pub mod mount {
    pub const ALLOCATE_LOG_MS: u32 = 200;
    pub const RESOLVE_LOG_MS: u32 = 400;
    pub const HICCUP_LOG_MS: u32 = 600;

    /// Simulated load time for ordinary modules.
    pub const LOAD_MS: u32 = 800;
    /// Simulated load time for the featured (heavy) module.
    pub const HEAVY_LOAD_MS: u32 = 2000;
    /// Extra completion delay added by a hiccup.
    pub const HICCUP_PENALTY_MS: u32 = 500;

    /// Probability that a mount narrates a latency hiccup.
    pub const HICCUP_PROBABILITY: f64 = 0.15;
}

// =============================================================================
// Heartbeat
// =============================================================================

pub mod heartbeat {
    pub const PERIOD_MS: u32 = 5000;
    pub const PROBABILITY: f64 = 0.05;
    pub const MESSAGE: &str = "System heartbeat: stable";
}

// =============================================================================
// Terminal View
// =============================================================================

pub mod terminal {
    /// Distance from the bottom (px) still considered "at bottom".
    pub const AUTOSCROLL_THRESHOLD_PX: f64 = 50.0;

    /// Delay between revealed characters of a typed log line.
    pub const REVEAL_CHAR_MS: u32 = 12;
}

// =============================================================================
// Derived View Logs
// =============================================================================

/// Stagger between log lines that views derive from content records.
pub const VIEW_LOG_STAGGER_MS: u32 = 150;

// =============================================================================
// Contact Relay
// =============================================================================

/// Endpoint the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";
