//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`icons`] - Centralized icon definitions
//! - [`modules`] - Content views, one per mountable module
//! - [`status`] - Status bar showing lifecycle, location and audio state
//! - [`terminal`] - Shell layout, log output and command line

pub mod icons;
pub mod modules;
pub mod router;
pub mod status;
pub mod terminal;

pub use router::AppRouter;
