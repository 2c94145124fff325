//! Navigation and terminal-log core of the HVY-OS portfolio shell.
//!
//! This crate is free of browser dependencies so every state transition can
//! be driven and tested natively:
//!
//! - [`command`] - pure parser from terminal input to [`CommandResult`]
//! - [`store`] - [`SystemStore`], the session state machine and log buffer
//! - [`terminal`] - [`TerminalController`], input, history and auto-scroll
//! - [`runtime`] - injectable scheduler, random source, clock and audio
//! - [`models`] - log entries, module ids, content and contact records

pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod runtime;
pub mod store;
pub mod terminal;
pub mod utils;

pub use command::{get_prompt, parse_command, CommandAction, CommandResult};
pub use store::{LogSchedule, ScheduledLog, StoreEvent, Subscription, SystemStore};
pub use terminal::{AutoScroll, CommandHistory, ScrollMetrics, TerminalController};
