//! Data models for the navigation subsystem.
//!
//! - [`LogEntry`], [`LogType`] - terminal log records
//! - [`ModuleId`], [`MountTarget`] - content module namespace
//! - [`LifecycleState`], [`SystemSnapshot`] - store state
//! - [`Portfolio`] - static content records
//! - [`ContactRequest`], [`ContactResponse`] - contact relay payloads

mod contact;
mod content;
mod log_entry;
mod module;
mod state;

pub use contact::{ContactRequest, ContactResponse};
pub use content::{Experience, ExperienceKind, Portfolio, Project, StackGroup};
pub use log_entry::{LogEntry, LogId, LogType};
pub use module::{ModuleId, MountTarget};
pub use state::{LifecycleState, SystemSnapshot};
