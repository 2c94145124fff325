//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons so the theme can be swapped in
//! one place.

use hvy_core::models::ModuleId;
use icondata::Icon;

mod lucide {
    pub use icondata::{
        LuActivity as Healiora, LuBriefcase as Experience, LuCpu as Lifecycle,
        LuFolderOpen as Projects, LuHouse as Home, LuLayers as Stack, LuMail as Access,
        LuMapPin as Location, LuTerminal as Terminal, LuVolume2 as SoundOn,
        LuVolumeX as SoundOff,
    };
}

pub const HOME: Icon = lucide::Home;
pub const TERMINAL: Icon = lucide::Terminal;
pub const LOCATION: Icon = lucide::Location;
pub const LIFECYCLE: Icon = lucide::Lifecycle;
pub const SOUND_ON: Icon = lucide::SoundOn;
pub const SOUND_OFF: Icon = lucide::SoundOff;

/// Icon shown next to a module in the navigation list.
pub fn module(id: ModuleId) -> Icon {
    match id {
        ModuleId::Projects => lucide::Projects,
        ModuleId::Stack => lucide::Stack,
        ModuleId::Experience => lucide::Experience,
        ModuleId::SystemCommands => lucide::Terminal,
        ModuleId::Healiora => lucide::Healiora,
        ModuleId::Access => lucide::Access,
    }
}
