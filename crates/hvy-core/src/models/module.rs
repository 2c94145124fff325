//! Content module identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModuleError;

/// A content module the terminal can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Projects,
    Stack,
    Experience,
    SystemCommands,
    Healiora,
    Access,
}

impl ModuleId {
    /// All modules, in `ls` order.
    pub const ALL: [ModuleId; 6] = [
        Self::Projects,
        Self::Stack,
        Self::Experience,
        Self::SystemCommands,
        Self::Healiora,
        Self::Access,
    ];

    /// Canonical upper-case identifier (`SYSTEM_COMMANDS`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "PROJECTS",
            Self::Stack => "STACK",
            Self::Experience => "EXPERIENCE",
            Self::SystemCommands => "SYSTEM_COMMANDS",
            Self::Healiora => "HEALIORA",
            Self::Access => "ACCESS",
        }
    }

    /// Directory name shown by `ls` and used in URL hashes (`system_commands`).
    pub fn dir_name(self) -> String {
        self.as_str().to_lowercase()
    }

    /// Location shown by `pwd` and the prompt (`system-commands`).
    pub fn location(self) -> String {
        self.dir_name().replacen('_', "-", 1)
    }

    /// The featured module carries a heavier simulated payload.
    pub fn is_heavy(self) -> bool {
        self == Self::Healiora
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ParseModuleError;

    /// Parses a canonical identifier, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModuleError(s.to_string()))
    }
}

/// Target of a mount request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountTarget {
    /// Return to the system overview (the `RESET` request).
    Root,
    Module(ModuleId),
}

impl MountTarget {
    pub fn module(self) -> Option<ModuleId> {
        match self {
            Self::Root => None,
            Self::Module(id) => Some(id),
        }
    }
}

impl From<Option<ModuleId>> for MountTarget {
    fn from(module: Option<ModuleId>) -> Self {
        module.map_or(Self::Root, Self::Module)
    }
}

impl From<ModuleId> for MountTarget {
    fn from(module: ModuleId) -> Self {
        Self::Module(module)
    }
}

impl FromStr for MountTarget {
    type Err = ParseModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("RESET") {
            Ok(Self::Root)
        } else {
            s.parse().map(Self::Module)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_replaces_first_underscore() {
        assert_eq!(ModuleId::SystemCommands.location(), "system-commands");
        assert_eq!(ModuleId::Projects.location(), "projects");
        assert_eq!(ModuleId::SystemCommands.dir_name(), "system_commands");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("healiora".parse::<ModuleId>(), Ok(ModuleId::Healiora));
        assert_eq!("System_Commands".parse::<ModuleId>(), Ok(ModuleId::SystemCommands));
        assert!("nope".parse::<ModuleId>().is_err());
    }

    #[test]
    fn test_mount_target_reset() {
        assert_eq!("RESET".parse::<MountTarget>(), Ok(MountTarget::Root));
        assert_eq!(
            "ACCESS".parse::<MountTarget>(),
            Ok(MountTarget::Module(ModuleId::Access))
        );
        assert_eq!(MountTarget::from(None), MountTarget::Root);
    }

    #[test]
    fn test_only_healiora_is_heavy() {
        let heavy: Vec<_> = ModuleId::ALL.into_iter().filter(|m| m.is_heavy()).collect();
        assert_eq!(heavy, vec![ModuleId::Healiora]);
    }
}
