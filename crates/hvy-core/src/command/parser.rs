//! Terminal command parser.
//!
//! Turns one line of input into a [`CommandResult`]. Parsing is pure: the
//! same input and current module always produce the same result.

use crate::config::{HELP_TEXT, PROMPT_HOST, PROMPT_USER};
use crate::models::{LogType, ModuleId};

use super::{CommandAction, CommandResult};

const ROOT_MESSAGE: &str = "Returning to SYSTEM_OVERVIEW";

// =============================================================================
// Command Enum
// =============================================================================

/// A recognized command word with its operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Cd(Option<&'a str>),
    Ls,
    Pwd,
    Help,
    Clear,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parse from the command word and its operands.
    ///
    /// `cd` consumes only its first operand; further operands are ignored.
    pub fn parse(name: &'a str, mut args: impl Iterator<Item = &'a str>) -> Self {
        match name.to_lowercase().as_str() {
            "cd" => Self::Cd(args.next()),
            "ls" => Self::Ls,
            "pwd" => Self::Pwd,
            "help" => Self::Help,
            "clear" => Self::Clear,
            _ => Self::Unknown(name),
        }
    }
}

// =============================================================================
// Alias Resolution
// =============================================================================

/// Where a `cd` operand points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CdTarget {
    Root,
    Module(ModuleId),
}

/// Resolve a `cd` operand through the alias table, case-insensitively.
fn resolve_alias(target: &str) -> Option<CdTarget> {
    let target = match target.to_lowercase().as_str() {
        "projects" => CdTarget::Module(ModuleId::Projects),
        "stack" | "dependencies" => CdTarget::Module(ModuleId::Stack),
        "experience" | "sys_logs" => CdTarget::Module(ModuleId::Experience),
        "system_commands" | "commands" => CdTarget::Module(ModuleId::SystemCommands),
        "healiora" => CdTarget::Module(ModuleId::Healiora),
        "access" | "connect" => CdTarget::Module(ModuleId::Access),
        "home" | "~" => CdTarget::Root,
        _ => return None,
    };
    Some(target)
}

// =============================================================================
// Parser
// =============================================================================

/// Parse one line of terminal input against the current module.
pub fn parse_command(input: &str, current: Option<ModuleId>) -> CommandResult {
    let mut words = input.split_whitespace();
    let Some(name) = words.next() else {
        return CommandResult::empty();
    };

    match Command::parse(name, words) {
        Command::Cd(target) => execute_cd(target, current),
        Command::Ls => CommandResult::ok(CommandAction::List, module_listing(), LogType::Info),
        Command::Pwd => CommandResult::ok(CommandAction::Pwd, location(current), LogType::Info),
        Command::Help => CommandResult::ok(CommandAction::Help, HELP_TEXT, LogType::Info),
        Command::Clear => {
            CommandResult::ok(CommandAction::Clear, "Terminal cleared", LogType::System)
        }
        Command::Unknown(name) => CommandResult::error(format!(
            "{}: command not found. Type 'help' for available commands.",
            name
        )),
    }
}

fn execute_cd(target: Option<&str>, current: Option<ModuleId>) -> CommandResult {
    let Some(target) = target else {
        return CommandResult::error("cd: missing operand. Usage: cd <module> or cd ..");
    };

    if target == ".." {
        return match current {
            None => CommandResult::error("Already at root directory"),
            Some(_) => CommandResult::navigate(None, ROOT_MESSAGE),
        };
    }

    match resolve_alias(target) {
        Some(CdTarget::Root) => CommandResult::navigate(None, ROOT_MESSAGE),
        Some(CdTarget::Module(id)) => {
            CommandResult::navigate(Some(id), format!("Navigating to {}...", id))
        }
        None => CommandResult::error(format!(
            "cd: {}: No such module. Type 'ls' to see available modules.",
            target
        )),
    }
}

/// Module directory names joined by two spaces.
fn module_listing() -> String {
    ModuleId::ALL
        .iter()
        .map(|m| m.dir_name())
        .collect::<Vec<_>>()
        .join("  ")
}

/// `~` at the root, `~/<location>` inside a module.
pub fn location(current: Option<ModuleId>) -> String {
    match current {
        None => "~".to_string(),
        Some(id) => format!("~/{}", id.location()),
    }
}

/// Terminal prompt for the current location: `system@hvy:<location>$`.
pub fn get_prompt(current: Option<ModuleId>) -> String {
    format!("{}@{}:{}$", PROMPT_USER, PROMPT_HOST, location(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "\t\n"] {
            let result = parse_command(input, None);
            assert_eq!(result, CommandResult::empty());
            assert!(!result.success);
            assert_eq!(result.message, "");
        }
    }

    #[test]
    fn test_cd_projects_from_root() {
        let result = parse_command("cd projects", None);
        assert!(result.success);
        assert_eq!(result.action, CommandAction::Navigate);
        assert_eq!(result.module, Some(ModuleId::Projects));
        assert_eq!(result.message, "Navigating to PROJECTS...");
        assert_eq!(result.kind, LogType::System);
    }

    #[test]
    fn test_cd_unknown_module() {
        let result = parse_command("cd nonexistent", None);
        assert!(!result.success);
        assert_eq!(result.action, CommandAction::None);
        assert_eq!(
            result.message,
            "cd: nonexistent: No such module. Type 'ls' to see available modules."
        );
        assert_eq!(result.kind, LogType::Error);
    }

    #[test]
    fn test_cd_missing_operand() {
        let result = parse_command("cd", Some(ModuleId::Stack));
        assert!(!result.success);
        assert_eq!(
            result.message,
            "cd: missing operand. Usage: cd <module> or cd .."
        );
        assert_eq!(result.kind, LogType::Error);
    }

    #[test]
    fn test_cd_parent() {
        let at_root = parse_command("cd ..", None);
        assert!(!at_root.success);
        assert_eq!(at_root.message, "Already at root directory");
        assert_eq!(at_root.kind, LogType::Error);

        for module in ModuleId::ALL {
            let result = parse_command("cd ..", Some(module));
            assert!(result.success);
            assert_eq!(result.action, CommandAction::Navigate);
            assert_eq!(result.module, None);
            assert_eq!(result.message, "Returning to SYSTEM_OVERVIEW");
            assert_eq!(result.kind, LogType::System);
        }
    }

    #[test]
    fn test_cd_aliases() {
        let cases = [
            ("projects", ModuleId::Projects),
            ("stack", ModuleId::Stack),
            ("dependencies", ModuleId::Stack),
            ("experience", ModuleId::Experience),
            ("sys_logs", ModuleId::Experience),
            ("system_commands", ModuleId::SystemCommands),
            ("commands", ModuleId::SystemCommands),
            ("healiora", ModuleId::Healiora),
            ("access", ModuleId::Access),
            ("connect", ModuleId::Access),
        ];
        for (alias, expected) in cases {
            let result = parse_command(&format!("cd {}", alias.to_uppercase()), None);
            assert_eq!(result.module, Some(expected), "alias {alias}");
            assert!(result.success);
        }
    }

    #[test]
    fn test_cd_home_aliases() {
        for target in ["home", "~", "HOME"] {
            let result = parse_command(&format!("cd {}", target), Some(ModuleId::Access));
            assert!(result.success);
            assert_eq!(result.module, None);
            assert_eq!(result.message, "Returning to SYSTEM_OVERVIEW");
        }
    }

    #[test]
    fn test_cd_ignores_extra_operands_and_whitespace() {
        let result = parse_command("   CD   stack   projects  ", None);
        assert_eq!(result.module, Some(ModuleId::Stack));
    }

    #[test]
    fn test_ls() {
        let result = parse_command("ls", Some(ModuleId::Healiora));
        assert!(result.success);
        assert_eq!(result.action, CommandAction::List);
        assert_eq!(
            result.message,
            "projects  stack  experience  system_commands  healiora  access"
        );
        assert_eq!(result.kind, LogType::Info);
    }

    #[test]
    fn test_pwd() {
        assert_eq!(parse_command("pwd", None).message, "~");
        let result = parse_command("pwd", Some(ModuleId::SystemCommands));
        assert_eq!(result.action, CommandAction::Pwd);
        assert_eq!(result.message, "~/system-commands");
    }

    #[test]
    fn test_help_and_clear() {
        let help = parse_command("HELP", None);
        assert_eq!(help.action, CommandAction::Help);
        assert!(help.message.contains('\n'));

        let clear = parse_command("clear", None);
        assert_eq!(clear.action, CommandAction::Clear);
        assert_eq!(clear.message, "Terminal cleared");
        assert_eq!(clear.kind, LogType::System);
    }

    #[test]
    fn test_unknown_command_echoes_as_typed() {
        let result = parse_command("Sudo rm -rf /", None);
        assert!(!result.success);
        assert_eq!(result.action, CommandAction::None);
        assert_eq!(
            result.message,
            "Sudo: command not found. Type 'help' for available commands."
        );
    }

    #[test]
    fn test_parse_is_pure() {
        let inputs = ["cd projects", "cd ..", "ls", "bogus", "", "pwd"];
        for input in inputs {
            for current in [None, Some(ModuleId::Projects)] {
                assert_eq!(parse_command(input, current), parse_command(input, current));
            }
        }
    }

    #[test]
    fn test_prompt() {
        assert_eq!(get_prompt(None), "system@hvy:~$");
        assert_eq!(
            get_prompt(Some(ModuleId::SystemCommands)),
            "system@hvy:~/system-commands$"
        );
    }
}
