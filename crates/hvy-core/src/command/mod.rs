//! Command parsing.
//!
//! - [`parse_command`] turns terminal input into a [`CommandResult`]
//! - [`get_prompt`] formats the prompt for the current location

mod parser;
mod result;

pub use parser::{get_prompt, location, parse_command, Command};
pub use result::{CommandAction, CommandResult};
