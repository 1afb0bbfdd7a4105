//! Input handling module
//!
//! Maps typed command lines to shell commands and editor actions.

mod command_mapper;

pub use command_mapper::{CodePart, Command, CommandError, CommandMapper, HELP};
