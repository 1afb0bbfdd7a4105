//! Application systems
//!
//! Command execution and preview output, kept out of main.rs so they can
//! be tested without a terminal.

mod command;
mod preview;

pub use command::{editor_list, render_code, CommandResult, CommandSystem};
pub use preview::{PreviewError, PreviewSystem};
