//! CSS Toolbox - visual CSS editors in the terminal
//!
//! Library side of the `css-toolbox` binary: configuration, clipboard
//! sinks, command mapping and the systems the read-eval loop drives.

pub mod config;
pub mod clipboard;
pub mod input;
pub mod systems;
pub mod app;

pub use app::{App, Turn};
