//! Command execution system
//!
//! Applies a mapped [`Command`] to the session and reports what the user
//! should see. Handles:
//! - Navigation and editor listings
//! - Presets and resets
//! - Editor actions (rejections keep the previous state)
//! - Copying generated code with acknowledgement

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use toolbox_core::{EditorKind, GeneratedCode, Session};

use crate::clipboard::{ClipboardSink, CopyFeedback};
use crate::input::{CodePart, Command, HELP};

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to print
    pub output: String,
    /// Whether an editor state or the active editor changed
    pub state_changed: bool,
    /// Whether the HTML preview was explicitly requested
    pub preview_requested: bool,
    /// Whether the user asked to leave
    pub quit: bool,
}

impl CommandResult {
    fn message(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            state_changed: false,
            preview_requested: false,
            quit: false,
        }
    }

    fn changed(output: impl Into<String>) -> Self {
        Self {
            state_changed: true,
            ..Self::message(output)
        }
    }
}

/// Executes commands against a session
pub struct CommandSystem {
    ack: Duration,
    feedback: CopyFeedback,
}

impl CommandSystem {
    /// Create a command system whose copy acknowledgement lasts `ack`
    pub fn new(ack: Duration) -> Self {
        Self {
            ack,
            feedback: CopyFeedback::Idle,
        }
    }

    /// Copy feedback as seen at `now`
    pub fn feedback(&self, now: Instant) -> CopyFeedback {
        self.feedback.at(now)
    }

    /// Execute one command
    ///
    /// # Arguments
    /// * `session` - Session owning every editor state
    /// * `command` - The mapped command
    /// * `sink` - Where copies go
    /// * `now` - Current time, used for the copy acknowledgement
    pub fn execute(
        &mut self,
        session: &mut Session,
        command: Command,
        sink: &mut dyn ClipboardSink,
        now: Instant,
    ) -> CommandResult {
        match command {
            Command::Help => CommandResult::message(HELP),
            Command::Quit => CommandResult {
                quit: true,
                ..CommandResult::message("Bye")
            },
            Command::List => CommandResult::message(editor_list(session.active())),
            Command::Navigate(kind) => {
                session.navigate(kind);
                CommandResult::changed(format!("{} - {}", kind, kind.description()))
            }
            Command::Presets => {
                let names = session.presets().names_for(session.active());
                if names.is_empty() {
                    CommandResult::message(format!("{} has no presets", session.active()))
                } else {
                    CommandResult::message(names.join("\n"))
                }
            }
            Command::Preset(name) => match session.apply_preset(&name) {
                Ok(()) => CommandResult::changed(format!("Applied '{}'", name)),
                Err(e) => CommandResult::message(format!("Error: {}", e)),
            },
            Command::Reset => match session.reset_active() {
                Ok(()) => CommandResult::changed(format!("{} reset", session.active())),
                Err(e) => CommandResult::message(format!("Error: {}", e)),
            },
            Command::Show => CommandResult::message(render_code(&session.active_code())),
            Command::Copy(part) => self.copy(session, part, sink, now),
            Command::Preview => CommandResult {
                preview_requested: true,
                ..CommandResult::message("")
            },
            Command::Edit(action) => match session.dispatch(action) {
                Ok(()) => CommandResult::changed(render_code(&session.active_code())),
                Err(e) => CommandResult::message(format!("Error: {}", e)),
            },
        }
    }

    fn copy(
        &mut self,
        session: &Session,
        part: CodePart,
        sink: &mut dyn ClipboardSink,
        now: Instant,
    ) -> CommandResult {
        let code = session.active_code();
        let text = match part {
            CodePart::Css => code.css,
            CodePart::Html => match code.html {
                Some(html) => html,
                None => {
                    return CommandResult::message(format!("{} generates no HTML", session.active()))
                }
            },
        };
        self.feedback = CopyFeedback::copy(sink, &text, now, self.ack);
        match &self.feedback {
            CopyFeedback::Failed(msg) => CommandResult::message(format!("Error: {}", msg)),
            feedback => CommandResult::message(feedback.label()),
        }
    }
}

/// Sidebar listing with the active editor marked
pub fn editor_list(active: EditorKind) -> String {
    let mut out = String::new();
    for kind in EditorKind::ALL {
        let marker = if kind == active { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<14} /{:<13} {}",
            marker,
            kind.name(),
            kind.route(),
            kind.description()
        );
    }
    out.trim_end().to_string()
}

/// Generated code as printed to the terminal
pub fn render_code(code: &GeneratedCode) -> String {
    match &code.html {
        Some(html) => format!("/* HTML */\n{}\n\n/* CSS */\n{}", html, code.css),
        None => code.css.clone(),
    }
}
