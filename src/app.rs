//! The interactive application
//!
//! Ties the configuration, the editor session, the clipboard sink and the
//! preview writer together. One call to [`App::handle_line`] is one turn of
//! the read-eval loop.

use std::time::Instant;

use toolbox_core::{PresetLibrary, PresetValidator, Session};

use crate::clipboard::{sink_from_config, ClipboardSink};
use crate::config::AppConfig;
use crate::input::CommandMapper;
use crate::systems::{CommandSystem, PreviewSystem};

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Text to show the user
    pub output: String,
    /// Whether the loop should stop
    pub quit: bool,
}

/// Main application state
pub struct App {
    /// Session holding every editor
    session: Session,
    commands: CommandSystem,
    preview: PreviewSystem,
    sink: Box<dyn ClipboardSink>,
}

impl App {
    /// Build the application from a loaded configuration
    ///
    /// Invalid config values and unreadable preset files are logged and
    /// replaced by defaults.
    pub fn new(config: &AppConfig) -> Self {
        let sink = sink_from_config(&config.clipboard);
        Self::with_sink(config, sink)
    }

    /// Build the application with an explicit clipboard sink
    pub fn with_sink(config: &AppConfig, sink: Box<dyn ClipboardSink>) -> Self {
        let start = config.session.start_kind().unwrap_or_else(|e| {
            log::warn!("{}. Starting on the first editor.", e);
            toolbox_core::EditorKind::ALL[0]
        });

        let mut session = Session::new()
            .with_active(start)
            .with_presets(load_presets(config));

        match config.shapes.to_shapes_state() {
            Ok(shapes) => session = session.with_shapes(shapes),
            Err(e) => log::warn!("{}. Using default shape settings.", e),
        }

        Self {
            session,
            commands: CommandSystem::new(config.clipboard.ack_duration()),
            preview: PreviewSystem::new(&config.preview),
            sink,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt text showing the active editor and copy state
    pub fn prompt(&self, now: Instant) -> String {
        let feedback = self.commands.feedback(now);
        if feedback.is_copied() {
            format!("[{}] ({}) > ", self.session.active().route(), feedback.label())
        } else {
            format!("[{}] > ", self.session.active().route())
        }
    }

    /// Handle one input line at time `now`
    pub fn handle_line(&mut self, line: &str, now: Instant) -> Turn {
        let command = match CommandMapper::map_line(line, self.session.active()) {
            Ok(command) => command,
            Err(e) => {
                return Turn {
                    output: e.to_string(),
                    quit: false,
                }
            }
        };

        let result = self
            .commands
            .execute(&mut self.session, command, self.sink.as_mut(), now);

        let mut output = result.output;
        let written = if result.preview_requested {
            Some(self.preview.write(&self.session))
        } else if result.state_changed {
            self.preview.on_change(&self.session)
        } else {
            None
        };
        match written {
            Some(Ok(count)) if result.preview_requested => {
                output = format!("Preview written to {} ({} elements)", self.preview.path().display(), count);
            }
            Some(Err(e)) => {
                log::error!("{}", e);
                if !output.is_empty() {
                    output.push('\n');
                }
                output.push_str(&format!("Error: {}", e));
            }
            _ => {}
        }

        Turn {
            output,
            quit: result.quit,
        }
    }
}

/// Built-in presets merged with the configured library file
fn load_presets(config: &AppConfig) -> PresetLibrary {
    let mut presets = PresetLibrary::builtin();
    let Some(path) = &config.presets.library else {
        return presets;
    };

    match PresetLibrary::load(path) {
        Ok(extra) => {
            let issues = PresetValidator::validate(&extra);
            if issues.is_empty() {
                log::info!("Loaded {} presets from {}", extra.len(), path);
                presets.merge(extra);
            } else {
                for issue in &issues {
                    log::warn!("{}: {}", path, issue);
                }
                log::warn!("Ignoring preset library {} ({} issues)", path, issues.len());
            }
        }
        Err(e) => log::warn!("Failed to load presets from {}: {}", path, e),
    }
    presets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemorySink;
    use crate::config::PreviewConfig;
    use toolbox_core::EditorKind;

    fn quiet_config() -> AppConfig {
        AppConfig {
            preview: PreviewConfig {
                enabled: false,
                ..PreviewConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_start_editor_from_config() {
        let mut config = quiet_config();
        config.session.start_editor = "card".to_string();
        let app = App::with_sink(&config, Box::new(MemorySink::new()));
        assert_eq!(app.session().active(), EditorKind::CardMaker);
        assert_eq!(app.prompt(Instant::now()), "[card-maker] > ");
    }

    #[test]
    fn test_bad_start_editor_falls_back() {
        let mut config = quiet_config();
        config.session.start_editor = "nope".to_string();
        let app = App::with_sink(&config, Box::new(MemorySink::new()));
        assert_eq!(app.session().active(), EditorKind::FlexGrid);
    }

    #[test]
    fn test_prompt_shows_copy_ack() {
        let mut app = App::with_sink(&quiet_config(), Box::new(MemorySink::new()));
        let now = Instant::now();
        app.handle_line("copy", now);
        assert!(app.prompt(now).contains("Copied!"));
    }

    #[test]
    fn test_mapping_error_is_reported() {
        let mut app = App::with_sink(&quiet_config(), Box::new(MemorySink::new()));
        let turn = app.handle_line("dance", Instant::now());
        assert!(turn.output.contains("Unknown command"));
        assert!(!turn.quit);
    }
}
