//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CSSTB_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;
use toolbox_core::{EditorError, EditorKind, ShapesState, WallWidth};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// 3D shape editor configuration
    #[serde(default)]
    pub shapes: ShapesConfig,
    /// Clipboard configuration
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    /// Preset library configuration
    #[serde(default)]
    pub presets: PresetsConfig,
    /// HTML preview configuration
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CSSTB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CSSTB_CLIPBOARD__PATH=out.css -> clipboard.path = "out.css"
        figment = figment.merge(Env::prefixed("CSSTB_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Route or alias of the editor shown first
    pub start_editor: String,
}

impl SessionConfig {
    /// The configured start editor, if the route is known
    pub fn start_kind(&self) -> Result<EditorKind, ConfigError> {
        EditorKind::from_route(&self.start_editor).ok_or_else(|| ConfigError {
            message: format!("unknown start editor '{}'", self.start_editor),
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_editor: "flexbox-grid".to_string(),
        }
    }
}

/// 3D shape editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// Segments used for cylinders and cones
    pub default_sides: u32,
    /// Wall segment width: `arc` or `chord`
    pub wall_width: String,
}

impl ShapesConfig {
    /// Build the initial shape editor state
    pub fn to_shapes_state(&self) -> Result<ShapesState, ConfigError> {
        let wall_width = WallWidth::from_name(&self.wall_width).ok_or_else(|| ConfigError {
            message: format!("unknown wall width mode '{}'", self.wall_width),
        })?;
        ShapesState::with_walls(self.default_sides, wall_width).map_err(ConfigError::from)
    }
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            default_sides: 20,
            wall_width: "arc".to_string(),
        }
    }
}

/// Where copied code goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Overwrite the file at `clipboard.path`
    File,
    /// Print to standard output
    Stdout,
    /// Copying is turned off
    Disabled,
}

/// Clipboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub backend: ClipboardBackend,
    /// Target file for the `file` backend
    pub path: String,
    /// How long the "Copied" acknowledgement lasts
    pub ack_millis: u64,
}

impl ClipboardConfig {
    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.ack_millis)
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            backend: ClipboardBackend::File,
            path: "clipboard.txt".to_string(),
            ack_millis: 2000,
        }
    }
}

/// Preset library configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetsConfig {
    /// RON library merged over the built-in presets
    pub library: Option<String>,
}

/// HTML preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Write a preview page after every change
    pub enabled: bool,
    /// Output path of the preview page
    pub path: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "preview.html".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<EditorError> for ConfigError {
    fn from(e: EditorError) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.shapes.default_sides, 20);
        assert_eq!(config.clipboard.ack_duration(), Duration::from_secs(2));
        assert_eq!(config.session.start_kind().unwrap(), EditorKind::FlexGrid);
        assert!(config.presets.library.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("start_editor"));
        assert!(toml.contains("ack_millis"));
        assert!(toml.contains("backend = \"file\""));
    }

    #[test]
    fn test_shapes_state_from_config() {
        let config = ShapesConfig {
            default_sides: 8,
            wall_width: "chord".to_string(),
        };
        let state = config.to_shapes_state().unwrap();
        assert_eq!(state.params.sides, 8);
        assert_eq!(state.params.wall_width, WallWidth::Chord);
    }

    #[test]
    fn test_bad_shapes_config_is_rejected() {
        let config = ShapesConfig {
            default_sides: 20,
            wall_width: "zigzag".to_string(),
        };
        let err = config.to_shapes_state().unwrap_err();
        assert!(err.to_string().contains("zigzag"));

        let config = ShapesConfig {
            default_sides: 2,
            wall_width: "arc".to_string(),
        };
        assert!(config.to_shapes_state().is_err());
    }

    #[test]
    fn test_unknown_start_editor() {
        let config = SessionConfig {
            start_editor: "spreadsheet".to_string(),
        };
        assert!(config.start_kind().is_err());
    }
}
