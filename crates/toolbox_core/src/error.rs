//! Errors raised when an editor rejects an action

use std::fmt;

use toolbox_math::GeometryError;

use crate::editor::LayerId;

/// Reason an editor refused to apply an action.
///
/// A rejected action never changes state: the reducer returns this error and
/// the caller keeps the previous state value.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A value is outside its allowed range, non-finite or empty
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
    /// No layer (colour stop, shadow, keyframe) with this id
    UnknownLayer(LayerId),
    /// Removing would drop below the minimum number of layers
    MinimumLayers {
        what: &'static str,
        minimum: usize,
    },
    /// No preset with this name for the editor
    UnknownPreset(String),
    /// No layout template with this id
    UnknownTemplate(String),
    /// Shape parameters rejected by the geometry functions
    Geometry(GeometryError),
}

impl EditorError {
    /// Shorthand for [`EditorError::InvalidParameter`]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EditorError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

impl From<GeometryError> for EditorError {
    fn from(e: GeometryError) -> Self {
        EditorError::Geometry(e)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::InvalidParameter { field, reason } => {
                write!(f, "Invalid value for {}: {}", field, reason)
            }
            EditorError::UnknownLayer(id) => write!(f, "No layer with id {}", id),
            EditorError::MinimumLayers { what, minimum } => {
                write!(f, "At least {} {} must be kept", minimum, what)
            }
            EditorError::UnknownPreset(name) => write!(f, "Unknown preset: '{}'", name),
            EditorError::UnknownTemplate(id) => write!(f, "Unknown layout template: '{}'", id),
            EditorError::Geometry(e) => write!(f, "Geometry error: {}", e),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Geometry(e) => Some(e),
            _ => None,
        }
    }
}
