//! The editor abstraction shared by every tool page
//!
//! Each tool is an immutable state record plus a pure reducer. Deriving the
//! preview style and the generated code are pure projections of the state.

use std::fmt;

use crate::error::EditorError;
use crate::style::{GeneratedCode, Style};

/// An editor state record.
///
/// `reduce` returns the next state, or an error when the action is rejected.
/// Rejected actions leave `self` untouched.
pub trait Editor: Clone {
    /// Input events this editor understands
    type Action;

    /// Apply an action, producing the next state
    fn reduce(&self, action: Self::Action) -> Result<Self, EditorError>;

    /// Styling for the preview element
    fn derive_style(&self) -> Style;

    /// CSS (and optional HTML) the user copies
    fn derive_code(&self) -> GeneratedCode;
}

/// Identifier of a layer inside an editor (colour stop, shadow, keyframe).
///
/// Ids are handed out sequentially per editor and never reused within a
/// state's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id source carried inside a state record
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LayerIds {
    next: u64,
}

impl LayerIds {
    /// Start handing out ids after `used` ids already taken
    pub(crate) fn after(used: usize) -> Self {
        Self { next: used as u64 + 1 }
    }

    pub(crate) fn next(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next += 1;
        id
    }
}

/// One of the three spatial axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse `x`, `y` or `z`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Require a finite value inside `[min, max]`
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, EditorError> {
    if !value.is_finite() {
        return Err(EditorError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < min || value > max {
        return Err(EditorError::invalid(
            field,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(value)
}

/// Require a non-empty colour (or other free-form CSS value) and trim it
pub fn check_color(field: &'static str, value: &str) -> Result<String, EditorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EditorError::invalid(field, "must not be empty"));
    }
    if trimmed.contains(&[';', '{', '}'][..]) {
        return Err(EditorError::invalid(field, format!("'{}' is not a CSS value", trimmed)));
    }
    Ok(trimmed.to_string())
}
