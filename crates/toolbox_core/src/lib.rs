//! Editor state and code generation for the CSS Toolbox
//!
//! Every tool page is an [`Editor`]: an immutable state value, a reducer
//! that turns an action into the next state, and two pure projections, the
//! preview [`Style`] and the [`GeneratedCode`] the user copies.
//!
//! - [`FlexGridState`] - flexbox and grid containers
//! - [`GradientState`] - linear, radial and conic gradients
//! - [`ShadowState`] - layered box shadows
//! - [`AnimationState`] - keyframe animations
//! - [`LayoutsState`] - fixed page layout templates
//! - [`Transform3dState`] - 3D transforms with perspective
//! - [`ShapesState`] - pseudo-3D solids built from panels
//! - [`CardState`] - styled content cards
//!
//! [`Session`] holds all of them plus the active page, and
//! [`PresetLibrary`] the named presets they can apply.

mod keywords;
mod error;
mod style;
mod editor;
mod navigation;
pub mod gradient;
pub mod shadow;
pub mod animation;
pub mod transform3d;
pub mod flex_grid;
pub mod shapes3d;
pub mod card;
pub mod layouts;
mod presets;
mod preset_validator;
mod session;

pub use error::EditorError;
pub use style::{GeneratedCode, Style};
pub use editor::{check_color, check_range, Axis, Editor, LayerId};
pub use navigation::EditorKind;
pub use gradient::{GradientAction, GradientKind, GradientPreset, GradientState};
pub use shadow::{Shadow, ShadowAction, ShadowPreset, ShadowState};
pub use animation::{AnimationAction, AnimationPreset, AnimationState, KeyframeStep, TimingFunction};
pub use transform3d::{Transform3dAction, Transform3dState, Transform3dValues, TransformPreset};
pub use flex_grid::{DisplayMode, FlexGridAction, FlexGridState};
pub use shapes3d::{FacePalette, ShapePreset, ShapesAction, ShapesState};
pub use card::{CardAction, CardPreset, CardState, CardStyle, CardType};
pub use layouts::{LayoutAction, LayoutTemplate, LayoutsState};
pub use presets::{PresetLibrary, PresetLoadError, PresetSaveError};
pub use preset_validator::{PresetIssue, PresetValidator};
pub use session::{EditorAction, Session};

// Re-export the geometry types editors expose
pub use toolbox_math::{css_number, Face, FaceSlot, ShapeKind, ShapeParameters, WallWidth};
