//! The session: every editor's state plus the active page
//!
//! The [`Session`] is the only mutable piece of the core. It owns one state
//! value per editor and swaps it for the reducer's result when an action is
//! accepted. Rejected actions are logged and leave the old state in place.

use crate::animation::{AnimationAction, AnimationState};
use crate::card::{CardAction, CardState};
use crate::editor::Editor;
use crate::error::EditorError;
use crate::flex_grid::{FlexGridAction, FlexGridState};
use crate::gradient::{GradientAction, GradientState};
use crate::layouts::{LayoutAction, LayoutsState, TEMPLATES};
use crate::navigation::EditorKind;
use crate::presets::PresetLibrary;
use crate::shadow::{ShadowAction, ShadowState};
use crate::shapes3d::{ShapesAction, ShapesState};
use crate::style::{GeneratedCode, Style};
use crate::transform3d::{Transform3dAction, Transform3dState};

/// An action addressed to one editor
#[derive(Clone, Debug, PartialEq)]
pub enum EditorAction {
    FlexGrid(FlexGridAction),
    Gradient(GradientAction),
    Shadow(ShadowAction),
    Animation(AnimationAction),
    Layout(LayoutAction),
    Transform(Transform3dAction),
    Shapes(ShapesAction),
    Card(CardAction),
}

impl EditorAction {
    /// The editor this action is for
    pub fn kind(&self) -> EditorKind {
        match self {
            EditorAction::FlexGrid(_) => EditorKind::FlexGrid,
            EditorAction::Gradient(_) => EditorKind::Gradients,
            EditorAction::Shadow(_) => EditorKind::BoxShadow,
            EditorAction::Animation(_) => EditorKind::Animations,
            EditorAction::Layout(_) => EditorKind::Layouts,
            EditorAction::Transform(_) => EditorKind::Transform3d,
            EditorAction::Shapes(_) => EditorKind::Shapes3d,
            EditorAction::Card(_) => EditorKind::CardMaker,
        }
    }
}

fn apply<E: Editor>(state: &mut E, action: E::Action) -> Result<(), EditorError> {
    *state = state.reduce(action)?;
    Ok(())
}

/// All editor states and the active editor
#[derive(Clone, Debug)]
pub struct Session {
    active: EditorKind,
    flex_grid: FlexGridState,
    gradient: GradientState,
    shadow: ShadowState,
    animation: AnimationState,
    layouts: LayoutsState,
    transform: Transform3dState,
    shapes: ShapesState,
    card: CardState,
    presets: PresetLibrary,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session on the first editor with the built-in presets
    pub fn new() -> Self {
        Self {
            active: EditorKind::ALL[0],
            flex_grid: FlexGridState::default(),
            gradient: GradientState::default(),
            shadow: ShadowState::default(),
            animation: AnimationState::default(),
            layouts: LayoutsState::default(),
            transform: Transform3dState::default(),
            shapes: ShapesState::default(),
            card: CardState::default(),
            presets: PresetLibrary::builtin(),
        }
    }

    /// Builder: start on another editor
    pub fn with_active(mut self, kind: EditorKind) -> Self {
        self.active = kind;
        self
    }

    /// Builder: replace the preset library
    pub fn with_presets(mut self, presets: PresetLibrary) -> Self {
        self.presets = presets;
        self
    }

    /// Builder: replace the initial shape editor state
    pub fn with_shapes(mut self, shapes: ShapesState) -> Self {
        self.shapes = shapes;
        self
    }

    /// The editor currently shown
    pub fn active(&self) -> EditorKind {
        self.active
    }

    /// Switch to another editor. Editor states are kept.
    pub fn navigate(&mut self, kind: EditorKind) {
        if kind != self.active {
            log::info!("Navigating from {} to {}", self.active, kind);
            self.active = kind;
        }
    }

    /// Apply an action to its editor.
    ///
    /// On rejection the editor keeps its previous state and the error is
    /// returned.
    pub fn dispatch(&mut self, action: EditorAction) -> Result<(), EditorError> {
        let kind = action.kind();
        log::debug!("Dispatching to {}: {:?}", kind, action);
        let result = match action {
            EditorAction::FlexGrid(a) => apply(&mut self.flex_grid, a),
            EditorAction::Gradient(a) => apply(&mut self.gradient, a),
            EditorAction::Shadow(a) => apply(&mut self.shadow, a),
            EditorAction::Animation(a) => apply(&mut self.animation, a),
            EditorAction::Layout(a) => apply(&mut self.layouts, a),
            EditorAction::Transform(a) => apply(&mut self.transform, a),
            EditorAction::Shapes(a) => apply(&mut self.shapes, a),
            EditorAction::Card(a) => apply(&mut self.card, a),
        };
        if let Err(e) = &result {
            log::warn!("{} rejected an update: {}", kind, e);
        }
        result
    }

    /// Apply the active editor's preset called `name`
    pub fn apply_preset(&mut self, name: &str) -> Result<(), EditorError> {
        let action = self
            .preset_action(name)
            .ok_or_else(|| EditorError::UnknownPreset(name.to_string()))?;
        self.dispatch(action)?;
        log::info!("Applied {} preset '{}'", self.active, name);
        Ok(())
    }

    fn preset_action(&self, name: &str) -> Option<EditorAction> {
        let p = &self.presets;
        match self.active {
            EditorKind::Gradients => p
                .gradient(name)
                .map(|preset| EditorAction::Gradient(GradientAction::ApplyPreset(preset.clone()))),
            EditorKind::BoxShadow => p
                .shadow(name)
                .map(|preset| EditorAction::Shadow(ShadowAction::ApplyPreset(preset.clone()))),
            EditorKind::Animations => p
                .animation(name)
                .map(|preset| EditorAction::Animation(AnimationAction::ApplyPreset(preset.clone()))),
            EditorKind::Transform3d => p
                .transform(name)
                .map(|preset| EditorAction::Transform(Transform3dAction::ApplyPreset(preset.clone()))),
            EditorKind::Shapes3d => p
                .shape(name)
                .map(|preset| EditorAction::Shapes(ShapesAction::ApplyPreset(preset.clone()))),
            EditorKind::CardMaker => p
                .card(name)
                .map(|preset| EditorAction::Card(CardAction::ApplyPreset(preset.clone()))),
            EditorKind::FlexGrid | EditorKind::Layouts => None,
        }
    }

    /// Reset the active editor to its defaults
    pub fn reset_active(&mut self) -> Result<(), EditorError> {
        let action = match self.active {
            EditorKind::FlexGrid => EditorAction::FlexGrid(FlexGridAction::Reset),
            EditorKind::Gradients => EditorAction::Gradient(GradientAction::Reset),
            EditorKind::BoxShadow => EditorAction::Shadow(ShadowAction::Reset),
            EditorKind::Animations => EditorAction::Animation(AnimationAction::Reset),
            EditorKind::Layouts => EditorAction::Layout(LayoutAction::Select(TEMPLATES[0].id.to_string())),
            EditorKind::Transform3d => EditorAction::Transform(Transform3dAction::Reset),
            EditorKind::Shapes3d => EditorAction::Shapes(ShapesAction::Reset),
            EditorKind::CardMaker => EditorAction::Card(CardAction::Reset),
        };
        self.dispatch(action)?;
        log::info!("Reset {}", self.active);
        Ok(())
    }

    /// Preview style of an editor
    pub fn style_of(&self, kind: EditorKind) -> Style {
        match kind {
            EditorKind::FlexGrid => self.flex_grid.derive_style(),
            EditorKind::Gradients => self.gradient.derive_style(),
            EditorKind::BoxShadow => self.shadow.derive_style(),
            EditorKind::Animations => self.animation.derive_style(),
            EditorKind::Layouts => self.layouts.derive_style(),
            EditorKind::Transform3d => self.transform.derive_style(),
            EditorKind::Shapes3d => self.shapes.derive_style(),
            EditorKind::CardMaker => self.card.derive_style(),
        }
    }

    /// Generated code of an editor
    pub fn code_of(&self, kind: EditorKind) -> GeneratedCode {
        match kind {
            EditorKind::FlexGrid => self.flex_grid.derive_code(),
            EditorKind::Gradients => self.gradient.derive_code(),
            EditorKind::BoxShadow => self.shadow.derive_code(),
            EditorKind::Animations => self.animation.derive_code(),
            EditorKind::Layouts => self.layouts.derive_code(),
            EditorKind::Transform3d => self.transform.derive_code(),
            EditorKind::Shapes3d => self.shapes.derive_code(),
            EditorKind::CardMaker => self.card.derive_code(),
        }
    }

    /// Preview style of the active editor
    pub fn active_style(&self) -> Style {
        self.style_of(self.active)
    }

    /// Generated code of the active editor
    pub fn active_code(&self) -> GeneratedCode {
        self.code_of(self.active)
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    pub fn flex_grid(&self) -> &FlexGridState {
        &self.flex_grid
    }

    pub fn gradient(&self) -> &GradientState {
        &self.gradient
    }

    pub fn shadow(&self) -> &ShadowState {
        &self.shadow
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn layouts(&self) -> &LayoutsState {
        &self.layouts
    }

    pub fn transform(&self) -> &Transform3dState {
        &self.transform
    }

    pub fn shapes(&self) -> &ShapesState {
        &self.shapes
    }

    pub fn card(&self) -> &CardState {
        &self.card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientKind;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.active(), EditorKind::FlexGrid);
        assert!(session.active_code().css.starts_with(".container {"));
    }

    #[test]
    fn test_dispatch_and_rejection() {
        let mut session = Session::new();
        session
            .dispatch(EditorAction::Gradient(GradientAction::SetKind(GradientKind::Radial)))
            .unwrap();
        let before = session.gradient().clone();
        let err = session
            .dispatch(EditorAction::Gradient(GradientAction::SetAngle(400.0)))
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidParameter { .. }));
        assert_eq!(session.gradient(), &before);
        assert_eq!(session.gradient().kind, GradientKind::Radial);
    }

    #[test]
    fn test_apply_preset_for_active_editor() {
        let mut session = Session::new().with_active(EditorKind::Transform3d);
        session.apply_preset("flip card").unwrap();
        assert_eq!(session.transform().values.rotate_y, 180.0);

        session.navigate(EditorKind::Layouts);
        assert_eq!(
            session.apply_preset("flip card"),
            Err(EditorError::UnknownPreset("flip card".to_string()))
        );
    }

    #[test]
    fn test_navigation_keeps_state() {
        let mut session = Session::new();
        session.navigate(EditorKind::CardMaker);
        session
            .dispatch(EditorAction::Card(CardAction::SetWidth(400.0)))
            .unwrap();
        session.navigate(EditorKind::Gradients);
        session.navigate(EditorKind::CardMaker);
        assert_eq!(session.card().width, 400.0);
        assert!(session.active_code().html.is_some());
    }

    #[test]
    fn test_reset_active() {
        let mut session = Session::new().with_active(EditorKind::Layouts);
        session
            .dispatch(EditorAction::Layout(LayoutAction::Select("masonry".into())))
            .unwrap();
        session.reset_active().unwrap();
        assert_eq!(session.layouts().selected().id, "holy-grail");
    }
}
