//! 3D transform editor

use serde::{Deserialize, Serialize};
use toolbox_math::{css_number, TransformChain, TransformOp};

use crate::editor::{check_range, Axis, Editor};
use crate::error::EditorError;
use crate::style::{GeneratedCode, Style};

/// Rotation, translation, scale and perspective of the transformed element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3dValues {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    /// px, 0 disables perspective
    pub perspective: f64,
    /// Percent
    pub perspective_origin_x: f64,
    /// Percent
    pub perspective_origin_y: f64,
}

impl Default for Transform3dValues {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            perspective: 1000.0,
            perspective_origin_x: 50.0,
            perspective_origin_y: 50.0,
        }
    }
}

impl Transform3dValues {
    pub fn with_rotation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotate_x = x;
        self.rotate_y = y;
        self.rotate_z = z;
        self
    }

    pub fn with_translation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self.translate_z = z;
        self
    }

    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.scale_x = x;
        self.scale_y = y;
        self.scale_z = z;
        self
    }

    pub fn with_perspective(mut self, perspective: f64) -> Self {
        self.perspective = perspective;
        self
    }

    /// Translations, then rotations, then `scale3d`, skipping identity parts
    pub fn chain(&self) -> TransformChain {
        let mut chain = TransformChain::new();
        let parts = [
            (self.translate_x, TransformOp::TranslateX(self.translate_x)),
            (self.translate_y, TransformOp::TranslateY(self.translate_y)),
            (self.translate_z, TransformOp::TranslateZ(self.translate_z)),
            (self.rotate_x, TransformOp::RotateX(self.rotate_x)),
            (self.rotate_y, TransformOp::RotateY(self.rotate_y)),
            (self.rotate_z, TransformOp::RotateZ(self.rotate_z)),
        ];
        for (value, op) in parts {
            if value != 0.0 {
                chain.push(op);
            }
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 || self.scale_z != 1.0 {
            chain.push(TransformOp::Scale3d(self.scale_x, self.scale_y, self.scale_z));
        }
        chain
    }

    /// `perspective-origin` value
    pub fn perspective_origin(&self) -> String {
        format!(
            "{}% {}%",
            css_number(self.perspective_origin_x),
            css_number(self.perspective_origin_y)
        )
    }

    /// Check every value against the editor's slider ranges
    pub fn validate(&self) -> Result<(), EditorError> {
        check_range("rotate x", self.rotate_x, -180.0, 180.0)?;
        check_range("rotate y", self.rotate_y, -180.0, 180.0)?;
        check_range("rotate z", self.rotate_z, -180.0, 180.0)?;
        check_range("translate x", self.translate_x, -200.0, 200.0)?;
        check_range("translate y", self.translate_y, -200.0, 200.0)?;
        check_range("translate z", self.translate_z, -200.0, 200.0)?;
        check_range("scale x", self.scale_x, 0.1, 2.0)?;
        check_range("scale y", self.scale_y, 0.1, 2.0)?;
        check_range("scale z", self.scale_z, 0.1, 2.0)?;
        check_range("perspective", self.perspective, 0.0, 2000.0)?;
        check_range("perspective origin x", self.perspective_origin_x, 0.0, 100.0)?;
        check_range("perspective origin y", self.perspective_origin_y, 0.0, 100.0)?;
        Ok(())
    }
}

/// Named set of transform values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformPreset {
    pub name: String,
    pub values: Transform3dValues,
}

impl TransformPreset {
    pub fn new(name: &str, values: Transform3dValues) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }
}

/// Input events for the 3D transform editor
#[derive(Clone, Debug, PartialEq)]
pub enum Transform3dAction {
    /// Degrees, -180 to 180
    SetRotate(Axis, f64),
    /// px, -200 to 200
    SetTranslate(Axis, f64),
    /// 0.1 to 2
    SetScale(Axis, f64),
    SetPerspective(f64),
    SetPerspectiveOrigin { x: f64, y: f64 },
    SetPreserve3d(bool),
    SetBackfaceVisible(bool),
    ApplyPreset(TransformPreset),
    /// Restore the default values; the two toggles are kept
    Reset,
}

/// 3D transform editor state
#[derive(Clone, Debug, PartialEq)]
pub struct Transform3dState {
    pub values: Transform3dValues,
    pub preserve_3d: bool,
    pub backface_visible: bool,
}

impl Default for Transform3dState {
    fn default() -> Self {
        Self {
            values: Transform3dValues::default(),
            preserve_3d: true,
            backface_visible: true,
        }
    }
}

impl Transform3dState {
    /// `transform` value, `none` for the identity
    pub fn transform_string(&self) -> String {
        self.values.chain().to_string()
    }

    fn transform_style(&self) -> &'static str {
        if self.preserve_3d {
            "preserve-3d"
        } else {
            "flat"
        }
    }

    fn backface_visibility(&self) -> &'static str {
        if self.backface_visible {
            "visible"
        } else {
            "hidden"
        }
    }

    /// Style for the preview container holding the perspective
    pub fn container_style(&self) -> Style {
        Style::new()
            .with("perspective", format!("{}px", css_number(self.values.perspective)))
            .with("perspective-origin", self.values.perspective_origin())
    }
}

impl Editor for Transform3dState {
    type Action = Transform3dAction;

    fn reduce(&self, action: Transform3dAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        let v = &mut next.values;
        match action {
            Transform3dAction::SetRotate(axis, deg) => {
                let deg = check_range("rotate", deg, -180.0, 180.0)?;
                match axis {
                    Axis::X => v.rotate_x = deg,
                    Axis::Y => v.rotate_y = deg,
                    Axis::Z => v.rotate_z = deg,
                }
            }
            Transform3dAction::SetTranslate(axis, px) => {
                let px = check_range("translate", px, -200.0, 200.0)?;
                match axis {
                    Axis::X => v.translate_x = px,
                    Axis::Y => v.translate_y = px,
                    Axis::Z => v.translate_z = px,
                }
            }
            Transform3dAction::SetScale(axis, s) => {
                let s = check_range("scale", s, 0.1, 2.0)?;
                match axis {
                    Axis::X => v.scale_x = s,
                    Axis::Y => v.scale_y = s,
                    Axis::Z => v.scale_z = s,
                }
            }
            Transform3dAction::SetPerspective(p) => {
                v.perspective = check_range("perspective", p, 0.0, 2000.0)?
            }
            Transform3dAction::SetPerspectiveOrigin { x, y } => {
                v.perspective_origin_x = check_range("perspective origin x", x, 0.0, 100.0)?;
                v.perspective_origin_y = check_range("perspective origin y", y, 0.0, 100.0)?;
            }
            Transform3dAction::SetPreserve3d(on) => next.preserve_3d = on,
            Transform3dAction::SetBackfaceVisible(on) => next.backface_visible = on,
            Transform3dAction::ApplyPreset(preset) => {
                preset.values.validate()?;
                next.values = preset.values;
            }
            Transform3dAction::Reset => next.values = Transform3dValues::default(),
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        Style::new()
            .with("transform", self.transform_string())
            .with("transform-style", self.transform_style())
            .with("backface-visibility", self.backface_visibility())
    }

    fn derive_code(&self) -> GeneratedCode {
        let transform = self.transform_string();
        GeneratedCode::css(format!(
            "/* Container: the perspective goes on the parent */\n.container {{\n  perspective: {}px;\n  perspective-origin: {};\n}}\n\n/* Transformed element */\n.element {{\n  transform: {};\n  transform-style: {};\n  backface-visibility: {};\n  transition: transform 0.3s ease;\n}}\n\n/* Hover effect example */\n.element:hover {{\n  transform: {} translateZ(20px);\n}}",
            css_number(self.values.perspective),
            self.values.perspective_origin(),
            transform,
            self.transform_style(),
            self.backface_visibility(),
            transform
        ))
    }
}

/// The built-in transform presets
pub fn builtin_presets() -> Vec<TransformPreset> {
    let base = Transform3dValues::default;
    vec![
        TransformPreset::new("Flip Card", base().with_rotation(0.0, 180.0, 0.0)),
        TransformPreset::new(
            "Tilt Left",
            base()
                .with_rotation(0.0, -25.0, 0.0)
                .with_translation(0.0, 0.0, 50.0)
                .with_perspective(800.0),
        ),
        TransformPreset::new(
            "Pop Up",
            base()
                .with_rotation(-15.0, 0.0, 0.0)
                .with_translation(0.0, 0.0, 100.0)
                .with_scale(1.1, 1.1, 1.0)
                .with_perspective(1200.0),
        ),
        TransformPreset::new(
            "Isometric",
            base().with_rotation(45.0, -45.0, 0.0).with_perspective(0.0),
        ),
        TransformPreset::new(
            "Cube Face",
            base().with_rotation(-20.0, 30.0, 0.0).with_perspective(600.0),
        ),
        TransformPreset::new("Spin", base().with_rotation(0.0, 0.0, 45.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_none() {
        assert_eq!(Transform3dState::default().transform_string(), "none");
    }

    #[test]
    fn test_chain_order() {
        let state = Transform3dState::default()
            .reduce(Transform3dAction::SetRotate(Axis::Y, 30.0))
            .unwrap()
            .reduce(Transform3dAction::SetTranslate(Axis::Z, 50.0))
            .unwrap()
            .reduce(Transform3dAction::SetScale(Axis::X, 1.5))
            .unwrap();
        assert_eq!(
            state.transform_string(),
            "translateZ(50px) rotateY(30deg) scale3d(1.5, 1, 1)"
        );
    }

    #[test]
    fn test_pop_up_preset() {
        let pop = builtin_presets().into_iter().find(|p| p.name == "Pop Up").unwrap();
        let state = Transform3dState::default()
            .reduce(Transform3dAction::ApplyPreset(pop.clone()))
            .unwrap();
        assert_eq!(state.values, pop.values);
        assert_eq!(
            state.transform_string(),
            "translateZ(100px) rotateX(-15deg) scale3d(1.1, 1.1, 1)"
        );
        assert_eq!(state.container_style().get("perspective"), Some("1200px"));
    }

    #[test]
    fn test_isometric_admits_zero_perspective() {
        let iso = builtin_presets().into_iter().find(|p| p.name == "Isometric").unwrap();
        let state = Transform3dState::default()
            .reduce(Transform3dAction::ApplyPreset(iso))
            .unwrap();
        assert!(state.derive_code().css.contains("perspective: 0px;"));
    }

    #[test]
    fn test_reset_keeps_toggles() {
        let state = Transform3dState::default()
            .reduce(Transform3dAction::SetPreserve3d(false))
            .unwrap()
            .reduce(Transform3dAction::SetRotate(Axis::X, 10.0))
            .unwrap()
            .reduce(Transform3dAction::Reset)
            .unwrap();
        assert!(!state.preserve_3d);
        assert_eq!(state.values, Transform3dValues::default());
        assert_eq!(state.derive_style().get("transform-style"), Some("flat"));
    }

    #[test]
    fn test_code_contains_hover_rule() {
        let state = Transform3dState::default()
            .reduce(Transform3dAction::SetRotate(Axis::Z, 45.0))
            .unwrap();
        let css = state.derive_code().css;
        assert!(css.contains(".element:hover {\n  transform: rotateZ(45deg) translateZ(20px);\n}"));
        assert!(css.contains("perspective-origin: 50% 50%;"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let state = Transform3dState::default();
        assert!(state.reduce(Transform3dAction::SetRotate(Axis::X, 181.0)).is_err());
        assert!(state.reduce(Transform3dAction::SetScale(Axis::Y, 0.0)).is_err());
        assert!(state
            .reduce(Transform3dAction::SetPerspectiveOrigin { x: 50.0, y: 120.0 })
            .is_err());
    }
}
