//! 3D shape builder editor
//!
//! Wraps the face generators of `toolbox_math`: every change to the shape
//! parameters recomputes the face list, so the state always carries faces
//! that match its parameters.

use serde::{Deserialize, Serialize};
use toolbox_math::{
    compute_faces, css_number, Apex, Face, FaceSlot, Panel, ShapeKind, ShapeParameters,
    TransformOrigin, WallWidth,
};

use crate::editor::{check_color, check_range, Axis, Editor};
use crate::error::EditorError;
use crate::style::{GeneratedCode, Style};

/// Name of the auto-rotation keyframes
pub const ROTATE_ANIMATION: &str = "rotate-3d";

/// Fewest and most wall segments the editor accepts
pub const SIDES_RANGE: (u32, u32) = (3, 64);

/// One colour per face slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacePalette {
    pub front: String,
    pub back: String,
    pub right: String,
    pub left: String,
    pub top: String,
    pub bottom: String,
}

impl Default for FacePalette {
    fn default() -> Self {
        Self {
            front: "#3b82f6".to_string(),
            back: "#8b5cf6".to_string(),
            right: "#ec4899".to_string(),
            left: "#10b981".to_string(),
            top: "#f59e0b".to_string(),
            bottom: "#ef4444".to_string(),
        }
    }
}

impl FacePalette {
    /// Colour of a slot
    pub fn get(&self, slot: FaceSlot) -> &str {
        match slot {
            FaceSlot::Front => &self.front,
            FaceSlot::Back => &self.back,
            FaceSlot::Right => &self.right,
            FaceSlot::Left => &self.left,
            FaceSlot::Top => &self.top,
            FaceSlot::Bottom => &self.bottom,
        }
    }

    fn slot_mut(&mut self, slot: FaceSlot) -> &mut String {
        match slot {
            FaceSlot::Front => &mut self.front,
            FaceSlot::Back => &mut self.back,
            FaceSlot::Right => &mut self.right,
            FaceSlot::Left => &mut self.left,
            FaceSlot::Top => &mut self.top,
            FaceSlot::Bottom => &mut self.bottom,
        }
    }
}

/// A named shape kind with its dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapePreset {
    pub name: String,
    pub kind: ShapeKind,
    pub size: f64,
    pub depth: f64,
}

impl ShapePreset {
    pub fn new(name: &str, kind: ShapeKind, size: f64, depth: f64) -> Self {
        Self {
            name: name.to_string(),
            kind,
            size,
            depth,
        }
    }

    /// Check the dimensions against the editor's slider ranges
    pub fn validate(&self) -> Result<(), EditorError> {
        check_range("size", self.size, 100.0, 300.0)?;
        check_range("depth", self.depth, 100.0, 400.0)?;
        Ok(())
    }
}

/// Input events for the shape editor
#[derive(Clone, Debug, PartialEq)]
pub enum ShapesAction {
    SetKind(ShapeKind),
    /// px, 100 to 300
    SetSize(f64),
    /// px, 100 to 400
    SetDepth(f64),
    /// 3 to 64, used by cylinders and cones
    SetSides(u32),
    SetWallWidth(WallWidth),
    /// Degrees, -180 to 180
    SetRotate(Axis, f64),
    /// px, 200 to 2000
    SetPerspective(f64),
    SetFaceColor(FaceSlot, String),
    SetAutoRotate(bool),
    /// Replaces kind, size and depth only
    ApplyPreset(ShapePreset),
    /// Restore defaults; side count and wall width are kept
    Reset,
}

/// Shape editor state
#[derive(Clone, Debug, PartialEq)]
pub struct ShapesState {
    pub params: ShapeParameters,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub perspective: f64,
    pub palette: FacePalette,
    pub auto_rotate: bool,
    faces: Vec<Face>,
}

impl Default for ShapesState {
    fn default() -> Self {
        let params = ShapeParameters::default();
        let faces = compute_faces(&params).unwrap_or_default();
        Self {
            params,
            rotate_x: -20.0,
            rotate_y: 30.0,
            rotate_z: 0.0,
            perspective: 1000.0,
            palette: FacePalette::default(),
            auto_rotate: false,
            faces,
        }
    }
}

impl ShapesState {
    /// Start from the defaults with a different side count and wall width
    pub fn with_walls(sides: u32, wall_width: WallWidth) -> Result<Self, EditorError> {
        let mut state = Self::default();
        state.params.sides = check_sides(sides)?;
        state.params.wall_width = wall_width;
        state.recompute()?;
        Ok(state)
    }

    /// Faces for the current parameters
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn recompute(&mut self) -> Result<(), EditorError> {
        self.faces = compute_faces(&self.params)?;
        Ok(())
    }

    /// Orientation of the whole shape
    pub fn rotation_string(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            css_number(self.rotate_x),
            css_number(self.rotate_y),
            css_number(self.rotate_z)
        )
    }

    /// Height of the shape container
    fn container_height(&self) -> f64 {
        if self.params.kind == ShapeKind::Cube {
            self.params.size
        } else {
            self.params.depth
        }
    }

    /// `animation` value of the shape container
    pub fn animation(&self) -> String {
        if self.auto_rotate {
            format!("{} 10s linear infinite", ROTATE_ANIMATION)
        } else {
            "none".to_string()
        }
    }

    /// Style of the scene holding the perspective
    pub fn scene_style(&self) -> Style {
        Style::new().with("perspective", format!("{}px", css_number(self.perspective)))
    }

    /// Inline style of one face panel
    pub fn face_style(&self, face: &Face) -> Style {
        let color = self.palette.get(face.color);
        let mut style = Style::new().with("position", "absolute");
        match face.panel {
            Panel::Triangle { apex } => {
                let half = format!("{}px solid transparent", css_number(face.width / 2.0));
                let fill = format!("{}px solid {}", css_number(face.height), color);
                style.set("width", "0");
                style.set("height", "0");
                style.set("border-left", half.clone());
                style.set("border-right", half);
                match apex {
                    Apex::Up => style.set("border-bottom", fill),
                    Apex::Down => style.set("border-top", fill),
                }
            }
            Panel::Rect | Panel::Disc => {
                style.set("width", format!("{}px", css_number(face.width)));
                style.set("height", format!("{}px", css_number(face.height)));
                style.set("background", color);
                if face.panel == Panel::Disc {
                    style.set("border-radius", "50%");
                }
                if let Some(border) = &face.border {
                    style.set("border", border.as_str());
                }
            }
        }
        style.set("transform", face.transform.to_string());
        if face.origin != TransformOrigin::Center {
            style.set("transform-origin", face.origin.css());
        }
        style.set("opacity", css_number(face.opacity));
        style
    }

    /// Every face with its panel style
    pub fn face_styles(&self) -> Vec<(&Face, Style)> {
        self.faces.iter().map(|f| (f, self.face_style(f))).collect()
    }

    fn scene_css(&self) -> String {
        let mut blocks = vec![
            format!(
                ".scene {{\n  perspective: {}px;\n  width: 100%;\n  height: 100vh;\n  display: flex;\n  align-items: center;\n  justify-content: center;\n}}",
                css_number(self.perspective)
            ),
        ];
        let mut shape = format!(
            ".shape-3d {{\n  width: {}px;\n  height: {}px;\n  position: relative;\n  transform-style: preserve-3d;\n  transform: {};\n",
            css_number(self.params.size),
            css_number(self.container_height()),
            self.rotation_string()
        );
        if self.auto_rotate {
            shape.push_str(&format!("  animation: {};\n", self.animation()));
        }
        shape.push('}');
        blocks.push(shape);
        if let Some(keyframes) = self.rotate_keyframes() {
            blocks.push(keyframes);
        }
        blocks.join("\n\n")
    }

    /// The `@keyframes rotate-3d` rule, when auto-rotating
    pub fn rotate_keyframes(&self) -> Option<String> {
        if !self.auto_rotate {
            return None;
        }
        let x = css_number(self.rotate_x);
        let z = css_number(self.rotate_z);
        Some(format!(
            "@keyframes {} {{\n  from {{\n    transform: rotateX({}deg) rotateY(0deg) rotateZ({}deg);\n  }}\n  to {{\n    transform: rotateX({}deg) rotateY(360deg) rotateZ({}deg);\n  }}\n}}",
            ROTATE_ANIMATION, x, z, x, z
        ))
    }

    fn cube_css(&self) -> String {
        let size = css_number(self.params.size);
        let mut blocks = vec![format!(
            ".shape-3d .face {{\n  position: absolute;\n  width: {}px;\n  height: {}px;\n  opacity: 0.9;\n  border: 2px solid rgba(255,255,255,0.2);\n  display: flex;\n  align-items: center;\n  justify-content: center;\n  font-size: 24px;\n  font-weight: bold;\n  color: white;\n}}",
            size, size
        )];
        for face in &self.faces {
            blocks.push(format!(
                ".face.{} {{\n  background: {};\n  transform: {};\n}}",
                face.label,
                self.palette.get(face.color),
                face.transform
            ));
        }
        blocks.join("\n\n")
    }

    fn panel_css(&self) -> String {
        let mut blocks = vec![format!("/* {} */", self.params.kind.name().to_uppercase())];
        for face in &self.faces {
            blocks.push(self.face_style(face).to_rule(&format!(".face.{}", face.label)));
        }
        blocks.join("\n\n")
    }
}

fn check_sides(sides: u32) -> Result<u32, EditorError> {
    let (min, max) = SIDES_RANGE;
    if !(min..=max).contains(&sides) {
        return Err(EditorError::invalid(
            "sides",
            format!("{} is outside {}..={}", sides, min, max),
        ));
    }
    Ok(sides)
}

impl Editor for ShapesState {
    type Action = ShapesAction;

    fn reduce(&self, action: ShapesAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            ShapesAction::SetKind(kind) => next.params.kind = kind,
            ShapesAction::SetSize(s) => next.params.size = check_range("size", s, 100.0, 300.0)?,
            ShapesAction::SetDepth(d) => next.params.depth = check_range("depth", d, 100.0, 400.0)?,
            ShapesAction::SetSides(n) => next.params.sides = check_sides(n)?,
            ShapesAction::SetWallWidth(mode) => next.params.wall_width = mode,
            ShapesAction::SetRotate(axis, deg) => {
                let deg = check_range("rotate", deg, -180.0, 180.0)?;
                match axis {
                    Axis::X => next.rotate_x = deg,
                    Axis::Y => next.rotate_y = deg,
                    Axis::Z => next.rotate_z = deg,
                }
            }
            ShapesAction::SetPerspective(p) => {
                next.perspective = check_range("perspective", p, 200.0, 2000.0)?
            }
            ShapesAction::SetFaceColor(slot, color) => {
                *next.palette.slot_mut(slot) = check_color("face color", &color)?
            }
            ShapesAction::SetAutoRotate(on) => next.auto_rotate = on,
            ShapesAction::ApplyPreset(preset) => {
                preset.validate()?;
                next.params.kind = preset.kind;
                next.params.size = preset.size;
                next.params.depth = preset.depth;
            }
            ShapesAction::Reset => {
                let defaults = Self::default();
                next = Self {
                    params: ShapeParameters {
                        sides: next.params.sides,
                        wall_width: next.params.wall_width,
                        ..defaults.params
                    },
                    ..defaults
                };
            }
        }
        next.recompute()?;
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        Style::new()
            .with("width", format!("{}px", css_number(self.params.size)))
            .with("height", format!("{}px", css_number(self.container_height())))
            .with("position", "relative")
            .with("transform-style", "preserve-3d")
            .with("transform", self.rotation_string())
            .with("animation", self.animation())
    }

    fn derive_code(&self) -> GeneratedCode {
        let faces = match self.params.kind {
            ShapeKind::Cube => self.cube_css(),
            _ => self.panel_css(),
        };
        GeneratedCode::css(format!("{}\n\n{}", self.scene_css(), faces))
    }
}

/// The built-in shape presets
pub fn builtin_presets() -> Vec<ShapePreset> {
    vec![
        ShapePreset::new("Classic Cube", ShapeKind::Cube, 200.0, 200.0),
        ShapePreset::new("Pyramid", ShapeKind::Pyramid, 200.0, 200.0),
        ShapePreset::new("Prism", ShapeKind::Prism, 180.0, 250.0),
        ShapePreset::new("Cylinder", ShapeKind::Cylinder, 150.0, 200.0),
        ShapePreset::new("Cone", ShapeKind::Cone, 150.0, 200.0),
        ShapePreset::new("Octahedron", ShapeKind::Octahedron, 180.0, 180.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cube() {
        let state = ShapesState::default();
        assert_eq!(state.params.kind, ShapeKind::Cube);
        assert_eq!(state.faces().len(), 6);
        assert_eq!(
            state.derive_style().get("transform"),
            Some("rotateX(-20deg) rotateY(30deg) rotateZ(0deg)")
        );
        assert_eq!(state.derive_style().get("animation"), Some("none"));
    }

    #[test]
    fn test_cube_code() {
        let css = ShapesState::default().derive_code().css;
        assert!(css.starts_with(".scene {\n  perspective: 1000px;\n"));
        assert!(css.contains(".face.front {\n  background: #3b82f6;\n  transform: translateZ(100px);\n}"));
        assert!(css.contains(".face.back {\n  background: #8b5cf6;\n  transform: translateZ(-100px) rotateY(180deg);\n}"));
        assert!(css.contains(".face.bottom {\n  background: #ef4444;\n  transform: rotateX(-90deg) translateZ(100px);\n}"));
        assert!(!css.contains("@keyframes"));
    }

    #[test]
    fn test_auto_rotate_code() {
        let state = ShapesState::default()
            .reduce(ShapesAction::SetAutoRotate(true))
            .unwrap();
        let css = state.derive_code().css;
        assert!(css.contains("  animation: rotate-3d 10s linear infinite;\n}"));
        assert!(css.contains("to {\n    transform: rotateX(-20deg) rotateY(360deg) rotateZ(0deg);"));
    }

    #[test]
    fn test_cylinder_faces_follow_sides() {
        let state = ShapesState::default()
            .reduce(ShapesAction::SetKind(ShapeKind::Cylinder))
            .unwrap()
            .reduce(ShapesAction::SetSides(12))
            .unwrap();
        assert_eq!(state.faces().len(), 14);
        let css = state.derive_code().css;
        assert!(css.contains("/* CYLINDER */"));
        assert!(css.contains(".face.wall-11 {"));
        let (_, top) = &state.face_styles()[0];
        assert_eq!(top.get("border-radius"), Some("50%"));
    }

    #[test]
    fn test_triangle_panel_style() {
        let state = ShapesState::default()
            .reduce(ShapesAction::SetKind(ShapeKind::Pyramid))
            .unwrap();
        let (face, style) = &state.face_styles()[1];
        assert!(face.is_triangle());
        assert_eq!(style.get("width"), Some("0"));
        assert_eq!(style.get("border-left"), Some("100px solid transparent"));
        assert_eq!(style.get("border-bottom"), Some("200px solid #3b82f6"));
        assert_eq!(style.get("transform-origin"), Some("bottom center"));
    }

    #[test]
    fn test_preset_keeps_colors_and_rotation() {
        let state = ShapesState::default()
            .reduce(ShapesAction::SetFaceColor(FaceSlot::Front, "#000000".into()))
            .unwrap()
            .reduce(ShapesAction::ApplyPreset(ShapePreset::new(
                "Prism",
                ShapeKind::Prism,
                180.0,
                250.0,
            )))
            .unwrap();
        assert_eq!(state.params.kind, ShapeKind::Prism);
        assert_eq!(state.palette.front, "#000000");
        assert_eq!(state.rotate_y, 30.0);
        assert_eq!(state.faces().len(), 5);
    }

    #[test]
    fn test_reset_keeps_walls() {
        let state = ShapesState::with_walls(32, WallWidth::Chord)
            .unwrap()
            .reduce(ShapesAction::SetKind(ShapeKind::Cone))
            .unwrap()
            .reduce(ShapesAction::Reset)
            .unwrap();
        assert_eq!(state.params.kind, ShapeKind::Cube);
        assert_eq!(state.params.sides, 32);
        assert_eq!(state.params.wall_width, WallWidth::Chord);
    }

    #[test]
    fn test_rejections() {
        let state = ShapesState::default();
        assert!(state.reduce(ShapesAction::SetSize(50.0)).is_err());
        assert!(state.reduce(ShapesAction::SetSides(2)).is_err());
        assert!(state.reduce(ShapesAction::SetPerspective(100.0)).is_err());
        assert!(state
            .reduce(ShapesAction::SetFaceColor(FaceSlot::Top, " ".into()))
            .is_err());
        assert!(ShapesState::with_walls(65, WallWidth::ArcLength).is_err());
    }
}
