//! Box-shadow editor: a stack of shadow layers on a rounded box

use serde::{Deserialize, Serialize};
use toolbox_math::css_number;

use crate::editor::{check_color, check_range, Editor, LayerId, LayerIds};
use crate::error::EditorError;
use crate::style::{GeneratedCode, Style};

/// Fewest layers the editor keeps
pub const MIN_LAYERS: usize = 1;

/// One `box-shadow` entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    #[serde(default)]
    pub inset: bool,
}

impl Shadow {
    pub fn new(x: f64, y: f64, blur: f64, spread: f64, color: &str) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            color: color.to_string(),
            inset: false,
        }
    }

    /// Builder: draw inside the box
    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    /// CSS text, e.g. `0px 10px 30px -5px rgba(59,130,246,0.4)`
    pub fn css(&self) -> String {
        format!(
            "{}{}px {}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            css_number(self.x),
            css_number(self.y),
            css_number(self.blur),
            css_number(self.spread),
            self.color
        )
    }

    /// Check every field against the editor's slider ranges
    pub fn validate(&self) -> Result<(), EditorError> {
        check_range("x", self.x, -50.0, 50.0)?;
        check_range("y", self.y, -50.0, 50.0)?;
        check_range("blur", self.blur, 0.0, 100.0)?;
        check_range("spread", self.spread, -50.0, 50.0)?;
        check_color("shadow color", &self.color)?;
        Ok(())
    }
}

/// A shadow with its layer id
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowLayer {
    pub id: LayerId,
    pub shadow: Shadow,
}

/// Named stack of shadows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowPreset {
    pub name: String,
    pub layers: Vec<Shadow>,
}

impl ShadowPreset {
    pub fn new(name: &str, layers: Vec<Shadow>) -> Self {
        Self {
            name: name.to_string(),
            layers,
        }
    }
}

/// Change to a single layer
#[derive(Clone, Debug, PartialEq)]
pub enum LayerField {
    X(f64),
    Y(f64),
    Blur(f64),
    Spread(f64),
    Color(String),
    Inset(bool),
}

/// Input events for the box-shadow editor
#[derive(Clone, Debug, PartialEq)]
pub enum ShadowAction {
    /// Append `0 4px 16px 0 rgba(0,0,0,0.2)`
    AddLayer,
    RemoveLayer(LayerId),
    UpdateLayer(LayerId, LayerField),
    SetBoxColor(String),
    /// Border radius in px, 0 to 100
    SetBorderRadius(f64),
    ApplyPreset(ShadowPreset),
    /// Back to a single default layer
    Reset,
}

/// Box-shadow editor state
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowState {
    pub layers: Vec<ShadowLayer>,
    pub box_color: String,
    pub border_radius: f64,
    ids: LayerIds,
}

fn primary_shadow() -> Shadow {
    Shadow::new(0.0, 10.0, 30.0, -5.0, "rgba(59,130,246,0.4)")
}

impl Default for ShadowState {
    fn default() -> Self {
        let mut ids = LayerIds::after(0);
        let layers = [primary_shadow(), Shadow::new(0.0, 20.0, 50.0, -10.0, "rgba(0,0,0,0.3)")]
            .into_iter()
            .map(|shadow| ShadowLayer { id: ids.next(), shadow })
            .collect();
        Self {
            layers,
            box_color: "#1a1a25".to_string(),
            border_radius: 16.0,
            ids,
        }
    }
}

impl ShadowState {
    fn shadow_list(&self, separator: &str) -> String {
        self.layers
            .iter()
            .map(|l| l.shadow.css())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The `box-shadow` value as printed in generated code (one layer per line)
    pub fn shadow_string(&self) -> String {
        self.shadow_list(",\n    ")
    }

    /// Shadows only, in layer order
    pub fn shadows(&self) -> Vec<&Shadow> {
        self.layers.iter().map(|l| &l.shadow).collect()
    }

    fn layer_mut(&mut self, id: LayerId) -> Result<&mut Shadow, EditorError> {
        self.layers
            .iter_mut()
            .find(|l| l.id == id)
            .map(|l| &mut l.shadow)
            .ok_or(EditorError::UnknownLayer(id))
    }

    fn replace_layers(&mut self, shadows: Vec<Shadow>) {
        let mut layers = Vec::with_capacity(shadows.len());
        for shadow in shadows {
            layers.push(ShadowLayer {
                id: self.ids.next(),
                shadow,
            });
        }
        self.layers = layers;
    }
}

impl Editor for ShadowState {
    type Action = ShadowAction;

    fn reduce(&self, action: ShadowAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            ShadowAction::AddLayer => {
                let id = next.ids.next();
                next.layers.push(ShadowLayer {
                    id,
                    shadow: Shadow::new(0.0, 4.0, 16.0, 0.0, "rgba(0,0,0,0.2)"),
                });
            }
            ShadowAction::RemoveLayer(id) => {
                if !next.layers.iter().any(|l| l.id == id) {
                    return Err(EditorError::UnknownLayer(id));
                }
                if next.layers.len() <= MIN_LAYERS {
                    return Err(EditorError::MinimumLayers {
                        what: "shadow layers",
                        minimum: MIN_LAYERS,
                    });
                }
                next.layers.retain(|l| l.id != id);
            }
            ShadowAction::UpdateLayer(id, field) => {
                let shadow = next.layer_mut(id)?;
                match field {
                    LayerField::X(v) => shadow.x = check_range("x", v, -50.0, 50.0)?,
                    LayerField::Y(v) => shadow.y = check_range("y", v, -50.0, 50.0)?,
                    LayerField::Blur(v) => shadow.blur = check_range("blur", v, 0.0, 100.0)?,
                    LayerField::Spread(v) => shadow.spread = check_range("spread", v, -50.0, 50.0)?,
                    LayerField::Color(c) => shadow.color = check_color("shadow color", &c)?,
                    LayerField::Inset(inset) => shadow.inset = inset,
                }
            }
            ShadowAction::SetBoxColor(color) => next.box_color = check_color("box color", &color)?,
            ShadowAction::SetBorderRadius(radius) => {
                next.border_radius = check_range("border radius", radius, 0.0, 100.0)?;
            }
            ShadowAction::ApplyPreset(preset) => {
                if preset.layers.len() < MIN_LAYERS {
                    return Err(EditorError::MinimumLayers {
                        what: "shadow layers",
                        minimum: MIN_LAYERS,
                    });
                }
                for shadow in &preset.layers {
                    shadow.validate()?;
                }
                next.replace_layers(preset.layers);
            }
            ShadowAction::Reset => {
                next.replace_layers(vec![primary_shadow()]);
                next.box_color = "#1a1a25".to_string();
                next.border_radius = 16.0;
            }
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        Style::new()
            .with("background", self.box_color.clone())
            .with("border-radius", format!("{}px", css_number(self.border_radius)))
            .with("box-shadow", self.shadow_list(", "))
    }

    fn derive_code(&self) -> GeneratedCode {
        GeneratedCode::css(format!(
            ".element {{\n  box-shadow: {};\n  border-radius: {}px;\n  background: {};\n}}",
            self.shadow_string(),
            css_number(self.border_radius),
            self.box_color
        ))
    }
}

/// The built-in shadow presets
pub fn builtin_presets() -> Vec<ShadowPreset> {
    vec![
        ShadowPreset::new("Subtle", vec![Shadow::new(0.0, 2.0, 8.0, 0.0, "rgba(0,0,0,0.1)")]),
        ShadowPreset::new("Medium", vec![Shadow::new(0.0, 4.0, 20.0, 0.0, "rgba(0,0,0,0.15)")]),
        ShadowPreset::new("Large", vec![Shadow::new(0.0, 25.0, 50.0, -12.0, "rgba(0,0,0,0.25)")]),
        ShadowPreset::new("Glow Blue", vec![Shadow::new(0.0, 0.0, 30.0, 5.0, "rgba(59,130,246,0.4)")]),
        ShadowPreset::new(
            "Layered",
            vec![
                Shadow::new(0.0, 2.0, 4.0, 0.0, "rgba(0,0,0,0.1)"),
                Shadow::new(0.0, 8.0, 16.0, 0.0, "rgba(0,0,0,0.1)"),
                Shadow::new(0.0, 24.0, 48.0, 0.0, "rgba(0,0,0,0.1)"),
            ],
        ),
        ShadowPreset::new(
            "Neumorphism",
            vec![
                Shadow::new(8.0, 8.0, 16.0, 0.0, "rgba(0,0,0,0.25)"),
                Shadow::new(-8.0, -8.0, 16.0, 0.0, "rgba(255,255,255,0.03)"),
            ],
        ),
        ShadowPreset::new("Inset", vec![Shadow::new(0.0, 4.0, 12.0, 0.0, "rgba(0,0,0,0.4)").inset()]),
        ShadowPreset::new("Hard", vec![Shadow::new(6.0, 6.0, 0.0, 0.0, "rgba(59,130,246,0.8)")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer_string() {
        assert_eq!(primary_shadow().css(), "0px 10px 30px -5px rgba(59,130,246,0.4)");
        assert_eq!(
            Shadow::new(0.0, 4.0, 12.0, 0.0, "rgba(0,0,0,0.4)").inset().css(),
            "inset 0px 4px 12px 0px rgba(0,0,0,0.4)"
        );
    }

    #[test]
    fn test_default_css() {
        let code = ShadowState::default().derive_code();
        assert_eq!(
            code.css,
            ".element {\n  box-shadow: 0px 10px 30px -5px rgba(59,130,246,0.4),\n    0px 20px 50px -10px rgba(0,0,0,0.3);\n  border-radius: 16px;\n  background: #1a1a25;\n}"
        );
    }

    #[test]
    fn test_preview_joins_on_one_line() {
        let style = ShadowState::default().derive_style();
        assert_eq!(
            style.get("box-shadow"),
            Some("0px 10px 30px -5px rgba(59,130,246,0.4), 0px 20px 50px -10px rgba(0,0,0,0.3)")
        );
        assert_eq!(style.get("border-radius"), Some("16px"));
    }

    #[test]
    fn test_keeps_one_layer() {
        let state = ShadowState::default().reduce(ShadowAction::Reset).unwrap();
        assert_eq!(state.layers.len(), 1);
        let only = state.layers[0].id;
        let err = state.reduce(ShadowAction::RemoveLayer(only)).unwrap_err();
        assert_eq!(
            err,
            EditorError::MinimumLayers {
                what: "shadow layers",
                minimum: 1
            }
        );
    }

    #[test]
    fn test_add_and_update_layer() {
        let state = ShadowState::default().reduce(ShadowAction::AddLayer).unwrap();
        let id = state.layers[2].id;
        assert_eq!(state.layers[2].shadow.css(), "0px 4px 16px 0px rgba(0,0,0,0.2)");
        let state = state
            .reduce(ShadowAction::UpdateLayer(id, LayerField::Inset(true)))
            .unwrap()
            .reduce(ShadowAction::UpdateLayer(id, LayerField::Blur(40.0)))
            .unwrap();
        assert_eq!(state.layers[2].shadow.css(), "inset 0px 4px 40px 0px rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let state = ShadowState::default();
        let id = state.layers[0].id;
        assert!(state.reduce(ShadowAction::UpdateLayer(id, LayerField::X(51.0))).is_err());
        assert!(state.reduce(ShadowAction::UpdateLayer(id, LayerField::Blur(-1.0))).is_err());
        assert!(state.reduce(ShadowAction::SetBorderRadius(101.0)).is_err());
    }

    #[test]
    fn test_preset_round_trip() {
        for preset in builtin_presets() {
            let state = ShadowState::default()
                .reduce(ShadowAction::ApplyPreset(preset.clone()))
                .unwrap();
            let shadows: Vec<Shadow> = state.shadows().into_iter().cloned().collect();
            assert_eq!(shadows, preset.layers, "preset {}", preset.name);
        }
    }

    #[test]
    fn test_empty_preset_rejected() {
        let empty = ShadowPreset::new("Nothing", Vec::new());
        assert!(ShadowState::default().reduce(ShadowAction::ApplyPreset(empty)).is_err());
    }
}
