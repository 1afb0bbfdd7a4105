//! Gradient editor: linear, radial and conic gradients built from colour stops

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use toolbox_math::css_number;

use crate::editor::{check_color, check_range, Editor, LayerId, LayerIds};
use crate::error::EditorError;
use crate::keywords::css_keywords;
use crate::style::{GeneratedCode, Style};

/// Fewest stops a gradient keeps
pub const MIN_STOPS: usize = 2;

css_keywords! {
    /// Gradient function
    pub enum GradientKind {
        Linear => "linear",
        Radial => "radial",
        Conic => "conic",
    }
}

/// A colour at a position along the gradient line
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub id: LayerId,
    pub color: String,
    /// Percentage, 0 to 100
    pub position: f64,
}

/// A named list of colours spread evenly from 0% to 100%
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientPreset {
    pub name: String,
    pub colors: Vec<String>,
}

impl GradientPreset {
    pub fn new(name: &str, colors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Stop positions: colour `i` of `n` sits at `i / (n - 1) * 100`
    pub fn positions(&self) -> Vec<f64> {
        let last = self.colors.len().saturating_sub(1).max(1) as f64;
        (0..self.colors.len())
            .map(|i| i as f64 / last * 100.0)
            .collect()
    }
}

/// Change to a single colour stop
#[derive(Clone, Debug, PartialEq)]
pub enum StopField {
    Color(String),
    Position(f64),
}

/// Input events for the gradient editor
#[derive(Clone, Debug, PartialEq)]
pub enum GradientAction {
    SetKind(GradientKind),
    /// Angle in degrees, 0 to 360 (linear and conic only)
    SetAngle(f64),
    /// Append a white stop at 50%
    AddStop,
    RemoveStop(LayerId),
    UpdateStop(LayerId, StopField),
    ApplyPreset(GradientPreset),
    /// Two random colours at 0% and 100% plus a random angle
    Randomize { seed: u64 },
    Reset,
}

/// Gradient editor state
#[derive(Clone, Debug, PartialEq)]
pub struct GradientState {
    pub kind: GradientKind,
    pub angle: f64,
    /// Stops in insertion order; output sorts them by position
    pub stops: Vec<ColorStop>,
    ids: LayerIds,
}

impl Default for GradientState {
    fn default() -> Self {
        let mut ids = LayerIds::after(0);
        let stops = [("#3b82f6", 0.0), ("#8b5cf6", 50.0), ("#ec4899", 100.0)]
            .into_iter()
            .map(|(color, position)| ColorStop {
                id: ids.next(),
                color: color.to_string(),
                position,
            })
            .collect();
        Self {
            kind: GradientKind::Linear,
            angle: 135.0,
            stops,
            ids,
        }
    }
}

impl GradientState {
    /// Stops ordered by position; equal positions keep insertion order
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    /// The CSS gradient function, e.g. `linear-gradient(135deg, #fff 0%, #000 100%)`
    pub fn gradient_string(&self) -> String {
        let stops = self
            .sorted_stops()
            .iter()
            .map(|s| format!("{} {}%", s.color, css_number(s.position)))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {})", css_number(self.angle), stops),
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
            GradientKind::Conic => format!("conic-gradient(from {}deg, {})", css_number(self.angle), stops),
        }
    }

    fn stop_mut(&mut self, id: LayerId) -> Result<&mut ColorStop, EditorError> {
        self.stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EditorError::UnknownLayer(id))
    }

    fn replace_stops(&mut self, stops: impl IntoIterator<Item = (String, f64)>) {
        let mut fresh = Vec::new();
        for (color, position) in stops {
            fresh.push(ColorStop {
                id: self.ids.next(),
                color,
                position,
            });
        }
        self.stops = fresh;
    }
}

/// Random `#rrggbb` colour
fn random_color(rng: &mut StdRng) -> String {
    format!("#{:06x}", rng.gen_range(0..0xff_ffffu32))
}

impl Editor for GradientState {
    type Action = GradientAction;

    fn reduce(&self, action: GradientAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            GradientAction::SetKind(kind) => next.kind = kind,
            GradientAction::SetAngle(angle) => {
                next.angle = check_range("angle", angle, 0.0, 360.0)?;
            }
            GradientAction::AddStop => {
                let id = next.ids.next();
                next.stops.push(ColorStop {
                    id,
                    color: "#ffffff".to_string(),
                    position: 50.0,
                });
            }
            GradientAction::RemoveStop(id) => {
                if !next.stops.iter().any(|s| s.id == id) {
                    return Err(EditorError::UnknownLayer(id));
                }
                if next.stops.len() <= MIN_STOPS {
                    return Err(EditorError::MinimumLayers {
                        what: "colour stops",
                        minimum: MIN_STOPS,
                    });
                }
                next.stops.retain(|s| s.id != id);
            }
            GradientAction::UpdateStop(id, field) => {
                let stop = next.stop_mut(id)?;
                match field {
                    StopField::Color(color) => stop.color = check_color("stop color", &color)?,
                    StopField::Position(position) => {
                        stop.position = check_range("stop position", position, 0.0, 100.0)?;
                    }
                }
            }
            GradientAction::ApplyPreset(preset) => {
                if preset.colors.len() < MIN_STOPS {
                    return Err(EditorError::invalid(
                        "preset colors",
                        format!("'{}' has fewer than {} colours", preset.name, MIN_STOPS),
                    ));
                }
                let colors = preset
                    .colors
                    .iter()
                    .map(|c| check_color("preset color", c))
                    .collect::<Result<Vec<_>, _>>()?;
                next.replace_stops(colors.into_iter().zip(preset.positions()));
            }
            GradientAction::Randomize { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                let first = random_color(&mut rng);
                let second = random_color(&mut rng);
                next.replace_stops([(first, 0.0), (second, 100.0)]);
                next.angle = f64::from(rng.gen_range(0..360u32));
            }
            GradientAction::Reset => {
                let defaults = GradientState::default();
                next.kind = defaults.kind;
                next.angle = defaults.angle;
                next.replace_stops(defaults.stops.into_iter().map(|s| (s.color, s.position)));
            }
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        Style::new().with("background", self.gradient_string())
    }

    fn derive_code(&self) -> GeneratedCode {
        GeneratedCode::css(format!(".element {{\n  background: {};\n}}", self.gradient_string()))
    }
}

/// The built-in gradient presets
pub fn builtin_presets() -> Vec<GradientPreset> {
    vec![
        GradientPreset::new("Sunset", &["#FF6B6B", "#FEC89A"]),
        GradientPreset::new("Ocean", &["#667eea", "#764ba2"]),
        GradientPreset::new("Forest", &["#11998e", "#38ef7d"]),
        GradientPreset::new("Fire", &["#f12711", "#f5af19"]),
        GradientPreset::new("Purple Dream", &["#8E2DE2", "#4A00E0"]),
        GradientPreset::new("Midnight", &["#232526", "#414345"]),
        GradientPreset::new("Aurora", &["#00C9FF", "#92FE9D"]),
        GradientPreset::new("Warm", &["#F953C6", "#B91D73"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradient_string() {
        let state = GradientState::default();
        assert_eq!(
            state.gradient_string(),
            "linear-gradient(135deg, #3b82f6 0%, #8b5cf6 50%, #ec4899 100%)"
        );
    }

    #[test]
    fn test_css_template() {
        let code = GradientState::default().derive_code();
        assert_eq!(
            code.css,
            ".element {\n  background: linear-gradient(135deg, #3b82f6 0%, #8b5cf6 50%, #ec4899 100%);\n}"
        );
        assert!(code.html.is_none());
    }

    #[test]
    fn test_radial_and_conic() {
        let state = GradientState::default();
        let radial = state.reduce(GradientAction::SetKind(GradientKind::Radial)).unwrap();
        assert!(radial.gradient_string().starts_with("radial-gradient(circle, #3b82f6 0%"));
        let conic = state
            .reduce(GradientAction::SetKind(GradientKind::Conic))
            .unwrap()
            .reduce(GradientAction::SetAngle(90.0))
            .unwrap();
        assert!(conic.gradient_string().starts_with("conic-gradient(from 90deg, "));
    }

    #[test]
    fn test_stops_sorted_by_position() {
        let state = GradientState::default();
        let first = state.stops[0].id;
        let moved = state
            .reduce(GradientAction::UpdateStop(first, StopField::Position(75.0)))
            .unwrap();
        assert_eq!(
            moved.gradient_string(),
            "linear-gradient(135deg, #8b5cf6 50%, #3b82f6 75%, #ec4899 100%)"
        );
    }

    #[test]
    fn test_add_and_remove_stops() {
        let state = GradientState::default().reduce(GradientAction::AddStop).unwrap();
        assert_eq!(state.stops.len(), 4);
        let added = state.stops[3].clone();
        assert_eq!(added.color, "#ffffff");
        assert_eq!(added.position, 50.0);

        let state = state.reduce(GradientAction::RemoveStop(added.id)).unwrap();
        let state = state.reduce(GradientAction::RemoveStop(state.stops[0].id)).unwrap();
        assert_eq!(state.stops.len(), 2);
        let err = state.reduce(GradientAction::RemoveStop(state.stops[0].id)).unwrap_err();
        assert!(matches!(err, EditorError::MinimumLayers { minimum: 2, .. }));
    }

    #[test]
    fn test_rejections_keep_state() {
        let state = GradientState::default();
        assert!(state.reduce(GradientAction::SetAngle(400.0)).is_err());
        assert!(state
            .reduce(GradientAction::UpdateStop(LayerId(99), StopField::Position(10.0)))
            .is_err());
        assert!(state
            .reduce(GradientAction::UpdateStop(state.stops[0].id, StopField::Color(String::new())))
            .is_err());
        assert_eq!(state, GradientState::default());
    }

    #[test]
    fn test_preset_spreads_colors() {
        let ocean = builtin_presets()
            .into_iter()
            .find(|p| p.name == "Ocean")
            .unwrap();
        let state = GradientState::default()
            .reduce(GradientAction::ApplyPreset(ocean.clone()))
            .unwrap();
        let colors: Vec<&str> = state.stops.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, ocean.colors);
        let positions: Vec<f64> = state.stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, [0.0, 100.0]);
        assert_eq!(state.angle, 135.0);
    }

    #[test]
    fn test_three_color_preset_positions() {
        let preset = GradientPreset::new("Tri", &["#000", "#888", "#fff"]);
        assert_eq!(preset.positions(), [0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let state = GradientState::default();
        let a = state.reduce(GradientAction::Randomize { seed: 7 }).unwrap();
        let b = state.reduce(GradientAction::Randomize { seed: 7 }).unwrap();
        assert_eq!(a.gradient_string(), b.gradient_string());
        assert_eq!(a.stops.len(), 2);
        assert_eq!(a.stops[0].position, 0.0);
        assert_eq!(a.stops[1].position, 100.0);
        assert!(a.angle >= 0.0 && a.angle < 360.0);
        assert!(a.stops.iter().all(|s| s.color.len() == 7 && s.color.starts_with('#')));
    }

    #[test]
    fn test_reset_restores_defaults_with_fresh_ids() {
        let state = GradientState::default()
            .reduce(GradientAction::SetAngle(10.0))
            .unwrap()
            .reduce(GradientAction::Reset)
            .unwrap();
        assert_eq!(state.gradient_string(), GradientState::default().gradient_string());
        assert!(state.stops.iter().all(|s| s.id.0 > 3));
    }
}
