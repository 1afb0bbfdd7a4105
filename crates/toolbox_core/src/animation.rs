//! Keyframe animation editor
//!
//! Holds the `animation-*` settings and a list of keyframes kept sorted by
//! percentage. Besides the CSS text it produces the ordered
//! [`KeyframeStep`] list a preview surface plays back.

use serde::{Deserialize, Serialize};
use toolbox_math::{css_number, TransformChain, TransformOp};

use crate::editor::{check_range, Editor, LayerId, LayerIds};
use crate::error::EditorError;
use crate::keywords::css_keywords;
use crate::style::{GeneratedCode, Style};

/// Fewest keyframes the editor keeps
pub const MIN_KEYFRAMES: usize = 2;

/// Name of the `@keyframes` rule the preview plays
pub const PREVIEW_ANIMATION: &str = "preview-animation";

css_keywords! {
    /// `animation-timing-function` choices
    pub enum TimingFunction {
        Linear => "linear",
        Ease => "ease",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        EaseInOut => "ease-in-out",
        /// Overshooting curve
        BackInOut => "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
    }
}

css_keywords! {
    /// `animation-direction` choices
    pub enum Direction {
        Normal => "normal",
        Reverse => "reverse",
        Alternate => "alternate",
        AlternateReverse => "alternate-reverse",
    }
}

css_keywords! {
    /// `animation-fill-mode` choices
    pub enum FillMode {
        None => "none",
        Forwards => "forwards",
        Backwards => "backwards",
        Both => "both",
    }
}

/// `animation-iteration-count`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationCount {
    Count(u32),
    Infinite,
}

impl IterationCount {
    /// CSS text
    pub fn css(self) -> String {
        match self {
            IterationCount::Count(n) => n.to_string(),
            IterationCount::Infinite => "infinite".to_string(),
        }
    }

    /// Parse `infinite` or a positive count
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("infinite") {
            return Some(IterationCount::Infinite);
        }
        value
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(IterationCount::Count)
    }
}

/// Values of one keyframe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeValues {
    pub percentage: f64,
    #[serde(default)]
    pub translate_x: f64,
    #[serde(default)]
    pub translate_y: f64,
    #[serde(default = "one")]
    pub scale: f64,
    #[serde(default)]
    pub rotate: f64,
    #[serde(default = "one")]
    pub opacity: f64,
}

fn one() -> f64 {
    1.0
}

impl KeyframeValues {
    /// A keyframe with no changes at `percentage`
    pub fn at(percentage: f64) -> Self {
        Self {
            percentage,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Transform functions for the values that differ from their defaults
    pub fn transform(&self) -> TransformChain {
        let mut chain = TransformChain::new();
        if self.translate_x != 0.0 {
            chain.push(TransformOp::TranslateX(self.translate_x));
        }
        if self.translate_y != 0.0 {
            chain.push(TransformOp::TranslateY(self.translate_y));
        }
        if self.scale != 1.0 {
            chain.push(TransformOp::Scale(self.scale));
        }
        if self.rotate != 0.0 {
            chain.push(TransformOp::Rotate(self.rotate));
        }
        chain
    }

    /// Check every value against the editor's slider ranges
    pub fn validate(&self) -> Result<(), EditorError> {
        check_range("percentage", self.percentage, 0.0, 100.0)?;
        check_range("translate x", self.translate_x, -100.0, 100.0)?;
        check_range("translate y", self.translate_y, -100.0, 100.0)?;
        check_range("scale", self.scale, 0.0, 2.0)?;
        check_range("rotate", self.rotate, 0.0, 360.0)?;
        check_range("opacity", self.opacity, 0.0, 1.0)?;
        Ok(())
    }

    /// One keyframe block of the `@keyframes` rule
    fn css_block(&self) -> String {
        let mut lines = Vec::new();
        let transform = self.transform();
        if !transform.is_empty() {
            lines.push(format!("transform: {};", transform));
        }
        if self.opacity != 1.0 {
            lines.push(format!("opacity: {};", css_number(self.opacity)));
        }
        let body = if lines.is_empty() {
            "/* no changes */".to_string()
        } else {
            lines.join("\n    ")
        };
        format!("  {}% {{\n    {}\n  }}", css_number(self.percentage), body)
    }
}

/// A keyframe with its layer id
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub id: LayerId,
    pub values: KeyframeValues,
}

/// One step handed to an animation surface
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStep {
    /// Position on the timeline, 0 to 1
    pub offset: f64,
    /// Transform text, `none` when nothing moves
    pub transform: String,
    pub opacity: f64,
}

/// The `animation-*` properties
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSettings {
    pub name: String,
    /// Seconds
    pub duration: f64,
    pub timing: TimingFunction,
    /// Seconds
    pub delay: f64,
    pub iterations: IterationCount,
    pub direction: Direction,
    pub fill_mode: FillMode,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            name: "myAnimation".to_string(),
            duration: 1.0,
            timing: TimingFunction::EaseInOut,
            delay: 0.0,
            iterations: IterationCount::Infinite,
            direction: Direction::Normal,
            fill_mode: FillMode::Forwards,
        }
    }
}

/// Named keyframe list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreset {
    pub name: String,
    pub keyframes: Vec<KeyframeValues>,
}

impl AnimationPreset {
    pub fn new(name: &str, keyframes: Vec<KeyframeValues>) -> Self {
        Self {
            name: name.to_string(),
            keyframes,
        }
    }

    /// Animation name the preset installs: lowercase, first space turned into `-`
    pub fn animation_name(&self) -> String {
        self.name.to_lowercase().replacen(' ', "-", 1)
    }
}

/// Change to a single keyframe
#[derive(Clone, Debug, PartialEq)]
pub enum KeyframeField {
    Percentage(f64),
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
    Rotate(f64),
    Opacity(f64),
}

/// Input events for the animation editor
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationAction {
    SetName(String),
    /// Seconds, 0.1 to 5; restarts playback
    SetDuration(f64),
    SetTiming(TimingFunction),
    /// Seconds, 0 to 5
    SetDelay(f64),
    SetIterations(IterationCount),
    SetDirection(Direction),
    SetFillMode(FillMode),
    SetPlaying(bool),
    TogglePlaying,
    Restart,
    /// Append a keyframe 25% after the last one (capped at 100%)
    AddKeyframe,
    RemoveKeyframe(LayerId),
    UpdateKeyframe(LayerId, KeyframeField),
    ApplyPreset(AnimationPreset),
    Reset,
}

/// Animation editor state
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub settings: AnimationSettings,
    /// Sorted by percentage
    pub keyframes: Vec<Keyframe>,
    pub playing: bool,
    /// Bumped whenever playback must start over
    pub restart_token: u64,
    ids: LayerIds,
}

impl Default for AnimationState {
    fn default() -> Self {
        let mut state = Self {
            settings: AnimationSettings::default(),
            keyframes: Vec::new(),
            playing: true,
            restart_token: 0,
            ids: LayerIds::after(0),
        };
        state.replace_keyframes(vec![
            KeyframeValues::at(0.0),
            KeyframeValues::at(50.0).with_scale(1.2).with_translate(0.0, -20.0),
            KeyframeValues::at(100.0),
        ]);
        state
    }
}

pub(crate) fn check_name(name: &str) -> Result<String, EditorError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditorError::invalid("animation name", "must not be empty"));
    }
    let valid = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(EditorError::invalid(
            "animation name",
            format!("'{}' is not a CSS identifier", name),
        ));
    }
    Ok(name.to_string())
}

impl AnimationState {
    fn sort_keyframes(&mut self) {
        self.keyframes
            .sort_by(|a, b| a.values.percentage.total_cmp(&b.values.percentage));
    }

    fn replace_keyframes(&mut self, values: Vec<KeyframeValues>) {
        let mut keyframes = Vec::with_capacity(values.len());
        for values in values {
            keyframes.push(Keyframe {
                id: self.ids.next(),
                values,
            });
        }
        self.keyframes = keyframes;
        self.sort_keyframes();
    }

    /// Ordered steps for an animation surface
    pub fn steps(&self) -> Vec<KeyframeStep> {
        self.keyframes
            .iter()
            .map(|k| KeyframeStep {
                offset: k.values.percentage / 100.0,
                transform: k.values.transform().to_string(),
                opacity: k.values.opacity,
            })
            .collect()
    }

    /// Duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        (self.settings.duration * 1000.0).round() as u64
    }

    /// The `animation` shorthand for the preview element, `none` while paused
    pub fn preview_animation(&self) -> String {
        if !self.playing {
            return "none".to_string();
        }
        let s = &self.settings;
        format!(
            "{} {}s {} {}s {} {} {}",
            PREVIEW_ANIMATION,
            css_number(s.duration),
            s.timing,
            css_number(s.delay),
            s.iterations.css(),
            s.direction,
            s.fill_mode
        )
    }

    /// The `@keyframes` rule under the configured name
    pub fn keyframes_css(&self) -> String {
        let blocks: Vec<String> = self.keyframes.iter().map(|k| k.values.css_block()).collect();
        format!("@keyframes {} {{\n{}\n}}", self.settings.name, blocks.join("\n"))
    }
}

impl Editor for AnimationState {
    type Action = AnimationAction;

    fn reduce(&self, action: AnimationAction) -> Result<Self, EditorError> {
        let mut next = self.clone();
        match action {
            AnimationAction::SetName(name) => next.settings.name = check_name(&name)?,
            AnimationAction::SetDuration(d) => {
                next.settings.duration = check_range("duration", d, 0.1, 5.0)?;
                next.restart_token += 1;
            }
            AnimationAction::SetTiming(t) => next.settings.timing = t,
            AnimationAction::SetDelay(d) => next.settings.delay = check_range("delay", d, 0.0, 5.0)?,
            AnimationAction::SetIterations(count) => {
                if count == IterationCount::Count(0) {
                    return Err(EditorError::invalid("iteration count", "must be at least 1"));
                }
                next.settings.iterations = count;
            }
            AnimationAction::SetDirection(d) => next.settings.direction = d,
            AnimationAction::SetFillMode(m) => next.settings.fill_mode = m,
            AnimationAction::SetPlaying(playing) => next.playing = playing,
            AnimationAction::TogglePlaying => next.playing = !next.playing,
            AnimationAction::Restart => next.restart_token += 1,
            AnimationAction::AddKeyframe => {
                let last = next
                    .keyframes
                    .last()
                    .map(|k| k.values.percentage)
                    .unwrap_or(0.0);
                let id = next.ids.next();
                next.keyframes.push(Keyframe {
                    id,
                    values: KeyframeValues::at((last + 25.0).min(100.0)),
                });
                next.sort_keyframes();
            }
            AnimationAction::RemoveKeyframe(id) => {
                if !next.keyframes.iter().any(|k| k.id == id) {
                    return Err(EditorError::UnknownLayer(id));
                }
                if next.keyframes.len() <= MIN_KEYFRAMES {
                    return Err(EditorError::MinimumLayers {
                        what: "keyframes",
                        minimum: MIN_KEYFRAMES,
                    });
                }
                next.keyframes.retain(|k| k.id != id);
            }
            AnimationAction::UpdateKeyframe(id, field) => {
                let keyframe = next
                    .keyframes
                    .iter_mut()
                    .find(|k| k.id == id)
                    .ok_or(EditorError::UnknownLayer(id))?;
                let v = &mut keyframe.values;
                match field {
                    KeyframeField::Percentage(p) => v.percentage = check_range("percentage", p, 0.0, 100.0)?,
                    KeyframeField::TranslateX(x) => v.translate_x = check_range("translate x", x, -100.0, 100.0)?,
                    KeyframeField::TranslateY(y) => v.translate_y = check_range("translate y", y, -100.0, 100.0)?,
                    KeyframeField::Scale(s) => v.scale = check_range("scale", s, 0.0, 2.0)?,
                    KeyframeField::Rotate(r) => v.rotate = check_range("rotate", r, 0.0, 360.0)?,
                    KeyframeField::Opacity(o) => v.opacity = check_range("opacity", o, 0.0, 1.0)?,
                }
                next.sort_keyframes();
            }
            AnimationAction::ApplyPreset(preset) => {
                if preset.keyframes.len() < MIN_KEYFRAMES {
                    return Err(EditorError::MinimumLayers {
                        what: "keyframes",
                        minimum: MIN_KEYFRAMES,
                    });
                }
                for values in &preset.keyframes {
                    values.validate()?;
                }
                next.settings.name = check_name(&preset.animation_name())?;
                next.replace_keyframes(preset.keyframes);
                next.restart_token += 1;
            }
            AnimationAction::Reset => {
                next.settings = AnimationSettings::default();
                next.replace_keyframes(vec![KeyframeValues::at(0.0), KeyframeValues::at(100.0)]);
                next.restart_token += 1;
            }
        }
        Ok(next)
    }

    fn derive_style(&self) -> Style {
        Style::new().with("animation", self.preview_animation())
    }

    fn derive_code(&self) -> GeneratedCode {
        let s = &self.settings;
        GeneratedCode::css(format!(
            "{}\n\n.animated-element {{\n  animation-name: {};\n  animation-duration: {}s;\n  animation-timing-function: {};\n  animation-delay: {}s;\n  animation-iteration-count: {};\n  animation-direction: {};\n  animation-fill-mode: {};\n}}",
            self.keyframes_css(),
            s.name,
            css_number(s.duration),
            s.timing,
            css_number(s.delay),
            s.iterations.css(),
            s.direction,
            s.fill_mode
        ))
    }
}

/// The built-in animation presets
pub fn builtin_presets() -> Vec<AnimationPreset> {
    let still = KeyframeValues::at;
    vec![
        AnimationPreset::new(
            "Bounce",
            vec![
                still(0.0),
                still(50.0).with_translate(0.0, -30.0).with_scale(1.1),
                still(100.0),
            ],
        ),
        AnimationPreset::new(
            "Fade In",
            vec![
                still(0.0).with_translate(0.0, 20.0).with_opacity(0.0),
                still(100.0),
            ],
        ),
        AnimationPreset::new(
            "Pulse",
            vec![still(0.0), still(50.0).with_scale(1.15), still(100.0)],
        ),
        AnimationPreset::new(
            "Shake",
            vec![
                still(0.0),
                still(25.0).with_translate(-10.0, 0.0),
                still(50.0).with_translate(10.0, 0.0),
                still(75.0).with_translate(-10.0, 0.0),
                still(100.0),
            ],
        ),
        AnimationPreset::new("Rotate", vec![still(0.0), still(100.0).with_rotate(360.0)]),
        AnimationPreset::new(
            "Slide In",
            vec![
                still(0.0).with_translate(-100.0, 0.0).with_opacity(0.0),
                still(100.0),
            ],
        ),
    ]
}
