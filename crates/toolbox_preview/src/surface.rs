//! Capabilities a rendering layer offers the core
//!
//! The core never draws anything itself. It hands styles, keyframe steps and
//! ready-made markup to whatever implements these traits.

use toolbox_core::{KeyframeStep, Style, TimingFunction};

/// Somewhere element styles can be applied.
///
/// Targets are `/`-separated paths naming nested preview elements, e.g.
/// `scene/shape/front`.
pub trait StyleSurface {
    /// Apply `style` to the element at `target`, replacing any earlier style
    fn apply_style(&mut self, target: &str, style: &Style);

    /// Show a fixed HTML fragment with its stylesheet
    fn apply_markup(&mut self, html: &str, css: &str) {
        let _ = (html, css);
    }

    /// Forget everything applied so far
    fn clear(&mut self) {}
}

/// Somewhere keyframe animations can be played
pub trait AnimationSurface {
    /// Play `steps` over `duration_ms` with the given easing
    fn apply_keyframe_animation(
        &mut self,
        steps: &[KeyframeStep],
        duration_ms: u64,
        timing: &TimingFunction,
    );
}

/// A call received by a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Style { target: String, style: Style },
    Markup { html: String, css: String },
    Animation {
        steps: Vec<KeyframeStep>,
        duration_ms: u64,
        timing: TimingFunction,
    },
    Clear,
}

/// Surface that only records what it was asked to do
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last style applied to `target`
    pub fn style_of(&self, target: &str) -> Option<&Style> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Style { target: t, style } if t == target => Some(style),
            _ => None,
        })
    }

    /// Targets in the order they were first styled
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for call in &self.calls {
            if let SurfaceCall::Style { target, .. } = call {
                if !targets.contains(&target.as_str()) {
                    targets.push(target);
                }
            }
        }
        targets
    }
}

impl StyleSurface for RecordingSurface {
    fn apply_style(&mut self, target: &str, style: &Style) {
        self.calls.push(SurfaceCall::Style {
            target: target.to_string(),
            style: style.clone(),
        });
    }

    fn apply_markup(&mut self, html: &str, css: &str) {
        self.calls.push(SurfaceCall::Markup {
            html: html.to_string(),
            css: css.to_string(),
        });
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }
}

impl AnimationSurface for RecordingSurface {
    fn apply_keyframe_animation(
        &mut self,
        steps: &[KeyframeStep],
        duration_ms: u64,
        timing: &TimingFunction,
    ) {
        self.calls.push(SurfaceCall::Animation {
            steps: steps.to_vec(),
            duration_ms,
            timing: *timing,
        });
    }
}
