//! Preset library validation
//!
//! Checks a [`PresetLibrary`] for presets that could never be applied, so a
//! broken user library is reported once at load time instead of failing
//! later when a preset is picked.

use std::collections::HashSet;

use crate::animation::{check_name, MIN_KEYFRAMES};
use crate::editor::{check_color, check_range};
use crate::error::EditorError;
use crate::gradient::MIN_STOPS;
use crate::navigation::EditorKind;
use crate::presets::PresetLibrary;

/// Problem found in a preset library
#[derive(Debug, Clone, PartialEq)]
pub enum PresetIssue {
    /// Two presets of one editor share a name (ignoring case)
    DuplicateName { editor: EditorKind, name: String },
    /// Gradient with fewer than two colours
    TooFewColors { name: String, count: usize },
    /// Shadow preset without layers
    EmptyShadow(String),
    /// Animation with fewer than two keyframes
    TooFewKeyframes { name: String, count: usize },
    /// A value the editor would reject
    InvalidValue {
        editor: EditorKind,
        name: String,
        error: EditorError,
    },
}

impl std::fmt::Display for PresetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetIssue::DuplicateName { editor, name } => {
                write!(f, "Duplicate {} preset name: '{}'", editor, name)
            }
            PresetIssue::TooFewColors { name, count } => write!(
                f,
                "Gradient preset '{}' has {} colour(s), at least {} required",
                name, count, MIN_STOPS
            ),
            PresetIssue::EmptyShadow(name) => write!(f, "Shadow preset '{}' has no layers", name),
            PresetIssue::TooFewKeyframes { name, count } => write!(
                f,
                "Animation preset '{}' has {} keyframe(s), at least {} required",
                name, count, MIN_KEYFRAMES
            ),
            PresetIssue::InvalidValue {
                editor,
                name,
                error,
            } => write!(f, "{} preset '{}': {}", editor, name, error),
        }
    }
}

impl std::error::Error for PresetIssue {}

/// Validator for preset libraries
pub struct PresetValidator;

fn duplicates<'a>(
    editor: EditorKind,
    names: impl Iterator<Item = &'a str>,
    issues: &mut Vec<PresetIssue>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.to_lowercase()) {
            issues.push(PresetIssue::DuplicateName {
                editor,
                name: name.to_string(),
            });
        }
    }
}

fn check(
    editor: EditorKind,
    name: &str,
    result: Result<(), EditorError>,
    issues: &mut Vec<PresetIssue>,
) {
    if let Err(error) = result {
        issues.push(PresetIssue::InvalidValue {
            editor,
            name: name.to_string(),
            error,
        });
    }
}

impl PresetValidator {
    /// Validate a library, returning every issue found
    pub fn validate(library: &PresetLibrary) -> Vec<PresetIssue> {
        let mut issues = Vec::new();

        duplicates(
            EditorKind::Gradients,
            library.gradients.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.gradients {
            if preset.colors.len() < MIN_STOPS {
                issues.push(PresetIssue::TooFewColors {
                    name: preset.name.clone(),
                    count: preset.colors.len(),
                });
            }
            for color in &preset.colors {
                check(
                    EditorKind::Gradients,
                    &preset.name,
                    check_color("stop color", color).map(|_| ()),
                    &mut issues,
                );
            }
        }

        duplicates(
            EditorKind::BoxShadow,
            library.shadows.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.shadows {
            if preset.layers.is_empty() {
                issues.push(PresetIssue::EmptyShadow(preset.name.clone()));
            }
            for layer in &preset.layers {
                check(EditorKind::BoxShadow, &preset.name, layer.validate(), &mut issues);
            }
        }

        duplicates(
            EditorKind::Animations,
            library.animations.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.animations {
            check(
                EditorKind::Animations,
                &preset.name,
                check_name(&preset.animation_name()).map(|_| ()),
                &mut issues,
            );
            if preset.keyframes.len() < MIN_KEYFRAMES {
                issues.push(PresetIssue::TooFewKeyframes {
                    name: preset.name.clone(),
                    count: preset.keyframes.len(),
                });
            }
            for keyframe in &preset.keyframes {
                check(EditorKind::Animations, &preset.name, keyframe.validate(), &mut issues);
            }
        }

        duplicates(
            EditorKind::Transform3d,
            library.transforms.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.transforms {
            check(EditorKind::Transform3d, &preset.name, preset.values.validate(), &mut issues);
        }

        duplicates(
            EditorKind::Shapes3d,
            library.shapes.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.shapes {
            check(EditorKind::Shapes3d, &preset.name, preset.validate(), &mut issues);
        }

        duplicates(
            EditorKind::CardMaker,
            library.cards.iter().map(|p| p.name.as_str()),
            &mut issues,
        );
        for preset in &library.cards {
            let result = check_color("background", &preset.background).and_then(|_| {
                check_range("blur", preset.blur, 0.0, 24.0).map(|_| ())
            });
            check(EditorKind::CardMaker, &preset.name, result, &mut issues);
        }

        issues
    }

    /// Validate and return `Err` with every issue when any is found
    pub fn validate_or_error(library: &PresetLibrary) -> Result<(), Vec<PresetIssue>> {
        let issues = Self::validate(library);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationPreset, KeyframeValues};
    use crate::gradient::GradientPreset;
    use crate::shadow::{Shadow, ShadowPreset};
    use crate::shapes3d::ShapePreset;
    use crate::transform3d::{Transform3dValues, TransformPreset};
    use toolbox_math::ShapeKind;

    #[test]
    fn test_builtin_library_is_valid() {
        assert_eq!(PresetValidator::validate(&PresetLibrary::builtin()), vec![]);
        assert!(PresetValidator::validate_or_error(&PresetLibrary::builtin()).is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let library = PresetLibrary {
            gradients: vec![
                GradientPreset::new("Dusk", &["#000", "#fff"]),
                GradientPreset::new("dusk", &["#111", "#eee"]),
            ],
            ..PresetLibrary::new()
        };
        assert_eq!(
            PresetValidator::validate(&library),
            vec![PresetIssue::DuplicateName {
                editor: EditorKind::Gradients,
                name: "dusk".to_string(),
            }]
        );
    }

    #[test]
    fn test_structural_issues() {
        let library = PresetLibrary {
            gradients: vec![GradientPreset::new("Solo", &["#000"])],
            shadows: vec![ShadowPreset::new("Nothing", vec![])],
            animations: vec![AnimationPreset::new("Still", vec![KeyframeValues::at(0.0)])],
            ..PresetLibrary::new()
        };
        let issues = PresetValidator::validate(&library);
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&PresetIssue::TooFewColors {
            name: "Solo".to_string(),
            count: 1
        }));
        assert!(issues.contains(&PresetIssue::EmptyShadow("Nothing".to_string())));
        assert!(issues.contains(&PresetIssue::TooFewKeyframes {
            name: "Still".to_string(),
            count: 1
        }));
    }

    #[test]
    fn test_out_of_range_values() {
        let library = PresetLibrary {
            shadows: vec![ShadowPreset::new(
                "Huge",
                vec![Shadow::new(0.0, 0.0, 500.0, 0.0, "black")],
            )],
            transforms: vec![TransformPreset::new(
                "Overturned",
                Transform3dValues::default().with_rotation(270.0, 0.0, 0.0),
            )],
            shapes: vec![ShapePreset::new("Flat", ShapeKind::Cube, 0.0, 200.0)],
            ..PresetLibrary::new()
        };
        let issues = PresetValidator::validate(&library);
        assert_eq!(issues.len(), 3);
        assert!(issues
            .iter()
            .all(|issue| matches!(issue, PresetIssue::InvalidValue { .. })));
        let text = issues[1].to_string();
        assert!(text.starts_with("3D Transform preset 'Overturned'"), "{}", text);
    }

    #[test]
    fn test_animation_name_must_be_an_identifier() {
        let keyframes = vec![KeyframeValues::at(0.0), KeyframeValues::at(100.0)];
        let library = PresetLibrary {
            animations: vec![
                AnimationPreset::new("Slow Fade In", keyframes.clone()),
                AnimationPreset::new("Drift Left", keyframes),
            ],
            ..PresetLibrary::new()
        };
        let issues = PresetValidator::validate(&library);
        assert_eq!(issues.len(), 1, "{:?}", issues);
        match &issues[0] {
            PresetIssue::InvalidValue { editor, name, error } => {
                assert_eq!(*editor, EditorKind::Animations);
                assert_eq!(name, "Slow Fade In");
                assert!(error.to_string().contains("slow-fade in"), "{}", error);
            }
            other => panic!("unexpected issue {:?}", other),
        }
    }
}
