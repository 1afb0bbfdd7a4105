//! Preset library
//!
//! Named bundles of editor values. The built-in library ships with the
//! crate; extra libraries are RON files merged over it, where a preset
//! with the same name (ignoring case) replaces the built-in one.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::{self, AnimationPreset};
use crate::card::{self, CardPreset};
use crate::gradient::{self, GradientPreset};
use crate::navigation::EditorKind;
use crate::shadow::{self, ShadowPreset};
use crate::shapes3d::{self, ShapePreset};
use crate::transform3d::{self, TransformPreset};

/// Every preset, grouped by editor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    #[serde(default)]
    pub gradients: Vec<GradientPreset>,
    #[serde(default)]
    pub shadows: Vec<ShadowPreset>,
    #[serde(default)]
    pub animations: Vec<AnimationPreset>,
    #[serde(default)]
    pub transforms: Vec<TransformPreset>,
    #[serde(default)]
    pub shapes: Vec<ShapePreset>,
    #[serde(default)]
    pub cards: Vec<CardPreset>,
}

/// Items that carry a display name
trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),+) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })+
    };
}

impl_named!(
    GradientPreset,
    ShadowPreset,
    AnimationPreset,
    TransformPreset,
    ShapePreset,
    CardPreset
);

fn find<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    let name = name.trim();
    items.iter().find(|p| p.name().eq_ignore_ascii_case(name))
}

fn merge_into<T: Named>(base: &mut Vec<T>, extra: Vec<T>) {
    for preset in extra {
        match base
            .iter_mut()
            .find(|p| p.name().eq_ignore_ascii_case(preset.name()))
        {
            Some(slot) => *slot = preset,
            None => base.push(preset),
        }
    }
}

fn names<T: Named>(items: &[T]) -> Vec<&str> {
    items.iter().map(Named::name).collect()
}

impl PresetLibrary {
    /// An empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The presets shipped with the toolbox
    pub fn builtin() -> Self {
        Self {
            gradients: gradient::builtin_presets(),
            shadows: shadow::builtin_presets(),
            animations: animation::builtin_presets(),
            transforms: transform3d::builtin_presets(),
            shapes: shapes3d::builtin_presets(),
            cards: card::builtin_presets(),
        }
    }

    /// Load a library from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetLoadError> {
        let contents = fs::read_to_string(path)?;
        let library = ron::from_str(&contents)?;
        Ok(library)
    }

    /// Save the library to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add `other`'s presets, replacing same-named ones
    pub fn merge(&mut self, other: PresetLibrary) {
        merge_into(&mut self.gradients, other.gradients);
        merge_into(&mut self.shadows, other.shadows);
        merge_into(&mut self.animations, other.animations);
        merge_into(&mut self.transforms, other.transforms);
        merge_into(&mut self.shapes, other.shapes);
        merge_into(&mut self.cards, other.cards);
    }

    /// Total number of presets
    pub fn len(&self) -> usize {
        self.gradients.len()
            + self.shadows.len()
            + self.animations.len()
            + self.transforms.len()
            + self.shapes.len()
            + self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn gradient(&self, name: &str) -> Option<&GradientPreset> {
        find(&self.gradients, name)
    }

    pub fn shadow(&self, name: &str) -> Option<&ShadowPreset> {
        find(&self.shadows, name)
    }

    pub fn animation(&self, name: &str) -> Option<&AnimationPreset> {
        find(&self.animations, name)
    }

    pub fn transform(&self, name: &str) -> Option<&TransformPreset> {
        find(&self.transforms, name)
    }

    pub fn shape(&self, name: &str) -> Option<&ShapePreset> {
        find(&self.shapes, name)
    }

    pub fn card(&self, name: &str) -> Option<&CardPreset> {
        find(&self.cards, name)
    }

    /// Preset names offered by an editor, empty for editors without presets
    pub fn names_for(&self, kind: EditorKind) -> Vec<&str> {
        match kind {
            EditorKind::Gradients => names(&self.gradients),
            EditorKind::BoxShadow => names(&self.shadows),
            EditorKind::Animations => names(&self.animations),
            EditorKind::Transform3d => names(&self.transforms),
            EditorKind::Shapes3d => names(&self.shapes),
            EditorKind::CardMaker => names(&self.cards),
            EditorKind::FlexGrid | EditorKind::Layouts => Vec::new(),
        }
    }
}

/// Error loading a preset library
#[derive(Debug)]
pub enum PresetLoadError {
    /// IO error reading file
    Io(io::Error),
    /// RON parsing error
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for PresetLoadError {
    fn from(e: io::Error) -> Self {
        PresetLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PresetLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        PresetLoadError::Parse(e)
    }
}

impl std::fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetLoadError::Io(e) => write!(f, "IO error: {}", e),
            PresetLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PresetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetLoadError::Io(e) => Some(e),
            PresetLoadError::Parse(e) => Some(e),
        }
    }
}

/// Error saving a preset library
#[derive(Debug)]
pub enum PresetSaveError {
    /// IO error writing file
    Io(io::Error),
    /// RON serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for PresetSaveError {
    fn from(e: io::Error) -> Self {
        PresetSaveError::Io(e)
    }
}

impl From<ron::Error> for PresetSaveError {
    fn from(e: ron::Error) -> Self {
        PresetSaveError::Serialize(e)
    }
}

impl std::fmt::Display for PresetSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetSaveError::Io(e) => write!(f, "IO error: {}", e),
            PresetSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for PresetSaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_math::ShapeKind;

    #[test]
    fn test_builtin_counts() {
        let lib = PresetLibrary::builtin();
        assert_eq!(lib.gradients.len(), 8);
        assert_eq!(lib.shadows.len(), 8);
        assert_eq!(lib.animations.len(), 6);
        assert_eq!(lib.transforms.len(), 6);
        assert_eq!(lib.shapes.len(), 6);
        assert_eq!(lib.cards.len(), 6);
        assert_eq!(lib.len(), 40);
    }

    #[test]
    fn test_find_ignores_case() {
        let lib = PresetLibrary::builtin();
        assert!(lib.animation("slide in").is_some());
        assert!(lib.transform(" FLIP CARD ").is_some());
        assert!(lib.card("Holographic").is_none());
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let mut lib = PresetLibrary::builtin();
        let extra = PresetLibrary {
            shapes: vec![
                ShapePreset::new("pyramid", ShapeKind::Pyramid, 300.0, 400.0),
                ShapePreset::new("Tall Prism", ShapeKind::Prism, 120.0, 400.0),
            ],
            ..PresetLibrary::new()
        };
        lib.merge(extra);
        assert_eq!(lib.shapes.len(), 7);
        assert_eq!(lib.shape("Pyramid").map(|p| p.size), Some(300.0));
        assert_eq!(lib.names_for(EditorKind::Shapes3d).last(), Some(&"Tall Prism"));
    }

    #[test]
    fn test_names_for_editor_without_presets() {
        let lib = PresetLibrary::builtin();
        assert!(lib.names_for(EditorKind::Layouts).is_empty());
        assert_eq!(lib.names_for(EditorKind::Gradients).len(), 8);
    }

    #[test]
    fn test_ron_partial_library() {
        let text = r##"(
            gradients: [(name: "Mono", colors: ["#000000", "#ffffff"])],
        )"##;
        let lib: PresetLibrary = ron::from_str(text).unwrap();
        assert_eq!(lib.gradients.len(), 1);
        assert!(lib.shadows.is_empty());
    }

    #[test]
    fn test_ron_roundtrip() {
        let lib = PresetLibrary::builtin();
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        let text = ron::ser::to_string_pretty(&lib, pretty).unwrap();
        let back: PresetLibrary = ron::from_str(&text).unwrap();
        assert_eq!(back, lib);
    }
}
