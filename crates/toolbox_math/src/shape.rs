//! Shape parameters and face descriptors for pseudo-3D CSS solids
//!
//! A solid is approximated by flat panels (`div`s) positioned in 3D with a
//! transform chain each. This module holds the shared data types; the
//! per-solid generators live in their own modules and are reached through
//! [`compute_faces`].

use serde::{Deserialize, Serialize};

use crate::error::{positive, side_count, GeometryError};
use crate::transform::{Rotation3, TransformChain};
use crate::Vec3;

/// Number of wall segments used for curved solids when none is given
pub const DEFAULT_SIDES: u32 = 20;

/// Kind of solid to build
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Pyramid,
    Prism,
    Cylinder,
    Cone,
    Octahedron,
}

impl ShapeKind {
    /// Every kind, in menu order
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cube,
        ShapeKind::Pyramid,
        ShapeKind::Prism,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Octahedron,
    ];

    /// Lowercase identifier
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Prism => "prism",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Octahedron => "octahedron",
        }
    }

    /// Look a kind up by its identifier (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Whether the solid is built from a ring of wall segments
    pub fn is_revolved(self) -> bool {
        matches!(self, ShapeKind::Cylinder | ShapeKind::Cone)
    }
}

/// One of the six colour slots a face can reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceSlot {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl FaceSlot {
    /// Every slot, in palette order
    pub const ALL: [FaceSlot; 6] = [
        FaceSlot::Front,
        FaceSlot::Back,
        FaceSlot::Right,
        FaceSlot::Left,
        FaceSlot::Top,
        FaceSlot::Bottom,
    ];

    /// Lowercase identifier
    pub fn name(self) -> &'static str {
        match self {
            FaceSlot::Front => "front",
            FaceSlot::Back => "back",
            FaceSlot::Right => "right",
            FaceSlot::Left => "left",
            FaceSlot::Top => "top",
            FaceSlot::Bottom => "bottom",
        }
    }

    /// Look a slot up by its identifier (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(name))
    }

    /// Position of this slot in [`FaceSlot::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which way a triangular panel points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Apex {
    Up,
    Down,
}

/// The outline of a panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    /// Plain rectangle
    Rect,
    /// Rectangle with fully rounded corners
    Disc,
    /// Triangle drawn with the zero-size border trick
    Triangle { apex: Apex },
}

/// Point of the panel its transform chain pivots around
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformOrigin {
    #[default]
    Center,
    TopCenter,
    BottomCenter,
}

impl TransformOrigin {
    /// CSS `transform-origin` value
    pub fn css(self) -> &'static str {
        match self {
            TransformOrigin::Center => "center",
            TransformOrigin::TopCenter => "top center",
            TransformOrigin::BottomCenter => "bottom center",
        }
    }
}

/// How wide each wall segment of a curved solid is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallWidth {
    /// `2πr / sides`: the arc length of one segment. Segments overlap slightly.
    #[default]
    ArcLength,
    /// `2r·sin(π / sides)`: the chord of one segment. Segments meet edge to edge.
    Chord,
}

impl WallWidth {
    /// Lowercase identifier
    pub fn name(self) -> &'static str {
        match self {
            WallWidth::ArcLength => "arc",
            WallWidth::Chord => "chord",
        }
    }

    /// Look a mode up by its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "arc" | "arc_length" => Some(WallWidth::ArcLength),
            "chord" => Some(WallWidth::Chord),
            _ => None,
        }
    }
}

/// Parameters of a solid
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    pub kind: ShapeKind,
    /// Edge length, base width or diameter depending on the kind (px)
    pub size: f64,
    /// Height of pyramids, cylinders and cones; length of prisms (px)
    pub depth: f64,
    /// Wall segments for cylinders and cones
    #[serde(default = "default_sides")]
    pub sides: u32,
    #[serde(default)]
    pub wall_width: WallWidth,
}

fn default_sides() -> u32 {
    DEFAULT_SIDES
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Cube,
            size: 200.0,
            depth: 200.0,
            sides: DEFAULT_SIDES,
            wall_width: WallWidth::ArcLength,
        }
    }
}

impl ShapeParameters {
    /// Create parameters with the default side count and wall width
    pub fn new(kind: ShapeKind, size: f64, depth: f64) -> Self {
        Self {
            kind,
            size,
            depth,
            ..Self::default()
        }
    }

    /// Builder: set the wall segment count
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Builder: set the wall width mode
    pub fn with_wall_width(mut self, wall_width: WallWidth) -> Self {
        self.wall_width = wall_width;
        self
    }

    /// Check `size > 0`, `depth > 0` and `sides >= 3`
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive("size", self.size)?;
        positive("depth", self.depth)?;
        side_count(self.sides)?;
        Ok(())
    }
}

/// A flat panel placed in 3D
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// Stable name used for CSS class names (`front`, `wall-3`, ...)
    pub label: String,
    pub panel: Panel,
    /// Panel width in px (the triangle base for triangles)
    pub width: f64,
    /// Panel height in px
    pub height: f64,
    pub transform: TransformChain,
    pub origin: TransformOrigin,
    /// Colour slot, resolved against a palette when rendered
    pub color: FaceSlot,
    pub opacity: f64,
    /// CSS `border` shorthand, if the panel draws one
    pub border: Option<String>,
}

impl Face {
    /// Create a face with a centred origin, full opacity and no border
    pub fn new(
        label: impl Into<String>,
        panel: Panel,
        width: f64,
        height: f64,
        transform: TransformChain,
        color: FaceSlot,
    ) -> Self {
        Self {
            label: label.into(),
            panel,
            width,
            height,
            transform,
            origin: TransformOrigin::Center,
            color,
            opacity: 1.0,
            border: None,
        }
    }

    /// Builder: set the transform origin
    pub fn with_origin(mut self, origin: TransformOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Builder: set the opacity
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Builder: set the border shorthand
    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    /// Per-axis rotation of the panel in degrees
    pub fn rotation(&self) -> Rotation3 {
        self.transform.rotation()
    }

    /// Where the transform chain places the panel's local origin (px)
    pub fn translation(&self) -> Vec3 {
        self.transform.translation()
    }

    /// Whether the panel is drawn as a triangle
    pub fn is_triangle(&self) -> bool {
        matches!(self.panel, Panel::Triangle { .. })
    }
}

/// Compute the faces for a set of parameters.
///
/// Prisms use `size` for both the width and the height of their triangular
/// cross-section.
pub fn compute_faces(params: &ShapeParameters) -> Result<Vec<Face>, GeometryError> {
    params.validate()?;
    match params.kind {
        ShapeKind::Cube => crate::cube::compute_cube_faces(params.size),
        ShapeKind::Pyramid => crate::pyramid::compute_pyramid_faces(params.size, params.depth),
        ShapeKind::Prism => {
            crate::prism::compute_prism_faces(params.size, params.size, params.depth)
        }
        ShapeKind::Cylinder => crate::revolved::compute_cylinder_faces_with(
            params.size,
            params.depth,
            params.sides,
            params.wall_width,
        ),
        ShapeKind::Cone => crate::revolved::compute_cone_faces_with(
            params.size,
            params.depth,
            params.sides,
            params.wall_width,
        ),
        ShapeKind::Octahedron => crate::octahedron::compute_octahedron_faces(params.size),
    }
}
