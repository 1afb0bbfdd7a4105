//! Triangular prism: two end caps, a floor and two slanted walls

use crate::cube::FACE_OPACITY;
use crate::error::{positive, GeometryError};
use crate::shape::{Apex, Face, FaceSlot, Panel, TransformOrigin};
use crate::transform::{TransformChain, TransformOp};

/// Length of a slanted wall: the hypotenuse of half the width and the height
pub fn slant_height(width: f64, height: f64) -> f64 {
    (height * height + (width / 2.0) * (width / 2.0)).sqrt()
}

/// Lean of a slanted wall from the vertical, in degrees
pub fn slant_tilt(width: f64, height: f64) -> f64 {
    ((width / 2.0) / height).atan().to_degrees()
}

/// Compute the faces of a prism whose triangular cross-section is
/// `width × height`, extruded by `depth`.
///
/// Faces come in the order front cap, back cap, bottom, left wall, right wall.
pub fn compute_prism_faces(width: f64, height: f64, depth: f64) -> Result<Vec<Face>, GeometryError> {
    let width = positive("size", width)?;
    let height = positive("height", height)?;
    let depth = positive("depth", depth)?;

    let slant = slant_height(width, height);
    let tilt = slant_tilt(width, height);
    let cap = Panel::Triangle { apex: Apex::Up };

    let faces = vec![
        Face::new(
            "front",
            cap,
            width,
            height,
            TransformChain::new().with(TransformOp::TranslateZ(depth / 2.0)),
            FaceSlot::Front,
        ),
        Face::new(
            "back",
            cap,
            width,
            height,
            TransformChain::new()
                .with(TransformOp::TranslateZ(-depth / 2.0))
                .with(TransformOp::RotateY(180.0)),
            FaceSlot::Back,
        ),
        Face::new(
            "bottom",
            Panel::Rect,
            width,
            depth,
            TransformChain::new()
                .with(TransformOp::TranslateY(height))
                .with(TransformOp::RotateX(-90.0)),
            FaceSlot::Bottom,
        ),
        Face::new(
            "left",
            Panel::Rect,
            depth,
            slant,
            TransformChain::new()
                .with(TransformOp::TranslateY(height / 2.0))
                .with(TransformOp::RotateZ(-tilt))
                .with(TransformOp::RotateY(-90.0))
                .with(TransformOp::TranslateZ(width / 4.0)),
            FaceSlot::Left,
        )
        .with_origin(TransformOrigin::TopCenter),
        Face::new(
            "right",
            Panel::Rect,
            depth,
            slant,
            TransformChain::new()
                .with(TransformOp::TranslateX(width))
                .with(TransformOp::TranslateY(height / 2.0))
                .with(TransformOp::RotateZ(tilt))
                .with(TransformOp::RotateY(90.0))
                .with(TransformOp::TranslateZ(width / 4.0)),
            FaceSlot::Right,
        )
        .with_origin(TransformOrigin::TopCenter),
    ];

    Ok(faces
        .into_iter()
        .map(|face| face.with_opacity(FACE_OPACITY))
        .collect())
}
