//! Square pyramid: a base plus four leaning triangles

use crate::cube::{FACE_BORDER, FACE_OPACITY};
use crate::error::{positive, GeometryError};
use crate::shape::{Apex, Face, FaceSlot, Panel, TransformOrigin};
use crate::transform::{TransformChain, TransformOp};

/// Fixed lean of the side triangles, in degrees
pub const SIDE_TILT: f64 = 40.0;

/// Opacity of the side triangles
pub const SIDE_OPACITY: f64 = 0.85;

const SIDE_SLOTS: [FaceSlot; 4] = [FaceSlot::Front, FaceSlot::Right, FaceSlot::Back, FaceSlot::Left];

/// Compute the faces of a pyramid with a `base × base` square and the given height.
///
/// The base comes first, then the front, right, back and left triangles.
/// Each triangle pivots on its bottom edge, is turned by a multiple of 90°
/// about the vertical axis and leans in by [`SIDE_TILT`].
pub fn compute_pyramid_faces(base: f64, height: f64) -> Result<Vec<Face>, GeometryError> {
    let base = positive("size", base)?;
    let height = positive("depth", height)?;

    let mut faces = Vec::with_capacity(5);
    faces.push(
        Face::new(
            "base",
            Panel::Rect,
            base,
            base,
            TransformChain::new()
                .with(TransformOp::TranslateY(height))
                .with(TransformOp::RotateX(-90.0)),
            FaceSlot::Bottom,
        )
        .with_opacity(FACE_OPACITY)
        .with_border(FACE_BORDER),
    );

    for (k, slot) in SIDE_SLOTS.into_iter().enumerate() {
        let transform = TransformChain::new()
            .with(TransformOp::TranslateX(base / 2.0))
            .with(TransformOp::TranslateY(height))
            .with(TransformOp::RotateY(k as f64 * 90.0))
            .with(TransformOp::RotateX(SIDE_TILT))
            .with(TransformOp::TranslateZ(base / 4.0));
        faces.push(
            Face::new(
                slot.name(),
                Panel::Triangle { apex: Apex::Up },
                base,
                height,
                transform,
                slot,
            )
            .with_origin(TransformOrigin::BottomCenter)
            .with_opacity(SIDE_OPACITY),
        );
    }

    Ok(faces)
}
