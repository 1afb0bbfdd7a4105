//! Octahedron: two four-sided pyramids joined at their bases

use crate::error::{positive, GeometryError};
use crate::shape::{Apex, Face, FaceSlot, Panel, TransformOrigin};
use crate::transform::{TransformChain, TransformOp};

/// Lean of each triangle from the vertical, in degrees
pub const FACE_TILT: f64 = 55.0;

/// Opacity of every triangle
pub const FACE_OPACITY: f64 = 0.85;

const UPPER_SLOTS: [FaceSlot; 4] = [FaceSlot::Front, FaceSlot::Right, FaceSlot::Back, FaceSlot::Left];
const LOWER_SLOTS: [FaceSlot; 4] = [FaceSlot::Top, FaceSlot::Front, FaceSlot::Bottom, FaceSlot::Back];

/// Compute the eight triangles of an octahedron with base edge `size`.
///
/// The four upper triangles (apex up, tilted by `-FACE_TILT`) come first,
/// then the four lower ones (apex down, tilted by `+FACE_TILT`). Each group
/// steps by 90° about the vertical axis.
pub fn compute_octahedron_faces(size: f64) -> Result<Vec<Face>, GeometryError> {
    let size = positive("size", size)?;

    let upper = (Apex::Up, -FACE_TILT, TransformOrigin::BottomCenter, UPPER_SLOTS, "upper");
    let lower = (Apex::Down, FACE_TILT, TransformOrigin::TopCenter, LOWER_SLOTS, "lower");

    let mut faces = Vec::with_capacity(8);
    for (apex, tilt, origin, slots, prefix) in [upper, lower] {
        for (k, slot) in slots.into_iter().enumerate() {
            let transform = TransformChain::new()
                .with(TransformOp::TranslateX(size / 2.0))
                .with(TransformOp::TranslateY(size / 2.0))
                .with(TransformOp::RotateY(k as f64 * 90.0))
                .with(TransformOp::RotateX(tilt))
                .with(TransformOp::TranslateZ(size / 4.0));
            faces.push(
                Face::new(
                    format!("{}-{}", prefix, k),
                    Panel::Triangle { apex },
                    size,
                    size / 2.0,
                    transform,
                    slot,
                )
                .with_origin(origin)
                .with_opacity(FACE_OPACITY),
            );
        }
    }

    Ok(faces)
}
