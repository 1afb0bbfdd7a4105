//! Cube: six squares pushed out from the centre

use crate::error::{positive, GeometryError};
use crate::shape::{Face, FaceSlot, Panel};
use crate::transform::{TransformChain, TransformOp};

/// Border drawn around cube faces and end caps
pub const FACE_BORDER: &str = "2px solid rgba(255,255,255,0.2)";

/// Opacity of cube faces
pub const FACE_OPACITY: f64 = 0.9;

/// Compute the six faces of a cube with edge length `size`.
///
/// Faces come in the order front, back, right, left, top, bottom. Each is
/// rotated into place about the cube centre and pushed out by `size / 2`.
pub fn compute_cube_faces(size: f64) -> Result<Vec<Face>, GeometryError> {
    let size = positive("size", size)?;
    let h = size / 2.0;

    let chains: [(FaceSlot, Vec<TransformOp>); 6] = [
        (FaceSlot::Front, vec![TransformOp::TranslateZ(h)]),
        (
            FaceSlot::Back,
            vec![TransformOp::TranslateZ(-h), TransformOp::RotateY(180.0)],
        ),
        (
            FaceSlot::Right,
            vec![TransformOp::RotateY(90.0), TransformOp::TranslateZ(h)],
        ),
        (
            FaceSlot::Left,
            vec![TransformOp::RotateY(-90.0), TransformOp::TranslateZ(h)],
        ),
        (
            FaceSlot::Top,
            vec![TransformOp::RotateX(90.0), TransformOp::TranslateZ(h)],
        ),
        (
            FaceSlot::Bottom,
            vec![TransformOp::RotateX(-90.0), TransformOp::TranslateZ(h)],
        ),
    ];

    Ok(chains
        .into_iter()
        .map(|(slot, ops)| {
            Face::new(slot.name(), Panel::Rect, size, size, TransformChain::from(ops), slot)
                .with_opacity(FACE_OPACITY)
                .with_border(FACE_BORDER)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_six_faces_in_slot_order() {
        let faces = compute_cube_faces(200.0).unwrap();
        let labels: Vec<&str> = faces.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["front", "back", "right", "left", "top", "bottom"]);
        assert!(faces.iter().all(|f| f.width == 200.0 && f.height == 200.0));
    }

    #[test]
    fn test_transform_text() {
        let faces = compute_cube_faces(200.0).unwrap();
        assert_eq!(faces[0].transform.to_string(), "translateZ(100px)");
        assert_eq!(faces[1].transform.to_string(), "translateZ(-100px) rotateY(180deg)");
        assert_eq!(faces[2].transform.to_string(), "rotateY(90deg) translateZ(100px)");
        assert_eq!(faces[5].transform.to_string(), "rotateX(-90deg) translateZ(100px)");
    }

    #[test]
    fn test_faces_sit_on_the_axes() {
        let faces = compute_cube_faces(200.0).unwrap();
        let expected = [
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 0.0, -100.0),
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::new(-100.0, 0.0, 0.0),
            Vec3::new(0.0, -100.0, 0.0),
            Vec3::new(0.0, 100.0, 0.0),
        ];
        for (face, want) in faces.iter().zip(expected) {
            assert_eq!(face.translation(), want, "face {}", face.label);
        }
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(compute_cube_faces(0.0).is_err());
        assert!(compute_cube_faces(-10.0).is_err());
    }
}
