//! Cylinders and cones: a ring of panels around the vertical axis

use std::f64::consts::PI;

use crate::cube::{FACE_BORDER, FACE_OPACITY};
use crate::error::{positive, side_count, GeometryError};
use crate::shape::{Apex, Face, FaceSlot, Panel, TransformOrigin, WallWidth};
use crate::transform::{TransformChain, TransformOp};

/// Opacity of wall segments
pub const WALL_OPACITY: f64 = 0.85;

/// Border drawn around cylinder wall segments
pub const WALL_BORDER: &str = "1px solid rgba(255,255,255,0.1)";

/// Width of one wall segment of a ring with the given radius
pub fn segment_width(radius: f64, sides: u32, mode: WallWidth) -> f64 {
    let n = f64::from(sides);
    match mode {
        WallWidth::ArcLength => 2.0 * PI * radius / n,
        WallWidth::Chord => 2.0 * radius * (PI / n).sin(),
    }
}

/// Angle of wall segment `i` about the vertical axis, in degrees
pub fn segment_angle(i: u32, sides: u32) -> f64 {
    360.0 / f64::from(sides) * f64::from(i)
}

/// Alternating wall colour
fn wall_slot(i: u32) -> FaceSlot {
    if i % 2 == 0 {
        FaceSlot::Front
    } else {
        FaceSlot::Right
    }
}

fn disc(label: &str, size: f64, offset: f64, slot: FaceSlot) -> Face {
    Face::new(
        label,
        Panel::Disc,
        size,
        size,
        TransformChain::new()
            .with(TransformOp::RotateX(90.0))
            .with(TransformOp::TranslateZ(offset)),
        slot,
    )
    .with_opacity(FACE_OPACITY)
    .with_border(FACE_BORDER)
}

/// Compute the faces of a cylinder with arc-length wall segments.
///
/// `size` is the diameter and `depth` the height. The top and bottom caps
/// come first, followed by `sides` walls.
pub fn compute_cylinder_faces(size: f64, depth: f64, sides: u32) -> Result<Vec<Face>, GeometryError> {
    compute_cylinder_faces_with(size, depth, sides, WallWidth::ArcLength)
}

/// Compute the faces of a cylinder with the given wall width mode
pub fn compute_cylinder_faces_with(
    size: f64,
    depth: f64,
    sides: u32,
    mode: WallWidth,
) -> Result<Vec<Face>, GeometryError> {
    let size = positive("size", size)?;
    let depth = positive("depth", depth)?;
    let sides = side_count(sides)?;
    let radius = size / 2.0;
    let width = segment_width(radius, sides, mode);

    let mut faces = Vec::with_capacity(sides as usize + 2);
    faces.push(disc("top", size, 0.0, FaceSlot::Top));
    faces.push(disc("bottom", size, -depth, FaceSlot::Bottom));

    for i in 0..sides {
        let transform = TransformChain::new()
            .with(TransformOp::RotateY(segment_angle(i, sides)))
            .with(TransformOp::TranslateZ(radius));
        faces.push(
            Face::new(format!("wall-{}", i), Panel::Rect, width, depth, transform, wall_slot(i))
                .with_opacity(WALL_OPACITY)
                .with_border(WALL_BORDER),
        );
    }

    Ok(faces)
}

/// Lean of a cone panel away from the vertical, in degrees
pub fn cone_slant(radius: f64, depth: f64) -> f64 {
    90.0 - (depth / radius).atan().to_degrees()
}

/// Compute the faces of a cone with arc-length panels.
///
/// `size` is the base diameter and `depth` the height. The base disc comes
/// first, followed by `sides` triangles pivoting on their bottom edge.
pub fn compute_cone_faces(size: f64, depth: f64, sides: u32) -> Result<Vec<Face>, GeometryError> {
    compute_cone_faces_with(size, depth, sides, WallWidth::ArcLength)
}

/// Compute the faces of a cone with the given panel width mode
pub fn compute_cone_faces_with(
    size: f64,
    depth: f64,
    sides: u32,
    mode: WallWidth,
) -> Result<Vec<Face>, GeometryError> {
    let size = positive("size", size)?;
    let depth = positive("depth", depth)?;
    let sides = side_count(sides)?;
    let radius = size / 2.0;
    let width = segment_width(radius, sides, mode);
    let slant = cone_slant(radius, depth);

    let mut faces = Vec::with_capacity(sides as usize + 1);
    faces.push(disc("base", size, -depth, FaceSlot::Bottom));

    for i in 0..sides {
        let transform = TransformChain::new()
            .with(TransformOp::TranslateY(depth))
            .with(TransformOp::RotateY(segment_angle(i, sides)))
            .with(TransformOp::TranslateZ(radius))
            .with(TransformOp::RotateX(slant));
        faces.push(
            Face::new(
                format!("side-{}", i),
                Panel::Triangle { apex: Apex::Up },
                width,
                depth,
                transform,
                wall_slot(i),
            )
            .with_origin(TransformOrigin::BottomCenter)
            .with_opacity(WALL_OPACITY),
        );
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_cylinder_layout() {
        let faces = compute_cylinder_faces(150.0, 200.0, 20).unwrap();
        assert_eq!(faces.len(), 22);
        assert_eq!(faces[0].transform.to_string(), "rotateX(90deg) translateZ(0px)");
        assert_eq!(faces[1].transform.to_string(), "rotateX(90deg) translateZ(-200px)");
        assert_eq!(faces[2].transform.to_string(), "rotateY(0deg) translateZ(75px)");
        assert_eq!(faces[3].transform.to_string(), "rotateY(18deg) translateZ(75px)");
        assert_eq!(faces[2].color, FaceSlot::Front);
        assert_eq!(faces[3].color, FaceSlot::Right);
    }

    #[test]
    fn test_arc_length_width_is_preserved() {
        let faces = compute_cylinder_faces(150.0, 200.0, 20).unwrap();
        assert!(approx_eq(faces[2].width, 2.0 * PI * 75.0 / 20.0));
        assert_eq!(faces[2].height, 200.0);
    }

    #[test]
    fn test_chord_width_is_narrower() {
        let arc = segment_width(75.0, 6, WallWidth::ArcLength);
        let chord = segment_width(75.0, 6, WallWidth::Chord);
        // a hexagon's side equals its circumradius
        assert!(approx_eq(chord, 75.0));
        assert!(chord < arc);
    }

    #[test]
    fn test_walls_sit_on_the_ring() {
        let faces = compute_cylinder_faces(200.0, 100.0, 8).unwrap();
        for face in &faces[2..] {
            let t = face.translation();
            assert!(approx_eq((t.x * t.x + t.z * t.z).sqrt(), 100.0));
            assert!(approx_eq(t.y, 0.0));
        }
    }

    #[test]
    fn test_cone_base_rotation() {
        for sides in [3, 4, 20, 64] {
            let faces = compute_cone_faces(150.0, 200.0, sides).unwrap();
            assert_eq!(faces.len(), sides as usize + 1);
            let r = faces[0].rotation();
            assert_eq!((r.x, r.y, r.z), (90.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_cone_panel_slant() {
        let faces = compute_cone_faces(150.0, 200.0, 20).unwrap();
        let expected = 90.0 - (200.0f64 / 75.0).atan().to_degrees();
        for (i, face) in faces[1..].iter().enumerate() {
            let r = face.rotation();
            assert!(approx_eq(r.x, expected));
            assert!(approx_eq(r.y, segment_angle(i as u32, 20)));
            assert_eq!(face.origin, TransformOrigin::BottomCenter);
        }
    }

    #[test]
    fn test_rejects_too_few_sides() {
        assert!(compute_cylinder_faces(100.0, 100.0, 2).is_err());
        assert!(compute_cone_faces(100.0, 100.0, 0).is_err());
    }
}
