//! 4x4 matrices for composing CSS transform functions
//!
//! Matrices are column-major, the layout `matrix3d()` uses. Axes follow the
//! CSS convention: X to the right, Y down the screen, Z towards the viewer.
//! Composition reads left to right like a `transform` property: the chain
//! `A B C` is the product `A * B * C`, applied to points as `M * p`.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f64; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Sine and cosine of an angle in degrees.
///
/// Quarter turns return exact values so that faces placed with `90deg`
/// steps land on whole pixel offsets.
pub fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let turns = degrees / 90.0;
    if turns.fract() == 0.0 && turns.is_finite() {
        return match (turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
    }
    degrees.to_radians().sin_cos()
}

/// Create a rotation matrix in the plane spanned by two axes.
///
/// # Arguments
/// * `degrees` - Rotation angle in degrees
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z);
///   positive angles turn `p1` towards `p2`
pub fn plane_rotation(degrees: f64, p1: usize, p2: usize) -> Mat4 {
    let (sn, cs) = sin_cos_deg(degrees);

    let mut m = IDENTITY;
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;
    m
}

/// Matrix for CSS `rotateX(deg)`
pub fn rotate_x(degrees: f64) -> Mat4 {
    plane_rotation(degrees, 1, 2)
}

/// Matrix for CSS `rotateY(deg)`
pub fn rotate_y(degrees: f64) -> Mat4 {
    plane_rotation(degrees, 2, 0)
}

/// Matrix for CSS `rotateZ(deg)` and `rotate(deg)`
pub fn rotate_z(degrees: f64) -> Mat4 {
    plane_rotation(degrees, 0, 1)
}

/// Matrix for CSS `translate3d(x, y, z)`
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Matrix for CSS `scale3d(x, y, z)`
pub fn scale(factors: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = factors.x;
    m[1][1] = factors.y;
    m[2][2] = factors.z;
    m
}

/// Multiply two matrices: `a * b`
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f64; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }
    result
}

/// Transform a point (w = 1) by a matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        let d = a - b;
        d.x.abs() < EPSILON && d.y.abs() < EPSILON && d.z.abs() < EPSILON
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        (0..4).all(|i| (0..4).all(|j| (a[i][j] - b[i][j]).abs() < EPSILON))
    }

    #[test]
    fn test_quarter_turns_are_exact() {
        assert_eq!(sin_cos_deg(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(180.0), (0.0, -1.0));
        assert_eq!(sin_cos_deg(270.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(360.0), (0.0, 1.0));
    }

    #[test]
    fn test_rotate_x_turns_y_towards_z() {
        // CSS rotateX(90deg): the downward axis ends up pointing at the viewer
        let p = transform_point(rotate_x(90.0), Vec3::Y);
        assert!(vec_approx_eq(p, Vec3::Z));
    }

    #[test]
    fn test_rotate_y_turns_z_towards_x() {
        let p = transform_point(rotate_y(90.0), Vec3::Z);
        assert!(vec_approx_eq(p, Vec3::X));
    }

    #[test]
    fn test_rotate_z_turns_x_towards_y() {
        let p = transform_point(rotate_z(90.0), Vec3::X);
        assert!(vec_approx_eq(p, Vec3::Y));
    }

    #[test]
    fn test_rotation_keeps_origin() {
        let r = mul(rotate_x(33.0), rotate_y(-71.0));
        assert!(vec_approx_eq(transform_point(r, Vec3::ZERO), Vec3::ZERO));
    }

    #[test]
    fn test_rotate_then_translate_pushes_along_rotated_axis() {
        // rotateY(90deg) translateZ(50px) moves the origin along +X
        let m = mul(rotate_y(90.0), translation(Vec3::new(0.0, 0.0, 50.0)));
        assert!(vec_approx_eq(transform_point(m, Vec3::ZERO), Vec3::new(50.0, 0.0, 0.0)));
    }

    #[test]
    fn test_translate_then_rotate_keeps_offset() {
        let m = mul(translation(Vec3::new(0.0, 0.0, 50.0)), rotate_y(90.0));
        assert!(vec_approx_eq(transform_point(m, Vec3::ZERO), Vec3::new(0.0, 0.0, 50.0)));
    }

    #[test]
    fn test_scale_then_translate() {
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), scale(Vec3::new(2.0, 3.0, 4.0)));
        assert_eq!(transform_point(m, Vec3::new(1.0, 1.0, 1.0)), Vec3::new(12.0, 3.0, 4.0));
    }

    #[test]
    fn test_identity_mul() {
        let r = rotate_z(12.5);
        assert!(mat_approx_eq(mul(IDENTITY, r), r));
        assert!(mat_approx_eq(mul(r, IDENTITY), r));
    }
}
