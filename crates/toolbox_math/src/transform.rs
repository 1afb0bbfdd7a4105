//! CSS transform functions and transform chains
//!
//! A [`TransformChain`] is the value of a CSS `transform` property: an ordered
//! list of [`TransformOp`]s. It renders to CSS text and composes to a
//! [`Mat4`] so the position and orientation of a panel can be inspected
//! without a browser.

use std::fmt;

use crate::mat4::{self, Mat4};
use crate::number::css_number;
use crate::Vec3;

/// A single CSS transform function
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// `translateX(Npx)`
    TranslateX(f64),
    /// `translateY(Npx)`
    TranslateY(f64),
    /// `translateZ(Npx)`
    TranslateZ(f64),
    /// `rotateX(Ndeg)`
    RotateX(f64),
    /// `rotateY(Ndeg)`
    RotateY(f64),
    /// `rotateZ(Ndeg)`
    RotateZ(f64),
    /// `rotate(Ndeg)`, a rotation in the screen plane
    Rotate(f64),
    /// `scale(N)`
    Scale(f64),
    /// `scale3d(x, y, z)`
    Scale3d(f64, f64, f64),
}

impl TransformOp {
    /// Matrix equivalent of this function
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            TransformOp::TranslateX(v) => mat4::translation(Vec3::new(v, 0.0, 0.0)),
            TransformOp::TranslateY(v) => mat4::translation(Vec3::new(0.0, v, 0.0)),
            TransformOp::TranslateZ(v) => mat4::translation(Vec3::new(0.0, 0.0, v)),
            TransformOp::RotateX(deg) => mat4::rotate_x(deg),
            TransformOp::RotateY(deg) => mat4::rotate_y(deg),
            TransformOp::RotateZ(deg) | TransformOp::Rotate(deg) => mat4::rotate_z(deg),
            TransformOp::Scale(s) => mat4::scale(Vec3::new(s, s, 1.0)),
            TransformOp::Scale3d(x, y, z) => mat4::scale(Vec3::new(x, y, z)),
        }
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        match *self {
            TransformOp::TranslateX(v)
            | TransformOp::TranslateY(v)
            | TransformOp::TranslateZ(v)
            | TransformOp::RotateX(v)
            | TransformOp::RotateY(v)
            | TransformOp::RotateZ(v)
            | TransformOp::Rotate(v)
            | TransformOp::Scale(v) => v.is_finite(),
            TransformOp::Scale3d(x, y, z) => x.is_finite() && y.is_finite() && z.is_finite(),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformOp::TranslateX(v) => write!(f, "translateX({}px)", css_number(v)),
            TransformOp::TranslateY(v) => write!(f, "translateY({}px)", css_number(v)),
            TransformOp::TranslateZ(v) => write!(f, "translateZ({}px)", css_number(v)),
            TransformOp::RotateX(v) => write!(f, "rotateX({}deg)", css_number(v)),
            TransformOp::RotateY(v) => write!(f, "rotateY({}deg)", css_number(v)),
            TransformOp::RotateZ(v) => write!(f, "rotateZ({}deg)", css_number(v)),
            TransformOp::Rotate(v) => write!(f, "rotate({}deg)", css_number(v)),
            TransformOp::Scale(v) => write!(f, "scale({})", css_number(v)),
            TransformOp::Scale3d(x, y, z) => write!(
                f,
                "scale3d({}, {}, {})",
                css_number(x),
                css_number(y),
                css_number(z)
            ),
        }
    }
}

/// Per-axis rotation in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation3 {
    /// Create a rotation from per-axis degrees
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An ordered CSS transform chain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformChain {
    ops: Vec<TransformOp>,
}

impl TransformChain {
    /// Create an empty chain (`transform: none`)
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Builder: append a function to the chain
    pub fn with(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Append a function to the chain
    pub fn push(&mut self, op: TransformOp) {
        self.ops.push(op);
    }

    /// The functions in application order
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Whether the chain has no functions
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Compose the chain into a single matrix
    pub fn to_matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(mat4::IDENTITY, |acc, op| mat4::mul(acc, op.to_matrix()))
    }

    /// Where the chain places the local origin of the element it is applied to
    pub fn translation(&self) -> Vec3 {
        mat4::transform_point(self.to_matrix(), Vec3::ZERO)
    }

    /// Sum of the rotations about each axis; `rotate()` counts towards Z
    pub fn rotation(&self) -> Rotation3 {
        self.ops.iter().fold(Rotation3::default(), |mut r, op| {
            match *op {
                TransformOp::RotateX(deg) => r.x += deg,
                TransformOp::RotateY(deg) => r.y += deg,
                TransformOp::RotateZ(deg) | TransformOp::Rotate(deg) => r.z += deg,
                _ => {}
            }
            r
        })
    }

    /// Whether every function has finite components
    pub fn is_finite(&self) -> bool {
        self.ops.iter().all(TransformOp::is_finite)
    }
}

impl From<Vec<TransformOp>> for TransformChain {
    fn from(ops: Vec<TransformOp>) -> Self {
        Self { ops }
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("none");
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
