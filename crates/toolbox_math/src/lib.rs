//! CSS Transform Mathematics
//!
//! This crate provides the matrix math behind CSS `transform` chains and the
//! face geometry used to fake 3D solids with flat, transformed panels.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector in CSS space (Y points down)
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`TransformChain`] - ordered CSS transform functions
//!
//! ## Shapes
//!
//! - [`ShapeParameters`] - kind, size, depth, side count and wall width mode
//! - [`Face`] - one positioned panel
//! - [`compute_faces`] and the per-solid `compute_*_faces` functions

mod vec3;
mod number;
pub mod mat4;
pub mod transform;
pub mod error;
pub mod shape;
pub mod cube;
pub mod pyramid;
pub mod prism;
pub mod revolved;
pub mod octahedron;

pub use vec3::Vec3;
pub use number::css_number;
pub use mat4::Mat4;
pub use transform::{Rotation3, TransformChain, TransformOp};
pub use error::GeometryError;
pub use shape::{
    compute_faces, Apex, Face, FaceSlot, Panel, ShapeKind, ShapeParameters, TransformOrigin,
    WallWidth, DEFAULT_SIDES,
};
pub use cube::compute_cube_faces;
pub use pyramid::compute_pyramid_faces;
pub use prism::compute_prism_faces;
pub use revolved::{
    compute_cone_faces, compute_cone_faces_with, compute_cylinder_faces,
    compute_cylinder_faces_with,
};
pub use octahedron::compute_octahedron_faces;
