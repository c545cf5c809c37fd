//! Winding order conventions for sphere meshes.
//!
//! All triangles are counter-clockwise when viewed from outside the sphere,
//! so backface culling with `FrontFace::Ccw` keeps the outer surface.

use glam::Vec3;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the triangle's normal (via cross product) has a positive
/// dot product with its centroid, i.e. points away from the sphere center.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;

    face_normal.dot(centroid) > 0.0
}

/// Emit a triangle, swapping `v1` and `v2` when `flip` is set.
#[inline]
pub fn emit_triangle(v0: u32, v1: u32, v2: u32, flip: bool) -> [u32; 3] {
    if flip { [v0, v2, v1] } else { [v0, v1, v2] }
}
