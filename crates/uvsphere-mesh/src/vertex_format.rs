//! Canonical `wgpu::VertexBufferLayout` for sphere mesh rendering.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Fields        |
//! |----------|--------|-----------|---------------|
//! | 0        | 0      | Float32x3 | position xyz  |

use std::mem;

use wgpu::{IndexFormat, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::buffers::SphereVertex;

/// Vertex attributes for the sphere mesh format.
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

/// The vertex buffer layout matching [`SphereVertex`], 12-byte stride.
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<SphereVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

/// Index format of [`crate::IndexBuffer`] contents.
pub const SPHERE_INDEX_FORMAT: IndexFormat = IndexFormat::Uint32;

const _: () = assert!(
    mem::size_of::<SphereVertex>() == 12,
    "SphereVertex size changed, update SPHERE_VERTEX_LAYOUT"
);

const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[0].offset == 0);
