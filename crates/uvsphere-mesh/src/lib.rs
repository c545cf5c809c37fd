//! UV-sphere mesh generation: latitude/longitude sampling, pole deduplication,
//! and triangle-index stitching into GPU-ready vertex and index buffers.

mod buffers;
mod divisions;
pub mod dump;
mod mesh;
mod sampler;
mod triangulator;
pub mod vertex_format;
pub mod winding;

pub use buffers::{IndexBuffer, SphereVertex, VertexBuffer};
pub use divisions::{DivisionCounts, DivisionError};
pub use dump::{DumpError, write_dump, write_dump_file};
pub use mesh::{MeshError, MeshStats, SphereMesh};
pub use sampler::{sample_sphere, sphere_to_cartesian};
pub use triangulator::{SeamMode, index_count, triangle_count, triangulate};
pub use vertex_format::{SPHERE_INDEX_FORMAT, SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT};
pub use winding::{emit_triangle, triangle_winds_outward};
