//! A generated sphere mesh: vertex and index buffers plus the parameters that built them.

use crate::buffers::{IndexBuffer, VertexBuffer};
use crate::divisions::DivisionCounts;
use crate::sampler::sample_sphere;
use crate::triangulator::{SeamMode, triangle_count, triangulate};

/// Layout violations found by [`SphereMesh::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The vertex buffer length does not match the division counts.
    #[error("expected {expected} vertices, found {actual}")]
    VertexCount {
        /// `(phi - 1) * theta + 2`.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// The index buffer does not hold whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    /// An index points past the end of the vertex buffer.
    #[error("index {index} at position {position} exceeds vertex count {vertex_count}")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Position of the index in the index buffer.
        position: usize,
        /// Length of the vertex buffer.
        vertex_count: usize,
    },
}

/// Size summary of a [`SphereMesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of triangles.
    pub triangle_count: usize,
    /// Size of the vertex buffer in bytes.
    pub vertex_bytes: usize,
    /// Size of the index buffer in bytes.
    pub index_bytes: usize,
}

/// A UV-sphere ready for upload.
///
/// Both buffers are owned; hand them to the renderer with
/// [`SphereMesh::into_buffers`].
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    /// Parameters used to build the mesh.
    pub divisions: DivisionCounts,
    /// Seam handling used to build the mesh.
    pub seam: SeamMode,
    /// Unit-sphere positions.
    pub vertices: VertexBuffer,
    /// Triangle indices into [`Self::vertices`].
    pub indices: IndexBuffer,
}

impl SphereMesh {
    /// Sample and triangulate a sphere.
    pub fn generate(divisions: DivisionCounts, seam: SeamMode) -> Self {
        let vertices = sample_sphere(divisions);
        let indices = triangulate(divisions, seam);

        tracing::debug!(
            phi = divisions.phi_divisions(),
            theta = divisions.theta_divisions(),
            vertices = vertices.len(),
            triangles = indices.triangle_count(),
            "generated sphere mesh"
        );

        Self {
            divisions,
            seam,
            vertices,
            indices,
        }
    }

    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.triangle_count()
    }

    /// Expected triangle count for this mesh's parameters.
    pub fn expected_triangle_count(&self) -> usize {
        triangle_count(self.divisions, self.seam) as usize
    }

    /// Check the buffer layout invariants the renderer relies on.
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.divisions.vertex_count() as usize;
        if self.vertices.len() != expected {
            return Err(MeshError::VertexCount {
                expected,
                actual: self.vertices.len(),
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.indices.len()));
        }

        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .as_slice()
            .iter()
            .enumerate()
            .find(|&(_, &index)| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Buffer sizes and element counts.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertex_count: self.vertices.len(),
            triangle_count: self.triangle_count(),
            vertex_bytes: self.vertices.as_bytes().len(),
            index_bytes: self.indices.as_bytes().len(),
        }
    }

    /// Split into the vertex and index buffers.
    pub fn into_buffers(self) -> (VertexBuffer, IndexBuffer) {
        (self.vertices, self.indices)
    }
}
