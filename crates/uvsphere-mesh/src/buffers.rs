//! Vertex and index buffers ready for GPU upload.
//!
//! [`SphereVertex`] is a tightly packed 12-byte position, so a
//! [`VertexBuffer`] reinterprets as a flat `[f32]` with three scalars per
//! vertex. [`IndexBuffer`] holds `u32` triangle indices, three per triangle.

use glam::Vec3;

/// A single unit-sphere vertex, packed to 12 bytes.
///
/// Layout (12 bytes total):
///   - `[0..4]`  x `f32`
///   - `[4..8]`  y `f32`
///   - `[8..12]` z `f32`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Cartesian position on the unit sphere.
    pub position: [f32; 3],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 12]);

impl SphereVertex {
    /// The north pole `(0, 0, 1)`.
    pub const NORTH_POLE: Self = Self::new(0.0, 0.0, 1.0);
    /// The south pole `(0, 0, -1)`.
    pub const SOUTH_POLE: Self = Self::new(0.0, 0.0, -1.0);

    /// Construct a vertex from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    /// The position as a `glam` vector.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Ordered unit-sphere vertices, north pole first and south pole last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<SphereVertex>,
}

impl VertexBuffer {
    /// Create an empty buffer with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, vertex: SphereVertex) {
        self.vertices.push(vertex);
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`, if present.
    pub fn get(&self, index: usize) -> Option<SphereVertex> {
        self.vertices.get(index).copied()
    }

    /// The structured vertices.
    pub fn as_slice(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// Flat scalar view: `x0, y0, z0, x1, y1, z1, ...`.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes with a 12-byte stride, suitable for a GPU vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Consume the buffer, returning the structured vertices.
    pub fn into_vec(self) -> Vec<SphereVertex> {
        self.vertices
    }

    /// Iterate over vertex positions.
    pub fn iter(&self) -> impl Iterator<Item = &SphereVertex> {
        self.vertices.iter()
    }
}

impl From<Vec<SphereVertex>> for VertexBuffer {
    fn from(vertices: Vec<SphereVertex>) -> Self {
        Self { vertices }
    }
}

/// Triangle indices into a [`VertexBuffer`], three per triangle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexBuffer {
    indices: Vec<u32>,
}

impl IndexBuffer {
    /// Create an empty buffer with room for `capacity` indices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// Number of indices (three times the triangle count).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of complete triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The flat index slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Raw bytes, four per index, suitable for a GPU index buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(
        &self,
    ) -> impl DoubleEndedIterator<Item = [u32; 3]> + ExactSizeIterator + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Largest index referenced, or `None` if empty.
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// Consume the buffer, returning the flat indices.
    pub fn into_vec(self) -> Vec<u32> {
        self.indices
    }
}

impl From<Vec<u32>> for IndexBuffer {
    fn from(indices: Vec<u32>) -> Self {
        Self { indices }
    }
}
