//! Triangle index generation for the UV-sphere vertex layout.
//!
//! Triangles are emitted in three passes over the grid described by
//! [`DivisionCounts`]:
//!
//! 1. a fan from the north pole over the first ring,
//! 2. two triangles per cell between each pair of adjacent rings,
//! 3. a fan from the south pole over the last ring.
//!
//! Only the division counts are consulted; vertex positions are never read.

use crate::buffers::IndexBuffer;
use crate::divisions::DivisionCounts;
use crate::winding::emit_triangle;

/// How the longitude seam (last column back to the first) is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SeamMode {
    /// Wrap every ring so the mesh is watertight.
    #[default]
    Closed,
    /// Leave the seam column untriangulated in every band.
    ///
    /// The mesh has a crack along `theta = 2π`; useful for comparing against
    /// meshes built with the older open-seam layout.
    Open,
}

impl SeamMode {
    /// Number of triangulated columns per band for `theta_divisions` steps.
    #[inline]
    fn columns(self, theta_divisions: u32) -> u32 {
        match self {
            Self::Closed => theta_divisions,
            Self::Open => theta_divisions - 1,
        }
    }
}

/// Number of triangles [`triangulate`] emits for these parameters.
///
/// `2 * columns * (phi_divisions - 1)`: one band per cap plus two triangles
/// per cell for each of the `phi_divisions - 2` ring transitions. Cannot
/// overflow: [`DivisionCounts::new`] bounds the index count to `u32`.
pub fn triangle_count(divisions: DivisionCounts, seam: SeamMode) -> u32 {
    2 * seam.columns(divisions.theta_divisions()) * divisions.ring_count()
}

/// Number of indices [`triangulate`] emits for these parameters.
pub fn index_count(divisions: DivisionCounts, seam: SeamMode) -> usize {
    triangle_count(divisions, seam) as usize * 3
}

/// Build the index buffer for a sphere sampled with the same `divisions`.
///
/// Every triangle winds counter-clockwise seen from outside the sphere. Every
/// index is below `divisions.vertex_count()`. With `phi_divisions == 1` there
/// are no rings and the buffer is empty.
pub fn triangulate(divisions: DivisionCounts, seam: SeamMode) -> IndexBuffer {
    let mut indices = IndexBuffer::with_capacity(index_count(divisions, seam));

    let rings = divisions.ring_count();
    if rings == 0 {
        return indices;
    }

    let columns = seam.columns(divisions.theta_divisions());
    let north = divisions.north_pole();
    let south = divisions.south_pole();
    let last_ring = rings - 1;

    // North cap
    for c in 0..columns {
        let a = divisions.ring_vertex(0, c);
        let b = divisions.ring_vertex(0, c + 1);
        indices.push_triangle(emit_triangle(north, a, b, false));
    }

    // Body: ring r above ring r + 1
    for r in 0..last_ring {
        for c in 0..columns {
            let u0 = divisions.ring_vertex(r, c);
            let u1 = divisions.ring_vertex(r, c + 1);
            let l0 = divisions.ring_vertex(r + 1, c);
            let l1 = divisions.ring_vertex(r + 1, c + 1);

            indices.push_triangle(emit_triangle(u0, l0, l1, false));
            indices.push_triangle(emit_triangle(u0, l1, u1, false));
        }
    }

    // South cap, mirrored so it still faces outward
    for c in 0..columns {
        let a = divisions.ring_vertex(last_ring, c);
        let b = divisions.ring_vertex(last_ring, c + 1);
        indices.push_triangle(emit_triangle(south, a, b, true));
    }

    tracing::trace!(
        phi = divisions.phi_divisions(),
        theta = divisions.theta_divisions(),
        ?seam,
        triangles = indices.triangle_count(),
        "triangulated sphere"
    );

    indices
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::sampler::sample_sphere;
    use crate::winding::triangle_winds_outward;

    fn divs(phi: u32, theta: u32) -> DivisionCounts {
        DivisionCounts::new(phi, theta).unwrap()
    }

    /// Count how many triangles share each undirected edge.
    fn edge_usage(indices: &IndexBuffer) -> HashMap<(u32, u32), u32> {
        let mut edges = HashMap::new();
        for [a, b, c] in indices.triangles() {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                *edges.entry((p.min(q), p.max(q))).or_insert(0) += 1;
            }
        }
        edges
    }

    #[test]
    fn test_indices_in_range_for_all_inputs() {
        for seam in [SeamMode::Closed, SeamMode::Open] {
            for phi in 1..=20 {
                for theta in 1..=20 {
                    let d = divs(phi, theta);
                    let indices = triangulate(d, seam);
                    if let Some(max) = indices.max_index() {
                        assert!(
                            max < d.vertex_count(),
                            "{phi}x{theta} {seam:?}: index {max} >= {}",
                            d.vertex_count()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_index_count_is_multiple_of_three() {
        for seam in [SeamMode::Closed, SeamMode::Open] {
            for phi in 1..=10 {
                for theta in 1..=10 {
                    let indices = triangulate(divs(phi, theta), seam);
                    assert_eq!(indices.len() % 3, 0);
                    assert_eq!(indices.len(), index_count(divs(phi, theta), seam));
                }
            }
        }
    }

    #[test]
    fn test_single_band_emits_nothing() {
        let d = divs(1, 3);
        assert!(triangulate(d, SeamMode::Closed).is_empty());
        assert!(triangulate(d, SeamMode::Open).is_empty());
    }

    #[test]
    fn test_three_by_three_closed_counts() {
        let indices = triangulate(divs(3, 3), SeamMode::Closed);
        // 3 north cap + 2 * 3 body + 3 south cap
        assert_eq!(indices.triangle_count(), 12);
    }

    #[test]
    fn test_three_by_three_open_counts() {
        let indices = triangulate(divs(3, 3), SeamMode::Open);
        // 2 north cap + 2 * 2 body + 2 south cap
        assert_eq!(indices.triangle_count(), 8);
    }

    #[test]
    fn test_north_cap_fans_first_ring() {
        let indices = triangulate(divs(4, 5), SeamMode::Open);
        let tris: Vec<_> = indices.triangles().take(4).collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5]]);
    }

    #[test]
    fn test_closed_cap_wraps_seam() {
        let indices = triangulate(divs(4, 5), SeamMode::Closed);
        let tris: Vec<_> = indices.triangles().take(5).collect();
        assert_eq!(tris[4], [0, 5, 1]);
    }

    #[test]
    fn test_south_cap_uses_last_vertex() {
        let d = divs(4, 5);
        let indices = triangulate(d, SeamMode::Closed);
        let south = d.south_pole();
        let last: Vec<_> = indices.triangles().rev().take(5).collect();
        assert!(last.iter().all(|tri| tri[0] == south));
        assert_eq!(last[0], [south, 11, 15]);
    }

    #[test]
    fn test_all_triangles_wind_outward() {
        for seam in [SeamMode::Closed, SeamMode::Open] {
            for phi in 2..=12 {
                for theta in 3..=12 {
                    let d = divs(phi, theta);
                    let vertices = sample_sphere(d);
                    let indices = triangulate(d, seam);
                    for [a, b, c] in indices.triangles() {
                        let v = |i: u32| vertices.get(i as usize).unwrap().to_vec3();
                        assert!(
                            triangle_winds_outward(v(a), v(b), v(c)),
                            "{phi}x{theta} {seam:?}: triangle [{a}, {b}, {c}] winds inward"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_counts_at_largest_accepted_divisions() {
        let d = divs(2, 715_827_882);
        assert_eq!(triangle_count(d, SeamMode::Closed), 2 * 715_827_882);
        assert_eq!(triangle_count(d, SeamMode::Open), 2 * 715_827_881);
        assert_eq!(index_count(d, SeamMode::Closed), 6 * 715_827_882);
    }

    #[test]
    fn test_closed_mesh_is_watertight() {
        for phi in 2..=10 {
            for theta in 3..=10 {
                let edges = edge_usage(&triangulate(divs(phi, theta), SeamMode::Closed));
                for (edge, count) in edges {
                    assert_eq!(count, 2, "{phi}x{theta}: edge {edge:?} used {count} times");
                }
            }
        }
    }

    #[test]
    fn test_open_mesh_has_seam_crack() {
        let d = divs(4, 6);
        let edges = edge_usage(&triangulate(d, SeamMode::Open));
        let boundary = edges.values().filter(|&&count| count == 1).count();
        assert!(boundary > 0);
        // The wrap edge of the first ring is never emitted.
        let wrap = (d.ring_vertex(0, 0), d.ring_vertex(0, 5));
        assert!(!edges.contains_key(&wrap));
    }

    #[test]
    fn test_closed_form_triangle_count() {
        for phi in 1..=10 {
            for theta in 1..=10 {
                let d = divs(phi, theta);
                assert_eq!(triangle_count(d, SeamMode::Closed), 2 * theta * (phi - 1));
                assert_eq!(
                    triangle_count(d, SeamMode::Open),
                    2 * (theta - 1) * (phi - 1)
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = triangulate(divs(11, 17), SeamMode::Closed);
        let b = triangulate(divs(11, 17), SeamMode::Closed);
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_seam_is_closed() {
        assert_eq!(SeamMode::default(), SeamMode::Closed);
    }
}
