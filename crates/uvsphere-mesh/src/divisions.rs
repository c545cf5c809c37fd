//! Resolution parameters for a UV-sphere and the vertex indexing scheme they imply.

/// Errors produced when constructing [`DivisionCounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DivisionError {
    /// `phi_divisions` was zero.
    #[error("phi_divisions must be at least 1")]
    ZeroPhiDivisions,

    /// `theta_divisions` was zero.
    #[error("theta_divisions must be at least 1")]
    ZeroThetaDivisions,

    /// The vertex count would not fit in a 32-bit index.
    #[error("{phi}x{theta} divisions produce more vertices than a u32 index can address")]
    TooManyVertices {
        /// Requested latitude bands.
        phi: u32,
        /// Requested longitude steps.
        theta: u32,
    },

    /// The closed-seam index count would not fit in a `u32`.
    #[error("{phi}x{theta} divisions produce more indices than a u32 can count")]
    TooManyIndices {
        /// Requested latitude bands.
        phi: u32,
        /// Requested longitude steps.
        theta: u32,
    },
}

/// Latitude and longitude division counts for a UV-sphere.
///
/// `phi_divisions` is the number of latitude bands from pole to pole, so the
/// sphere has `phi_divisions - 1` rings between the poles. `theta_divisions`
/// is the number of longitude steps per ring.
///
/// Vertices are laid out as:
///
/// | Index                               | Vertex                         |
/// |-------------------------------------|--------------------------------|
/// | `0`                                 | north pole `(0, 0, 1)`         |
/// | `1 + ring * theta + column`         | ring-major body vertices       |
/// | `vertex_count() - 1`                | south pole `(0, 0, -1)`        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DivisionCounts {
    phi: u32,
    theta: u32,
}

impl DivisionCounts {
    /// Validate and construct a division pair.
    ///
    /// Both counts must be at least 1. Values below 3 are accepted but
    /// produce degenerate geometry. The vertex count and the closed-seam index
    /// count `6 * theta * (phi - 1)` must both fit in a `u32`, so every
    /// count derived from an accepted pair is overflow-free.
    pub fn new(phi_divisions: u32, theta_divisions: u32) -> Result<Self, DivisionError> {
        if phi_divisions == 0 {
            return Err(DivisionError::ZeroPhiDivisions);
        }
        if theta_divisions == 0 {
            return Err(DivisionError::ZeroThetaDivisions);
        }

        let body = u64::from(phi_divisions - 1) * u64::from(theta_divisions);
        if body + 2 > u64::from(u32::MAX) {
            return Err(DivisionError::TooManyVertices {
                phi: phi_divisions,
                theta: theta_divisions,
            });
        }
        if body * 6 > u64::from(u32::MAX) {
            return Err(DivisionError::TooManyIndices {
                phi: phi_divisions,
                theta: theta_divisions,
            });
        }

        Ok(Self {
            phi: phi_divisions,
            theta: theta_divisions,
        })
    }

    /// Number of latitude bands between the poles.
    #[inline]
    pub fn phi_divisions(self) -> u32 {
        self.phi
    }

    /// Number of longitude steps per ring.
    #[inline]
    pub fn theta_divisions(self) -> u32 {
        self.theta
    }

    /// Number of latitude rings strictly between the poles.
    #[inline]
    pub fn ring_count(self) -> u32 {
        self.phi - 1
    }

    /// Total vertex count: `(phi - 1) * theta + 2`.
    #[inline]
    pub fn vertex_count(self) -> u32 {
        self.ring_count() * self.theta + 2
    }

    /// Index of the north pole vertex.
    #[inline]
    pub const fn north_pole(self) -> u32 {
        0
    }

    /// Index of the south pole vertex.
    #[inline]
    pub fn south_pole(self) -> u32 {
        self.vertex_count() - 1
    }

    /// Index of the body vertex at `ring` (0-based from the north) and `column`.
    ///
    /// `column` wraps modulo `theta_divisions`, so `column == theta` addresses
    /// the first vertex of the ring again.
    #[inline]
    pub fn ring_vertex(self, ring: u32, column: u32) -> u32 {
        debug_assert!(ring < self.ring_count(), "ring out of range: {ring}");
        1 + ring * self.theta + column % self.theta
    }

    /// Whether these counts produce a closed solid with non-zero-area faces.
    pub fn is_degenerate(self) -> bool {
        self.phi < 2 || self.theta < 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_phi() {
        assert_eq!(
            DivisionCounts::new(0, 6),
            Err(DivisionError::ZeroPhiDivisions)
        );
    }

    #[test]
    fn test_rejects_zero_theta() {
        assert_eq!(
            DivisionCounts::new(6, 0),
            Err(DivisionError::ZeroThetaDivisions)
        );
    }

    #[test]
    fn test_rejects_index_overflow() {
        let result = DivisionCounts::new(u32::MAX, u32::MAX);
        assert!(matches!(
            result,
            Err(DivisionError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_largest_countable_accepted() {
        // 6 * 715_827_882 == u32::MAX - 3
        let divs = DivisionCounts::new(2, 715_827_882).unwrap();
        assert_eq!(divs.vertex_count(), 715_827_884);
        assert_eq!(
            DivisionCounts::new(2, 715_827_883),
            Err(DivisionError::TooManyIndices {
                phi: 2,
                theta: 715_827_883
            })
        );
    }

    #[test]
    fn test_rejects_index_count_overflow() {
        // Vertex count 2^31 + 2 fits, the triangle indices do not.
        assert_eq!(
            DivisionCounts::new(3, 1 << 30),
            Err(DivisionError::TooManyIndices {
                phi: 3,
                theta: 1 << 30
            })
        );
    }

    #[test]
    fn test_vertex_count_closed_form() {
        for phi in 1..=12 {
            for theta in 1..=12 {
                let divs = DivisionCounts::new(phi, theta).unwrap();
                assert_eq!(divs.vertex_count(), (phi - 1) * theta + 2);
            }
        }
    }

    #[test]
    fn test_ring_vertex_layout() {
        let divs = DivisionCounts::new(4, 5).unwrap();
        assert_eq!(divs.ring_vertex(0, 0), 1);
        assert_eq!(divs.ring_vertex(0, 4), 5);
        assert_eq!(divs.ring_vertex(1, 0), 6);
        assert_eq!(divs.ring_vertex(2, 4), 15);
        assert_eq!(divs.south_pole(), 16);
    }

    #[test]
    fn test_ring_vertex_wraps_column() {
        let divs = DivisionCounts::new(3, 4).unwrap();
        assert_eq!(divs.ring_vertex(1, 4), divs.ring_vertex(1, 0));
    }

    #[test]
    fn test_degenerate_detection() {
        assert!(DivisionCounts::new(1, 8).unwrap().is_degenerate());
        assert!(DivisionCounts::new(8, 2).unwrap().is_degenerate());
        assert!(!DivisionCounts::new(2, 3).unwrap().is_degenerate());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DivisionError::ZeroPhiDivisions.to_string(),
            "phi_divisions must be at least 1"
        );
        let err = DivisionError::TooManyVertices { phi: 3, theta: 4 };
        assert!(err.to_string().contains("3x4"));
    }
}
