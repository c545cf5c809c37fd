//! Latitude/longitude sampling of the unit sphere.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::buffers::{SphereVertex, VertexBuffer};
use crate::divisions::DivisionCounts;

/// Convert polar angles to a point on the unit sphere.
///
/// `phi` is the polar angle measured from `+Z`, `theta` the azimuth measured
/// from `+X` towards `+Y`:
///
/// ```text
/// x = sin(phi) cos(theta)
/// y = sin(phi) sin(theta)
/// z = cos(phi)
/// ```
#[inline]
#[must_use]
pub fn sphere_to_cartesian(phi: f64, theta: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// Sample the unit sphere into a [`VertexBuffer`].
///
/// Emits the north pole, then `phi_divisions - 1` rings of `theta_divisions`
/// points each (ring-major), then the south pole. Ring `phi_i` sits at
/// `phi = π * phi_i / phi_divisions` and step `theta_i` (1-based) at
/// `theta = 2π * theta_i / theta_divisions`, so the last step of every ring
/// lands on `2π`.
pub fn sample_sphere(divisions: DivisionCounts) -> VertexBuffer {
    let phi_divs = divisions.phi_divisions();
    let theta_divs = divisions.theta_divisions();

    let mut vertices = VertexBuffer::with_capacity(divisions.vertex_count() as usize);
    vertices.push(SphereVertex::NORTH_POLE);

    for phi_i in 1..phi_divs {
        let phi = PI * f64::from(phi_i) / f64::from(phi_divs);

        for theta_i in 1..=theta_divs {
            let theta = TAU * f64::from(theta_i) / f64::from(theta_divs);
            let p = sphere_to_cartesian(phi, theta).as_vec3();
            vertices.push(SphereVertex::new(p.x, p.y, p.z));
        }
    }

    vertices.push(SphereVertex::SOUTH_POLE);
    vertices
}
