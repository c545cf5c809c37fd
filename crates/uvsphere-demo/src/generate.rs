//! Config-driven sphere generation: build, validate, report, and optionally dump.

use tracing::{info, warn};
use uvsphere_config::Config;
use uvsphere_mesh::{
    DivisionCounts, DivisionError, DumpError, MeshError, MeshStats, SPHERE_INDEX_FORMAT,
    SPHERE_VERTEX_LAYOUT, SeamMode, SphereMesh, write_dump_file,
};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RunError {
    #[error("invalid sphere resolution: {0}")]
    Divisions(#[from] DivisionError),

    #[error("generated mesh failed validation: {0}")]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Dump(#[from] DumpError),
}

/// Division counts and seam mode from the `mesh` config section.
pub(crate) fn mesh_params(config: &Config) -> Result<(DivisionCounts, SeamMode), DivisionError> {
    let divisions = DivisionCounts::new(config.mesh.phi_divisions, config.mesh.theta_divisions)?;
    let seam = if config.mesh.close_seam {
        SeamMode::Closed
    } else {
        SeamMode::Open
    };
    Ok((divisions, seam))
}

/// Generate the configured sphere and hand back its statistics.
pub(crate) fn run(config: &Config) -> Result<MeshStats, RunError> {
    let (divisions, seam) = mesh_params(config)?;

    if divisions.is_degenerate() {
        warn!(
            phi = divisions.phi_divisions(),
            theta = divisions.theta_divisions(),
            "resolution below 2x3 produces a degenerate sphere"
        );
    }

    let mesh = SphereMesh::generate(divisions, seam);
    mesh.validate()?;

    let stats = mesh.stats();
    info!(
        "Generated {}x{} sphere ({:?} seam): {} vertices, {} triangles",
        divisions.phi_divisions(),
        divisions.theta_divisions(),
        seam,
        stats.vertex_count,
        stats.triangle_count
    );
    info!(
        "Buffer sizes: vertices {} bytes (stride {}), indices {} bytes ({:?})",
        stats.vertex_bytes,
        SPHERE_VERTEX_LAYOUT.array_stride,
        stats.index_bytes,
        SPHERE_INDEX_FORMAT
    );

    if config.output.dump_vertices {
        write_dump_file(&config.output.dump_path, &mesh.vertices)?;
        info!("Wrote vertex dump to {}", config.output.dump_path.display());
    }

    Ok(stats)
}
