//! Plain-text vertex dump for plotting tools.
//!
//! One line per vertex, three comma-separated values with three decimals:
//!
//! ```text
//! 0.000, 0.000, 1.000
//! 0.500, 0.866, 0.000
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::buffers::VertexBuffer;

/// Errors from writing a vertex dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// The output file could not be created.
    #[error("failed to create dump file {}: {source}", path.display())]
    Create {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing vertex lines failed.
    #[error("failed to write vertex dump: {0}")]
    Write(#[from] io::Error),
}

/// Write every vertex of `vertices` to `writer`, one line each.
pub fn write_dump<W: Write>(writer: &mut W, vertices: &VertexBuffer) -> io::Result<()> {
    for v in vertices.iter() {
        let [x, y, z] = v.position;
        writeln!(writer, "{x:.3}, {y:.3}, {z:.3}")?;
    }
    Ok(())
}

/// Write a vertex dump to the file at `path`, replacing it if present.
pub fn write_dump_file(path: &Path, vertices: &VertexBuffer) -> Result<(), DumpError> {
    let file = File::create(path).map_err(|source| DumpError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_dump(&mut writer, vertices)?;
    writer.flush()?;

    tracing::debug!(
        path = %path.display(),
        vertices = vertices.len(),
        "wrote vertex dump"
    );
    Ok(())
}
