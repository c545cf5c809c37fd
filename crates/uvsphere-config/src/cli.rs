//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// UV-sphere generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "uvsphere", about = "Generate UV-sphere vertex and index buffers")]
pub struct CliArgs {
    /// Latitude bands from pole to pole.
    #[arg(long)]
    pub phi_divisions: Option<u32>,

    /// Longitude steps per ring.
    #[arg(long)]
    pub theta_divisions: Option<u32>,

    /// Triangulate across the longitude seam (true/false).
    #[arg(long)]
    pub close_seam: Option<bool>,

    /// Write the vertex buffer as text to this path.
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// `--dump` both enables the vertex dump and sets its path.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(phi) = args.phi_divisions {
            self.mesh.phi_divisions = phi;
        }
        if let Some(theta) = args.theta_divisions {
            self.mesh.theta_divisions = theta;
        }
        if let Some(close) = args.close_seam {
            self.mesh.close_seam = close;
        }
        if let Some(ref path) = args.dump {
            self.output.dump_vertices = true;
            self.output.dump_path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
