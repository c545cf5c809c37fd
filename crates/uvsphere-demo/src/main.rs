//! Command-line sphere generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p uvsphere-demo -- --phi-divisions 16 --theta-divisions 32`.
//! Add `--dump sphere.txt` to write the vertices for plotting.

mod generate;

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use uvsphere_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    uvsphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = generate::run(&config) {
        error!("{e}");
        std::process::exit(1);
    }
}
