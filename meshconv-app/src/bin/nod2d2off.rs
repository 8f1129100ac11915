//! `nod2d2off`: turn a FESOM `nod2d.out` / `elem2d.out` pair into an OFF mesh.

use clap::Parser;
use meshconv_app::{LoggingConfig, convert_fesom, init_logging, report};
use meshconv_data::fesom::{ELEM2D_FILE, NOD2D_FILE};
use std::path::PathBuf;

/// Convert FESOM 2D mesh files to OFF
#[derive(Parser, Debug)]
#[command(name = "nod2d2off")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex file
    #[arg(long, default_value = NOD2D_FILE)]
    nodes: PathBuf,

    /// Element file
    #[arg(long, default_value = ELEM2D_FILE)]
    elements: PathBuf,

    /// Output path
    #[arg(short, long, default_value = "output.off")]
    output: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    init_logging(&LoggingConfig {
        level: args.log_level,
    });

    std::process::exit(report(convert_fesom(&args.nodes, &args.elements, &args.output)));
}
