//! `convert`: turn a Triangle `.ele` / `.node` pair into an OFF mesh.

use clap::Parser;
use meshconv_app::{LoggingConfig, init_logging, run};
use std::path::PathBuf;
use tracing::warn;

/// Convert a Triangle element file and its companion node file to OFF
#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `.ele` file; `<name>.node` must sit beside it
    file: Option<PathBuf>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,

    /// Output path (defaults to `<name>.off` beside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    init_logging(&LoggingConfig {
        level: args.log_level,
    });

    if !args.ignored.is_empty() {
        warn!("Ignoring extra arguments: {:?}", args.ignored);
    }

    std::process::exit(run(args.file.as_deref(), args.output.as_deref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["convert", "a.ele", "b", "--flag"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("a.ele")));
        assert_eq!(args.ignored, ["b", "--flag"]);
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["convert"]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_output_flag() {
        let args = Args::try_parse_from(["convert", "-o", "out.off", "a.ele"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.off")));
        assert_eq!(args.file, Some(PathBuf::from("a.ele")));
    }
}
