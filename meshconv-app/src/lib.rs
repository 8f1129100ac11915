//! Meshconv Application
//!
//! Shared pieces of the `convert` and `nod2d2off` binaries: logging setup,
//! the conversion steps, and the plain messages shown for invocation errors.

use std::path::{Path, PathBuf};

use meshconv_data::triangle::ELE_EXTENSION;
use meshconv_data::{MeshError, load_fesom_mesh, load_triangle_mesh, off_path_for, save_off};
use tracing::info;

/// Usage line printed when `convert` is run without a file.
pub const USAGE: &str = "Usage: convert <filename>";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Install the global subscriber. Logs go to stderr; stdout is kept for
/// user-facing messages.
pub fn init_logging(config: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Convert a `.ele` / `.node` pair to OFF.
///
/// Writes to `output`, or to the `.off` file beside `input` when `None`, and
/// returns the path written. Nothing is created if loading fails.
pub fn convert_triangle(input: &Path, output: Option<&Path>) -> Result<PathBuf, MeshError> {
    let mesh = load_triangle_mesh(input)?;
    let output = output.map_or_else(|| off_path_for(input), Path::to_path_buf);
    save_off(&output, &mesh)?;
    info!("Converted {} -> {}", input.display(), output.display());
    Ok(output)
}

/// Convert a FESOM `nod2d.out` / `elem2d.out` pair to OFF.
pub fn convert_fesom(nodes: &Path, elements: &Path, output: &Path) -> Result<(), MeshError> {
    let mesh = load_fesom_mesh(nodes, elements)?;
    save_off(output, &mesh)?;
    info!("Converted {} -> {}", nodes.display(), output.display());
    Ok(())
}

/// Run `convert` on an optional input path and return the exit status.
///
/// Without an input only the usage line is printed.
pub fn run(file: Option<&Path>, output: Option<&Path>) -> i32 {
    match file {
        Some(file) => report(convert_triangle(file, output)),
        None => {
            println!("{USAGE}");
            0
        }
    }
}

/// The plain message shown to the user for `err`.
pub fn user_message(err: &MeshError) -> String {
    match err {
        MeshError::UnsupportedFormat { .. } => {
            format!("Unsupported file format!\nSupported formats are: .{ELE_EXTENSION}")
        }
        MeshError::UnsupportedElement { .. } => "Invalid number of nodes per triangle!".to_string(),
        MeshError::InFile { source, .. } => user_message(source),
        other => other.to_string(),
    }
}

/// Report the outcome of a conversion and pick the exit status.
///
/// Invocation errors print their message to stdout and still exit cleanly;
/// anything else goes to stderr with status 1.
pub fn report<T>(result: Result<T, MeshError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) if e.is_user_error() => {
            println!("{}", user_message(&e));
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SQUARE_NODE: &str = "4 2 0 0\n1 0 0\n2 1 0\n3 1 1\n4 0 1\n";
    const SQUARE_ELE: &str = "2 3 0\n1 1 2 3\n2 1 3 4\n";
    const SQUARE_OFF: &str = "OFF\n4 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n3 0 1 2\n3 0 2 3\n";

    fn write_square(dir: &Path, node: &str, ele: &str) -> PathBuf {
        fs::write(dir.join("square.node"), node).unwrap();
        let path = dir.join("square.ele");
        fs::write(&path, ele).unwrap();
        path
    }

    #[test]
    fn test_convert_square() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_square(dir.path(), SQUARE_NODE, SQUARE_ELE);

        let output = convert_triangle(&input, None).unwrap();
        assert_eq!(output, dir.path().join("square.off"));
        assert_eq!(fs::read_to_string(&output).unwrap(), SQUARE_OFF);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_square(dir.path(), SQUARE_NODE, SQUARE_ELE);

        let first = fs::read(convert_triangle(&input, None).unwrap()).unwrap();
        let second = fs::read(convert_triangle(&input, None).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_comments_do_not_change_output() {
        let dir = tempfile::tempdir().unwrap();
        let node = "# square\n4 2 0 0\n\n1 0 0\n# mid\n2 1 0\n   \n3 1 1\n4 0 1\n# end\n";
        let ele = "\n# elements\n2 3 0\n1 1 2 3\n\n# second\n2 1 3 4\n";
        let input = write_square(dir.path(), node, ele);

        let output = convert_triangle(&input, None).unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), SQUARE_OFF);
    }

    #[test]
    fn test_zero_based_indices_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let node = "4 2 0 0\n0 0 0\n1 1 0\n2 1 1\n3 0 1\n";
        let ele = "2 3 0\n0 0 1 2\n1 0 2 3\n";
        let input = write_square(dir.path(), node, ele);

        let output = convert_triangle(&input, None).unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), SQUARE_OFF);
    }

    #[test]
    fn test_explicit_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_square(dir.path(), SQUARE_NODE, SQUARE_ELE);
        let target = dir.path().join("renamed.off");

        let output = convert_triangle(&input, Some(target.as_path())).unwrap();
        assert_eq!(output, target);
        assert!(!dir.path().join("square.off").exists());
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mesh.xyz");
        fs::write(&input, SQUARE_ELE).unwrap();

        let err = convert_triangle(&input, None).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(
            user_message(&err),
            "Unsupported file format!\nSupported formats are: .ele"
        );
        assert!(!dir.path().join("mesh.off").exists());
        assert_eq!(report::<()>(Err(err)), 0);
    }

    #[test]
    fn test_non_triangular_elements_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_square(dir.path(), SQUARE_NODE, "1 4 0\n1 1 2 3 4\n");

        let err = convert_triangle(&input, None).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(user_message(&err), "Invalid number of nodes per triangle!");
        assert!(!dir.path().join("square.off").exists());
    }

    #[test]
    fn test_missing_node_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("square.ele");
        fs::write(&input, SQUARE_ELE).unwrap();

        let err = convert_triangle(&input, None).unwrap_err();
        assert!(!err.is_user_error());
        assert_eq!(report::<()>(Err(err)), 1);
    }

    #[test]
    fn test_run_without_file_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.off");

        assert_eq!(run(None, Some(output.as_path())), 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_square(dir.path(), SQUARE_NODE, SQUARE_ELE);
        assert_eq!(run(Some(input.as_path()), None), 0);
        assert!(dir.path().join("square.off").exists());

        assert_eq!(run(Some(dir.path().join("mesh.xyz").as_path()), None), 0);
        assert!(!dir.path().join("mesh.off").exists());

        assert_eq!(run(Some(dir.path().join("missing.ele").as_path()), None), 1);
        assert!(!dir.path().join("missing.off").exists());
    }

    #[test]
    fn test_coordinate_text_survives_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let node = "3 2 0 0\n1 1.0 0.10000000000000001\n2 1e3 0\n3 0 1\n";
        let input = write_square(dir.path(), node, "1 3 0\n1 1 2 3\n");

        let output = convert_triangle(&input, None).unwrap();
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "OFF\n3 1 0\n1.0 0.10000000000000001 0\n1e3 0 0\n0 1 0\n3 0 1 2\n"
        );
    }

    #[test]
    fn test_convert_fesom() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join("nod2d.out");
        let elements = dir.path().join("elem2d.out");
        let output = dir.path().join("output.off");
        fs::write(&nodes, "4\n1 0 0 0\n2 1 0 1\n3 1 1 1\n4 0 1 0\n").unwrap();
        fs::write(&elements, "2\n1 2 3\n1 3 4\n").unwrap();

        convert_fesom(&nodes, &elements, &output).unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), SQUARE_OFF);
    }
}
