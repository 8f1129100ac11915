//! Error types for mesh reading and writing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for mesh conversion operations.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while loading or writing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The input path has no extension, or one no reader handles.
    #[error("unsupported file format: {}", describe_extension(extension))]
    UnsupportedFormat {
        /// The offending extension without its dot; `None` if there was none.
        extension: Option<String>,
    },

    /// The element file describes something other than triangles.
    #[error("invalid number of nodes per triangle: {nodes_per_triangle}")]
    UnsupportedElement { nodes_per_triangle: u32 },

    /// A file could not be opened or created.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already open stream failed.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// A record is missing fields or holds a non-numeric value.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A parse or stream error, tagged with the file it came from.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<MeshError>,
    },
}

fn describe_extension(extension: &Option<String>) -> String {
    match extension {
        Some(e) => format!(".{e}"),
        None => "no extension".to_string(),
    }
}

impl MeshError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the file a parse or stream error came from.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            Self::Parse { .. } | Self::Stream(_) => Self::InFile {
                path: path.to_path_buf(),
                source: Box::new(self),
            },
            other => other,
        }
    }

    /// Whether this error stems from how the tool was invoked rather than
    /// from the environment or the file contents.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::UnsupportedFormat { .. } | Self::UnsupportedElement { .. } => true,
            Self::InFile { source, .. } => source.is_user_error(),
            _ => false,
        }
    }
}
