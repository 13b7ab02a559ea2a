use std::path::PathBuf;

/// Errors raised while loading, normalizing or persisting gestures
#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("Parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Schema error in {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GestureError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Sort a serde_json failure into the syntax/schema/io buckets
    pub fn from_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let path = path.into();
        match source.classify() {
            Category::Data => Self::Schema { path, source },
            Category::Syntax | Category::Eof => Self::Parse { path, source },
            Category::Io => {
                let io_error = std::io::Error::from(source);
                Self::Io {
                    path,
                    source: io_error,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;
