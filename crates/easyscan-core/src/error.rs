use std::path::PathBuf;

/// Unified error type for easyscan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Cannot resolve package path for {}: {reason}", path.display())]
    PathResolution { path: PathBuf, reason: String },

    #[error("{}:{line}:{column}: {message}", file.display())]
    Syntax {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Language error: {0}")]
    Language(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Shorthand for a path resolution failure.
    pub fn path_resolution(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::PathResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_path_resolution(&self) -> bool {
        matches!(self, Self::PathResolution { .. })
    }
}
