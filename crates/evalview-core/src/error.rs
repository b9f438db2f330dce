//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Results directory not found: {path}")]
    ResultsDirNotFound { path: PathBuf },

    #[error("Run not found: {timestamp}")]
    RunNotFound { timestamp: String },

    #[error("Test case '{id}' not found in run {timestamp}")]
    CaseNotFound { timestamp: String, id: String },

    #[error("Malformed result file {path}: {message}")]
    MalformedResults { path: PathBuf, message: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    // ─────────────────────────────────────────────────────────────
    // Preview Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Preview error: {message}")]
    Preview { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn preview(message: impl Into<String>) -> Self {
        Self::Preview {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn run_not_found(timestamp: impl Into<String>) -> Self {
        Self::RunNotFound {
            timestamp: timestamp.into(),
        }
    }

    pub fn case_not_found(timestamp: impl Into<String>, id: impl Into<String>) -> Self {
        Self::CaseNotFound {
            timestamp: timestamp.into(),
            id: id.into(),
        }
    }

    pub fn malformed_results(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedResults {
            path: path.into(),
            message: message.into(),
        }
    }

}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
