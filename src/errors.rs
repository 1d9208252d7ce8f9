//! Error types for the fallible surfaces around the transform
//!
//! The transform itself never fails: invalid input yields an empty diagram.
//! Reading documents, loading configuration and rendering exports can.
//!
//! ```rust
//! use json_diagram::errors::DiagramError;
//!
//! let err = DiagramError::UnsupportedFormat("svg".to_string());
//! assert_eq!(err.to_string(), "Unsupported export format: svg");
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagramError {
    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document is not valid JSON
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// CSV export failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Export format name not recognised
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Theme mode name not recognised
    #[error("Invalid theme mode '{0}' - use light or dark")]
    InvalidThemeMode(String),
}

pub type DiagramResult<T> = Result<T, DiagramError>;
