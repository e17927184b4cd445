use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bloom operations
#[derive(Error, Diagnostic, Debug)]
pub enum PosterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(bloom::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bloom::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(bloom::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encoding error: {0}")]
    #[diagnostic(code(bloom::encode))]
    Encode(#[from] serde_json::Error),

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(bloom::param))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PosterError {
    /// Shorthand for an invalid-parameter error with help text.
    pub fn invalid(message: impl Into<String>, help: impl Into<String>) -> Self {
        PosterError::InvalidParameter {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PosterError>;
