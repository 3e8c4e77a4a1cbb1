use miette::Diagnostic;
use thiserror::Error;

/// Main error type for symbols operations
#[derive(Error, Diagnostic, Debug)]
pub enum SymbolsError {
    #[error("Font error: {message}")]
    #[diagnostic(code(symbols::font))]
    Font {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Canvas error: {message}")]
    #[diagnostic(code(symbols::canvas))]
    Canvas {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(symbols::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {message}")]
    #[diagnostic(code(symbols::json))]
    Json { message: String },
}

pub type Result<T> = std::result::Result<T, SymbolsError>;
