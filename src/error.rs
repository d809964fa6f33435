//! Error handling for Tagscope
//!
//! Both tools fail fast: every error ends the run with a message and a
//! nonzero exit status. Nothing is retried and no partial output is written.

use thiserror::Error;

/// Result type alias for Tagscope operations
pub type Result<T> = std::result::Result<T, TagscopeError>;

/// Main error type for Tagscope operations
#[derive(Error, Debug)]
pub enum TagscopeError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to read trace file: {path}")]
    TraceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Alignment Errors
    #[error("Invalid exchange count '{value}': expected a positive integer")]
    InvalidExchangeCount { value: String },

    #[error("Anchor marker on line {line} has no preceding header line")]
    AnchorWithoutHeader { line: usize },

    #[error("{trace} trace index {index} out of range (trace has {len} lines)")]
    BlockOutOfRange {
        trace: &'static str,
        index: usize,
        len: usize,
    },

    // Audio Errors
    #[error("Failed to read audio file: {path}")]
    AudioReadError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    // Display Errors
    #[error("Plot window failed: {reason}")]
    DisplayError { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TagscopeError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TagscopeError::FileNotFound { .. } => "FILE_NOT_FOUND",
            TagscopeError::TraceRead { .. } => "TRACE_READ",
            TagscopeError::InvalidExchangeCount { .. } => "INVALID_EXCHANGE_COUNT",
            TagscopeError::AnchorWithoutHeader { .. } => "ANCHOR_WITHOUT_HEADER",
            TagscopeError::BlockOutOfRange { .. } => "BLOCK_OUT_OF_RANGE",
            TagscopeError::AudioReadError { .. } => "AUDIO_READ_ERROR",
            TagscopeError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            TagscopeError::DisplayError { .. } => "DISPLAY_ERROR",
            TagscopeError::Io(_) => "IO_ERROR",
            TagscopeError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the error points at the capture data rather than the environment
    ///
    /// Capture errors mean the traces or the recording need re-checking;
    /// the rest are about paths, permissions or the display.
    pub fn is_capture_error(&self) -> bool {
        matches!(
            self,
            TagscopeError::AnchorWithoutHeader { .. }
                | TagscopeError::BlockOutOfRange { .. }
                | TagscopeError::UnsupportedFormat { .. }
        )
    }
}
