//! Error types for the vc-app service layer.

use std::path::PathBuf;

use vc_correction::CorrectionError;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Ticket error: {0}")]
    Ticket(String),

    #[error("Failed to read ticket file: {path}")]
    TicketFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write ticket file: {path}")]
    TicketFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported ticket format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Ticket validation failed: {0}")]
    Validation(String),

    #[error("Reading not found: {0}")]
    ReadingNotFound(String),

    #[error("Reading '{reading_id}' rejected: {source}")]
    Correction {
        reading_id: String,
        source: CorrectionError,
    },

    #[error("Correction failed: {0}")]
    Engine(#[from] CorrectionError),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<vc_ticket::TicketError> for AppError {
    fn from(err: vc_ticket::TicketError) -> Self {
        match err {
            vc_ticket::TicketError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Ticket(other.to_string()),
        }
    }
}

impl From<vc_ticket::ValidationError> for AppError {
    fn from(err: vc_ticket::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    /// Attach the offending reading to an engine error.
    pub fn for_reading(reading_id: &str, source: CorrectionError) -> Self {
        AppError::Correction {
            reading_id: reading_id.to_string(),
            source,
        }
    }
}
