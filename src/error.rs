//! Error types for Gmail WEEE

use thiserror::Error;

/// Main error type for scan and export operations
#[derive(Error, Debug)]
#[allow(dead_code)] // Some variants are reserved for future use
pub enum GmailWeeeError {
    /// Could not connect or authenticate to the IMAP server
    #[error("connection failed: {0}")]
    Connection(String),

    /// No sent folder matched any known alias
    #[error("no sent folder found (tried: {0})")]
    FolderNotFound(String),

    /// One message could not be fetched or parsed; the scan skips it
    #[error("message error: {0}")]
    Message(String),

    /// IMAP protocol error
    #[error("IMAP error: {0}")]
    Imap(#[from] imap::error::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Gmail WEEE operations
pub type Result<T> = std::result::Result<T, GmailWeeeError>;
