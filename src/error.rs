//! Error types for csvwizard

use thiserror::Error;

/// Result type alias for csvwizard operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Error returned by the record sink or by a malformed committed row.
///
/// Sequencing mistakes (adding a header after the lock, writing rows before it)
/// are not represented here: they panic.
#[derive(Error, Debug)]
pub enum TableError {
    /// The encoder rejected a record for a reason other than I/O
    #[error("Failed to write record: {0}")]
    WriteError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A caller-owned row does not have one cell per header
    #[error("Row has {actual} cells but {expected} headers are registered")]
    RowWidthMismatch { expected: usize, actual: usize },
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => TableError::IoError(io),
                other => TableError::WriteError(format!("{:?}", other)),
            }
        } else {
            TableError::WriteError(err.to_string())
        }
    }
}
