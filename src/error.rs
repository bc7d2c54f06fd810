//! Error types for the transcript reconstruction library.
//!
//! This module defines all error types that can occur while turning positioned
//! text fragments into paragraphs.

/// Result type alias for transcript reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during transcript reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Column inference failed: the document has no continuation-column lines,
    /// so the continuation threshold cannot be established and paragraphs
    /// cannot be reconstructed.
    #[error("column inference failed: no continuation-column lines detected")]
    ColumnInference,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed fragment dump
    #[error("invalid fragment dump: {0}")]
    InvalidDump(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_inference_error() {
        let err = Error::ColumnInference;
        let msg = format!("{}", err);
        assert!(msg.contains("column inference failed"));
        assert!(msg.contains("continuation"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        let msg = format!("{}", err);
        assert!(msg.contains("IO error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
