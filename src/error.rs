//! Error code conventions shared by every error type in the binary.

use planner::persist::PersistError;

/// Grepable error code and retryable flag for error reporting.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

impl ErrorCode for PersistError {
    fn error_code(&self) -> &'static str {
        PersistError::error_code(self)
    }
}
