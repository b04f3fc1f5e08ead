//! Stable error codes for transport and UI layers.

/// Every error enum implements this to expose a structured code string
/// that outer layers translate into user-facing messages.
pub trait OntographErrorCode {
    /// Returns the error code string (e.g., "ELEMENT_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ELEMENT_NOT_FOUND: &str = "ELEMENT_NOT_FOUND";
pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
pub const CLONE_NOT_FOUND: &str = "CLONE_NOT_FOUND";
pub const CLONE_CONFLICT: &str = "CLONE_CONFLICT";
pub const GRAPH_NOT_FOUND: &str = "GRAPH_NOT_FOUND";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
