//! Numeric codes carried by dispatch errors.
//!
//! Codes follow the JSON-RPC 2.0 ranges:
//! - -32700 to -32600: reserved protocol errors
//! - -32000 to -32099: server errors (-32010 onward for contract call errors)

pub const INVALID_PARAMS: i32 = -32602;
pub const METHOD_NOT_FOUND: i32 = -32601;

// Contract call errors
pub const CALL_REJECTED: i32 = -32010;
pub const SERIALIZATION_FAILED: i32 = -32011;

/// Error category for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Unknown contract or method
    NotFound,
    /// Invalid call arguments
    InvalidInput,
    /// Internal failure (encoding, output)
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Internal => "internal",
        }
    }

    /// sysexits(3) code for this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => 64, // EX_USAGE
            ErrorCategory::NotFound => 69,     // EX_UNAVAILABLE
            ErrorCategory::Internal => 74,     // EX_IOERR
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a numeric code to its category.
pub fn category_for_code(code: i32) -> ErrorCategory {
    match code {
        METHOD_NOT_FOUND => ErrorCategory::NotFound,
        INVALID_PARAMS | CALL_REJECTED => ErrorCategory::InvalidInput,
        _ => ErrorCategory::Internal,
    }
}
