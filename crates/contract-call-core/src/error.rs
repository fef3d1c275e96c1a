use thiserror::Error;

use crate::error_codes;
use crate::error_codes::ErrorCategory;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to serialize call record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Call rejected ({code}): {message}")]
    Rejected { code: i32, message: String },
}

impl DispatchError {
    pub fn rejected(code: i32, message: impl Into<String>) -> Self {
        DispatchError::Rejected {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            DispatchError::Serialization(_) => error_codes::SERIALIZATION_FAILED,
            DispatchError::Rejected { code, .. } => *code,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        error_codes::category_for_code(self.code())
    }
}
