use contract_call_core::error_codes::ErrorCategory;
use contract_call_core::DispatchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to encode output: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::Dispatch(err) => err.category(),
            CliError::InvalidArgument(_) => ErrorCategory::InvalidInput,
            CliError::Encoding(_) | CliError::Output(_) => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::InvalidArgument(_) => {
                Some("Raise CONTRACT_CALL_MAX_ARGS or pass fewer arguments.")
            }
            CliError::Dispatch(DispatchError::Rejected { .. }) => {
                Some("Check the contract identifier and method name.")
            }
            _ => None,
        }
    }
}
