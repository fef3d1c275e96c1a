use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::dispatcher::MOCKED_RESULT;

/// Result of a single contract call.
///
/// Records are created fresh for every dispatch and never change afterwards,
/// so fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    contract: String,
    method: String,
    args: Vec<Value>,
    result: String,
}

impl CallRecord {
    pub fn new(
        contract: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Value>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            contract: contract.into(),
            method: method.into(),
            args,
            result: result.into(),
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// True when the record came back from the mock dispatcher.
    pub fn is_mocked(&self) -> bool {
        self.result == MOCKED_RESULT
    }
}
