use serde_json::Value;
use tracing::debug;

use crate::record::CallRecord;
use crate::Result;

/// The result string every mock call returns.
pub const MOCKED_RESULT: &str = "mocked result";

/// Simulates invoking `method` on `contract`.
///
/// Contract and method are echoed verbatim and never validated. The result is
/// always [`MOCKED_RESULT`]; nothing is retained between calls.
pub fn contract_call(
    contract: impl Into<String>,
    method: impl Into<String>,
    args: Vec<Value>,
) -> CallRecord {
    CallRecord::new(contract, method, args, MOCKED_RESULT)
}

/// Anything that can turn a contract call into a [`CallRecord`].
pub trait ContractDispatcher {
    fn dispatch(&self, contract: &str, method: &str, args: Vec<Value>) -> Result<CallRecord>;
}

impl<D: ContractDispatcher + ?Sized> ContractDispatcher for &D {
    fn dispatch(&self, contract: &str, method: &str, args: Vec<Value>) -> Result<CallRecord> {
        (**self).dispatch(contract, method, args)
    }
}

impl<D: ContractDispatcher + ?Sized> ContractDispatcher for Box<D> {
    fn dispatch(&self, contract: &str, method: &str, args: Vec<Value>) -> Result<CallRecord> {
        (**self).dispatch(contract, method, args)
    }
}

/// Stateless dispatcher backed by [`contract_call`]. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockDispatcher;

impl MockDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl ContractDispatcher for MockDispatcher {
    fn dispatch(&self, contract: &str, method: &str, args: Vec<Value>) -> Result<CallRecord> {
        debug!(contract, method, arg_count = args.len(), "mock contract call");
        Ok(contract_call(contract, method, args))
    }
}
