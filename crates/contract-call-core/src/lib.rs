#![deny(clippy::all)]

mod dispatcher;
mod error;
pub mod error_codes;
mod record;
mod recording;

pub use dispatcher::contract_call;
pub use dispatcher::ContractDispatcher;
pub use dispatcher::MockDispatcher;
pub use dispatcher::MOCKED_RESULT;
pub use error::DispatchError;
pub use record::CallRecord;
pub use recording::RecordingDispatcher;

pub use serde_json::Value;

// Used by `contract_call!` so callers need no direct serde_json dependency.
#[doc(hidden)]
pub use serde_json as __serde_json;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Issues a mock contract call with a variadic argument list.
///
/// Each argument is converted with `serde_json::json!`, so integers, strings,
/// booleans and anything `Serialize` can be mixed freely.
///
/// ```
/// use contract_call_core::{contract_call, MOCKED_RESULT};
///
/// let record = contract_call!(".crowdfunding", "create-project", 1, 1000000000, 1700000000);
/// assert_eq!(record.result(), MOCKED_RESULT);
/// assert_eq!(record.args().len(), 3);
///
/// let owner = contract_call!(".crowdfunding", "get-owner");
/// assert!(owner.args().is_empty());
/// ```
#[macro_export]
macro_rules! contract_call {
    ($contract:expr, $method:expr $(, $arg:expr)* $(,)?) => {
        $crate::contract_call(
            $contract,
            $method,
            ::std::vec![$($crate::__serde_json::json!($arg)),*],
        )
    };
}
