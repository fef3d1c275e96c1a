use std::sync::Arc;
use std::sync::Mutex;

use contract_call_common::mutex_lock_or_recover;
use serde_json::Value;

use crate::dispatcher::ContractDispatcher;
use crate::dispatcher::MockDispatcher;
use crate::record::CallRecord;
use crate::Result;

/// Wraps a dispatcher and keeps every record it returns for later assertions.
///
/// Clones share the same log, so a handle can be given to the code under test
/// while the test keeps another for inspection. Failed dispatches are not
/// logged.
///
/// # Example
///
/// ```
/// use contract_call_core::{ContractDispatcher, RecordingDispatcher, Value};
///
/// let recorder = RecordingDispatcher::mock();
/// recorder.dispatch(".crowdfunding", "contribute", vec![Value::from(1)]).unwrap();
///
/// assert_eq!(recorder.call_count("contribute"), 1);
/// assert_eq!(recorder.args_for("contribute"), vec![vec![Value::from(1)]]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingDispatcher<D = MockDispatcher> {
    inner: D,
    calls: Arc<Mutex<Vec<CallRecord>>>,
}

impl RecordingDispatcher<MockDispatcher> {
    /// Records calls made against the mock dispatcher.
    pub fn mock() -> Self {
        Self::new(MockDispatcher)
    }
}

impl Default for RecordingDispatcher<MockDispatcher> {
    fn default() -> Self {
        Self::mock()
    }
}

impl<D: ContractDispatcher> RecordingDispatcher<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Returns every recorded call, oldest first.
    pub fn calls(&self) -> Vec<CallRecord> {
        mutex_lock_or_recover(&self.calls).clone()
    }

    /// Returns the number of times `method` was called.
    pub fn call_count(&self, method: &str) -> usize {
        mutex_lock_or_recover(&self.calls)
            .iter()
            .filter(|record| record.method() == method)
            .count()
    }

    /// Returns the most recent call to `method`.
    pub fn last_call(&self, method: &str) -> Option<CallRecord> {
        mutex_lock_or_recover(&self.calls)
            .iter()
            .rev()
            .find(|record| record.method() == method)
            .cloned()
    }

    /// Returns the argument lists of every call to `method`, oldest first.
    pub fn args_for(&self, method: &str) -> Vec<Vec<Value>> {
        mutex_lock_or_recover(&self.calls)
            .iter()
            .filter(|record| record.method() == method)
            .map(|record| record.args().to_vec())
            .collect()
    }

    /// Drops all recorded calls.
    pub fn clear(&self) {
        mutex_lock_or_recover(&self.calls).clear();
    }
}

impl<D: ContractDispatcher> ContractDispatcher for RecordingDispatcher<D> {
    #[tracing::instrument(skip(self, args), fields(arg_count = args.len()))]
    fn dispatch(&self, contract: &str, method: &str, args: Vec<Value>) -> Result<CallRecord> {
        let record = self.inner.dispatch(contract, method, args)?;
        mutex_lock_or_recover(&self.calls).push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::error_codes;
    use serde_json::json;
    use std::thread;

    struct RejectingDispatcher;

    impl ContractDispatcher for RejectingDispatcher {
        fn dispatch(&self, _contract: &str, method: &str, _args: Vec<Value>) -> Result<CallRecord> {
            Err(DispatchError::rejected(
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ))
        }
    }

    #[test]
    fn test_recording_returns_inner_record() {
        let recorder = RecordingDispatcher::mock();
        let record = recorder
            .dispatch(".crowdfunding", "get-owner", vec![])
            .unwrap();
        assert!(record.is_mocked());
        assert_eq!(recorder.calls(), vec![record]);
    }

    #[test]
    fn test_recording_tracks_calls() {
        let recorder = RecordingDispatcher::mock();

        recorder
            .dispatch(".crowdfunding", "contribute", vec![json!(1)])
            .unwrap();
        recorder
            .dispatch(".crowdfunding", "get-owner", vec![])
            .unwrap();
        recorder
            .dispatch(".crowdfunding", "contribute", vec![json!(2)])
            .unwrap();

        assert_eq!(recorder.call_count("contribute"), 2);
        assert_eq!(recorder.call_count("get-owner"), 1);
        assert_eq!(recorder.call_count("request-refund"), 0);
        assert_eq!(recorder.calls().len(), 3);
    }

    #[test]
    fn test_recording_last_call() {
        let recorder = RecordingDispatcher::mock();

        recorder.dispatch("c", "contribute", vec![json!(1)]).unwrap();
        recorder.dispatch("c", "contribute", vec![json!(2)]).unwrap();

        let last = recorder.last_call("contribute").unwrap();
        assert_eq!(last.args(), &[json!(2)]);
        assert!(recorder.last_call("add-milestone").is_none());
    }

    #[test]
    fn test_recording_args_for() {
        let recorder = RecordingDispatcher::mock();

        recorder.dispatch("c", "contribute", vec![json!(1)]).unwrap();
        recorder.dispatch("c", "other", vec![json!("x")]).unwrap();
        recorder.dispatch("c", "contribute", vec![json!(3)]).unwrap();

        assert_eq!(
            recorder.args_for("contribute"),
            vec![vec![json!(1)], vec![json!(3)]]
        );
    }

    #[test]
    fn test_recording_clear() {
        let recorder = RecordingDispatcher::mock();
        recorder.dispatch("c", "m", vec![]).unwrap();

        recorder.clear();

        assert!(recorder.calls().is_empty());
        assert_eq!(recorder.call_count("m"), 0);
    }

    #[test]
    fn test_clones_share_log() {
        let recorder = RecordingDispatcher::mock();
        let handle = recorder.clone();

        handle.dispatch("c", "contribute", vec![json!(1)]).unwrap();

        assert_eq!(recorder.call_count("contribute"), 1);
    }

    #[test]
    fn test_failed_dispatch_is_propagated_and_not_logged() {
        let recorder = RecordingDispatcher::new(RejectingDispatcher);

        let err = recorder.dispatch("c", "vote", vec![]).unwrap_err();

        assert_eq!(err.code(), error_codes::METHOD_NOT_FOUND);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_concurrent_dispatches_are_each_logged_once() {
        let recorder = RecordingDispatcher::mock();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    recorder
                        .dispatch(".crowdfunding", "contribute", vec![json!(i)])
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(recorder.call_count("contribute"), 8);
        let mut seen: Vec<i64> = recorder
            .args_for("contribute")
            .iter()
            .map(|args| args[0].as_i64().unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }
}
