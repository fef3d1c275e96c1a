use std::sync::Mutex;
use std::sync::MutexGuard;

/// Locks `lock`, taking over the guard if a previous holder panicked.
///
/// The call log only ever grows by whole records, so the data behind a
/// poisoned lock is still consistent.
pub fn mutex_lock_or_recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("recovering from poisoned mutex");
        poisoned.into_inner()
    })
}
