//! Trailing-edge debouncing of user edits.
//!
//! Each logical input owns one slot. Scheduling into an occupied slot aborts
//! the pending action, so only the last edit inside the window runs.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Delay after the last keystroke in the search box.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delay after the last keystroke in a range bound input.
pub const RANGE_DEBOUNCE: Duration = Duration::from_millis(400);

pub struct Debouncer<K> {
    pending: Mutex<HashMap<K, JoinHandle<()>>>,
}

impl<K> Default for Debouncer<K> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Send + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once `delay` has passed without another schedule for `key`.
    ///
    /// The action runs synchronously on the timer task, so an abort can only
    /// land while it is still waiting. Must be called inside a tokio runtime.
    pub fn schedule<F>(&self, key: K, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action();
        });

        if let Some(previous) = self.pending.lock().insert(key, handle) {
            previous.abort();
        }
    }

    pub fn cancel_all(&self) {
        for (_, handle) in self.pending.lock().drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    fn is_pending(&self, key: &K) -> bool {
        self.pending
            .lock()
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<K> Drop for Debouncer<K> {
    fn drop(&mut self) {
        for (_, handle) in self.pending.get_mut().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_action() {
        let debouncer = Debouncer::new();
        let last = Arc::new(Mutex::new(Vec::new()));

        for text in ["f", "fr", "fra"] {
            let last = last.clone();
            debouncer.schedule("search", SEARCH_DEBOUNCE, move || last.lock().push(text));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(last.lock().is_empty());

        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        settle().await;
        assert_eq!(*last.lock(), vec!["fra"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let debouncer = Debouncer::new();
        let count = Arc::new(AtomicUsize::new(0));

        for key in ["min", "max"] {
            let count = count.clone();
            debouncer.schedule(key, RANGE_DEBOUNCE, move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(RANGE_DEBOUNCE + Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_action() {
        let debouncer = Debouncer::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = count.clone();
        debouncer.schedule(1u8, SEARCH_DEBOUNCE, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;
        assert!(debouncer.is_pending(&1));
        debouncer.cancel_all();
        assert!(!debouncer.is_pending(&1));

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
