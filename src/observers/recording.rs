//! Test-only observer that records everything it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::StreamError;
use crate::observers::observer::Observer;

/// Records items, the error (if any), and the number of completion signals.
///
/// Counters are atomic and the item log is mutex-guarded, so a single
/// recorder can sit at the end of a pipeline that hops threads.
pub(crate) struct RecordingObserver<T> {
    items: Mutex<Vec<T>>,
    error: Mutex<Option<StreamError>>,
    completions: AtomicUsize,
}

impl<T> RecordingObserver<T> {
    pub(crate) fn arc() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(Vec::new()),
            error: Mutex::new(None),
            completions: AtomicUsize::new(0),
        })
    }

    pub(crate) fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.lock().unwrap().clone()
    }

    pub(crate) fn error(&self) -> Option<StreamError> {
        self.error.lock().unwrap().clone()
    }

    pub(crate) fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completions() > 0
    }
}

impl<T> Observer<T> for RecordingObserver<T>
where
    T: Send + Sync + 'static,
{
    fn on_next(&self, item: T) {
        self.items.lock().unwrap().push(item);
    }

    fn on_error(&self, error: StreamError) {
        *self.error.lock().unwrap() = Some(error);
    }

    fn on_complete(&self) {
        self.completions.fetch_add(1, Ordering::SeqCst);
    }
}
