//! # Stream-level operator: `flat_map`.
//!
//! For each upstream item the mapper produces an *inner* observable which is
//! subscribed to immediately; inner items and inner errors are forwarded
//! straight to the downstream observer.
//!
//! ## Completion semantics
//! Inner completion is intentionally swallowed: only the **outer** stream's
//! completion signals downstream completion. With asynchronous inner sources
//! this means downstream completion can race ahead of in-flight inner
//! emissions; such late items are dropped at the outermost subscription gate
//! rather than delivered after completion.
//!
//! ## Disposal semantics
//! Inner subscriptions are fire-and-forget: their [`Disposable`](crate::Disposable)s
//! are dropped and are never linked to the outer subscription's handle.
//! Disposing the outer handle stops delivery at the outer gate but does not
//! stop inner producers already subscribed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

impl<T: Send + 'static> Observable<T> {
    /// Maps each item to an inner observable and flattens the inner items
    /// into one downstream stream.
    ///
    /// Ordering across different outer items is not guaranteed once inner
    /// sources are asynchronous; order within one inner stream is preserved.
    pub fn flat_map<R, F>(&self, op: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Result<Observable<R>, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let op = Arc::new(op);
        Observable::create(move |downstream: ObserverRef<R>| {
            upstream.subscribe(Arc::new(FlattenSink {
                downstream,
                op: Arc::clone(&op),
                done: AtomicBool::new(false),
            }));
            Ok(())
        })
    }
}

struct FlattenSink<R, F> {
    downstream: ObserverRef<R>,
    op: Arc<F>,
    done: AtomicBool,
}

impl<T, R, F> Observer<T> for FlattenSink<R, F>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Result<Observable<R>, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, item: T) {
        if self.done.load(Ordering::Acquire) {
            return;
        }
        match (self.op)(item) {
            Ok(inner) => {
                // Fire-and-forget: the inner Disposable is dropped.
                inner.subscribe(Arc::new(InnerForwarder {
                    downstream: Arc::clone(&self.downstream),
                }));
            }
            Err(err) => {
                if !self.done.swap(true, Ordering::AcqRel) {
                    self.downstream.on_error(err);
                }
            }
        }
    }

    fn on_error(&self, error: StreamError) {
        if !self.done.swap(true, Ordering::AcqRel) {
            self.downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if !self.done.swap(true, Ordering::AcqRel) {
            self.downstream.on_complete();
        }
    }
}

/// Forwards inner items and errors; swallows inner completion.
struct InnerForwarder<R> {
    downstream: ObserverRef<R>,
}

impl<R: Send + 'static> Observer<R> for InnerForwarder<R> {
    fn on_next(&self, item: R) {
        self.downstream.on_next(item);
    }

    fn on_error(&self, error: StreamError) {
        self.downstream.on_error(error);
    }

    fn on_complete(&self) {
        // Only the outer stream completes the downstream.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::recording::RecordingObserver;

    fn letters(prefix: i32) -> Observable<String> {
        Observable::create(move |obs| {
            obs.on_next(format!("item_{prefix}_a"));
            obs.on_next(format!("item_{prefix}_b"));
            obs.on_complete();
            Ok(())
        })
    }

    #[test]
    fn test_flat_map_flattens_inner_items() {
        let outer = Observable::create(|obs| {
            obs.on_next(1);
            obs.on_next(2);
            obs.on_complete();
            Ok(())
        });

        let recorder = RecordingObserver::<String>::arc();
        outer.flat_map(|i| Ok(letters(i))).subscribe(recorder.clone());

        // Synchronous inner sources: order within each inner stream holds.
        assert_eq!(
            recorder.items(),
            vec!["item_1_a", "item_1_b", "item_2_a", "item_2_b"]
        );
        assert_eq!(recorder.completions(), 1);
        assert!(recorder.error().is_none());
    }

    #[test]
    fn test_inner_completion_is_swallowed() {
        // The outer producer emits one item and returns without a terminal
        // signal, so the only completion in play is the inner one.
        let outer = Observable::create(|obs| {
            obs.on_next(7);
            Ok(())
        });

        let recorder = RecordingObserver::<String>::arc();
        outer.flat_map(|i| Ok(letters(i))).subscribe(recorder.clone());

        assert_eq!(recorder.items(), vec!["item_7_a", "item_7_b"]);
        assert!(!recorder.is_completed());
    }

    #[test]
    fn test_inner_error_is_forwarded_downstream() {
        let outer = Observable::create(|obs| {
            obs.on_next(1);
            obs.on_complete();
            Ok(())
        });

        let recorder = RecordingObserver::<String>::arc();
        outer
            .flat_map(|_| {
                Ok(Observable::create(|obs: ObserverRef<String>| {
                    obs.on_error(StreamError::source("inner failed"));
                    Ok(())
                }))
            })
            .subscribe(recorder.clone());

        assert_eq!(recorder.error(), Some(StreamError::source("inner failed")));
        assert!(recorder.items().is_empty());
    }

    #[test]
    fn test_mapper_failure_becomes_on_error() {
        let outer = Observable::create(|obs| {
            obs.on_next(1);
            obs.on_next(2);
            obs.on_complete();
            Ok(())
        });

        let recorder = RecordingObserver::<String>::arc();
        outer
            .flat_map(|i| {
                if i == 2 {
                    Err(StreamError::transform("no inner for 2"))
                } else {
                    Ok(letters(i))
                }
            })
            .subscribe(recorder.clone());

        assert_eq!(recorder.items(), vec!["item_1_a", "item_1_b"]);
        assert_eq!(
            recorder.error(),
            Some(StreamError::transform("no inner for 2"))
        );
        assert!(!recorder.is_completed());
    }
}
