//! # Observable: lazy, cold, push-based pipelines
//!
//! An [`Observable<T>`] is a reusable description of an event-producing
//! procedure. Nothing runs until [`Observable::subscribe`] is called; each
//! subscription re-runs the producer from scratch (cold semantics).
//!
//! ## Subscription flow
//! ```text
//! source.map(f).filter(p).subscribe(observer)
//!
//!   subscribe(observer)                       (control flows top-down)
//!     └─► filter's procedure
//!           └─► map's procedure
//!                 └─► source producer
//!
//!   producer ── on_next ──► gate ──► map sink ──► gate ──► filter sink
//!                  (events flow bottom-up)          └─► gate ──► observer
//! ```
//!
//! Every `subscribe` wraps the caller's observer in a gate that owns the
//! subscription's [`Disposable`] flag and the terminal-signal latch, so each
//! operator boundary inherits correct disposal and at-most-one-terminal
//! behavior from the core.

mod flatten;
mod gate;
mod hop;
mod transform;

use std::sync::Arc;

use crate::disposable::Disposable;
use crate::error::StreamError;
use crate::observers::{FnObserver, ObserverRef};

use gate::SubscriptionGate;

/// The subscription procedure: push events into the given observer, return
/// `Err` to signal a synchronous producer failure.
type SourceFn<T> = dyn Fn(ObserverRef<T>) -> Result<(), StreamError> + Send + Sync;

/// A lazy, cold, unicast stream of `T`.
///
/// Wraps a single subscription procedure. Immutable once created and cheap to
/// clone (clones share the procedure); every operator returns a *new*
/// `Observable` wrapping the upstream one, never mutating it.
///
/// ## Example
/// ```
/// use rxflow::{Observable, StreamError};
///
/// let numbers = Observable::create(|obs| {
///     for i in 1..=3 {
///         obs.on_next(i);
///     }
///     obs.on_complete();
///     Ok(())
/// });
///
/// numbers
///     .map(|v| Ok(v * 10))
///     .subscribe_with(
///         |v| println!("got {v}"),
///         |err: StreamError| eprintln!("failed: {err}"),
///         || println!("done"),
///     );
/// ```
pub struct Observable<T> {
    source: Arc<SourceFn<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Creates an observable from a producer procedure.
    ///
    /// The producer is stored unexecuted. When a subscription invokes it, it
    /// may call `on_next` any number of times followed by at most one
    /// terminal signal. Returning `Err` is equivalent to calling `on_error`:
    /// the subscription forwards it as a single error event.
    pub fn create<F>(producer: F) -> Self
    where
        F: Fn(ObserverRef<T>) -> Result<(), StreamError> + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(producer),
        }
    }

    /// Runs the producer synchronously against `observer` and returns the
    /// subscription's cancellation handle.
    ///
    /// The observer is wrapped in a gate that drops all events once the
    /// returned [`Disposable`] is disposed, and drops anything following the
    /// first terminal signal. Disposal is advisory: it stops delivery at this
    /// boundary but does not interrupt a producer already running.
    pub fn subscribe(&self, observer: ObserverRef<T>) -> Disposable {
        let disposable = Disposable::new();
        let gate: ObserverRef<T> =
            Arc::new(SubscriptionGate::new(observer, disposable.clone()));

        log::trace!("subscription started");
        if let Err(err) = (self.source)(Arc::clone(&gate)) {
            log::debug!("producer failed: {}", err.as_label());
            gate.on_error(err);
        }
        disposable
    }

    /// Subscribes with three closures instead of an [`Observer`](crate::Observer)
    /// implementation.
    pub fn subscribe_with<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> Disposable
    where
        N: Fn(T) + Send + Sync + 'static,
        E: Fn(StreamError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.subscribe(FnObserver::arc(on_next, on_error, on_complete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::recording::RecordingObserver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_subscribe_collects_items_in_order() {
        let numbers = Observable::create(|obs| {
            obs.on_next("test1");
            obs.on_next("test2");
            obs.on_complete();
            Ok(())
        });

        let recorder = RecordingObserver::<&str>::arc();
        numbers.subscribe(recorder.clone());

        assert_eq!(recorder.items(), vec!["test1", "test2"]);
        assert_eq!(recorder.completions(), 1);
        assert!(recorder.error().is_none());
    }

    #[test]
    fn test_error_signal_is_terminal_and_not_completion() {
        let source = Observable::create(|obs| {
            obs.on_next("item1");
            obs.on_error(StreamError::source("boom"));
            Ok(())
        });

        let recorder = RecordingObserver::<&str>::arc();
        source.subscribe(recorder.clone());

        assert_eq!(recorder.items(), vec!["item1"]);
        assert_eq!(recorder.error(), Some(StreamError::source("boom")));
        assert!(!recorder.is_completed());
    }

    #[test]
    fn test_producer_failure_becomes_one_on_error() {
        let source: Observable<&str> = Observable::create(|obs| {
            obs.on_next("before");
            Err(StreamError::source("producer blew up"))
        });

        let recorder = RecordingObserver::<&str>::arc();
        source.subscribe(recorder.clone());

        assert_eq!(recorder.items(), vec!["before"]);
        assert_eq!(
            recorder.error(),
            Some(StreamError::source("producer blew up"))
        );
        assert!(!recorder.is_completed());
    }

    #[test]
    fn test_cold_source_replays_for_each_subscriber() {
        let runs = Arc::new(AtomicUsize::new(0));
        let source = {
            let runs = Arc::clone(&runs);
            Observable::create(move |obs| {
                runs.fetch_add(1, Ordering::SeqCst);
                obs.on_next(1);
                obs.on_next(2);
                obs.on_complete();
                Ok(())
            })
        };

        let first = RecordingObserver::<i32>::arc();
        let second = RecordingObserver::<i32>::arc();
        source.subscribe(first.clone());
        source.subscribe(second.clone());

        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(first.items(), vec![1, 2]);
        assert_eq!(second.items(), vec![1, 2]);
        assert!(first.is_completed() && second.is_completed());
    }

    #[test]
    fn test_nothing_is_delivered_after_a_terminal_signal() {
        let source = Observable::create(|obs| {
            obs.on_complete();
            obs.on_next("late");
            obs.on_error(StreamError::source("late"));
            obs.on_complete();
            Ok(())
        });

        let recorder = RecordingObserver::<&str>::arc();
        source.subscribe(recorder.clone());

        assert!(recorder.items().is_empty());
        assert!(recorder.error().is_none());
        assert_eq!(recorder.completions(), 1);
    }

    #[test]
    fn test_disposed_subscription_drops_all_events() {
        // Stash the gate the producer receives so events can be pushed after
        // the subscribe call returned and the handle was disposed.
        let stash: Arc<Mutex<Option<ObserverRef<i32>>>> = Arc::new(Mutex::new(None));
        let source = {
            let stash = Arc::clone(&stash);
            Observable::create(move |obs| {
                *stash.lock().unwrap() = Some(obs);
                Ok(())
            })
        };

        let recorder = RecordingObserver::<i32>::arc();
        let disposable = source.subscribe(recorder.clone());
        disposable.dispose();
        assert!(disposable.is_disposed());

        let gate = stash.lock().unwrap().take().unwrap();
        gate.on_next(1);
        gate.on_error(StreamError::source("dropped"));
        gate.on_complete();

        assert!(recorder.items().is_empty());
        assert!(recorder.error().is_none());
        assert!(!recorder.is_completed());
    }

    #[test]
    fn test_subscribe_with_routes_three_callbacks() {
        let source = Observable::create(|obs| {
            obs.on_next(5);
            obs.on_complete();
            Ok(())
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let completed = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            let completed = Arc::clone(&completed);
            source.subscribe_with(
                move |item| seen.lock().unwrap().push(item),
                |_err| panic!("unexpected error"),
                move || {
                    completed.fetch_add(1, Ordering::SeqCst);
                },
            );
        }

        assert_eq!(*seen.lock().unwrap(), vec![5]);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }
}
