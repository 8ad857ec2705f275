//! # Thread-hop combinators: `subscribe_on` and `observe_on`.
//!
//! These are the only places execution crosses a thread boundary, and both do
//! so by posting a [`Job`](crate::Job) to a [`Scheduler`](crate::Scheduler),
//! never by blocking.
//!
//! ```text
//! source.subscribe_on(io).observe_on(single).subscribe(sink)
//!
//!   caller thread:   subscribe() ──► post job ──► return Disposable
//!   io worker:       producer runs, emits items
//!   single worker:   each item delivered to sink, one job per event
//! ```

use std::sync::Arc;

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};
use crate::schedulers::SchedulerRef;

impl<T: Send + 'static> Observable<T> {
    /// Moves the subscription itself - and with it the producer and every
    /// upstream stage that runs synchronously inside it - onto `scheduler`.
    ///
    /// `subscribe` returns immediately with the *outer* gating
    /// [`Disposable`](crate::Disposable); disposing it stops events from
    /// passing the outer gate but cannot stop the scheduled job from starting
    /// or running.
    pub fn subscribe_on(&self, scheduler: SchedulerRef) -> Observable<T> {
        let upstream = self.clone();
        Observable::create(move |observer: ObserverRef<T>| {
            let upstream = upstream.clone();
            log::trace!("hopping subscription to '{}'", scheduler.name());
            scheduler.execute(Box::new(move || {
                // The job's own Disposable is discarded; the outer gate is
                // the caller's only handle.
                upstream.subscribe(observer);
            }));
            Ok(())
        })
    }

    /// Keeps upstream production where it is and relocates only delivery:
    /// each `on_next`/`on_error`/`on_complete` is posted to `scheduler` as an
    /// independent job.
    ///
    /// Relative ordering of delivered events is governed by the backend: a
    /// single-worker scheduler preserves arrival order, pooled backends do
    /// not.
    pub fn observe_on(&self, scheduler: SchedulerRef) -> Observable<T> {
        let upstream = self.clone();
        Observable::create(move |observer: ObserverRef<T>| {
            upstream.subscribe(Arc::new(HopSink {
                downstream: observer,
                scheduler: Arc::clone(&scheduler),
            }));
            Ok(())
        })
    }
}

/// Posts each downstream callback as one scheduler job.
struct HopSink<T> {
    downstream: ObserverRef<T>,
    scheduler: SchedulerRef,
}

impl<T: Send + 'static> Observer<T> for HopSink<T> {
    fn on_next(&self, item: T) {
        let downstream = Arc::clone(&self.downstream);
        self.scheduler
            .execute(Box::new(move || downstream.on_next(item)));
    }

    fn on_error(&self, error: StreamError) {
        let downstream = Arc::clone(&self.downstream);
        self.scheduler
            .execute(Box::new(move || downstream.on_error(error)));
    }

    fn on_complete(&self) {
        let downstream = Arc::clone(&self.downstream);
        self.scheduler
            .execute(Box::new(move || downstream.on_complete()));
    }
}
