//! # Item-level operators: `map` and `filter`.
//!
//! Both operators share one shape: the returned observable's procedure
//! subscribes to the upstream with a small sink that transforms (or drops)
//! each item and forwards error/completion signals unchanged. A failed
//! transform is converted into exactly one `on_error` on the immediate
//! downstream; after that the sink stops invoking the user closure for items
//! still arriving from upstream.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::StreamError;
use crate::observable::Observable;
use crate::observers::{Observer, ObserverRef};

impl<T: Send + 'static> Observable<T> {
    /// Transforms each item with `op`.
    ///
    /// `Err` from `op` is delivered as a single `on_error` downstream; items
    /// still in flight from upstream are dropped without invoking `op` again.
    ///
    /// ## Example
    /// ```
    /// use rxflow::Observable;
    ///
    /// let labels = Observable::create(|obs| {
    ///     obs.on_next(1);
    ///     obs.on_next(2);
    ///     obs.on_complete();
    ///     Ok(())
    /// })
    /// .map(|v| Ok(format!("value_{v}")));
    /// # let _ = labels;
    /// ```
    pub fn map<R, F>(&self, op: F) -> Observable<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Result<R, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let op = Arc::new(op);
        Observable::create(move |downstream: ObserverRef<R>| {
            upstream.subscribe(Arc::new(MapSink {
                downstream,
                op: Arc::clone(&op),
                done: AtomicBool::new(false),
            }));
            Ok(())
        })
    }

    /// Forwards only the items for which `predicate` returns `true`.
    ///
    /// Predicate failures are converted to `on_error` exactly like `map`.
    pub fn filter<F>(&self, predicate: F) -> Observable<T>
    where
        F: Fn(&T) -> Result<bool, StreamError> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let predicate = Arc::new(predicate);
        Observable::create(move |downstream: ObserverRef<T>| {
            upstream.subscribe(Arc::new(FilterSink {
                downstream,
                predicate: Arc::clone(&predicate),
                done: AtomicBool::new(false),
            }));
            Ok(())
        })
    }
}

/// Marks the sink terminal; only the first caller gets `true`.
fn claim(done: &AtomicBool) -> bool {
    !done.swap(true, Ordering::AcqRel)
}

struct MapSink<R, F> {
    downstream: ObserverRef<R>,
    op: Arc<F>,
    done: AtomicBool,
}

impl<T, R, F> Observer<T> for MapSink<R, F>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Result<R, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, item: T) {
        if self.done.load(Ordering::Acquire) {
            return;
        }
        match (self.op)(item) {
            Ok(mapped) => self.downstream.on_next(mapped),
            Err(err) => {
                if claim(&self.done) {
                    self.downstream.on_error(err);
                }
            }
        }
    }

    fn on_error(&self, error: StreamError) {
        if claim(&self.done) {
            self.downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if claim(&self.done) {
            self.downstream.on_complete();
        }
    }
}

struct FilterSink<T, F> {
    downstream: ObserverRef<T>,
    predicate: Arc<F>,
    done: AtomicBool,
}

impl<T, F> Observer<T> for FilterSink<T, F>
where
    T: Send + 'static,
    F: Fn(&T) -> Result<bool, StreamError> + Send + Sync + 'static,
{
    fn on_next(&self, item: T) {
        if self.done.load(Ordering::Acquire) {
            return;
        }
        match (self.predicate)(&item) {
            Ok(true) => self.downstream.on_next(item),
            Ok(false) => {}
            Err(err) => {
                if claim(&self.done) {
                    self.downstream.on_error(err);
                }
            }
        }
    }

    fn on_error(&self, error: StreamError) {
        if claim(&self.done) {
            self.downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if claim(&self.done) {
            self.downstream.on_complete();
        }
    }
}
