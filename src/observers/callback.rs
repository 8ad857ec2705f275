//! # Closure-backed observer (`FnObserver`)
//!
//! [`FnObserver`] assembles an [`Observer`] from three closures, so callers
//! can subscribe without declaring a sink type. This backs the convenience
//! form [`Observable::subscribe_with`](crate::Observable::subscribe_with).
//!
//! ## Example
//! ```
//! use rxflow::{FnObserver, Observer, ObserverRef, StreamError};
//!
//! let sink: ObserverRef<i32> = FnObserver::arc(
//!     |item| println!("got {item}"),
//!     |err: StreamError| eprintln!("failed: {err}"),
//!     || println!("done"),
//! );
//! sink.on_next(7);
//! sink.on_complete();
//! ```

use std::sync::Arc;

use crate::error::StreamError;
use crate::observers::observer::Observer;

/// Observer assembled from three closures.
///
/// The closures are `Fn` (not `FnMut`): the observer may be shared across
/// threads after a scheduler hop, so any mutable state must be owned via
/// `Arc<Mutex<...>>` or atomics inside the closure.
pub struct FnObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_complete: C,
}

impl<N, E, C> FnObserver<N, E, C> {
    /// Creates a new closure-backed observer.
    ///
    /// Prefer [`FnObserver::arc`] when you immediately need an
    /// [`ObserverRef`](crate::ObserverRef).
    pub fn new(on_next: N, on_error: E, on_complete: C) -> Self {
        Self {
            on_next,
            on_error,
            on_complete,
        }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(on_next: N, on_error: E, on_complete: C) -> Arc<Self> {
        Arc::new(Self::new(on_next, on_error, on_complete))
    }
}

impl<T, N, E, C> Observer<T> for FnObserver<N, E, C>
where
    T: Send + 'static,
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(StreamError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    fn on_next(&self, item: T) {
        (self.on_next)(item);
    }

    fn on_error(&self, error: StreamError) {
        (self.on_error)(error);
    }

    fn on_complete(&self) {
        (self.on_complete)();
    }
}
