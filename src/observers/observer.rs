//! # Observer: the three-event sink contract
//!
//! The [`Observer`] trait is the main **extension point** for end users and
//! the contract every pipeline stage implements and calls. An observable
//! pushes items into an observer; operators are themselves small observers
//! wrapping a downstream [`ObserverRef`].
//!
//! # High-level architecture:
//! ```text
//! Event flow (bottom-up, per subscription):
//!   producer ── on_next(item) ──► gate ──► operator sink ──► ... ──► terminal Observer
//!                 on_error(err) ──►  (each stage forwards, transforms,
//!                 on_complete() ──►   or drops the signal)
//!
//! User-defined observers:
//!   - implement [`Observer`] (or pass three closures via `subscribe_with`)
//!   - receive items in emission order, then at most one terminal signal
//!
//! Provided implementations:
//!   - [`FnObserver`](crate::FnObserver) → three-closure sink
//!   - `LogObserver` (enabled via `logging` feature) → prints events to stdout
//! ```
//!
//! # Example: custom observer
//! ```
//! use rxflow::{Observable, Observer, StreamError};
//!
//! struct Printer;
//!
//! impl Observer<i32> for Printer {
//!     fn on_next(&self, item: i32) {
//!         println!("got {item}");
//!     }
//!     fn on_error(&self, error: StreamError) {
//!         eprintln!("failed: {error}");
//!     }
//!     fn on_complete(&self) {
//!         println!("done");
//!     }
//! }
//!
//! let numbers: Observable<i32> = Observable::create(|obs| {
//!     obs.on_next(1);
//!     obs.on_next(2);
//!     obs.on_complete();
//!     Ok(())
//! });
//! numbers.subscribe(std::sync::Arc::new(Printer));
//! ```

use std::sync::Arc;

use crate::error::StreamError;

/// Shared handle to a type-erased observer.
///
/// Subscription procedures may run on a scheduler worker rather than the
/// thread that built the pipeline, so observers are always passed around as
/// `Arc`s.
pub type ObserverRef<T> = Arc<dyn Observer<T>>;

/// # Contract for receiving a subscription's events.
///
/// A well-behaved source calls `on_next` zero or more times, then at most one
/// of `on_error` / `on_complete`, after which the subscription is terminal.
/// The subscription boundary enforces this: events arriving after a terminal
/// signal (or after disposal) are dropped, not delivered.
///
/// Methods take `&self`: an observer may be invoked from another thread after
/// an `observe_on`/`subscribe_on` hop, so any internal state must be
/// thread-safe.
pub trait Observer<T>: Send + Sync + 'static {
    /// Called for each item the source emits.
    fn on_next(&self, item: T);

    /// Called at most once when the source (or an operator) fails.
    fn on_error(&self, error: StreamError);

    /// Called at most once when the source completes normally.
    fn on_complete(&self);
}
