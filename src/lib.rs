//! # rxflow
//!
//! **rxflow** is a minimal reactive-streams core for Rust.
//!
//! It provides a lazy, cold, push-based [`Observable`] pipeline abstraction
//! with composable operators, cooperative cancellation, and pluggable
//! [`Scheduler`] backends that decouple *where* work runs from *what* work
//! runs. The crate is designed as a building block, not a full Rx
//! implementation: no backpressure, no multi-source combinators, no hot
//! (multicast) sources.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   Observable::create(producer)        (nothing runs yet - lazy)
//!        │
//!        ├─ .map(f) ──► new Observable wrapping the old one's procedure
//!        ├─ .filter(p)
//!        ├─ .flat_map(g)
//!        ├─ .subscribe_on(scheduler)   - producer hops to a worker
//!        └─ .observe_on(scheduler)     - delivery hops to a worker
//!        │
//!   .subscribe(observer) ──► Disposable
//!        │
//!        ▼  (control flows top-down, one procedure invoking the next)
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │ gate ◄── operator sink ◄── gate ◄── ... ◄── producer         │
//!   │ (events flow bottom-up; each subscribe boundary gates on     │
//!   │  the Disposable flag and the terminal-signal latch)          │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Observable ── subscribe(observer)
//!   ├─► fresh Disposable (shared atomic flag)
//!   ├─► gate wraps observer (dispose/terminal checks per event)
//!   ├─► producer runs synchronously, exactly once
//!   │     ├─ on_next*  ──► through the operator chain
//!   │     └─ Ok / Err  ──► Err forwarded as one on_error
//!   └─► Disposable returned to the caller
//!
//! dispose():
//!   - idempotent, thread-safe, advisory
//!   - stops delivery at this subscription's gate
//!   - does NOT interrupt a running producer or cancel queued jobs
//! ```
//!
//! ## Features
//! | Area            | Description                                             | Key types / traits                    |
//! |-----------------|---------------------------------------------------------|----------------------------------------|
//! | **Pipelines**   | Lazy cold sources, composed by chaining operators.      | [`Observable`]                         |
//! | **Sinks**       | Three-event observer contract plus closure convenience. | [`Observer`], [`FnObserver`]           |
//! | **Cancellation**| Advisory, idempotent, per-subscription.                 | [`Disposable`]                         |
//! | **Scheduling**  | Submit-and-return execution contexts over thread pools. | [`Scheduler`], [`ComputationScheduler`], [`IoScheduler`], [`SingleScheduler`] |
//! | **Errors**      | Typed error channel and backend construction errors.    | [`StreamError`], [`SchedulerError`]    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogObserver` _(demo/reference only)_.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use rxflow::{Observable, SingleScheduler, StreamError};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let worker = Arc::new(SingleScheduler::new()?);
//!
//!     let pipeline = Observable::create(|obs| {
//!         for i in 1..=4 {
//!             obs.on_next(i);
//!         }
//!         obs.on_complete();
//!         Ok(())
//!     })
//!     .filter(|v| Ok(v % 2 == 0))
//!     .map(|v| Ok(format!("value_{v}")))
//!     .observe_on(worker);
//!
//!     let disposable = pipeline.subscribe_with(
//!         |item| println!("{item}"),
//!         |err: StreamError| eprintln!("failed: {err}"),
//!         || println!("done"),
//!     );
//!
//!     // Advisory cancellation: stops delivery, not in-flight work.
//!     disposable.dispose();
//!     Ok(())
//! }
//! ```

mod disposable;
mod error;
mod observable;
mod observers;
mod schedulers;

// ---- Public re-exports ----

pub use disposable::Disposable;
pub use error::{SchedulerError, StreamError};
pub use observable::Observable;
pub use observers::{FnObserver, Observer, ObserverRef};
pub use schedulers::{
    ComputationScheduler, IoScheduler, Job, Scheduler, SchedulerRef, SingleScheduler,
};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
