//! # Schedulers: where work runs
//!
//! A [`Scheduler`] is an execution-context abstraction: submit a unit of
//! work, return immediately. It decouples *where* work runs from *what* work
//! runs; the `subscribe_on` / `observe_on` combinators are the only places
//! the core crosses a thread boundary, and they do so by posting a [`Job`]
//! here, never by blocking.
//!
//! ## Backends
//! | Backend                  | Pool shape                               | Ordering                  |
//! |--------------------------|------------------------------------------|---------------------------|
//! | [`ComputationScheduler`] | fixed, sized to hardware parallelism     | none (parallel)           |
//! | [`IoScheduler`]          | elastic, threads spawned on demand       | none (parallel)           |
//! | [`SingleScheduler`]      | exactly one worker                       | strict submission order   |
//!
//! ## Failure isolation
//! A panicking job must never take the pool down or starve queued jobs.
//! Every backend runs jobs through [`run_isolated`], which catches the panic
//! and logs a warning; the job's failure is otherwise swallowed (by the time
//! it runs, the call that scheduled it has already returned, so there is no
//! synchronous catcher).
//!
//! ## Lifecycle
//! Backends are explicit constructed values: build one, share it via
//! [`SchedulerRef`], drop it to shut the pool down. Jobs queued but not yet
//! started are dropped at shutdown. There are no process-wide singletons.

mod computation;
mod io;
mod single;

pub use computation::ComputationScheduler;
pub use io::IoScheduler;
pub use single::SingleScheduler;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// A unit of work submitted to a scheduler.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Shared handle to a type-erased scheduler.
pub type SchedulerRef = Arc<dyn Scheduler>;

/// # Contract for submitting work to a pool.
///
/// `execute` must return immediately and must not report job-level failure
/// back to the caller. Beyond the per-backend policies documented on each
/// implementation, there is no ordering guarantee across `execute` calls.
pub trait Scheduler: Send + Sync + 'static {
    /// Submits `job` for asynchronous execution.
    fn execute(&self, job: Job);

    /// Human-readable backend name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runs a job, containing any panic so the worker survives.
pub(crate) fn run_isolated(backend: &'static str, job: Job) {
    if let Err(panic_err) = catch_unwind(AssertUnwindSafe(job)) {
        log::warn!("scheduler '{backend}' job panicked: {panic_err:?}");
    }
}
