//! # Single-worker pool with strict submission order.

use tokio::runtime::{Builder, Runtime};

use crate::error::SchedulerError;
use crate::schedulers::{run_isolated, Job, Scheduler};

/// Scheduler backed by exactly one worker thread.
///
/// Jobs execute strictly in submission order, one at a time: every `execute`
/// call lands on the same worker's queue, and each job runs to completion
/// before the next starts. This makes it the backend of choice after an
/// `observe_on` hop when delivery order must match emission order.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use rxflow::{Scheduler, SchedulerRef, SingleScheduler};
///
/// let pool: SchedulerRef = Arc::new(SingleScheduler::new()?);
/// pool.execute(Box::new(|| println!("first")));
/// pool.execute(Box::new(|| println!("second")));
/// # Ok::<(), rxflow::SchedulerError>(())
/// ```
pub struct SingleScheduler {
    pool: Runtime,
}

impl SingleScheduler {
    /// Starts the single-worker pool.
    pub fn new() -> Result<Self, SchedulerError> {
        let pool = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rxflow-single")
            .build()
            .map_err(|source| SchedulerError::PoolStart {
                name: "single",
                source,
            })?;
        Ok(Self { pool })
    }
}

impl Scheduler for SingleScheduler {
    fn execute(&self, job: Job) {
        let _ = self.pool.spawn(async move { run_isolated("single", job) });
    }

    fn name(&self) -> &'static str {
        "single"
    }
}
