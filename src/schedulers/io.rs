//! # Elastic pool for blocking I/O work.

use tokio::runtime::{Builder, Runtime};

use crate::error::SchedulerError;
use crate::schedulers::{run_isolated, Job, Scheduler};

/// Scheduler backed by an elastic pool: threads are created on demand and
/// reused while warm, then reaped after an idle period.
///
/// Suited to blocking operations (file and network I/O). Jobs run on the
/// runtime's blocking pool, so many jobs can block concurrently without
/// starving each other. No ordering guarantee.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use rxflow::{IoScheduler, Scheduler, SchedulerRef};
///
/// let pool: SchedulerRef = Arc::new(IoScheduler::new()?);
/// pool.execute(Box::new(|| {
///     // read a file, call a service...
/// }));
/// # Ok::<(), rxflow::SchedulerError>(())
/// ```
pub struct IoScheduler {
    pool: Runtime,
}

impl IoScheduler {
    /// Starts the elastic pool.
    pub fn new() -> Result<Self, SchedulerError> {
        // One core worker; all jobs go through the elastic blocking pool.
        let pool = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rxflow-io")
            .build()
            .map_err(|source| SchedulerError::PoolStart {
                name: "io",
                source,
            })?;
        Ok(Self { pool })
    }
}

impl Scheduler for IoScheduler {
    fn execute(&self, job: Job) {
        let _ = self.pool.spawn_blocking(move || run_isolated("io", job));
    }

    fn name(&self) -> &'static str {
        "io"
    }
}
