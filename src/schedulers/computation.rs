//! # Fixed-size pool for CPU-bound work.

use tokio::runtime::{Builder, Runtime};

use crate::error::SchedulerError;
use crate::schedulers::{run_isolated, Job, Scheduler};

/// Scheduler backed by a fixed pool sized to available hardware parallelism.
///
/// Suited to CPU-bound transformations. Jobs may run concurrently and out of
/// order; a job that blocks ties up one of the few workers, so prefer
/// [`IoScheduler`](crate::IoScheduler) for blocking operations.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use rxflow::{ComputationScheduler, Scheduler, SchedulerRef};
///
/// let pool: SchedulerRef = Arc::new(ComputationScheduler::new()?);
/// pool.execute(Box::new(|| {
///     // crunch numbers...
/// }));
/// # Ok::<(), rxflow::SchedulerError>(())
/// ```
pub struct ComputationScheduler {
    pool: Runtime,
}

impl ComputationScheduler {
    /// Starts a pool with one worker per available CPU.
    pub fn new() -> Result<Self, SchedulerError> {
        let workers = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);
        let pool = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("rxflow-compute")
            .build()
            .map_err(|source| SchedulerError::PoolStart {
                name: "computation",
                source,
            })?;
        Ok(Self { pool })
    }
}

impl Scheduler for ComputationScheduler {
    fn execute(&self, job: Job) {
        let _ = self
            .pool
            .spawn(async move { run_isolated("computation", job) });
    }

    fn name(&self) -> &'static str {
        "computation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_all_submitted_jobs_run() {
        let pool = ComputationScheduler::new().unwrap();
        let (tx, rx) = mpsc::channel();

        for i in 0..16 {
            let tx = tx.clone();
            pool.execute(Box::new(move || {
                tx.send(i).unwrap();
            }));
        }

        let mut seen = Vec::new();
        for _ in 0..16 {
            seen.push(rx.recv_timeout(Duration::from_secs(2)).unwrap());
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_jobs_run_off_the_caller_thread() {
        let pool = ComputationScheduler::new().unwrap();
        let caller = std::thread::current().id();
        let (tx, rx) = mpsc::channel();

        pool.execute(Box::new(move || {
            tx.send(std::thread::current().id()).unwrap();
        }));

        let worker = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_ne!(caller, worker);
    }

    #[test]
    fn test_panicking_job_does_not_poison_the_pool() {
        let pool = ComputationScheduler::new().unwrap();
        let (tx, rx) = mpsc::channel();

        pool.execute(Box::new(|| panic!("boom")));
        pool.execute(Box::new(move || {
            tx.send(()).unwrap();
        }));

        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
    }
}
