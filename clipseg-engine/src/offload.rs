//! Execution placement for large inputs
//!
//! Inputs longer than the configured threshold run on a dedicated rayon
//! pool while the caller blocks on a bounded channel. A worker that times
//! out, panics or was never built is replaced by running the same job on
//! the calling thread, so placement never changes the result. While every
//! worker is still occupied, for example by a job that already timed out,
//! calls run on the calling thread instead of queueing.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;
use crate::options::SegmentationOptions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Prefix of background worker thread names
pub const WORKER_THREAD_PREFIX: &str = "clipseg-worker";

/// Chooses and performs synchronous or offloaded execution
pub struct OffloadScheduler {
    pool: Option<rayon::ThreadPool>,
    in_flight: Arc<AtomicUsize>,
    timeout: Duration,
}

impl std::fmt::Debug for OffloadScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffloadScheduler")
            .field("available", &self.is_available())
            .field("in_flight", &self.in_flight())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Releases a worker slot when the job finishes or unwinds
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl OffloadScheduler {
    /// Build the worker pool described by `config`
    ///
    /// Pool construction failure is logged and leaves the scheduler
    /// permanently synchronous.
    pub fn new(config: &EngineConfig) -> Self {
        let pool = match build_pool(config.worker_threads) {
            Ok(pool) => Some(pool),
            Err(e) => {
                error!(error = %e, "offload disabled, running synchronously");
                None
            }
        };
        Self::from_parts(pool, config.worker_timeout)
    }

    fn from_parts(pool: Option<rayon::ThreadPool>, timeout: Duration) -> Self {
        Self {
            pool,
            in_flight: Arc::new(AtomicUsize::new(0)),
            timeout,
        }
    }

    /// Whether a background worker exists
    pub fn is_available(&self) -> bool {
        self.pool.is_some()
    }

    /// Offloaded jobs that have not finished yet, including abandoned ones
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Offload timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Mode a call with `text_chars` characters would run in
    pub fn select_mode(&self, text_chars: usize, options: &SegmentationOptions) -> ExecutionMode {
        if options.offload_enabled
            && self.is_available()
            && text_chars > options.offload_threshold
        {
            ExecutionMode::Offloaded
        } else {
            ExecutionMode::Synchronous
        }
    }

    /// Run `job` where [`select_mode`](Self::select_mode) says
    ///
    /// Returns the job output and the mode that actually produced it.
    pub fn run<T, F>(
        &self,
        text_chars: usize,
        options: &SegmentationOptions,
        job: F,
    ) -> (T, ExecutionMode)
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        if self.select_mode(text_chars, options) == ExecutionMode::Synchronous {
            return (job(), ExecutionMode::Synchronous);
        }

        let job = Arc::new(job);
        match self.offload(Arc::clone(&job)) {
            Ok(output) => (output, ExecutionMode::Offloaded),
            Err(EngineError::WorkersBusy) => {
                debug!("all workers busy, running synchronously");
                (job(), ExecutionMode::Synchronous)
            }
            Err(e) => {
                warn!(error = %e, "offload failed, falling back to synchronous execution");
                (job(), ExecutionMode::Synchronous)
            }
        }
    }

    fn offload<T, F>(&self, job: Arc<F>) -> Result<T>
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let pool = self.pool.as_ref().ok_or_else(|| {
            EngineError::OffloadUnavailable("worker pool not built".to_string())
        })?;

        let slot = self.reserve_slot(pool.current_num_threads())?;
        let (tx, rx) = mpsc::sync_channel(1);
        pool.spawn(move || {
            let output = job();
            drop(slot);
            // The receiver may already be gone after a timeout
            let _ = tx.send(output);
        });
        debug!(timeout = ?self.timeout, "job offloaded");

        rx.recv_timeout(self.timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => EngineError::OffloadTimeout(self.timeout),
            RecvTimeoutError::Disconnected => EngineError::WorkerDisconnected,
        })
    }

    fn reserve_slot(&self, workers: usize) -> Result<InFlightGuard> {
        let previous = self.in_flight.fetch_add(1, Ordering::AcqRel);
        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        if previous >= workers {
            return Err(EngineError::WorkersBusy);
        }
        Ok(guard)
    }
}

fn build_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("{WORKER_THREAD_PREFIX}-{i}"))
        .panic_handler(|_| error!("offloaded job panicked"))
        .build()
        .map_err(|e| EngineError::OffloadUnavailable(e.to_string()))
}

/// Whether the current thread is an offload worker
pub fn on_worker_thread() -> bool {
    std::thread::current()
        .name()
        .is_some_and(|name| name.starts_with(WORKER_THREAD_PREFIX))
}
