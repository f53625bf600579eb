// ABOUTME: Predictor decorator enforcing a caller-bounded timeout on predict calls
// ABOUTME: Runs the inner predictor on a fixed worker pool fed over a crossbeam channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use nutriplan_core::models::DietCategory;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::predictor::{DietCategoryPredictor, PredictionError, PredictionRequest};

/// Worker threads per predictor when none is requested
pub const DEFAULT_PREDICTOR_WORKERS: usize = 4;

type Reply = Result<DietCategory, PredictionError>;

struct Job {
    request: PredictionRequest,
    deadline: Instant,
    reply: Sender<Reply>,
}

/// Bounds every call to an inner predictor
///
/// Calls run on a fixed pool of long-lived worker threads. A call that
/// outlives the timeout returns `PredictionError::Timeout` and its worker
/// keeps running until the inner predictor returns. While every worker is
/// busy and the queue is full, new calls are rejected with
/// `PredictionError::Unavailable` instead of adding threads. Workers exit
/// once the last clone of the predictor is dropped.
#[derive(Clone)]
pub struct TimeoutPredictor {
    name: String,
    jobs: Sender<Job>,
    timeout: Duration,
    workers: usize,
}

impl TimeoutPredictor {
    /// Wrap a predictor with a timeout and the default pool size
    #[must_use]
    pub fn new(inner: Arc<dyn DietCategoryPredictor>, timeout: Duration) -> Self {
        Self::with_workers(inner, timeout, DEFAULT_PREDICTOR_WORKERS)
    }

    /// Wrap a predictor with a timeout and `workers` pool threads (at least one)
    ///
    /// Workers that the OS refuses to spawn are left out of the pool; with no
    /// worker at all every call is rejected as unavailable.
    #[must_use]
    pub fn with_workers(
        inner: Arc<dyn DietCategoryPredictor>,
        timeout: Duration,
        workers: usize,
    ) -> Self {
        let requested = workers.max(1);
        let (jobs, queue) = bounded::<Job>(requested);
        let name = inner.name().to_owned();

        let mut spawned = 0;
        for index in 0..requested {
            let inner = Arc::clone(&inner);
            let queue = queue.clone();
            let worker = thread::Builder::new()
                .name(format!("diet-predictor-{index}"))
                .spawn(move || run_worker(inner.as_ref(), &queue));
            if worker.is_ok() {
                spawned += 1;
            }
        }

        Self {
            name,
            jobs,
            timeout,
            workers: spawned,
        }
    }

    /// Configured timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of pool threads serving this predictor
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }
}

fn run_worker(inner: &dyn DietCategoryPredictor, queue: &Receiver<Job>) {
    for job in queue {
        // Caller already gave up on this one
        if Instant::now() >= job.deadline {
            continue;
        }
        let result = panic::catch_unwind(AssertUnwindSafe(|| inner.predict(&job.request)))
            .unwrap_or_else(|_| {
                Err(PredictionError::Unavailable(
                    "predictor panicked".to_owned(),
                ))
            });
        // Receiver is gone once the caller has timed out
        let _ = job.reply.send(result);
    }
}

impl DietCategoryPredictor for TimeoutPredictor {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, request: &PredictionRequest) -> Result<DietCategory, PredictionError> {
        if self.workers == 0 {
            return Err(PredictionError::Unavailable(
                "no predictor workers running".to_owned(),
            ));
        }

        let (reply, result) = bounded(1);
        let job = Job {
            request: request.clone(),
            deadline: Instant::now() + self.timeout,
            reply,
        };
        match self.jobs.try_send(job) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                return Err(PredictionError::Unavailable(format!(
                    "all {} predictor workers are busy",
                    self.workers
                )));
            }
            Err(TrySendError::Disconnected(_)) => {
                return Err(PredictionError::Unavailable(
                    "predictor workers have exited".to_owned(),
                ));
            }
        }

        match result.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(PredictionError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(PredictionError::Unavailable(
                "predictor worker exited without a result".to_owned(),
            )),
        }
    }
}
