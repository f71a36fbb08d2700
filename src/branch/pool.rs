//! Bounded worker pool for per-branch PR lookups.
//!
//! All branches are queued and the queue is closed before any worker starts.
//! Each worker pulls one branch at a time, runs the check, bumps a shared
//! counter and reports progress. Results go to an output channel that is
//! drained only after every worker has been joined.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};
use std::thread;

use crate::progress::ProgressReporter;
use crate::signal::SignalHandler;

/// Upper bound on concurrent PR lookups. `gh` is rate limited.
pub const MAX_WORKERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckPool {
    max_workers: usize,
}

impl Default for CheckPool {
    fn default() -> Self {
        Self::new(MAX_WORKERS)
    }
}

impl CheckPool {
    /// `max_workers` is clamped to `1..=MAX_WORKERS`.
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.clamp(1, MAX_WORKERS),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Number of threads spawned for `jobs` branches.
    pub fn worker_count(&self, jobs: usize) -> usize {
        self.max_workers.min(jobs)
    }

    /// Run `check` once per branch and collect the `Some` results.
    ///
    /// Result order is unspecified. If `shutdown` fires, workers stop taking
    /// new branches and the returned collection is incomplete; callers must
    /// check the flag themselves.
    pub fn run<T, F>(
        &self,
        branches: Vec<String>,
        reporter: &dyn ProgressReporter,
        shutdown: Option<&SignalHandler>,
        check: F,
    ) -> Vec<T>
    where
        T: Send,
        F: Fn(&str) -> Option<T> + Sync,
    {
        let total = branches.len();
        if total == 0 {
            return Vec::new();
        }

        let (work_tx, work_rx) = mpsc::channel::<String>();
        for branch in branches {
            // Receiver is alive, send cannot fail.
            let _ = work_tx.send(branch);
        }
        drop(work_tx);

        let work_rx = Mutex::new(work_rx);
        let processed = AtomicUsize::new(0);
        let (result_tx, result_rx) = mpsc::channel::<T>();

        thread::scope(|scope| {
            for _ in 0..self.worker_count(total) {
                let result_tx = result_tx.clone();
                let work_rx = &work_rx;
                let processed = &processed;
                let check = &check;

                scope.spawn(move || loop {
                    if shutdown.is_some_and(SignalHandler::is_shutdown_requested) {
                        break;
                    }

                    let next = match work_rx.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => break,
                    };
                    let Ok(branch) = next else {
                        break;
                    };

                    let result = check(&branch);

                    let count = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    reporter.update(&format!("Checking PR status ({}/{})", count, total));

                    if let Some(result) = result {
                        if result_tx.send(result).is_err() {
                            break;
                        }
                    }
                });
            }
        });

        drop(result_tx);
        result_rx.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentReporter;
    use crate::test_utils::RecordingReporter;
    use std::time::{Duration, Instant};

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("branch-{}", i)).collect()
    }

    #[test]
    fn test_new_clamps_worker_limit() {
        assert_eq!(CheckPool::new(0).max_workers(), 1);
        assert_eq!(CheckPool::new(4).max_workers(), 4);
        assert_eq!(CheckPool::new(50).max_workers(), MAX_WORKERS);
        assert_eq!(CheckPool::default().max_workers(), MAX_WORKERS);
    }

    #[test]
    fn test_worker_count_is_min_of_limit_and_jobs() {
        let pool = CheckPool::default();
        assert_eq!(pool.worker_count(3), 3);
        assert_eq!(pool.worker_count(10), 10);
        assert_eq!(pool.worker_count(25), 10);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let out: Vec<String> = CheckPool::default().run(Vec::new(), &SilentReporter, None, |b| {
            Some(b.to_string())
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_branch_checked_exactly_once() {
        let calls = Mutex::new(Vec::new());
        let mut out = CheckPool::default().run(names(37), &SilentReporter, None, |b| {
            calls.lock().unwrap().push(b.to_string());
            Some(b.to_string())
        });

        let mut calls = calls.into_inner().unwrap();
        calls.sort();
        out.sort();
        let mut expected = names(37);
        expected.sort();

        assert_eq!(calls, expected);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_none_results_are_dropped() {
        let mut out = CheckPool::default().run(names(6), &SilentReporter, None, |b| {
            b.ends_with('2').then(|| b.to_string())
        });
        out.sort();
        assert_eq!(out, vec!["branch-2"]);
    }

    /// Run `jobs` checks that each hold until `target` are in flight at once
    /// (or a deadline passes) and return the highest overlap observed.
    fn peak_overlap(pool: CheckPool, jobs: usize, target: usize) -> usize {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let deadline = Instant::now() + Duration::from_secs(2);

        let out = pool.run(names(jobs), &SilentReporter, None, |b| {
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            while peak.load(Ordering::SeqCst) < target && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(1));
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
            Some(b.to_string())
        });

        assert_eq!(out.len(), jobs);
        peak.load(Ordering::SeqCst)
    }

    #[test]
    fn test_pool_runs_exactly_max_workers_at_once() {
        assert_eq!(peak_overlap(CheckPool::default(), 25, MAX_WORKERS), MAX_WORKERS);
    }

    #[test]
    fn test_concurrency_never_exceeds_limit() {
        // Waiting for one more than the limit only ends at the deadline.
        assert_eq!(peak_overlap(CheckPool::default(), 25, MAX_WORKERS + 1), MAX_WORKERS);
    }

    #[test]
    fn test_lower_limit_is_respected() {
        assert_eq!(peak_overlap(CheckPool::new(3), 12, 3), 3);
        assert_eq!(peak_overlap(CheckPool::new(3), 12, 4), 3);
    }

    #[test]
    fn test_small_batch_uses_one_worker_per_branch() {
        assert_eq!(peak_overlap(CheckPool::default(), 4, 4), 4);
    }

    #[test]
    fn test_progress_reports_each_count_once() {
        let reporter = RecordingReporter::default();
        CheckPool::default().run(names(15), &reporter, None, |_| Some(()));

        let mut counts: Vec<usize> = reporter
            .updates()
            .iter()
            .map(|msg| {
                let inner = msg
                    .trim_start_matches("Checking PR status (")
                    .trim_end_matches(')');
                let (count, total) = inner.split_once('/').unwrap();
                assert_eq!(total, "15");
                count.parse().unwrap()
            })
            .collect();
        counts.sort();

        assert_eq!(counts, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_shutdown_before_start_checks_nothing() {
        let shutdown = SignalHandler::detached();
        shutdown.request_shutdown();
        let checked = AtomicUsize::new(0);

        let out = CheckPool::default().run(names(20), &SilentReporter, Some(&shutdown), |_| {
            checked.fetch_add(1, Ordering::SeqCst);
            Some(())
        });

        assert!(out.is_empty());
        assert_eq!(checked.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shutdown_mid_batch_stops_taking_work() {
        let shutdown = SignalHandler::detached();
        let checked = AtomicUsize::new(0);

        CheckPool::new(1).run(names(50), &SilentReporter, Some(&shutdown), |_| {
            if checked.fetch_add(1, Ordering::SeqCst) + 1 == 5 {
                shutdown.request_shutdown();
            }
            Some(())
        });

        assert_eq!(checked.load(Ordering::SeqCst), 5);
    }
}
