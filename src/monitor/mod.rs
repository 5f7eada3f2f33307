//! Polling monitor: threads the watermark between scans and forwards matches.
//!
//! The monitor owns everything the matcher deliberately does not: the tracked
//! task list, the last processed commit, the poll cadence, and a guard that
//! stops two scans from overlapping.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::matcher::TaskCommitMatcher;
use crate::models::{AnalysisResult, Task, TaskMatch};

/// Receives matches found by a scan.
pub trait MatchSink: Send + Sync {
    fn on_matches(&self, result: &AnalysisResult);
}

/// What a single poll did.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Another scan was still running.
    Busy,
    /// No tasks are tracked, so nothing was scanned.
    NoTasks,
    /// A scan ran; the watermark has been updated from its result.
    Scanned(AnalysisResult),
}

/// Periodically matches new commits against the tracked tasks.
pub struct ProjectMonitor {
    matcher: TaskCommitMatcher,
    sink: Arc<dyn MatchSink>,
    tasks: RwLock<Vec<Task>>,
    watermark: Mutex<Option<String>>,
    scanning: AtomicBool,
    interval: Duration,
}

/// Clears the scanning flag when a scan finishes, even on early return.
struct ScanGuard<'a>(&'a AtomicBool);

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ProjectMonitor {
    pub fn new(matcher: TaskCommitMatcher, sink: Arc<dyn MatchSink>, interval: Duration) -> Self {
        Self {
            matcher,
            sink,
            tasks: RwLock::new(Vec::new()),
            watermark: Mutex::new(None),
            scanning: AtomicBool::new(false),
            interval,
        }
    }

    /// Start from a known watermark instead of the recent window.
    pub fn with_watermark(self, watermark: Option<String>) -> Self {
        *self.watermark.lock().unwrap() = watermark;
        self
    }

    /// Replace the tracked task list.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        tracing::info!("updating tracked tasks: {} task(s)", tasks.len());
        *self.tasks.write().unwrap() = tasks;
    }

    /// The last processed commit, if any.
    pub fn watermark(&self) -> Option<String> {
        self.watermark.lock().unwrap().clone()
    }

    /// Run one scan unless one is already in flight or no tasks are tracked.
    pub async fn check_once(&self) -> CheckOutcome {
        if self
            .scanning
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            tracing::debug!("scan already in progress; skipping tick");
            return CheckOutcome::Busy;
        }
        let _guard = ScanGuard(&self.scanning);

        let tasks = self.tasks.read().unwrap().clone();
        if tasks.is_empty() {
            return CheckOutcome::NoTasks;
        }

        let since = self.watermark();
        let result = self.matcher.analyze_commits(&tasks, since.as_deref()).await;

        if !result.matches.is_empty() {
            log_matches(&result.matches);
            self.sink.on_matches(&result);
        }

        if let Some(ref last) = result.last_commit {
            *self.watermark.lock().unwrap() = Some(last.clone());
        }

        CheckOutcome::Scanned(result)
    }

    /// Poll on the configured interval until `shutdown` resolves.
    ///
    /// The first scan runs immediately.
    pub async fn run<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("monitor stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.check_once().await;
                }
            }
        }
    }
}

/// Log one summary line per match.
pub fn log_matches(matches: &[TaskMatch]) {
    tracing::info!("found {} task match(es) in recent commits", matches.len());
    for m in matches {
        tracing::info!("{}", m.summary_line());
    }
}
