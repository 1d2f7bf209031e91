//! Background fetch scheduling.
//!
//! The UI loop is synchronous, so loads run as tokio tasks and report back
//! over a channel that the loop drains without blocking. Every request gets a
//! generation number; only the newest generation may complete, which keeps
//! the display on the latest request rather than whichever finished last.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{FetchError, SnapshotSource, StatusSnapshot};

/// What caused a fetch to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First load when the dashboard opens.
    Startup,
    /// Periodic refresh tick.
    Scheduled,
    /// User pressed refresh.
    Manual,
}

/// A finished fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub trigger: Trigger,
    pub elapsed: Duration,
    pub result: Result<StatusSnapshot, FetchError>,
}

#[derive(Debug)]
struct InFlight {
    generation: u64,
    trigger: Trigger,
    started: Instant,
    handle: JoinHandle<()>,
}

/// Runs snapshot loads in the background and tracks which one is current.
#[derive(Debug)]
pub struct Fetcher {
    source: Arc<dyn SnapshotSource>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
    generation: u64,
    in_flight: Option<InFlight>,
}

impl Fetcher {
    /// Create a fetcher that spawns loads onto `runtime`.
    pub fn new(source: Arc<dyn SnapshotSource>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            runtime,
            tx,
            rx,
            generation: 0,
            in_flight: None,
        }
    }

    /// Returns a description of the underlying source.
    pub fn description(&self) -> &str {
        self.source.description()
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a fetch.
    ///
    /// A scheduled tick that lands while a request is in flight is skipped.
    /// Any other trigger supersedes the in-flight request: it is aborted and
    /// its result, should it still arrive, is discarded.
    ///
    /// Returns the generation of the new request, or `None` if skipped.
    pub fn trigger(&mut self, trigger: Trigger) -> Option<u64> {
        if let Some(current) = &self.in_flight {
            if trigger == Trigger::Scheduled {
                debug!(
                    generation = current.generation,
                    "request in flight, skipping scheduled fetch"
                );
                return None;
            }
            debug!(generation = current.generation, ?trigger, "superseding in-flight request");
            current.handle.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        info!(
            generation,
            ?trigger,
            source = source.description(),
            "fetching status snapshot"
        );

        let handle = self.runtime.spawn(async move {
            let started = Instant::now();
            let result = source.fetch().await;
            let _ = tx.send(FetchOutcome {
                generation,
                trigger,
                elapsed: started.elapsed(),
                result,
            });
        });

        self.in_flight = Some(InFlight {
            generation,
            trigger,
            started: Instant::now(),
            handle,
        });
        Some(generation)
    }

    /// Drain finished fetches without blocking.
    ///
    /// Returns the outcome of the current request once it completes.
    /// Outcomes from superseded requests are dropped. A request whose task
    /// ended without reporting (it panicked) completes with
    /// [`FetchError::Task`].
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        // Checked before draining: a task sends its outcome before it finishes.
        let finished = self.in_flight.as_ref().is_some_and(|f| f.handle.is_finished());

        while let Ok(outcome) = self.rx.try_recv() {
            let current = self.in_flight.as_ref().map(|f| f.generation);
            if current != Some(outcome.generation) {
                debug!(generation = outcome.generation, "discarding stale fetch result");
                continue;
            }

            self.in_flight = None;
            match &outcome.result {
                Ok(snapshot) => info!(
                    generation = outcome.generation,
                    providers = snapshot.data.len(),
                    elapsed_ms = outcome.elapsed.as_millis() as u64,
                    "status snapshot loaded"
                ),
                Err(e) => warn!(
                    generation = outcome.generation,
                    error = %e,
                    "status snapshot fetch failed"
                ),
            }
            return Some(outcome);
        }

        if !finished {
            return None;
        }
        let dead = self.in_flight.take()?;
        warn!(generation = dead.generation, "fetch task ended without a result");
        Some(FetchOutcome {
            generation: dead.generation,
            trigger: dead.trigger,
            elapsed: dead.started.elapsed(),
            result: Err(FetchError::Task("fetch task ended without a result".to_string())),
        })
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(current) = self.in_flight.take() {
            current.handle.abort();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A scripted source: each fetch pops the next (delay, result) pair.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSource {
        script: Mutex<VecDeque<(Duration, Result<StatusSnapshot, FetchError>)>>,
    }

    impl ScriptedSource {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn push(
            self,
            delay: Duration,
            result: Result<StatusSnapshot, FetchError>,
        ) -> Self {
            self.script.lock().unwrap().push_back((delay, result));
            self
        }
    }

    #[async_trait]
    impl SnapshotSource for ScriptedSource {
        async fn fetch(&self) -> Result<StatusSnapshot, FetchError> {
            let next = self.script.lock().unwrap().pop_front();
            match next {
                Some((delay, result)) => {
                    tokio::time::sleep(delay).await;
                    result
                }
                None => Err(FetchError::Io("script exhausted".to_string())),
            }
        }

        fn description(&self) -> &str {
            "scripted"
        }
    }

    pub(crate) fn snapshot_at(timestamp: &str) -> StatusSnapshot {
        serde_json::from_str(&format!(r#"{{"timestamp":"{}","data":{{}}}}"#, timestamp)).unwrap()
    }

    /// Poll until an outcome arrives or the deadline passes.
    pub(crate) async fn wait_for_outcome(fetcher: &mut Fetcher) -> Option<FetchOutcome> {
        for _ in 0..200 {
            if let Some(outcome) = fetcher.poll() {
                return Some(outcome);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_completes() {
        let source =
            ScriptedSource::new().push(Duration::ZERO, Ok(snapshot_at("2025-06-01T12:00:00Z")));
        let mut fetcher = Fetcher::new(Arc::new(source), Handle::current());

        assert_eq!(fetcher.trigger(Trigger::Startup), Some(1));
        assert!(fetcher.is_loading());

        let outcome = wait_for_outcome(&mut fetcher).await.unwrap();
        assert_eq!(outcome.generation, 1);
        assert_eq!(outcome.trigger, Trigger::Startup);
        assert!(outcome.result.is_ok());
        assert!(!fetcher.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_tick_skipped_while_in_flight() {
        let source = ScriptedSource::new()
            .push(Duration::from_millis(100), Ok(snapshot_at("2025-06-01T12:00:00Z")))
            .push(Duration::ZERO, Ok(snapshot_at("2025-06-01T12:01:00Z")));
        let mut fetcher = Fetcher::new(Arc::new(source), Handle::current());

        assert_eq!(fetcher.trigger(Trigger::Startup), Some(1));
        assert_eq!(fetcher.trigger(Trigger::Scheduled), None);

        let outcome = wait_for_outcome(&mut fetcher).await.unwrap();
        assert_eq!(outcome.generation, 1);
        assert_eq!(
            outcome.result.unwrap().timestamp.to_rfc3339(),
            "2025-06-01T12:00:00+00:00"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_trigger_supersedes_in_flight() {
        let source = ScriptedSource::new()
            .push(Duration::from_millis(200), Ok(snapshot_at("2025-06-01T12:00:00Z")))
            .push(Duration::from_millis(10), Ok(snapshot_at("2025-06-01T12:05:00Z")));
        let mut fetcher = Fetcher::new(Arc::new(source), Handle::current());

        assert_eq!(fetcher.trigger(Trigger::Scheduled), Some(1));
        // Let the first request start before superseding it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(fetcher.trigger(Trigger::Manual), Some(2));

        let outcome = wait_for_outcome(&mut fetcher).await.unwrap();
        assert_eq!(outcome.generation, 2);
        assert_eq!(
            outcome.result.unwrap().timestamp.to_rfc3339(),
            "2025-06-01T12:05:00+00:00"
        );

        // Nothing from the superseded request shows up afterwards.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(fetcher.poll().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_clears_in_flight() {
        let source = ScriptedSource::new().push(Duration::ZERO, Err(FetchError::Status(500)));
        let mut fetcher = Fetcher::new(Arc::new(source), Handle::current());

        fetcher.trigger(Trigger::Manual);
        let outcome = wait_for_outcome(&mut fetcher).await.unwrap();
        assert_eq!(outcome.result.unwrap_err(), FetchError::Status(500));
        assert!(!fetcher.is_loading());

        // The next trigger still runs.
        assert_eq!(fetcher.trigger(Trigger::Scheduled), Some(2));
    }

    /// A source whose fetch panics instead of returning.
    #[derive(Debug)]
    pub(crate) struct PanickingSource;

    #[async_trait]
    impl SnapshotSource for PanickingSource {
        async fn fetch(&self) -> Result<StatusSnapshot, FetchError> {
            panic!("source blew up");
        }

        fn description(&self) -> &str {
            "panicking"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicked_fetch_completes_with_error() {
        let mut fetcher = Fetcher::new(Arc::new(PanickingSource), Handle::current());

        assert_eq!(fetcher.trigger(Trigger::Startup), Some(1));
        let outcome = wait_for_outcome(&mut fetcher).await.unwrap();
        assert_eq!(outcome.generation, 1);
        assert_eq!(outcome.trigger, Trigger::Startup);
        assert!(matches!(outcome.result, Err(FetchError::Task(_))));
        assert!(!fetcher.is_loading());

        // Scheduled polling resumes.
        assert_eq!(fetcher.trigger(Trigger::Scheduled), Some(2));
    }
}
