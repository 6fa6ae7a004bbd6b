//! Bounded-parallel retrieval coordinator.
//!
//! Takes every retrievable bookmark in a [`BookmarkStore`], fetches its page
//! through a fixed-size pool of workers, and writes the extracted title and
//! description back into that bookmark's slot. One bookmark failing never
//! affects another, and [`Coordinator::retrieve_all`] only returns once every
//! dispatched fetch has finished.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};
use url::Url;

use bookmarklens_shared::{BookmarkStore, RetrievalConfig, Result, SlotId};

use crate::extractor::{PageSummary, extract};
use crate::fetcher::{FailureReason, FetchError, HttpFetcher, PageFetcher};
use crate::validator::UrlValidator;

// ---------------------------------------------------------------------------
// Outcomes and progress
// ---------------------------------------------------------------------------

/// Result of one unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    Success(PageSummary),
    Failed { reason: FailureReason, detail: String },
}

impl From<FetchError> for RetrievalOutcome {
    fn from(err: FetchError) -> Self {
        Self::Failed {
            reason: err.reason(),
            detail: err.to_string(),
        }
    }
}

/// Counts for a finished `retrieve_all` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrievalSummary {
    /// Bookmarks that passed validation and were dispatched.
    pub total: usize,
    /// Dispatched bookmarks whose page was fetched and extracted.
    pub succeeded: usize,
    /// Dispatched bookmarks that failed (fetch error or task panic).
    pub failed: usize,
    /// Bookmarks never dispatched: URL not retrievable, or already enriched.
    pub skipped: usize,
    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
}

/// Callbacks for observing a retrieval run.
pub trait RetrievalProgress: Send + Sync {
    /// A bookmark was handed to a worker. `index` is 1-based dispatch order.
    fn dispatched(&self, index: usize, total: usize, url: &str);
    /// A dispatched bookmark could not be enriched.
    fn failed(&self, url: &str, reason: FailureReason, detail: &str);
    /// A dispatched bookmark settled, either way. `done` counts settled bookmarks.
    fn completed(&self, done: usize, total: usize);
    /// Every dispatched bookmark has finished.
    fn finished(&self, summary: &RetrievalSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl RetrievalProgress for SilentProgress {
    fn dispatched(&self, _index: usize, _total: usize, _url: &str) {}
    fn failed(&self, _url: &str, _reason: FailureReason, _detail: &str) {}
    fn completed(&self, _done: usize, _total: usize) {}
    fn finished(&self, _summary: &RetrievalSummary) {}
}

/// Percentage of `total` reached at `index`; `0.0` for an empty run.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        index as f64 / total as f64 * 100.0
    }
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

/// Drives fetch + extract over a store with at most `concurrency` requests in flight.
pub struct Coordinator<F> {
    fetcher: Arc<F>,
    validator: UrlValidator,
    concurrency: usize,
    timeout: Duration,
}

impl Coordinator<HttpFetcher> {
    /// Coordinator backed by a real HTTP client.
    pub fn http(config: &RetrievalConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.encoding)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: PageFetcher + 'static> Coordinator<F> {
    pub fn new(fetcher: F, config: &RetrievalConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            validator: UrlValidator::from(config),
            concurrency: config.concurrency.max(1),
            timeout: config.timeout,
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch and enrich every valid bookmark in `store`.
    ///
    /// Dispatch follows store order. Per-bookmark failures are reported to
    /// `progress` and counted, never returned. Invalid bookmarks are left
    /// untouched.
    #[instrument(skip_all, fields(bookmarks = store.len(), concurrency = self.concurrency))]
    pub async fn retrieve_all(
        &self,
        store: &mut BookmarkStore,
        progress: &dyn RetrievalProgress,
    ) -> RetrievalSummary {
        let started = Instant::now();

        // Progress and failure signals carry the bookmarked URL as written;
        // the parsed form is only used for the request.
        let assignments: Vec<(SlotId, String, Url)> = store
            .slots()
            .filter(|(_, bookmark)| !bookmark.is_enriched())
            .filter_map(|(slot, bookmark)| {
                let raw = bookmark.url();
                self.validator
                    .parse(raw)
                    .map(|parsed| (slot, raw.to_string(), parsed))
            })
            .collect();

        let mut summary = RetrievalSummary {
            total: assignments.len(),
            skipped: store.len() - assignments.len(),
            ..RetrievalSummary::default()
        };
        let total = summary.total;

        info!(
            total,
            skipped = summary.skipped,
            timeout_ms = self.timeout.as_millis() as u64,
            "starting retrieval"
        );

        // Slot count is the only shared resource; a permit is taken before each
        // spawn so dispatch order matches store order.
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<tokio::task::Id, SlotId> = HashMap::with_capacity(total);

        for (n, (slot, raw_url, url)) in assignments.into_iter().enumerate() {
            let index = n + 1;
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .expect("retrieval semaphore is never closed");

            info!(
                "{:.2}% ({index}/{total}). Accessing {raw_url}",
                progress_percent(index, total)
            );
            progress.dispatched(index, total, &raw_url);

            let fetcher = Arc::clone(&self.fetcher);
            let timeout = self.timeout;
            let handle = tasks.spawn(async move {
                let _permit = permit;
                let outcome = retrieve_one(fetcher.as_ref(), &url, timeout).await;
                (slot, outcome)
            });
            in_flight.insert(handle.id(), slot);
        }

        // Full barrier: drain every task before returning.
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((id, (slot, outcome))) => {
                    in_flight.remove(&id);
                    let Some(bookmark) = store.get_mut(slot) else {
                        continue;
                    };
                    match outcome {
                        RetrievalOutcome::Success(page) => {
                            debug!(%slot, url = bookmark.url(), title = %page.title, "retrieved");
                            bookmark.enrich(page.title, page.description);
                            summary.succeeded += 1;
                        }
                        RetrievalOutcome::Failed { reason, detail } => {
                            let url = bookmark.url();
                            warn!(url, %reason, "Error fetching URL {url}: {detail}");
                            progress.failed(url, reason, &detail);
                            summary.failed += 1;
                        }
                    }
                }
                Err(err) => {
                    let url = in_flight
                        .remove(&err.id())
                        .and_then(|slot| store.get(slot))
                        .map(|b| b.url())
                        .unwrap_or("unknown");
                    let detail = err.to_string();
                    warn!(url, error = %detail, "retrieval task failed");
                    progress.failed(url, FailureReason::Network, &detail);
                    summary.failed += 1;
                }
            }
            progress.completed(summary.succeeded + summary.failed, total);
        }

        summary.elapsed = started.elapsed();
        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            duration_ms = summary.elapsed.as_millis() as u64,
            "retrieval completed"
        );
        progress.finished(&summary);

        summary
    }
}

/// Fetch one page and extract its summary. The timeout is enforced here as
/// well, so a fetcher that ignores it still releases its slot.
async fn retrieve_one<F: PageFetcher>(
    fetcher: &F,
    url: &Url,
    timeout: Duration,
) -> RetrievalOutcome {
    match tokio::time::timeout(timeout, fetcher.fetch(url, timeout)).await {
        Ok(Ok(body)) => RetrievalOutcome::Success(extract(&body)),
        Ok(Err(err)) => err.into(),
        Err(_elapsed) => FetchError::Timeout(timeout).into(),
    }
}

#[cfg(test)]
mod coordinator_tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bookmarklens_shared::RawBookmark;

    const PAGE_A: &str =
        r#"<html><head><title>A</title><meta name="description" content="About A"></head></html>"#;

    /// How the scripted fetcher answers a given URL.
    #[derive(Clone)]
    enum Reply {
        Page(&'static str),
        Fail(FetchError),
        Hang,
        Panic,
    }

    /// In-memory fetcher that records every URL it is asked for.
    #[derive(Default)]
    struct ScriptedFetcher {
        replies: HashMap<String, Reply>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn reply(mut self, url: &str, reply: Reply) -> Self {
            self.replies.insert(url.to_string(), reply);
            self
        }
    }

    impl PageFetcher for ScriptedFetcher {
        async fn fetch(
            &self,
            url: &Url,
            _timeout: Duration,
        ) -> std::result::Result<String, FetchError> {
            self.calls.lock().unwrap().push(url.to_string());
            match self.replies.get(url.as_str()).cloned() {
                Some(Reply::Page(body)) => Ok(body.to_string()),
                Some(Reply::Fail(err)) => Err(err),
                Some(Reply::Hang) => std::future::pending().await,
                Some(Reply::Panic) => panic!("fetcher blew up"),
                None => Err(FetchError::Status(404)),
            }
        }
    }

    /// Tracks the peak number of simultaneous fetches.
    #[derive(Default)]
    struct CountingFetcher {
        current: AtomicUsize,
        peak: AtomicUsize,
        calls: AtomicUsize,
    }

    impl PageFetcher for CountingFetcher {
        async fn fetch(
            &self,
            _url: &Url,
            _timeout: Duration,
        ) -> std::result::Result<String, FetchError> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(PAGE_A.to_string())
        }
    }

    /// Records progress callbacks.
    #[derive(Default)]
    struct RecordingProgress {
        dispatched: Mutex<Vec<(usize, usize, String)>>,
        failed: Mutex<Vec<(String, FailureReason)>>,
        completed: Mutex<Vec<(usize, usize)>>,
        finished: Mutex<Option<RetrievalSummary>>,
    }

    impl RetrievalProgress for RecordingProgress {
        fn dispatched(&self, index: usize, total: usize, url: &str) {
            self.dispatched
                .lock()
                .unwrap()
                .push((index, total, url.to_string()));
        }
        fn failed(&self, url: &str, reason: FailureReason, _detail: &str) {
            self.failed.lock().unwrap().push((url.to_string(), reason));
        }
        fn completed(&self, done: usize, total: usize) {
            self.completed.lock().unwrap().push((done, total));
        }
        fn finished(&self, summary: &RetrievalSummary) {
            *self.finished.lock().unwrap() = Some(summary.clone());
        }
    }

    fn config(concurrency: usize, timeout: Duration) -> RetrievalConfig {
        RetrievalConfig {
            concurrency,
            timeout,
            ..RetrievalConfig::default()
        }
    }

    fn store_of(urls: &[&str]) -> BookmarkStore {
        urls.iter()
            .enumerate()
            .map(|(i, u)| RawBookmark::new(*u, format!("d{}", i + 1), format!("i{}", i + 1)))
            .collect()
    }

    #[tokio::test]
    async fn worked_example_partitions_as_expected() {
        let fetcher = ScriptedFetcher::default()
            .reply("https://a.test/", Reply::Page(PAGE_A))
            .reply("https://b.test/", Reply::Hang);
        let coordinator = Coordinator::new(fetcher, &config(20, Duration::from_millis(150)));

        let mut store = store_of(&["https://a.test/", "chrome://x", "https://b.test/"]);
        let progress = RecordingProgress::default();
        let summary = coordinator.retrieve_all(&mut store, &progress).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);

        let part = store.partition();
        assert_eq!(part.complete.len(), 1);
        assert_eq!(part.complete[0].url(), "https://a.test/");
        assert_eq!(part.complete[0].title(), "A");
        assert_eq!(part.complete[0].description(), "About A");
        assert_eq!(part.complete[0].date_added(), "d1");

        let incomplete: Vec<_> = part.incomplete.iter().map(|b| b.url()).collect();
        assert_eq!(incomplete, ["chrome://x", "https://b.test/"]);

        let failed = progress.failed.lock().unwrap().clone();
        assert_eq!(failed, vec![("https://b.test/".to_string(), FailureReason::Timeout)]);
        assert_eq!(progress.finished.lock().unwrap().as_ref(), Some(&summary));
    }

    #[tokio::test]
    async fn invalid_urls_are_never_dispatched() {
        let fetcher = ScriptedFetcher::default();
        let coordinator = Coordinator::new(fetcher, &config(4, Duration::from_secs(1)));

        let mut store = store_of(&[
            "chrome://version",
            "javascript:void(0)",
            "https://drive.google.com/x",
            "mailto:a@b.test",
            "",
        ]);
        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;

        assert_eq!(summary.total, 0);
        assert_eq!(summary.skipped, 5);
        assert!(coordinator.fetcher.calls.lock().unwrap().is_empty());
        assert!(store.iter().all(|b| !b.is_enriched()));
        assert_eq!(store.partition().incomplete.len(), 5);
    }

    #[tokio::test]
    async fn empty_store_returns_immediately() {
        let coordinator =
            Coordinator::new(ScriptedFetcher::default(), &config(20, Duration::from_secs(4)));
        let mut store = BookmarkStore::new();
        let progress = RecordingProgress::default();

        let summary = tokio::time::timeout(
            Duration::from_secs(1),
            coordinator.retrieve_all(&mut store, &progress),
        )
        .await
        .expect("empty run must not block");

        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded + summary.failed, 0);
        assert!(progress.dispatched.lock().unwrap().is_empty());
        assert!(progress.finished.lock().unwrap().is_some());
        let part = store.partition();
        assert!(part.complete.is_empty() && part.incomplete.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn never_exceeds_concurrency_bound() {
        let urls: Vec<String> = (0..40).map(|i| format!("https://host{i}.test/")).collect();
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        let mut store = store_of(&url_refs);

        let coordinator =
            Coordinator::new(CountingFetcher::default(), &config(3, Duration::from_secs(2)));
        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;

        assert_eq!(summary.succeeded, 40);
        assert_eq!(coordinator.fetcher.calls.load(Ordering::SeqCst), 40);
        let peak = coordinator.fetcher.peak.load(Ordering::SeqCst);
        assert!(peak <= 3, "peak in-flight was {peak}");
        assert!(peak >= 2, "pool never ran in parallel (peak {peak})");
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped() {
        let coordinator =
            Coordinator::new(CountingFetcher::default(), &config(0, Duration::from_secs(1)));
        assert_eq!(coordinator.concurrency(), 1);

        let mut store = store_of(&["https://a.test/", "https://b.test/"]);
        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;
        assert_eq!(summary.succeeded, 2);
        assert_eq!(coordinator.fetcher.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_order_follows_store_order() {
        let fetcher = ScriptedFetcher::default()
            .reply("https://a.test/", Reply::Page(PAGE_A))
            .reply("https://c.test/", Reply::Page(PAGE_A));
        let coordinator = Coordinator::new(fetcher, &config(1, Duration::from_secs(1)));

        let mut store = store_of(&[
            "https://a.test/",
            "chrome://skip",
            "https://b.test/",
            "https://c.test/",
        ]);
        let progress = RecordingProgress::default();
        coordinator.retrieve_all(&mut store, &progress).await;

        let dispatched = progress.dispatched.lock().unwrap().clone();
        assert_eq!(
            dispatched,
            vec![
                (1, 3, "https://a.test/".to_string()),
                (2, 3, "https://b.test/".to_string()),
                (3, 3, "https://c.test/".to_string()),
            ]
        );
        assert_eq!(
            *coordinator.fetcher.calls.lock().unwrap(),
            ["https://a.test/", "https://b.test/", "https://c.test/"]
        );
    }

    #[tokio::test]
    async fn failures_do_not_affect_siblings() {
        let fetcher = ScriptedFetcher::default()
            .reply("https://ok1.test/", Reply::Page(PAGE_A))
            .reply("https://hang.test/", Reply::Hang)
            .reply("https://down.test/", Reply::Fail(FetchError::Connect("refused".into())))
            .reply("https://gone.test/", Reply::Fail(FetchError::Status(410)))
            .reply("https://ok2.test/", Reply::Page(PAGE_A));
        let coordinator = Coordinator::new(fetcher, &config(2, Duration::from_millis(100)));

        let mut store = store_of(&[
            "https://ok1.test/",
            "https://hang.test/",
            "https://down.test/",
            "https://gone.test/",
            "https://ok2.test/",
        ]);
        let progress = RecordingProgress::default();
        let summary = coordinator.retrieve_all(&mut store, &progress).await;

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 3);
        let part = store.partition();
        let complete: Vec<_> = part.complete.iter().map(|b| b.url()).collect();
        assert_eq!(complete, ["https://ok1.test/", "https://ok2.test/"]);

        let mut reasons: Vec<_> = progress
            .failed
            .lock()
            .unwrap()
            .iter()
            .map(|(_, r)| *r)
            .collect();
        reasons.sort_by_key(|r| r.as_str());
        assert_eq!(
            reasons,
            [FailureReason::Network, FailureReason::Status, FailureReason::Timeout]
        );
    }

    #[tokio::test]
    async fn panicking_task_is_contained() {
        let fetcher = ScriptedFetcher::default()
            .reply("https://boom.test/", Reply::Panic)
            .reply("https://a.test/", Reply::Page(PAGE_A));
        let coordinator = Coordinator::new(fetcher, &config(2, Duration::from_secs(1)));

        let mut store = store_of(&["https://boom.test/", "https://a.test/"]);
        let progress = RecordingProgress::default();
        let summary = coordinator.retrieve_all(&mut store, &progress).await;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 1);
        assert!(!store.iter().next().unwrap().is_enriched());
        assert_eq!(
            *progress.failed.lock().unwrap(),
            [("https://boom.test/".to_string(), FailureReason::Network)]
        );
    }

    #[tokio::test]
    async fn signals_use_the_bookmarked_url() {
        let coordinator =
            Coordinator::new(ScriptedFetcher::default(), &config(1, Duration::from_secs(1)));

        let mut store = store_of(&["HTTPS://A.test"]);
        let progress = RecordingProgress::default();
        coordinator.retrieve_all(&mut store, &progress).await;

        assert_eq!(
            *progress.dispatched.lock().unwrap(),
            [(1, 1, "HTTPS://A.test".to_string())]
        );
        assert_eq!(
            *progress.failed.lock().unwrap(),
            [("HTTPS://A.test".to_string(), FailureReason::Status)]
        );
        // The request itself goes to the normalized form.
        assert_eq!(*coordinator.fetcher.calls.lock().unwrap(), ["https://a.test/"]);
    }

    #[tokio::test]
    async fn completion_signal_counts_every_settled_bookmark() {
        let fetcher = ScriptedFetcher::default()
            .reply("https://a.test/", Reply::Page(PAGE_A))
            .reply("https://boom.test/", Reply::Panic)
            .reply("https://hang.test/", Reply::Hang);
        let coordinator = Coordinator::new(fetcher, &config(3, Duration::from_millis(100)));

        let mut store = store_of(&[
            "https://a.test/",
            "chrome://skip",
            "https://boom.test/",
            "https://hang.test/",
            "https://missing.test/",
        ]);
        let progress = RecordingProgress::default();
        let summary = coordinator.retrieve_all(&mut store, &progress).await;

        assert_eq!(summary.total, 4);
        assert_eq!(
            *progress.completed.lock().unwrap(),
            [(1, 4), (2, 4), (3, 4), (4, 4)]
        );
        assert_eq!(progress.failed.lock().unwrap().len(), summary.failed);
    }

    #[tokio::test]
    async fn duplicate_urls_are_fetched_independently() {
        let fetcher = ScriptedFetcher::default().reply("https://a.test/", Reply::Page(PAGE_A));
        let coordinator = Coordinator::new(fetcher, &config(4, Duration::from_secs(1)));

        let mut store = store_of(&["https://a.test/", "https://a.test/"]);
        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;

        assert_eq!(summary.succeeded, 2);
        assert_eq!(coordinator.fetcher.calls.lock().unwrap().len(), 2);
        assert!(store.iter().all(|b| b.is_complete()));
    }

    #[tokio::test]
    async fn previously_enriched_bookmark_keeps_first_values() {
        let fetcher = ScriptedFetcher::default().reply("https://a.test/", Reply::Page(PAGE_A));
        let coordinator = Coordinator::new(fetcher, &config(1, Duration::from_secs(1)));

        let mut store = store_of(&["https://a.test/"]);
        let slot = store.slots().next().map(|(s, _)| s).unwrap();
        store
            .get_mut(slot)
            .unwrap()
            .enrich("Earlier".into(), "From a prior pass".into());

        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;
        assert_eq!(store.get(slot).unwrap().title(), "Earlier");
        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.skipped, 1);
        assert!(coordinator.fetcher.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(1, 4), 25.0);
        assert_eq!(progress_percent(3, 3), 100.0);
    }

    #[tokio::test]
    async fn http_coordinator_against_mock_server() {
        use wiremock::matchers::path;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(path("/a"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_A))
            .mount(&server)
            .await;
        Mock::given(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(PAGE_A)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        Mock::given(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let base = server.uri();
        let a = format!("{base}/a");
        let slow = format!("{base}/slow");
        let missing = format!("{base}/missing");
        let mut store = store_of(&[a.as_str(), "chrome://x", slow.as_str(), missing.as_str()]);

        let coordinator =
            Coordinator::http(&config(4, Duration::from_millis(300))).expect("http client");
        let summary = coordinator.retrieve_all(&mut store, &SilentProgress).await;

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 2);

        let part = store.partition();
        assert_eq!(part.complete.len(), 1);
        assert_eq!(part.complete[0].url(), a);
        let incomplete: Vec<_> = part.incomplete.iter().map(|b| b.url()).collect();
        assert_eq!(incomplete, ["chrome://x", slow.as_str(), missing.as_str()]);
    }
}
