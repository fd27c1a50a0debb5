use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::modules::club::{Club, Coordinates};
use crate::modules::discovery::domain::services::discovery_pipeline::DiscoveryPipeline;
use crate::modules::discovery::domain::services::matcher::ScoredClub;
use crate::modules::discovery::domain::value_objects::{SearchFilters, SortSelection};
use crate::{log_debug, log_info};

/// Observer for completed pipeline runs and result activation.
pub trait DiscoverySink: Send + Sync {
    /// Invoked once per completed run with the final ordered results plus
    /// the query/filter state that produced them.
    fn on_search(&self, results: &[ScoredClub], query: &str, filters: &SearchFilters);

    /// Fired when a user activates a result card.
    fn on_club_select(&self, club: &Club);
}

/// One discovery submission: an immutable snapshot of the collection plus
/// the UI state driving the run.
#[derive(Clone)]
pub struct SearchRequest {
    pub clubs: Arc<Vec<Club>>,
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SortSelection,
    pub user_location: Option<Coordinates>,
}

impl SearchRequest {
    pub fn new(clubs: Arc<Vec<Club>>, query: impl Into<String>) -> Self {
        Self {
            clubs,
            query: query.into(),
            filters: SearchFilters::default(),
            sort: SortSelection::default(),
            user_location: None,
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortSelection) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_user_location(mut self, location: Coordinates) -> Self {
        self.user_location = Some(location);
        self
    }
}

/// Debounced front door to the discovery pipeline.
///
/// Rapid submissions collapse into a single run per quiescent period. Each
/// submission cancels the previous run's token, and a generation counter
/// guarantees last-write-wins: a stale run can never overwrite the sink with
/// older results, whatever the task scheduling looks like.
pub struct DiscoveryService {
    pipeline: Arc<DiscoveryPipeline>,
    sink: Arc<dyn DiscoverySink>,
    debounce: Duration,
    current: Mutex<Option<CancellationToken>>,
    generation: AtomicU64,
    emitted: AtomicU64,
}

impl DiscoveryService {
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

    pub fn new(pipeline: Arc<DiscoveryPipeline>, sink: Arc<dyn DiscoverySink>) -> Self {
        Self {
            pipeline,
            sink,
            debounce: Self::DEFAULT_DEBOUNCE,
            current: Mutex::new(None),
            generation: AtomicU64::new(0),
            emitted: AtomicU64::new(0),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Submit a new search. Supersedes any pending submission.
    ///
    /// Returns the spawned task handle so callers (and tests) can await
    /// completion; the UI layer normally ignores it.
    pub fn submit(self: &Arc<Self>, request: SearchRequest) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();

        // Cancel whatever run is pending; its output would be stale anyway.
        {
            let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = current.replace(token.clone()) {
                previous.cancel();
            }
        }

        log_debug!(
            "SEARCH: queued run #{} (query: '{}')",
            generation,
            request.query
        );

        let service = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log_debug!("SEARCH: run #{} cancelled during debounce", generation);
                    return;
                }
                _ = tokio::time::sleep(service.debounce) => {}
            }

            let outcome = service.pipeline.run(
                &request.clubs,
                &request.query,
                &request.filters,
                &request.sort,
                request.user_location.as_ref(),
            );

            if token.is_cancelled() {
                log_debug!("SEARCH: run #{} superseded, discarding results", generation);
                return;
            }

            if !service.try_emit(generation) {
                log_debug!("SEARCH: run #{} lost to a fresher run", generation);
                return;
            }

            log_info!(
                "SEARCH: run #{} '{}' returned {} results",
                generation,
                request.query,
                outcome.results.len()
            );
            service
                .sink
                .on_search(&outcome.results, &request.query, &request.filters);
        })
    }

    /// Run the pipeline immediately, bypassing the debounce.
    ///
    /// Used for the initial render, where there is no keystroke burst to
    /// collapse. Counts as a generation like any other run.
    pub fn run_now(self: &Arc<Self>, request: &SearchRequest) -> Vec<ScoredClub> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.pipeline.run(
            &request.clubs,
            &request.query,
            &request.filters,
            &request.sort,
            request.user_location.as_ref(),
        );

        if self.try_emit(generation) {
            self.sink
                .on_search(&outcome.results, &request.query, &request.filters);
        }
        outcome.results
    }

    /// Forward a result-card activation to the sink.
    pub fn select_club(&self, club: &Club) {
        self.sink.on_club_select(club);
    }

    /// Claim the emission slot for `generation`. Fails when a fresher run
    /// already emitted.
    fn try_emit(&self, generation: u64) -> bool {
        let mut seen = self.emitted.load(Ordering::SeqCst);
        loop {
            if generation <= seen {
                return false;
            }
            match self.emitted.compare_exchange(
                seen,
                generation,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(actual) => seen = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::club::ClubTier;

    struct RecordingSink {
        searches: Mutex<Vec<(usize, String)>>,
        selections: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                searches: Mutex::new(Vec::new()),
                selections: Mutex::new(Vec::new()),
            }
        }
    }

    impl DiscoverySink for RecordingSink {
        fn on_search(&self, results: &[ScoredClub], query: &str, _filters: &SearchFilters) {
            self.searches
                .lock()
                .unwrap()
                .push((results.len(), query.to_string()));
        }

        fn on_club_select(&self, club: &Club) {
            self.selections.lock().unwrap().push(club.name.clone());
        }
    }

    fn clubs() -> Arc<Vec<Club>> {
        Arc::new(vec![
            Club::new("Club Padel Madrid", ClubTier::Elite, "Madrid").with_rating(4.8, 10),
            Club::new("Club Deportivo", ClubTier::Basic, "Valencia").with_rating(3.2, 5),
        ])
    }

    fn service(sink: Arc<RecordingSink>, debounce_ms: u64) -> Arc<DiscoveryService> {
        Arc::new(
            DiscoveryService::new(Arc::new(DiscoveryPipeline::new()), sink)
                .with_debounce(Duration::from_millis(debounce_ms)),
        )
    }

    #[tokio::test]
    async fn test_submit_emits_once_after_debounce() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone(), 10);

        let handle = service.submit(SearchRequest::new(clubs(), "padel"));
        handle.await.unwrap();

        let searches = sink.searches.lock().unwrap();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0], (1, "padel".to_string()));
    }

    #[tokio::test]
    async fn test_rapid_submissions_collapse_to_last() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone(), 50);

        let h1 = service.submit(SearchRequest::new(clubs(), "pa"));
        let h2 = service.submit(SearchRequest::new(clubs(), "pad"));
        let h3 = service.submit(SearchRequest::new(clubs(), "padel"));

        let _ = futures::future::join3(h1, h2, h3).await;

        let searches = sink.searches.lock().unwrap();
        assert_eq!(searches.len(), 1, "superseded runs must not emit");
        assert_eq!(searches[0].1, "padel");
    }

    #[tokio::test]
    async fn test_run_now_bypasses_debounce() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone(), 60_000); // debounce far too long to fire

        let results = service.run_now(&SearchRequest::new(clubs(), ""));

        assert_eq!(results.len(), 2);
        assert_eq!(sink.searches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_run_cannot_overwrite_fresher_result() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone(), 100);

        // A debounced run is queued, then an immediate run claims a newer
        // generation before the debounced one wakes up.
        let handle = service.submit(SearchRequest::new(clubs(), "stale"));
        let _ = service.run_now(&SearchRequest::new(clubs(), "fresh"));
        handle.await.unwrap();

        let searches = sink.searches.lock().unwrap();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].1, "fresh");
    }

    #[tokio::test]
    async fn test_select_club_forwards_to_sink() {
        let sink = Arc::new(RecordingSink::new());
        let service = service(sink.clone(), 10);

        let club = Club::new("Club Padel Madrid", ClubTier::Elite, "Madrid");
        service.select_club(&club);

        assert_eq!(
            sink.selections.lock().unwrap().as_slice(),
            ["Club Padel Madrid"]
        );
    }
}
