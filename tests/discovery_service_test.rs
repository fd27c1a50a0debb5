mod utils;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use padelyzer_discovery::modules::club::Club;
use padelyzer_discovery::modules::discovery::{
    DiscoveryPipeline, DiscoveryService, DiscoverySink, ScoredClub, SearchFilters, SearchRequest,
    SortKey, SortSelection,
};
use padelyzer_discovery::shared::utils::init_tracing;

use utils::factories::scenario_catalogue;

#[derive(Default)]
struct CapturingSink {
    emissions: Mutex<Vec<(String, usize)>>,
    selected: Mutex<Vec<String>>,
}

impl DiscoverySink for CapturingSink {
    fn on_search(&self, results: &[ScoredClub], query: &str, _filters: &SearchFilters) {
        self.emissions
            .lock()
            .unwrap()
            .push((query.to_string(), results.len()));
    }

    fn on_club_select(&self, club: &Club) {
        self.selected.lock().unwrap().push(club.name.clone());
    }
}

fn make_service(sink: Arc<CapturingSink>, debounce_ms: u64) -> Arc<DiscoveryService> {
    Arc::new(
        DiscoveryService::new(Arc::new(DiscoveryPipeline::new()), sink)
            .with_debounce(Duration::from_millis(debounce_ms)),
    )
}

fn request(query: &str) -> SearchRequest {
    SearchRequest::new(Arc::new(scenario_catalogue()), query)
        .with_sort(SortSelection::new(SortKey::Relevance))
}

#[tokio::test]
async fn test_keystroke_burst_emits_only_final_query() {
    init_tracing();
    let sink = Arc::new(CapturingSink::default());
    let service = make_service(sink.clone(), 100);

    let handles: Vec<_> = ["p", "pa", "pad", "pade", "padel"]
        .into_iter()
        .map(|q| service.submit(request(q)))
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let emissions = sink.emissions.lock().unwrap();
    assert_eq!(emissions.len(), 1, "burst must collapse to one run");
    assert_eq!(emissions[0], ("padel".to_string(), 1));
}

#[tokio::test]
async fn test_sequential_quiescent_submissions_each_emit() {
    let sink = Arc::new(CapturingSink::default());
    let service = make_service(sink.clone(), 10);

    service.submit(request("padel")).await.unwrap();
    service.submit(request("deportivo")).await.unwrap();

    let emissions = sink.emissions.lock().unwrap();
    assert_eq!(emissions.len(), 2);
    assert_eq!(emissions[0].0, "padel");
    assert_eq!(emissions[1].0, "deportivo");
}

#[tokio::test]
async fn test_results_reflect_filters_at_submission_time() {
    let sink = Arc::new(CapturingSink::default());
    let service = make_service(sink.clone(), 10);

    let filtered = request("").with_filters(
        SearchFilters::new().with_verified(true),
    );
    service.submit(filtered).await.unwrap();

    let emissions = sink.emissions.lock().unwrap();
    assert_eq!(emissions.len(), 1);
    assert_eq!(emissions[0].1, 1, "only the verified club passes");
}

#[tokio::test]
async fn test_club_selection_reaches_sink() {
    let sink = Arc::new(CapturingSink::default());
    let service = make_service(sink.clone(), 10);

    let clubs = scenario_catalogue();
    service.select_club(&clubs[1]);

    assert_eq!(sink.selected.lock().unwrap().as_slice(), ["Club Deportivo"]);
}

#[tokio::test]
async fn test_run_now_returns_ordered_results_and_emits() {
    let sink = Arc::new(CapturingSink::default());
    let service = make_service(sink.clone(), 60_000);

    let results = service.run_now(&request("padel"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].club.name, "Club Padel Madrid");
    assert_eq!(sink.emissions.lock().unwrap().len(), 1);
}
