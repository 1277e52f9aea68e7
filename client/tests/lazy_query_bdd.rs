//! Behaviour tests for lazy query handles and their failure surfaces.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client::catalog::NoVariables;
use client::catalog::search::{SearchEvents, SearchEventsData, SearchEventsVariables};
use client::catalog::statistics::StatisticsQuery;
use client::composition::{LazyQuery, LoadOutcome, fetch_tags, use_statistics};
use client::domain::Tag;
use client::domain::ports::{
    GraphqlRequest, GraphqlResponse, GraphqlTransport, TransportError, UploadFile,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Transport that holds each search until the scenario releases it.
#[derive(Default)]
struct GatedTransport {
    gates: Mutex<HashMap<String, oneshot::Receiver<GraphqlResponse>>>,
    releases: Mutex<HashMap<String, oneshot::Sender<GraphqlResponse>>>,
    waiting: Mutex<HashSet<String>>,
}

impl GatedTransport {
    fn open(&self, term: &str) {
        let (sender, receiver) = oneshot::channel();
        self.gates
            .lock()
            .expect("gates mutex")
            .insert(term.to_owned(), receiver);
        self.releases
            .lock()
            .expect("releases mutex")
            .insert(term.to_owned(), sender);
    }

    fn is_waiting(&self, term: &str) -> bool {
        self.waiting.lock().expect("waiting mutex").contains(term)
    }

    fn release(&self, term: &str) {
        let sender = self
            .releases
            .lock()
            .expect("releases mutex")
            .remove(term)
            .expect("search should be pending");
        sender
            .send(events_titled(term))
            .expect("search should still be waiting");
    }
}

#[async_trait]
impl GraphqlTransport for GatedTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        let term = request
            .variables
            .get("term")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let gate = self
            .gates
            .lock()
            .expect("gates mutex")
            .remove(&term)
            .ok_or_else(|| TransportError::invalid_request(format!("no gate for {term}")))?;
        self.waiting.lock().expect("waiting mutex").insert(term);
        gate.await
            .map_err(|_| TransportError::transport("gate closed"))
    }

    async fn upload(
        &self,
        _request: &GraphqlRequest,
        _file: &UploadFile,
    ) -> Result<GraphqlResponse, TransportError> {
        Err(TransportError::invalid_request("uploads unsupported"))
    }
}

/// Transport answering every request with HTTP 401.
struct RejectingTransport;

#[async_trait]
impl GraphqlTransport for RejectingTransport {
    async fn execute(&self, _request: &GraphqlRequest) -> Result<GraphqlResponse, TransportError> {
        Err(TransportError::status(401_u16, "status 401: invalid token"))
    }

    async fn upload(
        &self,
        _request: &GraphqlRequest,
        _file: &UploadFile,
    ) -> Result<GraphqlResponse, TransportError> {
        Err(TransportError::status(401_u16, "status 401: invalid token"))
    }
}

fn events_titled(title: &str) -> GraphqlResponse {
    GraphqlResponse::with_data(json!({
        "searchEvents": {
            "total": 1,
            "elements": [{
                "id": "1",
                "uuid": "5d1f8b6a-0c55-4b3a-9a79-6f5c8f0e2a11",
                "title": title,
                "beginsOn": "2026-06-01T20:00:00Z",
                "status": "CONFIRMED"
            }]
        }
    }))
}

struct SearchHarness {
    runtime: Runtime,
    transport: Arc<GatedTransport>,
    query: Arc<LazyQuery<SearchEvents>>,
    pending: Mutex<HashMap<String, JoinHandle<LoadOutcome<SearchEventsData>>>>,
    outcomes: Mutex<HashMap<String, LoadOutcome<SearchEventsData>>>,
}

struct StatisticsHarness {
    runtime: Runtime,
    transport: Arc<RejectingTransport>,
    query: LazyQuery<StatisticsQuery>,
}

#[derive(Default, ScenarioState)]
struct LazyQueryWorld {
    search: Slot<Arc<SearchHarness>>,
    statistics: Slot<Arc<StatisticsHarness>>,
    tags: Slot<Vec<Tag>>,
}

impl LazyQueryWorld {
    fn search(&self) -> Arc<SearchHarness> {
        self.search.get().expect("search harness should be set")
    }

    fn statistics(&self) -> Arc<StatisticsHarness> {
        self.statistics
            .get()
            .expect("statistics harness should be set")
    }

    fn outcome(&self, term: &str) -> LoadOutcome<SearchEventsData> {
        self.search()
            .outcomes
            .lock()
            .expect("outcomes mutex")
            .get(term)
            .cloned()
            .expect("search should have finished")
    }
}

fn runtime() -> Runtime {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build")
}

#[fixture]
fn world() -> LazyQueryWorld {
    LazyQueryWorld::default()
}

#[given("a search handle over a gated transport")]
fn a_search_handle_over_a_gated_transport(world: &LazyQueryWorld) {
    let transport = Arc::new(GatedTransport::default());
    let query = Arc::new(LazyQuery::new(Arc::clone(&transport) as Arc<dyn GraphqlTransport>));
    world.search.set(Arc::new(SearchHarness {
        runtime: runtime(),
        transport,
        query,
        pending: Mutex::new(HashMap::new()),
        outcomes: Mutex::new(HashMap::new()),
    }));
}

#[given("a transport that rejects credentials")]
fn a_transport_that_rejects_credentials(world: &LazyQueryWorld) {
    let transport = Arc::new(RejectingTransport);
    let query = use_statistics(Arc::clone(&transport) as Arc<dyn GraphqlTransport>);
    world.statistics.set(Arc::new(StatisticsHarness {
        runtime: runtime(),
        transport,
        query,
    }));
}

#[when("a search for {term} starts")]
fn a_search_starts(world: &LazyQueryWorld, term: String) {
    let harness = world.search();
    harness.transport.open(&term);

    let query = Arc::clone(&harness.query);
    let variables = SearchEventsVariables::term(term.clone());
    let handle = harness
        .runtime
        .spawn(async move { query.load(variables).await });
    harness.runtime.block_on(async {
        while !harness.transport.is_waiting(&term) {
            tokio::task::yield_now().await;
        }
    });
    assert!(harness.query.is_loading(), "handle should show the pending search");
    harness
        .pending
        .lock()
        .expect("pending mutex")
        .insert(term, handle);
}

#[when("the {term} response arrives")]
fn the_response_arrives(world: &LazyQueryWorld, term: String) {
    let harness = world.search();
    harness.transport.release(&term);
    let handle = harness
        .pending
        .lock()
        .expect("pending mutex")
        .remove(&term)
        .expect("search should be pending");
    let outcome = harness
        .runtime
        .block_on(handle)
        .expect("search task should finish");
    harness
        .outcomes
        .lock()
        .expect("outcomes mutex")
        .insert(term, outcome);
}

#[when("statistics are loaded")]
fn statistics_are_loaded(world: &LazyQueryWorld) {
    let harness = world.statistics();
    let outcome = harness
        .runtime
        .block_on(harness.query.load(NoVariables {}));
    assert!(!outcome.is_superseded(), "single load should apply");
}

#[when("tags matching {filter} are fetched")]
fn tags_are_fetched(world: &LazyQueryWorld, filter: String) {
    let harness = world.statistics();
    let tags = harness
        .runtime
        .block_on(fetch_tags(harness.transport.as_ref(), &filter));
    world.tags.set(tags);
}

#[then("the visible results are for {term}")]
fn the_visible_results_are_for(world: &LazyQueryWorld, term: String) {
    let state = world.search().query.state();
    let data = state.data().expect("handle should show data");
    let title = data
        .search_events
        .iter()
        .next()
        .map(|event| event.title.clone());
    assert_eq!(title.as_deref(), Some(term.as_str()));
}

#[then("the {term} search was superseded")]
fn the_search_was_superseded(world: &LazyQueryWorld, term: String) {
    assert!(world.outcome(&term).is_superseded());
}

#[then("the {term} search completed")]
fn the_search_completed(world: &LazyQueryWorld, term: String) {
    let outcome = world.outcome(&term);
    assert!(matches!(outcome, LoadOutcome::Completed(Ok(_))));
}

#[then("the statistics handle shows an authentication failure")]
fn the_statistics_handle_shows_an_authentication_failure(world: &LazyQueryWorld) {
    let state = world.statistics().query.state();
    let error = state.error().expect("handle should show an error");
    assert!(error.is_auth_failure());
    assert!(!state.is_loading());
}

#[then("no tags are returned")]
fn no_tags_are_returned(world: &LazyQueryWorld) {
    let tags = world.tags.get().expect("tags should be fetched");
    assert!(tags.is_empty());
}

#[scenario(
    path = "tests/features/lazy_query.feature",
    name = "A slow older search never replaces a newer one"
)]
fn a_slow_older_search_never_replaces_a_newer_one(world: LazyQueryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lazy_query.feature",
    name = "Responses arriving in order are all applied"
)]
fn responses_arriving_in_order_are_all_applied(world: LazyQueryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lazy_query.feature",
    name = "Authentication errors are surfaced as structured failures"
)]
fn authentication_errors_are_surfaced_as_structured_failures(world: LazyQueryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lazy_query.feature",
    name = "Tag lookup falls back to an empty list"
)]
fn tag_lookup_falls_back_to_an_empty_list(world: LazyQueryWorld) {
    drop(world);
}
