//! # Search dispatch
//!
//! Turns the raw keystroke stream into a throttled sequence of backend
//! calls: debounce the burst, drop consecutive duplicates, short-circuit
//! blank queries, and let only the newest in-flight response through.
//!
//! Cancellation is a generation check rather than stream teardown: every
//! dispatched query gets a monotonically increasing id, and a response is
//! delivered only while its id is still the latest issued one. A slow older
//! request may well complete on the wire, but its result is discarded.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use catalog::SearchResult;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    task::JoinHandle,
    time::sleep,
};
use tracing::warn;

use crate::search::QueryHandler;

/// Quiet interval a query must survive before it is eligible to dispatch.
pub const DEBOUNCE: Duration = Duration::from_millis(100);

pub struct SearchDispatcher {
    query_tx: UnboundedSender<String>,
    pipeline: JoinHandle<()>,
}

impl SearchDispatcher {
    /// Starts the pipeline task. The returned receiver is the view's
    /// subscription: exactly one result per surviving query, in issue
    /// order, errors already degraded to empty results.
    pub fn spawn<H>(handler: H) -> (Self, UnboundedReceiver<SearchResult>)
    where
        H: QueryHandler + Clone + Send + Sync + 'static,
    {
        let (query_tx, query_rx) = unbounded_channel();
        let (result_tx, result_rx) = unbounded_channel();

        let pipeline = tokio::spawn(run_pipeline(handler, query_rx, result_tx));

        (Self { query_tx, pipeline }, result_rx)
    }

    /// Pushes the current search text; never blocks the caller.
    pub fn on_query_changed(&self, query: impl Into<String>) {
        let _ = self.query_tx.send(query.into());
    }
}

impl Drop for SearchDispatcher {
    fn drop(&mut self) {
        self.pipeline.abort();
    }
}

async fn run_pipeline<H>(
    handler: H,
    mut queries: UnboundedReceiver<String>,
    results: UnboundedSender<SearchResult>,
) where
    H: QueryHandler + Clone + Send + Sync + 'static,
{
    let latest = Arc::new(AtomicU64::new(0));
    let mut issued = 0u64;
    let mut last_forwarded: Option<String> = None;

    while let Some(first) = queries.recv().await {
        let query = debounce(&mut queries, first).await;

        // Consecutive duplicate: no call, no state change.
        if last_forwarded.as_deref() == Some(query.as_str()) {
            continue;
        }
        last_forwarded = Some(query.clone());

        issued += 1;
        let id = issued;
        latest.store(id, Ordering::SeqCst);

        // Blank query: answer locally, but still claim a generation so a
        // slower in-flight response cannot overwrite the cleared view.
        if query.trim().is_empty() {
            deliver(&latest, id, &results, SearchResult::empty(""));
            continue;
        }

        let handler = handler.clone();
        let latest = latest.clone();
        let results = results.clone();

        tokio::spawn(async move {
            let result = match handler.search(&query).await {
                Ok(result) => result,
                Err(error) => {
                    warn!("Search for {query:?} failed: {error}");
                    SearchResult::empty(query)
                }
            };

            deliver(&latest, id, &results, result);
        });
    }
}

/// Holds `current` until no newer query arrives for [`DEBOUNCE`]; only the
/// last query of a burst survives.
async fn debounce(queries: &mut UnboundedReceiver<String>, mut current: String) -> String {
    loop {
        tokio::select! {
            next = queries.recv() => match next {
                Some(next) => current = next,
                None => return current,
            },
            _ = sleep(DEBOUNCE) => return current,
        }
    }
}

fn deliver(
    latest: &AtomicU64,
    id: u64,
    results: &UnboundedSender<SearchResult>,
    result: SearchResult,
) {
    if latest.load(Ordering::SeqCst) == id {
        let _ = results.send(result);
    }
}
