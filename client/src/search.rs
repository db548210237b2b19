//! The query-handler client: one GET per dispatched query, carrying the
//! persisted session token as a bearer credential whenever one exists.

use std::{future::Future, sync::Arc, time::Duration};

use catalog::SearchResult;
use reqwest::StatusCode;
use thiserror::Error;

use crate::session::SessionManager;

/// Bounded wait on the backend call; expiry counts as a transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search request failed with status {0}")]
    Status(StatusCode),
}

/// The backend seam the dispatcher dispatches through.
pub trait QueryHandler {
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResult, SearchError>> + Send;
}

#[derive(Clone)]
pub struct HttpQueryHandler {
    http: reqwest::Client,
    search_url: String,
    session: Arc<SessionManager>,
}

impl HttpQueryHandler {
    pub fn new(search_url: impl Into<String>, session: Arc<SessionManager>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client misconfigured!");

        Self {
            http,
            search_url: search_url.into(),
            session,
        }
    }
}

impl QueryHandler for HttpQueryHandler {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let mut request = self.http.get(format!("{}/{}", self.search_url, query));

        // Attachment is unconditional when a token exists; validity is the
        // backend's problem.
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
