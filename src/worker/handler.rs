//! Fetch worker implementation.
//!
//! The worker runs on its own thread so the UI loop never blocks on the
//! network. It owns a shared HTTP client and a current-thread tokio runtime,
//! receives [`FetchRequest`]s over a channel, performs one GET per request in
//! arrival order, and sends a [`FetchResponse`] back for each.

use std::sync::mpsc::{Receiver, Sender};

use crate::domain::error::Result;
use crate::domain::{SearchResponse, Story, StorysiftError};
use crate::worker::{FetchOutcome, FetchRequest, FetchResponse};

/// Background fetch worker state.
///
/// Construct with [`SearchWorker::new`] and hand to [`SearchWorker::run`] on a
/// dedicated thread. The reqwest client is reused across requests for
/// connection pooling.
pub struct SearchWorker {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl SearchWorker {
    /// Creates a worker with a fresh HTTP client and runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime or the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StorysiftError::Worker(format!("failed to build runtime: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("storysift/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, runtime })
    }

    /// Runs the worker loop until the request channel disconnects.
    ///
    /// Requests are served strictly in arrival order. A response send failure
    /// means the UI thread is gone, which also ends the loop.
    pub fn run(self, requests: &Receiver<FetchRequest>, responses: &Sender<FetchResponse>) {
        while let Ok(request) = requests.recv() {
            let _span = tracing::debug_span!("fetch_request",
                request_id = request.request_id,
                url = %request.url
            )
            .entered();

            let outcome = self.runtime.block_on(fetch(&self.client, &request.url));

            let response = FetchResponse {
                request_id: request.request_id,
                outcome,
            };

            if responses.send(response).is_err() {
                tracing::debug!("response channel closed, stopping worker");
                break;
            }
        }

        tracing::debug!("fetch worker finished");
    }
}

/// Performs one search GET and collapses any failure into [`FetchOutcome::Failed`].
///
/// Success requires a 2xx status and a decodable body; the hit collection is
/// extracted and everything else in the response is dropped.
pub async fn fetch(client: &reqwest::Client, url: &str) -> FetchOutcome {
    match try_fetch(client, url).await {
        Ok(hits) => {
            tracing::debug!(hit_count = hits.len(), "fetch succeeded");
            FetchOutcome::Hits(hits)
        }
        Err(e) => {
            tracing::debug!(error = %e, "fetch failed");
            FetchOutcome::Failed(e.to_string())
        }
    }
}

async fn try_fetch(client: &reqwest::Client, url: &str) -> Result<Vec<Story>> {
    let response = client.get(url).send().await?.error_for_status()?;

    let body: SearchResponse = response.json().await?;

    Ok(body.hits)
}
