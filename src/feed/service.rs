use crate::article::Article;
use crate::feed::fetcher::{self, FetchError};
use crate::feed::parser::{self, ParseError};
use crate::feed::request::{self, Endpoint, FeedRequest, RequestError};
use crate::feed::thumbnail;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// How many thumbnail fetches may be in flight at once per invocation.
const THUMBNAIL_CONCURRENCY: usize = 4;

/// Unified failure taxonomy returned to the caller.
///
/// Every batch-level problem in the pipeline maps onto one of these
/// variants; nothing panics past this boundary. Record-level and
/// field-level problems (a dropped result, a missing thumbnail) are
/// absorbed earlier and degrade the data instead. The split lets callers
/// render "no internet connection" and "no articles found" as two distinct
/// empty states: a `ServiceError` is never conflated with an empty `Ok`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request URL could not be constructed. Fatal for the call.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] RequestError),
    /// Connection-level failure: timeout, DNS, reset. The
    /// "network unavailable" class of problem.
    #[error("Network unavailable: {0}")]
    Transport(String),
    /// The server answered with a non-200 status.
    #[error("Server returned HTTP status {0}")]
    HttpStatus(u16),
    /// The response body was not the expected JSON envelope.
    #[error("Malformed response: {0}")]
    Malformed(String),
    /// A newer invocation started before this one finished; its result
    /// was discarded so stale data never overwrites fresher data.
    #[error("Superseded by a newer request")]
    Superseded,
}

impl From<FetchError> for ServiceError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::HttpStatus(code) => ServiceError::HttpStatus(code),
            FetchError::InvalidUtf8 => {
                ServiceError::Malformed("response body is not valid UTF-8".to_string())
            }
            FetchError::Network(_) | FetchError::Timeout | FetchError::ResponseTooLarge(_) => {
                ServiceError::Transport(error.to_string())
            }
        }
    }
}

impl From<ParseError> for ServiceError {
    fn from(error: ParseError) -> Self {
        ServiceError::Malformed(error.to_string())
    }
}

/// Orchestrates the fetch-parse-hydrate pipeline.
///
/// Each [`get_articles`](Self::get_articles) call is an independent,
/// idempotent unit of work: build URL, fetch, parse, resolve thumbnails,
/// assemble. The service holds no cross-call state beyond a generation
/// counter used to discard results of superseded invocations.
pub struct FeedService {
    client: reqwest::Client,
    endpoint: Endpoint,
    generation: AtomicU64,
}

impl FeedService {
    /// Create a service over the given client and endpoint. The client's
    /// timeout configuration is the caller's responsibility; use
    /// [`FeedService::connect`] for the standard one.
    pub fn new(client: reqwest::Client, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            generation: AtomicU64::new(0),
        }
    }

    /// Create a service with the standard client (15s connect / 10s read
    /// timeouts) pointed at `endpoint`.
    pub fn connect(endpoint: Endpoint) -> Result<Self, reqwest::Error> {
        Ok(Self::new(fetcher::build_client()?, endpoint))
    }

    /// Run the full pipeline for one request and return the finished
    /// article list.
    ///
    /// Zero articles from a valid response is `Ok(vec![])`: callers
    /// distinguish "no results" from "error" via the `Result` tag. If a
    /// newer `get_articles` call starts on this service before this one
    /// completes, the stale outcome is reported as
    /// [`ServiceError::Superseded`] and its articles are never returned.
    ///
    /// # Errors
    ///
    /// See [`ServiceError`] for the taxonomy. Dropped records and failed
    /// thumbnails are not errors; they are logged and degrade the data.
    pub async fn get_articles(&self, request: &FeedRequest) -> Result<Vec<Article>, ServiceError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let url = request::build_url(&self.endpoint.scheme, &self.endpoint.authority, request)?;
        let body = fetcher::fetch(&self.client, url).await?;
        let feed = parser::parse(&body)?;

        if feed.skipped > 0 {
            tracing::warn!(
                skipped = feed.skipped,
                section = request.section.as_deref().unwrap_or(""),
                "Results dropped for missing required fields"
            );
        }

        // Thumbnail fetches fan out over a bounded pool; `buffered` (not
        // `buffer_unordered`) keeps the output in parse order.
        let client = self.client.clone();
        let articles: Vec<Article> = stream::iter(feed.records)
            .map(|record| {
                let client = client.clone();
                async move {
                    let thumbnail =
                        thumbnail::resolve(&client, record.thumbnail_url.as_deref()).await;
                    Article {
                        title: record.title,
                        contributor: record.contributor,
                        section: record.section,
                        published_at: record.published_at,
                        url: record.url,
                        thumbnail,
                    }
                }
            })
            .buffered(THUMBNAIL_CONCURRENCY)
            .collect()
            .await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(
                ticket = ticket,
                "Discarding stale result, a newer request superseded this one"
            );
            return Err(ServiceError::Superseded);
        }

        tracing::info!(
            count = articles.len(),
            section = request.section.as_deref().unwrap_or(""),
            "Feed refresh complete"
        );
        Ok(articles)
    }
}
