use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Fixed request hint instructing the API to include contributor tags.
const SHOW_TAGS: &str = "contributor";
/// Fixed request hint instructing the API to include the thumbnail field.
const SHOW_FIELDS: &str = "thumbnail";

/// Errors that can occur while assembling a query URL.
///
/// These are fatal for the call and are never retried internally; the
/// service surfaces them as `ServiceError::InvalidUrl`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The scheme/authority pair did not parse as a URL base.
    #[error("Invalid base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
    /// The base URL has no host component.
    #[error("Base URL has no host")]
    MissingHost,
    /// The base URL cannot carry path segments (e.g. a `mailto:` base).
    #[error("Base URL cannot carry path segments")]
    CannotBeBase,
}

/// Scheme and authority of the remote API.
///
/// The default points at the production Guardian Content API; tests swap in
/// a mock server via [`Endpoint::parse`].
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub scheme: String,
    pub authority: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            authority: "content.guardianapis.com".to_string(),
        }
    }
}

impl Endpoint {
    /// Split a base URL string (e.g. `http://127.0.0.1:8080`) into an
    /// endpoint, preserving any explicit port in the authority.
    pub fn parse(base: &str) -> Result<Self, RequestError> {
        let url = Url::parse(base)?;
        let host = url.host_str().ok_or(RequestError::MissingHost)?;
        let authority = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        Ok(Self {
            scheme: url.scheme().to_string(),
            authority,
        })
    }
}

/// Transient description of one feed query.
///
/// Built fresh per call from caller-supplied configuration and never cached.
/// The section travels with the request instead of living in shared state,
/// so concurrent invocations cannot observe each other's selection. All
/// values are opaque strings interpolated into the URL; out-of-range values
/// surface as remote 4xx/5xx responses rather than local validation errors.
#[derive(Debug, Clone)]
pub struct FeedRequest {
    /// Feed section, appended as a path segment when non-empty.
    pub section: Option<String>,
    /// Number of results the API should return per request.
    pub page_size: String,
    /// Result ordering (e.g. "newest", "relevance").
    pub order_by: String,
    /// Free-text search keyword. Empty means no keyword filter.
    pub keyword: String,
    /// Static API key. `SecretString` keeps it out of Debug output.
    pub api_key: SecretString,
}

impl Default for FeedRequest {
    fn default() -> Self {
        Self {
            section: None,
            page_size: "10".to_string(),
            order_by: "newest".to_string(),
            keyword: String::new(),
            api_key: SecretString::from(String::new()),
        }
    }
}

/// Assemble the fully-qualified query URL for one feed request.
///
/// Pure function: the same inputs always yield the same URL and nothing is
/// validated beyond URL syntax. Each parameter appears exactly once, with
/// `show-tags` and `show-fields` pinned to the values the parser relies on.
pub fn build_url(
    scheme: &str,
    authority: &str,
    request: &FeedRequest,
) -> Result<Url, RequestError> {
    let mut url = Url::parse(&format!("{}://{}/", scheme, authority))?;

    if let Some(section) = request.section.as_deref().filter(|s| !s.is_empty()) {
        url.path_segments_mut()
            .map_err(|_| RequestError::CannotBeBase)?
            .pop_if_empty()
            .push(section);
    }

    url.query_pairs_mut()
        .append_pair("page-size", &request.page_size)
        .append_pair("show-tags", SHOW_TAGS)
        .append_pair("show-fields", SHOW_FIELDS)
        .append_pair("order-by", &request.order_by)
        .append_pair("q", &request.keyword)
        .append_pair("api-key", request.api_key.expose_secret());

    Ok(url)
}
