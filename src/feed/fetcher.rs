use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Time allowed for the TCP/TLS connection to be established.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Time allowed between bytes once the connection is up.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);
/// Feed bodies larger than this are rejected to bound memory use.
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Errors that can occur while fetching a feed body.
///
/// There is no internal retry: a failed fetch is reported once per
/// invocation and retrying is a caller decision (e.g. pull-to-refresh).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, reset).
    #[error("Request failed: {0}")]
    Network(reqwest::Error),
    /// Non-200 HTTP response. The body is not read.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Connect or read deadline exceeded.
    #[error("Request timed out")]
    Timeout,
    /// Response body exceeded the size limit.
    #[error("Response too large (limit {0} bytes)")]
    ResponseTooLarge(usize),
    /// Response body was not valid UTF-8 text.
    #[error("Response body is not valid UTF-8")]
    InvalidUtf8,
}

/// Build the HTTP client used for feed and thumbnail fetches.
///
/// Timeouts are fixed at the module constants; connections are pooled and
/// released by reqwest on every exit path, including errors.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        .build()
}

/// Perform a single GET and return the response body as UTF-8 text.
///
/// # Errors
///
/// - [`FetchError::Timeout`] - connect or read deadline exceeded
/// - [`FetchError::Network`] - DNS, connection, TLS, or mid-body I/O error
/// - [`FetchError::HttpStatus`] - any status other than 200
/// - [`FetchError::ResponseTooLarge`] - body over the 5MB limit
/// - [`FetchError::InvalidUtf8`] - body is not UTF-8 text
pub async fn fetch(client: &reqwest::Client, url: Url) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(classify)?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_BODY_SIZE).await?;
    String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8)
}

/// Distinguish deadline expiry from other transport failures.
fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(error)
    }
}

/// Read a response body with a hard size cap.
///
/// The Content-Length header, when present, is checked before any bytes are
/// read; bodies without one are streamed and cut off at the limit.
pub(crate) async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(classify)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
