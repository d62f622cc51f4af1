use crate::feed::fetcher::{self, FetchError};
use image::DynamicImage;
use thiserror::Error;

/// Thumbnail bodies larger than this are rejected to bound memory use.
const MAX_IMAGE_SIZE: usize = 2 * 1024 * 1024; // 2MB

/// Internal failure detail for a thumbnail fetch. Never escapes this
/// module: every variant degrades to an absent image.
#[derive(Debug, Error)]
enum ThumbnailError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolve an optional thumbnail URL into a decoded in-memory image.
///
/// An absent URL returns immediately without touching the network. A present
/// URL triggers a single GET and an in-memory decode; any fetch or decode
/// failure yields `None` so a missing thumbnail never fails the record, and
/// one failing fetch never affects sibling records.
pub async fn resolve(client: &reqwest::Client, url: Option<&str>) -> Option<DynamicImage> {
    let url = url?;
    match fetch_image(client, url).await {
        Ok(image) => Some(image),
        Err(error) => {
            tracing::debug!(url = %url, error = %error, "Thumbnail unavailable, record continues without an image");
            None
        }
    }
}

async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
) -> Result<DynamicImage, ThumbnailError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ThumbnailError::HttpStatus(status.as_u16()));
    }

    let bytes = fetcher::read_limited_bytes(response, MAX_IMAGE_SIZE).await?;
    Ok(image::load_from_memory(&bytes)?)
}
