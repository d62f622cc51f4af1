use image::DynamicImage;

/// A single feed item as delivered to the presentation layer.
///
/// An `Article` is fully constructed or not constructed at all: the parser
/// drops any result that cannot yield a non-empty `title`, `section`, and
/// `url`, so no partially-initialized record ever reaches a caller.
/// Articles are created fresh on every pipeline run and never mutated.
#[derive(Clone)]
pub struct Article {
    /// Headline of the article. Never empty.
    pub title: String,
    /// Contributor byline, absent when the source tag list is empty.
    pub contributor: Option<String>,
    /// Section name (e.g. "Technology"). Never empty.
    pub section: String,
    /// Publication timestamp, ISO-8601, exactly as received from the API.
    pub published_at: String,
    /// Canonical link to the full article. Never empty.
    pub url: String,
    /// Decoded thumbnail, present only when the API supplied a
    /// `fields.thumbnail` URL and the secondary fetch succeeded.
    pub thumbnail: Option<DynamicImage>,
}

impl Article {
    /// Date-only portion of [`published_at`](Self::published_at), derived at
    /// render time rather than stored separately.
    ///
    /// Falls back to splitting at the `T` separator when the timestamp does
    /// not parse as RFC 3339.
    pub fn published_date(&self) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.published_at) {
            Ok(dt) => dt.date_naive().to_string(),
            Err(_) => self
                .published_at
                .split('T')
                .next()
                .unwrap_or(&self.published_at)
                .to_string(),
        }
    }
}

/// Custom Debug keeps output readable: a decoded image is summarized by its
/// dimensions instead of dumping pixel data.
impl std::fmt::Debug for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Article")
            .field("title", &self.title)
            .field("contributor", &self.contributor)
            .field("section", &self.section)
            .field("published_at", &self.published_at)
            .field("url", &self.url)
            .field(
                "thumbnail",
                &self
                    .thumbnail
                    .as_ref()
                    .map(|img| format!("{}x{}", img.width(), img.height())),
            )
            .finish()
    }
}
