use serde_json::Value;
use thiserror::Error;

/// Errors that abort the whole parse.
///
/// Record-level problems never reach this type: a result element that fails
/// to yield its required fields is dropped and counted in
/// [`ParsedFeed::skipped`] instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body is not valid JSON or lacks the `response.results` envelope.
    #[error("Malformed feed body: {0}")]
    Malformed(String),
}

/// One result element with its required fields extracted and its optional
/// fields resolved to a declared absent/present state.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub title: String,
    pub contributor: Option<String>,
    pub section: String,
    pub published_at: String,
    pub url: String,
    /// Captured for the secondary thumbnail fetch; not resolved here.
    pub thumbnail_url: Option<String>,
}

/// Outcome of a successful parse: the surviving records in source order plus
/// a count of elements dropped for missing required fields.
#[derive(Debug, Default)]
pub struct ParsedFeed {
    pub records: Vec<ParsedRecord>,
    pub skipped: usize,
}

/// Decode a raw Guardian search response into ordered records.
///
/// An empty or whitespace-only body is an empty feed, not an error. A body
/// that is not JSON, or that lacks the top-level `response.results` array,
/// fails the whole batch with [`ParseError::Malformed`]. Within the array,
/// each element is handled independently: one bad record never aborts its
/// siblings, and output order matches source order exactly.
pub fn parse(raw_body: &str) -> Result<ParsedFeed, ParseError> {
    if raw_body.trim().is_empty() {
        return Ok(ParsedFeed::default());
    }

    let document: Value =
        serde_json::from_str(raw_body).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let results = document
        .get("response")
        .and_then(|response| response.get("results"))
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::Malformed("missing response.results array".to_string()))?;

    let mut feed = ParsedFeed::default();
    for (index, element) in results.iter().enumerate() {
        match extract_record(element) {
            Some(record) => feed.records.push(record),
            None => {
                feed.skipped += 1;
                tracing::warn!(index = index, "Result missing a required field, skipping");
            }
        }
    }

    Ok(feed)
}

/// Extract one record, or `None` when a required field is absent, empty, or
/// not a string. Optional fields degrade to absent on any mismatch.
fn extract_record(element: &Value) -> Option<ParsedRecord> {
    let title = required_string(element, "webTitle")?;
    let section = required_string(element, "sectionName")?;
    let published_at = required_string(element, "webPublicationDate")?;
    let url = required_string(element, "webUrl")?;

    // When several contributor tags are present the last one wins. That
    // matches the upstream behavior, which looks accidental; kept for
    // compatibility until product says otherwise.
    let contributor = element
        .get("tags")
        .and_then(Value::as_array)
        .and_then(|tags| {
            tags.iter()
                .filter_map(|tag| tag.get("webTitle").and_then(Value::as_str))
                .last()
        })
        .map(String::from);

    let thumbnail_url = element
        .get("fields")
        .and_then(|fields| fields.get("thumbnail"))
        .and_then(Value::as_str)
        .map(String::from);

    Some(ParsedRecord {
        title,
        contributor,
        section,
        published_at,
        url,
        thumbnail_url,
    })
}

fn required_string(element: &Value, key: &str) -> Option<String> {
    element
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
