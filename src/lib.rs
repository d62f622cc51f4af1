//! byline — a Guardian Content API client library.
//!
//! Fetches a news-article feed from the remote JSON API, converts the raw
//! response into a strongly-typed domain model, and hands the finished list
//! to a presentation layer on demand. The pipeline per invocation:
//!
//! build URL → fetch → parse → resolve thumbnails → [`Article`] list.
//!
//! Batch-level failures come back as a single [`ServiceError`]; record and
//! field-level problems (a result missing a required field, an unfetchable
//! thumbnail) degrade the data instead of failing the call, so callers can
//! always tell "server error" apart from "legitimately zero results".
//!
//! This is a library invoked by a host application: there is no CLI
//! surface, no persistence, and no retry policy — a failed fetch is
//! reported once and retrying is the caller's decision.

pub mod article;
pub mod config;
pub mod feed;

pub use article::Article;
pub use config::{Config, ConfigError};
pub use feed::{Endpoint, FeedRequest, FeedService, ServiceError};
