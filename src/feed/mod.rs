//! The fetch-parse-hydrate pipeline for the Guardian Content API.
//!
//! This module turns one feed request into a finished article list:
//!
//! - [`request`] - Assemble the parameterized query URL
//! - [`fetcher`] - Single bounded GET returning the raw JSON body
//! - [`parser`] - Defensive decode of the loosely-specified response schema
//! - [`thumbnail`] - Secondary fetch and decode of per-record images
//! - [`service`] - Orchestration and the unified error taxonomy
//!
//! Control flow is strictly linear per invocation, and no component holds
//! cross-call state: given the same inputs and remote state, every
//! invocation is independent and idempotent.
//!
//! # Example
//!
//! ```ignore
//! use byline::{Endpoint, FeedRequest, FeedService};
//!
//! let service = FeedService::connect(Endpoint::default())?;
//! let request = FeedRequest {
//!     section: Some("technology".to_string()),
//!     ..FeedRequest::default()
//! };
//! let articles = service.get_articles(&request).await?;
//! ```

pub mod fetcher;
pub mod parser;
pub mod request;
pub mod service;
pub mod thumbnail;

pub use fetcher::FetchError;
pub use parser::{ParseError, ParsedFeed, ParsedRecord};
pub use request::{Endpoint, FeedRequest, RequestError};
pub use service::{FeedService, ServiceError};
