//! Service layer: fetch orchestration over the API client.
//!
//! [`FeedService`] coordinates the concurrent event/history/connection
//! fetches and delegates derivation to [`crate::domain::overlap`].

pub mod feed_service;

pub use feed_service::FeedService;
