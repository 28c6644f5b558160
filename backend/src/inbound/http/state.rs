//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain feed service and remain testable without network I/O.

use std::sync::Arc;

use crate::domain::CommentFeed;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Comment aggregation service.
    pub feed: Arc<CommentFeed>,
    /// Community searched when the request names none.
    pub default_subreddit: String,
}

impl HttpState {
    /// Construct state around a feed service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::CommentFeed;
    /// use backend::domain::ports::FixtureCommentSource;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let feed = Arc::new(CommentFeed::new(Arc::new(FixtureCommentSource)));
    /// let state = HttpState::new(feed, "india");
    /// assert_eq!(state.default_subreddit, "india");
    /// ```
    pub fn new(feed: Arc<CommentFeed>, default_subreddit: impl Into<String>) -> Self {
        Self {
            feed,
            default_subreddit: default_subreddit.into(),
        }
    }
}
