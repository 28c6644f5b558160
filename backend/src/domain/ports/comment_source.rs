//! Driven port for searching submissions and fetching their comments.
//!
//! The domain owns the request shape and response contract so feed
//! orchestration stays adapter-agnostic.

use async_trait::async_trait;

use crate::domain::{Comment, Submission};

/// Errors surfaced while calling the comment platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentSourceError {
    /// Network transport failed before receiving a response.
    #[error("reddit transport failed: {message}")]
    Transport {
        /// Underlying failure detail.
        message: String,
    },
    /// The platform call exceeded the configured timeout.
    #[error("reddit request timed out: {message}")]
    Timeout {
        /// Underlying failure detail.
        message: String,
    },
    /// The platform rate-limited the request.
    #[error("reddit rate limited the request: {message}")]
    RateLimited {
        /// Underlying failure detail.
        message: String,
    },
    /// Credentials were rejected or the token grant failed.
    #[error("reddit authentication failed: {message}")]
    Auth {
        /// Underlying failure detail.
        message: String,
    },
    /// The platform response could not be decoded.
    #[error("reddit response decode failed: {message}")]
    Decode {
        /// Underlying failure detail.
        message: String,
    },
    /// The adapter rejected the request before execution.
    #[error("reddit request invalid: {message}")]
    InvalidRequest {
        /// Underlying failure detail.
        message: String,
    },
}

impl CommentSourceError {
    /// Construct a [`CommentSourceError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`CommentSourceError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Construct a [`CommentSourceError::RateLimited`].
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Construct a [`CommentSourceError::Auth`].
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Construct a [`CommentSourceError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Construct a [`CommentSourceError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Port for querying the platform for submissions and their comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Search a community for submissions matching `query`, capped at
    /// `limit` results.
    async fn search_submissions(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Submission>, CommentSourceError>;

    /// Fetch one submission's comment tree flattened into a list, skipping
    /// unexpanded "load more" placeholders. `limit` shapes the upstream
    /// request; callers apply their own cap to the returned list.
    async fn submission_comments(
        &self,
        submission_id: &str,
        limit: u32,
    ) -> Result<Vec<Comment>, CommentSourceError>;
}

/// Fixture implementation returning empty results.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCommentSource;

#[async_trait]
impl CommentSource for FixtureCommentSource {
    async fn search_submissions(
        &self,
        _subreddit: &str,
        _query: &str,
        _limit: u32,
    ) -> Result<Vec<Submission>, CommentSourceError> {
        Ok(Vec::new())
    }

    async fn submission_comments(
        &self,
        _submission_id: &str,
        _limit: u32,
    ) -> Result<Vec<Comment>, CommentSourceError> {
        Ok(Vec::new())
    }
}
