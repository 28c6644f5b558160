//! Domain model, ports, and the comment feed service.
//!
//! Purpose: keep the aggregation policy and its types transport agnostic.
//! Inbound adapters map [`Error`] onto protocol responses; outbound adapters
//! implement [`ports::CommentSource`].

pub mod comment;
pub mod error;
pub mod feed;
pub mod ports;

pub use self::comment::{Comment, DELETED_AUTHOR, Submission};
pub use self::error::{Error, ErrorCode};
pub use self::feed::{COMMENTS_PER_SUBMISSION, CommentFeed, SEARCH_SUBMISSION_LIMIT};
