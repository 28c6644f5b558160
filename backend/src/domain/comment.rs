//! Comment and submission records returned by the feed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentinel author shown when the platform reports no author.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// One flattened comment fetched from the platform.
///
/// Constructed per request from the source adapter's response and discarded
/// after serialisation.
///
/// ## Invariants
/// - `author` is always a printable string; deleted or missing authors
///   surface as [`DELETED_AUTHOR`].
/// - `created` is a Unix timestamp in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Platform identifier for the comment.
    #[schema(example = "k3j9d2a")]
    pub id: String,
    /// Comment body as returned by the platform.
    pub body: String,
    /// Author display name, or the deleted-author sentinel.
    #[schema(example = "policy_watcher")]
    pub author: String,
    /// Net vote score at fetch time.
    pub score: i64,
    /// Creation time as a Unix timestamp in seconds.
    #[schema(example = 1700000000)]
    pub created: i64,
}

/// Submission handle returned by search.
///
/// Used to fetch the submission's comments and for log context; never
/// serialised to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Platform identifier for the submission.
    pub id: String,
    /// Submission title.
    pub title: String,
}
