//! Comment feed endpoint.
//!
//! ```text
//! GET /api/reddit_comments?policy=<query>&subreddit=<name>
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Comment, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{EnvelopeStatus, ErrorEnvelope};
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the comment feed endpoint.
#[derive(Debug, Deserialize)]
pub struct CommentsQuery {
    /// Free-text policy topic; required.
    pub policy: Option<String>,
    /// Community to search; falls back to the configured default.
    pub subreddit: Option<String>,
}

/// Success payload: the envelope around the flattened comment list.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentsResponse {
    /// Always `success`.
    pub status: EnvelopeStatus,
    /// Flattened comments across all matched submissions.
    pub data: Vec<Comment>,
}

impl CommentsResponse {
    /// Wrap a comment list in the success envelope.
    pub fn new(data: Vec<Comment>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data,
        }
    }
}

/// Fetch comments about a policy topic.
///
/// Searches the community for submissions matching the query and flattens
/// their comments into one list. Partial results are returned when individual
/// submissions fail to resolve.
#[utoipa::path(
    get,
    path = "/api/reddit_comments",
    params(
        ("policy" = Option<String>, Query, description = "Free-text search query; required"),
        (
            "subreddit" = Option<String>,
            Query,
            description = "Community to search; defaults to the configured community"
        )
    ),
    responses(
        (status = 200, description = "Flattened comment list", body = CommentsResponse),
        (status = 400, description = "Missing or blank policy parameter", body = ErrorEnvelope),
        (status = 500, description = "Upstream platform failure", body = ErrorEnvelope)
    ),
    tags = ["comments"],
    operation_id = "redditComments"
)]
#[get("/api/reddit_comments")]
pub async fn reddit_comments(
    state: web::Data<HttpState>,
    query: web::Query<CommentsQuery>,
) -> ApiResult<HttpResponse> {
    let CommentsQuery { policy, subreddit } = query.into_inner();
    let policy = policy
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| Error::invalid_request("policy query parameter is required"))?;
    let subreddit = subreddit.unwrap_or_else(|| state.default_subreddit.clone());

    let comments = state.feed.comments_for_policy(&subreddit, &policy).await?;
    Ok(HttpResponse::Ok().json(CommentsResponse::new(comments)))
}
