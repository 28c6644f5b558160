//! Comment feed service holding the aggregation policy.

use std::sync::Arc;

use tracing::warn;

use super::Comment;
use super::ports::{CommentSource, CommentSourceError};

/// Maximum submissions considered per query.
pub const SEARCH_SUBMISSION_LIMIT: u32 = 5;

/// Maximum comments taken from each submission.
pub const COMMENTS_PER_SUBMISSION: u32 = 10;

/// Aggregates platform comments for a policy topic.
///
/// Searches one community, fetches each matching submission's comments, and
/// flattens them into a single list. A failing search aborts the query; a
/// single submission failing to resolve is logged and skipped so partial
/// results still come back.
pub struct CommentFeed {
    source: Arc<dyn CommentSource>,
}

impl CommentFeed {
    /// Build a feed over the given source.
    pub fn new(source: Arc<dyn CommentSource>) -> Self {
        Self { source }
    }

    /// Collect up to [`SEARCH_SUBMISSION_LIMIT`] × [`COMMENTS_PER_SUBMISSION`]
    /// comments about `policy` from `subreddit`, in the order the platform
    /// returned them.
    ///
    /// # Errors
    ///
    /// Returns the source error when the search itself fails.
    pub async fn comments_for_policy(
        &self,
        subreddit: &str,
        policy: &str,
    ) -> Result<Vec<Comment>, CommentSourceError> {
        let submissions = self
            .source
            .search_submissions(subreddit, policy, SEARCH_SUBMISSION_LIMIT)
            .await?;

        let mut comments = Vec::new();
        for submission in submissions
            .into_iter()
            .take(SEARCH_SUBMISSION_LIMIT as usize)
        {
            match self
                .source
                .submission_comments(&submission.id, COMMENTS_PER_SUBMISSION)
                .await
            {
                Ok(batch) => {
                    comments.extend(batch.into_iter().take(COMMENTS_PER_SUBMISSION as usize));
                }
                Err(error) => {
                    warn!(
                        submission_id = %submission.id,
                        %error,
                        "skipping submission after source failure"
                    );
                }
            }
        }
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the aggregation policy.
    use super::*;
    use crate::domain::Submission;
    use crate::domain::ports::MockCommentSource;

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.to_owned(),
            title: format!("submission {id}"),
        }
    }

    fn comment(submission_id: &str, index: usize) -> Comment {
        Comment {
            id: format!("{submission_id}-c{index}"),
            body: format!("comment {index}"),
            author: "commenter".to_owned(),
            score: 1,
            created: 1_700_000_000,
        }
    }

    fn comments(submission_id: &str, count: usize) -> Vec<Comment> {
        (0..count).map(|i| comment(submission_id, i)).collect()
    }

    #[tokio::test]
    async fn passes_configured_limits_to_the_source() {
        let mut source = MockCommentSource::new();
        source
            .expect_search_submissions()
            .withf(|subreddit, query, limit| {
                subreddit == "india" && query == "sanitation" && *limit == SEARCH_SUBMISSION_LIMIT
            })
            .returning(|_, _, _| Ok(vec![submission("s1")]));
        source
            .expect_submission_comments()
            .withf(|id, limit| id == "s1" && *limit == COMMENTS_PER_SUBMISSION)
            .returning(|_, _| Ok(comments("s1", 2)));

        let feed = CommentFeed::new(Arc::new(source));
        let result = feed
            .comments_for_policy("india", "sanitation")
            .await
            .expect("feed should aggregate");
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn caps_submissions_and_comments_even_when_the_source_over_returns() {
        let mut source = MockCommentSource::new();
        source.expect_search_submissions().returning(|_, _, _| {
            Ok((1..=7).map(|i| submission(&format!("s{i}"))).collect())
        });
        source
            .expect_submission_comments()
            .returning(|id, _| Ok(comments(id, 12)));

        let feed = CommentFeed::new(Arc::new(source));
        let result = feed
            .comments_for_policy("india", "education")
            .await
            .expect("feed should aggregate");
        assert_eq!(
            result.len(),
            (SEARCH_SUBMISSION_LIMIT * COMMENTS_PER_SUBMISSION) as usize
        );
    }

    #[tokio::test]
    async fn skips_a_failing_submission_and_keeps_the_rest() {
        let mut source = MockCommentSource::new();
        source.expect_search_submissions().returning(|_, _, _| {
            Ok(vec![submission("s1"), submission("s2"), submission("s3")])
        });
        source.expect_submission_comments().returning(|id, _| {
            if id == "s2" {
                Err(CommentSourceError::transport("connection reset"))
            } else {
                Ok(comments(id, 2))
            }
        });

        let feed = CommentFeed::new(Arc::new(source));
        let result = feed
            .comments_for_policy("india", "transport")
            .await
            .expect("partial results are a success");
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["s1-c0", "s1-c1", "s3-c0", "s3-c1"]);
    }

    #[tokio::test]
    async fn propagates_a_search_failure() {
        let mut source = MockCommentSource::new();
        source
            .expect_search_submissions()
            .returning(|_, _, _| Err(CommentSourceError::auth("invalid_grant")));
        source.expect_submission_comments().never();

        let feed = CommentFeed::new(Arc::new(source));
        let error = feed
            .comments_for_policy("india", "healthcare")
            .await
            .expect_err("search failure must abort");
        assert!(matches!(error, CommentSourceError::Auth { .. }));
    }

    #[tokio::test]
    async fn preserves_platform_order_across_submissions() {
        let mut source = MockCommentSource::new();
        source
            .expect_search_submissions()
            .returning(|_, _, _| Ok(vec![submission("s2"), submission("s1")]));
        source
            .expect_submission_comments()
            .returning(|id, _| Ok(comments(id, 1)));

        let feed = CommentFeed::new(Arc::new(source));
        let result = feed
            .comments_for_policy("india", "budget")
            .await
            .expect("feed should aggregate");
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["s2-c0", "s1-c0"]);
    }
}
