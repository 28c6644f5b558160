//! DTOs for decoding Reddit listing JSON.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain records in one pass. Reddit wraps every payload in a kinded
//! "thing": `Listing` containers, `t1` comments, `t3` submissions, and
//! `more` placeholders for unexpanded replies.

use serde::Deserialize;

use crate::domain::{Comment, DELETED_AUTHOR, Submission};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub(super) enum ThingDto {
    Listing(ListingDto),
    #[serde(rename = "t1")]
    Comment(CommentDto),
    #[serde(rename = "t3")]
    Submission(SubmissionDto),
    #[serde(rename = "more")]
    More(MoreDto),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListingDto {
    #[serde(default)]
    pub(super) children: Vec<ThingDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentDto {
    pub(super) id: String,
    #[serde(default)]
    pub(super) body: String,
    pub(super) author: Option<String>,
    #[serde(default)]
    pub(super) score: i64,
    #[serde(default)]
    pub(super) created_utc: f64,
    #[serde(default)]
    pub(super) replies: RepliesDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmissionDto {
    pub(super) id: String,
    #[serde(default)]
    pub(super) title: String,
}

/// Unexpanded "load more" placeholder; intentionally never resolved.
#[derive(Debug, Deserialize)]
pub(super) struct MoreDto {}

/// `replies` is a nested listing thing, or an empty string for leaves.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RepliesDto {
    Listing(Box<ThingDto>),
    Empty(String),
}

impl Default for RepliesDto {
    fn default() -> Self {
        Self::Empty(String::new())
    }
}

impl ThingDto {
    /// Children of a listing thing; empty for any other kind.
    pub(super) fn into_children(self) -> Vec<ThingDto> {
        match self {
            Self::Listing(listing) => listing.children,
            _ => Vec::new(),
        }
    }

    /// Submissions contained in a search listing, in platform order.
    pub(super) fn into_submissions(self) -> Vec<Submission> {
        self.into_children()
            .into_iter()
            .filter_map(|child| match child {
                Self::Submission(dto) => Some(dto.into_submission()),
                _ => None,
            })
            .collect()
    }

    /// Flatten the comment tree depth-first in platform order, skipping
    /// `more` placeholders.
    pub(super) fn into_comments(self) -> Vec<Comment> {
        let mut comments = Vec::new();
        collect_comments(self.into_children(), &mut comments);
        comments
    }
}

impl SubmissionDto {
    fn into_submission(self) -> Submission {
        Submission {
            id: self.id,
            title: self.title,
        }
    }
}

impl CommentDto {
    fn into_parts(self) -> (Comment, Vec<ThingDto>) {
        let Self {
            id,
            body,
            author,
            score,
            created_utc,
            replies,
        } = self;
        let author = match author {
            Some(name) if !name.trim().is_empty() => name,
            _ => DELETED_AUTHOR.to_owned(),
        };
        let comment = Comment {
            id,
            body,
            author,
            score,
            created: created_utc as i64,
        };
        let replies = match replies {
            RepliesDto::Listing(thing) => thing.into_children(),
            RepliesDto::Empty(_) => Vec::new(),
        };
        (comment, replies)
    }
}

fn collect_comments(children: Vec<ThingDto>, out: &mut Vec<Comment>) {
    for child in children {
        if let ThingDto::Comment(dto) = child {
            let (comment, replies) = dto.into_parts();
            out.push(comment);
            collect_comments(replies, out);
        }
    }
}

/// Payload of the OAuth2 token endpoint.
///
/// Reddit reports some grant failures with a 200 status and an `error`
/// field, so both shapes decode into this DTO.
#[derive(Debug, Deserialize)]
pub(super) struct AccessTokenDto {
    #[serde(default)]
    pub(super) access_token: String,
    #[serde(default)]
    pub(super) expires_in: u64,
    #[serde(default)]
    pub(super) error: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for listing decode and tree flattening.
    use super::*;

    fn decode(body: &str) -> ThingDto {
        serde_json::from_str(body).expect("payload should decode")
    }

    #[test]
    fn flattens_nested_replies_depth_first_and_skips_more_placeholders() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {
                        "kind": "t1",
                        "data": {
                            "id": "top1",
                            "body": "first",
                            "author": "alice",
                            "score": 5,
                            "created_utc": 1700000000.0,
                            "replies": {
                                "kind": "Listing",
                                "data": {
                                    "children": [
                                        {
                                            "kind": "t1",
                                            "data": {
                                                "id": "reply1",
                                                "body": "nested",
                                                "author": "bob",
                                                "score": 2,
                                                "created_utc": 1700000100.0,
                                                "replies": ""
                                            }
                                        },
                                        { "kind": "more", "data": { "count": 12 } }
                                    ]
                                }
                            }
                        }
                    },
                    {
                        "kind": "t1",
                        "data": {
                            "id": "top2",
                            "body": "second",
                            "author": "carol",
                            "score": 1,
                            "created_utc": 1700000200.0,
                            "replies": ""
                        }
                    }
                ]
            }
        }"#;

        let comments = decode(body).into_comments();
        let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["top1", "reply1", "top2"]);
    }

    #[test]
    fn missing_or_blank_authors_become_the_deleted_sentinel() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {
                        "kind": "t1",
                        "data": {
                            "id": "c1",
                            "body": "orphaned",
                            "author": null,
                            "score": 0,
                            "created_utc": 1700000000.0,
                            "replies": ""
                        }
                    }
                ]
            }
        }"#;

        let comments = decode(body).into_comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author, DELETED_AUTHOR);
    }

    #[test]
    fn fractional_created_timestamps_are_truncated_to_seconds() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {
                        "kind": "t1",
                        "data": {
                            "id": "c1",
                            "body": "b",
                            "author": "a",
                            "score": 1,
                            "created_utc": 1638316800.5,
                            "replies": ""
                        }
                    }
                ]
            }
        }"#;

        let comments = decode(body).into_comments();
        assert_eq!(comments[0].created, 1_638_316_800);
    }

    #[test]
    fn search_listing_decodes_submissions_and_ignores_other_kinds() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    { "kind": "t3", "data": { "id": "s1", "title": "Policy thread" } },
                    { "kind": "t5", "data": { "display_name": "india" } },
                    { "kind": "t3", "data": { "id": "s2", "title": "Another thread" } }
                ]
            }
        }"#;

        let submissions = decode(body).into_submissions();
        let ids: Vec<&str> = submissions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);
        assert_eq!(submissions[0].title, "Policy thread");
    }

    #[test]
    fn empty_listing_flattens_to_no_comments() {
        let body = r#"{ "kind": "Listing", "data": { "children": [] } }"#;
        assert!(decode(body).into_comments().is_empty());
    }

    #[test]
    fn token_payload_decodes_grant_errors() {
        let dto: AccessTokenDto =
            serde_json::from_str(r#"{ "error": "invalid_grant" }"#).expect("decode");
        assert_eq!(dto.error.as_deref(), Some("invalid_grant"));
        assert!(dto.access_token.is_empty());

        let dto: AccessTokenDto = serde_json::from_str(
            r#"{ "access_token": "abc123", "token_type": "bearer", "expires_in": 3600 }"#,
        )
        .expect("decode");
        assert_eq!(dto.access_token, "abc123");
        assert_eq!(dto.expires_in, 3600);
        assert!(dto.error.is_none());
    }
}
