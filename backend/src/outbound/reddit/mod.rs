//! Reddit source adapter: OAuth2 token handling, search, and comment-tree
//! retrieval over the platform's JSON API.

mod dto;
mod http_source;

pub use http_source::RedditHttpSource;
